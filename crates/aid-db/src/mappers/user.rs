//! User model -> entity mapper

use aid_core::entities::User;

use crate::models::UserModel;

/// The password hash stays behind in the model
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            name: model.name,
            email: model.email,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
