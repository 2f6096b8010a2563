//! Partial-update statement builder
//!
//! Turns a change-set of [`Patch`] fields into one parameterized
//! `UPDATE ... SET ... WHERE id = $n` covering only the supplied columns.
//!
//! Each field is staged by an explicit call naming its column, so column
//! names are always static strings and never come from request input.
//! Validation runs while staging: the first failure aborts and nothing is
//! executed. An empty builder refuses to execute with `NothingToUpdate`.
//!
//! ```rust,ignore
//! let mut update = UpdateBuilder::new("clients");
//! update.required("name", changes.name, validators::not_blank("Name"))?;
//! update.optional("phone", changes.phone, |p| validators::validate_phone(p))?;
//! let found = update.execute(id, &mut *tx).await?;
//! ```

use aid_core::error::DomainError;
use aid_core::traits::RepoResult;
use aid_core::value_objects::Patch;
use aid_core::{
    ActivityStatus, AssistanceType, ClientStatus, DistributionStatus, DonationStatus, Gender,
    MedicalCategory, MedicalDonationStatus,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{Executor, Postgres, QueryBuilder};

use crate::repositories::error::map_db_error;

/// A staged column value; `None` writes SQL NULL of the column's type
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(Option<String>),
    Int(Option<i32>),
    BigInt(Option<i64>),
    Decimal(Option<Decimal>),
    Date(Option<NaiveDate>),
}

impl FieldValue {
    fn push_bind(self, qb: &mut QueryBuilder<'static, Postgres>) {
        match self {
            Self::Text(v) => qb.push_bind(v),
            Self::Int(v) => qb.push_bind(v),
            Self::BigInt(v) => qb.push_bind(v),
            Self::Decimal(v) => qb.push_bind(v),
            Self::Date(v) => qb.push_bind(v),
        };
    }

    /// True if this stages a NULL
    pub fn is_null(&self) -> bool {
        match self {
            Self::Text(v) => v.is_none(),
            Self::Int(v) => v.is_none(),
            Self::BigInt(v) => v.is_none(),
            Self::Decimal(v) => v.is_none(),
            Self::Date(v) => v.is_none(),
        }
    }
}

/// Types that can be staged into an update
pub trait IntoFieldValue: Sized {
    fn into_field(value: Option<Self>) -> FieldValue;
}

impl IntoFieldValue for String {
    fn into_field(value: Option<Self>) -> FieldValue {
        FieldValue::Text(value)
    }
}

impl IntoFieldValue for i32 {
    fn into_field(value: Option<Self>) -> FieldValue {
        FieldValue::Int(value)
    }
}

impl IntoFieldValue for i64 {
    fn into_field(value: Option<Self>) -> FieldValue {
        FieldValue::BigInt(value)
    }
}

impl IntoFieldValue for Decimal {
    fn into_field(value: Option<Self>) -> FieldValue {
        FieldValue::Decimal(value)
    }
}

impl IntoFieldValue for NaiveDate {
    fn into_field(value: Option<Self>) -> FieldValue {
        FieldValue::Date(value)
    }
}

macro_rules! text_column {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl IntoFieldValue for $ty {
                fn into_field(value: Option<Self>) -> FieldValue {
                    FieldValue::Text(value.map(|v| v.as_str().to_string()))
                }
            }
        )+
    };
}

text_column!(
    ActivityStatus,
    ClientStatus,
    DonationStatus,
    MedicalDonationStatus,
    DistributionStatus,
    Gender,
    MedicalCategory,
    AssistanceType,
);

/// Accumulates validated column assignments for one row
#[derive(Debug, Clone)]
pub struct UpdateBuilder {
    table: &'static str,
    id_column: &'static str,
    staged: Vec<(&'static str, FieldValue)>,
}

impl UpdateBuilder {
    /// Builder for a table keyed by `id`
    pub fn new(table: &'static str) -> Self {
        Self::with_id_column(table, "id")
    }

    pub fn with_id_column(table: &'static str, id_column: &'static str) -> Self {
        Self {
            table,
            id_column,
            staged: Vec::new(),
        }
    }

    /// Stage a NOT NULL column. `Clear` is rejected.
    pub fn required<T, V>(
        &mut self,
        column: &'static str,
        patch: Patch<T>,
        validate: V,
    ) -> Result<&mut Self, DomainError>
    where
        T: IntoFieldValue,
        V: FnOnce(&T) -> Result<(), DomainError>,
    {
        match patch {
            Patch::Unchanged => Ok(self),
            Patch::Clear => Err(DomainError::validation(format!("{column} cannot be null"))),
            Patch::Set(value) => {
                validate(&value)?;
                Ok(self.set(column, value))
            }
        }
    }

    /// Stage a nullable column. `Clear` writes NULL without validation.
    pub fn optional<T, V>(
        &mut self,
        column: &'static str,
        patch: Patch<T>,
        validate: V,
    ) -> Result<&mut Self, DomainError>
    where
        T: IntoFieldValue,
        V: FnOnce(&T) -> Result<(), DomainError>,
    {
        match patch {
            Patch::Unchanged => Ok(self),
            Patch::Clear => Ok(self.set_null::<T>(column)),
            Patch::Set(value) => {
                validate(&value)?;
                Ok(self.set(column, value))
            }
        }
    }

    /// Stage an already-validated value
    pub fn set<T: IntoFieldValue>(&mut self, column: &'static str, value: T) -> &mut Self {
        self.stage(column, T::into_field(Some(value)))
    }

    /// Stage a typed NULL
    pub fn set_null<T: IntoFieldValue>(&mut self, column: &'static str) -> &mut Self {
        self.stage(column, T::into_field(None))
    }

    // A column staged twice keeps the later value.
    fn stage(&mut self, column: &'static str, value: FieldValue) -> &mut Self {
        if let Some(slot) = self.staged.iter_mut().find(|(c, _)| *c == column) {
            slot.1 = value;
        } else {
            self.staged.push((column, value));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }

    pub fn len(&self) -> usize {
        self.staged.len()
    }

    /// Staged column names, in staging order
    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.staged.iter().map(|(c, _)| *c)
    }

    /// Staged value for a column
    pub fn value(&self, column: &str) -> Option<&FieldValue> {
        self.staged
            .iter()
            .find(|(c, _)| *c == column)
            .map(|(_, v)| v)
    }

    /// Render the statement for row `id`
    ///
    /// # Errors
    /// `NothingToUpdate` if no column was staged
    pub fn build(self, id: i64) -> Result<QueryBuilder<'static, Postgres>, DomainError> {
        if self.staged.is_empty() {
            return Err(DomainError::NothingToUpdate);
        }

        let mut qb = QueryBuilder::new(format!("UPDATE {} SET ", self.table));
        for (column, value) in self.staged {
            qb.push(column).push(" = ");
            value.push_bind(&mut qb);
            qb.push(", ");
        }
        qb.push("updated_at = NOW() WHERE ")
            .push(self.id_column)
            .push(" = ")
            .push_bind(id);

        Ok(qb)
    }

    /// Execute against row `id`; `Ok(false)` when no row matched
    pub async fn execute<'e, E>(self, id: i64, executor: E) -> RepoResult<bool>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.execute_with(id, executor, map_db_error).await
    }

    /// Execute, mapping database errors with `on_error`
    pub async fn execute_with<'e, E, F>(self, id: i64, executor: E, on_error: F) -> RepoResult<bool>
    where
        E: Executor<'e, Database = Postgres>,
        F: FnOnce(sqlx::Error) -> DomainError,
    {
        let mut qb = self.build(id)?;
        let result = qb.build().execute(executor).await.map_err(on_error)?;
        Ok(result.rows_affected() > 0)
    }
}
