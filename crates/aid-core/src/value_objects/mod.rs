//! Value objects - immutable types that represent domain concepts

/// Declares a closed set of text values stored as-is in the database.
///
/// Generates `as_str`, `Display`, serde (by the stored text) and a `FromStr`
/// that fails with the given operator-facing message.
macro_rules! text_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($invalid:literal) {
            $($variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            /// Every accepted value, in declaration order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The text stored in the database
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    _ => Err($crate::error::DomainError::validation($invalid)),
                }
            }
        }
    };
}

mod categories;
mod patch;
mod status;
pub mod validators;

pub use categories::{AssistanceType, DonorType, Gender, MedicalCategory};
pub use patch::Patch;
pub use status::{
    ActivityStatus, ClientStatus, DistributionStatus, DonationStatus, MedicalDonationStatus,
    StatusTransition,
};
