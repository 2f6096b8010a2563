//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found")]
    UserNotFound(i64),

    #[error("Donor not found")]
    DonorNotFound(i64),

    #[error("Member not found")]
    MemberNotFound(i64),

    #[error("Client not found")]
    ClientNotFound(i64),

    #[error("Donation not found")]
    DonationNotFound(i64),

    #[error("Medical donation not found")]
    MedicalDonationNotFound(i64),

    #[error("Distribution not found")]
    DistributionNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("{0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("{0} cannot be changed after creation")]
    ImmutableField(&'static str),

    #[error("No fields to update")]
    NothingToUpdate,

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Cannot change status from {from} to {to}")]
    InvalidStatusTransition {
        from: &'static str,
        to: &'static str,
    },

    #[error("Cannot modify a {entity} marked as {status}")]
    TerminalState {
        entity: &'static str,
        status: &'static str,
    },

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Member with this email already exists")]
    MemberEmailExists,

    #[error("Member with this Aadhar number already exists")]
    MemberAadharExists,

    #[error("Client with this Aadhaar already exists")]
    ClientAadhaarExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Shorthand for a field-specific validation failure
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::DonorNotFound(_) => "UNKNOWN_DONOR",
            Self::MemberNotFound(_) => "UNKNOWN_MEMBER",
            Self::ClientNotFound(_) => "UNKNOWN_CLIENT",
            Self::DonationNotFound(_) => "UNKNOWN_DONATION",
            Self::MedicalDonationNotFound(_) => "UNKNOWN_MEDICAL_DONATION",
            Self::DistributionNotFound(_) => "UNKNOWN_DISTRIBUTION",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::ImmutableField(_) => "IMMUTABLE_FIELD",
            Self::NothingToUpdate => "NO_FIELDS_TO_UPDATE",

            // Business Rules
            Self::InvalidStatusTransition { .. } => "INVALID_STATUS_TRANSITION",
            Self::TerminalState { .. } => "TERMINAL_STATE",

            // Conflict
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",
            Self::MemberEmailExists => "MEMBER_EMAIL_EXISTS",
            Self::MemberAadharExists => "MEMBER_AADHAR_EXISTS",
            Self::ClientAadhaarExists => "CLIENT_AADHAAR_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::DonorNotFound(_)
                | Self::MemberNotFound(_)
                | Self::ClientNotFound(_)
                | Self::DonationNotFound(_)
                | Self::MedicalDonationNotFound(_)
                | Self::DistributionNotFound(_)
        )
    }

    /// Check if this is a validation error
    ///
    /// Rejected status transitions count as validation failures: the caller
    /// supplied a value the current row cannot accept.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidEmail
                | Self::ImmutableField(_)
                | Self::NothingToUpdate
                | Self::InvalidStatusTransition { .. }
                | Self::TerminalState { .. }
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::UserAlreadyExists
                | Self::MemberEmailExists
                | Self::MemberAadharExists
                | Self::ClientAadhaarExists
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(DomainError::MemberNotFound(5).code(), "UNKNOWN_MEMBER");
        assert_eq!(DomainError::NothingToUpdate.code(), "NO_FIELDS_TO_UPDATE");
        assert_eq!(DomainError::ImmutableField("Aadhaar").code(), "IMMUTABLE_FIELD");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::ClientNotFound(1).is_not_found());
        assert!(DomainError::DistributionNotFound(1).is_not_found());
        assert!(!DomainError::ClientAadhaarExists.is_not_found());
    }

    #[test]
    fn test_is_conflict() {
        assert!(DomainError::MemberEmailExists.is_conflict());
        assert!(DomainError::MemberAadharExists.is_conflict());
        assert!(!DomainError::NothingToUpdate.is_conflict());
    }

    #[test]
    fn test_transition_errors_are_validation() {
        let err = DomainError::InvalidStatusTransition {
            from: "Completed",
            to: "Pending",
        };
        assert!(err.is_validation());
        assert!(!err.is_conflict());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::InvalidStatusTransition {
            from: "Completed",
            to: "Pending",
        };
        assert_eq!(err.to_string(), "Cannot change status from Completed to Pending");

        assert_eq!(DomainError::NothingToUpdate.to_string(), "No fields to update");
        assert_eq!(
            DomainError::ImmutableField("Aadhaar").to_string(),
            "Aadhaar cannot be changed after creation"
        );
        assert_eq!(
            DomainError::ClientAadhaarExists.to_string(),
            "Client with this Aadhaar already exists"
        );
        assert_eq!(
            DomainError::validation("Phone number must be exactly 10 digits").to_string(),
            "Phone number must be exactly 10 digits"
        );
    }
}
