//! Field validators shared by create and update paths
//!
//! Each validator returns a `DomainError::ValidationError` carrying the
//! message shown to the operator.

use rust_decimal::Decimal;
use validator::ValidateEmail;

use crate::error::DomainError;

/// Digits in an Indian mobile number
pub const PHONE_DIGITS: usize = 10;
/// Digits in an Aadhaar number
pub const AADHAAR_DIGITS: usize = 12;
/// Upper bound accepted for a client's age
pub const MAX_AGE: i32 = 150;

/// True if `value` is exactly `len` ASCII digits
pub fn is_exact_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}

/// Email must be well formed and carry a dotted domain
pub fn validate_email(email: &str) -> Result<(), DomainError> {
    let has_dotted_domain = email
        .rsplit_once('@')
        .is_some_and(|(_, domain)| domain.contains('.') && !domain.ends_with('.'));

    if email.validate_email() && has_dotted_domain {
        Ok(())
    } else {
        Err(DomainError::InvalidEmail)
    }
}

pub fn validate_phone(phone: &str) -> Result<(), DomainError> {
    if is_exact_digits(phone, PHONE_DIGITS) {
        Ok(())
    } else {
        Err(DomainError::validation("Phone number must be exactly 10 digits"))
    }
}

/// Aadhaar on a client record
pub fn validate_aadhaar(aadhaar: &str) -> Result<(), DomainError> {
    if is_exact_digits(aadhaar, AADHAAR_DIGITS) {
        Ok(())
    } else {
        Err(DomainError::validation("Aadhaar must be exactly 12 digits"))
    }
}

/// Aadhar number on a life member record
pub fn validate_aadhar_number(aadhar: &str) -> Result<(), DomainError> {
    if is_exact_digits(aadhar, AADHAAR_DIGITS) {
        Ok(())
    } else {
        Err(DomainError::validation("Aadhar number must be exactly 12 digits"))
    }
}

/// Build a validator rejecting empty or whitespace-only text
pub fn not_blank(label: &'static str) -> impl Fn(&String) -> Result<(), DomainError> {
    move |value: &String| {
        if value.trim().is_empty() {
            Err(DomainError::validation(format!("{label} cannot be empty")))
        } else {
            Ok(())
        }
    }
}

pub fn validate_amount(amount: &Decimal) -> Result<(), DomainError> {
    if amount.is_sign_positive() && !amount.is_zero() {
        Ok(())
    } else {
        Err(DomainError::validation("Amount must be greater than 0"))
    }
}

pub fn validate_quantity(quantity: &i32) -> Result<(), DomainError> {
    if *quantity >= 1 {
        Ok(())
    } else {
        Err(DomainError::validation("Quantity must be at least 1"))
    }
}

pub fn validate_age(age: &i32) -> Result<(), DomainError> {
    if (0..=MAX_AGE).contains(age) {
        Ok(())
    } else {
        Err(DomainError::validation("Age must be between 0 and 150"))
    }
}

/// Accepts any value; for fields whose type already encodes validity
pub fn accept<T: ?Sized>(_: &T) -> Result<(), DomainError> {
    Ok(())
}
