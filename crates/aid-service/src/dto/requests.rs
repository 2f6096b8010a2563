//! Request DTOs for API endpoints
//!
//! Create requests keep every field optional so that missing values produce
//! the operator-facing "required" messages instead of a JSON shape error;
//! the `TryFrom` conversions into domain inputs do those checks. Update
//! requests use [`Patch`] so absent, null and supplied values stay distinct.

use aid_core::value_objects::validators;
use aid_core::{
    ClientChanges, DistributionChanges, DomainError, DonationChanges, DonorRef, MedicalDonationChanges,
    MemberChanges, NewClient, NewDistribution, NewDonation, NewLifeMember, NewMedicalDonation,
    Patch,
};
use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::de::IgnoredAny;
use serde::Deserialize;
use validator::Validate;

/// Trimmed value, or `None` when absent or blank
fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Refuse a write to a field that is fixed after creation
fn reject_immutable(patch: &Patch<IgnoredAny>, field: &'static str) -> Result<(), DomainError> {
    if patch.is_present() {
        Err(DomainError::ImmutableField(field))
    } else {
        Ok(())
    }
}

fn parse_optional<T>(value: Option<String>) -> Result<Option<T>, DomainError>
where
    T: std::str::FromStr<Err = DomainError>,
{
    present(value).map(|v| v.parse()).transpose()
}

fn check_optional<T: ?Sized>(
    value: Option<&T>,
    check: impl FnOnce(&T) -> Result<(), DomainError>,
) -> Result<(), DomainError> {
    value.map_or(Ok(()), check)
}

// ============================================================================
// Auth Requests
// ============================================================================

/// Operator registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

/// Operator login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email and password are required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Email and password are required"))]
    pub password: String,
}

// ============================================================================
// Member Requests
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateMemberRequest {
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub aadhar_number: Option<String>,
    pub join_date: Option<NaiveDate>,
    pub join_time: Option<NaiveTime>,
}

impl TryFrom<CreateMemberRequest> for NewLifeMember {
    type Error = DomainError;

    fn try_from(req: CreateMemberRequest) -> Result<Self, Self::Error> {
        let (Some(name), Some(email), Some(join_date)) =
            (present(req.name), present(req.email), req.join_date)
        else {
            return Err(DomainError::validation(
                "Name, email, and join date are required",
            ));
        };

        validators::validate_email(&email)?;
        let phone = present(req.phone);
        check_optional(phone.as_deref(), validators::validate_phone)?;
        let aadhar_number = present(req.aadhar_number);
        check_optional(aadhar_number.as_deref(), validators::validate_aadhar_number)?;

        Ok(Self {
            name,
            email,
            phone,
            address: present(req.address),
            aadhar_number,
            join_date,
            join_time: req.join_time,
        })
    }
}

/// Partial member update; the identity fields are rejected if sent
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMemberRequest {
    #[serde(default)]
    pub name: Patch<String>,
    #[serde(default)]
    pub email: Patch<String>,
    #[serde(default)]
    pub phone: Patch<String>,
    #[serde(default)]
    pub address: Patch<String>,
    #[serde(default)]
    pub membership_status: Patch<String>,

    #[serde(default)]
    pub aadhar_number: Patch<IgnoredAny>,
    #[serde(default)]
    pub join_date: Patch<IgnoredAny>,
    #[serde(default)]
    pub join_time: Patch<IgnoredAny>,
}

impl TryFrom<UpdateMemberRequest> for MemberChanges {
    type Error = DomainError;

    fn try_from(req: UpdateMemberRequest) -> Result<Self, Self::Error> {
        reject_immutable(&req.aadhar_number, "Aadhar number")?;
        reject_immutable(&req.join_date, "Join date")?;
        reject_immutable(&req.join_time, "Join time")?;

        Ok(Self {
            name: req.name,
            email: req.email,
            phone: req.phone,
            address: req.address,
            membership_status: req.membership_status.try_map(|s| s.parse())?,
        })
    }
}

// ============================================================================
// Client Requests
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateClientRequest {
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name: Option<String>,
    #[validate(range(min = 0, max = 150, message = "Age must be between 0 and 150"))]
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub aadhaar: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

impl TryFrom<CreateClientRequest> for NewClient {
    type Error = DomainError;

    fn try_from(req: CreateClientRequest) -> Result<Self, Self::Error> {
        let (Some(name), Some(address), Some(city), Some(state), Some(zip), Some(aadhaar)) = (
            present(req.name),
            present(req.address),
            present(req.city),
            present(req.state),
            present(req.zip),
            present(req.aadhaar),
        ) else {
            return Err(DomainError::validation(
                "Name, address, city, state, zip, and Aadhaar are required",
            ));
        };

        let phone = present(req.phone);
        check_optional(phone.as_deref(), validators::validate_phone)?;
        validators::validate_aadhaar(&aadhaar)?;
        check_optional(req.age.as_ref(), validators::validate_age)?;

        Ok(Self {
            name,
            age: req.age,
            gender: parse_optional(req.gender)?,
            phone,
            address,
            city,
            state,
            zip,
            aadhaar,
            status: parse_optional(req.status)?.unwrap_or_default(),
            notes: present(req.notes),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateClientRequest {
    #[serde(default)]
    pub name: Patch<String>,
    #[serde(default)]
    pub age: Patch<i32>,
    #[serde(default)]
    pub gender: Patch<String>,
    #[serde(default)]
    pub phone: Patch<String>,
    #[serde(default)]
    pub address: Patch<String>,
    #[serde(default)]
    pub city: Patch<String>,
    #[serde(default)]
    pub state: Patch<String>,
    #[serde(default)]
    pub zip: Patch<String>,
    #[serde(default)]
    pub status: Patch<String>,
    #[serde(default)]
    pub notes: Patch<String>,

    #[serde(default)]
    pub aadhaar: Patch<IgnoredAny>,
}

impl TryFrom<UpdateClientRequest> for ClientChanges {
    type Error = DomainError;

    fn try_from(req: UpdateClientRequest) -> Result<Self, Self::Error> {
        reject_immutable(&req.aadhaar, "Aadhaar")?;

        Ok(Self {
            name: req.name,
            age: req.age,
            gender: req.gender.blank_as_clear().try_map(|g| g.parse())?,
            phone: req.phone,
            address: req.address,
            city: req.city,
            state: req.state,
            zip: req.zip,
            status: req.status.try_map(|s| s.parse())?,
            notes: req.notes,
        })
    }
}

// ============================================================================
// Donation Requests
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateDonationRequest {
    pub donor_id: Option<i64>,
    pub donor_name: Option<String>,
    pub amount: Option<Decimal>,
    pub date: Option<NaiveDate>,
    #[validate(length(max = 50, message = "Payment mode must be at most 50 characters"))]
    pub payment_mode: Option<String>,
    pub purpose: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

impl TryFrom<CreateDonationRequest> for NewDonation {
    type Error = DomainError;

    fn try_from(req: CreateDonationRequest) -> Result<Self, Self::Error> {
        let (Some(amount), Some(date), Some(payment_mode), Some(purpose)) = (
            req.amount,
            req.date,
            present(req.payment_mode),
            present(req.purpose),
        ) else {
            return Err(DomainError::validation(
                "Missing required fields: amount, date, payment_mode, purpose",
            ));
        };

        let donor = DonorRef::from_parts(req.donor_id, req.donor_name).ok_or_else(|| {
            DomainError::validation("Either donor_id or donor_name must be provided")
        })?;
        validators::validate_amount(&amount)?;

        Ok(Self {
            donor,
            amount,
            date,
            payment_mode,
            purpose,
            status: parse_optional(req.status)?.unwrap_or_default(),
            notes: present(req.notes),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateDonationRequest {
    pub donor_id: Option<i64>,
    pub donor_name: Option<String>,
    #[serde(default)]
    pub amount: Patch<Decimal>,
    #[serde(default)]
    pub date: Patch<NaiveDate>,
    #[serde(default)]
    pub payment_mode: Patch<String>,
    #[serde(default)]
    pub purpose: Patch<String>,
    #[serde(default)]
    pub status: Patch<String>,
    #[serde(default)]
    pub notes: Patch<String>,
}

impl TryFrom<UpdateDonationRequest> for DonationChanges {
    type Error = DomainError;

    fn try_from(req: UpdateDonationRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            donor: DonorRef::from_parts(req.donor_id, req.donor_name),
            amount: req.amount,
            date: req.date,
            payment_mode: req.payment_mode,
            purpose: req.purpose,
            status: req.status.try_map(|s| s.parse())?,
            notes: req.notes,
        })
    }
}

// ============================================================================
// Medical Donation Requests
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateMedicalDonationRequest {
    pub donor_id: Option<i64>,
    pub donor_name: Option<String>,
    #[validate(length(max = 255, message = "Item name must be at most 255 characters"))]
    pub item_name: Option<String>,
    pub category: Option<String>,
    pub strength: Option<String>,
    pub quantity: Option<i32>,
    pub expiry_date: Option<NaiveDate>,
    pub status: Option<String>,
}

impl TryFrom<CreateMedicalDonationRequest> for NewMedicalDonation {
    type Error = DomainError;

    fn try_from(req: CreateMedicalDonationRequest) -> Result<Self, Self::Error> {
        let donor = DonorRef::from_parts(req.donor_id, req.donor_name)
            .ok_or_else(|| DomainError::validation("Either donor_id or donor_name is required"))?;

        let (Some(item_name), Some(category), Some(quantity)) =
            (present(req.item_name), present(req.category), req.quantity)
        else {
            return Err(DomainError::validation(
                "Missing required fields: item_name, category, quantity",
            ));
        };
        validators::validate_quantity(&quantity)?;

        Self {
            donor,
            item_name,
            category: category.parse()?,
            strength: present(req.strength),
            quantity,
            expiry_date: req.expiry_date,
            status: parse_optional(req.status)?.unwrap_or_default(),
        }
        .normalized()
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMedicalDonationRequest {
    pub donor_id: Option<i64>,
    pub donor_name: Option<String>,
    #[serde(default)]
    pub item_name: Patch<String>,
    #[serde(default)]
    pub category: Patch<String>,
    #[serde(default)]
    pub strength: Patch<String>,
    #[serde(default)]
    pub quantity: Patch<i32>,
    #[serde(default)]
    pub expiry_date: Patch<NaiveDate>,
    #[serde(default)]
    pub status: Patch<String>,
}

impl TryFrom<UpdateMedicalDonationRequest> for MedicalDonationChanges {
    type Error = DomainError;

    fn try_from(req: UpdateMedicalDonationRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            donor: DonorRef::from_parts(req.donor_id, req.donor_name),
            item_name: req.item_name,
            category: req.category.try_map(|c| c.parse())?,
            strength: req.strength.blank_as_clear(),
            quantity: req.quantity,
            expiry_date: req.expiry_date,
            status: req.status.try_map(|s| s.parse())?,
        })
    }
}

// ============================================================================
// Distribution Requests
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateDistributionRequest {
    pub client_id: Option<i64>,
    pub assistance_type: Option<String>,
    pub amount: Option<Decimal>,
    pub quantity: Option<i32>,
    #[validate(length(max = 50, message = "Unit must be at most 50 characters"))]
    pub unit: Option<String>,
    pub description: Option<String>,
    pub assistance_date: Option<NaiveDate>,
    pub status: Option<String>,
}

impl TryFrom<CreateDistributionRequest> for NewDistribution {
    type Error = DomainError;

    fn try_from(req: CreateDistributionRequest) -> Result<Self, Self::Error> {
        let (Some(client_id), Some(assistance_type), Some(assistance_date)) = (
            req.client_id,
            present(req.assistance_type),
            req.assistance_date,
        ) else {
            return Err(DomainError::validation(
                "Missing required fields: client_id, assistance_type, assistance_date",
            ));
        };

        check_optional(req.amount.as_ref(), validators::validate_amount)?;
        check_optional(req.quantity.as_ref(), validators::validate_quantity)?;

        Self {
            client_id,
            assistance_type: assistance_type.parse()?,
            amount: req.amount,
            quantity: req.quantity,
            unit: present(req.unit),
            description: present(req.description),
            assistance_date,
            status: parse_optional(req.status)?.unwrap_or_default(),
        }
        .normalized()
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateDistributionRequest {
    pub client_id: Option<i64>,
    #[serde(default)]
    pub assistance_type: Patch<String>,
    #[serde(default)]
    pub amount: Patch<Decimal>,
    #[serde(default)]
    pub quantity: Patch<i32>,
    #[serde(default)]
    pub unit: Patch<String>,
    #[serde(default)]
    pub description: Patch<String>,
    #[serde(default)]
    pub assistance_date: Patch<NaiveDate>,
    #[serde(default)]
    pub status: Patch<String>,
}

impl TryFrom<UpdateDistributionRequest> for DistributionChanges {
    type Error = DomainError;

    fn try_from(req: UpdateDistributionRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            client_id: req.client_id,
            assistance_type: req.assistance_type.try_map(|t| t.parse())?,
            amount: req.amount,
            quantity: req.quantity,
            unit: req.unit,
            description: req.description,
            assistance_date: req.assistance_date,
            status: req.status.try_map(|s| s.parse())?,
        })
    }
}

/// Body of the status-only PATCH endpoints
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct StatusRequest {
    pub status: Option<String>,
}
