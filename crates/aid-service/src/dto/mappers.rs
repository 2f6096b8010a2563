//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use aid_core::{
    Client, Distribution, DistributionStats, Donation, DonationStats, Donor, LifeMember,
    MedicalDonation, MedicalDonationStats, User,
};

use super::responses::{
    ClientResponse, DistributionResponse, DistributionStatsResponse, DonationResponse,
    DonationStatsResponse, DonorResponse, MedicalDonationResponse, MedicalDonationStatsResponse,
    MemberResponse, UserResponse,
};

/// Map a list of entities to their responses
pub fn map_all<E, R>(items: Vec<E>) -> Vec<R>
where
    R: From<E>,
{
    items.into_iter().map(R::from).collect()
}

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Donor / Member Mappers
// ============================================================================

impl From<Donor> for DonorResponse {
    fn from(donor: Donor) -> Self {
        Self {
            id: donor.id,
            name: donor.name,
            email: donor.email,
            phone: donor.phone,
            address: donor.address,
            donor_type: donor.donor_type,
            status: donor.status,
            created_at: donor.created_at,
            updated_at: donor.updated_at,
        }
    }
}

impl From<LifeMember> for MemberResponse {
    fn from(member: LifeMember) -> Self {
        Self {
            id: member.id,
            donor_id: member.donor_id,
            name: member.name,
            email: member.email,
            phone: member.phone,
            address: member.address,
            aadhar_number: member.aadhar_number,
            join_date: member.join_date,
            join_time: member.join_time,
            membership_status: member.membership_status,
            donor_status: member.donor_status,
            created_at: member.created_at,
            updated_at: member.updated_at,
        }
    }
}

// ============================================================================
// Client Mappers
// ============================================================================

impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            name: client.name,
            age: client.age,
            gender: client.gender,
            phone: client.phone,
            address: client.address,
            city: client.city,
            state: client.state,
            zip: client.zip,
            aadhaar: client.aadhaar,
            status: client.status,
            notes: client.notes,
            created_at: client.created_at,
            updated_at: client.updated_at,
        }
    }
}

// ============================================================================
// Donation Mappers
// ============================================================================

impl From<Donation> for DonationResponse {
    fn from(d: Donation) -> Self {
        Self {
            id: d.id,
            donor_id: d.donor_id,
            donor_name: d.donor_name,
            donor_type: d.donor_type,
            donor_email: d.donor_email,
            donor_phone: d.donor_phone,
            amount: d.amount,
            date: d.date,
            payment_mode: d.payment_mode,
            purpose: d.purpose,
            status: d.status,
            notes: d.notes,
            created_at: d.created_at,
            updated_at: d.updated_at,
        }
    }
}

impl From<DonationStats> for DonationStatsResponse {
    fn from(s: DonationStats) -> Self {
        Self {
            total_amount: s.total_amount,
            total_count: s.total_count,
            completed_count: s.completed_count,
            pending_count: s.pending_count,
            monthly_amount: s.monthly_amount,
        }
    }
}

impl From<MedicalDonation> for MedicalDonationResponse {
    fn from(d: MedicalDonation) -> Self {
        Self {
            id: d.id,
            donor_id: d.donor_id,
            donor_name: d.donor_name,
            donor_email: d.donor_email,
            donor_phone: d.donor_phone,
            item_name: d.item_name,
            category: d.category,
            strength: d.strength,
            quantity: d.quantity,
            expiry_date: d.expiry_date,
            status: d.status,
            donation_date: d.donation_date,
            created_at: d.created_at,
            updated_at: d.updated_at,
        }
    }
}

impl From<MedicalDonationStats> for MedicalDonationStatsResponse {
    fn from(s: MedicalDonationStats) -> Self {
        Self {
            total_donations: s.total_donations,
            total_quantity: s.total_quantity,
            unique_donors: s.unique_donors,
            pending_count: s.pending_count,
            approved_count: s.approved_count,
            collected_count: s.collected_count,
            rejected_count: s.rejected_count,
            expired_count: s.expired_count,
            expiring_soon_count: s.expiring_soon_count,
        }
    }
}

// ============================================================================
// Distribution Mappers
// ============================================================================

impl From<Distribution> for DistributionResponse {
    fn from(d: Distribution) -> Self {
        Self {
            id: d.id,
            client_id: d.client_id,
            client_name: d.client_name,
            client_phone: d.client_phone,
            client_address: d.client_address,
            client_city: d.client_city,
            client_state: d.client_state,
            assistance_type: d.assistance_type,
            amount: d.amount,
            quantity: d.quantity,
            unit: d.unit,
            description: d.description,
            assistance_date: d.assistance_date,
            status: d.status,
            created_at: d.created_at,
            updated_at: d.updated_at,
        }
    }
}

impl From<DistributionStats> for DistributionStatsResponse {
    fn from(s: DistributionStats) -> Self {
        Self {
            total_distributions: s.total_distributions,
            provided_count: s.provided_count,
            pending_count: s.pending_count,
            cancelled_count: s.cancelled_count,
            total_money_distributed: s.total_money_distributed,
            total_medicine_distributed: s.total_medicine_distributed,
            total_equipment_distributed: s.total_equipment_distributed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aid_core::{ActivityStatus, DonorType};
    use chrono::Utc;

    #[test]
    fn test_map_all_donors() {
        let now = Utc::now();
        let donors = vec![Donor {
            id: 1,
            name: "Asha".to_string(),
            email: None,
            phone: Some("9876543210".to_string()),
            address: None,
            donor_type: DonorType::LifeMember,
            status: ActivityStatus::Active,
            created_at: now,
            updated_at: now,
        }];
        let mapped: Vec<DonorResponse> = map_all(donors);
        assert_eq!(mapped.len(), 1);

        let json = serde_json::to_value(&mapped[0]).unwrap();
        assert_eq!(json["donor_type"], "Life Member");
        assert_eq!(json["phone"], "9876543210");
    }
}
