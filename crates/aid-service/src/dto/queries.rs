//! Query-string DTOs for list endpoints
//!
//! Enum filters arrive as text; an empty value or `All` means no filter.

use aid_core::{
    ClientFilter, DistributionFilter, DomainError, DonationFilter, DonorFilter, MemberFilter,
};
use chrono::NaiveDate;
use serde::Deserialize;

fn filter_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && v != "All")
}

fn parse_filter<T>(value: Option<String>) -> Result<Option<T>, DomainError>
where
    T: std::str::FromStr<Err = DomainError>,
{
    filter_text(value).map(|v| v.parse()).transpose()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemberQuery {
    pub search: Option<String>,
    pub status: Option<String>,
}

impl TryFrom<MemberQuery> for MemberFilter {
    type Error = DomainError;

    fn try_from(q: MemberQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            search: filter_text(q.search),
            status: parse_filter(q.status)?,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientQuery {
    pub search: Option<String>,
    pub status: Option<String>,
}

impl TryFrom<ClientQuery> for ClientFilter {
    type Error = DomainError;

    fn try_from(q: ClientQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            search: filter_text(q.search),
            status: parse_filter(q.status)?,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DonorQuery {
    pub donor_type: Option<String>,
    pub search: Option<String>,
}

impl TryFrom<DonorQuery> for DonorFilter {
    type Error = DomainError;

    fn try_from(q: DonorQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            donor_type: parse_filter(q.donor_type)?,
            search: filter_text(q.search),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DonationQuery {
    pub status: Option<String>,
    pub search: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub donor_type: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl TryFrom<DonationQuery> for DonationFilter {
    type Error = DomainError;

    fn try_from(q: DonationQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            status: parse_filter(q.status)?,
            search: filter_text(q.search),
            start_date: q.start_date,
            end_date: q.end_date,
            donor_type: parse_filter(q.donor_type)?,
            ..Self::default()
        }
        .with_page(q.limit, q.offset))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DistributionQuery {
    pub client_id: Option<i64>,
    pub assistance_type: Option<String>,
    pub status: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub search: Option<String>,
}

impl TryFrom<DistributionQuery> for DistributionFilter {
    type Error = DomainError;

    fn try_from(q: DistributionQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            client_id: q.client_id,
            assistance_type: parse_filter(q.assistance_type)?,
            status: parse_filter(q.status)?,
            start_date: q.start_date,
            end_date: q.end_date,
            search: filter_text(q.search),
        })
    }
}

/// `?month=&year=` for donation statistics; absent parts mean the current month
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct StatsQuery {
    pub month: Option<u32>,
    pub year: Option<i32>,
}

/// `?days=` window for expiring medical donations
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ExpiringQuery {
    pub days: Option<i32>,
}
