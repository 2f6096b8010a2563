//! Model to entity mappers
//!
//! Rows with text-backed enum columns convert with `TryFrom`: a value the
//! domain does not recognize surfaces as a database error naming the column.

mod client;
mod distribution;
mod donation;
mod donor;
mod medical_donation;
mod member;
mod user;

use std::str::FromStr;

use aid_core::error::DomainError;

use crate::repositories::error::corrupt_column;

/// Parse a stored enum column
pub(crate) fn parse_column<T>(column: &str, value: &str) -> Result<T, DomainError>
where
    T: FromStr<Err = DomainError>,
{
    value.parse().map_err(|e| corrupt_column(column, &e))
}

/// Convert a list of rows, failing on the first bad row
pub(crate) fn collect_rows<M, E>(rows: Vec<M>) -> Result<Vec<E>, DomainError>
where
    E: TryFrom<M, Error = DomainError>,
{
    rows.into_iter().map(E::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aid_core::ClientStatus;

    #[test]
    fn test_parse_column_names_the_column() {
        let status: ClientStatus = parse_column("status", "Dead").unwrap();
        assert_eq!(status, ClientStatus::Dead);

        let err = parse_column::<ClientStatus>("status", "Archived").unwrap_err();
        assert!(matches!(err, DomainError::DatabaseError(_)));
        assert!(err.to_string().contains("unexpected value in status"));
    }
}
