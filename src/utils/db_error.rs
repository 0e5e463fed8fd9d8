//! Classification of SQLx errors into the storage taxonomy.

use crate::domain::repositories::StoreError;

/// Returns true if the error is a unique-constraint violation.
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    db_err.is_unique_violation()
}

/// Maps an insert failure to [`StoreError`].
///
/// Unique violations become [`StoreError::Exists`]; anything else is
/// wrapped as [`StoreError::Other`].
pub fn classify_insert_error(e: sqlx::Error) -> StoreError {
    if is_unique_violation(&e) {
        StoreError::Exists
    } else {
        StoreError::Other(e.to_string())
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            other => StoreError::Other(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        assert_eq!(StoreError::from(sqlx::Error::RowNotFound), StoreError::NotFound);
    }

    #[test]
    fn test_pool_errors_map_to_other() {
        let err = StoreError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, StoreError::Other(_)));
    }

    #[test]
    fn test_non_database_error_is_not_unique_violation() {
        assert!(!is_unique_violation(&sqlx::Error::PoolClosed));
        assert!(matches!(
            classify_insert_error(sqlx::Error::PoolClosed),
            StoreError::Other(_)
        ));
    }
}
