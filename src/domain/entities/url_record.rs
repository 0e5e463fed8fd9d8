//! URL record entity representing an alias → target URL mapping.

/// A persisted alias mapping.
///
/// Records are immutable once created: the only lifecycle transition after
/// insertion is deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    /// Surrogate key assigned by the store. Monotonic, never reused.
    pub id: i64,
    /// Short opaque token, unique among live records. Case-sensitive.
    pub alias: String,
    /// Destination URL, stored byte-for-byte as supplied.
    pub target_url: String,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(id: i64, alias: String, target_url: String) -> Self {
        Self {
            id,
            alias,
            target_url,
        }
    }
}

/// Input data for inserting a new record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlRecord {
    pub alias: String,
    pub target_url: String,
}

impl NewUrlRecord {
    pub fn new(alias: impl Into<String>, target_url: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            target_url: target_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_record_creation() {
        let record = UrlRecord::new(
            1,
            "ex1".to_string(),
            "https://example.com/a".to_string(),
        );

        assert_eq!(record.id, 1);
        assert_eq!(record.alias, "ex1");
        assert_eq!(record.target_url, "https://example.com/a");
    }

    #[test]
    fn test_new_url_record_keeps_case() {
        let new_record = NewUrlRecord::new("Qx7p2M", "https://example.com/b");

        assert_eq!(new_record.alias, "Qx7p2M");
        assert_ne!(new_record.alias, "qx7p2m");
        assert_eq!(new_record.target_url, "https://example.com/b");
    }
}
