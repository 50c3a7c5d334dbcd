//! Neo4j deserialization helpers for node conversion functions.
//!
//! Extension trait that maps missing or malformed node properties onto
//! [`RepoError`] so the repositories can use `?` throughout.

use neo4rs::Node;

use crate::infrastructure::ports::RepoError;

/// Extension trait for Neo4j Node to simplify common deserialization patterns.
pub(super) trait NodeExt {
    /// Get a required string property (fail-fast).
    fn get_string_strict(&self, field: &str) -> Result<String, RepoError>;

    /// Get a string property with a default value if missing.
    fn get_string_or(&self, field: &str, default: &str) -> String;

    /// Get an i64 property with a default value if missing.
    fn get_i64_or(&self, field: &str, default: i64) -> i64;

    /// Get and deserialize a required JSON-encoded property (fail-fast).
    fn get_json_strict<T: serde::de::DeserializeOwned>(&self, field: &str) -> Result<T, RepoError>;

    /// Get and deserialize a JSON-encoded property that may be absent.
    ///
    /// Absent properties are `Ok(None)`; present but malformed ones are errors.
    fn get_optional_json<T: serde::de::DeserializeOwned>(
        &self,
        field: &str,
    ) -> Result<Option<T>, RepoError>;
}

impl NodeExt for Node {
    fn get_string_strict(&self, field: &str) -> Result<String, RepoError> {
        self.get(field).map_err(|e| {
            RepoError::database(
                "query",
                format!("Missing required field '{}': {}", field, e),
            )
        })
    }

    fn get_string_or(&self, field: &str, default: &str) -> String {
        self.get(field).unwrap_or_else(|_| default.to_string())
    }

    fn get_i64_or(&self, field: &str, default: i64) -> i64 {
        self.get(field).unwrap_or(default)
    }

    fn get_json_strict<T: serde::de::DeserializeOwned>(&self, field: &str) -> Result<T, RepoError> {
        let s = self.get_string_strict(field)?;
        parse_json(field, &s)
    }

    fn get_optional_json<T: serde::de::DeserializeOwned>(
        &self,
        field: &str,
    ) -> Result<Option<T>, RepoError> {
        match self.get::<String>(field) {
            Ok(s) => parse_json(field, &s).map(Some),
            Err(_) => Ok(None),
        }
    }
}

fn parse_json<T: serde::de::DeserializeOwned>(field: &str, s: &str) -> Result<T, RepoError> {
    serde_json::from_str(s).map_err(|e| {
        RepoError::serialization(format!(
            "Invalid JSON in field '{}': {} (value: '{}')",
            field, e, s
        ))
    })
}

/// Encode a value as a JSON property.
pub(super) fn to_json<T: serde::Serialize>(value: &T) -> Result<String, RepoError> {
    serde_json::to_string(value).map_err(RepoError::serialization)
}
