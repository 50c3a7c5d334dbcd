//! Unlocked roster codec.
//!
//! The player store keeps the unlocked roster as one text column holding a
//! JSON array. Older rows were written with bare numbers (`[1,3]`), newer ones
//! with strings (`["1","3"]`); both decode to the same set.

use serde::Deserialize;

use crate::error::DomainError;
use crate::ids::CharacterId;

/// Ordered, duplicate-free set of unlocked character ids.
///
/// Insertion order is preserved so that re-encoding an unchanged roster
/// produces the same blob.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnlockedCharacters {
    ids: Vec<CharacterId>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl UnlockedCharacters {
    /// Decode a stored blob.
    ///
    /// Blank input is the empty roster. Blank entries are dropped and
    /// duplicates collapse onto their first occurrence.
    pub fn decode(blob: &str) -> Result<Self, DomainError> {
        if blob.trim().is_empty() {
            return Ok(Self::default());
        }

        let raw: Vec<RawId> = serde_json::from_str(blob)
            .map_err(|e| DomainError::parse(format!("Invalid unlocked character list: {e}")))?;

        let mut unlocked = Self::default();
        for entry in raw {
            let value = match entry {
                RawId::Text(s) => s,
                RawId::Number(n) => integer_id(&n)?,
            };
            if let Ok(id) = CharacterId::new(value) {
                unlocked.insert(id);
            }
        }
        Ok(unlocked)
    }

    /// Encode as a compact JSON array of strings.
    pub fn encode(&self) -> String {
        let values: Vec<&str> = self.ids.iter().map(CharacterId::as_str).collect();
        serde_json::to_string(&values).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn contains(&self, id: &CharacterId) -> bool {
        self.ids.contains(id)
    }

    /// Add an id; returns `true` if it was not already present.
    pub fn insert(&mut self, id: CharacterId) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Legacy numeric entries must be whole numbers; `1.0` or `1e0` would not
/// match the stored id `"1"`.
fn integer_id(n: &serde_json::Number) -> Result<String, DomainError> {
    n.as_u64()
        .map(|v| v.to_string())
        .or_else(|| n.as_i64().map(|v| v.to_string()))
        .ok_or_else(|| DomainError::parse(format!("Non-integer character id: {n}")))
}
