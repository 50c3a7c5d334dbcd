//! Player entity - An account that can unlock fighters.
//!
//! The unlocked roster is persisted as a single serialized text column
//! (`character_ids`). Callers never touch that blob directly: they decode it
//! into an [`UnlockedCharacters`] set, mutate the set, and write it back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::PlayerHandle;
use crate::value_objects::UnlockedCharacters;

/// A player account.
///
/// `version` is bumped by the player store on every successful save and is
/// used for optimistic concurrency: a save carrying a stale version is
/// rejected instead of silently overwriting a concurrent unlock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub handle: PlayerHandle,
    /// Token balance.
    pub tokens: i64,
    /// Encoded unlocked-character list (see [`UnlockedCharacters::encode`]).
    pub character_ids: String,
    pub version: i64,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Player {
    pub fn new(handle: PlayerHandle) -> Self {
        Self {
            handle,
            tokens: 0,
            character_ids: UnlockedCharacters::default().encode(),
            version: 0,
            updated_at: None,
        }
    }

    pub fn with_tokens(mut self, tokens: i64) -> Self {
        self.tokens = tokens;
        self
    }

    /// Replace the raw blob verbatim (used when loading from storage).
    pub fn with_character_ids(mut self, character_ids: impl Into<String>) -> Self {
        self.character_ids = character_ids.into();
        self
    }

    /// Decode the unlocked roster.
    pub fn unlocked_characters(&self) -> Result<UnlockedCharacters, DomainError> {
        UnlockedCharacters::decode(&self.character_ids)
    }

    /// Re-encode the unlocked roster into the blob.
    pub fn set_unlocked_characters(&mut self, unlocked: &UnlockedCharacters) {
        self.character_ids = unlocked.encode();
    }
}
