//! Assembled build - the derived view the build cache stores per character.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{Character, Piece};
use crate::ids::CharacterId;
use crate::value_objects::Power;

/// A character's powers and equipped pieces, flattened for the match client.
///
/// Derived data only: it is rebuilt from the character record whenever the
/// cached copy is missing or has been invalidated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterBuild {
    pub character_id: CharacterId,
    pub powers: Vec<Power>,
    pub pieces: Vec<Piece>,
    pub assembled_at: DateTime<Utc>,
}

impl CharacterBuild {
    /// Assemble from a character; unset pieces become an empty loadout.
    pub fn assemble(character: &Character, assembled_at: DateTime<Utc>) -> Self {
        Self {
            character_id: character.id.clone(),
            powers: character.powers.clone(),
            pieces: character.pieces.clone().unwrap_or_default(),
            assembled_at,
        }
    }
}
