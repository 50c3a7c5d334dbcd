//! Test fixtures loader for JSON fixture files and common test helpers.
//!
//! Fixture files live under `test_data/` in the engine crate.

use std::path::PathBuf;

use brawlarena_domain::{
    Character, CharacterId, Difficulty, Piece, PieceId, Player, PlayerHandle,
};
use chrono::{DateTime, TimeZone, Utc};

use crate::infrastructure::ports::RepoError;

// =============================================================================
// Fixture Loading
// =============================================================================

/// Load a JSON fixture from test_data/ directory.
///
/// # Panics
///
/// Panics if the fixture file cannot be read or parsed.
pub fn load_fixture<T: serde::de::DeserializeOwned>(path: &str) -> T {
    let fixture_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_data")
        .join(path);
    let content = std::fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read fixture '{}': {}",
            fixture_path.display(),
            e
        )
    });
    serde_json::from_str(&content).unwrap_or_else(|e| {
        panic!(
            "Failed to parse fixture '{}': {}",
            fixture_path.display(),
            e
        )
    })
}

/// The three-fighter sample roster (ids "1", "2", "3").
///
/// Covers every pieces state: "1" unset, "2" with one piece, "3" cleared.
pub fn roster() -> Vec<Character> {
    load_fixture("roster.json")
}

// =============================================================================
// Builders
// =============================================================================

pub fn character_id(id: &str) -> CharacterId {
    CharacterId::new(id).expect("valid character id")
}

pub fn piece_id(id: &str) -> PieceId {
    PieceId::new(id).expect("valid piece id")
}

pub fn handle(value: &str) -> PlayerHandle {
    PlayerHandle::new(value).expect("valid player handle")
}

/// A plain character with an empty (but assigned) loadout.
pub fn character(id: &str) -> Character {
    Character::new(character_id(id), format!("Test-{id}"))
        .with_description("Fixture fighter")
        .with_difficulty(Difficulty::Medium)
        .with_pieces(Some(vec![]))
        .with_images(
            format!("https://cdn.example.com/roster/{id}.png"),
            format!("https://cdn.example.com/game/{id}.png"),
        )
}

pub fn piece(id: &str) -> Piece {
    Piece::new(piece_id(id), format!("Piece-{id}"))
}

/// A player at version 0 with the given raw unlocked-list blob.
pub fn player(handle_value: &str, character_ids: &str) -> Player {
    Player::new(handle(handle_value)).with_character_ids(character_ids)
}

pub fn db_error(operation: &'static str) -> RepoError {
    RepoError::database(operation, "Database unavailable")
}

/// 2024-01-01T00:00:00Z
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .expect("valid timestamp")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_roster_covers_every_pieces_state() {
        let roster = roster();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster[0].pieces, None);
        assert_eq!(roster[1].piece_count(), 1);
        assert_eq!(roster[2].pieces, Some(vec![]));
        assert_eq!(roster[2].difficulty, Difficulty::Hard);
    }
}
