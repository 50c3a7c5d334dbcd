//! Brawl Arena domain types.
//!
//! Pure data and invariants for the character roster: fighters, their pieces
//! and powers, player accounts and the unlocked-roster codec. No I/O lives
//! here; the engine crate owns every store and cache.

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{Character, Difficulty, Piece, Player};
pub use error::DomainError;
pub use ids::{CharacterId, PieceId, PlayerHandle};
pub use value_objects::{CharacterBuild, Power, UnlockedCharacters};
