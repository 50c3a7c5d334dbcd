//! Domain entities - records with identity.

mod character;
mod piece;
mod player;

pub use character::{Character, Difficulty};
pub use piece::Piece;
pub use player::Player;
