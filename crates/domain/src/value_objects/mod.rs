//! Value objects - immutable types without identity.

mod character_build;
mod power;
mod unlocked_characters;

pub use character_build::CharacterBuild;
pub use power::Power;
pub use unlocked_characters::UnlockedCharacters;
