//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.
//! Use cases orchestrate across port traits to fulfill user stories.

pub mod build;
pub mod character;

pub use build::BuildUseCases;
pub use character::CharacterUseCases;
