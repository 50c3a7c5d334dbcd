//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Roster and account storage (could swap Neo4j/SQLite -> anything else)
//! - The build cache (could swap in-memory -> Redis)
//! - Clock (for testing)

mod cache;
mod error;
mod repos;
mod testing;

// =============================================================================
// Store Ports
// =============================================================================
pub use repos::{CharacterRepo, PieceRepo, PlayerRepo};

// =============================================================================
// Cache Port
// =============================================================================
pub use cache::{BuildCachePort, BuildGeneration};

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::ClockPort;

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use cache::MockBuildCachePort;
#[cfg(test)]
pub use repos::{MockCharacterRepo, MockPieceRepo, MockPlayerRepo};
#[cfg(test)]
pub use testing::MockClockPort;

// =============================================================================
// Error Types
// =============================================================================
pub use error::{CacheError, RepoError};
