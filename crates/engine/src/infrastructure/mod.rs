//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod build_cache;
pub mod clock;
pub mod neo4j;
pub mod players;
pub mod ports;
