//! Brawl Arena engine library.
//!
//! Character roster service: listing, unlocking, editing and re-equipping
//! fighters on top of a Neo4j catalogue and a SQLite player store.
//!
//! ## Structure
//!
//! - `use_cases/` - User story orchestration over port traits
//! - `infrastructure/` - Port traits and their adapters
//! - `app` - Application composition
//! - `config` - Environment configuration

pub mod app;
pub mod config;
pub mod infrastructure;
pub mod use_cases;

/// Shared builders and JSON fixtures for tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
pub use config::EngineConfig;
