//! Engine configuration from environment variables.

use std::time::Duration;

const DEFAULT_NEO4J_URI: &str = "bolt://localhost:7687";
const DEFAULT_NEO4J_USER: &str = "neo4j";
const DEFAULT_NEO4J_PASSWORD: &str = "password";
const DEFAULT_PLAYER_DB: &str = "players.db";
const DEFAULT_BUILD_CACHE_TTL_SECS: u64 = 300;
const DEFAULT_NEO4J_CONNECT_ATTEMPTS: u32 = 10;

/// Runtime settings for the engine binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub neo4j_uri: String,
    pub neo4j_user: String,
    pub neo4j_password: String,
    pub neo4j_connect_attempts: u32,
    /// Path of the SQLite file holding player accounts.
    pub player_db: String,
    pub build_cache_ttl: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            neo4j_uri: DEFAULT_NEO4J_URI.to_string(),
            neo4j_user: DEFAULT_NEO4J_USER.to_string(),
            neo4j_password: DEFAULT_NEO4J_PASSWORD.to_string(),
            neo4j_connect_attempts: DEFAULT_NEO4J_CONNECT_ATTEMPTS,
            player_db: DEFAULT_PLAYER_DB.to_string(),
            build_cache_ttl: Duration::from_secs(DEFAULT_BUILD_CACHE_TTL_SECS),
        }
    }
}

impl EngineConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`; missing keys use defaults.
    ///
    /// Malformed numbers are logged and replaced by their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let string = |key: &str, default: String| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
        };

        let build_cache_ttl_secs = parse_or(
            "BUILD_CACHE_TTL_SECS",
            lookup("BUILD_CACHE_TTL_SECS"),
            DEFAULT_BUILD_CACHE_TTL_SECS,
        )
        .max(1);
        let neo4j_connect_attempts = parse_or(
            "NEO4J_CONNECT_ATTEMPTS",
            lookup("NEO4J_CONNECT_ATTEMPTS"),
            DEFAULT_NEO4J_CONNECT_ATTEMPTS,
        )
        .max(1);

        Self {
            neo4j_uri: string("NEO4J_URI", defaults.neo4j_uri),
            neo4j_user: string("NEO4J_USER", defaults.neo4j_user),
            neo4j_password: string("NEO4J_PASSWORD", defaults.neo4j_password),
            neo4j_connect_attempts,
            player_db: string("PLAYER_DB", defaults.player_db),
            build_cache_ttl: Duration::from_secs(build_cache_ttl_secs),
        }
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: std::str::FromStr + Copy + std::fmt::Display,
{
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(key, value = %raw, default = %default, "Invalid number, using default");
            default
        }
    }
}
