//! Build cache port.

use async_trait::async_trait;
use brawlarena_domain::{CharacterBuild, CharacterId};

use super::error::CacheError;

/// Per-character invalidation counter.
///
/// Starts at zero and is bumped by every [`invalidate`](BuildCachePort::invalidate).
pub type BuildGeneration = u64;

/// Derived-data cache of assembled builds, keyed by character.
///
/// Character mutations only ever call [`invalidate`](BuildCachePort::invalidate);
/// `get`/`generation`/`put` belong to the build assembly read path. A reader
/// takes the generation before loading the character and hands it back to
/// `put`, so a build assembled from a pre-invalidation read is never stored.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BuildCachePort: Send + Sync {
    async fn get(&self, character_id: &CharacterId) -> Option<CharacterBuild>;

    async fn generation(&self, character_id: &CharacterId) -> BuildGeneration;

    /// Store `build` if its character is still at `generation`.
    ///
    /// Returns `Ok(false)` when an invalidation happened in between and the
    /// build was discarded.
    async fn put(
        &self,
        build: CharacterBuild,
        generation: BuildGeneration,
    ) -> Result<bool, CacheError>;

    async fn invalidate(&self, character_id: &CharacterId) -> Result<(), CacheError>;
}
