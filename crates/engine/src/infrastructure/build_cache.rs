//! In-process build cache with time-to-live expiry.
//!
//! Entries past their TTL are invisible to readers but stay in the map until
//! `cleanup_expired()` runs, either on demand or from the sweeper task.
//! Invalidation also bumps a per-character generation that `put` checks, so a
//! reader racing a mutation cannot re-insert the build it assembled before the
//! mutation landed.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use brawlarena_domain::{CharacterBuild, CharacterId};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::infrastructure::ports::{BuildCachePort, BuildGeneration, CacheError};

struct CachedBuild {
    build: CharacterBuild,
    stored_at: Instant,
}

#[derive(Default)]
struct CacheState {
    entries: HashMap<CharacterId, CachedBuild>,
    // Never pruned: dropping a counter would let an old generation match again.
    generations: HashMap<CharacterId, BuildGeneration>,
}

impl CacheState {
    fn generation(&self, character_id: &CharacterId) -> BuildGeneration {
        self.generations.get(character_id).copied().unwrap_or(0)
    }
}

/// Assembled builds keyed by character id.
pub struct InMemoryBuildCache {
    state: RwLock<CacheState>,
    ttl: Duration,
}

impl InMemoryBuildCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            state: RwLock::new(CacheState::default()),
            ttl,
        }
    }

    fn is_fresh(&self, entry: &CachedBuild) -> bool {
        entry.stored_at.elapsed() < self.ttl
    }

    /// Drop expired entries; returns how many were removed.
    pub async fn cleanup_expired(&self) -> usize {
        let mut guard = self.state.write().await;
        let before = guard.entries.len();
        let ttl = self.ttl;
        guard.entries.retain(|_, entry| entry.stored_at.elapsed() < ttl);
        before - guard.entries.len()
    }

    /// Number of stored entries, expired ones included.
    pub async fn len(&self) -> usize {
        self.state.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.entries.is_empty()
    }

    /// Sweep expired entries every `interval` until the handle is aborted.
    pub fn spawn_sweeper(self: &Arc<Self>, interval: Duration) -> JoinHandle<()> {
        let cache = Arc::clone(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                let removed = cache.cleanup_expired().await;
                if removed > 0 {
                    tracing::debug!(removed, "Swept expired builds");
                }
            }
        })
    }

    #[cfg(test)]
    async fn put_at(&self, build: CharacterBuild, stored_at: Instant) {
        self.state.write().await.entries.insert(
            build.character_id.clone(),
            CachedBuild { build, stored_at },
        );
    }
}

#[async_trait]
impl BuildCachePort for InMemoryBuildCache {
    async fn get(&self, character_id: &CharacterId) -> Option<CharacterBuild> {
        let guard = self.state.read().await;
        guard
            .entries
            .get(character_id)
            .filter(|entry| self.is_fresh(entry))
            .map(|entry| entry.build.clone())
    }

    async fn generation(&self, character_id: &CharacterId) -> BuildGeneration {
        self.state.read().await.generation(character_id)
    }

    async fn put(
        &self,
        build: CharacterBuild,
        generation: BuildGeneration,
    ) -> Result<bool, CacheError> {
        let mut guard = self.state.write().await;
        let current = guard.generation(&build.character_id);
        if current != generation {
            tracing::debug!(
                character_id = %build.character_id,
                read_generation = generation,
                current_generation = current,
                "Discarding build assembled before an invalidation"
            );
            return Ok(false);
        }
        let entry = CachedBuild {
            build,
            stored_at: Instant::now(),
        };
        guard
            .entries
            .insert(entry.build.character_id.clone(), entry);
        Ok(true)
    }

    async fn invalidate(&self, character_id: &CharacterId) -> Result<(), CacheError> {
        let mut guard = self.state.write().await;
        let removed = guard.entries.remove(character_id).is_some();
        let generation = guard.generations.entry(character_id.clone()).or_insert(0);
        *generation += 1;
        tracing::debug!(
            character_id = %character_id,
            removed,
            generation = *generation,
            "Build invalidated"
        );
        Ok(())
    }
}
