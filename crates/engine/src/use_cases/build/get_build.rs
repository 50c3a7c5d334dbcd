//! Read-through build assembly.

use std::sync::Arc;

use brawlarena_domain::{CharacterBuild, CharacterId};

use crate::infrastructure::ports::{BuildCachePort, CharacterRepo, ClockPort};
use crate::use_cases::character::CharacterError;

/// Fetch a character's assembled build, serving from the cache when possible.
pub struct GetCharacterBuild {
    character_repo: Arc<dyn CharacterRepo>,
    build_cache: Arc<dyn BuildCachePort>,
    clock: Arc<dyn ClockPort>,
}

impl GetCharacterBuild {
    pub fn new(
        character_repo: Arc<dyn CharacterRepo>,
        build_cache: Arc<dyn BuildCachePort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            character_repo,
            build_cache,
            clock,
        }
    }

    pub async fn execute(&self, character_id: &CharacterId) -> Result<CharacterBuild, CharacterError> {
        if let Some(build) = self.build_cache.get(character_id).await {
            tracing::debug!(character_id = %character_id, "Build cache hit");
            return Ok(build);
        }

        // Taken before the read so an invalidation racing this call wins.
        let generation = self.build_cache.generation(character_id).await;

        let character = self
            .character_repo
            .find_by_id(character_id)
            .await?
            .ok_or_else(|| CharacterError::CharacterNotFound(character_id.clone()))?;

        let build = CharacterBuild::assemble(&character, self.clock.now());

        // A cache that refuses the entry only costs a rebuild next time.
        match self.build_cache.put(build.clone(), generation).await {
            Ok(true) => {}
            Ok(false) => tracing::debug!(
                character_id = %character_id,
                "Character changed while assembling, build not cached"
            ),
            Err(e) => tracing::warn!(
                character_id = %character_id,
                error = %e,
                "Failed to cache assembled build"
            ),
        }

        tracing::debug!(
            character_id = %character_id,
            piece_count = build.pieces.len(),
            "Build assembled"
        );
        Ok(build)
    }
}
