//! Unlock character use case.
//!
//! Adds a fighter to a player's unlocked roster. Unlocking is idempotent:
//! a second unlock of the same fighter succeeds without writing anything.

use std::sync::Arc;

use brawlarena_domain::{CharacterId, PlayerHandle};

use super::error::CharacterError;
use crate::infrastructure::ports::{CharacterRepo, PlayerRepo};

/// Unlock character use case.
///
/// Orchestrates: character existence check, roster decode, versioned player save.
pub struct UnlockCharacter {
    character_repo: Arc<dyn CharacterRepo>,
    player_repo: Arc<dyn PlayerRepo>,
}

impl UnlockCharacter {
    pub fn new(character_repo: Arc<dyn CharacterRepo>, player_repo: Arc<dyn PlayerRepo>) -> Self {
        Self {
            character_repo,
            player_repo,
        }
    }

    /// Execute the unlock.
    ///
    /// # Returns
    /// * `Ok(true)` - The character was newly unlocked and the player saved
    /// * `Ok(false)` - The character was already unlocked; nothing written
    /// * `Err(CharacterError)` - Missing character/player, corrupt roster or store failure
    pub async fn execute(
        &self,
        handle: &PlayerHandle,
        character_id: &CharacterId,
    ) -> Result<bool, CharacterError> {
        // The two reads are independent.
        let (character, player) = tokio::try_join!(
            self.character_repo.find_by_id(character_id),
            self.player_repo.find_by_handle(handle),
        )?;

        if character.is_none() {
            return Err(CharacterError::CharacterNotFound(character_id.clone()));
        }
        let mut player = player.ok_or_else(|| CharacterError::PlayerNotFound(handle.clone()))?;

        // Never rewrite a blob we could not read.
        let mut unlocked =
            player
                .unlocked_characters()
                .map_err(|reason| CharacterError::CorruptUnlockList {
                    handle: handle.clone(),
                    reason,
                })?;

        if !unlocked.insert(character_id.clone()) {
            tracing::debug!(
                player = %handle,
                character_id = %character_id,
                "Character already unlocked"
            );
            return Ok(false);
        }

        player.set_unlocked_characters(&unlocked);
        let saved = self.player_repo.save(&player).await?;

        tracing::info!(
            player = %handle,
            character_id = %character_id,
            unlocked_count = unlocked.len(),
            version = saved.version,
            "Character unlocked"
        );
        Ok(true)
    }
}
