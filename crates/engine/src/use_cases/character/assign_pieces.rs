//! Piece assignment use case.
//!
//! Two ways to re-equip a fighter: by piece identifiers resolved against the
//! piece catalogue, or by handing over already materialized pieces.

use std::collections::HashSet;
use std::sync::Arc;

use brawlarena_domain::{Character, CharacterId, Piece, PieceId};

use super::error::CharacterError;
use super::invalidate_build;
use crate::infrastructure::ports::{BuildCachePort, CharacterRepo, PieceRepo};

/// Piece assignment use case.
pub struct AssignPieces {
    character_repo: Arc<dyn CharacterRepo>,
    piece_repo: Arc<dyn PieceRepo>,
    build_cache: Arc<dyn BuildCachePort>,
}

impl AssignPieces {
    pub fn new(
        character_repo: Arc<dyn CharacterRepo>,
        piece_repo: Arc<dyn PieceRepo>,
        build_cache: Arc<dyn BuildCachePort>,
    ) -> Self {
        Self {
            character_repo,
            piece_repo,
            build_cache,
        }
    }

    /// Replace the fighter's pieces with the catalogue entries matching `piece_ids`.
    ///
    /// Identifiers the catalogue does not know are dropped, so the result may
    /// be an empty assignment. The build cache is left alone on this path.
    pub async fn by_ids(
        &self,
        character_id: &CharacterId,
        piece_ids: Option<Vec<PieceId>>,
    ) -> Result<Character, CharacterError> {
        let piece_ids = match piece_ids {
            Some(ids) if !ids.is_empty() => dedupe(ids),
            _ => {
                return Err(CharacterError::invalid_argument(
                    "piece id list must not be empty",
                ))
            }
        };

        let mut character = self.load(character_id).await?;

        let pieces = self.piece_repo.find_by_ids(&piece_ids).await?;
        if pieces.len() < piece_ids.len() {
            tracing::debug!(
                character_id = %character_id,
                requested = piece_ids.len(),
                resolved = pieces.len(),
                "Some piece ids did not resolve"
            );
        }
        character.pieces = Some(pieces);

        let saved = self.character_repo.save(&character).await?;

        tracing::info!(
            character_id = %character_id,
            piece_count = saved.piece_count(),
            "Pieces assigned by id"
        );
        Ok(saved)
    }

    /// Replace the fighter's pieces with `pieces` as given.
    ///
    /// The cached build is invalidated once after a successful save; a failed
    /// call leaves the cache untouched.
    pub async fn with_powers(
        &self,
        character_id: &CharacterId,
        pieces: Option<Vec<Piece>>,
    ) -> Result<Character, CharacterError> {
        if character_id.is_blank() {
            return Err(CharacterError::invalid_argument(
                "character id must not be empty",
            ));
        }
        let pieces = match pieces {
            Some(pieces) if !pieces.is_empty() => pieces,
            _ => {
                return Err(CharacterError::invalid_argument(
                    "piece list must not be empty",
                ))
            }
        };

        let mut character = self.load(character_id).await?;
        character.pieces = Some(pieces);

        let saved = self.character_repo.save(&character).await?;
        invalidate_build(self.build_cache.as_ref(), character_id).await;

        tracing::info!(
            character_id = %character_id,
            piece_count = saved.piece_count(),
            "Pieces assigned"
        );
        Ok(saved)
    }

    async fn load(&self, character_id: &CharacterId) -> Result<Character, CharacterError> {
        self.character_repo
            .find_by_id(character_id)
            .await?
            .ok_or_else(|| CharacterError::CharacterNotFound(character_id.clone()))
    }
}

/// Drop repeated ids, keeping first occurrences in order.
fn dedupe(ids: Vec<PieceId>) -> Vec<PieceId> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.into_iter().filter(|id| seen.insert(id.clone())).collect()
}
