//! Store port traits for persisted aggregates.

use async_trait::async_trait;
use brawlarena_domain::{Character, CharacterId, Piece, PieceId, Player, PlayerHandle};

use super::error::RepoError;

// =============================================================================
// Roster Stores
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterRepo: Send + Sync {
    /// Every character, in store order.
    async fn find_all(&self) -> Result<Vec<Character>, RepoError>;
    async fn find_by_id(&self, id: &CharacterId) -> Result<Option<Character>, RepoError>;
    /// Upsert; returns the record as stored.
    async fn save(&self, character: &Character) -> Result<Character, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PieceRepo: Send + Sync {
    /// Pieces whose id is in `ids`. Unknown ids are skipped; order is store-defined.
    async fn find_by_ids(&self, ids: &[PieceId]) -> Result<Vec<Piece>, RepoError>;
}

// =============================================================================
// Account Store
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlayerRepo: Send + Sync {
    async fn find_by_handle(&self, handle: &PlayerHandle) -> Result<Option<Player>, RepoError>;
    /// Version-checked upsert.
    ///
    /// Fails with [`RepoError::Conflict`] when the stored version no longer
    /// matches `player.version`. Returns the player with its new version.
    async fn save(&self, player: &Player) -> Result<Player, RepoError>;
}
