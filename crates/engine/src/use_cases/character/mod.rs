//! Character use cases.
//!
//! Roster listing, detail, unlocking, descriptive updates and piece
//! assignment.

use std::sync::Arc;

use brawlarena_domain::CharacterId;

use crate::infrastructure::ports::BuildCachePort;

mod assign_pieces;
mod detail;
mod error;
mod list;
mod unlock;
mod update;

pub use assign_pieces::AssignPieces;
pub use detail::GetCharacterDetail;
pub use error::CharacterError;
pub use list::{CharacterStream, ListCharacters};
pub use unlock::UnlockCharacter;
pub use update::{CharacterUpdate, UpdateCharacter};

/// Container for character use cases.
pub struct CharacterUseCases {
    pub list: Arc<ListCharacters>,
    pub detail: Arc<GetCharacterDetail>,
    pub unlock: Arc<UnlockCharacter>,
    pub update: Arc<UpdateCharacter>,
    pub assign: Arc<AssignPieces>,
}

impl CharacterUseCases {
    pub fn new(
        list: Arc<ListCharacters>,
        detail: Arc<GetCharacterDetail>,
        unlock: Arc<UnlockCharacter>,
        update: Arc<UpdateCharacter>,
        assign: Arc<AssignPieces>,
    ) -> Self {
        Self {
            list,
            detail,
            unlock,
            update,
            assign,
        }
    }
}

/// Drop the cached build for a character after its pieces changed.
///
/// Cache failures are logged and swallowed: the write already happened.
pub(crate) async fn invalidate_build(cache: &dyn BuildCachePort, character_id: &CharacterId) {
    if let Err(e) = cache.invalidate(character_id).await {
        tracing::warn!(
            character_id = %character_id,
            error = %e,
            "Failed to invalidate cached build"
        );
    }
}
