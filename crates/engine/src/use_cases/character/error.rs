//! Character operation errors.

use brawlarena_domain::{CharacterId, DomainError, PlayerHandle};

use crate::infrastructure::ports::RepoError;

/// Errors that can occur during character operations.
#[derive(Debug, thiserror::Error)]
pub enum CharacterError {
    /// Structurally invalid request (blank id, missing or empty list).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Character not found: {0}")]
    CharacterNotFound(CharacterId),

    #[error("Player not found: {0}")]
    PlayerNotFound(PlayerHandle),

    /// The caller handed over no update payload at all. This is a wiring
    /// defect upstream, not a condition the player can fix.
    #[error("Character update payload is missing")]
    NullUpdate,

    /// The stored unlocked list could not be decoded; nothing was written.
    #[error("Unlocked character list for {handle} is corrupt: {reason}")]
    CorruptUnlockList {
        handle: PlayerHandle,
        reason: DomainError,
    },

    #[error(transparent)]
    Repo(#[from] RepoError),
}

impl CharacterError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Whether the failure is the caller's fault (4xx-equivalent).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument(_) | Self::CharacterNotFound(_) | Self::PlayerNotFound(_)
        )
    }
}
