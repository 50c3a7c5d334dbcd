//! Roster listing use case.
//!
//! Both listings are lazy: nothing touches a store until the returned stream
//! is first polled, and calling the method again starts a fresh read.

use std::sync::Arc;

use brawlarena_domain::{Character, PlayerHandle, UnlockedCharacters};
use futures_util::stream::{self, BoxStream, StreamExt};

use crate::infrastructure::ports::{CharacterRepo, PlayerRepo, RepoError};

/// Stream of characters in store order; store failures arrive as an `Err` item.
pub type CharacterStream = BoxStream<'static, Result<Character, RepoError>>;

/// List characters.
pub struct ListCharacters {
    character_repo: Arc<dyn CharacterRepo>,
    player_repo: Arc<dyn PlayerRepo>,
}

impl ListCharacters {
    pub fn new(character_repo: Arc<dyn CharacterRepo>, player_repo: Arc<dyn PlayerRepo>) -> Self {
        Self {
            character_repo,
            player_repo,
        }
    }

    /// Every character, unfiltered.
    pub fn list_all(&self) -> CharacterStream {
        let character_repo = self.character_repo.clone();
        stream::once(async move { character_repo.find_all().await })
            .flat_map(into_items)
            .boxed()
    }

    /// Characters the player has unlocked.
    ///
    /// An unknown player yields an empty stream. A corrupt unlocked list is
    /// read as empty rather than failing the listing.
    pub fn list_unlocked(&self, handle: &PlayerHandle) -> CharacterStream {
        stream::once(load_unlocked(
            self.character_repo.clone(),
            self.player_repo.clone(),
            handle.clone(),
        ))
        .flat_map(into_items)
        .boxed()
    }
}

async fn load_unlocked(
    character_repo: Arc<dyn CharacterRepo>,
    player_repo: Arc<dyn PlayerRepo>,
    handle: PlayerHandle,
) -> Result<Vec<Character>, RepoError> {
    let Some(player) = player_repo.find_by_handle(&handle).await? else {
        tracing::debug!(player = %handle, "Player not found, no unlocked characters");
        return Ok(Vec::new());
    };

    let unlocked = player.unlocked_characters().unwrap_or_else(|e| {
        tracing::warn!(
            player = %handle,
            error = %e,
            "Unreadable unlocked character list, treating as empty"
        );
        UnlockedCharacters::default()
    });

    let characters = character_repo.find_all().await?;
    Ok(characters
        .into_iter()
        .filter(|c| unlocked.contains(&c.id))
        .collect())
}

fn into_items(
    result: Result<Vec<Character>, RepoError>,
) -> stream::Iter<std::vec::IntoIter<Result<Character, RepoError>>> {
    let items: Vec<Result<Character, RepoError>> = match result {
        Ok(characters) => characters.into_iter().map(Ok).collect(),
        Err(e) => vec![Err(e)],
    };
    stream::iter(items)
}
