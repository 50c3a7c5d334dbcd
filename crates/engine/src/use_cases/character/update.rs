//! Update character use case.
//!
//! Rewrites a character's descriptive fields and, when the payload carries a
//! piece list, its equipped pieces.

use std::sync::Arc;

use brawlarena_domain::{Character, CharacterId, Difficulty, Piece, Power};

use super::error::CharacterError;
use super::invalidate_build;
use crate::infrastructure::ports::{BuildCachePort, CharacterRepo};

/// Replacement values for a character.
///
/// The update is total: every field overwrites its counterpart, including
/// `pieces`, where `None` clears the assignment instead of leaving it alone.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterUpdate {
    pub name: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub image_url: String,
    pub powers: Vec<Power>,
    pub pieces: Option<Vec<Piece>>,
}

/// Update character use case.
pub struct UpdateCharacter {
    character_repo: Arc<dyn CharacterRepo>,
    build_cache: Arc<dyn BuildCachePort>,
}

impl UpdateCharacter {
    pub fn new(character_repo: Arc<dyn CharacterRepo>, build_cache: Arc<dyn BuildCachePort>) -> Self {
        Self {
            character_repo,
            build_cache,
        }
    }

    /// Apply `update` and persist.
    ///
    /// The cached build is invalidated only when the payload carried a piece
    /// list, and only after the save went through.
    pub async fn execute(
        &self,
        character_id: &CharacterId,
        update: Option<CharacterUpdate>,
    ) -> Result<Character, CharacterError> {
        let update = update.ok_or(CharacterError::NullUpdate)?;

        let mut character = self
            .character_repo
            .find_by_id(character_id)
            .await?
            .ok_or_else(|| CharacterError::CharacterNotFound(character_id.clone()))?;

        let CharacterUpdate {
            name,
            description,
            difficulty,
            image_url,
            powers,
            pieces,
        } = update;

        let pieces_replaced = pieces.is_some();
        character.name = name;
        character.description = description;
        character.difficulty = difficulty;
        character.image_url = image_url;
        character.powers = powers;
        character.pieces = pieces;

        let saved = self.character_repo.save(&character).await?;

        if pieces_replaced {
            invalidate_build(self.build_cache.as_ref(), character_id).await;
        }

        tracing::info!(
            character_id = %character_id,
            pieces_replaced,
            "Character updated"
        );
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{
        CacheError, MockBuildCachePort, MockCharacterRepo, RepoError,
    };
    use crate::test_fixtures::{character_id, db_error, piece};

    fn bare_character(id: &str) -> Character {
        Character::new(character_id(id), "ViejoNombre")
            .with_description("ViejaDesc")
            .with_difficulty(Difficulty::Easy)
            .with_images("vieja.png", "vieja-game.png")
    }

    fn update_with(pieces: Option<Vec<Piece>>) -> CharacterUpdate {
        CharacterUpdate {
            name: "NuevoNombre".to_string(),
            description: "NuevaDesc".to_string(),
            difficulty: Difficulty::Hard,
            image_url: "nueva.png".to_string(),
            powers: vec![Power::PosturaImparable],
            pieces,
        }
    }

    fn echoing_repo() -> MockCharacterRepo {
        let mut repo = MockCharacterRepo::new();
        repo.expect_find_by_id()
            .withf(|id| id.as_str() == "char1")
            .returning(|_| Ok(Some(bare_character("char1"))));
        repo.expect_save().times(1).returning(|c| Ok(c.clone()));
        repo
    }

    #[tokio::test]
    async fn without_pieces_overwrites_fields_and_skips_invalidation() {
        let mut cache = MockBuildCachePort::new();
        cache.expect_invalidate().times(0);

        let use_case = UpdateCharacter::new(Arc::new(echoing_repo()), Arc::new(cache));
        let saved = use_case
            .execute(&character_id("char1"), Some(update_with(None)))
            .await
            .unwrap();

        assert_eq!(saved.name, "NuevoNombre");
        assert_eq!(saved.description, "NuevaDesc");
        assert_eq!(saved.difficulty, Difficulty::Hard);
        assert_eq!(saved.image_url, "nueva.png");
        assert_eq!(saved.powers, vec![Power::PosturaImparable]);
        assert_eq!(saved.pieces, None);
        // Fields outside the update are untouched.
        assert_eq!(saved.game_image_url, "vieja-game.png");
    }

    #[tokio::test]
    async fn null_pieces_clear_previously_assigned_pieces() {
        let mut repo = MockCharacterRepo::new();
        repo.expect_find_by_id().returning(|_| {
            Ok(Some(
                bare_character("char1").with_pieces(Some(vec![piece("p1")])),
            ))
        });
        repo.expect_save()
            .withf(|c| c.pieces.is_none())
            .times(1)
            .returning(|c| Ok(c.clone()));

        let mut cache = MockBuildCachePort::new();
        cache.expect_invalidate().times(0);

        let use_case = UpdateCharacter::new(Arc::new(repo), Arc::new(cache));
        let saved = use_case
            .execute(&character_id("char1"), Some(update_with(None)))
            .await
            .unwrap();

        assert_eq!(saved.pieces, None);
    }

    #[tokio::test]
    async fn with_pieces_replaces_them_and_invalidates_once() {
        let mut cache = MockBuildCachePort::new();
        cache
            .expect_invalidate()
            .withf(|id| id.as_str() == "char1")
            .times(1)
            .returning(|_| Ok(()));

        let use_case = UpdateCharacter::new(Arc::new(echoing_repo()), Arc::new(cache));
        let saved = use_case
            .execute(&character_id("char1"), Some(update_with(Some(vec![piece("p1")]))))
            .await
            .unwrap();

        assert_eq!(saved.pieces, Some(vec![piece("p1")]));
    }

    #[tokio::test]
    async fn with_empty_piece_list_still_invalidates() {
        let mut cache = MockBuildCachePort::new();
        cache.expect_invalidate().times(1).returning(|_| Ok(()));

        let use_case = UpdateCharacter::new(Arc::new(echoing_repo()), Arc::new(cache));
        let saved = use_case
            .execute(&character_id("char1"), Some(update_with(Some(vec![]))))
            .await
            .unwrap();

        assert_eq!(saved.pieces, Some(vec![]));
    }

    #[tokio::test]
    async fn when_update_missing_fails_before_store_access() {
        let mut repo = MockCharacterRepo::new();
        repo.expect_find_by_id().times(0);
        repo.expect_save().times(0);
        let mut cache = MockBuildCachePort::new();
        cache.expect_invalidate().times(0);

        let use_case = UpdateCharacter::new(Arc::new(repo), Arc::new(cache));
        let result = use_case.execute(&character_id("char1"), None).await;

        assert!(matches!(result, Err(CharacterError::NullUpdate)));
    }

    #[tokio::test]
    async fn when_character_missing_returns_not_found() {
        let mut repo = MockCharacterRepo::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_save().times(0);

        let use_case = UpdateCharacter::new(Arc::new(repo), Arc::new(MockBuildCachePort::new()));
        let result = use_case
            .execute(&character_id("charInexistente"), Some(update_with(None)))
            .await;

        assert!(matches!(result, Err(CharacterError::CharacterNotFound(_))));
    }

    #[tokio::test]
    async fn when_lookup_fails_propagates() {
        let mut repo = MockCharacterRepo::new();
        repo.expect_find_by_id()
            .returning(|_| Err(db_error("find_by_id")));

        let use_case = UpdateCharacter::new(Arc::new(repo), Arc::new(MockBuildCachePort::new()));
        let result = use_case
            .execute(&character_id("char1"), Some(update_with(None)))
            .await;

        assert!(matches!(
            result,
            Err(CharacterError::Repo(RepoError::Database { operation: "find_by_id", .. }))
        ));
    }

    #[tokio::test]
    async fn when_save_fails_propagates_and_skips_invalidation() {
        let mut repo = MockCharacterRepo::new();
        repo.expect_find_by_id()
            .returning(|_| Ok(Some(bare_character("char1"))));
        repo.expect_save().returning(|_| Err(db_error("save")));

        let mut cache = MockBuildCachePort::new();
        cache.expect_invalidate().times(0);

        let use_case = UpdateCharacter::new(Arc::new(repo), Arc::new(cache));
        let result = use_case
            .execute(&character_id("char1"), Some(update_with(Some(vec![piece("p1")]))))
            .await;

        assert!(matches!(
            result,
            Err(CharacterError::Repo(RepoError::Database { operation: "save", .. }))
        ));
    }

    #[tokio::test]
    async fn when_invalidation_fails_update_still_succeeds() {
        let mut cache = MockBuildCachePort::new();
        cache
            .expect_invalidate()
            .times(1)
            .returning(|_| Err(CacheError::Unavailable("down".to_string())));

        let use_case = UpdateCharacter::new(Arc::new(echoing_repo()), Arc::new(cache));
        let result = use_case
            .execute(&character_id("char1"), Some(update_with(Some(vec![piece("p1")]))))
            .await;

        assert!(result.is_ok());
    }
}
