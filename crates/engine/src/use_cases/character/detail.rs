//! Character detail use case.

use std::sync::Arc;

use brawlarena_domain::{Character, CharacterId};

use super::error::CharacterError;
use crate::infrastructure::ports::CharacterRepo;

/// Load one character by id.
pub struct GetCharacterDetail {
    character_repo: Arc<dyn CharacterRepo>,
}

impl GetCharacterDetail {
    pub fn new(character_repo: Arc<dyn CharacterRepo>) -> Self {
        Self { character_repo }
    }

    pub async fn execute(&self, character_id: &CharacterId) -> Result<Character, CharacterError> {
        self.character_repo
            .find_by_id(character_id)
            .await?
            .ok_or_else(|| CharacterError::CharacterNotFound(character_id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockCharacterRepo, RepoError};
    use crate::test_fixtures::{character, character_id, db_error};

    #[tokio::test]
    async fn returns_character_when_present() {
        let mut character_repo = MockCharacterRepo::new();
        character_repo
            .expect_find_by_id()
            .withf(|id| id.as_str() == "char1")
            .returning(|_| Ok(Some(character("char1"))));

        let use_case = GetCharacterDetail::new(Arc::new(character_repo));
        let found = use_case.execute(&character_id("char1")).await.unwrap();

        assert_eq!(found.id.as_str(), "char1");
        assert_eq!(found.name, "Test-char1");
    }

    #[tokio::test]
    async fn when_character_missing_returns_not_found() {
        let mut character_repo = MockCharacterRepo::new();
        character_repo.expect_find_by_id().returning(|_| Ok(None));

        let use_case = GetCharacterDetail::new(Arc::new(character_repo));
        let result = use_case.execute(&character_id("char1")).await;

        assert!(matches!(
            result,
            Err(CharacterError::CharacterNotFound(id)) if id.as_str() == "char1"
        ));
    }

    #[tokio::test]
    async fn when_repo_error_propagates() {
        let mut character_repo = MockCharacterRepo::new();
        character_repo
            .expect_find_by_id()
            .returning(|_| Err(db_error("find_by_id")));

        let use_case = GetCharacterDetail::new(Arc::new(character_repo));
        let result = use_case.execute(&character_id("char1")).await;

        assert!(matches!(
            result,
            Err(CharacterError::Repo(RepoError::Database { .. }))
        ));
    }
}
