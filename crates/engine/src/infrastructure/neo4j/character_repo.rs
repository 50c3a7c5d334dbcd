//! Neo4j character repository implementation.
//!
//! Each fighter is a single `(:Character)` node. Powers and pieces are stored
//! as JSON properties: they are small, always read together with the
//! character, and pieces are snapshots rather than live links to the catalogue.
//! A missing `pieces` property means "never assigned"; `"[]"` means cleared.

use async_trait::async_trait;
use brawlarena_domain::{Character, CharacterId, Difficulty, Piece, Power};
use neo4rs::{query, Graph, Row};

use super::helpers::{to_json, NodeExt};
use crate::infrastructure::ports::{CharacterRepo, RepoError};

/// Repository for Character operations.
pub struct Neo4jCharacterRepo {
    graph: Graph,
}

impl Neo4jCharacterRepo {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }

    fn row_to_character(row: Row) -> Result<Character, RepoError> {
        let node: neo4rs::Node = row
            .get("c")
            .map_err(|e| RepoError::database("query", e))?;

        let id = CharacterId::new(node.get_string_strict("id")?)
            .map_err(RepoError::serialization)?;
        let difficulty: Difficulty = node
            .get_string_or("difficulty", Difficulty::default().as_str())
            .parse()
            .map_err(RepoError::serialization)?;
        let powers: Vec<Power> = node.get_json_strict("powers")?;
        let pieces: Option<Vec<Piece>> = node.get_optional_json("pieces")?;
        let display_order = i32::try_from(node.get_i64_or("display_order", 0))
            .map_err(|e| RepoError::serialization(format!("display_order out of range: {e}")))?;

        Ok(Character {
            id,
            name: node.get_string_strict("name")?,
            description: node.get_string_or("description", ""),
            difficulty,
            powers,
            pieces,
            image_url: node.get_string_or("image_url", ""),
            display_order,
            game_image_url: node.get_string_or("game_image_url", ""),
        })
    }
}

#[async_trait]
impl CharacterRepo for Neo4jCharacterRepo {
    async fn find_all(&self) -> Result<Vec<Character>, RepoError> {
        let q = query(
            "MATCH (c:Character)
            RETURN c
            ORDER BY c.display_order, c.id",
        );

        let mut result = self
            .graph
            .execute(q)
            .await
            .map_err(|e| RepoError::database("find_all", e))?;

        let mut characters = Vec::new();
        while let Some(row) = result
            .next()
            .await
            .map_err(|e| RepoError::database("find_all", e))?
        {
            characters.push(Self::row_to_character(row)?);
        }

        tracing::debug!(count = characters.len(), "Loaded character catalogue");
        Ok(characters)
    }

    async fn find_by_id(&self, id: &CharacterId) -> Result<Option<Character>, RepoError> {
        let q = query("MATCH (c:Character {id: $id}) RETURN c").param("id", id.to_string());

        let mut result = self
            .graph
            .execute(q)
            .await
            .map_err(|e| RepoError::database("find_by_id", e))?;

        match result
            .next()
            .await
            .map_err(|e| RepoError::database("find_by_id", e))?
        {
            Some(row) => Ok(Some(Self::row_to_character(row)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, character: &Character) -> Result<Character, RepoError> {
        let powers_json = to_json(&character.powers)?;
        let pieces_json = character.pieces.as_ref().map(to_json).transpose()?;
        let pieces_assigned = pieces_json.is_some();

        // MERGE handles both create and update. Setting `pieces` to null
        // removes the property, which is how "unset" is stored.
        let q = query(
            "MERGE (c:Character {id: $id})
            SET c.name = $name,
                c.description = $description,
                c.difficulty = $difficulty,
                c.powers = $powers,
                c.pieces = CASE WHEN $pieces_assigned THEN $pieces ELSE null END,
                c.image_url = $image_url,
                c.display_order = $display_order,
                c.game_image_url = $game_image_url
            RETURN c",
        )
        .param("id", character.id.to_string())
        .param("name", character.name.clone())
        .param("description", character.description.clone())
        .param("difficulty", character.difficulty.to_string())
        .param("powers", powers_json)
        .param("pieces", pieces_json.unwrap_or_default())
        .param("pieces_assigned", pieces_assigned)
        .param("image_url", character.image_url.clone())
        .param("display_order", i64::from(character.display_order))
        .param("game_image_url", character.game_image_url.clone());

        let mut result = self
            .graph
            .execute(q)
            .await
            .map_err(|e| RepoError::database("save", e))?;

        let row = result
            .next()
            .await
            .map_err(|e| RepoError::database("save", e))?
            .ok_or_else(|| RepoError::database("save", "MERGE returned no row"))?;

        tracing::debug!(character_id = %character.id, "Character saved");
        Self::row_to_character(row)
    }
}
