//! Neo4j piece catalogue repository implementation.

use async_trait::async_trait;
use brawlarena_domain::{Piece, PieceId};
use neo4rs::{query, Graph, Row};

use super::helpers::NodeExt;
use crate::infrastructure::ports::{PieceRepo, RepoError};

/// Read access to the `(:Piece)` catalogue.
pub struct Neo4jPieceRepo {
    graph: Graph,
}

impl Neo4jPieceRepo {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }

    fn row_to_piece(row: Row) -> Result<Piece, RepoError> {
        let node: neo4rs::Node = row
            .get("p")
            .map_err(|e| RepoError::database("query", e))?;

        let id = PieceId::new(node.get_string_strict("id")?)
            .map_err(RepoError::serialization)?;
        let attributes = node
            .get_optional_json::<serde_json::Value>("attributes")?
            .unwrap_or(serde_json::Value::Null);

        Ok(Piece::new(id, node.get_string_or("name", "")).with_attributes(attributes))
    }
}

#[async_trait]
impl PieceRepo for Neo4jPieceRepo {
    /// Pieces come back in request order; unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[PieceId]) -> Result<Vec<Piece>, RepoError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let id_strings: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
        let q = query(
            "UNWIND range(0, size($ids) - 1) AS idx
            MATCH (p:Piece {id: $ids[idx]})
            RETURN p
            ORDER BY idx",
        )
        .param("ids", id_strings);

        let mut result = self
            .graph
            .execute(q)
            .await
            .map_err(|e| RepoError::database("find_by_ids", e))?;

        let mut pieces = Vec::new();
        while let Some(row) = result
            .next()
            .await
            .map_err(|e| RepoError::database("find_by_ids", e))?
        {
            pieces.push(Self::row_to_piece(row)?);
        }

        tracing::debug!(
            requested = ids.len(),
            resolved = pieces.len(),
            "Resolved pieces"
        );
        Ok(pieces)
    }
}
