//! Neo4j schema initialization - constraints.

use neo4rs::{query, Graph};

/// Ensure uniqueness constraints on character and piece ids.
///
/// Called once on startup. Constraints are created with IF NOT EXISTS so
/// repeated calls are no-ops.
pub async fn ensure_schema(graph: &Graph) -> Result<(), neo4rs::Error> {
    graph
        .run(query(
            "CREATE CONSTRAINT character_id_unique IF NOT EXISTS
             FOR (c:Character) REQUIRE c.id IS UNIQUE",
        ))
        .await?;

    graph
        .run(query(
            "CREATE CONSTRAINT piece_id_unique IF NOT EXISTS
             FOR (p:Piece) REQUIRE p.id IS UNIQUE",
        ))
        .await?;

    tracing::info!("Neo4j schema initialized (constraints ensured)");
    Ok(())
}
