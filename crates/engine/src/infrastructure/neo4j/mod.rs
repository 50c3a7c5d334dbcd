//! Neo4j database implementations.

use std::sync::Arc;
use std::time::Duration;

use neo4rs::{query, Graph};

mod character_repo;
mod helpers;
mod piece_repo;
mod schema;

#[cfg(test)]
pub(crate) mod test_harness;

pub use character_repo::Neo4jCharacterRepo;
pub use piece_repo::Neo4jPieceRepo;
pub use schema::ensure_schema;

/// Create all Neo4j repositories from a graph connection.
pub struct Neo4jRepositories {
    pub character: Arc<Neo4jCharacterRepo>,
    pub piece: Arc<Neo4jPieceRepo>,
}

impl Neo4jRepositories {
    pub fn new(graph: Graph) -> Self {
        Self {
            character: Arc::new(Neo4jCharacterRepo::new(graph.clone())),
            piece: Arc::new(Neo4jPieceRepo::new(graph)),
        }
    }
}

/// Connect to Neo4j, retrying with exponential backoff until the server
/// answers a trivial query.
///
/// Backoff doubles from 500ms and is capped at 5s.
pub async fn connect_with_retry(
    uri: &str,
    user: &str,
    password: &str,
    max_attempts: u32,
) -> Result<Graph, neo4rs::Error> {
    let max_delay = Duration::from_secs(5);
    let mut delay = Duration::from_millis(500);
    let mut attempt = 0;

    loop {
        attempt += 1;

        let outcome = match Graph::new(uri, user, password).await {
            Ok(graph) => graph.run(query("RETURN 1")).await.map(|()| graph),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(graph) => {
                tracing::info!(attempt, uri, "Neo4j connection established and verified");
                return Ok(graph);
            }
            Err(e) if attempt >= max_attempts => return Err(e),
            Err(e) => {
                tracing::debug!(
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    error = %e,
                    "Retrying Neo4j connection"
                );
            }
        }

        tokio::time::sleep(delay).await;
        delay = std::cmp::min(delay.saturating_mul(2), max_delay);
    }
}
