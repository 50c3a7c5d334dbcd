//! Neo4j test harness.
//!
//! Starts a throwaway Neo4j container per test via testcontainers.

use neo4rs::{query, Graph};
use testcontainers::{core::WaitFor, runners::AsyncRunner, ContainerAsync, GenericImage};

use super::connect_with_retry;

/// Password used for Neo4j test containers.
pub const TEST_NEO4J_PASSWORD: &str = "testpassword";

/// Neo4j test harness managing container lifecycle.
pub struct Neo4jTestHarness {
    _container: ContainerAsync<GenericImage>,
    graph: Graph,
}

impl Neo4jTestHarness {
    /// Start a container, connect, and ensure the schema.
    pub async fn start() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let container: ContainerAsync<GenericImage> = neo4j_image(TEST_NEO4J_PASSWORD).start().await;
        let bolt_port = container.get_host_port_ipv4(7687).await;
        let uri = format!("bolt://127.0.0.1:{bolt_port}");

        let graph = connect_with_retry(&uri, "neo4j", TEST_NEO4J_PASSWORD, 30).await?;
        super::ensure_schema(&graph).await?;

        Ok(Self {
            _container: container,
            graph,
        })
    }

    pub fn graph(&self) -> Graph {
        self.graph.clone()
    }

    /// Insert a catalogue piece directly.
    pub async fn seed_piece(
        &self,
        id: &str,
        name: &str,
        attributes: serde_json::Value,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.graph
            .run(
                query("CREATE (:Piece {id: $id, name: $name, attributes: $attributes})")
                    .param("id", id.to_string())
                    .param("name", name.to_string())
                    .param("attributes", attributes.to_string()),
            )
            .await?;
        Ok(())
    }
}

/// Pinned Neo4j image with a small memory footprint.
///
/// Readiness is established by `connect_with_retry`, not log parsing.
fn neo4j_image(password: &str) -> GenericImage {
    GenericImage::new("neo4j", "5.26.0-community")
        .with_env_var("NEO4J_AUTH", format!("neo4j/{password}"))
        .with_env_var("NEO4J_server_memory_heap_initial__size", "256m")
        .with_env_var("NEO4J_server_memory_heap_max__size", "512m")
        .with_env_var("NEO4J_server_memory_pagecache_size", "128m")
        .with_exposed_port(7687)
        .with_wait_for(WaitFor::seconds(5))
}
