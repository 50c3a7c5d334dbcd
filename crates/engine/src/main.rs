//! Brawl Arena Engine - Main entry point.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use brawlarena_engine::app::{App, Repositories};
use brawlarena_engine::infrastructure::{
    build_cache::InMemoryBuildCache,
    clock::SystemClock,
    neo4j::{self, Neo4jRepositories},
    players::SqlitePlayerRepo,
    ports::ClockPort,
};
use brawlarena_engine::EngineConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the engine may be started from `crates/engine`).
    load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "brawlarena_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Brawl Arena Engine");

    let config = EngineConfig::from_env();
    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock);

    tracing::info!(uri = %config.neo4j_uri, "Connecting to Neo4j");
    let graph = neo4j::connect_with_retry(
        &config.neo4j_uri,
        &config.neo4j_user,
        &config.neo4j_password,
        config.neo4j_connect_attempts,
    )
    .await
    .context("connecting to Neo4j")?;

    neo4j::ensure_schema(&graph)
        .await
        .context("ensuring Neo4j schema")?;
    let graph_repos = Neo4jRepositories::new(graph);

    let players = SqlitePlayerRepo::new(&config.player_db, clock.clone())
        .await
        .with_context(|| format!("opening player database {}", config.player_db))?;

    let build_cache = Arc::new(InMemoryBuildCache::new(config.build_cache_ttl));
    let sweeper = build_cache.spawn_sweeper(config.build_cache_ttl);

    let app = Arc::new(App::new(
        Repositories {
            character: graph_repos.character,
            piece: graph_repos.piece,
            player: Arc::new(players),
        },
        build_cache,
        clock,
    ));

    let catalogue = app
        .repositories
        .character
        .find_all()
        .await
        .context("loading character catalogue")?;
    tracing::info!(
        characters = catalogue.len(),
        player_db = %config.player_db,
        cache_ttl_secs = config.build_cache_ttl.as_secs(),
        "Engine ready"
    );

    tokio::signal::ctrl_c()
        .await
        .context("waiting for shutdown signal")?;
    tracing::info!("Shutting down");
    sweeper.abort();

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
