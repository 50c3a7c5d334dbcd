//! SQLite-backed player account storage.
//!
//! One row per player. The unlocked roster stays an opaque text column; the
//! domain codec owns its format.

use std::sync::Arc;

use async_trait::async_trait;
use brawlarena_domain::{Player, PlayerHandle};
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::infrastructure::ports::{ClockPort, PlayerRepo, RepoError};

/// SQLite implementation of [`PlayerRepo`] with optimistic concurrency.
///
/// Every successful save bumps `version`. An update whose version no longer
/// matches the stored row is rejected with [`RepoError::Conflict`].
pub struct SqlitePlayerRepo {
    pool: SqlitePool,
    clock: Arc<dyn ClockPort>,
}

impl SqlitePlayerRepo {
    pub async fn new(db_path: &str, clock: Arc<dyn ClockPort>) -> Result<Self, RepoError> {
        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await
            .map_err(|e| RepoError::database("connect", e))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS players (
                handle TEXT PRIMARY KEY NOT NULL,
                tokens INTEGER NOT NULL DEFAULT 0,
                character_ids TEXT NOT NULL DEFAULT '[]',
                version INTEGER NOT NULL DEFAULT 0,
                updated_at TEXT
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| RepoError::database("migrate", e))?;

        Ok(Self { pool, clock })
    }

    fn row_to_player(row: &SqliteRow) -> Result<Player, RepoError> {
        let handle: String = row
            .try_get("handle")
            .map_err(|e| RepoError::database("decode", e))?;
        let handle = PlayerHandle::new(handle).map_err(RepoError::serialization)?;
        let updated_at: Option<String> = row
            .try_get("updated_at")
            .map_err(|e| RepoError::database("decode", e))?;
        let updated_at = updated_at
            .map(|s| {
                DateTime::parse_from_rfc3339(&s)
                    .map(|dt| dt.with_timezone(&Utc))
                    .map_err(|e| RepoError::serialization(format!("Invalid updated_at '{s}': {e}")))
            })
            .transpose()?;

        Ok(Player {
            handle,
            tokens: row
                .try_get("tokens")
                .map_err(|e| RepoError::database("decode", e))?,
            character_ids: row
                .try_get("character_ids")
                .map_err(|e| RepoError::database("decode", e))?,
            version: row
                .try_get("version")
                .map_err(|e| RepoError::database("decode", e))?,
            updated_at,
        })
    }
}

#[async_trait]
impl PlayerRepo for SqlitePlayerRepo {
    async fn find_by_handle(&self, handle: &PlayerHandle) -> Result<Option<Player>, RepoError> {
        let row = sqlx::query(
            "SELECT handle, tokens, character_ids, version, updated_at FROM players WHERE handle = ?",
        )
        .bind(handle.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::database("find_by_handle", e))?;

        row.as_ref().map(Self::row_to_player).transpose()
    }

    async fn save(&self, player: &Player) -> Result<Player, RepoError> {
        let now = self.clock.now();
        let next_version = player.version + 1;

        let updated = sqlx::query(
            r#"
            UPDATE players
            SET tokens = ?, character_ids = ?, version = ?, updated_at = ?
            WHERE handle = ? AND version = ?
            "#,
        )
        .bind(player.tokens)
        .bind(&player.character_ids)
        .bind(next_version)
        .bind(now.to_rfc3339())
        .bind(player.handle.as_str())
        .bind(player.version)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("save", e))?;

        if updated.rows_affected() == 0 {
            // Either the row does not exist yet or someone else moved the version.
            let inserted = sqlx::query(
                r#"
                INSERT INTO players (handle, tokens, character_ids, version, updated_at)
                VALUES (?, ?, ?, ?, ?)
                ON CONFLICT(handle) DO NOTHING
                "#,
            )
            .bind(player.handle.as_str())
            .bind(player.tokens)
            .bind(&player.character_ids)
            .bind(next_version)
            .bind(now.to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("save", e))?;

            if inserted.rows_affected() == 0 {
                tracing::warn!(
                    player = %player.handle,
                    expected_version = player.version,
                    "Stale player save rejected"
                );
                return Err(RepoError::conflict("Player", &player.handle));
            }
        }

        Ok(Player {
            version: next_version,
            updated_at: Some(now),
            ..player.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::test_fixtures::{fixed_time, handle, player};

    async fn repo(dir: &tempfile::TempDir) -> SqlitePlayerRepo {
        let path = dir.path().join("players.db");
        SqlitePlayerRepo::new(
            path.to_str().expect("utf-8 temp path"),
            Arc::new(FixedClock(fixed_time())),
        )
        .await
        .expect("open player db")
    }

    #[tokio::test]
    async fn unknown_handle_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo(&dir).await;

        assert!(repo.find_by_handle(&handle("ghost")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn first_save_inserts_and_bumps_version() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo(&dir).await;

        let saved = repo
            .save(&player("player1", "[1,3]").with_tokens(50))
            .await
            .unwrap();
        assert_eq!(saved.version, 1);
        assert_eq!(saved.updated_at, Some(fixed_time()));

        let loaded = repo.find_by_handle(&handle("player1")).await.unwrap().unwrap();
        assert_eq!(loaded, saved);
        assert_eq!(loaded.character_ids, "[1,3]");
        assert_eq!(loaded.tokens, 50);
    }

    #[tokio::test]
    async fn save_with_current_version_updates_row() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo(&dir).await;
        let mut current = repo.save(&player("player1", "[]")).await.unwrap();

        current.character_ids = r#"["char1"]"#.to_string();
        let saved = repo.save(&current).await.unwrap();

        assert_eq!(saved.version, 2);
        let loaded = repo.find_by_handle(&handle("player1")).await.unwrap().unwrap();
        assert_eq!(loaded.character_ids, r#"["char1"]"#);
        assert_eq!(loaded.version, 2);
    }

    #[tokio::test]
    async fn stale_save_is_rejected_as_conflict() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo(&dir).await;
        let first_read = repo.save(&player("player1", "[]")).await.unwrap();
        let second_read = first_read.clone();

        let mut winner = first_read;
        winner.character_ids = r#"["char1"]"#.to_string();
        repo.save(&winner).await.unwrap();

        let mut loser = second_read;
        loser.character_ids = r#"["char2"]"#.to_string();
        let err = repo.save(&loser).await.unwrap_err();

        assert!(err.is_conflict());
        let stored = repo.find_by_handle(&handle("player1")).await.unwrap().unwrap();
        assert_eq!(stored.character_ids, r#"["char1"]"#);
    }

    #[tokio::test]
    async fn data_survives_reopening_the_database() {
        let dir = tempfile::tempdir().unwrap();
        repo(&dir)
            .await
            .save(&player("player1", r#"["1"]"#))
            .await
            .unwrap();

        let reopened = repo(&dir).await;
        let loaded = reopened.find_by_handle(&handle("player1")).await.unwrap().unwrap();
        assert_eq!(loaded.character_ids, r#"["1"]"#);
    }
}
