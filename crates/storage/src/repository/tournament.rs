//! Persistence for tournament documents.
//!
//! Records are looked up by the `id` field inside the document, never by the
//! storage key.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use sqlx::types::Json;

use crate::error::Result;
use crate::models::Tournament;

#[async_trait]
pub trait TournamentStore: Send + Sync {
    /// First stored document whose `id` field matches.
    async fn find_by_id(&self, id: &str) -> Result<Option<Value>>;

    /// Store a document as a new record.
    async fn insert(&self, document: &Value) -> Result<()>;

    /// Remove every record whose `id` field matches, returning how many went.
    async fn delete_by_id(&self, id: &str) -> Result<u64>;

    /// Replace any stored copy of the tournament with its current document.
    ///
    /// This is a find, a delete and an insert with nothing tying them
    /// together: if the insert fails after the delete went through, the
    /// previous record is gone. Last write wins between concurrent upserts.
    async fn upsert(&self, tournament: &Tournament) -> Result<Value> {
        let document = tournament.to_document()?;

        if self.find_by_id(tournament.id()).await?.is_some() {
            let removed = self.delete_by_id(tournament.id()).await?;
            tracing::debug!(
                tournament_id = %tournament.id(),
                removed,
                "Replacing stored tournament"
            );
        }

        self.insert(&document).await?;

        Ok(document)
    }
}

/// PostgreSQL implementation keeping each tournament as a JSONB document.
pub struct PgTournamentStore {
    pool: PgPool,
}

impl PgTournamentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TournamentStore for PgTournamentStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<Value>> {
        let document = sqlx::query_scalar::<_, Json<Value>>(
            r#"
            SELECT document
            FROM tournaments
            WHERE document->>'id' = $1
            ORDER BY document_id
            LIMIT 1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(document.map(|Json(document)| document))
    }

    async fn insert(&self, document: &Value) -> Result<()> {
        sqlx::query("INSERT INTO tournaments (document) VALUES ($1)")
            .bind(Json(document))
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> Result<u64> {
        let result = sqlx::query("DELETE FROM tournaments WHERE document->>'id' = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
