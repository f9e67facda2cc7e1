//! Persistence gateway for comparison results.
//!
//! `AppState` holds an `Arc<dyn ResultStore>`; `PgResultStore` is the
//! production backend over the process-wide pool.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{error, info};

use crate::models::record::StoredRecord;

#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Inserts one record, returning the number of rows written.
    async fn insert(&self, record: &StoredRecord) -> Result<u64, sqlx::Error>;

    async fn fetch_all(&self) -> Result<Vec<StoredRecord>, sqlx::Error>;
}

pub struct PgResultStore {
    pool: PgPool,
}

impl PgResultStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResultStore for PgResultStore {
    async fn insert(&self, record: &StoredRecord) -> Result<u64, sqlx::Error> {
        let done = sqlx::query(
            r#"
            INSERT INTO gpt_responses
                ("questionId", tag, model, "fullMessage", answer1, "ratingAnswer1",
                 "explanationForRating1", answer2, "ratingAnswer2", "explanationForRating2",
                 answer3, "ratingAnswer3", "explanationForRating3", result)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(&record.question_id)
        .bind(&record.tag)
        .bind(&record.model)
        .bind(&record.full_message)
        .bind(&record.answer1)
        .bind(record.rating_answer1)
        .bind(&record.explanation_for_rating1)
        .bind(&record.answer2)
        .bind(record.rating_answer2)
        .bind(&record.explanation_for_rating2)
        .bind(&record.answer3)
        .bind(record.rating_answer3)
        .bind(&record.explanation_for_rating3)
        .bind(&record.result)
        .execute(&self.pool)
        .await?;

        Ok(done.rows_affected())
    }

    async fn fetch_all(&self) -> Result<Vec<StoredRecord>, sqlx::Error> {
        sqlx::query_as::<_, StoredRecord>("SELECT * FROM gpt_responses")
            .fetch_all(&self.pool)
            .await
    }
}

/// Writes a comparison result. Failures are logged and not returned: the
/// caller's response does not depend on whether the row landed.
pub async fn persist_comparison(store: &dyn ResultStore, record: &StoredRecord) {
    match store.insert(record).await {
        Ok(rows) => info!(
            "Stored comparison for question {:?} ({rows} row(s))",
            record.question_id
        ),
        Err(e) => error!(
            "Error inserting comparison for question {:?}: {e}",
            record.question_id
        ),
    }
}
