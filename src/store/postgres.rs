//! PostgreSQL-backed question store.
//!
//! Batch writes run inside a single transaction. Each record is upserted
//! keyed on its id, so replaying a batch overwrites rather than duplicates.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::{QuestionRecord, QuestionStore, StoreError, QUESTIONS_COLLECTION};

/// Create a connection pool for the given database URL.
pub async fn create_pool(database_url: &str) -> Result<PgPool, StoreError> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Apply embedded migrations, creating the `questions` table if needed.
pub async fn run_migrations(pool: &PgPool) -> Result<(), StoreError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Production store writing to the `questions` table.
#[derive(Clone)]
pub struct PgQuestionStore {
    pool: PgPool,
}

impl PgQuestionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionStore for PgQuestionStore {
    async fn insert_batch(&self, records: &[QuestionRecord]) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        let query = format!(
            "INSERT INTO {QUESTIONS_COLLECTION} (id, question, created_at) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (id) DO UPDATE \
             SET question = EXCLUDED.question, created_at = EXCLUDED.created_at"
        );

        for record in records {
            sqlx::query(&query)
                .bind(record.id)
                .bind(&record.question)
                .bind(record.created_at)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }
}
