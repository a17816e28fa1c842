//! Persistence boundary for question records.
//!
//! The weekly job only needs an all-or-nothing batch sink, so it talks to
//! the [`QuestionStore`] trait rather than a concrete backend.
//! [`PgQuestionStore`] is the production implementation;
//! [`MemoryQuestionStore`] backs the test suite, including the simulated
//! mid-batch failure used to exercise batch atomicity.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

pub use memory::MemoryQuestionStore;
pub use postgres::PgQuestionStore;

/// Name of the collection (table) the weekly job writes into.
pub const QUESTIONS_COLLECTION: &str = "questions";

/// A question scheduled for a single calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    /// Unique identifier, allocated by the writer before the batch is sent.
    pub id: Uuid,
    /// Prompt text, copied verbatim from the candidate list.
    pub question: String,
    /// The day this question is scheduled for, at midnight UTC.
    pub created_at: DateTime<Utc>,
}

impl QuestionRecord {
    /// Build a record with a freshly allocated id.
    pub fn new(question: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            question: question.into(),
            created_at,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// An atomic multi-record sink for question records.
///
/// A batch either becomes fully visible or leaves the store untouched;
/// implementations must never expose a partially written batch.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// Persist every record in `records` as one atomic batch.
    async fn insert_batch(&self, records: &[QuestionRecord]) -> Result<(), StoreError>;
}
