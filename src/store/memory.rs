//! In-memory question store for tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{QuestionRecord, QuestionStore, StoreError};

/// Test store keeping records in process memory.
///
/// A batch is staged in full before it is published, mirroring the
/// all-or-nothing contract of the production store. [`Self::failing_after`]
/// builds a store that errors partway through every batch, which the tests
/// use to verify that a failed batch leaves nothing behind.
#[derive(Debug, Default)]
pub struct MemoryQuestionStore {
    records: Mutex<Vec<QuestionRecord>>,
    /// When set, fail each batch after staging this many records.
    fail_after: Option<usize>,
}

impl MemoryQuestionStore {
    /// Store that accepts every batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that fails each batch after staging `n` records.
    pub fn failing_after(n: usize) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            fail_after: Some(n),
        }
    }

    /// Snapshot of the currently visible records, in insertion order.
    pub fn records(&self) -> Vec<QuestionRecord> {
        self.records.lock().expect("store mutex poisoned").clone()
    }
}

#[async_trait]
impl QuestionStore for MemoryQuestionStore {
    async fn insert_batch(&self, records: &[QuestionRecord]) -> Result<(), StoreError> {
        let mut staged = Vec::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if self.fail_after.is_some_and(|limit| position >= limit) {
                return Err(StoreError::Unavailable(
                    "simulated mid-batch failure".to_string(),
                ));
            }
            staged.push(record.clone());
        }

        self.records
            .lock()
            .expect("store mutex poisoned")
            .extend(staged);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn record(text: &str) -> QuestionRecord {
        QuestionRecord::new(text, Utc::now())
    }

    #[tokio::test]
    async fn test_successful_batch_is_published_in_order() {
        let store = MemoryQuestionStore::new();
        let batch = vec![record("first"), record("second"), record("third")];

        store.insert_batch(&batch).await.expect("batch should persist");

        let stored = store.records();
        assert_eq!(stored, batch);
    }

    #[tokio::test]
    async fn test_failed_batch_publishes_nothing() {
        let store = MemoryQuestionStore::failing_after(2);
        let batch = vec![record("first"), record("second"), record("third")];

        let err = store.insert_batch(&batch).await.expect_err("batch should fail");
        assert!(matches!(err, StoreError::Unavailable(_)));
        assert!(store.records().is_empty());
    }

    #[tokio::test]
    async fn test_batches_accumulate_across_calls() {
        let store = MemoryQuestionStore::new();

        store
            .insert_batch(&[record("one")])
            .await
            .expect("batch should persist");
        store
            .insert_batch(&[record("two")])
            .await
            .expect("batch should persist");

        assert_eq!(store.records().len(), 2);
    }
}
