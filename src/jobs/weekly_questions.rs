//! Weekly question population job.
//!
//! Once a week the job samples [`SAMPLE_COUNT`] questions from the static
//! candidate list, assigns each one a consecutive calendar day starting
//! tomorrow, and writes them all to the store as a single atomic batch.
//! Runs are independent: nothing is read back from the store and nothing
//! prevents a second run from writing another batch for the same week.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio_util::sync::CancellationToken;

use crate::config::SAMPLE_COUNT;
use crate::error::AppError;
use crate::questions::ALL_QUESTIONS;
use crate::sampling::sample_questions;
use crate::schedule::{day_timestamp, next_weekly_run, population_dates};
use crate::store::{QuestionRecord, QuestionStore};

/// Run one population pass against `store`.
///
/// Samples [`SAMPLE_COUNT`] distinct entries from `candidates`, dates them
/// across the days following `now`, and submits them as one batch. Returns
/// the number of records persisted; on any failure the store is untouched.
pub async fn run_once(
    store: &dyn QuestionStore,
    candidates: &[&str],
    now: DateTime<Utc>,
) -> Result<usize, AppError> {
    let selected = sample_questions(&mut rand::rng(), candidates, SAMPLE_COUNT)?;
    let dates = population_dates(now.date_naive(), selected.len())?;

    let records: Vec<QuestionRecord> = selected
        .iter()
        .zip(&dates)
        .map(|(text, date)| QuestionRecord::new(*text, day_timestamp(*date)))
        .collect();

    store.insert_batch(&records).await?;

    tracing::info!(
        count = records.len(),
        "Populated random questions for next week"
    );
    Ok(records.len())
}

/// Background service driving [`run_once`] on the weekly cadence.
pub struct WeeklyScheduler {
    store: Arc<dyn QuestionStore>,
}

impl WeeklyScheduler {
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self { store }
    }

    /// Run the scheduler loop until `cancel` is triggered.
    ///
    /// Each iteration sleeps until the next Sunday midnight UTC and runs
    /// the job once. A failed run is logged and not retried; the next
    /// weekly instant gets a fresh attempt.
    pub async fn run(&self, cancel: CancellationToken) {
        loop {
            let now = Utc::now();
            let next = next_weekly_run(now);
            // next is strictly after now, so the conversion cannot underflow
            let wait = (next - now).to_std().unwrap_or_default();

            tracing::info!(next_run = %next, "Weekly question job scheduled");

            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("Weekly question scheduler stopping");
                    break;
                }
                _ = tokio::time::sleep(wait) => {
                    if let Err(e) = run_once(self.store.as_ref(), ALL_QUESTIONS, Utc::now()).await {
                        tracing::error!(error = %e, "Weekly question job failed");
                    }
                }
            }
        }
    }
}
