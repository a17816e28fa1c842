//! Background jobs.
//!
//! One job exists today: the weekly question population run. [`spawn`]
//! wires its scheduler loop onto a dedicated tokio task; the returned
//! handle resolves once the loop observes cancellation.

pub mod weekly_questions;

use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::store::QuestionStore;
use weekly_questions::WeeklyScheduler;

/// Spawn the weekly population scheduler on a background task.
pub fn spawn(store: Arc<dyn QuestionStore>, cancel: CancellationToken) -> JoinHandle<()> {
    let scheduler = WeeklyScheduler::new(store);
    tokio::spawn(async move { scheduler.run(cancel).await })
}
