//! Population job tests against the in-memory store.
//!
//! These pin the observable contract of one weekly run: exactly eight
//! distinct questions, dated consecutively starting tomorrow at midnight
//! UTC, written all-or-nothing.

use std::collections::HashSet;

use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};

use qotd_scheduler::config::SAMPLE_COUNT;
use qotd_scheduler::error::AppError;
use qotd_scheduler::jobs::weekly_questions::run_once;
use qotd_scheduler::questions::ALL_QUESTIONS;
use qotd_scheduler::store::MemoryQuestionStore;

fn noon(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("valid test date")
        .and_hms_opt(12, 0, 0)
        .expect("valid test time")
        .and_utc()
}

#[tokio::test]
async fn test_run_populates_exactly_sample_count_records() {
    let store = MemoryQuestionStore::new();

    let count = run_once(&store, ALL_QUESTIONS, noon(2025, 6, 10))
        .await
        .expect("run should succeed");

    assert_eq!(count, SAMPLE_COUNT);
    assert_eq!(store.records().len(), SAMPLE_COUNT);
}

#[tokio::test]
async fn test_question_texts_are_distinct_within_a_run() {
    let store = MemoryQuestionStore::new();

    run_once(&store, ALL_QUESTIONS, noon(2025, 6, 10))
        .await
        .expect("run should succeed");

    let records = store.records();
    let texts: HashSet<&str> = records.iter().map(|r| r.question.as_str()).collect();
    assert_eq!(texts.len(), records.len());
}

#[tokio::test]
async fn test_records_cover_consecutive_days_starting_tomorrow() {
    let store = MemoryQuestionStore::new();

    run_once(&store, ALL_QUESTIONS, noon(2025, 6, 10))
        .await
        .expect("run should succeed");

    let tomorrow = NaiveDate::from_ymd_opt(2025, 6, 11).expect("valid test date");
    for (offset, record) in store.records().iter().enumerate() {
        assert_eq!(
            record.created_at.date_naive(),
            tomorrow + Days::new(offset as u64)
        );
        assert_eq!(record.created_at.time(), NaiveTime::MIN);
    }
}

#[tokio::test]
async fn test_batch_rolls_over_month_and_year_boundaries() {
    let store = MemoryQuestionStore::new();

    run_once(&store, ALL_QUESTIONS, noon(2025, 12, 28))
        .await
        .expect("run should succeed");

    let records = store.records();
    assert_eq!(
        records[0].created_at.date_naive(),
        NaiveDate::from_ymd_opt(2025, 12, 29).expect("valid test date")
    );
    assert_eq!(
        records[7].created_at.date_naive(),
        NaiveDate::from_ymd_opt(2026, 1, 5).expect("valid test date")
    );
}

#[tokio::test]
async fn test_each_record_gets_a_unique_id() {
    let store = MemoryQuestionStore::new();

    run_once(&store, ALL_QUESTIONS, noon(2025, 6, 10))
        .await
        .expect("run should succeed");

    let records = store.records();
    let ids: HashSet<_> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids.len(), records.len());
}

#[tokio::test]
async fn test_failed_batch_leaves_no_records() {
    let store = MemoryQuestionStore::failing_after(3);

    let result = run_once(&store, ALL_QUESTIONS, noon(2025, 6, 10)).await;

    assert!(matches!(result, Err(AppError::Store(_))));
    assert!(store.records().is_empty());
}

#[tokio::test]
async fn test_too_few_candidates_fails_before_writing() {
    let store = MemoryQuestionStore::new();
    let candidates = ["one", "two", "three"];

    let err = run_once(&store, &candidates, noon(2025, 6, 10))
        .await
        .expect_err("3 candidates cannot fill a week");

    assert!(matches!(
        err,
        AppError::TooFewCandidates {
            available: 3,
            requested
        } if requested == SAMPLE_COUNT
    ));
    assert!(store.records().is_empty());
}

#[tokio::test]
async fn test_repeated_runs_append_independent_batches() {
    let store = MemoryQuestionStore::new();

    run_once(&store, ALL_QUESTIONS, noon(2025, 6, 10))
        .await
        .expect("first run should succeed");
    run_once(&store, ALL_QUESTIONS, noon(2025, 6, 10))
        .await
        .expect("second run should succeed");

    // No duplicate-run protection: both batches land.
    assert_eq!(store.records().len(), 2 * SAMPLE_COUNT);
}
