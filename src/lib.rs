//! Weekly question-of-the-day population service.
//!
//! Two independent pieces share this process: a liveness endpoint that
//! answers every HTTP request with a fixed 200, and a weekly job that
//! samples eight questions from a static list, dates them across the
//! coming week, and writes them to the question store in one atomic batch.

pub mod config;
pub mod error;
pub mod jobs;
pub mod middleware;
pub mod questions;
pub mod routes;
pub mod sampling;
pub mod schedule;
pub mod store;
