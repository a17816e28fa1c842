//! Uniform random selection of candidate questions.
//!
//! Selection is without replacement within a single run: `count` distinct
//! indices are drawn via a partial Fisher-Yates pass
//! ([`rand::seq::index::sample`]), so every candidate is equally likely to
//! be picked regardless of its position in the list.

use rand::Rng;

use crate::error::AppError;

/// Select `count` distinct entries from `candidates`, uniformly at random.
///
/// The returned entries are in draw order, not source order. Fails with
/// [`AppError::TooFewCandidates`] when the list is too short to sample
/// without replacement.
pub fn sample_questions<'a, R: Rng + ?Sized>(
    rng: &mut R,
    candidates: &[&'a str],
    count: usize,
) -> Result<Vec<&'a str>, AppError> {
    if candidates.len() < count {
        return Err(AppError::TooFewCandidates {
            available: candidates.len(),
            requested: count,
        });
    }

    let picked = rand::seq::index::sample(rng, candidates.len(), count);
    Ok(picked.iter().map(|i| candidates[i]).collect())
}
