use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Candidate list has {available} questions, need at least {requested}")]
    TooFewCandidates { available: usize, requested: usize },

    #[error("Date arithmetic overflowed the supported calendar range")]
    DateOverflow,
}
