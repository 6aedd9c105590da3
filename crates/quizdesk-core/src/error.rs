//! Error types for catalog and ledger lookups and answer parsing.

use thiserror::Error;

/// Lookup failures surfaced to callers of the catalog, ledger, and presenter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizdeskError {
    /// No quiz at this position in the catalog.
    #[error("quiz not found: {0}")]
    QuizNotFound(i64),

    /// No submission recorded under this id.
    #[error("submission not found: {0}")]
    SubmissionNotFound(u64),
}

impl QuizdeskError {
    /// Returns `true` for every not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            QuizdeskError::QuizNotFound(_) | QuizdeskError::SubmissionNotFound(_)
        )
    }
}

/// Why a submitted answer could not be read as a number.
///
/// The grader never propagates this; it grades the answer as incorrect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedAnswer {
    /// Nothing left after stripping separators and currency symbols.
    #[error("answer is empty")]
    Empty,

    /// The remaining text is not a number.
    #[error("not a number: {0:?}")]
    NotANumber(String),

    /// Parsed, but infinite or NaN.
    #[error("not a finite number: {0:?}")]
    NotFinite(String),
}
