//! Append-only in-memory submission store.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;

use crate::error::QuizdeskError;
use crate::model::QuizId;
use crate::results::{GradedQuiz, Submission, SubmissionId};

/// Records graded submissions under dense, increasing ids starting at 0.
///
/// Id assignment and insertion happen under one lock, so concurrent
/// `record` calls never share or skip an id.
#[derive(Debug, Default)]
pub struct Ledger {
    submissions: Mutex<Vec<Arc<Submission>>>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a graded attempt and return its id.
    pub fn record(&self, quiz_id: QuizId, username: &str, graded: GradedQuiz) -> SubmissionId {
        let mut submissions = self
            .submissions
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let id = submissions.len() as SubmissionId;
        submissions.push(Arc::new(Submission {
            id,
            quiz_id,
            username: username.to_string(),
            score: graded.score,
            total_points: graded.total_points,
            results: graded.results,
            created_at: Utc::now(),
        }));
        id
    }

    /// Fetch a recorded submission.
    pub fn get(&self, id: SubmissionId) -> Result<Arc<Submission>, QuizdeskError> {
        let submissions = self
            .submissions
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        usize::try_from(id)
            .ok()
            .and_then(|index| submissions.get(index))
            .cloned()
            .ok_or(QuizdeskError::SubmissionNotFound(id))
    }

    pub fn len(&self) -> usize {
        self.submissions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
