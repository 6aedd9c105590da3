//! Assembles a recorded submission with its quiz for display.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::error::QuizdeskError;
use crate::ledger::Ledger;
use crate::model::{Question, Quiz};
use crate::results::{QuestionResult, Submission, SubmissionId};

/// A submission together with the quiz it answered.
#[derive(Debug, Clone)]
pub struct ResultsView<'a> {
    pub submission: Arc<Submission>,
    pub quiz: &'a Quiz,
}

/// One display row: a quiz question and how it was graded.
#[derive(Debug, Clone, Copy)]
pub struct ResultRow<'a> {
    pub question: &'a Question,
    /// `None` if the submission has no result for this question.
    pub result: Option<&'a QuestionResult>,
}

impl<'a> ResultsView<'a> {
    /// Pair each quiz question, in quiz order, with its graded result.
    pub fn rows(&self) -> Vec<ResultRow<'_>> {
        self.quiz
            .questions
            .iter()
            .map(|question| ResultRow {
                question,
                result: self.submission.result_for(&question.id),
            })
            .collect()
    }
}

/// Resolve a submission and its quiz.
///
/// Fails with `SubmissionNotFound` for an unknown id, or `QuizNotFound` if
/// the submission references a quiz the catalog doesn't have.
pub fn assemble<'a>(
    ledger: &Ledger,
    catalog: &'a Catalog,
    id: SubmissionId,
) -> Result<ResultsView<'a>, QuizdeskError> {
    let submission = ledger.get(id)?;
    let quiz_id = i64::try_from(submission.quiz_id).unwrap_or(i64::MAX);
    let quiz = catalog.get_quiz(quiz_id)?;
    Ok(ResultsView { submission, quiz })
}
