//! Grading outcomes and recorded submissions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::QuizId;

/// Sequential submission identifier, starting at 0.
pub type SubmissionId = u64;

/// Outcome of grading a single question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionResult {
    pub question_id: String,
    pub is_correct: bool,
    /// The answer exactly as the user submitted it.
    pub user_answer: String,
    /// String form of the expected answer.
    pub correct_answer: String,
    /// Either 0 or the question's full point value.
    pub points: u32,
}

/// Outcome of grading a whole quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradedQuiz {
    /// Per-question results, in quiz order.
    pub results: Vec<QuestionResult>,
    /// Sum of awarded points.
    pub score: u32,
    /// Sum of every question's point value.
    pub total_points: u32,
}

impl GradedQuiz {
    /// Number of questions answered correctly.
    pub fn correct_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_correct).count()
    }

    /// Score as a fraction of the maximum, 0.0 for an empty quiz.
    pub fn ratio(&self) -> f64 {
        if self.total_points == 0 {
            0.0
        } else {
            f64::from(self.score) / f64::from(self.total_points)
        }
    }
}

/// One graded attempt at a quiz, as stored in the ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: SubmissionId,
    pub quiz_id: QuizId,
    pub username: String,
    pub score: u32,
    pub total_points: u32,
    pub results: Vec<QuestionResult>,
    pub created_at: DateTime<Utc>,
}

impl Submission {
    /// Result for a given question, if that question was graded.
    pub fn result_for(&self, question_id: &str) -> Option<&QuestionResult> {
        self.results.iter().find(|r| r.question_id == question_id)
    }
}
