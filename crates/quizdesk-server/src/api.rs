//! JSON shapes for the submission endpoint.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use quizdesk_core::results::{GradedQuiz, SubmissionId};

/// Body of `POST /api/submit_quiz`.
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub quiz_id: i64,
    /// Question id → answer. Numbers are accepted and read as text.
    #[serde(default)]
    pub answers: HashMap<String, Value>,
}

impl SubmitRequest {
    /// Answers as strings, keyed by question id. `null` answers are dropped.
    pub fn answer_strings(&self) -> HashMap<String, String> {
        self.answers
            .iter()
            .filter_map(|(id, value)| {
                let text = match value {
                    Value::Null => return None,
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                Some((id.clone(), text))
            })
            .collect()
    }
}

/// Response of `POST /api/submit_quiz`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    /// Number of questions in the quiz.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_points: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_id: Option<SubmissionId>,
}

impl SubmitResponse {
    pub fn failure(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            score: None,
            total: None,
            total_points: None,
            submission_id: None,
        }
    }

    pub fn accepted(graded: &GradedQuiz, submission_id: SubmissionId) -> Self {
        Self {
            success: true,
            message: "Quiz submitted successfully".to_string(),
            score: Some(graded.score),
            total: Some(graded.results.len()),
            total_points: Some(graded.total_points),
            submission_id: Some(submission_id),
        }
    }
}
