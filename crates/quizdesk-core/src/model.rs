//! Core data model types for quizdesk.
//!
//! Quizzes and questions are loaded once into the catalog and never
//! mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Position of a quiz in the catalog.
pub type QuizId = usize;

/// A quiz: an ordered set of questions with a title and description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    /// Position of this quiz in the catalog.
    pub id: QuizId,
    /// Human-readable title.
    pub title: String,
    /// Short description shown in the quiz list.
    #[serde(default)]
    pub description: String,
    /// Questions in display order.
    pub questions: Vec<Question>,
}

impl Quiz {
    /// Sum of the point values of every question.
    ///
    /// Saturates; catalogs loaded from files are rejected at parse time if
    /// their points would overflow.
    pub fn total_points(&self) -> u32 {
        self.questions
            .iter()
            .fold(0u32, |acc, q| acc.saturating_add(q.points))
    }

    /// Look up a question by its identifier.
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Metadata for list views.
    pub fn summary(&self) -> QuizSummary {
        QuizSummary {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            question_count: self.questions.len(),
            total_points: self.total_points(),
        }
    }
}

/// Summary of a quiz (without the question bodies).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSummary {
    pub id: QuizId,
    pub title: String,
    pub description: String,
    pub question_count: usize,
    pub total_points: u32,
}

/// A single gradable prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Identifier, unique within its quiz (e.g. "question_1").
    pub id: String,
    /// Prompt body. Trusted HTML from the catalog file.
    pub prompt: String,
    /// Points awarded for a correct answer.
    pub points: u32,
    /// What a correct answer looks like.
    pub expected: ExpectedAnswer,
    /// Optional display hint for the answer input.
    #[serde(default)]
    pub answer_format: Option<AnswerFormat>,
}

impl Question {
    pub fn kind(&self) -> QuestionKind {
        match self.expected {
            ExpectedAnswer::Text(_) => QuestionKind::Text,
            ExpectedAnswer::Numerical(_) => QuestionKind::Numerical,
        }
    }
}

/// The two supported question types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Text,
    Numerical,
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::Text => write!(f, "text"),
            QuestionKind::Numerical => write!(f, "numerical"),
        }
    }
}

impl FromStr for QuestionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(QuestionKind::Text),
            "numerical" | "numeric" | "number" => Ok(QuestionKind::Numerical),
            other => Err(format!("unknown question type: {other}")),
        }
    }
}

/// Expected answer, typed by question kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "answer", rename_all = "lowercase")]
pub enum ExpectedAnswer {
    Text(String),
    Numerical(f64),
}

impl fmt::Display for ExpectedAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedAnswer::Text(s) => f.write_str(s),
            ExpectedAnswer::Numerical(n) => write!(f, "{n}"),
        }
    }
}

/// How a numerical answer should be presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerFormat {
    Currency,
    Percent,
}

impl fmt::Display for AnswerFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerFormat::Currency => write!(f, "currency"),
            AnswerFormat::Percent => write!(f, "percent"),
        }
    }
}

impl FromStr for AnswerFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "currency" => Ok(AnswerFormat::Currency),
            "percent" | "percentage" => Ok(AnswerFormat::Percent),
            other => Err(format!("unknown answer format: {other}")),
        }
    }
}
