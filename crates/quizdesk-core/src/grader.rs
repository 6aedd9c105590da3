//! Answer grading.
//!
//! Grading is a pure function of the quiz and the submitted answers. Each
//! question is graded independently, in quiz order, and earns either its
//! full point value or nothing.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::error::MalformedAnswer;
use crate::model::{AnswerFormat, ExpectedAnswer, Question, Quiz};
use crate::results::{GradedQuiz, QuestionResult};

/// Maximum absolute difference (exclusive) for a numerical answer to count.
pub const NUMERIC_TOLERANCE: f64 = 0.01;

/// `NUMERIC_TOLERANCE` as an exact decimal.
const DECIMAL_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Characters dropped from numerical answers before parsing.
const IGNORED_NUMERIC_CHARS: &[char] = &[',', '$', '€', '£', '¥'];

/// Grade every question of `quiz` against `answers` (keyed by question id).
///
/// Missing answers are graded as the empty string.
pub fn grade(quiz: &Quiz, answers: &HashMap<String, String>) -> GradedQuiz {
    let results: Vec<QuestionResult> = quiz
        .questions
        .iter()
        .map(|question| {
            let answer = answers.get(&question.id).map(String::as_str).unwrap_or("");
            grade_question(question, answer)
        })
        .collect();

    let score = results
        .iter()
        .fold(0u32, |acc, r| acc.saturating_add(r.points));

    GradedQuiz {
        results,
        score,
        total_points: quiz.total_points(),
    }
}

/// Grade a single answer.
///
/// A trailing `%` is accepted on percent-formatted questions, matching the
/// suffix shown next to the input.
pub fn grade_question(question: &Question, answer: &str) -> QuestionResult {
    let graded_text = match question.answer_format {
        Some(AnswerFormat::Percent) => answer.trim().trim_end_matches('%'),
        _ => answer,
    };
    let is_correct = is_correct(&question.expected, graded_text);
    QuestionResult {
        question_id: question.id.clone(),
        is_correct,
        user_answer: answer.to_string(),
        correct_answer: question.expected.to_string(),
        points: if is_correct { question.points } else { 0 },
    }
}

/// Whether `answer` satisfies `expected`.
///
/// - Text: the expected string appears anywhere in the answer, ignoring case.
/// - Numerical: the answer parses and lies strictly within
///   [`NUMERIC_TOLERANCE`] of the expected value. Unparseable input is
///   simply incorrect.
pub fn is_correct(expected: &ExpectedAnswer, answer: &str) -> bool {
    match expected {
        ExpectedAnswer::Text(expected) => answer.to_lowercase().contains(&expected.to_lowercase()),
        ExpectedAnswer::Numerical(expected) => match parse_numeric_answer(answer) {
            Ok(value) => within_tolerance(value, *expected),
            Err(e) => {
                tracing::debug!("numerical answer rejected: {e}");
                false
            }
        },
    }
}

/// Parse a user-typed number, tolerating thousands separators and currency
/// symbols (e.g. `"$213,000"`).
pub fn parse_numeric_answer(raw: &str) -> Result<f64, MalformedAnswer> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !IGNORED_NUMERIC_CHARS.contains(c))
        .collect();
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        return Err(MalformedAnswer::Empty);
    }

    let value: f64 = cleaned
        .parse()
        .map_err(|_| MalformedAnswer::NotANumber(raw.to_string()))?;

    if !value.is_finite() {
        return Err(MalformedAnswer::NotFinite(raw.to_string()));
    }

    Ok(value)
}

/// Compare in decimal so that `|value - expected| < 0.01` holds exactly at
/// both edges. Each side is read back from its shortest round-trip form,
/// i.e. the digits the user or the quiz author actually wrote.
///
/// Magnitudes beyond `Decimal`'s range fall back to `f64`. There, adjacent
/// floats are far more than 0.01 apart, so only equal values pass.
fn within_tolerance(value: f64, expected: f64) -> bool {
    let exact_delta = to_decimal(value)
        .zip(to_decimal(expected))
        .and_then(|(value, expected)| value.checked_sub(expected));

    match exact_delta {
        Some(delta) => delta.abs() < DECIMAL_TOLERANCE,
        None => (value - expected).abs() < NUMERIC_TOLERANCE,
    }
}

fn to_decimal(value: f64) -> Option<Decimal> {
    value.to_string().parse().ok()
}
