//! TOML quiz file parser.
//!
//! Loads quizzes from TOML files and directories, and validates them.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::catalog::Catalog;
use crate::grader::parse_numeric_answer;
use crate::model::{AnswerFormat, ExpectedAnswer, Question, QuestionKind, Quiz};

/// Intermediate TOML structure for parsing quiz files.
#[derive(Debug, Deserialize)]
struct TomlQuizFile {
    quiz: TomlQuizHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlQuizHeader {
    title: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, alias = "text")]
    prompt: String,
    #[serde(default)]
    points: u32,
    answer: toml::Value,
    #[serde(default)]
    answer_format: Option<String>,
}

/// Parse a single TOML file into a `Quiz`.
pub fn parse_quiz_file(path: &Path) -> Result<Quiz> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read quiz file: {}", path.display()))?;

    parse_quiz_str(&content, path)
}

/// Parse a TOML string into a `Quiz` (useful for testing).
///
/// The returned quiz has id 0; the catalog assigns real ids by position.
pub fn parse_quiz_str(content: &str, source_path: &Path) -> Result<Quiz> {
    let parsed: TomlQuizFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let mut seen_ids = HashSet::new();
    let questions = parsed
        .questions
        .into_iter()
        .map(|q| {
            anyhow::ensure!(
                seen_ids.insert(q.id.clone()),
                "{}: duplicate question ID: {}",
                source_path.display(),
                q.id
            );
            convert_question(q)
                .with_context(|| format!("invalid question in {}", source_path.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    questions
        .iter()
        .try_fold(0u32, |acc, q| acc.checked_add(q.points))
        .with_context(|| {
            format!(
                "{}: question points add up to more than {}",
                source_path.display(),
                u32::MAX
            )
        })?;

    Ok(Quiz {
        id: 0,
        title: parsed.quiz.title,
        description: parsed.quiz.description,
        questions,
    })
}

fn convert_question(q: TomlQuestion) -> Result<Question> {
    let kind: QuestionKind = q
        .kind
        .parse()
        .map_err(|e: String| anyhow::anyhow!("{}: {}", q.id, e))?;

    let expected = match kind {
        QuestionKind::Text => ExpectedAnswer::Text(match q.answer {
            toml::Value::String(s) => s,
            toml::Value::Integer(i) => i.to_string(),
            toml::Value::Float(f) => f.to_string(),
            other => anyhow::bail!(
                "{}: text answer must be a string, got {}",
                q.id,
                other.type_str()
            ),
        }),
        QuestionKind::Numerical => ExpectedAnswer::Numerical(match q.answer {
            toml::Value::Integer(i) => i as f64,
            toml::Value::Float(f) if f.is_finite() => f,
            toml::Value::String(s) => parse_numeric_answer(&s)
                .map_err(|e| anyhow::anyhow!("{}: numerical answer: {}", q.id, e))?,
            other => anyhow::bail!(
                "{}: numerical answer must be a finite number, got {}",
                q.id,
                other
            ),
        }),
    };

    let answer_format = q
        .answer_format
        .map(|f| f.parse::<AnswerFormat>())
        .transpose()
        .map_err(|e| anyhow::anyhow!("{}: {}", q.id, e))?;

    if answer_format.is_some() && kind == QuestionKind::Text {
        anyhow::bail!("{}: answer_format only applies to numerical questions", q.id);
    }

    Ok(Question {
        id: q.id,
        prompt: q.prompt,
        points: q.points,
        expected,
        answer_format,
    })
}

/// Recursively load all `.toml` quiz files from a directory.
///
/// Files are visited in sorted path order so quiz ids are stable between
/// runs. Files that fail to parse are skipped with a warning.
pub fn load_catalog_directory(dir: &Path) -> Result<Vec<Quiz>> {
    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<_>>()?;
    paths.sort();

    let mut quizzes = Vec::new();
    for path in paths {
        if path.is_dir() {
            quizzes.extend(load_catalog_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_quiz_file(&path) {
                Ok(quiz) => quizzes.push(quiz),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(quizzes)
}

/// A warning from catalog validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Position of the quiz in the catalog.
    pub quiz_id: usize,
    /// The question ID (if applicable).
    pub question_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a catalog for common authoring mistakes.
pub fn validate_catalog(catalog: &Catalog) -> Vec<ValidationWarning> {
    catalog
        .list_quizzes()
        .iter()
        .flat_map(validate_quiz)
        .collect()
}

/// Validate one quiz.
pub fn validate_quiz(quiz: &Quiz) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let warn = |question_id: Option<&str>, message: String| ValidationWarning {
        quiz_id: quiz.id,
        question_id: question_id.map(str::to_string),
        message,
    };

    if quiz.questions.is_empty() {
        warnings.push(warn(None, "quiz has no questions".into()));
    }

    for q in &quiz.questions {
        if q.prompt.trim().is_empty() {
            warnings.push(warn(Some(&q.id), "prompt is empty".into()));
        }
        if q.points == 0 {
            warnings.push(warn(Some(&q.id), "question is worth 0 points".into()));
        }
        if let ExpectedAnswer::Text(answer) = &q.expected {
            if answer.trim().is_empty() {
                warnings.push(warn(
                    Some(&q.id),
                    "text answer is empty, every submission will match".into(),
                ));
            }
        }
    }

    warnings
}
