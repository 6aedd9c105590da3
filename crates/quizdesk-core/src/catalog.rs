//! Read-only quiz catalog.

use std::path::Path;

use anyhow::Result;

use crate::error::QuizdeskError;
use crate::model::{Quiz, QuizSummary};
use crate::parser;

/// The bundled demo quiz, used when no catalog path is configured.
const BUILTIN_CATALOG: &str = include_str!("../../../catalogs/exercise-3.toml");

/// Ordered, immutable collection of quizzes. A quiz's id is its position.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    quizzes: Vec<Quiz>,
}

impl Catalog {
    /// Build a catalog, renumbering quizzes by position.
    pub fn new(quizzes: Vec<Quiz>) -> Self {
        let quizzes = quizzes
            .into_iter()
            .enumerate()
            .map(|(id, mut quiz)| {
                quiz.id = id;
                quiz
            })
            .collect();
        Self { quizzes }
    }

    /// Load a catalog from a single quiz file or a directory of them.
    pub fn load(path: &Path) -> Result<Self> {
        let quizzes = if path.is_dir() {
            parser::load_catalog_directory(path)?
        } else {
            vec![parser::parse_quiz_file(path)?]
        };
        Ok(Self::new(quizzes))
    }

    /// The bundled single-quiz catalog.
    pub fn builtin() -> Result<Self> {
        let quiz = parser::parse_quiz_str(BUILTIN_CATALOG, Path::new("<builtin>"))?;
        Ok(Self::new(vec![quiz]))
    }

    /// All quizzes in display order.
    pub fn list_quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }

    /// Metadata for every quiz, in display order.
    pub fn summaries(&self) -> Vec<QuizSummary> {
        self.quizzes.iter().map(Quiz::summary).collect()
    }

    /// Look up a quiz by position. Negative or out-of-range ids are not found.
    pub fn get_quiz(&self, id: i64) -> Result<&Quiz, QuizdeskError> {
        usize::try_from(id)
            .ok()
            .and_then(|index| self.quizzes.get(index))
            .ok_or(QuizdeskError::QuizNotFound(id))
    }

    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ExpectedAnswer, QuestionKind};

    fn quiz(title: &str) -> Quiz {
        Quiz {
            id: 99,
            title: title.into(),
            description: String::new(),
            questions: vec![],
        }
    }

    #[test]
    fn ids_are_positions() {
        let catalog = Catalog::new(vec![quiz("first"), quiz("second")]);
        let ids: Vec<usize> = catalog.list_quizzes().iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![0, 1]);
        assert_eq!(catalog.get_quiz(1).unwrap().title, "second");
    }

    #[test]
    fn out_of_range_is_not_found() {
        let catalog = Catalog::new(vec![quiz("only")]);
        assert_eq!(
            catalog.get_quiz(1).unwrap_err(),
            QuizdeskError::QuizNotFound(1)
        );
        assert_eq!(
            catalog.get_quiz(-1).unwrap_err(),
            QuizdeskError::QuizNotFound(-1)
        );
    }

    #[test]
    fn builtin_catalog_parses() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 1);

        let quiz = catalog.get_quiz(0).unwrap();
        assert_eq!(quiz.questions.len(), 2);
        assert_eq!(quiz.total_points(), 15);
        assert_eq!(quiz.questions[0].kind(), QuestionKind::Text);
        assert_eq!(
            quiz.questions[1].expected,
            ExpectedAnswer::Numerical(213000.0)
        );
    }

    #[test]
    fn summaries_match_quizzes() {
        let catalog = Catalog::builtin().unwrap();
        let summaries = catalog.summaries();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].question_count, 2);
        assert_eq!(summaries[0].total_points, 15);
    }
}
