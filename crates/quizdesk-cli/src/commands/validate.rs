//! The `quizdesk validate` command.

use std::path::PathBuf;

use anyhow::Result;

use quizdesk_core::parser::validate_catalog;
use quizdesk_core::Catalog;

pub fn execute(catalog_path: PathBuf) -> Result<()> {
    let catalog = Catalog::load(&catalog_path)?;
    let warnings = validate_catalog(&catalog);

    for quiz in catalog.list_quizzes() {
        println!(
            "Quiz {}: {} ({} questions, {} points)",
            quiz.id,
            quiz.title,
            quiz.questions.len(),
            quiz.total_points()
        );

        for w in warnings.iter().filter(|w| w.quiz_id == quiz.id) {
            let prefix = w
                .question_id
                .as_ref()
                .map(|id| format!("  [{id}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
    }

    if catalog.is_empty() {
        anyhow::bail!("no quizzes found in {}", catalog_path.display());
    }

    if warnings.is_empty() {
        println!("All quizzes valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
