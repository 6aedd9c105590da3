//! The `quizdesk grade` command.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde_json::Value;

use quizdesk_core::grader::grade;
use quizdesk_core::presenter::assemble;
use quizdesk_core::results::GradedQuiz;
use quizdesk_core::{Catalog, Ledger};
use quizdesk_render::write_results_page;
use quizdesk_server::api::SubmitRequest;

pub fn execute(
    catalog_path: PathBuf,
    quiz_id: i64,
    answers_path: PathBuf,
    format: String,
    output: PathBuf,
) -> Result<()> {
    let catalog = Catalog::load(&catalog_path)?;
    let quiz = catalog.get_quiz(quiz_id)?;

    let content = std::fs::read_to_string(&answers_path)
        .with_context(|| format!("failed to read answers: {}", answers_path.display()))?;
    let answers: HashMap<String, Value> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse answers JSON: {}", answers_path.display()))?;
    let request = SubmitRequest { quiz_id, answers };

    let graded = grade(quiz, &request.answer_strings());

    match format.as_str() {
        "text" => print_table(&graded),
        "json" => println!("{}", serde_json::to_string_pretty(&graded)?),
        "html" => {
            let username = std::env::var("USER").unwrap_or_else(|_| "cli".to_string());
            let ledger = Ledger::new();
            let id = ledger.record(quiz.id, &username, graded);
            let view = assemble(&ledger, &catalog, id)?;
            write_results_page(&view, &output)?;
            println!("Results page: {}", output.display());
        }
        other => anyhow::bail!("unknown format: {other} (expected text, json, or html)"),
    }

    Ok(())
}

fn print_table(graded: &GradedQuiz) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Question", "Answer", "Expected", "Correct", "Points"]);

    for r in &graded.results {
        table.add_row(vec![
            Cell::new(&r.question_id),
            Cell::new(&r.user_answer),
            Cell::new(&r.correct_answer),
            Cell::new(if r.is_correct { "yes" } else { "no" }),
            Cell::new(r.points),
        ]);
    }

    println!("{table}");
    println!(
        "Score: {} / {} ({} of {} correct)",
        graded.score,
        graded.total_points,
        graded.correct_count(),
        graded.results.len()
    );
}
