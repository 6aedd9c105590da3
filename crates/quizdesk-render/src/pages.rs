//! Full pages for each view of the application.

use std::path::Path;

use anyhow::{Context, Result};

use quizdesk_core::model::{AnswerFormat, QuestionKind, Quiz, QuizSummary};
use quizdesk_core::presenter::ResultsView;

use crate::html::{html_escape, page, SUBMIT_JS};

/// The login form, optionally with an error message above it.
pub fn login_page(error: Option<&str>) -> String {
    let mut body = String::from("<h1>Log in</h1>\n");
    if let Some(message) = error {
        body.push_str(&format!(
            "<p class=\"error\">{}</p>\n",
            html_escape(message)
        ));
    }
    body.push_str(
        "<form class=\"login\" method=\"post\" action=\"/login\">\n\
         <label>Username <input name=\"username\" autocomplete=\"username\" required></label>\n\
         <label>Password <input name=\"password\" type=\"password\" autocomplete=\"current-password\" required></label>\n\
         <button type=\"submit\">Log in</button>\n\
         </form>\n",
    );
    page("Log in", None, &body)
}

/// The list of available quizzes.
pub fn quiz_list_page(username: &str, quizzes: &[QuizSummary]) -> String {
    let mut body = String::from("<h1>Quizzes</h1>\n");

    if quizzes.is_empty() {
        body.push_str("<p class=\"meta\">No quizzes are available.</p>\n");
    }

    for quiz in quizzes {
        body.push_str("<section class=\"quiz-card\">\n");
        body.push_str(&format!(
            "<h2><a href=\"/quiz/{}\">{}</a></h2>\n",
            quiz.id,
            html_escape(&quiz.title)
        ));
        if !quiz.description.is_empty() {
            body.push_str(&format!("<p>{}</p>\n", html_escape(&quiz.description)));
        }
        body.push_str(&format!(
            "<p class=\"meta\">{} question{} · {} points</p>\n",
            quiz.question_count,
            if quiz.question_count == 1 { "" } else { "s" },
            quiz.total_points
        ));
        body.push_str("</section>\n");
    }

    page("Quizzes", Some(username), &body)
}

/// A quiz with an answer field per question. Submits JSON to
/// `/api/submit_quiz` and follows the returned submission id.
pub fn quiz_page(username: &str, quiz: &Quiz) -> String {
    let mut body = String::new();

    body.push_str(&format!("<h1>{}</h1>\n", html_escape(&quiz.title)));
    if !quiz.description.is_empty() {
        body.push_str(&format!(
            "<p class=\"meta\">{}</p>\n",
            html_escape(&quiz.description)
        ));
    }

    body.push_str(&format!(
        "<form id=\"quiz\" data-quiz=\"{}\" onsubmit=\"submitQuiz(event)\">\n",
        quiz.id
    ));

    for (index, question) in quiz.questions.iter().enumerate() {
        let field_id = format!("answer-{}", html_escape(&question.id));
        body.push_str("<div class=\"question\">\n");
        body.push_str(&format!(
            "<h3>Question {} <span class=\"points\">({} points)</span></h3>\n",
            index + 1,
            question.points
        ));
        // Prompts are trusted catalog HTML.
        body.push_str(&question.prompt);
        body.push('\n');

        body.push_str("<div class=\"answer-input\">\n");
        match question.kind() {
            QuestionKind::Text => {
                body.push_str(&format!(
                    "<textarea id=\"{field_id}\" data-question=\"{}\" rows=\"4\"></textarea>\n",
                    html_escape(&question.id)
                ));
            }
            QuestionKind::Numerical => {
                if question.answer_format == Some(AnswerFormat::Currency) {
                    body.push_str("<span class=\"prefix\">$</span>\n");
                }
                body.push_str(&format!(
                    "<input id=\"{field_id}\" data-question=\"{}\" inputmode=\"decimal\">\n",
                    html_escape(&question.id)
                ));
                if question.answer_format == Some(AnswerFormat::Percent) {
                    body.push_str("<span class=\"suffix\">%</span>\n");
                }
            }
        }
        body.push_str("</div>\n</div>\n");
    }

    body.push_str("<p id=\"status\"></p>\n");
    body.push_str("<button type=\"submit\">Submit answers</button>\n");
    body.push_str("</form>\n");

    body.push_str("<script>\n");
    body.push_str(SUBMIT_JS);
    body.push_str("</script>\n");

    page(&quiz.title, Some(username), &body)
}

/// A graded submission alongside the quiz it answered.
pub fn results_page(username: &str, view: &ResultsView<'_>) -> String {
    let submission = &view.submission;
    let mut body = String::new();

    body.push_str(&format!(
        "<h1>Results: {}</h1>\n",
        html_escape(&view.quiz.title)
    ));

    let percent = if submission.total_points == 0 {
        0.0
    } else {
        f64::from(submission.score) * 100.0 / f64::from(submission.total_points)
    };
    body.push_str(&format!(
        "<p class=\"score\">Score: <strong>{} / {}</strong> ({:.1}%)</p>\n",
        submission.score, submission.total_points, percent
    ));
    body.push_str(&format!(
        "<p class=\"meta\">Submission #{} by {} · {}</p>\n",
        submission.id,
        html_escape(&submission.username),
        submission.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    body.push_str("<table class=\"results-table\">\n");
    body.push_str("<thead><tr><th>#</th><th>Question</th><th>Your answer</th><th>Correct answer</th><th>Points</th></tr></thead>\n");
    body.push_str("<tbody>\n");

    for (index, row) in view.rows().iter().enumerate() {
        let (class, user_answer, correct_answer, awarded) = match row.result {
            Some(r) => (
                if r.is_correct { "pass" } else { "fail" },
                r.user_answer.as_str(),
                r.correct_answer.clone(),
                r.points,
            ),
            None => ("fail", "", row.question.expected.to_string(), 0),
        };
        body.push_str(&format!(
            "<tr class=\"{class}\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{} / {}</td></tr>\n",
            index + 1,
            row.question.prompt,
            html_escape(user_answer),
            html_escape(&correct_answer),
            awarded,
            row.question.points
        ));
    }

    body.push_str("</tbody></table>\n");
    body.push_str("<p><a href=\"/\">Back to quizzes</a></p>\n");

    page("Results", Some(username), &body)
}

/// A plain not-found page.
pub fn not_found_page(message: &str) -> String {
    let body = format!(
        "<h1>Not found</h1>\n<p>{}</p>\n<p><a href=\"/\">Back to quizzes</a></p>\n",
        html_escape(message)
    );
    page("Not found", None, &body)
}

/// Write a results page to a file.
pub fn write_results_page(view: &ResultsView<'_>, path: &Path) -> Result<()> {
    let html = results_page(&view.submission.username, view);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)
        .with_context(|| format!("failed to write results page to {}", path.display()))?;
    Ok(())
}
