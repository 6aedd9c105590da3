//! Route table and request handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::header::SET_COOKIE;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::Deserialize;

use quizdesk_core::grader::grade;
use quizdesk_core::presenter::assemble;
use quizdesk_render::{login_page, quiz_list_page, quiz_page, results_page};

use crate::api::{SubmitRequest, SubmitResponse};
use crate::auth::{cookie_value, expired_cookie, session_cookie, CurrentUser};
use crate::error::ApiError;
use crate::state::AppState;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_quizzes))
        .route("/login", get(show_login).post(login))
        .route("/logout", get(logout))
        .route("/quiz/:quiz_id", get(show_quiz))
        .route("/api/submit_quiz", post(submit_quiz))
        .route("/results/:submission_id", get(show_results))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginForm {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

async fn show_login() -> Html<String> {
    Html(login_page(None))
}

async fn login(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    if !state.users.verify(&form.username, &form.password) {
        tracing::warn!(username = %form.username, "failed login");
        return Html(login_page(Some("Invalid username or password"))).into_response();
    }

    tracing::info!(username = %form.username, "login");
    let token = state.sessions.create(&form.username);
    (
        [(SET_COOKIE, session_cookie(state.cookie_name(), &token))],
        Redirect::to("/"),
    )
        .into_response()
}

async fn logout(State(state): State<AppState>, headers: axum::http::HeaderMap) -> Response {
    if let Some(token) = cookie_value(&headers, state.cookie_name()) {
        if let Some(username) = state.sessions.remove(token) {
            tracing::info!(%username, "logout");
        }
    }
    (
        [(SET_COOKIE, expired_cookie(state.cookie_name()))],
        Redirect::to("/login"),
    )
        .into_response()
}

async fn list_quizzes(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
) -> Html<String> {
    Html(quiz_list_page(&user, &state.catalog.summaries()))
}

async fn show_quiz(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Path(quiz_id): Path<String>,
) -> Result<Html<String>, ApiError> {
    let quiz_id: i64 = quiz_id
        .parse()
        .map_err(|_| ApiError::NotFound("Quiz not found".into()))?;
    let quiz = state.catalog.get_quiz(quiz_id)?;
    Ok(Html(quiz_page(&user, quiz)))
}

/// The session is checked before the body, so anonymous callers always get
/// the JSON failure payload. Signed-in callers with a malformed body get the
/// framework's 4xx rejection.
async fn submit_quiz(
    State(state): State<AppState>,
    user: Option<CurrentUser>,
    request: Result<Json<SubmitRequest>, JsonRejection>,
) -> Response {
    let Some(CurrentUser(user)) = user else {
        return Json(SubmitResponse::failure("Not logged in")).into_response();
    };

    let request = match request {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!(%user, "rejected submission body: {rejection}");
            return rejection.into_response();
        }
    };

    let Ok(quiz) = state.catalog.get_quiz(request.quiz_id) else {
        return Json(SubmitResponse::failure("Quiz not found")).into_response();
    };

    let graded = grade(quiz, &request.answer_strings());
    let id = state.ledger.record(quiz.id, &user, graded.clone());
    tracing::info!(
        submission_id = id,
        quiz_id = quiz.id,
        %user,
        score = graded.score,
        total_points = graded.total_points,
        "submission recorded"
    );

    Json(SubmitResponse::accepted(&graded, id)).into_response()
}

async fn show_results(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Path(submission_id): Path<String>,
) -> Result<Html<String>, ApiError> {
    let submission_id: u64 = submission_id
        .parse()
        .map_err(|_| ApiError::NotFound("Submission not found".into()))?;
    let view = assemble(&state.ledger, &state.catalog, submission_id)?;
    Ok(Html(results_page(&user, &view)))
}
