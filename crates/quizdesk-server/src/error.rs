//! HTTP-facing error type.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use thiserror::Error;

use quizdesk_core::QuizdeskError;
use quizdesk_render::not_found_page;

/// Errors returned by page handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No authenticated session; pages redirect to the login form.
    #[error("not logged in")]
    Unauthenticated,

    /// The requested quiz or submission does not exist.
    #[error("{0}")]
    NotFound(String),
}

impl From<QuizdeskError> for ApiError {
    fn from(err: QuizdeskError) -> Self {
        match err {
            QuizdeskError::QuizNotFound(_) => ApiError::NotFound("Quiz not found".into()),
            QuizdeskError::SubmissionNotFound(_) => {
                ApiError::NotFound("Submission not found".into())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthenticated => Redirect::to("/login").into_response(),
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Html(not_found_page(&message))).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;

    #[test]
    fn not_found_maps_to_404() {
        let response = ApiError::from(QuizdeskError::QuizNotFound(9)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn unauthenticated_redirects_to_login() {
        let response = ApiError::Unauthenticated.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/login");
    }

    #[test]
    fn lookup_errors_keep_user_facing_messages() {
        assert_eq!(
            ApiError::from(QuizdeskError::SubmissionNotFound(3)).to_string(),
            "Submission not found"
        );
    }
}
