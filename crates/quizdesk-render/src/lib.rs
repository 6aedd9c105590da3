//! quizdesk-render — Server-rendered HTML pages for quizdesk.
//!
//! Pages are built as plain strings with inline CSS/JS; no template engine.

pub mod html;
pub mod pages;

pub use pages::{
    login_page, not_found_page, quiz_list_page, quiz_page, results_page, write_results_page,
};
