//! quizdesk-core — Catalog, grading, and submission ledger.
//!
//! This crate defines the quiz data model, the TOML catalog loader, the
//! grader, and the in-memory ledger that the web server builds on.

pub mod catalog;
pub mod error;
pub mod grader;
pub mod ledger;
pub mod model;
pub mod parser;
pub mod presenter;
pub mod results;

pub use catalog::Catalog;
pub use error::{MalformedAnswer, QuizdeskError};
pub use ledger::Ledger;
