//! Shared application state injected into every handler.

use std::sync::Arc;

use quizdesk_core::{Catalog, Ledger};

use crate::auth::{SessionStore, UserRegistry};
use crate::config::QuizdeskConfig;

/// Process-wide state, constructed once at startup.
///
/// Cloning is cheap; every field is reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub ledger: Arc<Ledger>,
    pub sessions: Arc<SessionStore>,
    pub users: Arc<UserRegistry>,
    cookie_name: Arc<str>,
}

impl AppState {
    pub fn new(catalog: Catalog, config: &QuizdeskConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            ledger: Arc::new(Ledger::new()),
            sessions: Arc::new(SessionStore::new(config.session_ttl())),
            users: Arc::new(UserRegistry::new(config.users.clone())),
            cookie_name: Arc::from(config.session_cookie.as_str()),
        }
    }

    /// Name of the session cookie.
    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }
}
