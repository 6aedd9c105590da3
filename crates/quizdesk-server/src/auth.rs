//! Credential checks, cookie sessions, and the `CurrentUser` extractor.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Username/password registry loaded from configuration.
#[derive(Clone, Default)]
pub struct UserRegistry {
    users: HashMap<String, String>,
}

impl UserRegistry {
    pub fn new(users: HashMap<String, String>) -> Self {
        Self { users }
    }

    /// Whether `password` is the registered password for `username`.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.users
            .get(username)
            .is_some_and(|expected| expected == password)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

/// In-memory map of opaque session tokens to usernames.
///
/// Sessions expire `ttl` after login. Expired entries are dropped when they
/// are looked up and whenever a new session is created.
#[derive(Debug)]
pub struct SessionStore {
    ttl: Duration,
    sessions: Mutex<HashMap<String, Session>>,
}

#[derive(Debug)]
struct Session {
    username: String,
    created_at: Instant,
}

impl Session {
    fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() >= ttl
    }
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Start a session and return its token.
    pub fn create(&self, username: &str) -> String {
        let token = Uuid::new_v4().simple().to_string();
        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        sessions.retain(|_, session| !session.is_expired(self.ttl));
        sessions.insert(
            token.clone(),
            Session {
                username: username.to_string(),
                created_at: Instant::now(),
            },
        );
        token
    }

    /// The username bound to `token`, if the session exists and is live.
    pub fn lookup(&self, token: &str) -> Option<String> {
        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        if sessions.get(token)?.is_expired(self.ttl) {
            sessions.remove(token);
            return None;
        }
        sessions.get(token).map(|session| session.username.clone())
    }

    /// End a session. Returns the username it belonged to.
    pub fn remove(&self, token: &str) -> Option<String> {
        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(token)
            .map(|session| session.username)
    }

    /// Number of stored sessions, expired ones included until pruned.
    pub fn len(&self) -> usize {
        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Find the value of cookie `name` in the request headers.
pub fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

/// `Set-Cookie` value that starts a session.
pub fn session_cookie(name: &str, token: &str) -> String {
    format!("{name}={token}; Path=/; HttpOnly; SameSite=Lax")
}

/// `Set-Cookie` value that clears the session cookie.
pub fn expired_cookie(name: &str) -> String {
    format!("{name}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// The authenticated user for this request.
///
/// Rejects with [`ApiError::Unauthenticated`]; use `Option<CurrentUser>`
/// where an anonymous request must be answered differently.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub String);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        cookie_value(&parts.headers, state.cookie_name())
            .and_then(|token| state.sessions.lookup(token))
            .map(CurrentUser)
            .ok_or(ApiError::Unauthenticated)
    }
}
