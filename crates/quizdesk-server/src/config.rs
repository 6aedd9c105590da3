//! Server configuration.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level quizdesk configuration.
///
/// Note: Custom Debug impl masks passwords to prevent accidental exposure in logs.
#[derive(Clone, Serialize, Deserialize)]
pub struct QuizdeskConfig {
    /// Address to listen on.
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Quiz file or directory. The bundled quiz is served when absent.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    /// Name of the session cookie.
    #[serde(default = "default_session_cookie")]
    pub session_cookie: String,
    /// Seconds a login stays valid.
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: u64,
    /// Username → password.
    #[serde(default = "default_users")]
    pub users: HashMap<String, String>,
}

impl std::fmt::Debug for QuizdeskConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let users: HashMap<&str, &str> = self.users.keys().map(|u| (u.as_str(), "***")).collect();
        f.debug_struct("QuizdeskConfig")
            .field("bind", &self.bind)
            .field("catalog", &self.catalog)
            .field("session_cookie", &self.session_cookie)
            .field("session_ttl_secs", &self.session_ttl_secs)
            .field("users", &users)
            .finish()
    }
}

/// The account the bundled demo ships with.
pub const DEMO_USERNAME: &str = "test";
pub const DEMO_PASSWORD: &str = "password";

fn default_bind() -> String {
    "127.0.0.1:5000".to_string()
}
fn default_session_cookie() -> String {
    "quizdesk_session".to_string()
}
fn default_session_ttl_secs() -> u64 {
    8 * 60 * 60
}
fn default_users() -> HashMap<String, String> {
    HashMap::from([(DEMO_USERNAME.to_string(), DEMO_PASSWORD.to_string())])
}

impl Default for QuizdeskConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            catalog: None,
            session_cookie: default_session_cookie(),
            session_ttl_secs: default_session_ttl_secs(),
            users: default_users(),
        }
    }
}

impl QuizdeskConfig {
    /// How long a session lasts after login.
    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }

    /// Whether the well-known demo credentials can log in.
    pub fn uses_demo_account(&self) -> bool {
        self.users.get(DEMO_USERNAME).map(String::as_str) == Some(DEMO_PASSWORD)
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `quizdesk.toml` in the current directory
/// 2. `~/.config/quizdesk/config.toml`
///
/// Environment variable overrides: `QUIZDESK_BIND`, `QUIZDESK_CATALOG`.
pub fn load_config() -> Result<QuizdeskConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizdeskConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizdesk.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizdeskConfig::default(),
    };

    // Apply env var overrides
    if let Ok(bind) = std::env::var("QUIZDESK_BIND") {
        config.bind = bind;
    }
    if let Ok(catalog) = std::env::var("QUIZDESK_CATALOG") {
        config.catalog = Some(PathBuf::from(catalog));
    }

    Ok(config)
}

/// Parse a config document and resolve `${VAR}` references in passwords.
pub fn parse_config(content: &str) -> Result<QuizdeskConfig> {
    let mut config: QuizdeskConfig = toml::from_str(content)?;
    config.users = config
        .users
        .into_iter()
        .map(|(user, password)| (user, resolve_env_vars(&password)))
        .collect();
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizdesk"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_QUIZDESK_TEST_VAR", "hello");
        assert_eq!(resolve_env_vars("${_QUIZDESK_TEST_VAR}"), "hello");
        assert_eq!(
            resolve_env_vars("prefix_${_QUIZDESK_TEST_VAR}_suffix"),
            "prefix_hello_suffix"
        );
        std::env::remove_var("_QUIZDESK_TEST_VAR");
    }

    #[test]
    fn default_config() {
        let config = QuizdeskConfig::default();
        assert_eq!(config.bind, "127.0.0.1:5000");
        assert_eq!(config.session_cookie, "quizdesk_session");
        assert_eq!(config.session_ttl(), Duration::from_secs(8 * 60 * 60));
        assert!(config.catalog.is_none());
        assert!(config.uses_demo_account());
    }

    #[test]
    fn parse_full_config() {
        std::env::set_var("_QUIZDESK_ALICE_PW", "s3cret");
        let config = parse_config(
            r#"
bind = "0.0.0.0:8080"
catalog = "catalogs"
session_ttl_secs = 900

[users]
alice = "${_QUIZDESK_ALICE_PW}"
bob = "hunter2"
"#,
        )
        .unwrap();
        std::env::remove_var("_QUIZDESK_ALICE_PW");

        assert_eq!(config.bind, "0.0.0.0:8080");
        assert_eq!(config.catalog, Some(PathBuf::from("catalogs")));
        assert_eq!(config.session_ttl(), Duration::from_secs(900));
        assert_eq!(config.users.get("alice").map(String::as_str), Some("s3cret"));
        assert_eq!(config.users.len(), 2);
        assert!(!config.uses_demo_account());
    }

    #[test]
    fn debug_masks_passwords() {
        let config = QuizdeskConfig::default();
        let debug = format!("{config:?}");
        assert!(debug.contains("***"));
        assert!(!debug.contains(DEMO_PASSWORD));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let err = load_config_from(Some(Path::new("/nonexistent/quizdesk.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }
}
