//! The `quizdesk serve` command.

use std::path::PathBuf;

use anyhow::Result;

use quizdesk_server::config::load_config_from;

pub async fn execute(
    config_path: Option<PathBuf>,
    bind: Option<String>,
    catalog: Option<PathBuf>,
) -> Result<()> {
    let mut config = load_config_from(config_path.as_deref())?;

    if let Some(bind) = bind {
        config.bind = bind;
    }
    if let Some(catalog) = catalog {
        config.catalog = Some(catalog);
    }

    tracing::debug!(?config, "starting server");
    quizdesk_server::serve(config).await
}
