//! The `quizdesk init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create quizdesk.toml
    if std::path::Path::new("quizdesk.toml").exists() {
        println!("quizdesk.toml already exists, skipping.");
    } else {
        std::fs::write("quizdesk.toml", SAMPLE_CONFIG)?;
        println!("Created quizdesk.toml");
    }

    // Create example quiz
    std::fs::create_dir_all("catalogs")?;
    let example_path = std::path::Path::new("catalogs/example.toml");
    if example_path.exists() {
        println!("catalogs/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_QUIZ)?;
        println!("Created catalogs/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Set QUIZDESK_PASSWORD and edit [users] in quizdesk.toml");
    println!("  2. Run: quizdesk validate --catalog catalogs");
    println!("  3. Run: quizdesk serve");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizdesk configuration

bind = "127.0.0.1:5000"
catalog = "catalogs"
session_cookie = "quizdesk_session"
# Seconds a login stays valid
session_ttl_secs = 28800

[users]
admin = "${QUIZDESK_PASSWORD}"
"#;

const EXAMPLE_QUIZ: &str = r#"[quiz]
title = "Example Quiz"
description = "A short quiz to get started"

[[questions]]
id = "capital"
type = "text"
points = 5
answer = "Paris"
prompt = """
<p>What is the capital of France?</p>
"""

[[questions]]
id = "total"
type = "numerical"
points = 5
answer = 1250
answer_format = "currency"
prompt = """
<p>You buy 5 items at $250 each. What is the total cost?</p>
"""
"#;
