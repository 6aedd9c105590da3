//! quizdesk CLI — serve the quiz app and work with catalog files.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "quizdesk", version, about = "Quiz-taking web application")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web application
    Serve {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Address to listen on (overrides config)
        #[arg(long)]
        bind: Option<String>,

        /// Quiz file or directory (overrides config)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Validate quiz TOML files
    Validate {
        /// Path to quiz file or directory
        #[arg(long)]
        catalog: PathBuf,
    },

    /// Grade a JSON answers file offline
    Grade {
        /// Path to quiz file or directory
        #[arg(long)]
        catalog: PathBuf,

        /// Quiz id (position in the catalog)
        #[arg(long, default_value = "0")]
        quiz: i64,

        /// JSON object mapping question id to answer
        #[arg(long)]
        answers: PathBuf,

        /// Output format: text, json, html
        #[arg(long, default_value = "text")]
        format: String,

        /// Output file for the html format
        #[arg(long, default_value = "results.html")]
        output: PathBuf,
    },

    /// Create starter config and example quiz
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizdesk_server=info".parse().unwrap())
                .add_directive("quizdesk_cli=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve {
            config,
            bind,
            catalog,
        } => commands::serve::execute(config, bind, catalog).await,
        Commands::Validate { catalog } => commands::validate::execute(catalog),
        Commands::Grade {
            catalog,
            quiz,
            answers,
            format,
            output,
        } => commands::grade::execute(catalog, quiz, answers, format, output),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
