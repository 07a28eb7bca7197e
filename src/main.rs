//! ideavault CLI - push notes, PDF documents and links to the idea store

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use ideavault_lib::{
    commands::upload::{UploadReport, UploadSession},
    core::{config::BackendConfig, errors::AppResult},
    ingest::{
        controller::IngestionController,
        ports::{StaticIdentity, TracingNotifier},
        signal::ContentSignal,
    },
    init_tracing,
    providers::backend::BackendClient,
};

#[derive(Parser)]
#[command(name = "ideavault")]
#[command(version)]
#[command(about = "Capture notes, PDF documents and links into your idea store", long_about = None)]
struct Cli {
    /// Backend base URL
    #[arg(long, env = "IDEAVAULT_BACKEND_URL")]
    backend_url: String,

    /// Session cookie forwarded with every request (name=value)
    #[arg(long, env = "IDEAVAULT_SESSION_COOKIE")]
    session_cookie: Option<String>,

    /// Request timeout in seconds (none by default)
    #[arg(long, env = "IDEAVAULT_TIMEOUT_SECS")]
    timeout_secs: Option<String>,

    /// Identifier of the current user
    #[arg(long, env = "IDEAVAULT_USER_ID")]
    user_id: Option<String>,

    /// Print the upload report as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a free-text note
    Note {
        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        content: String,
    },

    /// Upload a PDF document (max 10MB)
    #[command(alias = "doc")]
    Document {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Save a web link
    Link {
        #[arg(value_name = "URL")]
        url: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    let json = cli.json;

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            tracing::error!(code = err.code(), "{err}");
            if json {
                if let Ok(rendered) = serde_json::to_string(&err) {
                    println!("{rendered}");
                }
            }
            ExitCode::from(2)
        }
    }
}

async fn run(cli: Cli) -> AppResult<bool> {
    let config = BackendConfig::from_parts(&cli.backend_url, cli.session_cookie, cli.timeout_secs)?;
    let client = BackendClient::new(&config)?;
    let controller = IngestionController::new(client, StaticIdentity(cli.user_id));
    let mut session = UploadSession::new(controller, TracingNotifier, ContentSignal::new());

    let report = match cli.command {
        Commands::Note { title, content } => session.upload_note(&title, &content).await?,
        Commands::Document { file } => session.upload_document(&file).await?,
        Commands::Link { url } => session.save_link(&url).await?,
    };
    print_report(&report, cli.json)?;
    Ok(report.succeeded)
}

fn print_report(report: &UploadReport, json: bool) -> AppResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        let status = if report.succeeded { "ok" } else { "failed" };
        println!("{} {status}: {}", report.kind.as_str(), report.message);
    }
    Ok(())
}
