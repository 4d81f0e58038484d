use std::{path::PathBuf, process::ExitCode, sync::Arc};

use anyhow::Result;
use clap::Parser;
use client_core::{load_settings_from, HttpScoringService, RequestController, SubmissionState};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod render;
mod session;

use render::render;

#[derive(Parser, Debug)]
#[command(name = "vocab", about = "Practice vocabulary with scored sentences")]
struct Args {
    /// Scoring service base URL; overrides vocab.toml and the environment.
    #[arg(long)]
    api_url: Option<String>,
    #[arg(long, default_value = "1")]
    word_id: String,
    /// Score this sentence and exit instead of starting a session.
    #[arg(long)]
    sentence: Option<String>,
    #[arg(long, default_value = client_core::config::DEFAULT_SETTINGS_FILE)]
    config: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings_from(&args.config);
    if let Some(api_url) = args.api_url {
        settings.api_base_url = api_url;
    }
    let service = HttpScoringService::from_settings(&settings)?;
    info!(api_base_url = service.base_url(), "session started");

    let Some(sentence) = args.sentence else {
        session::interactive(Arc::new(service)).await?;
        return Ok(ExitCode::SUCCESS);
    };

    let mut controller = RequestController::new();
    let state = controller.run(&service, &args.word_id, &sentence).await;
    println!("{}", render(state));

    Ok(match state {
        SubmissionState::Failed { .. } => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}
