use std::path::PathBuf;
use std::sync::Arc;

use eyre::{Result, WrapErr};
use log::{debug, info, warn};

mod cli;

use cli::Cli;
use ytsum::config::{Config, config_path};
use ytsum::metadata::DataApiClient;
use ytsum::summarize::GroqClient;
use ytsum::youtube::CaptionClient;

fn setup_logging(to_stderr: bool) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    if to_stderr {
        builder.target(env_logger::Target::Stderr).init();
        return Ok(());
    }

    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("ytsum.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    builder.target(env_logger::Target::Pipe(target)).init();

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ytsum")
        .join("logs")
}

fn build_after_help() -> String {
    format!(
        "\nConfig is read from: {}\nLogs are written to: {}",
        config_path().display(),
        log_dir().join("ytsum.log").display()
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    let after_help = build_after_help();
    let cmd = <Cli as clap::CommandFactory>::command().after_help(after_help);
    let matches = cmd.get_matches();
    let cli = <Cli as clap::FromArgMatches>::from_arg_matches(&matches)?;

    setup_logging(cli.log_stderr)?;

    // Load config file (non-fatal if missing/invalid)
    let config_file = cli.config.clone().unwrap_or_else(config_path);
    let config = Config::load_from(&config_file).unwrap_or_else(|e| {
        warn!("Ignoring config {}: {e}", config_file.display());
        Config::default()
    });

    // CLI flags take priority over config
    let host = cli.host.clone().unwrap_or_else(|| config.host().to_string());
    let port = cli.port.unwrap_or_else(|| config.port());
    let model = cli.model.clone().unwrap_or_else(|| config.model().to_string());

    debug!("Groq base URL: {}", config.groq_base_url());
    debug!("YouTube Data API base URL: {}", config.youtube_api_base_url());

    let client = reqwest::Client::new();
    let pipeline = ytsum::Pipeline::new(
        Arc::new(DataApiClient::new(client.clone()).with_base_url(config.youtube_api_base_url())),
        Arc::new(CaptionClient::new(client.clone()).with_base_url(config.youtube_base_url())),
        Arc::new(GroqClient::new(client).with_base_url(config.groq_base_url()).with_model(&model)),
    );

    let app = ytsum::server::router(pipeline);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("failed to bind {addr}"))?;

    info!("Listening on {addr} (model {model})");
    if cli.verbose {
        eprintln!("Listening on {addr}\nModel: {model}\nConfig: {}", config_file.display());
    }

    axum::serve(listener, app).await?;
    Ok(())
}
