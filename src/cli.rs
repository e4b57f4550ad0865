use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ytsum",
    about = "YouTube video summarization service",
    version = env!("GIT_DESCRIBE"),
)]
pub struct Cli {
    /// Address to bind (default from config, else 0.0.0.0)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (default from config, else 8000)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Groq model used for summaries
    #[arg(long)]
    pub model: Option<String>,

    /// Path to config file (default: ~/.config/ytsum/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log to stderr instead of the log file
    #[arg(long)]
    pub log_stderr: bool,

    /// Print startup details
    #[arg(short, long)]
    pub verbose: bool,
}
