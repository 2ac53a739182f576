use clap::{ArgAction, Parser};
use std::{net::SocketAddr, path::PathBuf};

/// Miam server configuration
#[derive(Parser, Debug, Clone)]
#[command(name = "miam", version, about = "HTTP API server for Miam")]
pub struct Config {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', action = ArgAction::Count)]
    pub verbose: u8,

    /// Decrease verbosity (-q, -qq, -qqq)
    #[arg(short = 'q', action = ArgAction::Count)]
    pub quiet: u8,

    /// Address to bind the HTTP server to
    #[arg(long, env = "MIAM_BIND_ADDR", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Optional log file path (logs are written to stdout + this file)
    #[arg(long, env = "MIAM_LOG_FILE", default_value = "miam.logs")]
    pub log_file: PathBuf,

    /// CORS allowed origin (e.g., <https://miam.yourdomain.com>)
    /// If not set, allows all origins (⚠️ insecure for production!)
    #[arg(long, env = "MIAM_CORS_ORIGIN")]
    pub cors_origin: Option<String>,

    /// API key for the OpenAI-compatible provider (sent as a bearer token,
    /// omitted when empty)
    #[arg(long, env = "MIAM_OPENAI_API_KEY")]
    pub openai_api_key: Option<String>,

    /// Base URL of the OpenAI-compatible provider
    #[arg(long, env = "MIAM_OPENAI_API_URL", default_value = "https://api.openai.com/v1")]
    pub openai_api_url: String,

    /// Completion model used for recipe generation
    #[arg(long, env = "MIAM_CHAT_MODEL", default_value = "gpt-4")]
    pub chat_model: String,

    /// Image model used for dish photos
    #[arg(long, env = "MIAM_IMAGE_MODEL", default_value = "dall-e-2")]
    pub image_model: String,
}

impl Config {
    #[must_use]
    pub fn verbosity_delta(&self) -> i16 {
        i16::from(self.verbose) - i16::from(self.quiet)
    }
    #[must_use]
    pub fn log_filter(&self) -> &'static str {
        match self.verbosity_delta() {
            d if d <= -2 => "error",
            -1 => "warn",
            0 => "info,miam=info,axum=info,tower_http=info",
            1 => "debug,miam=debug,axum=info,tower_http=info,hyper=warn",
            2 => "trace,miam=trace,axum=debug,tower_http=trace,hyper=info",
            _ => "trace,miam=trace,axum=trace,tower_http=trace,hyper=debug",
        }
    }
}
