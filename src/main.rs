#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(clippy::multiple_crate_versions)]

mod app;
mod config;
mod dataset;
mod error;
mod logging;
mod models;
mod openai;
mod routes;
mod web;

use clap::Parser;
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::{app::build_app, config::Config, logging::init_logging, models::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Keep guard alive so file logger flushes correctly
    let _log_guards = init_logging(&config);

    // Log all configuration (mask sensitive values)
    tracing::info!("=== Configuration ===");
    tracing::info!("Bind address: {}", config.bind);
    tracing::info!("Log file: {}", config.log_file.display());
    tracing::info!(
        "CORS origin: {}",
        config.cors_origin.as_deref().unwrap_or("<allow all>")
    );
    tracing::info!(
        "OpenAI API key: {}",
        if config
            .openai_api_key
            .as_ref()
            .is_some_and(|k| !k.is_empty())
        {
            "<set>"
        } else {
            "<not set>"
        }
    );
    tracing::info!("OpenAI API URL: {}", config.openai_api_url);
    tracing::info!("Chat model: {}", config.chat_model);
    tracing::info!("Image model: {}", config.image_model);
    tracing::info!("====================");

    let state = AppState {
        http: reqwest::Client::new(),
        config: config.clone(),
    };

    let app = build_app(state);

    let listener = TcpListener::bind(config.bind).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;
    Ok(())
}
