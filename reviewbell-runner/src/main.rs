//! Reviewbell Runner
//!
//! A long-running notifier that watches the review status of a submitted
//! work item and relays every change to one Telegram chat.
//!
//! Architecture:
//! - Configuration: credentials and cadence from the environment
//! - Repositories: HTTP access to the status endpoint
//! - Services: message delivery to the recipient
//! - Scheduler: the poll loop (cursor, deduplication, failure reporting)
//!
//! The runner polls the status endpoint every `RETRY_PERIOD` seconds and
//! stops only on Ctrl-C.

mod config;
mod error;
mod repository;
mod scheduler;
mod service;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::repository::{HttpStatusRepository, StatusRepository};
use crate::scheduler::StatusPoller;
use crate::service::{Notifier, TelegramNotifier};
use reviewbell_client::{StatusClient, TelegramClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reviewbell_runner=info,reviewbell_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Reviewbell Runner");

    // Missing credentials are fatal: the loop is never entered
    let config = Config::from_env().context("Invalid configuration, refusing to start")?;
    info!(
        "Loaded configuration: endpoint={}, chat_id={}",
        config.endpoint, config.telegram_chat_id
    );

    let http = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let repository: Arc<dyn StatusRepository> = Arc::new(HttpStatusRepository::new(
        StatusClient::with_client(&config.endpoint, &config.practicum_token, http.clone()),
    ));
    let notifier: Arc<dyn Notifier> = Arc::new(TelegramNotifier::new(
        TelegramClient::with_client(&config.telegram_api_url, &config.telegram_token, http),
        config.telegram_chat_id.clone(),
    ));

    info!("Clients initialized");

    let poller = StatusPoller::new(&config, repository, notifier);
    poller.run(shutdown_signal()).await;

    info!("Reviewbell Runner stopped");
    Ok(())
}

/// Resolves on Ctrl-C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
