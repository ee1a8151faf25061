//! Homewatch Bot
//!
//! A background watcher that polls a homework-review API and forwards
//! status changes to a Telegram chat.
//!
//! Architecture:
//! - Configuration: credentials and intervals from the environment
//! - Clients: HTTP communication with the review API and the bot API
//! - Services: trait seams between the poller and the outside world
//! - Scheduler: the poll-diff-notify loop and response validation
//!
//! The watcher holds a single in-memory "last status" value that resets on
//! restart; it runs until interrupted.

mod config;
mod scheduler;
mod service;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::scheduler::StatusPoller;
use crate::service::{Messenger, ReviewApiSource, StatusSource, TelegramMessenger};
use homewatch_client::{ReviewClient, TelegramClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homewatch_bot=info,homewatch_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Homewatch Bot");

    // Load configuration; missing credentials keep the loop from ever starting
    let config = Config::from_env();
    if let Err(e) = config.validate() {
        error!("{:#}. The process is halted.", e);
        anyhow::bail!("startup credential check failed");
    }

    info!(
        "Loaded configuration: endpoint={}, poll_interval={:?}, request_timeout={:?}",
        config.endpoint, config.poll_interval, config.request_timeout
    );

    // One HTTP client with a timeout, shared by both services
    let http_client = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let review = ReviewClient::with_client(
        &config.endpoint,
        &config.practicum_token,
        http_client.clone(),
    );
    let telegram =
        TelegramClient::with_client(&config.telegram_token, &config.chat_id, http_client);

    let source: Arc<dyn StatusSource> = Arc::new(ReviewApiSource::new(review));
    let messenger: Arc<dyn Messenger> = Arc::new(TelegramMessenger::new(telegram));

    let mut poller = StatusPoller::new(config, source, messenger);

    info!("Watcher initialized successfully");

    // The loop only ends on interrupt; shutdown lands between cycles
    tokio::select! {
        _ = poller.run() => {}
        _ = tokio::signal::ctrl_c() => {
            info!("Received interrupt, shutting down");
        }
    }

    Ok(())
}
