//! Notifier - sends one notification through the configured channel.
//!
//! `main` is the composition root: it loads configuration, installs logging,
//! and wires the selected channel into the application.

use anyhow::Result;
use clap::Parser;
use notifier::{app::App, cli::Cli, config::Config};
use std::io::IsTerminal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration by layering sources: defaults, file, environment, and CLI args.
    let config = Config::load(&cli).unwrap_or_else(|err| {
        // Logging isn't configured yet; install a default subscriber for this error.
        tracing_subscriber::fmt().with_writer(std::io::stderr).init();
        error!("Failed to load configuration: {}", err);
        std::process::exit(1);
    });

    // Logs go to stderr so the stdout sink stays machine-readable. Trace
    // entries from the log sink are always let through, whatever the level.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level))
        .add_directive("notifier::sink=info".parse()?);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    info!("-------------------- Configuration --------------------");
    info!("Log Level: {}", config.log_level);
    if cli.legacy_email {
        info!("Channel, retry and sink settings do not apply to the legacy email path.");
    } else {
        info!("Channel: {}", config.notifier.channel);
        match &config.notifier.retry {
            Some(retry) => info!(
                "Retries: {} (initial backoff {}ms)",
                retry.max_retries, retry.initial_backoff_ms
            ),
            None => info!("Retries: Disabled"),
        }
        info!("Sink: {}", config.output.sink);
        info!("Output Format: {}", config.output.format);
    }
    info!("-------------------------------------------------------");

    let result = if cli.legacy_email {
        info!("Using the hard-wired email sender.");
        App::send_legacy_email(&cli.recipient, &cli.subject, &cli.message).await
    } else {
        let app = App::builder(config).build();
        app.send(&cli.recipient, &cli.subject, &cli.message).await
    };

    if let Err(e) = result {
        let channel = e.channel();
        error!(channel, "Notification failed: {:#}", anyhow::Error::from(e));
        std::process::exit(1);
    }

    info!("Notification sent.");
    Ok(())
}
