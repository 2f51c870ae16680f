//! Configuration management for the notifier
//!
//! This module defines the main `Config` struct and its sub-structs. It uses
//! the `figment` crate to layer defaults, a `notifier.toml` file, environment
//! variables and command-line arguments.

use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::cli::Cli;
use crate::notification::RetryConfig;

/// The configuration file used when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "notifier.toml";

/// The main configuration struct for the application.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// The logging level for the application.
    pub log_level: String,
    /// Which notification channel the composition root wires in.
    pub notifier: NotifierConfig,
    /// Where trace entries go.
    pub output: OutputConfig,
}

/// Selects and tunes the notification implementation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct NotifierConfig {
    pub channel: Channel,
    /// Wraps the channel in a retrying decorator when present.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

/// The notification channels available behind the abstraction.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Sms,
    Slack,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Sms => write!(f, "sms"),
            Channel::Slack => write!(f, "slack"),
        }
    }
}

/// Configuration for trace output.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    pub sink: SinkKind,
    /// Only used by the stdout sink.
    pub format: OutputFormat,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// Structured `tracing` events.
    Log,
    /// One record per send on stdout. `Json` records are single lines;
    /// `PlainText` records keep the entry's line breaks.
    Stdout,
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkKind::Log => write!(f, "log"),
            SinkKind::Stdout => write!(f, "stdout"),
        }
    }
}

/// The format for stdout output.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    PlainText,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "Json"),
            OutputFormat::PlainText => write!(f, "PlainText"),
        }
    }
}

impl Config {
    /// Loads the application configuration.
    ///
    /// Sources are merged in order, later ones winning: built-in defaults, the
    /// TOML file named by `--config` (or `notifier.toml` if it exists),
    /// `NOTIFIER_` environment variables, then command-line arguments.
    pub fn load(cli: &Cli) -> Result<Self> {
        let config_path = cli
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_path))
            // e.g. NOTIFIER_NOTIFIER__CHANNEL=slack
            .merge(Env::prefixed("NOTIFIER_").split("__"))
            .merge(cli.clone())
            .extract()?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            notifier: NotifierConfig {
                channel: Channel::Sms,
                retry: None,
            },
            output: OutputConfig {
                sink: SinkKind::Log,
                format: OutputFormat::PlainText,
            },
        }
    }
}
