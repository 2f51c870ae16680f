//! Command-Line Interface (CLI) argument parsing.
//!
//! This module defines the command-line arguments using the `clap` crate.
//! They are parsed at startup and merged over the configuration from the
//! `notifier.toml` file and environment variables.

use clap::Parser;
use figment::{
    value::{Dict, Map, Tag, Value},
    Error, Metadata, Profile, Provider,
};
use std::path::PathBuf;

use crate::config::{Channel, OutputFormat, SinkKind};

/// Sends a single notification through the configured channel.
#[derive(Parser, Debug, Default, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Notification channel to use.
    #[arg(long, value_enum)]
    pub channel: Option<Channel>,

    /// Where trace entries are written.
    #[arg(long, value_enum)]
    pub sink: Option<SinkKind>,

    /// Format of stdout trace entries.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Logging level (e.g. "debug").
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Retry transient failures this many times.
    #[arg(long, value_name = "N")]
    pub retries: Option<u32>,

    /// Send through the hard-wired email sender instead of the configured channel.
    #[arg(long)]
    pub legacy_email: bool,

    /// Phone number, channel name or email address.
    #[arg(allow_hyphen_values = true)]
    pub recipient: String,

    #[arg(allow_hyphen_values = true)]
    pub subject: String,

    #[arg(allow_hyphen_values = true)]
    pub message: String,
}

impl Cli {
    /// Inserts `value` at `section.key`, creating the section table if needed.
    fn insert(dict: &mut Dict, section: &str, key: &str, value: Value) {
        let entry = dict
            .entry(section.to_string())
            .or_insert_with(|| Value::Dict(Tag::Default, Dict::new()));
        if let Value::Dict(_, nested) = entry {
            nested.insert(key.to_string(), value);
        }
    }
}

impl Provider for Cli {
    fn metadata(&self) -> Metadata {
        Metadata::named("Command-Line Arguments")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let mut dict = Dict::new();

        if let Some(level) = &self.log_level {
            dict.insert("log_level".into(), Value::from(level.clone()));
        }

        if let Some(channel) = self.channel {
            Self::insert(&mut dict, "notifier", "channel", Value::from(channel.to_string()));
        }

        if let Some(retries) = self.retries {
            let mut retry = Dict::new();
            retry.insert("max_retries".into(), Value::from(retries));
            Self::insert(&mut dict, "notifier", "retry", Value::Dict(Tag::Default, retry));
        }

        if let Some(sink) = self.sink {
            Self::insert(&mut dict, "output", "sink", Value::from(sink.to_string()));
        }

        if let Some(format) = self.format {
            Self::insert(&mut dict, "output", "format", Value::from(format.to_string()));
        }

        let mut map = Map::new();
        map.insert(Profile::Default, dict);
        Ok(map)
    }
}
