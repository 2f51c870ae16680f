//! Trace sinks stand in for real delivery.
//!
//! A sink is acquired once by the composition root and shared by every
//! notification service. Each successful send emits exactly one entry.

use crate::config::OutputFormat;
use crate::core::TraceEntry;
use std::io::Write;
use thiserror::Error;
use tracing::{info, Level};

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to write trace entry: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode trace entry: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("sink closed: {0}")]
    Closed(String),
    #[error("trace events are filtered out at {0} level")]
    Filtered(Level),
}

/// A generic "emit a line of text" collaborator.
pub trait TraceSink: Send + Sync {
    fn emit(&self, entry: &TraceEntry) -> Result<(), SinkError>;
}

/// Emits each entry as a single structured `tracing` event. The rendered
/// text keeps its line breaks, so a Slack entry shows subject and message on
/// separate lines.
///
/// An entry the active subscriber would discard is reported as
/// [`SinkError::Filtered`] rather than dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl TraceSink for TracingSink {
    fn emit(&self, entry: &TraceEntry) -> Result<(), SinkError> {
        if !tracing::enabled!(Level::INFO) {
            return Err(SinkError::Filtered(Level::INFO));
        }
        info!(
            channel = entry.channel,
            recipient = %entry.recipient,
            subject = ?entry.subject,
            body = ?entry.message,
            rendered = %entry.rendered,
            "Sending {} notification...",
            entry.channel
        );
        Ok(())
    }
}

/// Writes each entry to stdout, either as plain text or as one JSON object per line.
#[derive(Debug, Clone)]
pub struct StdoutSink {
    format: OutputFormat,
}

impl StdoutSink {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    fn render(&self, entry: &TraceEntry) -> Result<String, SinkError> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string(entry)?),
            OutputFormat::PlainText => Ok(entry.to_string()),
        }
    }
}

impl TraceSink for StdoutSink {
    fn emit(&self, entry: &TraceEntry) -> Result<(), SinkError> {
        let line = self.render(entry)?;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", line)?;
        stdout.flush()?;
        Ok(())
    }
}
