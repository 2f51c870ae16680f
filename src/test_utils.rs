//! Test doubles for trace sinks.

use crate::core::TraceEntry;
use crate::sink::{SinkError, TraceSink};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

/// A sink that keeps every entry it receives.
#[derive(Debug, Default)]
pub struct RecordingSink {
    entries: Mutex<Vec<TraceEntry>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<TraceEntry> {
        self.entries.lock().unwrap().clone()
    }
}

impl TraceSink for RecordingSink {
    fn emit(&self, entry: &TraceEntry) -> Result<(), SinkError> {
        self.entries.lock().unwrap().push(entry.clone());
        Ok(())
    }
}

/// A sink whose transport is always down.
#[derive(Debug, Default)]
pub struct FailingSink;

impl FailingSink {
    pub fn new() -> Self {
        Self
    }
}

impl TraceSink for FailingSink {
    fn emit(&self, _entry: &TraceEntry) -> Result<(), SinkError> {
        Err(SinkError::Closed("transport unavailable".to_string()))
    }
}

/// A sink that fails a fixed number of times before accepting entries.
#[derive(Debug)]
pub struct FlakySink {
    failures_left: AtomicUsize,
    attempts: AtomicUsize,
    recorded: RecordingSink,
}

impl FlakySink {
    pub fn new(failures: usize) -> Self {
        Self {
            failures_left: AtomicUsize::new(failures),
            attempts: AtomicUsize::new(0),
            recorded: RecordingSink::new(),
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    pub fn entries(&self) -> Vec<TraceEntry> {
        self.recorded.entries()
    }
}

impl TraceSink for FlakySink {
    fn emit(&self, entry: &TraceEntry) -> Result<(), SinkError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        let failed = self
            .failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failed {
            return Err(SinkError::Closed("transient outage".to_string()));
        }
        self.recorded.emit(entry)
    }
}
