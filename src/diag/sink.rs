// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Severity-leveled diagnostic sinks with verbatim message capture.
//!
//! A sink buffers every record at or above its threshold and mirrors it to
//! `tracing` when the `telemetry` feature is enabled. Message text is part of
//! the observable contract: tests assert exact wording.

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, RwLock};

/// Maximum records retained per sink; older records are dropped first.
const MAX_RECORDS: usize = 4096;

/// Record severity. Ordering is `Debug < Info < Warn < Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
}

impl Severity {
    /// Lowercase label used in formatted output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single captured diagnostic record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub severity: Severity,
    pub message: String,
}

impl Record {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

#[derive(Debug)]
struct SinkState {
    threshold: Severity,
    records: VecDeque<Record>,
}

/// Named, thread-safe diagnostic sink.
///
/// Clones share the same underlying buffer, so a decorator and the tests
/// observing it see the same records.
#[derive(Debug, Clone)]
pub struct DiagnosticSink {
    inner: Arc<SinkInner>,
}

#[derive(Debug)]
struct SinkInner {
    name: String,
    state: RwLock<SinkState>,
}

impl DiagnosticSink {
    /// Create a sink with the default `Info` threshold.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_threshold(name, Severity::Info)
    }

    /// Create a sink with an explicit threshold.
    pub fn with_threshold(name: impl Into<String>, threshold: Severity) -> Self {
        Self {
            inner: Arc::new(SinkInner {
                name: name.into(),
                state: RwLock::new(SinkState {
                    threshold,
                    records: VecDeque::new(),
                }),
            }),
        }
    }

    /// Sink name, conventionally `vicar::<mechanism>::<ClassName>`.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn threshold(&self) -> Severity {
        self.inner.state.read().unwrap().threshold
    }

    pub fn set_threshold(&self, threshold: Severity) {
        self.inner.state.write().unwrap().threshold = threshold;
    }

    /// Whether a record at `severity` would be captured.
    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.threshold()
    }

    /// Capture a record if it clears the threshold.
    pub fn log(&self, severity: Severity, message: impl Into<String>) {
        let message = message.into();
        {
            let mut state = self.inner.state.write().unwrap();
            if severity < state.threshold {
                return;
            }
            if state.records.len() == MAX_RECORDS {
                state.records.pop_front();
            }
            state.records.push_back(Record::new(severity, message.clone()));
        }
        self.emit(severity, &message);
    }

    pub fn debug(&self, message: impl Into<String>) {
        self.log(Severity::Debug, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.log(Severity::Info, message);
    }

    pub fn warn(&self, message: impl Into<String>) {
        self.log(Severity::Warn, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.log(Severity::Error, message);
    }

    /// Snapshot of the captured records, oldest first.
    pub fn records(&self) -> Vec<Record> {
        self.inner
            .state
            .read()
            .unwrap()
            .records
            .iter()
            .cloned()
            .collect()
    }

    /// Snapshot of just the message texts, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.inner
            .state
            .read()
            .unwrap()
            .records
            .iter()
            .map(|r| r.message.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.state.read().unwrap().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.inner.state.write().unwrap().records.clear();
    }

    /// Identity comparison: do two handles share a buffer.
    pub fn same(&self, other: &DiagnosticSink) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    #[cfg(feature = "telemetry")]
    fn emit(&self, severity: Severity, message: &str) {
        let sink = self.name();
        match severity {
            Severity::Debug => tracing::debug!(target: "vicar::diag", %sink, "{message}"),
            Severity::Info => tracing::info!(target: "vicar::diag", %sink, "{message}"),
            Severity::Warn => tracing::warn!(target: "vicar::diag", %sink, "{message}"),
            Severity::Error => tracing::error!(target: "vicar::diag", %sink, "{message}"),
        }
    }

    #[cfg(not(feature = "telemetry"))]
    fn emit(&self, _severity: Severity, _message: &str) {}
}
