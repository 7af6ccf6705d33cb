// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Diagnostic sink infrastructure.
//!
//! The delegation and instrumentation decorators report through named,
//! severity-leveled sinks rather than writing to a logger directly:
//!
//! - **Sinks**: named record buffers with a severity threshold, mirrored to
//!   `tracing` events when the `telemetry` feature is enabled
//! - **Registry**: a global name-to-sink map populated by the decorators
//! - **Init**: process-wide `tracing-subscriber` setup for rendered output
//!
//! Message text captured by a sink is verbatim; tests assert exact wording.

mod init;
mod registry;
mod sink;

pub use init::{init_diagnostics, DiagConfig, DiagGuard};
pub use registry::{registry, SinkRegistry, GLOBAL_SINKS};
pub use sink::{DiagnosticSink, Record, Severity};
