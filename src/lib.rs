// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Vicar - attribute delegation and instrumentation for dynamic objects.
//!
//! A small runtime object model of classes, instances, and bound methods,
//! plus two decorators built on top of it: [`delegation::Delegate`], which
//! forwards a configured set of a container's attributes to a delegate
//! object held in one of its fields, and [`instrument::Instrument`], which
//! wraps a class's members with access-recording accessors.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`object`] - The object model (Class, Object, Function, Value, members)
//! - [`error`] - Error types and result aliases
//! - [`diag`] - Diagnostic sinks, the sink registry, and tracing setup
//! - [`delegation`] - The Delegate decorator and forwarding accessors
//! - [`instrument`] - The Instrument decorator and access recording
//! - [`relabel`] - Multi-label categorical dtypes (delegation, static form)
//!
//! # Example
//!
//! ```rust,ignore
//! use vicar::delegation::Delegate;
//! use vicar::object::{ClassBuilder, Value};
//!
//! let foo = ClassBuilder::new("Foo")
//!     .method("g", |instance, _args| instance.get_attr("x"))
//!     .build();
//! let bar = ClassBuilder::new("Bar").build();
//!
//! let bar = Delegate::new("foo", &foo, &["g"]).apply(&bar);
//! let instance = bar.instantiate(&[])?;   // delegate contract checked here
//! ```

pub mod delegation;
pub mod diag;
pub mod error;
pub mod instrument;
pub mod object;
pub mod relabel;

// Re-export commonly used types at crate root
pub use delegation::Delegate;
pub use diag::{init_diagnostics, registry, DiagConfig, DiagnosticSink, Severity};
pub use error::{AccessError, DelegationError, Error, RelabelError, Result};
pub use instrument::{Instrument, Kind};
pub use object::{
    // Class-side types
    Class, ClassBuilder, ComputedAccessor, Constructor, Member,
    // Runtime values
    BoundMethod, Function, Object, Receiver, Value,
};

/// Vicar version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
