// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Attribute delegation.
//!
//! [`Delegate`] decorates a container class so that a configured set of its
//! attributes forwards to a delegate object held in a named instance field:
//!
//! ```rust,ignore
//! use vicar::delegation::Delegate;
//!
//! let bar = Delegate::new("foo", &foo_class, &["c", "g"]).apply(&bar_class);
//! let instance = bar.instantiate(&[])?;       // contract checked here
//! instance.get_attr("g")?.call(&[])?;         // forwarded to instance.foo
//! ```
//!
//! Decoration wraps the container's constructor exactly once with a check
//! that the delegate field exists and holds an instance of the delegate
//! class. Methods assigned through a forwarded attribute are rebound so the
//! delegate, not the container, is their receiver, transitively through
//! chained delegation.

mod decorator;
mod forwarding;
mod spec;

pub use decorator::Delegate;
pub use forwarding::ForwardingAccessor;
pub use spec::DelegationSpec;
