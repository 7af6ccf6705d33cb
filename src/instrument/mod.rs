// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Access instrumentation.
//!
//! [`Instrument`] decorates a class so that every instrumentable member
//! records an access before forwarding with its native binding:
//!
//! ```rust,ignore
//! use vicar::instrument::{Instrument, Kind};
//!
//! let widget = Instrument::new().exclude(Kind::Property).apply(&widget);
//! widget.get_attr("helper")?;     // records "[staticmethod] helper"
//! ```
//!
//! Classification is a total match over the closed member set, so plain data
//! and already-installed accessors are skipped and re-applying the decorator
//! never wraps twice. Wrapped entries land on the decorated class itself,
//! which means base-class members instrument through subclasses without
//! touching the base's own table.

mod accessor;
mod classify;
mod decorator;
mod spec;

pub use accessor::InstrumentingAccessor;
pub use classify::{classify, Classification};
pub use decorator::Instrument;
pub use spec::{InstrumentationSpec, Kind};
