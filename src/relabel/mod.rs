// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Category relabeling.
//!
//! A [`RelabelDtype`] carries several parallel label sets for one code
//! space, so a column loaded with numeric survey codes can be re-viewed
//! with human-readable names without touching the data:
//!
//! ```rust,ignore
//! use vicar::relabel::{CodedColumn, Label, RelabelDtype};
//!
//! let gender = RelabelDtype::new(vec![
//!     vec![Label::Int(1), Label::from("male")],
//!     vec![Label::Int(2), Label::from("female")],
//! ], false)?;
//!
//! let coded = CodedColumn::from_strings(&["1", "2", "1"], gender);
//! let named = coded.relevel(1)?;      // same codes, "male"/"female" labels
//! ```
//!
//! This is delegation in its static form: the dtype holds a
//! [`CategoryDtype`] delegate for its active group and forwards category
//! queries to it with one plain method per capability, the hand-written
//! counterpart of what [`crate::delegation::Delegate`] wires up at runtime.

mod category;
mod column;
mod dtype;
mod schema;

pub use category::{CategoryDtype, Label};
pub use column::CodedColumn;
pub use dtype::RelabelDtype;
pub use schema::{ColumnSpec, Schema};
