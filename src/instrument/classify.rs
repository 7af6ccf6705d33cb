// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Member classification.

use crate::object::{Function, Member};

use super::spec::Kind;

/// Result of classifying one attribute-table entry.
///
/// Unclassified entries (plain data, already-installed accessors) are logged
/// in the debug table but never wrapped, which is what makes re-applying the
/// decorator safe.
#[derive(Debug, Clone)]
pub enum Classification {
    /// Instrumentable, with the member's underlying function.
    Wrap(Kind, Function),
    /// Left untouched; the label appears in the debug table.
    Skip(&'static str),
}

impl Classification {
    /// Label used in the classification debug table.
    pub fn label(&self) -> &'static str {
        match self {
            Classification::Wrap(kind, _) => kind.label(),
            Classification::Skip(label) => label,
        }
    }
}

/// Total match over the closed member enumeration.
pub fn classify(member: &Member) -> Classification {
    match member {
        Member::Static(func) => Classification::Wrap(Kind::Static, func.clone()),
        Member::ClassBound(func) => Classification::Wrap(Kind::ClassBound, func.clone()),
        Member::Property(func) => Classification::Wrap(Kind::Property, func.clone()),
        Member::Instance(func) => Classification::Wrap(Kind::Instance, func.clone()),
        Member::Data(_) => Classification::Skip("data"),
        Member::Computed(_) => Classification::Skip("---"),
    }
}
