// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Declarative delegation configuration.

use crate::diag::Severity;
use crate::object::Class;

/// Configuration consumed by [`Delegate::apply`](super::Delegate::apply).
///
/// Constructed once per decorated class and consumed at decoration; the
/// installed accessors copy what they need.
#[derive(Debug, Clone)]
pub struct DelegationSpec {
    /// Instance field on the container holding the delegate object.
    pub delegate_name: String,

    /// Class the delegate is required to be an instance of.
    pub delegate_class: Class,

    /// Attribute names to forward.
    pub attrs: Vec<String>,

    /// Threshold of the sink attached to the decorated class.
    pub verbosity: Severity,
}

impl DelegationSpec {
    pub fn new(
        delegate_name: impl Into<String>,
        delegate_class: &Class,
        attrs: &[&str],
    ) -> Self {
        Self {
            delegate_name: delegate_name.into(),
            delegate_class: delegate_class.clone(),
            attrs: attrs.iter().map(|s| s.to_string()).collect(),
            verbosity: Severity::Error,
        }
    }

    /// Conventional introspection member name: `<delegate_name>_type`.
    pub fn type_member_name(&self) -> String {
        format!("{}_type", self.delegate_name)
    }
}
