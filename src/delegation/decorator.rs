// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The `Delegate` decorator.

use std::rc::Rc;

use crate::diag::{registry, DiagnosticSink, Severity};
use crate::error::{DelegationError, Result};
use crate::object::{Class, Constructor, Member, Object, Value};

use super::forwarding::ForwardingAccessor;
use super::spec::DelegationSpec;

/// Decorator factory installing forwarding accessors on a container class.
///
/// ```rust,ignore
/// let bar = Delegate::new("foo", &foo_class, &["c", "g"]).apply(&bar);
/// ```
pub struct Delegate {
    spec: DelegationSpec,
}

impl Delegate {
    pub fn new(delegate_name: impl Into<String>, delegate_class: &Class, attrs: &[&str]) -> Self {
        Self {
            spec: DelegationSpec::new(delegate_name, delegate_class, attrs),
        }
    }

    /// Threshold of the sink attached to the decorated class. Defaults to
    /// `Error`, which keeps per-access getter/setter records silent.
    pub fn with_verbosity(mut self, verbosity: Severity) -> Self {
        self.spec.verbosity = verbosity;
        self
    }

    /// Transform `class` in place and return its handle.
    pub fn apply(&self, class: &Class) -> Class {
        let spec = &self.spec;

        // Record the delegate class for introspection.
        class.set_member(
            spec.type_member_name(),
            Member::Data(Value::Class(spec.delegate_class.clone())),
        );

        // Same class, same sink: re-application reconfigures the existing
        // sink instead of orphaning the one held by installed accessors.
        let name = format!("vicar::delegation::{}", class.name());
        let sink = match class.sink().filter(|sink| sink.name() == name) {
            Some(existing) => {
                existing.set_threshold(spec.verbosity);
                existing
            }
            None => {
                let sink = DiagnosticSink::with_threshold(name, spec.verbosity);
                registry().register(sink.clone());
                class.set_sink(sink.clone());
                sink
            }
        };

        for attr in &spec.attrs {
            // Advisory: the attribute may still appear dynamically on
            // delegate instances.
            if !spec.delegate_class.has_attr(attr) {
                sink.warn(format!(
                    "The delegate type '{}' does not provide attribute '{}'.",
                    spec.delegate_class.name(),
                    attr
                ));
            }
            if class.has_attr(attr) {
                sink.warn(format!("Overwriting an existing attribute '{}'.", attr));
            }

            let accessor = ForwardingAccessor::new(
                spec.delegate_name.clone(),
                spec.delegate_class.clone(),
                attr.clone(),
                sink.clone(),
            );
            class.set_member(attr.clone(), Member::Computed(Rc::new(accessor)));
        }

        self.wrap_constructor(class, &sink);
        class.clone()
    }

    /// Wrap the effective constructor with the delegate contract check,
    /// exactly once per class.
    fn wrap_constructor(&self, class: &Class, sink: &DiagnosticSink) {
        let original = class.constructor();
        if original
            .as_ref()
            .map(Constructor::is_delegate_checked)
            .unwrap_or(false)
        {
            return;
        }

        let container = class.name().to_string();
        let delegate_name = self.spec.delegate_name.clone();
        let delegate_class = self.spec.delegate_class.clone();
        let sink = sink.clone();

        class.set_constructor(Constructor::checked(move |instance, args| {
            if let Some(constructor) = &original {
                constructor.run(instance, args)?;
            }
            check_contract(instance, &container, &delegate_name, &delegate_class, &sink)
        }));
    }
}

fn check_contract(
    instance: &Object,
    container: &str,
    delegate_name: &str,
    delegate_class: &Class,
    sink: &DiagnosticSink,
) -> Result<()> {
    let err = match instance.field(delegate_name) {
        Some(Value::Object(delegate)) if delegate.is_instance_of(delegate_class) => return Ok(()),
        Some(Value::Object(delegate)) => DelegationError::DelegateTypeMismatch {
            container: container.to_string(),
            delegate_name: delegate_name.to_string(),
            delegate_class: delegate_class.name().to_string(),
            found_class: delegate.class().name().to_string(),
        },
        Some(other) => DelegationError::DelegateTypeMismatch {
            container: container.to_string(),
            delegate_name: delegate_name.to_string(),
            delegate_class: delegate_class.name().to_string(),
            found_class: other.type_name().to_string(),
        },
        None => DelegationError::MissingDelegate {
            container: container.to_string(),
            delegate_name: delegate_name.to_string(),
            delegate_class: delegate_class.name().to_string(),
        },
    };
    sink.error(err.to_string());
    Err(err.into())
}
