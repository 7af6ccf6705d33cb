// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The `Instrument` decorator.

use std::rc::Rc;

use crate::diag::{registry, DiagnosticSink, Severity};
use crate::object::{Class, Member};

use super::accessor::InstrumentingAccessor;
use super::classify::{classify, Classification};
use super::spec::{InstrumentationSpec, Kind};

/// Decorator factory wrapping a class's instrumentable members with
/// access-logging accessors.
///
/// ```rust,ignore
/// let widget = Instrument::new().exclude(Kind::Property).apply(&widget);
/// ```
pub struct Instrument {
    spec: InstrumentationSpec,
    verbosity: Severity,
}

impl Instrument {
    pub fn new() -> Self {
        Self {
            spec: InstrumentationSpec::new(),
            verbosity: Severity::Info,
        }
    }

    /// Restrict instrumentation to the given kind. May be called repeatedly;
    /// an empty include set means "all kinds not excluded".
    pub fn include(mut self, kind: Kind) -> Self {
        self.spec.include.insert(kind);
        self
    }

    /// Remove a kind from instrumentation.
    pub fn exclude(mut self, kind: Kind) -> Self {
        self.spec.exclude.insert(kind);
        self
    }

    /// Threshold of the sink attached to the decorated class. Defaults to
    /// `Info`; set `Debug` to also capture the classification table.
    pub fn with_verbosity(mut self, verbosity: Severity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Transform `class` in place and return its handle.
    ///
    /// Re-applying is safe: previously installed accessors classify as
    /// unclassified and are not wrapped again.
    pub fn apply(&self, class: &Class) -> Class {
        // Same class, same sink: re-application reconfigures the existing
        // sink instead of orphaning the one held by installed accessors.
        let name = format!("vicar::instrument::{}", class.name());
        let sink = match class.sink().filter(|sink| sink.name() == name) {
            Some(existing) => {
                existing.set_threshold(self.verbosity);
                existing
            }
            None => {
                let sink = DiagnosticSink::with_threshold(name, self.verbosity);
                registry().register(sink.clone());
                class.set_sink(sink.clone());
                sink
            }
        };

        let effective = self.spec.effective_kinds();

        // Full base-to-derived table, so base members instrument on the
        // decorated class and subclass overrides shadow correctly.
        for (name, member) in class.flattened_members() {
            let classification = classify(&member);
            sink.debug(format!("{:<20} {}", name, classification.label()));

            if let Classification::Wrap(kind, original) = classification {
                if effective.contains(&kind) {
                    let accessor =
                        InstrumentingAccessor::new(kind, name.clone(), original, sink.clone());
                    class.set_member(name, Member::Computed(Rc::new(accessor)));
                }
            }
        }

        class.mark_instrumented();
        class.clone()
    }
}

impl Default for Instrument {
    fn default() -> Self {
        Self::new()
    }
}
