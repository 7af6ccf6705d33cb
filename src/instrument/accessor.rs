// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The instrumenting accessor.
//!
//! Records an access, then forwards with the member's native binding. The
//! class-bound case binds the decorated class (the accessor's owner), not
//! whichever subclass triggered the access.

use crate::diag::DiagnosticSink;
use crate::error::Result;
use crate::object::{Class, ComputedAccessor, Function, Object, Receiver, Value};

use super::spec::Kind;

/// Computed accessor wrapping one instrumentable member.
pub struct InstrumentingAccessor {
    kind: Kind,
    attr: String,
    original: Function,
    sink: DiagnosticSink,
}

impl InstrumentingAccessor {
    pub fn new(
        kind: Kind,
        attr: impl Into<String>,
        original: Function,
        sink: DiagnosticSink,
    ) -> Self {
        Self {
            kind,
            attr: attr.into(),
            original,
            sink,
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    fn log_access(&self) {
        self.sink
            .info(format!("[{}] {}", self.kind.label(), self.attr));
    }
}

impl ComputedAccessor for InstrumentingAccessor {
    fn name(&self) -> &str {
        &self.attr
    }

    fn get_class(&self, owner: &Class) -> Result<Value> {
        self.log_access();
        match self.kind {
            // Static and instance callables stay unbound at class level;
            // a class-level property read yields the getter unevaluated.
            Kind::Static | Kind::Instance | Kind::Property => {
                Ok(Value::Function(self.original.clone()))
            }
            Kind::ClassBound => Ok(Value::Bound(
                self.original.bind(Receiver::Class(owner.clone())),
            )),
        }
    }

    fn get_instance(&self, owner: &Class, instance: &Object) -> Result<Value> {
        self.log_access();
        match self.kind {
            Kind::Static => Ok(Value::Function(self.original.clone())),
            Kind::ClassBound => Ok(Value::Bound(
                self.original.bind(Receiver::Class(owner.clone())),
            )),
            Kind::Instance => Ok(Value::Bound(
                self.original.bind(Receiver::Instance(instance.clone())),
            )),
            // Evaluated exactly once per access.
            Kind::Property => self
                .original
                .invoke(Receiver::Instance(instance.clone()), &[]),
        }
    }
}
