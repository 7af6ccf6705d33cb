// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The forwarding accessor.
//!
//! One accessor per forwarded name. The delegate is located by field name at
//! every access, never cached, so repointing the container's delegate field
//! is reflected immediately.

use crate::diag::DiagnosticSink;
use crate::error::{AccessError, Result};
use crate::object::{Class, ComputedAccessor, Object, Receiver, Value};

/// Computed accessor that forwards one attribute to the delegate.
pub struct ForwardingAccessor {
    delegate_name: String,
    delegate_class: Class,
    attr: String,
    sink: DiagnosticSink,
}

impl ForwardingAccessor {
    pub fn new(
        delegate_name: impl Into<String>,
        delegate_class: Class,
        attr: impl Into<String>,
        sink: DiagnosticSink,
    ) -> Self {
        Self {
            delegate_name: delegate_name.into(),
            delegate_class,
            attr: attr.into(),
            sink,
        }
    }

    fn log_access(&self, bound: &str, accessor: &str) {
        self.sink.info(format!(
            "{}<{}>.{}<{}>",
            self.delegate_class.name(),
            bound,
            self.attr,
            accessor
        ));
    }

    /// Resolve the delegate object held by the container instance.
    fn delegate(&self, instance: &Object) -> Result<Object> {
        let value = instance.get_attr(&self.delegate_name)?;
        match value {
            Value::Object(delegate) => Ok(delegate),
            _ => Err(AccessError::NotAnObject(self.delegate_name.clone()).into()),
        }
    }
}

impl ComputedAccessor for ForwardingAccessor {
    fn name(&self) -> &str {
        &self.attr
    }

    fn get_class(&self, _owner: &Class) -> Result<Value> {
        self.log_access("class", "getter");
        self.delegate_class.get_attr(&self.attr)
    }

    fn get_instance(&self, _owner: &Class, instance: &Object) -> Result<Value> {
        self.log_access("instance", "getter");
        let delegate = self.delegate(instance)?;
        delegate.get_attr(&self.attr)
    }

    fn set_instance(&self, _owner: &Class, instance: &Object, value: Value) -> Result<()> {
        self.log_access("instance", "setter");
        let delegate = self.delegate(instance)?;

        // Preserve the delegate as the implicit receiver of stored methods.
        // Setting recurses through the delegate's own accessors, so the
        // rebinding is transitive for chained delegation.
        let value = match value {
            Value::Bound(bound) => match bound.receiver() {
                Receiver::Instance(_) => {
                    Value::Bound(bound.rebind(Receiver::Instance(delegate.clone())))
                }
                Receiver::Class(_) => {
                    Value::Bound(bound.rebind(Receiver::Class(delegate.class())))
                }
                Receiver::None => Value::Bound(bound),
            },
            other => other,
        };
        delegate.set_attr(&self.attr, value)
    }

    /// Forwarding intercepts both reads and writes ahead of instance fields.
    fn is_data(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diag::Severity;
    use crate::object::ClassBuilder;
    use std::rc::Rc;

    use crate::object::Member;

    fn counter_class() -> Class {
        ClassBuilder::new("Counter")
            .constructor(|instance, _args| {
                instance.set_field("count", Value::Int(0));
                Ok(())
            })
            .method("value", |instance, _args| instance.get_attr("count"))
            .build()
    }

    fn holder_with_forwarding(delegate_class: &Class) -> Class {
        let holder = ClassBuilder::new("Holder")
            .constructor({
                let delegate_class = delegate_class.clone();
                move |instance, _args| {
                    let delegate = delegate_class.instantiate(&[])?;
                    instance.set_field("inner", Value::Object(delegate));
                    Ok(())
                }
            })
            .build();

        let sink = DiagnosticSink::with_threshold("test::Holder", Severity::Info);
        let accessor = ForwardingAccessor::new(
            "inner",
            delegate_class.clone(),
            "value",
            sink,
        );
        holder.set_member("value", Member::Computed(Rc::new(accessor)));
        holder
    }

    #[test]
    fn test_instance_get_forwards() {
        let counter = counter_class();
        let holder = holder_with_forwarding(&counter);
        let instance = holder.instantiate(&[]).unwrap();

        let value = instance.get_attr("value").unwrap();
        assert_eq!(value.call(&[]).unwrap(), Value::Int(0));
    }

    #[test]
    fn test_delegate_lookup_is_per_access() {
        let counter = counter_class();
        let holder = holder_with_forwarding(&counter);
        let instance = holder.instantiate(&[]).unwrap();

        // Repoint the delegate field; forwarding sees the new object.
        let replacement = counter.instantiate(&[]).unwrap();
        replacement.set_field("count", Value::Int(99));
        instance.set_field("inner", Value::Object(replacement));

        let value = instance.get_attr("value").unwrap();
        assert_eq!(value.call(&[]).unwrap(), Value::Int(99));
    }

    #[test]
    fn test_missing_delegate_field_fails_at_access() {
        let counter = counter_class();
        let holder = holder_with_forwarding(&counter);
        let instance = Object::new(holder);

        let err = instance.get_attr("value").unwrap_err();
        assert!(err.to_string().contains("Attribute not found"));
    }

    #[test]
    fn test_non_object_delegate_field() {
        let counter = counter_class();
        let holder = holder_with_forwarding(&counter);
        let instance = Object::new(holder);
        instance.set_field("inner", Value::Int(3));

        let err = instance.get_attr("value").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Access error: Field 'inner' does not hold an object"
        );
    }
}
