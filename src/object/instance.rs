// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Instances and instance-level attribute resolution.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::error::{AccessError, Result};

use super::class::{Class, Member};
use super::function::Receiver;
use super::value::Value;

struct ObjectInner {
    class: Class,
    fields: RefCell<BTreeMap<String, Value>>,
}

/// Shared handle to an instance. Fields appear dynamically; comparison is by
/// identity.
#[derive(Clone)]
pub struct Object {
    inner: Rc<ObjectInner>,
}

impl Object {
    /// Allocate a raw instance without running a constructor.
    /// `Class::instantiate` is the usual entry point.
    pub fn new(class: Class) -> Self {
        Self {
            inner: Rc::new(ObjectInner {
                class,
                fields: RefCell::new(BTreeMap::new()),
            }),
        }
    }

    pub fn class(&self) -> Class {
        self.inner.class.clone()
    }

    /// Identity comparison.
    pub fn same(&self, other: &Object) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Whether this instance's class chain contains `class`.
    pub fn is_instance_of(&self, class: &Class) -> bool {
        let mut current = Some(self.class());
        while let Some(c) = current {
            if c.same(class) {
                return true;
            }
            current = c.base();
        }
        false
    }

    /// Raw field read, bypassing members and accessors.
    pub fn field(&self, name: &str) -> Option<Value> {
        self.inner.fields.borrow().get(name).cloned()
    }

    /// Raw field write, bypassing members and accessors.
    pub fn set_field(&self, name: impl Into<String>, value: Value) {
        self.inner.fields.borrow_mut().insert(name.into(), value);
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.inner.fields.borrow().contains_key(name)
    }

    pub fn field_names(&self) -> Vec<String> {
        self.inner.fields.borrow().keys().cloned().collect()
    }

    /// Instance-level attribute access.
    ///
    /// Resolution order: data-tier members first, then instance fields, then
    /// remaining members bound per kind.
    pub fn get_attr(&self, name: &str) -> Result<Value> {
        let looked = self.class().lookup(name);
        if let Some((member, owner)) = &looked {
            if member.is_data() {
                return self.resolve_member(member.clone(), owner.clone());
            }
        }
        if let Some(value) = self.field(name) {
            return Ok(value);
        }
        if let Some((member, owner)) = looked {
            return self.resolve_member(member, owner);
        }
        Err(AccessError::AttributeNotFound {
            type_name: self.class().name().to_string(),
            attr: name.to_string(),
        }
        .into())
    }

    fn resolve_member(&self, member: Member, owner: Class) -> Result<Value> {
        match member {
            Member::Computed(accessor) => accessor.get_instance(&owner, self),
            Member::Static(func) => Ok(Value::Function(func)),
            Member::ClassBound(func) => {
                Ok(Value::Bound(func.bind(Receiver::Class(self.class()))))
            }
            Member::Instance(func) => {
                Ok(Value::Bound(func.bind(Receiver::Instance(self.clone()))))
            }
            Member::Property(func) => func.invoke(Receiver::Instance(self.clone()), &[]),
            Member::Data(value) => Ok(value),
        }
    }

    /// Instance-level attribute write.
    ///
    /// Routed through a data accessor when one is installed for the name; a
    /// plain property is read-only; otherwise the value lands in instance
    /// fields.
    pub fn set_attr(&self, name: &str, value: Value) -> Result<()> {
        if let Some((member, owner)) = self.class().lookup(name) {
            match member {
                Member::Computed(accessor) if accessor.is_data() => {
                    return accessor.set_instance(&owner, self, value);
                }
                Member::Property(_) => {
                    return Err(AccessError::ReadOnly {
                        type_name: self.class().name().to_string(),
                        attr: name.to_string(),
                    }
                    .into());
                }
                _ => {}
            }
        }
        self.set_field(name, value);
        Ok(())
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Object({})", self.inner.class.name())
    }
}
