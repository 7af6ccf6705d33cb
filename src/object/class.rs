// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Classes, members, and constructors.
//!
//! A `Class` is an explicit attribute table built once through
//! `ClassBuilder`. After `build`, only the decorators mutate the table, and
//! decoration is expected to finish before the class is shared.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::diag::DiagnosticSink;
use crate::error::{AccessError, Result};

use super::accessor::ComputedAccessor;
use super::function::{Function, Receiver};
use super::instance::Object;
use super::value::Value;

/// Attribute-table entry. A closed enumeration: classification anywhere in
/// the crate is a total match over these variants, never type sniffing.
#[derive(Clone)]
pub enum Member {
    /// Callable ignoring its receiver.
    Static(Function),
    /// Callable bound to a class at access time.
    ClassBound(Function),
    /// Zero-argument getter evaluated on instance access.
    Property(Function),
    /// Callable bound to the accessed instance.
    Instance(Function),
    /// Plain stored value.
    Data(Value),
    /// Installed computed accessor (forwarding, instrumentation).
    Computed(Rc<dyn ComputedAccessor>),
}

impl Member {
    /// Data-tier members intercept instance access ahead of instance fields.
    pub fn is_data(&self) -> bool {
        match self {
            Member::Property(_) => true,
            Member::Computed(accessor) => accessor.is_data(),
            _ => false,
        }
    }
}

impl fmt::Debug for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Member::Static(func) => write!(f, "Static({})", func.name()),
            Member::ClassBound(func) => write!(f, "ClassBound({})", func.name()),
            Member::Property(func) => write!(f, "Property({})", func.name()),
            Member::Instance(func) => write!(f, "Instance({})", func.name()),
            Member::Data(value) => write!(f, "Data({})", value.type_name()),
            Member::Computed(accessor) => write!(f, "Computed({})", accessor.name()),
        }
    }
}

/// Constructor body plus the wrap-once marker used by delegation.
#[derive(Clone)]
pub struct Constructor {
    body: Rc<dyn Fn(&Object, &[Value]) -> Result<()>>,
    delegate_checked: bool,
}

impl Constructor {
    pub fn new(body: impl Fn(&Object, &[Value]) -> Result<()> + 'static) -> Self {
        Self {
            body: Rc::new(body),
            delegate_checked: false,
        }
    }

    /// Constructor carrying the marker that a delegate contract check has
    /// already been wrapped around it.
    pub fn checked(body: impl Fn(&Object, &[Value]) -> Result<()> + 'static) -> Self {
        Self {
            body: Rc::new(body),
            delegate_checked: true,
        }
    }

    pub fn is_delegate_checked(&self) -> bool {
        self.delegate_checked
    }

    pub fn run(&self, instance: &Object, args: &[Value]) -> Result<()> {
        (self.body)(instance, args)
    }
}

impl fmt::Debug for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Constructor(checked: {})", self.delegate_checked)
    }
}

struct ClassInner {
    name: String,
    base: Option<Class>,
    members: RefCell<BTreeMap<String, Member>>,
    constructor: RefCell<Option<Constructor>>,
    sink: RefCell<Option<DiagnosticSink>>,
    instrumented: Cell<bool>,
}

/// Shared handle to a class. Clones refer to the same table; comparison is
/// by identity.
#[derive(Clone)]
pub struct Class {
    inner: Rc<ClassInner>,
}

impl Class {
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn base(&self) -> Option<Class> {
        self.inner.base.clone()
    }

    /// Identity comparison.
    pub fn same(&self, other: &Class) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Walk the chain derived-to-base; return the member and its defining
    /// class. The member is cloned out of the table, so resolving it may
    /// re-enter the table safely.
    pub fn lookup(&self, name: &str) -> Option<(Member, Class)> {
        if let Some(member) = self.inner.members.borrow().get(name) {
            return Some((member.clone(), self.clone()));
        }
        self.base().and_then(|base| base.lookup(name))
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Full attribute table across the chain, base entries shadowed by
    /// derived ones.
    pub fn flattened_members(&self) -> BTreeMap<String, Member> {
        let mut table = match self.base() {
            Some(base) => base.flattened_members(),
            None => BTreeMap::new(),
        };
        for (name, member) in self.inner.members.borrow().iter() {
            table.insert(name.clone(), member.clone());
        }
        table
    }

    /// Install or replace a member on this class. Decorator surface.
    pub fn set_member(&self, name: impl Into<String>, member: Member) {
        self.inner.members.borrow_mut().insert(name.into(), member);
    }

    /// Nearest constructor in the chain.
    pub fn constructor(&self) -> Option<Constructor> {
        let own = self.inner.constructor.borrow().clone();
        own.or_else(|| self.base().and_then(|base| base.constructor()))
    }

    /// Install or replace the constructor on this class. Decorator surface.
    pub fn set_constructor(&self, constructor: Constructor) {
        *self.inner.constructor.borrow_mut() = Some(constructor);
    }

    /// Diagnostic sink attached by a decorator, if any.
    pub fn sink(&self) -> Option<DiagnosticSink> {
        self.inner.sink.borrow().clone()
    }

    pub fn set_sink(&self, sink: DiagnosticSink) {
        *self.inner.sink.borrow_mut() = Some(sink);
    }

    pub fn is_instrumented(&self) -> bool {
        self.inner.instrumented.get()
    }

    pub fn mark_instrumented(&self) {
        self.inner.instrumented.set(true);
    }

    /// Class-level attribute access.
    ///
    /// Computed accessors take the class path; class-bound callables bind
    /// the accessed class; properties and instance callables yield their
    /// unbound function.
    pub fn get_attr(&self, name: &str) -> Result<Value> {
        let (member, owner) = self.lookup(name).ok_or_else(|| AccessError::AttributeNotFound {
            type_name: self.name().to_string(),
            attr: name.to_string(),
        })?;
        match member {
            Member::Computed(accessor) => accessor.get_class(&owner),
            Member::ClassBound(func) => Ok(Value::Bound(func.bind(Receiver::Class(self.clone())))),
            Member::Static(func) | Member::Property(func) | Member::Instance(func) => {
                Ok(Value::Function(func))
            }
            Member::Data(value) => Ok(value),
        }
    }

    /// Allocate an instance and run the nearest constructor in the chain.
    pub fn instantiate(&self, args: &[Value]) -> Result<Object> {
        let instance = Object::new(self.clone());
        if let Some(constructor) = self.constructor() {
            constructor.run(&instance, args)?;
        }
        Ok(instance)
    }
}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Class({})", self.inner.name)
    }
}

/// Builder for a class attribute table.
pub struct ClassBuilder {
    name: String,
    base: Option<Class>,
    members: BTreeMap<String, Member>,
    constructor: Option<Constructor>,
}

impl ClassBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: None,
            members: BTreeMap::new(),
            constructor: None,
        }
    }

    pub fn base(mut self, base: &Class) -> Self {
        self.base = Some(base.clone());
        self
    }

    pub fn staticmethod(
        mut self,
        name: impl Into<String>,
        body: impl Fn(&[Value]) -> Result<Value> + 'static,
    ) -> Self {
        let name = name.into();
        let func = Function::function(name.clone(), body);
        self.members.insert(name, Member::Static(func));
        self
    }

    pub fn classmethod(
        mut self,
        name: impl Into<String>,
        body: impl Fn(&Class, &[Value]) -> Result<Value> + 'static,
    ) -> Self {
        let name = name.into();
        let func = Function::classmethod(name.clone(), body);
        self.members.insert(name, Member::ClassBound(func));
        self
    }

    pub fn property(
        mut self,
        name: impl Into<String>,
        body: impl Fn(&Object) -> Result<Value> + 'static,
    ) -> Self {
        let name = name.into();
        let func = Function::method(name.clone(), move |instance, _args| body(instance));
        self.members.insert(name, Member::Property(func));
        self
    }

    pub fn method(
        mut self,
        name: impl Into<String>,
        body: impl Fn(&Object, &[Value]) -> Result<Value> + 'static,
    ) -> Self {
        let name = name.into();
        let func = Function::method(name.clone(), body);
        self.members.insert(name, Member::Instance(func));
        self
    }

    pub fn data(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.members.insert(name.into(), Member::Data(value.into()));
        self
    }

    /// Install an arbitrary prebuilt member.
    pub fn member(mut self, name: impl Into<String>, member: Member) -> Self {
        self.members.insert(name.into(), member);
        self
    }

    pub fn constructor(
        mut self,
        body: impl Fn(&Object, &[Value]) -> Result<()> + 'static,
    ) -> Self {
        self.constructor = Some(Constructor::new(body));
        self
    }

    pub fn build(self) -> Class {
        Class {
            inner: Rc::new(ClassInner {
                name: self.name,
                base: self.base,
                members: RefCell::new(self.members),
                constructor: RefCell::new(self.constructor),
                sink: RefCell::new(None),
                instrumented: Cell::new(false),
            }),
        }
    }
}
