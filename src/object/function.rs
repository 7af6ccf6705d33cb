// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Callables, receivers, and bound methods.
//!
//! A `Function` is a named native callable. Binding is always explicit: a
//! `BoundMethod` bundles a function with a `Receiver`, and "rebinding" builds
//! a new pair with a caller-supplied receiver instead of inspecting an
//! implicit one.

use std::fmt;
use std::rc::Rc;

use crate::error::{AccessError, Result};

use super::class::Class;
use super::instance::Object;
use super::value::Value;

type NativeFn = dyn Fn(Receiver, &[Value]) -> Result<Value>;

/// What a callable runs against.
#[derive(Clone)]
pub enum Receiver {
    None,
    Class(Class),
    Instance(Object),
}

impl Receiver {
    /// Identity comparison; handles compare by pointer.
    pub fn same(&self, other: &Receiver) -> bool {
        match (self, other) {
            (Receiver::None, Receiver::None) => true,
            (Receiver::Class(a), Receiver::Class(b)) => a.same(b),
            (Receiver::Instance(a), Receiver::Instance(b)) => a.same(b),
            _ => false,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Receiver::None)
    }

    pub fn as_class(&self) -> Option<&Class> {
        match self {
            Receiver::Class(class) => Some(class),
            _ => None,
        }
    }

    pub fn as_instance(&self) -> Option<&Object> {
        match self {
            Receiver::Instance(instance) => Some(instance),
            _ => None,
        }
    }
}

impl fmt::Debug for Receiver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Receiver::None => write!(f, "Receiver::None"),
            Receiver::Class(class) => write!(f, "Receiver::Class({})", class.name()),
            Receiver::Instance(instance) => {
                write!(f, "Receiver::Instance({})", instance.class().name())
            }
        }
    }
}

/// A named native callable behind a shared handle.
#[derive(Clone)]
pub struct Function {
    inner: Rc<FunctionInner>,
}

struct FunctionInner {
    name: String,
    body: Box<NativeFn>,
}

impl Function {
    /// Callable receiving the raw `Receiver` it was invoked with.
    pub fn new(
        name: impl Into<String>,
        body: impl Fn(Receiver, &[Value]) -> Result<Value> + 'static,
    ) -> Self {
        Self {
            inner: Rc::new(FunctionInner {
                name: name.into(),
                body: Box::new(body),
            }),
        }
    }

    /// Callable that ignores its receiver.
    pub fn function(
        name: impl Into<String>,
        body: impl Fn(&[Value]) -> Result<Value> + 'static,
    ) -> Self {
        Self::new(name, move |_receiver, args| body(args))
    }

    /// Callable that requires an instance receiver.
    pub fn method(
        name: impl Into<String>,
        body: impl Fn(&Object, &[Value]) -> Result<Value> + 'static,
    ) -> Self {
        let name = name.into();
        let label = name.clone();
        Self::new(name, move |receiver, args| match receiver {
            Receiver::Instance(instance) => body(&instance, args),
            _ => Err(AccessError::UnboundCall(label.clone()).into()),
        })
    }

    /// Callable bound to a class; an instance receiver contributes its class.
    pub fn classmethod(
        name: impl Into<String>,
        body: impl Fn(&Class, &[Value]) -> Result<Value> + 'static,
    ) -> Self {
        let name = name.into();
        let label = name.clone();
        Self::new(name, move |receiver, args| match receiver {
            Receiver::Class(class) => body(&class, args),
            Receiver::Instance(instance) => body(&instance.class(), args),
            Receiver::None => Err(AccessError::UnboundCall(label.clone()).into()),
        })
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Run the body with an explicit receiver.
    pub fn invoke(&self, receiver: Receiver, args: &[Value]) -> Result<Value> {
        (self.inner.body)(receiver, args)
    }

    /// Pair this function with a receiver.
    pub fn bind(&self, receiver: Receiver) -> BoundMethod {
        BoundMethod {
            function: self.clone(),
            receiver,
        }
    }

    /// Identity comparison.
    pub fn same(&self, other: &Function) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Function({})", self.inner.name)
    }
}

/// A function paired with the receiver it will run against.
#[derive(Clone)]
pub struct BoundMethod {
    function: Function,
    receiver: Receiver,
}

impl BoundMethod {
    pub fn new(function: Function, receiver: Receiver) -> Self {
        Self { function, receiver }
    }

    pub fn function(&self) -> &Function {
        &self.function
    }

    pub fn receiver(&self) -> &Receiver {
        &self.receiver
    }

    pub fn call(&self, args: &[Value]) -> Result<Value> {
        self.function.invoke(self.receiver.clone(), args)
    }

    /// Build a new binding of the same function to a different receiver.
    pub fn rebind(&self, receiver: Receiver) -> BoundMethod {
        BoundMethod {
            function: self.function.clone(),
            receiver,
        }
    }
}

impl fmt::Debug for BoundMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BoundMethod({}, {:?})",
            self.function.name(),
            self.receiver
        )
    }
}
