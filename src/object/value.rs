// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The dynamic value type flowing through attribute tables.

use std::fmt;

use crate::error::{AccessError, Result};

use super::class::Class;
use super::function::{BoundMethod, Function, Receiver};
use super::instance::Object;

/// A dynamically-typed value.
///
/// Scalars compare by value, handles (`Class`, `Object`, `Function`) by
/// identity.
#[derive(Debug, Clone)]
pub enum Value {
    Unit,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Class(Class),
    Object(Object),
    Function(Function),
    Bound(BoundMethod),
}

impl Value {
    /// Kind label used in diagnostics and call errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Unit => "Unit",
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::Str(_) => "Str",
            Value::Class(_) => "Class",
            Value::Object(_) => "Object",
            Value::Function(_) => "Function",
            Value::Bound(_) => "BoundMethod",
        }
    }

    /// Invoke the value as a callable.
    ///
    /// A `Bound` value calls with its receiver; a bare `Function` calls with
    /// no receiver and fails if the function requires one.
    pub fn call(&self, args: &[Value]) -> Result<Value> {
        match self {
            Value::Bound(bound) => bound.call(args),
            Value::Function(function) => function.invoke(Receiver::None, args),
            other => Err(AccessError::NotCallable(other.type_name().to_string()).into()),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_class(&self) -> Option<&Class> {
        match self {
            Value::Class(class) => Some(class),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_bound(&self) -> Option<&BoundMethod> {
        match self {
            Value::Bound(bound) => Some(bound),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Unit, Value::Unit) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Class(a), Value::Class(b)) => a.same(b),
            (Value::Object(a), Value::Object(b)) => a.same(b),
            (Value::Function(a), Value::Function(b)) => a.same(b),
            (Value::Bound(a), Value::Bound(b)) => {
                a.function().same(b.function()) && a.receiver().same(b.receiver())
            }
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => write!(f, "()"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => write!(f, "{}", s),
            Value::Class(class) => write!(f, "<class {}>", class.name()),
            Value::Object(object) => write!(f, "<{} instance>", object.class().name()),
            Value::Function(function) => write!(f, "<fn {}>", function.name()),
            Value::Bound(bound) => write!(f, "<bound fn {}>", bound.function().name()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Class> for Value {
    fn from(class: Class) -> Self {
        Value::Class(class)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Object(object)
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Value::Function(function)
    }
}

impl From<BoundMethod> for Value {
    fn from(bound: BoundMethod) -> Self {
        Value::Bound(bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::ClassBuilder;

    #[test]
    fn test_scalar_equality() {
        assert_eq!(Value::Int(1), Value::Int(1));
        assert_ne!(Value::Int(1), Value::Int(2));
        assert_eq!(Value::from("a"), Value::Str("a".to_string()));
        assert_ne!(Value::Int(1), Value::Str("1".to_string()));
    }

    #[test]
    fn test_handle_identity_equality() {
        let class = ClassBuilder::new("Widget").build();
        let a = class.instantiate(&[]).unwrap();
        let b = class.instantiate(&[]).unwrap();
        assert_eq!(Value::Object(a.clone()), Value::Object(a.clone()));
        assert_ne!(Value::Object(a), Value::Object(b));
    }

    #[test]
    fn test_non_callable() {
        let err = Value::Int(7).call(&[]).unwrap_err();
        assert_eq!(err.to_string(), "Access error: Not callable: Int");
    }

    #[test]
    fn test_call_bare_function() {
        let f = Function::function("one", |_args| Ok(Value::Int(1)));
        assert_eq!(Value::Function(f).call(&[]).unwrap(), Value::Int(1));
    }
}
