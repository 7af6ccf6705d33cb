// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! End-to-end tests for the delegation decorator.
//!
//! Builds the Foo/Bar/Qux/Xyzzy chain, where each container forwards `c`
//! and `g` to a delegate held in a named field, and checks the constructor
//! contract, decoration warnings, access records, and setter rebinding.

use vicar::delegation::Delegate;
use vicar::diag::Severity;
use vicar::error::{DelegationError, Error};
use vicar::object::{Class, ClassBuilder, Function, Receiver, Value};

// ============================================================================
// Fixtures
// ============================================================================

fn foo_class() -> Class {
    ClassBuilder::new("Foo")
        .classmethod("c", |_class, _args| Ok(Value::from("Foo.c")))
        .method("f", |_instance, _args| Ok(Value::from("foo.f")))
        .method("g", |_instance, _args| Ok(Value::from("foo.g")))
        .build()
}

/// A container whose constructor stores a fresh delegate instance in `field`.
fn container(name: &str, field: &str, delegate: &Class) -> Class {
    let delegate = delegate.clone();
    let field = field.to_string();
    ClassBuilder::new(name)
        .constructor(move |instance, _args| {
            let object = delegate.instantiate(&[])?;
            instance.set_field(field.clone(), Value::Object(object));
            Ok(())
        })
        .build()
}

/// Foo <- Bar <- Qux <- Xyzzy, each link forwarding `c` and `g`.
fn chain() -> (Class, Class, Class, Class) {
    let foo = foo_class();
    let bar = Delegate::new("foo", &foo, &["c", "g"]).apply(&container("Bar", "foo", &foo));
    let qux = Delegate::new("bar", &bar, &["c", "g"]).apply(&container("Qux", "bar", &bar));
    let xyzzy = Delegate::new("qux", &qux, &["c", "g"]).apply(&container("Xyzzy", "qux", &qux));
    (foo, bar, qux, xyzzy)
}

/// A callable that reports its receiver: class name for class receivers,
/// lowercased class name for instances.
fn tagged_function() -> Function {
    Function::new("tagged", |receiver, _args| {
        let tag = match &receiver {
            Receiver::Class(class) => class.name().to_string(),
            Receiver::Instance(instance) => instance.class().name().to_lowercase(),
            Receiver::None => "unbound".to_string(),
        };
        Ok(Value::Str(format!("42.{}", tag)))
    })
}

// ============================================================================
// Constructor contract
// ============================================================================

#[test]
fn test_init_requires_delegate_field() {
    let foo = foo_class();
    let proxy = ClassBuilder::new("FooProxy")
        .constructor(|_instance, _args| Ok(()))
        .build();
    let proxy = Delegate::new("foo", &foo, &[]).apply(&proxy);

    let result = proxy.instantiate(&[]);
    assert!(matches!(
        result,
        Err(Error::Delegation(DelegationError::MissingDelegate { .. }))
    ));

    // One error record per faulty construction.
    let sink = proxy.sink().unwrap();
    let records = sink.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].severity, Severity::Error);
}

#[test]
fn test_init_rejects_wrong_delegate_type() {
    let foo = foo_class();
    let proxy = ClassBuilder::new("FooProxy")
        .constructor(|instance, _args| {
            instance.set_field("foo", Value::Int(7));
            Ok(())
        })
        .build();
    let proxy = Delegate::new("foo", &foo, &[]).apply(&proxy);

    assert!(matches!(
        proxy.instantiate(&[]),
        Err(Error::Delegation(DelegationError::DelegateTypeMismatch { .. }))
    ));
}

// ============================================================================
// Decoration warnings
// ============================================================================

#[test]
fn test_decorator_warnings() {
    let foo = foo_class();
    let foo_for_ctor = foo.clone();
    let proxy_class = ClassBuilder::new("FooProxy")
        .method("g", |_instance, _args| Ok(Value::Unit))
        .constructor(move |instance, _args| {
            instance.set_field("foo", Value::Object(foo_for_ctor.instantiate(&[])?));
            Ok(())
        })
        .build();

    let proxy = Delegate::new("foo", &foo, &["bar", "g"])
        .with_verbosity(Severity::Warn)
        .apply(&proxy_class);

    assert_eq!(
        proxy.sink().unwrap().messages(),
        vec![
            "The delegate type 'Foo' does not provide attribute 'bar'.",
            "Overwriting an existing attribute 'g'.",
        ]
    );
}

#[test]
fn test_default_verbosity_suppresses_warnings() {
    let foo = foo_class();
    let proxy = ClassBuilder::new("FooProxy").build();
    let proxy = Delegate::new("foo", &foo, &["bar"]).apply(&proxy);

    assert!(proxy.sink().unwrap().is_empty());
}

// ============================================================================
// Forwarding and access records
// ============================================================================

#[test]
fn test_forwarding_matches_direct_access() {
    let (foo, bar, _, _) = chain();

    let foo_instance = foo.instantiate(&[]).unwrap();
    let bar_instance = bar.instantiate(&[]).unwrap();

    assert_eq!(
        bar_instance.get_attr("c").unwrap().call(&[]).unwrap(),
        foo.get_attr("c").unwrap().call(&[]).unwrap()
    );
    assert_eq!(
        bar_instance.get_attr("g").unwrap().call(&[]).unwrap(),
        foo_instance.get_attr("g").unwrap().call(&[]).unwrap()
    );
}

#[test]
fn test_delegator_verbosity() {
    let foo = foo_class();
    let foo_for_ctor = foo.clone();
    let proxy = ClassBuilder::new("FooProxy")
        .method("f", |_instance, _args| Ok(Value::from("FooProxy.f")))
        .constructor(move |instance, _args| {
            instance.set_field("foo", Value::Object(foo_for_ctor.instantiate(&[])?));
            Ok(())
        })
        .build();
    let proxy = Delegate::new("foo", &foo, &["c", "g"])
        .with_verbosity(Severity::Info)
        .apply(&proxy);

    let instance = proxy.instantiate(&[]).unwrap();
    let sink = proxy.sink().unwrap();
    sink.clear();

    assert_eq!(
        proxy.get_attr("c").unwrap().call(&[]).unwrap(),
        Value::from("Foo.c")
    );
    assert_eq!(
        instance.get_attr("c").unwrap().call(&[]).unwrap(),
        Value::from("Foo.c")
    );
    assert_eq!(
        instance.get_attr("g").unwrap().call(&[]).unwrap(),
        Value::from("foo.g")
    );

    assert_eq!(
        sink.messages(),
        vec![
            "Foo<class>.c<getter>",
            "Foo<instance>.c<getter>",
            "Foo<instance>.g<getter>",
        ]
    );
}

#[test]
fn test_unforwarded_attribute_stays_local() {
    let (_, bar, _, _) = chain();
    let instance = bar.instantiate(&[]).unwrap();

    // `f` is not in the forwarded set, so it resolves on Bar and fails there.
    assert!(instance.get_attr("f").is_err());
}

// ============================================================================
// Setter rebinding
// ============================================================================

#[test]
fn test_setter_context() {
    let (foo, bar, _, _) = chain();
    let instance = bar.instantiate(&[]).unwrap();

    let tagged = tagged_function();
    let class_bound = Value::Bound(tagged.bind(Receiver::Class(bar.clone())));
    let instance_bound = Value::Bound(tagged.bind(Receiver::Instance(instance.clone())));

    instance.set_attr("g", instance_bound).unwrap();
    instance.set_attr("c", class_bound).unwrap();

    // The instance-bound method now targets bar.foo, the class-bound one Foo.
    let delegate = instance.get_attr("foo").unwrap();
    let delegate = delegate.as_object().unwrap();

    let g = instance.get_attr("g").unwrap();
    let receiver = g.as_bound().unwrap().receiver().clone();
    assert!(receiver.as_instance().unwrap().same(delegate));

    let c = instance.get_attr("c").unwrap();
    let receiver = c.as_bound().unwrap().receiver().clone();
    assert!(receiver.as_class().unwrap().same(&foo));

    assert_eq!(g.call(&[]).unwrap(), Value::from("42.foo"));
    assert_eq!(c.call(&[]).unwrap(), Value::from("42.Foo"));
}

#[test]
fn test_setter_recursion() {
    let (foo, _, _, xyzzy) = chain();
    let instance = xyzzy.instantiate(&[]).unwrap();

    let tagged = tagged_function();
    instance
        .set_attr("c", Value::Bound(tagged.bind(Receiver::Class(xyzzy.clone()))))
        .unwrap();
    instance
        .set_attr(
            "g",
            Value::Bound(tagged.bind(Receiver::Instance(instance.clone()))),
        )
        .unwrap();

    // Walk xyzzy.qux.bar.foo by hand.
    let qux = instance.get_attr("qux").unwrap();
    let bar = qux.as_object().unwrap().get_attr("bar").unwrap();
    let innermost = bar.as_object().unwrap().get_attr("foo").unwrap();
    let innermost = innermost.as_object().unwrap();

    let c = instance.get_attr("c").unwrap();
    assert!(c
        .as_bound()
        .unwrap()
        .receiver()
        .as_class()
        .unwrap()
        .same(&foo));

    let g = instance.get_attr("g").unwrap();
    assert!(g
        .as_bound()
        .unwrap()
        .receiver()
        .as_instance()
        .unwrap()
        .same(innermost));

    assert_eq!(g.call(&[]).unwrap(), Value::from("42.foo"));
    assert_eq!(c.call(&[]).unwrap(), Value::from("42.Foo"));
}
