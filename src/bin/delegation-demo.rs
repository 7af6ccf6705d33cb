// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Walkthrough of the delegation and instrumentation decorators.

use anyhow::Result;

use vicar::delegation::Delegate;
use vicar::diag::{init_diagnostics, DiagConfig, Severity};
use vicar::instrument::Instrument;
use vicar::object::{ClassBuilder, Value};

fn main() -> Result<()> {
    let _guard = init_diagnostics(&DiagConfig::development())?;

    println!("=== Delegation ===\n");

    // A delegate class with a field-backed getter and a constant method.
    let foo = ClassBuilder::new("Foo")
        .constructor(|instance, args| {
            let x = args.first().cloned().unwrap_or(Value::Int(13));
            instance.set_field("x", x);
            Ok(())
        })
        .method("g", |instance, _args| instance.get_attr("x"))
        .staticmethod("c", |_args| Ok(Value::Int(42)))
        .build();

    // A container holding a Foo in its `foo` field; `c` and `g` forward.
    let foo_for_ctor = foo.clone();
    let bar = ClassBuilder::new("Bar")
        .constructor(move |instance, _args| {
            let delegate = foo_for_ctor.instantiate(&[])?;
            instance.set_field("foo", Value::Object(delegate));
            Ok(())
        })
        .build();
    let bar = Delegate::new("foo", &foo, &["c", "g"])
        .with_verbosity(Severity::Info)
        .apply(&bar);

    let instance = bar.instantiate(&[])?;
    println!("bar.c() = {}", instance.get_attr("c")?.call(&[])?);
    println!("bar.g() = {}", instance.get_attr("g")?.call(&[])?);

    if let Some(sink) = bar.sink() {
        println!("\ncaptured by {}:", sink.name());
        for message in sink.messages() {
            println!("  {}", message);
        }
    }

    println!("\n=== Instrumentation ===\n");

    let widget = ClassBuilder::new("Widget")
        .staticmethod("bs", |_args| Ok(Value::Unit))
        .classmethod("bc", |class, _args| Ok(Value::from(class.name())))
        .property("bp", |_instance| Ok(Value::Int(7)))
        .method("bm", |instance, _args| {
            Ok(Value::from(instance.class().name()))
        })
        .build();
    let widget = Instrument::new().apply(&widget);

    let instance = widget.instantiate(&[])?;
    instance.get_attr("bs")?.call(&[])?;
    instance.get_attr("bc")?.call(&[])?;
    let bp = instance.get_attr("bp")?;
    println!("widget.bp = {}", bp);
    instance.get_attr("bm")?.call(&[])?;

    if let Some(sink) = widget.sink() {
        println!("\ncaptured by {}:", sink.name());
        for message in sink.messages() {
            println!("  {}", message);
        }
    }

    Ok(())
}
