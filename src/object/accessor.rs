// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The computed-accessor capability.

use crate::error::{AccessError, Result};

use super::class::Class;
use super::instance::Object;
use super::value::Value;

/// An attribute-table entry that intercepts get/set for one attribute name.
///
/// `owner` is the class whose table holds the accessor, supplied by the
/// lookup site so accessors never hold a handle back to their class.
pub trait ComputedAccessor {
    /// Attribute name the accessor is installed under.
    fn name(&self) -> &str;

    /// Class-level read.
    fn get_class(&self, owner: &Class) -> Result<Value>;

    /// Instance-level read.
    fn get_instance(&self, owner: &Class, instance: &Object) -> Result<Value>;

    /// Instance-level write. Read-only unless overridden.
    fn set_instance(&self, owner: &Class, _instance: &Object, _value: Value) -> Result<()> {
        Err(AccessError::ReadOnly {
            type_name: owner.name().to_string(),
            attr: self.name().to_string(),
        }
        .into())
    }

    /// Data accessors intercept instance reads/writes ahead of instance
    /// fields; non-data accessors are shadowed by them.
    fn is_data(&self) -> bool {
        false
    }
}
