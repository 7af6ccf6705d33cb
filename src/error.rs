// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Error types for the vicar toolkit.
//!
//! This module provides strongly-typed errors for the different parts of the
//! crate, using `thiserror` for ergonomic error definitions. The demo binary
//! uses `anyhow` at the edge for flexible propagation.

use thiserror::Error;

/// Errors that can occur during attribute access on the object model.
#[derive(Error, Debug)]
pub enum AccessError {
    #[error("Attribute not found: {type_name}.{attr}")]
    AttributeNotFound { type_name: String, attr: String },

    #[error("Read-only attribute: {type_name}.{attr}")]
    ReadOnly { type_name: String, attr: String },

    #[error("Unbound call: '{0}' requires a receiver")]
    UnboundCall(String),

    #[error("Not callable: {0}")]
    NotCallable(String),

    #[error("Field '{0}' does not hold an object")]
    NotAnObject(String),
}

/// Errors raised when a delegation contract is violated at construction time.
#[derive(Error, Debug)]
pub enum DelegationError {
    #[error(
        "Constructing '{container}' requires an instance field named '{delegate_name}' holding a '{delegate_class}'"
    )]
    MissingDelegate {
        container: String,
        delegate_name: String,
        delegate_class: String,
    },

    #[error(
        "Field '{delegate_name}' on '{container}' holds a '{found_class}', expected a '{delegate_class}'"
    )]
    DelegateTypeMismatch {
        container: String,
        delegate_name: String,
        delegate_class: String,
        found_class: String,
    },
}

/// Errors that can occur while building or manipulating relabelable columns.
#[derive(Error, Debug)]
pub enum RelabelError {
    #[error("Ragged label groups: group {index} has {found} labels, expected {expected}")]
    RaggedLevels {
        index: usize,
        found: usize,
        expected: usize,
    },

    #[error("Empty label set")]
    EmptyLevels,

    #[error("Duplicate label '{label}' in group {group}")]
    DuplicateLabel { group: usize, label: String },

    #[error("Group index out of range: {index} (have {count})")]
    GroupOutOfRange { index: usize, count: usize },

    #[error("Cannot concatenate columns with different label group tables")]
    MismatchedGroups,

    #[error("Code out of range: {code} (have {count} categories)")]
    CodeOutOfRange { code: u32, count: usize },

    #[error("IO error reading schema: {0}")]
    IoError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),
}

impl From<std::io::Error> for RelabelError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for RelabelError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}

/// Crate-level error aggregating the per-domain enums.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Access error: {0}")]
    Access(#[from] AccessError),

    #[error("Delegation error: {0}")]
    Delegation(#[from] DelegationError),

    #[error("Relabel error: {0}")]
    Relabel(#[from] RelabelError),
}

/// Result type alias for crate operations.
pub type Result<T> = std::result::Result<T, Error>;
