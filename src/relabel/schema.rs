// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Column schemas.
//!
//! A schema maps column names to their label groups so dtypes can be built
//! from configuration instead of code:
//!
//! ```json
//! {
//!     "gender": { "levels": [[1, "male"], [2, "female"]] },
//!     "educ": { "levels": [[1, "grade school"], [2, "high school"]], "ordered": true }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RelabelError;

use super::category::Label;
use super::dtype::RelabelDtype;

/// One column's label groups, row-major as in [`RelabelDtype::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub levels: Vec<Vec<Label>>,
    #[serde(default)]
    pub ordered: bool,
}

impl ColumnSpec {
    pub fn dtype(&self) -> Result<RelabelDtype, RelabelError> {
        RelabelDtype::new(self.levels.clone(), self.ordered)
    }
}

/// A named collection of column specs, loadable from JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(flatten)]
    columns: BTreeMap<String, ColumnSpec>,
}

impl Schema {
    pub fn from_json(content: &str) -> Result<Self, RelabelError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, RelabelError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn get(&self, column: &str) -> Option<&ColumnSpec> {
        self.columns.get(column)
    }

    /// Build the dtype for a named column, if the schema has one.
    pub fn dtype(&self, column: &str) -> Option<Result<RelabelDtype, RelabelError>> {
        self.columns.get(column).map(ColumnSpec::dtype)
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &ColumnSpec)> {
        self.columns.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
