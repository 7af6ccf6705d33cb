// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Coded columns.

use crate::error::RelabelError;

use super::category::Label;
use super::dtype::RelabelDtype;

/// A column of category codes paired with a [`RelabelDtype`].
///
/// Codes are stable across releveling; only the label view changes. Missing
/// values are `None` codes.
#[derive(Debug, Clone, PartialEq)]
pub struct CodedColumn {
    codes: Vec<Option<u32>>,
    dtype: RelabelDtype,
}

impl CodedColumn {
    /// Build from raw codes, rejecting any outside the category range.
    pub fn from_codes(
        codes: Vec<Option<u32>>,
        dtype: RelabelDtype,
    ) -> Result<Self, RelabelError> {
        let count = dtype.len();
        for code in codes.iter().flatten() {
            if *code as usize >= count {
                return Err(RelabelError::CodeOutOfRange { code: *code, count });
            }
        }
        Ok(Self { codes, dtype })
    }

    /// Build from labels of the active group. Labels not in the group become
    /// missing values.
    pub fn from_labels(labels: &[Label], dtype: RelabelDtype) -> Self {
        let codes = labels
            .iter()
            .map(|label| {
                dtype
                    .categories()
                    .iter()
                    .position(|candidate| candidate == label)
                    .map(|position| position as u32)
            })
            .collect();
        Self { codes, dtype }
    }

    /// Build from strings, matched against the active group's display forms.
    /// Unknown strings become missing values, so `"1"` resolves against an
    /// integer-labeled group and a stray `"?"` does not fail the load.
    pub fn from_strings(values: &[&str], dtype: RelabelDtype) -> Self {
        let codes = values.iter().map(|value| dtype.code_of(value)).collect();
        Self { codes, dtype }
    }

    pub fn dtype(&self) -> &RelabelDtype {
        &self.dtype
    }

    pub fn codes(&self) -> &[Option<u32>] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Label at `index` under the active group; `None` for a missing value
    /// or an out-of-bounds index.
    pub fn get(&self, index: usize) -> Option<&Label> {
        let code = (*self.codes.get(index)?)?;
        self.dtype.label_of(code).ok()
    }

    /// The whole column viewed through the active group.
    pub fn labels(&self) -> Vec<Option<Label>> {
        self.codes
            .iter()
            .map(|code| {
                code.and_then(|code| self.dtype.label_of(code).ok().cloned())
            })
            .collect()
    }

    /// Re-view the column under another label group. Codes are preserved.
    pub fn relevel(&self, index: usize) -> Result<Self, RelabelError> {
        Ok(Self {
            codes: self.codes.clone(),
            dtype: self.dtype.relevel(index)?,
        })
    }

    /// Concatenate columns sharing one group table. The result keeps the
    /// first column's active group, whatever the others were releveled to.
    pub fn concat(columns: &[CodedColumn]) -> Result<Self, RelabelError> {
        let first = columns.first().ok_or(RelabelError::EmptyLevels)?;
        let mut codes = first.codes.clone();
        for column in &columns[1..] {
            if column.dtype.groups() != first.dtype.groups()
                || column.dtype.ordered() != first.dtype.ordered()
            {
                return Err(RelabelError::MismatchedGroups);
            }
            codes.extend_from_slice(&column.codes);
        }
        Ok(Self {
            codes,
            dtype: first.dtype.clone(),
        })
    }
}
