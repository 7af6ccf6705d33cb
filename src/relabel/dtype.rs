// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The relabeling dtype.

use crate::error::RelabelError;

use super::category::{CategoryDtype, Label};

/// A categorical dtype carrying several parallel label sets ("groups") for
/// the same codes, one of which is active at a time.
///
/// Construction takes row-major `levels`, one row per category across all
/// groups, and transposes them into the stored group table:
///
/// ```rust,ignore
/// // rows: (code-label, name-label); groups: [1, 2] and ["male", "female"]
/// let dtype = RelabelDtype::new(vec![
///     vec![Label::Int(1), Label::from("male")],
///     vec![Label::Int(2), Label::from("female")],
/// ], false)?;
/// ```
///
/// The active group is held as an explicit [`CategoryDtype`] delegate; the
/// category queries below forward to it by hand rather than through any
/// dynamic dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct RelabelDtype {
    groups: Vec<Vec<Label>>,
    active: usize,
    delegate: CategoryDtype,
    ordered: bool,
}

impl RelabelDtype {
    /// Build from row-major levels. Groups must be rectangular, non-empty,
    /// and unique within each group. The first group starts active.
    pub fn new(levels: Vec<Vec<Label>>, ordered: bool) -> Result<Self, RelabelError> {
        if levels.is_empty() || levels[0].is_empty() {
            return Err(RelabelError::EmptyLevels);
        }
        let width = levels[0].len();
        for (index, row) in levels.iter().enumerate() {
            if row.len() != width {
                return Err(RelabelError::RaggedLevels {
                    index,
                    found: row.len(),
                    expected: width,
                });
            }
        }

        // Transpose rows into the group table.
        let mut groups: Vec<Vec<Label>> = vec![Vec::with_capacity(levels.len()); width];
        for row in levels {
            for (group, label) in row.into_iter().enumerate() {
                groups[group].push(label);
            }
        }
        for (group, labels) in groups.iter().enumerate() {
            CategoryDtype::new(labels.clone(), ordered, group)?;
        }

        let delegate = CategoryDtype::new(groups[0].clone(), ordered, 0)?;
        Ok(Self {
            groups,
            active: 0,
            delegate,
            ordered,
        })
    }

    /// Convenience constructor for a single-group dtype.
    pub fn single(labels: Vec<Label>, ordered: bool) -> Result<Self, RelabelError> {
        Self::new(labels.into_iter().map(|label| vec![label]).collect(), ordered)
    }

    /// The stored group table, one label set per group.
    pub fn groups(&self) -> &[Vec<Label>] {
        &self.groups
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn active_group(&self) -> usize {
        self.active
    }

    /// Switch the active group. Codes keep their meaning; only the label
    /// view changes.
    pub fn relevel(&self, index: usize) -> Result<Self, RelabelError> {
        if index >= self.groups.len() {
            return Err(RelabelError::GroupOutOfRange {
                index,
                count: self.groups.len(),
            });
        }
        let delegate = CategoryDtype::new(self.groups[index].clone(), self.ordered, index)?;
        Ok(Self {
            groups: self.groups.clone(),
            active: index,
            delegate,
            ordered: self.ordered,
        })
    }

    // Explicit forwarders to the active-group delegate.

    pub fn categories(&self) -> &[Label] {
        self.delegate.labels()
    }

    pub fn ordered(&self) -> bool {
        self.delegate.ordered()
    }

    pub fn code_of(&self, label: &str) -> Option<u32> {
        self.delegate.code_of(label)
    }

    pub fn label_of(&self, code: u32) -> Result<&Label, RelabelError> {
        self.delegate.label_of(code)
    }

    pub fn len(&self) -> usize {
        self.delegate.len()
    }

    pub fn is_empty(&self) -> bool {
        self.delegate.is_empty()
    }
}
