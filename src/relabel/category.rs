// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Labels and the category delegate.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RelabelError;

/// A category label. Code inference matches on the display form, so `1` and
/// `"1"` resolve to the same code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Int(i64),
    Str(String),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Int(value) => write!(f, "{value}"),
            Label::Str(value) => f.write_str(value),
        }
    }
}

impl From<i64> for Label {
    fn from(value: i64) -> Self {
        Label::Int(value)
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Label::Str(value.to_string())
    }
}

impl From<String> for Label {
    fn from(value: String) -> Self {
        Label::Str(value)
    }
}

/// An ordered-or-not list of unique labels. Codes are positions in the list.
///
/// This is the delegate behind [`RelabelDtype`](super::RelabelDtype): the
/// wrapper holds one of these for its active group and forwards category
/// queries to it explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDtype {
    labels: Vec<Label>,
    ordered: bool,
}

impl CategoryDtype {
    /// Build from a label list, rejecting duplicates. `group` is only used
    /// to report which group of a larger table was at fault.
    pub fn new(
        labels: Vec<Label>,
        ordered: bool,
        group: usize,
    ) -> Result<Self, RelabelError> {
        if labels.is_empty() {
            return Err(RelabelError::EmptyLevels);
        }
        for (i, label) in labels.iter().enumerate() {
            if labels[..i].contains(label) {
                return Err(RelabelError::DuplicateLabel {
                    group,
                    label: label.to_string(),
                });
            }
        }
        Ok(Self { labels, ordered })
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn ordered(&self) -> bool {
        self.ordered
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Code of a label, matched by display form.
    pub fn code_of(&self, label: &str) -> Option<u32> {
        self.labels
            .iter()
            .position(|candidate| candidate.to_string() == label)
            .map(|position| position as u32)
    }

    pub fn label_of(&self, code: u32) -> Result<&Label, RelabelError> {
        self.labels
            .get(code as usize)
            .ok_or(RelabelError::CodeOutOfRange {
                code,
                count: self.labels.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gender() -> CategoryDtype {
        CategoryDtype::new(vec![Label::Int(1), Label::Int(2)], false, 0).unwrap()
    }

    #[test]
    fn test_code_of_matches_display_form() {
        let dtype = gender();
        assert_eq!(dtype.code_of("1"), Some(0));
        assert_eq!(dtype.code_of("2"), Some(1));
        assert_eq!(dtype.code_of("3"), None);
    }

    #[test]
    fn test_label_of_round_trip() {
        let dtype = gender();
        assert_eq!(dtype.label_of(1).unwrap(), &Label::Int(2));
        assert!(matches!(
            dtype.label_of(2),
            Err(RelabelError::CodeOutOfRange { code: 2, count: 2 })
        ));
    }

    #[test]
    fn test_rejects_duplicates() {
        let result = CategoryDtype::new(vec![Label::from("male"), Label::from("male")], false, 3);
        assert!(matches!(
            result,
            Err(RelabelError::DuplicateLabel { group: 3, .. })
        ));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            CategoryDtype::new(vec![], false, 0),
            Err(RelabelError::EmptyLevels)
        ));
    }

    #[test]
    fn test_label_display() {
        assert_eq!(Label::Int(42).to_string(), "42");
        assert_eq!(Label::from("white").to_string(), "white");
    }
}
