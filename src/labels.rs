//! Variable names used when rendering product terms
//!
//! This module provides the [`VariableLabels`] type, which maps variable positions
//! (most significant first) to names and renders literals. The default names are
//! `A`, `B`, `C`, `D`, truncated to the variable count.

use crate::error::LabelError;
use crate::hypercube::VariableCount;
use std::collections::HashMap;
use std::sync::Arc;

const DEFAULT_LABELS: [&str; VariableCount::MAX] = ["A", "B", "C", "D"];

/// Ordered variable names with name → position lookup
#[derive(Clone, Debug)]
pub struct VariableLabels {
    /// Ordered labels by position
    labels: Vec<Arc<str>>,
    /// Fast lookup: label name -> position index
    label_map: HashMap<Arc<str>, usize>,
}

impl VariableLabels {
    /// The default labels `A`, `B`, ... for `count` variables
    pub fn default_for(count: VariableCount) -> Self {
        let labels = DEFAULT_LABELS[..count.get()]
            .iter()
            .map(|&s| Arc::from(s))
            .collect();
        Self::from_vec(labels)
    }

    /// Custom labels, one per variable, most significant first
    ///
    /// Labels must be non-empty, free of whitespace and distinct.
    ///
    /// ```
    /// use karnaugh_logic::{VariableCount, VariableLabels};
    ///
    /// let count = VariableCount::new(2).unwrap();
    /// let labels = VariableLabels::from_labels(count, &["x", "y"]).unwrap();
    /// assert_eq!(labels.literal(1, false), "y'");
    /// assert!(VariableLabels::from_labels(count, &["x", "x"]).is_err());
    /// ```
    pub fn from_labels<S: AsRef<str>>(
        count: VariableCount,
        labels: &[S],
    ) -> Result<Self, LabelError> {
        if labels.len() != count.get() {
            return Err(LabelError::CountMismatch {
                expected: count.get(),
                actual: labels.len(),
            });
        }

        let mut label_vec: Vec<Arc<str>> = Vec::with_capacity(labels.len());
        for (position, label) in labels.iter().enumerate() {
            let label = label.as_ref();
            if label.is_empty() || label.chars().any(char::is_whitespace) {
                return Err(LabelError::Malformed { position });
            }
            if label_vec.iter().any(|existing| existing.as_ref() == label) {
                return Err(LabelError::Duplicate {
                    label: Arc::from(label),
                });
            }
            label_vec.push(Arc::from(label));
        }

        Ok(Self::from_vec(label_vec))
    }

    fn from_vec(labels: Vec<Arc<str>>) -> Self {
        let label_map = labels
            .iter()
            .enumerate()
            .map(|(i, label)| (Arc::clone(label), i))
            .collect();
        Self { labels, label_map }
    }

    /// Number of labels
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Get label at position
    pub fn get(&self, index: usize) -> Option<&Arc<str>> {
        self.labels.get(index)
    }

    /// Get labels slice
    pub fn as_slice(&self) -> &[Arc<str>] {
        &self.labels
    }

    /// Find position by label name
    pub fn find_position(&self, name: &str) -> Option<usize> {
        self.label_map.get(name).copied()
    }

    /// Literal for the variable at `position`: `A` when `value` is true, `A'` otherwise
    pub fn literal(&self, position: usize, value: bool) -> String {
        let name = self
            .labels
            .get(position)
            .map(|label| label.as_ref())
            .unwrap_or("?");
        if value {
            name.to_string()
        } else {
            format!("{}'", name)
        }
    }
}

impl PartialEq for VariableLabels {
    fn eq(&self, other: &Self) -> bool {
        self.labels == other.labels
    }
}

impl Eq for VariableLabels {}
