//! Minimization results
//!
//! A [`Solution`] is the ordered list of selected groups together with the data
//! needed to render it: the variable count, the labels and the ON-set it covers.

use crate::hypercube::{Minterm, VariableCount};
use crate::implicant::Implicant;
use crate::labels::VariableLabels;
use std::fmt;
use std::sync::Arc;

/// One selected group (a prime implicant chosen for the cover)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    implicant: Implicant,
    term: Arc<str>,
    invariants: Vec<(Arc<str>, bool)>,
    is_prime: bool,
    essential: bool,
}

impl Group {
    pub(crate) fn new(
        implicant: Implicant,
        labels: &VariableLabels,
        is_prime: bool,
        essential: bool,
    ) -> Self {
        let term = Arc::from(implicant.term_with(labels).as_str());
        let invariants = implicant
            .fixed()
            .filter_map(|(position, value)| {
                labels.get(position).map(|label| (Arc::clone(label), value))
            })
            .collect();
        Group {
            implicant,
            term,
            invariants,
            is_prime,
            essential,
        }
    }

    /// The underlying subcube
    pub fn implicant(&self) -> &Implicant {
        &self.implicant
    }

    /// Minterms inside the group, ascending
    pub fn minterms(&self) -> &[Minterm] {
        self.implicant.minterms()
    }

    /// Product term, e.g. `BC'`
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Number of cells in the group
    pub fn size(&self) -> usize {
        self.implicant.size()
    }

    /// Number of literals in the term
    pub fn literal_count(&self) -> usize {
        self.implicant.literal_count()
    }

    /// Whether no larger valid group contains this one
    pub fn is_prime(&self) -> bool {
        self.is_prime
    }

    /// Whether this group is the only prime implicant covering some ON minterm
    pub fn is_essential(&self) -> bool {
        self.essential
    }

    /// Variables that keep the same value across the whole group
    ///
    /// These are exactly the literals of the term; a user interface highlights
    /// the corresponding map labels.
    pub fn invariants(&self) -> &[(Arc<str>, bool)] {
        &self.invariants
    }
}

/// How much the grouping shrinks the function compared to listing every ON minterm
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum OptimizationLevel {
    /// Nothing to optimize (empty ON-set)
    None,
    /// Reduction below 25%
    Minimal,
    /// Reduction of at least 25%
    Moderate,
    /// Reduction of at least 50%
    Good,
    /// Reduction of at least 75%
    Excellent,
}

impl OptimizationLevel {
    /// Classify a reduction ratio `1 - terms / on_count`
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 0.75 {
            OptimizationLevel::Excellent
        } else if ratio >= 0.5 {
            OptimizationLevel::Good
        } else if ratio >= 0.25 {
            OptimizationLevel::Moderate
        } else {
            OptimizationLevel::Minimal
        }
    }
}

impl fmt::Display for OptimizationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OptimizationLevel::None => "No Optimization",
            OptimizationLevel::Minimal => "Minimal",
            OptimizationLevel::Moderate => "Moderate",
            OptimizationLevel::Good => "Good",
            OptimizationLevel::Excellent => "Excellent",
        };
        write!(f, "{}", name)
    }
}

/// A minimal sum-of-products cover of a truth table's ON-set
///
/// # Examples
///
/// ```
/// use karnaugh_logic::{minimize, CellValue::{Off, On}};
///
/// # fn main() -> Result<(), karnaugh_logic::MinimizationError> {
/// let solution = minimize(2, &[Off, On, Off, On])?;
/// assert_eq!(solution.expression(), "F = B");
/// assert_eq!(solution.canonical_form(), "F = m(1, 3)");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    variable_count: VariableCount,
    labels: VariableLabels,
    on_set: Vec<Minterm>,
    groups: Vec<Group>,
}

impl Solution {
    pub(crate) fn new(
        variable_count: VariableCount,
        labels: VariableLabels,
        on_set: Vec<Minterm>,
        groups: Vec<Group>,
    ) -> Self {
        Solution {
            variable_count,
            labels,
            on_set,
            groups,
        }
    }

    /// Number of variables of the minimized function
    pub fn variable_count(&self) -> VariableCount {
        self.variable_count
    }

    /// Labels the terms were rendered with
    pub fn labels(&self) -> &VariableLabels {
        &self.labels
    }

    /// ON minterms of the input, ascending
    pub fn on_set(&self) -> &[Minterm] {
        &self.on_set
    }

    /// Selected groups in expression order
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// True when the function is constant 0
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Product terms in expression order
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(Group::term)
    }

    /// Right-hand side of the expression: `term_1 + ... + term_k`, or `0`
    pub fn sum_of_products(&self) -> String {
        if self.groups.is_empty() {
            "0".to_string()
        } else {
            self.terms().collect::<Vec<_>>().join(" + ")
        }
    }

    /// `F = term_1 + term_2 + ...`, or `F = 0` for the empty cover
    pub fn expression(&self) -> String {
        format!("F = {}", self.sum_of_products())
    }

    /// `F = m(i, j, ...)` listing every ON minterm, independent of grouping
    ///
    /// With no ON minterms this is `F = 0`.
    pub fn canonical_form(&self) -> String {
        canonical_form(&self.on_set)
    }

    /// Whether the minterm lies inside some selected group
    pub fn covers(&self, minterm: Minterm) -> bool {
        self.groups
            .iter()
            .any(|group| group.implicant().contains(minterm))
    }

    /// Value of the minimized expression for the given input combination
    pub fn evaluate(&self, minterm: Minterm) -> bool {
        self.covers(minterm)
    }

    /// Number of product terms
    pub fn term_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of literals across all terms
    pub fn literal_count(&self) -> usize {
        self.groups.iter().map(Group::literal_count).sum()
    }

    /// Number of distinct variables that appear complemented
    ///
    /// This is the number of NOT gates a two-level realisation needs.
    pub fn inverter_count(&self) -> usize {
        (0..self.variable_count.get())
            .filter(|&position| {
                self.groups
                    .iter()
                    .any(|group| group.implicant().inputs()[position] == Some(false))
            })
            .count()
    }

    /// `1 - terms / on_count`, or `None` when there are no ON minterms
    pub fn reduction_ratio(&self) -> Option<f64> {
        if self.on_set.is_empty() {
            None
        } else {
            Some(1.0 - self.term_count() as f64 / self.on_set.len() as f64)
        }
    }

    /// Rating of [`reduction_ratio`](Self::reduction_ratio)
    pub fn optimization_level(&self) -> OptimizationLevel {
        self.reduction_ratio()
            .map_or(OptimizationLevel::None, OptimizationLevel::from_ratio)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression())
    }
}

pub(crate) fn canonical_form(on_set: &[Minterm]) -> String {
    if on_set.is_empty() {
        return "F = 0".to_string();
    }
    let indices: Vec<String> = on_set.iter().map(|m| m.to_string()).collect();
    format!("F = m({})", indices.join(", "))
}
