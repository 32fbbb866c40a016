//! Implicants: axis-aligned subcubes of the hypercube
//!
//! An implicant fixes some variables and leaves the rest free. Each position is an
//! `Option<bool>`, the same notation cubes use throughout the crate:
//! - `Some(false)` - variable fixed at 0 (complemented literal)
//! - `Some(true)` - variable fixed at 1 (plain literal)
//! - `None` - free; the implicant spans both halves of this axis
//!
//! A free axis includes both ends of the map along that axis, so wrap-around
//! groups (the four corners, the left and right edges) need no special handling.

use crate::error::MinimizationError;
use crate::hypercube::{self, Minterm, VariableCount};
use crate::labels::VariableLabels;
use std::fmt;
use std::sync::Arc;

/// A subcube of the hypercube, with its minterms precomputed in ascending order
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Implicant {
    count: VariableCount,
    inputs: Arc<[Option<bool>]>,
    minterms: Arc<[Minterm]>,
}

impl Implicant {
    /// Create an implicant from its per-variable pattern, most significant first
    ///
    /// ```
    /// use karnaugh_logic::Implicant;
    ///
    /// // B = 1, D = 1 over four variables
    /// let bd = Implicant::new(&[None, Some(true), None, Some(true)]).unwrap();
    /// assert_eq!(bd.minterms(), &[5, 7, 13, 15]);
    /// assert_eq!(bd.term(), "BD");
    /// ```
    ///
    /// # Errors
    ///
    /// [`MinimizationError::InvalidVariableCount`] unless the pattern has 2 to 4 positions.
    pub fn new(inputs: &[Option<bool>]) -> Result<Self, MinimizationError> {
        let count = VariableCount::new(inputs.len())?;
        Ok(Self::from_pattern(count, inputs))
    }

    /// `inputs` must hold exactly `count` positions
    pub(crate) fn from_pattern(count: VariableCount, inputs: &[Option<bool>]) -> Self {
        let width = inputs.len();
        let mut base: Minterm = 0;
        // Free positions as bit weights, least significant first
        let mut free_weights = Vec::new();
        for (position, input) in inputs.iter().enumerate() {
            let weight = 1 << (width - 1 - position);
            match input {
                Some(true) => base |= weight,
                Some(false) => {}
                None => free_weights.push(weight),
            }
        }
        free_weights.reverse();

        let minterms: Vec<Minterm> = (0..1usize << free_weights.len())
            .map(|k| {
                free_weights
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| (k >> i) & 1 == 1)
                    .fold(base, |m, (_, &weight)| m | weight)
            })
            .collect();

        Implicant {
            count,
            inputs: inputs.into(),
            minterms: minterms.into(),
        }
    }

    /// The single-cell implicant for `minterm`
    pub fn from_minterm(minterm: Minterm, count: VariableCount) -> Self {
        let inputs: Vec<Option<bool>> = hypercube::to_bits(minterm, count)
            .into_iter()
            .map(Some)
            .collect();
        Self::from_pattern(count, &inputs)
    }

    /// The implicant spanning the whole map (term `1`)
    pub fn whole_map(count: VariableCount) -> Self {
        Self::from_pattern(count, &vec![None; count.get()])
    }

    /// Per-variable pattern, most significant first
    pub fn inputs(&self) -> &[Option<bool>] {
        &self.inputs
    }

    /// Number of variables of the map this implicant lives in
    pub fn num_variables(&self) -> usize {
        self.count.get()
    }

    /// The map's variable count
    pub fn variable_count(&self) -> VariableCount {
        self.count
    }

    /// Minterms inside the subcube, ascending
    pub fn minterms(&self) -> &[Minterm] {
        &self.minterms
    }

    /// Number of minterms, `2^free_count`
    pub fn size(&self) -> usize {
        self.minterms.len()
    }

    /// Number of free positions
    pub fn free_count(&self) -> usize {
        self.inputs.iter().filter(|input| input.is_none()).count()
    }

    /// Number of literals in the product term
    pub fn literal_count(&self) -> usize {
        self.inputs.len() - self.free_count()
    }

    /// Whether the minterm satisfies every fixed position
    pub fn contains(&self, minterm: Minterm) -> bool {
        let width = self.inputs.len();
        minterm < 1 << width
            && self.inputs.iter().enumerate().all(|(position, input)| {
                input.map_or(true, |value| {
                    ((minterm >> (width - 1 - position)) & 1 == 1) == value
                })
            })
    }

    /// Whether `other` is a subcube of this implicant
    ///
    /// Every position fixed here must be fixed to the same value in `other`.
    pub fn covers(&self, other: &Implicant) -> bool {
        self.inputs.len() == other.inputs.len()
            && self
                .inputs
                .iter()
                .zip(other.inputs.iter())
                .all(|(mine, theirs)| mine.is_none() || mine == theirs)
    }

    /// The pattern with the variable at `position` made free
    pub(crate) fn widened(&self, position: usize) -> Vec<Option<bool>> {
        let mut inputs = self.inputs.to_vec();
        inputs[position] = None;
        inputs
    }

    /// Fixed positions as `(position, value)` pairs
    pub fn fixed(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        self.inputs
            .iter()
            .enumerate()
            .filter_map(|(position, input)| input.map(|value| (position, value)))
    }

    /// Product term using the given labels; `1` when no position is fixed
    pub fn term_with(&self, labels: &VariableLabels) -> String {
        let term: String = self
            .fixed()
            .map(|(position, value)| labels.literal(position, value))
            .collect();
        if term.is_empty() {
            "1".to_string()
        } else {
            term
        }
    }

    /// Product term using the default labels `A`, `B`, `C`, `D`
    pub fn term(&self) -> String {
        self.term_with(&VariableLabels::default_for(self.count))
    }
}

impl fmt::Display for Implicant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.term())
    }
}
