//! Editable truth tables
//!
//! [`TruthTable`] is the mutable side of the minimizer: it owns the cells a user
//! edits and hands an immutable snapshot to the minimizer on request. Changing
//! the variable count means building a new table.

use crate::cell::CellValue;
use crate::error::{LabelError, MinimizationError, ParseError};
use crate::hypercube::{Minterm, VariableCount};
use crate::labels::VariableLabels;
use crate::minimize::{self, Minimizable};
use crate::solution::{self, Solution};
use crate::MinimizerConfig;
use log::debug;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Probability that [`TruthTable::randomize`] turns a cell ON
pub const RANDOM_ON_PROBABILITY: f64 = 0.3;

/// Truth table of a function of 2 to 4 variables
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TruthTable {
    variable_count: VariableCount,
    cells: Vec<CellValue>,
    labels: VariableLabels,
}

impl TruthTable {
    /// An all-OFF table
    ///
    /// ```
    /// use karnaugh_logic::TruthTable;
    ///
    /// let table = TruthTable::new(3).unwrap();
    /// assert_eq!(table.to_string(), "00000000");
    /// assert!(TruthTable::new(6).is_err());
    /// ```
    pub fn new(variable_count: usize) -> Result<Self, MinimizationError> {
        let variable_count = VariableCount::new(variable_count)?;
        Ok(TruthTable {
            variable_count,
            cells: vec![CellValue::Off; variable_count.cell_count()],
            labels: VariableLabels::default_for(variable_count),
        })
    }

    /// A table holding the given cells
    pub fn from_cells(
        variable_count: usize,
        cells: Vec<CellValue>,
    ) -> Result<Self, MinimizationError> {
        let variable_count = VariableCount::new(variable_count)?;
        if cells.len() != variable_count.cell_count() {
            return Err(MinimizationError::CellsLengthMismatch {
                expected: variable_count.cell_count(),
                actual: cells.len(),
            });
        }
        Ok(TruthTable {
            variable_count,
            cells,
            labels: VariableLabels::default_for(variable_count),
        })
    }

    /// Replace the default variable names
    pub fn with_labels<S: AsRef<str>>(mut self, labels: &[S]) -> Result<Self, LabelError> {
        self.labels = VariableLabels::from_labels(self.variable_count, labels)?;
        Ok(self)
    }

    /// Number of variables
    pub fn variable_count(&self) -> VariableCount {
        self.variable_count
    }

    /// Variable names used when rendering terms
    pub fn labels(&self) -> &VariableLabels {
        &self.labels
    }

    /// All cells, indexed by minterm
    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }

    /// The cell for `minterm`, if in range
    pub fn get(&self, minterm: Minterm) -> Option<CellValue> {
        self.cells.get(minterm).copied()
    }

    /// Set one cell; returns false if `minterm` is out of range
    pub fn set(&mut self, minterm: Minterm, value: CellValue) -> bool {
        match self.cells.get_mut(minterm) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Advance one cell through Off → On → DontCare → Off
    ///
    /// Returns the new value, or `None` if `minterm` is out of range.
    pub fn toggle(&mut self, minterm: Minterm) -> Option<CellValue> {
        let cell = self.cells.get_mut(minterm)?;
        *cell = cell.next();
        Some(*cell)
    }

    /// Reset every cell to OFF, then apply comma-separated minterm and don't-care lists
    ///
    /// Entries are trimmed; entries that are not numbers or are out of range are
    /// ignored. Don't-cares are applied last, so a minterm listed in both ends
    /// up as a don't-care.
    ///
    /// ```
    /// use karnaugh_logic::{CellValue, TruthTable};
    ///
    /// let mut table = TruthTable::new(2).unwrap();
    /// table.apply_lists("0, 3, 9, x", "1");
    /// assert_eq!(table.to_string(), "1X01");
    /// ```
    pub fn apply_lists(&mut self, minterms: &str, dont_cares: &str) {
        self.clear();
        for m in parse_minterm_list(minterms, self.cells.len()) {
            self.cells[m] = CellValue::On;
        }
        for m in parse_minterm_list(dont_cares, self.cells.len()) {
            self.cells[m] = CellValue::DontCare;
        }
        debug!(
            "apply_lists: {} on, {} don't-care",
            self.on_set().len(),
            self.dont_care_set().len()
        );
    }

    /// Set every cell independently: ON with probability [`RANDOM_ON_PROBABILITY`], else OFF
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in self.cells.iter_mut() {
            *cell = CellValue::from(rng.gen_bool(RANDOM_ON_PROBABILITY));
        }
    }

    /// [`randomize_with`](Self::randomize_with) using the thread-local generator
    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::thread_rng());
    }

    /// Reset every cell to OFF
    pub fn clear(&mut self) {
        self.cells.fill(CellValue::Off);
    }

    /// ON minterms, ascending
    pub fn on_set(&self) -> Vec<Minterm> {
        self.minterms_where(CellValue::is_on)
    }

    /// Don't-care minterms, ascending
    pub fn dont_care_set(&self) -> Vec<Minterm> {
        self.minterms_where(CellValue::is_dont_care)
    }

    fn minterms_where(&self, predicate: impl Fn(CellValue) -> bool) -> Vec<Minterm> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| predicate(cell))
            .map(|(m, _)| m)
            .collect()
    }

    /// `F = m(...)` over the ON minterms, or `F = 0`
    pub fn canonical_form(&self) -> String {
        solution::canonical_form(&self.on_set())
    }
}

impl Minimizable for TruthTable {
    fn minimize_with_config(
        &self,
        config: &MinimizerConfig,
    ) -> Result<Solution, MinimizationError> {
        minimize::run(self.variable_count, &self.cells, &self.labels, config)
    }
}

/// Parse a comma-separated list, keeping in-range numbers only
fn parse_minterm_list(input: &str, cell_count: usize) -> Vec<Minterm> {
    input
        .split(',')
        .filter_map(|entry| entry.trim().parse::<Minterm>().ok())
        .filter(|&m| m < cell_count)
        .collect()
}

impl FromStr for TruthTable {
    type Err = ParseError;

    /// Parse one character per cell (`0`, `1`, `X`/`x`/`-`), minterm 0 first
    ///
    /// Whitespace is ignored; the cell count (4, 8 or 16) fixes the variable count.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .enumerate()
            .map(|(position, character)| {
                CellValue::from_char(character).ok_or(ParseError::InvalidCell {
                    character,
                    position,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let variable_count = VariableCount::from_cell_count(cells.len())
            .ok_or(ParseError::InvalidLength {
                length: cells.len(),
            })?;

        Ok(TruthTable {
            variable_count,
            cells,
            labels: VariableLabels::default_for(variable_count),
        })
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_table_is_off() {
        let table = TruthTable::new(4).unwrap();
        assert_eq!(table.cells().len(), 16);
        assert!(table.on_set().is_empty());
        assert_eq!(table.canonical_form(), "F = 0");
    }

    #[test]
    fn test_from_cells_checks_length() {
        assert_eq!(
            TruthTable::from_cells(2, vec![CellValue::On; 3]),
            Err(MinimizationError::CellsLengthMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_toggle_cycles() {
        let mut table = TruthTable::new(2).unwrap();
        assert_eq!(table.toggle(2), Some(CellValue::On));
        assert_eq!(table.toggle(2), Some(CellValue::DontCare));
        assert_eq!(table.toggle(2), Some(CellValue::Off));
        assert_eq!(table.toggle(4), None);
    }

    #[test]
    fn test_set_and_get() {
        let mut table = TruthTable::new(3).unwrap();
        assert!(table.set(5, CellValue::DontCare));
        assert!(!table.set(8, CellValue::On));
        assert_eq!(table.get(5), Some(CellValue::DontCare));
        assert_eq!(table.get(8), None);
        assert_eq!(table.dont_care_set(), vec![5]);
    }

    #[test]
    fn test_apply_lists_resets_and_ignores_garbage() {
        let mut table = TruthTable::new(3).unwrap();
        table.set(6, CellValue::On);
        table.apply_lists(" 1,2 , ,abc,-1, 8, 7 ", "2, 4");
        assert_eq!(table.on_set(), vec![1, 7]);
        assert_eq!(table.dont_care_set(), vec![2, 4]);
        assert_eq!(table.canonical_form(), "F = m(1, 7)");
    }

    #[test]
    fn test_apply_empty_lists_clears() {
        let mut table: TruthTable = "1111".parse().unwrap();
        table.apply_lists("", "");
        assert_eq!(table.to_string(), "0000");
    }

    #[test]
    fn test_randomize_is_reproducible_and_binary() {
        let mut a = TruthTable::new(4).unwrap();
        let mut b = TruthTable::new(4).unwrap();
        a.randomize_with(&mut StdRng::seed_from_u64(7));
        b.randomize_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert!(a.dont_care_set().is_empty());
    }

    #[test]
    fn test_randomize_probability() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut table = TruthTable::new(4).unwrap();
        let mut on = 0;
        for _ in 0..500 {
            table.randomize_with(&mut rng);
            on += table.on_set().len();
        }
        let ratio = on as f64 / (500.0 * 16.0);
        assert!((ratio - RANDOM_ON_PROBABILITY).abs() < 0.05, "ratio {}", ratio);
    }

    #[test]
    fn test_parse_and_display() {
        let table: TruthTable = "01X1 0000".parse().unwrap();
        assert_eq!(table.variable_count().get(), 3);
        assert_eq!(table.to_string(), "01X10000");
        assert_eq!(table.on_set(), vec![1, 3]);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "01z1".parse::<TruthTable>(),
            Err(ParseError::InvalidCell {
                character: 'z',
                position: 2
            })
        );
        assert_eq!(
            "010".parse::<TruthTable>(),
            Err(ParseError::InvalidLength { length: 3 })
        );
    }

    #[test]
    fn test_minimize_uses_custom_labels() {
        let table: TruthTable = "0011".parse().unwrap();
        let table = table.with_labels(&["x", "y"]).unwrap();
        assert_eq!(table.minimize().unwrap().expression(), "F = x");
    }

    #[test]
    fn test_minimize_does_not_change_table() {
        let table: TruthTable = "1X0110X0".parse().unwrap();
        let before = table.clone();
        let first = table.minimize().unwrap();
        let second = table.minimize().unwrap();
        assert_eq!(table, before);
        assert_eq!(first, second);
    }
}
