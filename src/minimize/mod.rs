//! Karnaugh-map minimization
//!
//! Minimization is a pure function of a variable count and a snapshot of the
//! cells. Each request runs the whole pipeline from scratch:
//!
//! 1. every valid subcube (no OFF cell inside) is enumerated
//! 2. the prime implicants are kept and the essential ones marked
//! 3. the essentials are taken and what they leave uncovered is covered
//!    by a smallest set of the other primes
//! 4. any group the others make unnecessary is dropped
//! 5. the selected groups are rendered into a [`Solution`]
//!
//! The stages assume minterms below `2^n` for a valid variable count, which
//! the entry points check before running them.

mod classify;
mod enumerate;
mod redundancy;
mod select;

#[cfg(test)]
mod tests;

pub use select::MAX_EXHAUSTIVE_CANDIDATES;

pub(crate) use classify::{classify, is_prime, valid_patterns, PrimeImplicant};
pub(crate) use enumerate::enumerate_implicants;
pub(crate) use redundancy::remove_redundant;
pub(crate) use select::select_cover;

use crate::cell::CellValue;
use crate::error::MinimizationError;
use crate::hypercube::{Minterm, VariableCount};
use crate::labels::VariableLabels;
use crate::solution::{Group, Solution};
use crate::MinimizerConfig;
use log::debug;

/// Set of minterms as a bitmask; bit `m` stands for minterm `m`
///
/// Four variables give at most 16 minterms, so a `u32` always suffices.
pub(crate) type MintermMask = u32;

pub(crate) fn mask_of<'a>(minterms: impl IntoIterator<Item = &'a Minterm>) -> MintermMask {
    minterms.into_iter().fold(0, |acc, &m| acc | (1 << m))
}

/// Types whose Boolean function can be minimized into a [`Solution`]
///
/// # Examples
///
/// ```
/// use karnaugh_logic::{Minimizable, TruthTable};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut table = TruthTable::new(3)?;
/// table.apply_lists("0, 2, 4, 6", "");
///
/// let solution = table.minimize()?;
/// assert_eq!(solution.expression(), "F = C'");
/// # Ok(())
/// # }
/// ```
pub trait Minimizable {
    /// Minimize with the default configuration
    ///
    /// Default implementation calls `minimize_with_config` with default config.
    fn minimize(&self) -> Result<Solution, MinimizationError> {
        let config = MinimizerConfig::default();
        self.minimize_with_config(&config)
    }

    /// Minimize with a custom configuration
    ///
    /// This is the method implementations must provide.
    fn minimize_with_config(&self, config: &MinimizerConfig)
        -> Result<Solution, MinimizationError>;
}

/// Minimize the function given by `cells` over `variable_count` variables
///
/// `cells[m]` is the output for minterm `m`, whose binary digits (most
/// significant first) are the values of `A`, `B`, `C`, `D`.
///
/// # Errors
///
/// - [`MinimizationError::InvalidVariableCount`] unless `variable_count` is 2, 3 or 4
/// - [`MinimizationError::CellsLengthMismatch`] unless `cells.len() == 2^variable_count`
///
/// # Examples
///
/// ```
/// use karnaugh_logic::{minimize, CellValue};
///
/// # fn main() -> Result<(), karnaugh_logic::MinimizationError> {
/// let mut cells = vec![CellValue::Off; 16];
/// for m in [5, 7, 13, 15] {
///     cells[m] = CellValue::On;
/// }
/// let solution = minimize(4, &cells)?;
/// assert_eq!(solution.expression(), "F = BD");
/// # Ok(())
/// # }
/// ```
pub fn minimize(variable_count: usize, cells: &[CellValue]) -> Result<Solution, MinimizationError> {
    minimize_with_config(variable_count, cells, &MinimizerConfig::default())
}

/// [`minimize`] with a custom configuration
pub fn minimize_with_config(
    variable_count: usize,
    cells: &[CellValue],
    config: &MinimizerConfig,
) -> Result<Solution, MinimizationError> {
    let count = VariableCount::new(variable_count)?;
    let labels = VariableLabels::default_for(count);
    run(count, cells, &labels, config)
}

pub(crate) fn run(
    count: VariableCount,
    cells: &[CellValue],
    labels: &VariableLabels,
    config: &MinimizerConfig,
) -> Result<Solution, MinimizationError> {
    if cells.len() != count.cell_count() {
        return Err(MinimizationError::CellsLengthMismatch {
            expected: count.cell_count(),
            actual: cells.len(),
        });
    }

    let on_set: Vec<Minterm> = count.minterms().filter(|&m| cells[m].is_on()).collect();
    debug!(
        "minimize(n = {}): {} on, {} don't-care",
        count,
        on_set.len(),
        cells.iter().filter(|cell| cell.is_dont_care()).count()
    );

    if on_set.is_empty() {
        return Ok(Solution::new(count, labels.clone(), on_set, Vec::new()));
    }

    let implicants = enumerate_implicants(count, cells);
    let primes = classify(&implicants, &on_set);
    let mut selected = select_cover(&primes, &on_set, config)?;
    if config.remove_redundant {
        selected = remove_redundant(selected, &on_set);
    }

    let valid = valid_patterns(&implicants);
    let groups: Vec<Group> = selected
        .into_iter()
        .map(|prime| {
            let is_prime = is_prime(&prime.implicant, &valid);
            Group::new(prime.implicant, labels, is_prime, prime.essential)
        })
        .collect();
    let solution = Solution::new(count, labels.clone(), on_set, groups);
    debug!("minimize: {}", solution);
    Ok(solution)
}
