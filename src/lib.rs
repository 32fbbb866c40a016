//! # Karnaugh Logic
//!
//! Minimization of Boolean functions of two to four variables into a minimal
//! sum-of-products (SOP) expression, the way one groups cells on a Karnaugh map.
//!
//! ## Overview
//!
//! A function is given as a truth table: one [`CellValue`] per minterm, each
//! `Off`, `On` or `DontCare`. The minimizer groups ON cells (helped by don't-cares)
//! into rectangular, wrap-around blocks of 1, 2, 4, 8 or 16 cells and picks a
//! smallest set of blocks covering every ON cell:
//!
//! - every valid block is enumerated as a subcube of the Boolean hypercube
//! - blocks not contained in a larger valid block are the prime implicants
//! - primes that alone cover some ON cell are essential and always selected
//! - the remaining ON cells are covered by a minimal subset of the other primes
//! - any block the others make unnecessary is dropped
//!
//! ## Two Ways to Use the Minimizer
//!
//! ### 1. Cell Slices
//!
//! ```
//! use karnaugh_logic::{minimize, CellValue};
//!
//! # fn main() -> Result<(), karnaugh_logic::MinimizationError> {
//! // F(A, B, C, D) = m(1, 3, 5, 7, 9, 11, 13, 15)
//! let cells: Vec<CellValue> = (0..16).map(|m| CellValue::from(m % 2 == 1)).collect();
//!
//! let solution = minimize(4, &cells)?;
//! assert_eq!(solution.expression(), "F = D");
//! assert_eq!(solution.canonical_form(), "F = m(1, 3, 5, 7, 9, 11, 13, 15)");
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. Truth Tables
//!
//! [`TruthTable`] owns the cells and offers the editing operations a front end
//! needs: toggling one cell, applying minterm and don't-care lists, randomizing
//! and clearing.
//!
//! ```
//! use karnaugh_logic::{Minimizable, TruthTable};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut table = TruthTable::new(4)?;
//! table.apply_lists("3, 4, 5, 7, 11, 12, 13, 15", "");
//!
//! let solution = table.minimize()?;
//! assert_eq!(solution.expression(), "F = BC' + CD");
//!
//! for group in solution.groups() {
//!     println!("{:>6}  size {:>2}  {:?}", group.term(), group.size(), group.minterms());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! [`MinimizerConfig`] bounds the exhaustive cover search and can switch off the
//! final redundancy pass:
//!
//! ```
//! use karnaugh_logic::{Minimizable, MinimizerConfig, TruthTable};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let table: TruthTable = "0110".parse()?;
//! let config = MinimizerConfig {
//!     exhaustive_limit: 4,
//!     ..Default::default()
//! };
//! assert_eq!(table.minimize_with_config(&config)?.expression(), "F = A'B + AB'");
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging
//!
//! Pipeline stages report through the [`log`] facade at `debug` level, and the
//! redundancy pass at `trace` level. The library never installs a logger.
//!
//! ## Thread Safety
//!
//! Minimization is a pure function of its inputs and keeps no global state, so
//! any number of threads may minimize concurrently.

// Public modules
pub mod cell;
pub mod error;
pub mod hypercube;
pub mod implicant;
pub mod labels;
pub mod minimize;
pub mod solution;
pub mod truth_table;

// Re-export high-level public API
pub use cell::CellValue;
pub use error::{KarnaughError, LabelError, MinimizationError, ParseError};
pub use hypercube::{Minterm, VariableCount};
pub use implicant::Implicant;
pub use labels::VariableLabels;
pub use minimize::{minimize, minimize_with_config, Minimizable};
pub use solution::{Group, OptimizationLevel, Solution};
pub use truth_table::TruthTable;

/// Configuration for the minimizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimizerConfig {
    /// Largest number of remaining candidate primes searched exhaustively
    ///
    /// Above it a greedy pass is used. Values beyond
    /// [`MAX_EXHAUSTIVE_CANDIDATES`](minimize::MAX_EXHAUSTIVE_CANDIDATES) are capped.
    pub exhaustive_limit: usize,
    /// Drop selected groups made unnecessary by the others
    pub remove_redundant: bool,
}

impl Default for MinimizerConfig {
    fn default() -> Self {
        MinimizerConfig {
            exhaustive_limit: 8,
            remove_redundant: true,
        }
    }
}
