//! Minterms as points of the n-dimensional Boolean hypercube
//!
//! A minterm is an integer whose binary digits, most significant first, give the
//! value of each variable. Two minterms are adjacent along an axis when they
//! differ in exactly that bit; on a Karnaugh map this is what makes the edges of
//! the map wrap around, since the map's Gray-coded rows and columns place such
//! minterms next to each other.

use crate::error::MinimizationError;
use std::fmt;
use std::ops::Range;

/// Index of one input combination, in `0..2^n`
pub type Minterm = usize;

/// Number of input variables of a function, validated to be 2, 3 or 4
///
/// # Examples
///
/// ```
/// use karnaugh_logic::VariableCount;
///
/// let count = VariableCount::new(3).unwrap();
/// assert_eq!(count.cell_count(), 8);
/// assert!(VariableCount::new(5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariableCount(usize);

impl VariableCount {
    /// Smallest supported variable count
    pub const MIN: usize = 2;
    /// Largest supported variable count
    pub const MAX: usize = 4;

    /// Validate a variable count
    pub fn new(count: usize) -> Result<Self, MinimizationError> {
        if (Self::MIN..=Self::MAX).contains(&count) {
            Ok(VariableCount(count))
        } else {
            Err(MinimizationError::InvalidVariableCount { count })
        }
    }

    /// The variable count that owns exactly `cells` cells, if any
    pub fn from_cell_count(cells: usize) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .find(|&n| 1 << n == cells)
            .map(VariableCount)
    }

    /// Number of variables
    pub fn get(self) -> usize {
        self.0
    }

    /// Number of minterms, `2^n`
    pub fn cell_count(self) -> usize {
        1 << self.0
    }

    /// All minterms in ascending order
    pub fn minterms(self) -> Range<Minterm> {
        0..self.cell_count()
    }

    /// Variables laid out along the rows of the map
    pub fn row_variables(self) -> usize {
        self.0 / 2
    }

    /// Variables laid out along the columns of the map
    pub fn column_variables(self) -> usize {
        self.0 - self.row_variables()
    }

    /// `(rows, columns)` of the Karnaugh map: 2×2, 2×4 or 4×4
    pub fn map_shape(self) -> (usize, usize) {
        (1 << self.row_variables(), 1 << self.column_variables())
    }
}

impl TryFrom<usize> for VariableCount {
    type Error = MinimizationError;

    fn try_from(count: usize) -> Result<Self, Self::Error> {
        VariableCount::new(count)
    }
}

impl From<VariableCount> for usize {
    fn from(count: VariableCount) -> Self {
        count.0
    }
}

impl fmt::Display for VariableCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Value of the variable at `position` (0 = first, most significant) in `minterm`
pub fn bit(minterm: Minterm, position: usize, count: VariableCount) -> bool {
    (minterm >> (count.get() - 1 - position)) & 1 == 1
}

/// Bit vector of `minterm`, most significant bit first
///
/// ```
/// use karnaugh_logic::{hypercube, VariableCount};
///
/// let count = VariableCount::new(4).unwrap();
/// assert_eq!(hypercube::to_bits(5, count), vec![false, true, false, true]);
/// ```
pub fn to_bits(minterm: Minterm, count: VariableCount) -> Vec<bool> {
    (0..count.get())
        .map(|position| bit(minterm, position, count))
        .collect()
}

/// Compose a minterm from a bit vector, most significant bit first
pub fn from_bits(bits: &[bool]) -> Minterm {
    bits.iter().fold(0, |acc, &b| (acc << 1) | usize::from(b))
}

/// True if the minterms differ in exactly one variable
pub fn is_adjacent(a: Minterm, b: Minterm) -> bool {
    (a ^ b).count_ones() == 1
}

/// The axis (variable position) along which two minterms are adjacent
pub fn adjacent_axis(a: Minterm, b: Minterm, count: VariableCount) -> Option<usize> {
    if !is_adjacent(a, b) {
        return None;
    }
    let diff = a ^ b;
    Some(count.get() - 1 - diff.trailing_zeros() as usize)
}

fn gray(index: usize) -> usize {
    index ^ (index >> 1)
}

fn gray_inverse(mut code: usize) -> usize {
    let mut index = code;
    while code > 0 {
        code >>= 1;
        index ^= code;
    }
    index
}

/// `(row, column)` of `minterm` on the Karnaugh map
///
/// Rows are indexed by the leading variables and columns by the trailing ones,
/// both in Gray-code order (`00, 01, 11, 10`).
///
/// ```
/// use karnaugh_logic::{hypercube, VariableCount};
///
/// let count = VariableCount::new(4).unwrap();
/// // AB = 01, CD = 11
/// assert_eq!(hypercube::map_position(7, count), (1, 2));
/// ```
pub fn map_position(minterm: Minterm, count: VariableCount) -> (usize, usize) {
    let columns = count.column_variables();
    let row_code = minterm >> columns;
    let column_code = minterm & ((1 << columns) - 1);
    (gray_inverse(row_code), gray_inverse(column_code))
}

/// Minterm shown at `(row, column)` of the Karnaugh map
pub fn minterm_at(row: usize, column: usize, count: VariableCount) -> Option<Minterm> {
    let (rows, columns) = count.map_shape();
    if row >= rows || column >= columns {
        return None;
    }
    Some((gray(row) << count.column_variables()) | gray(column))
}
