//! Error types for the Karnaugh-map minimizer
//!
//! Each concern has its own error enum so callers can match on exactly the
//! failures an operation can produce. [`KarnaughError`] wraps all of them for
//! code (such as the command-line front end) that does not care which stage failed.

use crate::hypercube::Minterm;
use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors raised by a minimization request
///
/// Malformed input is rejected before any computation. An empty ON-set is not an
/// error; it produces the constant solution `F = 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MinimizationError {
    /// The variable count is outside the supported range of 2 to 4
    InvalidVariableCount {
        /// The rejected count
        count: usize,
    },

    /// The number of cells does not equal `2^variable_count`
    CellsLengthMismatch {
        /// The number of cells the variable count requires
        expected: usize,
        /// The number of cells that were supplied
        actual: usize,
    },

    /// An ON minterm was left without a covering prime implicant
    ///
    /// Every ON minterm is itself a valid single-cell implicant, so this can only
    /// happen if implicant enumeration and cover selection disagree. It is reported
    /// instead of silently producing an incomplete expression.
    UncoveredMinterm {
        /// The minterm that no candidate covers
        minterm: Minterm,
    },
}

impl fmt::Display for MinimizationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinimizationError::InvalidVariableCount { count } => write!(
                f,
                "Invalid variable count {}. Expected 2, 3 or 4 variables.",
                count
            ),
            MinimizationError::CellsLengthMismatch { expected, actual } => write!(
                f,
                "Expected {} cells for this variable count, got {}",
                expected, actual
            ),
            MinimizationError::UncoveredMinterm { minterm } => write!(
                f,
                "Internal error: minterm {} is not covered by any prime implicant",
                minterm
            ),
        }
    }
}

impl std::error::Error for MinimizationError {}

impl From<MinimizationError> for io::Error {
    fn from(err: MinimizationError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

/// Errors raised when parsing the textual cell notation (`0`, `1`, `X`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A character that is not a cell value
    InvalidCell {
        /// The offending character
        character: char,
        /// Its position among the non-whitespace characters of the input
        position: usize,
    },

    /// The number of cells does not correspond to 2, 3 or 4 variables
    InvalidLength {
        /// The number of cells found
        length: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidCell {
                character,
                position,
            } => write!(
                f,
                "Invalid cell {:?} at position {}. Expected 0, 1, X or -.",
                character, position
            ),
            ParseError::InvalidLength { length } => write!(
                f,
                "Truth table has {} cells; expected 4, 8 or 16",
                length
            ),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<ParseError> for io::Error {
    fn from(err: ParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Errors raised when assigning custom variable names
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelError {
    /// The number of labels differs from the variable count
    CountMismatch {
        /// The variable count
        expected: usize,
        /// The number of labels supplied
        actual: usize,
    },
    /// The same label was given to two variables
    Duplicate {
        /// The repeated label
        label: Arc<str>,
    },
    /// A label is empty or contains whitespace
    Malformed {
        /// Position of the offending label
        position: usize,
    },
}

impl fmt::Display for LabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelError::CountMismatch { expected, actual } => write!(
                f,
                "Expected {} variable labels, got {}",
                expected, actual
            ),
            LabelError::Duplicate { label } => {
                write!(f, "Variable label '{}' is used more than once", label)
            }
            LabelError::Malformed { position } => write!(
                f,
                "Variable label at position {} is empty or contains whitespace",
                position
            ),
        }
    }
}

impl std::error::Error for LabelError {}

/// Any error the crate can produce
#[derive(Debug)]
pub enum KarnaughError {
    /// Minimization failed
    Minimization(MinimizationError),
    /// Cell notation could not be parsed
    Parse(ParseError),
    /// Variable labels were rejected
    Label(LabelError),
    /// IO error wrapper
    Io(io::Error),
}

impl fmt::Display for KarnaughError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KarnaughError::Minimization(err) => write!(f, "{}", err),
            KarnaughError::Parse(err) => write!(f, "{}", err),
            KarnaughError::Label(err) => write!(f, "{}", err),
            KarnaughError::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for KarnaughError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KarnaughError::Minimization(err) => Some(err),
            KarnaughError::Parse(err) => Some(err),
            KarnaughError::Label(err) => Some(err),
            KarnaughError::Io(err) => Some(err),
        }
    }
}

impl From<MinimizationError> for KarnaughError {
    fn from(err: MinimizationError) -> Self {
        KarnaughError::Minimization(err)
    }
}

impl From<ParseError> for KarnaughError {
    fn from(err: ParseError) -> Self {
        KarnaughError::Parse(err)
    }
}

impl From<LabelError> for KarnaughError {
    fn from(err: LabelError) -> Self {
        KarnaughError::Label(err)
    }
}

impl From<io::Error> for KarnaughError {
    fn from(err: io::Error) -> Self {
        KarnaughError::Io(err)
    }
}

impl From<KarnaughError> for io::Error {
    fn from(err: KarnaughError) -> Self {
        match err {
            KarnaughError::Io(io_err) => io_err,
            other => io::Error::other(other),
        }
    }
}
