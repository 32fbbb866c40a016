//! Tri-state cell values of a truth table

use std::fmt;

/// Output value of one truth-table row (one Karnaugh-map cell)
///
/// - `Off` - the function is 0
/// - `On` - the function is 1 and the minterm must be covered
/// - `DontCare` - unconstrained; may be grouped but never has to be covered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellValue {
    /// Function is 0
    #[default]
    Off,
    /// Function is 1
    On,
    /// Output is unconstrained
    DontCare,
}

impl CellValue {
    /// The value a click on the cell moves to: Off → On → DontCare → Off
    ///
    /// ```
    /// use karnaugh_logic::CellValue;
    ///
    /// assert_eq!(CellValue::Off.next(), CellValue::On);
    /// assert_eq!(CellValue::On.next(), CellValue::DontCare);
    /// assert_eq!(CellValue::DontCare.next(), CellValue::Off);
    /// ```
    pub fn next(self) -> Self {
        match self {
            CellValue::Off => CellValue::On,
            CellValue::On => CellValue::DontCare,
            CellValue::DontCare => CellValue::Off,
        }
    }

    /// True for `On`
    pub fn is_on(self) -> bool {
        self == CellValue::On
    }

    /// True for `DontCare`
    pub fn is_dont_care(self) -> bool {
        self == CellValue::DontCare
    }

    /// True for `Off`
    pub fn is_off(self) -> bool {
        self == CellValue::Off
    }

    /// Whether the cell may lie inside a group (`On` or `DontCare`)
    pub fn is_groupable(self) -> bool {
        !self.is_off()
    }

    /// Parse the single-character notation: `0`, `1`, and `X`, `x` or `-` for don't-care
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(CellValue::Off),
            '1' => Some(CellValue::On),
            'X' | 'x' | '-' => Some(CellValue::DontCare),
            _ => None,
        }
    }

    /// Single-character notation
    pub fn as_char(self) -> char {
        match self {
            CellValue::Off => '0',
            CellValue::On => '1',
            CellValue::DontCare => 'X',
        }
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        if value {
            CellValue::On
        } else {
            CellValue::Off
        }
    }
}

impl From<Option<bool>> for CellValue {
    /// `None` maps to `DontCare`, matching the `Option<bool>` cube notation
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(v) => CellValue::from(v),
            None => CellValue::DontCare,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
