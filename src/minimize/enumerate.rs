//! Exhaustive enumeration of valid subcubes
//!
//! Every assignment of {Fixed-0, Fixed-1, Free} to the `n` variable positions is
//! a subcube of the hypercube; there are `3^n` of them (81 for four variables).
//! A subcube is a valid implicant when none of its cells is OFF.

use crate::cell::CellValue;
use crate::hypercube::VariableCount;
use crate::implicant::Implicant;
use log::debug;

/// All valid implicants of the map, largest first
///
/// Within one size the order is the enumeration order of the `3^n` patterns, so
/// the result is deterministic for a given input. An ON ∪ don't-care set that is
/// empty yields no implicants; one that fills the map yields every subcube,
/// starting with the whole-map implicant.
///
/// `cells` must hold `2^n` values; cells past its end are treated as OFF.
pub(crate) fn enumerate_implicants(count: VariableCount, cells: &[CellValue]) -> Vec<Implicant> {
    let n = count.get();
    let total = 3usize.pow(n as u32);

    let mut implicants: Vec<Implicant> = (0..total)
        .map(|code| Implicant::from_pattern(count, &pattern(code, n)))
        .filter(|implicant| {
            implicant
                .minterms()
                .iter()
                .all(|&m| cells.get(m).is_some_and(|cell| cell.is_groupable()))
        })
        .collect();

    // Stable: equal sizes keep enumeration order
    implicants.sort_by(|a, b| b.size().cmp(&a.size()));

    debug!(
        "enumerate_implicants(n = {}): {} of {} subcubes valid",
        n,
        implicants.len(),
        total
    );
    implicants
}

/// Decode a base-3 pattern code, most significant digit first
fn pattern(mut code: usize, n: usize) -> Vec<Option<bool>> {
    let mut inputs = vec![None; n];
    for input in inputs.iter_mut().rev() {
        *input = match code % 3 {
            0 => Some(false),
            1 => Some(true),
            _ => None,
        };
        code /= 3;
    }
    inputs
}
