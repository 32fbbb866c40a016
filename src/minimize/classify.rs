//! Primality and essentiality of implicants
//!
//! An implicant is prime when it cannot be widened: freeing any one of its fixed
//! positions yields a subcube that is not valid. Checking one size up is enough,
//! since any larger valid subcube containing the implicant also contains one of
//! these single-step widenings.
//!
//! A prime implicant is essential when it is the only prime covering some ON
//! minterm. Don't-care minterms never make a prime essential.

use crate::hypercube::Minterm;
use crate::implicant::Implicant;
use log::debug;
use std::collections::HashSet;

/// A prime implicant together with its essentiality
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PrimeImplicant {
    /// The prime subcube
    pub implicant: Implicant,
    /// Whether it is the sole prime covering at least one ON minterm
    pub essential: bool,
}

/// Patterns of every valid implicant of one map
pub(crate) fn valid_patterns(implicants: &[Implicant]) -> HashSet<&[Option<bool>]> {
    implicants.iter().map(Implicant::inputs).collect()
}

/// Whether no one-step widening of `implicant` is among the `valid` patterns
pub(crate) fn is_prime(implicant: &Implicant, valid: &HashSet<&[Option<bool>]>) -> bool {
    implicant.fixed().all(|(position, _)| {
        let wider = implicant.widened(position);
        !valid.contains(wider.as_slice())
    })
}

/// The prime implicants among `implicants`, in their original order
///
/// `implicants` must be the complete set of valid implicants of one map, as
/// produced by `enumerate_implicants`.
pub(crate) fn prime_implicants(implicants: &[Implicant]) -> Vec<Implicant> {
    let valid = valid_patterns(implicants);
    implicants
        .iter()
        .filter(|implicant| is_prime(implicant, &valid))
        .cloned()
        .collect()
}

/// Prime implicants with essentiality computed against `on_set`
pub(crate) fn classify(implicants: &[Implicant], on_set: &[Minterm]) -> Vec<PrimeImplicant> {
    let primes = prime_implicants(implicants);
    let mut essential = vec![false; primes.len()];

    for &m in on_set {
        let mut covering = primes
            .iter()
            .enumerate()
            .filter(|(_, prime)| prime.contains(m))
            .map(|(i, _)| i);
        if let (Some(only), None) = (covering.next(), covering.next()) {
            essential[only] = true;
        }
    }

    debug!(
        "classify: {} implicants, {} prime, {} essential",
        implicants.len(),
        primes.len(),
        essential.iter().filter(|&&e| e).count()
    );

    primes
        .into_iter()
        .zip(essential)
        .map(|(implicant, essential)| PrimeImplicant {
            implicant,
            essential,
        })
        .collect()
}
