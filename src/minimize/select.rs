//! Cover selection
//!
//! Essential primes are always taken. The ON minterms they leave uncovered are
//! then covered by a smallest subset of the remaining primes, found by trying
//! every subset when there are few candidates and by a greedy pass otherwise.

use super::classify::PrimeImplicant;
use super::{mask_of, MintermMask};
use crate::error::MinimizationError;
use crate::hypercube::Minterm;
use crate::MinimizerConfig;
use log::debug;

/// Largest candidate count ever searched exhaustively, whatever the configuration
pub const MAX_EXHAUSTIVE_CANDIDATES: usize = 20;

/// Choose primes covering every minterm of `on_set`
///
/// Returns the essential primes first (in classification order), followed by the
/// primes chosen for the remaining minterms. Don't-care minterms are never
/// required to be covered.
///
/// # Errors
///
/// [`MinimizationError::UncoveredMinterm`] if some ON minterm lies in no prime,
/// which means `primes` was not derived from the same cells as `on_set`.
pub(crate) fn select_cover(
    primes: &[PrimeImplicant],
    on_set: &[Minterm],
    config: &MinimizerConfig,
) -> Result<Vec<PrimeImplicant>, MinimizationError> {
    let target = mask_of(on_set);

    let mut selected: Vec<PrimeImplicant> = primes.iter().filter(|p| p.essential).cloned().collect();
    let covered = selected
        .iter()
        .fold(0, |acc, p| acc | mask_of(p.implicant.minterms()));
    let remaining = target & !covered;

    debug!(
        "select_cover: {} essential primes, {} minterms left",
        selected.len(),
        remaining.count_ones()
    );
    if remaining == 0 {
        return Ok(selected);
    }

    let candidates: Vec<(&PrimeImplicant, MintermMask)> = primes
        .iter()
        .filter(|p| !p.essential)
        .map(|p| (p, mask_of(p.implicant.minterms()) & remaining))
        .filter(|&(_, mask)| mask != 0)
        .collect();

    let reachable = candidates.iter().fold(0, |acc, &(_, mask)| acc | mask);
    if reachable != remaining {
        return Err(uncovered(remaining & !reachable));
    }

    let limit = config.exhaustive_limit.min(MAX_EXHAUSTIVE_CANDIDATES);
    let chosen = if candidates.len() <= limit {
        debug!("select_cover: exhaustive search over {} candidates", candidates.len());
        let masks: Vec<MintermMask> = candidates.iter().map(|&(_, mask)| mask).collect();
        exhaustive_cover(&masks, remaining).ok_or_else(|| uncovered(remaining))?
    } else {
        debug!("select_cover: greedy pass over {} candidates", candidates.len());
        greedy_cover(&candidates, remaining)?
    };

    selected.extend(chosen.into_iter().map(|i| candidates[i].0.clone()));
    Ok(selected)
}

fn uncovered(mask: MintermMask) -> MinimizationError {
    MinimizationError::UncoveredMinterm {
        minterm: mask.trailing_zeros() as Minterm,
    }
}

/// Smallest subset of `masks` whose union contains `remaining`
///
/// Subsets are visited in ascending bitmask order and only a strictly smaller
/// subset replaces the current best.
fn exhaustive_cover(masks: &[MintermMask], remaining: MintermMask) -> Option<Vec<usize>> {
    let mut best: Option<u32> = None;

    for subset in 1u32..(1u32 << masks.len()) {
        if best.is_some_and(|b| subset.count_ones() >= b.count_ones()) {
            continue;
        }
        let union = masks
            .iter()
            .enumerate()
            .filter(|&(i, _)| (subset >> i) & 1 == 1)
            .fold(0, |acc, (_, &mask)| acc | mask);
        if union & remaining == remaining {
            best = Some(subset);
        }
    }

    best.map(|subset| (0..masks.len()).filter(|&i| (subset >> i) & 1 == 1).collect())
}

/// Repeatedly take the candidate covering the most uncovered minterms
///
/// Ties go to the larger implicant, then to the earlier candidate.
fn greedy_cover(
    candidates: &[(&PrimeImplicant, MintermMask)],
    remaining: MintermMask,
) -> Result<Vec<usize>, MinimizationError> {
    let mut uncovered_mask = remaining;
    let mut used = vec![false; candidates.len()];
    let mut chosen = Vec::new();

    while uncovered_mask != 0 {
        let mut best: Option<(usize, u32, usize)> = None;
        for (i, &(prime, mask)) in candidates.iter().enumerate() {
            if used[i] {
                continue;
            }
            let gain = (mask & uncovered_mask).count_ones();
            if gain == 0 {
                continue;
            }
            let size = prime.implicant.size();
            let better = match best {
                None => true,
                Some((_, best_gain, best_size)) => {
                    gain > best_gain || (gain == best_gain && size > best_size)
                }
            };
            if better {
                best = Some((i, gain, size));
            }
        }

        let (i, _, _) = best.ok_or_else(|| uncovered(uncovered_mask))?;
        used[i] = true;
        chosen.push(i);
        uncovered_mask &= !candidates[i].1;
    }

    Ok(chosen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::implicant::Implicant;

    fn prime(inputs: &[Option<bool>], essential: bool) -> PrimeImplicant {
        PrimeImplicant {
            implicant: Implicant::new(inputs).unwrap(),
            essential,
        }
    }

    #[test]
    fn test_exhaustive_cover_finds_minimum() {
        let masks = [0b0111, 0b1001, 0b0110, 0b1100];
        let cover = exhaustive_cover(&masks, 0b1111).unwrap();
        assert_eq!(cover.len(), 2);
        let union = cover.iter().fold(0, |acc, &i| acc | masks[i]);
        assert_eq!(union, 0b1111);
    }

    #[test]
    fn test_exhaustive_cover_without_solution() {
        assert_eq!(exhaustive_cover(&[0b01], 0b11), None);
    }

    #[test]
    fn test_greedy_prefers_gain_then_size() {
        let small = prime(&[Some(false), Some(false), Some(false), None], false);
        let big = prime(&[Some(false), None, Some(false), None], false);
        // Same gain on the target, the larger implicant wins
        let candidates = vec![(&small, 0b11), (&big, 0b11)];
        assert_eq!(greedy_cover(&candidates, 0b11).unwrap(), vec![1]);
    }

    #[test]
    fn test_essentials_alone_when_nothing_remains() {
        let a_bar = prime(&[Some(false), None], true);
        let b = prime(&[None, Some(true)], false);
        let config = MinimizerConfig::default();
        let selected = select_cover(&[a_bar.clone(), b], &[0, 1], &config).unwrap();
        assert_eq!(selected, vec![a_bar]);
    }

    #[test]
    fn test_missing_candidate_is_reported() {
        let a_bar = prime(&[Some(false), None], true);
        let config = MinimizerConfig::default();
        assert_eq!(
            select_cover(&[a_bar], &[0, 3], &config),
            Err(MinimizationError::UncoveredMinterm { minterm: 3 })
        );
    }

    #[test]
    fn test_greedy_used_above_limit() {
        // Cyclic 3-variable function, six candidates, no essentials
        let primes: Vec<PrimeImplicant> = [
            [Some(false), Some(false), None],
            [None, Some(false), Some(false)],
            [Some(false), None, Some(true)],
            [None, Some(true), Some(true)],
            [Some(true), None, Some(false)],
            [Some(true), Some(true), None],
        ]
        .iter()
        .map(|inputs| prime(inputs, false))
        .collect();
        let on = [0, 1, 3, 4, 6, 7];

        let exhaustive = select_cover(&primes, &on, &MinimizerConfig::default()).unwrap();
        assert_eq!(exhaustive.len(), 3);

        let config = MinimizerConfig {
            exhaustive_limit: 0,
            ..MinimizerConfig::default()
        };
        let greedy = select_cover(&primes, &on, &config).unwrap();
        let covered = greedy
            .iter()
            .fold(0, |acc, p| acc | mask_of(p.implicant.minterms()));
        assert_eq!(covered & mask_of(&on), mask_of(&on));
    }
}
