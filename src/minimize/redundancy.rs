//! Removal of redundant groups
//!
//! A selected group is redundant when every ON minterm it covers is also covered
//! by the other groups still selected. Groups are examined once, in order, and a
//! dropped group no longer counts towards the coverage of later checks. A group
//! kept in this pass stays irredundant, since later drops only shrink what the
//! others cover.

use super::classify::PrimeImplicant;
use super::{mask_of, MintermMask};
use crate::hypercube::Minterm;
use log::trace;

/// Drop every group whose ON-minterm coverage is provided by the others
pub(crate) fn remove_redundant(selected: Vec<PrimeImplicant>, on_set: &[Minterm]) -> Vec<PrimeImplicant> {
    let target = mask_of(on_set);
    let masks: Vec<MintermMask> = selected
        .iter()
        .map(|p| mask_of(p.implicant.minterms()) & target)
        .collect();
    let mut keep = vec![true; selected.len()];

    for i in 0..selected.len() {
        let others = (0..selected.len())
            .filter(|&j| j != i && keep[j])
            .fold(0, |acc, j| acc | masks[j]);
        let unique = masks[i] & !others;
        if unique == 0 {
            trace!("remove_redundant: dropping {}", selected[i].implicant);
            keep[i] = false;
        } else {
            trace!(
                "remove_redundant: keeping {} ({} unique minterms)",
                selected[i].implicant,
                unique.count_ones()
            );
        }
    }

    selected
        .into_iter()
        .zip(keep)
        .filter_map(|(prime, kept)| kept.then_some(prime))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::implicant::Implicant;

    fn prime(inputs: &[Option<bool>]) -> PrimeImplicant {
        PrimeImplicant {
            implicant: Implicant::new(inputs).unwrap(),
            essential: false,
        }
    }

    #[test]
    fn test_consensus_term_is_dropped() {
        let on = [3, 4, 5, 7, 11, 12, 13, 15];
        let bc_bar = prime(&[None, Some(true), Some(false), None]);
        let bd = prime(&[None, Some(true), None, Some(true)]);
        let cd = prime(&[None, None, Some(true), Some(true)]);

        let kept = remove_redundant(vec![bd, bc_bar.clone(), cd.clone()], &on);
        assert_eq!(kept, vec![bc_bar, cd]);
    }

    #[test]
    fn test_duplicates_keep_one() {
        let a = prime(&[Some(true), None]);
        let kept = remove_redundant(vec![a.clone(), a.clone()], &[2, 3]);
        assert_eq!(kept, vec![a]);
    }

    #[test]
    fn test_dont_care_only_group_is_dropped() {
        // A covers no ON minterm
        let a_bar_b_bar = prime(&[Some(false), Some(false)]);
        let a = prime(&[Some(true), None]);
        let kept = remove_redundant(vec![a_bar_b_bar.clone(), a], &[0]);
        assert_eq!(kept, vec![a_bar_b_bar]);
    }

    #[test]
    fn test_irredundant_cover_is_untouched() {
        let a_bar = prime(&[Some(false), None]);
        let a = prime(&[Some(true), None]);
        let kept = remove_redundant(vec![a_bar.clone(), a.clone()], &[0, 1, 2, 3]);
        assert_eq!(kept, vec![a_bar, a]);
    }
}
