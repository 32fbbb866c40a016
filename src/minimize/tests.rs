//! Tests for the minimization pipeline

use super::*;
use crate::cell::CellValue::{DontCare, Off, On};
use test_log::test;

fn cells(n: usize, on: &[Minterm], dont_care: &[Minterm]) -> Vec<CellValue> {
    let mut cells = vec![Off; 1 << n];
    for &m in on {
        cells[m] = On;
    }
    for &m in dont_care {
        cells[m] = DontCare;
    }
    cells
}

fn terms(solution: &Solution) -> Vec<&str> {
    solution.terms().collect()
}

#[test]
fn test_rejects_invalid_variable_count() {
    assert_eq!(
        minimize(5, &[Off; 32]),
        Err(MinimizationError::InvalidVariableCount { count: 5 })
    );
    assert_eq!(
        minimize(1, &[Off; 2]),
        Err(MinimizationError::InvalidVariableCount { count: 1 })
    );
}

#[test]
fn test_rejects_wrong_cell_count() {
    assert_eq!(
        minimize(3, &[Off; 4]),
        Err(MinimizationError::CellsLengthMismatch {
            expected: 8,
            actual: 4
        })
    );
}

#[test]
fn test_empty_on_set() {
    let solution = minimize(2, &cells(2, &[], &[])).unwrap();
    assert!(solution.is_empty());
    assert_eq!(solution.expression(), "F = 0");
}

#[test]
fn test_only_dont_cares_is_zero() {
    let solution = minimize(3, &cells(3, &[], &[0, 1, 2, 3, 4, 5, 6, 7])).unwrap();
    assert_eq!(solution.expression(), "F = 0");
}

#[test]
fn test_dont_cares_enlarge_groups() {
    // On = {1, 3}, don't-care = {5, 7}: C alone
    let solution = minimize(3, &cells(3, &[1, 3], &[5, 7])).unwrap();
    assert_eq!(solution.expression(), "F = C");
}

#[test]
fn test_dont_cares_complete_whole_map() {
    let solution = minimize(2, &[On, DontCare, DontCare, On]).unwrap();
    assert_eq!(solution.expression(), "F = 1");
}

#[test]
fn test_consensus_term_left_out() {
    // The consensus term BD is covered by the two essentials
    let solution = minimize(4, &cells(4, &[3, 4, 5, 7, 11, 12, 13, 15], &[])).unwrap();
    assert_eq!(terms(&solution), vec!["BC'", "CD"]);
    assert!(solution.groups().iter().all(|g| g.is_essential()));
}

#[test]
fn test_xor_cannot_be_grouped() {
    let solution = minimize(2, &[Off, On, On, Off]).unwrap();
    assert_eq!(solution.expression(), "F = A'B + AB'");
    assert_eq!(solution.literal_count(), 4);
}

#[test]
fn test_cyclic_function_uses_three_terms() {
    let solution = minimize(3, &cells(3, &[0, 1, 3, 4, 6, 7], &[])).unwrap();
    assert_eq!(solution.term_count(), 3);
    assert!(solution.groups().iter().all(|g| g.size() == 2 && !g.is_essential()));
    for m in [0, 1, 3, 4, 6, 7] {
        assert!(solution.covers(m));
    }
}

#[test]
fn test_essentials_come_first() {
    // A'B'C' and BCD are essential; 5 is left for the search
    let solution = minimize(4, &cells(4, &[0, 1, 5, 7, 15], &[])).unwrap();
    let first_non_essential = solution
        .groups()
        .iter()
        .position(|g| !g.is_essential())
        .unwrap_or(solution.groups().len());
    assert!(solution.groups()[first_non_essential..]
        .iter()
        .all(|g| !g.is_essential()));
    for &m in solution.on_set() {
        assert!(solution.covers(m));
    }
}

#[test]
fn test_greedy_configuration_still_covers() {
    let on = [0, 1, 3, 4, 6, 7];
    let config = MinimizerConfig {
        exhaustive_limit: 0,
        ..MinimizerConfig::default()
    };
    let greedy = minimize_with_config(3, &cells(3, &on, &[]), &config).unwrap();
    let exact = minimize(3, &cells(3, &on, &[])).unwrap();

    assert_eq!(exact.term_count(), 3);
    assert!(greedy.term_count() >= exact.term_count());
    for m in on {
        assert!(greedy.covers(m));
    }
    for skip in 0..greedy.groups().len() {
        let still_covered = on.iter().all(|&m| {
            greedy
                .groups()
                .iter()
                .enumerate()
                .any(|(i, g)| i != skip && g.implicant().contains(m))
        });
        assert!(!still_covered, "group {} is redundant", skip);
    }
}

#[test]
fn test_keep_redundant_configuration() {
    let on = [0, 1, 3, 4, 6, 7];
    let config = MinimizerConfig {
        exhaustive_limit: 0,
        remove_redundant: false,
    };
    let unfiltered = minimize_with_config(3, &cells(3, &on, &[]), &config).unwrap();
    let filtered = minimize_with_config(
        3,
        &cells(3, &on, &[]),
        &MinimizerConfig {
            exhaustive_limit: 0,
            ..MinimizerConfig::default()
        },
    )
    .unwrap();
    assert!(unfiltered.term_count() >= filtered.term_count());
    for m in on {
        assert!(unfiltered.covers(m));
    }
}

#[test]
fn test_input_is_not_mutated() {
    let input = cells(4, &[1, 2, 3], &[6]);
    let before = input.clone();
    let _ = minimize(4, &input).unwrap();
    assert_eq!(input, before);
}

#[test]
fn test_out_of_range_minterms_are_never_covered() {
    let solution = minimize(4, &[On; 16]).unwrap();
    assert_eq!(solution.expression(), "F = 1");
    for m in [16, 32, 41, 64, usize::MAX] {
        assert!(!solution.covers(m), "minterm {}", m);
        assert!(!solution.evaluate(m));
    }
}

#[test]
fn test_mask_of_spans_every_four_variable_minterm() {
    let all: Vec<Minterm> = (0..16).collect();
    assert_eq!(mask_of(&all), 0xFFFF);
    assert_eq!(mask_of(&[15]), 1 << 15);
}

#[test]
fn test_selected_groups_are_prime() {
    for on in [&[0, 1, 3, 4, 6, 7][..], &[3, 4, 5, 7, 11, 12, 13, 15], &[0, 2, 8, 10]] {
        let n = if on.iter().all(|&m| m < 8) { 3 } else { 4 };
        let solution = minimize(n, &cells(n, on, &[])).unwrap();
        assert!(solution.groups().iter().all(|g| g.is_prime()));
    }
}
