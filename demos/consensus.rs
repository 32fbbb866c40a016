//! Example: the consensus term BD is left out without any special casing
//!
//! F = m(3, 4, 5, 7, 11, 12, 13, 15) has three prime implicants, BC', BD and CD.
//! BC' and CD are essential and together already cover every cell of BD.

use karnaugh_logic::{Implicant, Minimizable, TruthTable};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut table = TruthTable::new(4)?;
    table.apply_lists("3, 4, 5, 7, 11, 12, 13, 15", "");

    let solution = table.minimize()?;
    println!("Selected groups:");
    for group in solution.groups() {
        println!(
            "  {:<4} {:?}{}",
            group.term(),
            group.minterms(),
            if group.is_essential() { "  essential" } else { "" }
        );
    }

    let bd = Implicant::new(&[None, Some(true), None, Some(true)])?;
    let covered = bd.minterms().iter().all(|&m| solution.covers(m));
    println!("\n{} {:?} covered by the essentials: {}", bd, bd.minterms(), covered);

    println!("\n{}", solution);
    assert_eq!(solution.expression(), "F = BC' + CD");

    Ok(())
}
