//! Example: minimizing a function given as minterm and don't-care lists

use karnaugh_logic::{hypercube, Minimizable, TruthTable};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Karnaugh Map Minimization ===\n");

    let mut table = TruthTable::new(4)?;
    table.apply_lists("0, 1, 2, 5, 8, 9, 10", "7, 13");

    println!("Cells:     {}", table);
    println!("Canonical: {}", table.canonical_form());

    let solution = table.minimize()?;
    println!("Minimized: {}\n", solution);

    println!("Groups:");
    for group in solution.groups() {
        let cells: Vec<String> = group
            .minterms()
            .iter()
            .map(|&m| {
                let (row, column) = hypercube::map_position(m, solution.variable_count());
                format!("{}@({},{})", m, row, column)
            })
            .collect();
        println!(
            "  {:<6} size {:>2}{}  {}",
            group.term(),
            group.size(),
            if group.is_essential() { " (essential)" } else { "" },
            cells.join(" ")
        );
    }

    println!(
        "\n{} terms, {} literals, {} inverters, {}",
        solution.term_count(),
        solution.literal_count(),
        solution.inverter_count(),
        solution.optimization_level()
    );

    Ok(())
}
