//! Karnaugh-map minimizer - Command Line Interface

use clap::{ArgGroup, Parser};
use karnaugh_logic::{KarnaughError, Minimizable, MinimizerConfig, Solution, TruthTable};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "karnaugh")]
#[command(about = "Minimize a Boolean function of 2 to 4 variables", long_about = None)]
#[command(version)]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .args(["minterms", "cells", "input", "random"])
))]
struct Args {
    /// Number of variables (2, 3 or 4)
    #[arg(short = 'n', long = "vars", default_value_t = 4)]
    vars: usize,

    /// Comma-separated ON minterms, e.g. "1,3,5"
    #[arg(short = 'm', long, value_name = "LIST")]
    minterms: Option<String>,

    /// Comma-separated don't-care minterms
    #[arg(short = 'd', long = "dont-cares", value_name = "LIST", requires = "minterms")]
    dont_cares: Option<String>,

    /// Cells as a string of 0, 1 and X, minterm 0 first (sets the variable count)
    #[arg(short = 'c', long, value_name = "CELLS")]
    cells: Option<String>,

    /// Read the cell string from a file
    #[arg(short = 'i', long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Random function: each cell ON with probability 0.3
    #[arg(short = 'r', long)]
    random: bool,

    /// Seed for --random
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Largest candidate count searched exhaustively
    #[arg(long, default_value_t = MinimizerConfig::default().exhaustive_limit)]
    exhaustive_limit: usize,

    /// Skip the final redundancy pass
    #[arg(long)]
    keep_redundant: bool,

    /// List the selected groups
    #[arg(short = 'g', long)]
    groups: bool,

    /// Print the canonical form and optimization summary
    #[arg(short = 's', long)]
    summary: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), KarnaughError> {
    let table = build_table(args)?;

    let config = MinimizerConfig {
        exhaustive_limit: args.exhaustive_limit,
        remove_redundant: !args.keep_redundant,
    };
    let solution = table.minimize_with_config(&config)?;

    if args.random || args.summary {
        println!("Cells: {}", table);
    }
    println!("{}", solution.expression());

    if args.groups {
        print_groups(&solution);
    }
    if args.summary {
        print_summary(&solution);
    }
    Ok(())
}

fn build_table(args: &Args) -> Result<TruthTable, KarnaughError> {
    if let Some(cells) = &args.cells {
        return Ok(cells.parse()?);
    }
    if let Some(path) = &args.input {
        let content = fs::read_to_string(path)?;
        return Ok(content.parse()?);
    }

    let mut table = TruthTable::new(args.vars)?;
    if args.random {
        match args.seed {
            Some(seed) => table.randomize_with(&mut StdRng::seed_from_u64(seed)),
            None => table.randomize(),
        }
    } else if let Some(minterms) = &args.minterms {
        table.apply_lists(minterms, args.dont_cares.as_deref().unwrap_or(""));
    }
    Ok(table)
}

fn print_groups(solution: &Solution) {
    for (i, group) in solution.groups().iter().enumerate() {
        let minterms: Vec<String> = group.minterms().iter().map(|m| m.to_string()).collect();
        println!(
            "  {:>2}. {:<8} size {:>2}  m({}){}",
            i + 1,
            group.term(),
            group.size(),
            minterms.join(", "),
            if group.is_essential() { "  essential" } else { "" }
        );
    }
}

fn print_summary(solution: &Solution) {
    println!("{}", solution.canonical_form());
    println!("Terms:     {}", solution.term_count());
    println!("Literals:  {}", solution.literal_count());
    println!("Inverters: {}", solution.inverter_count());
    match solution.reduction_ratio() {
        Some(ratio) => println!(
            "Optimization: {} ({}% reduction)",
            solution.optimization_level(),
            (ratio * 100.0).round()
        ),
        None => println!("Optimization: {}", solution.optimization_level()),
    }
}
