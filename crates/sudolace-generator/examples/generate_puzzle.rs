//! Example demonstrating basic puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator`, optionally with a fixed seed
//! - Generate a puzzle for a difficulty grade
//! - Display the puzzle and its solution
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a grade (easy, medium, hard; case-insensitive):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard
//! ```
//!
//! Reproduce a specific puzzle:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed 42
//! ```

use clap::Parser;
use sudolace_generator::{Difficulty, GeneratedPuzzle, PuzzleGenerator};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty grade of the generated puzzle.
    #[arg(long, value_name = "GRADE", default_value = "easy")]
    difficulty: Difficulty,

    /// Seed for reproducible generation.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut generator = match args.seed {
        Some(seed) => PuzzleGenerator::from_seed(seed),
        None => PuzzleGenerator::new(),
    };
    let generated = generator.generate(args.difficulty);
    print_puzzle(&generated, args.seed);
}

fn print_puzzle(generated: &GeneratedPuzzle, seed: Option<u64>) {
    println!("Difficulty:");
    println!("  {}", generated.difficulty);
    println!();

    if let Some(seed) = seed {
        println!("Seed:");
        println!("  {seed}");
        println!();
    }

    println!("Puzzle ({} cells removed):", generated.removed_cells());
    for line in generated.puzzle.to_string().lines() {
        println!("  {line}");
    }
    println!();

    println!("Solution:");
    for line in generated.solution.to_string().lines() {
        println!("  {line}");
    }
}
