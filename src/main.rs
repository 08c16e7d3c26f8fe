// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line entry point: solve the standard cross board.
//!
//! Builds the default 33-slot board, runs the search to a terminal state,
//! and on success replays the winning sequence on a fresh board, printing
//! every intermediate position.

use std::process;

use solitaire_search::search::Counters;
use solitaire_search::{Board, BoardConfig, ConfigError, Move, SearchDriver, SearchOutcome};

fn main() {
    if let Err(err) = run() {
        eprintln!("invalid board configuration: {}", err);
        process::exit(1);
    }
}

fn run() -> Result<(), ConfigError> {
    let config = BoardConfig::default();
    let mut board = Board::new(&config)?;

    eprintln!(
        "[solitaire] {} slots, {} pegs, {} catalog moves",
        board.slots().len(),
        board.occupied_count(),
        board.catalog().len()
    );
    println!("{}", board.snapshot().render());

    let mut driver = SearchDriver::new();
    let outcome = driver.run(&mut board);

    let statistics = driver.statistics();
    eprintln!(
        "[solitaire] search done: {} applied, {} undone, {} dead ends",
        statistics.get(Counters::MovesApplied),
        statistics.get(Counters::MovesUndone),
        statistics.get(Counters::DeadEnds)
    );

    match outcome {
        SearchOutcome::Solved => {
            println!("solved in {} moves:", board.applied_moves().len());
            replay(&config, board.applied_moves())?;
        }
        SearchOutcome::Exhausted => {
            println!("no solution exists for this configuration");
        }
        SearchOutcome::HaltedEarly => {
            println!("halted: first decision pushed past its default option");
            println!("{}", board.snapshot().render());
        }
    }
    Ok(())
}

/// Replay a winning sequence on a brand-new board, printing each step.
fn replay(config: &BoardConfig, moves: &[Move]) -> Result<(), ConfigError> {
    let mut board = Board::new(config)?;
    for (step, mv) in moves.iter().enumerate() {
        board.apply(*mv);
        println!("move {}: {}", step + 1, mv);
        println!("{}", board.snapshot().render());
    }
    Ok(())
}
