// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use solitaire_search::{Board, BoardConfig};

/// The standard 33-slot cross with the center free.
pub fn standard_board() -> Board {
    Board::new(&BoardConfig::default()).expect("default configuration is valid")
}

/// A board for an arbitrary cross shape with the center free.
#[allow(dead_code)] // Not every integration file needs custom shapes.
pub fn cross_board(side: usize, short_edge: usize) -> Board {
    let config = BoardConfig {
        side,
        short_edge,
        empty_cell: None,
    };
    Board::new(&config).expect("cross configuration is valid")
}
