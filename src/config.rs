// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Board configuration and fail-fast validation.
//!
//! A [`BoardConfig`] describes the cross board: the side length of the
//! enclosing square, the length of the cross's short edge, and which cell
//! starts empty. Invalid combinations are rejected with a [`ConfigError`]
//! before any slot or catalog construction takes place, so a failed
//! construction attempt never leaves partial state behind.

use std::fmt;

/// Configuration for a cross-shaped peg-solitaire board.
///
/// The board is a `side × side` square with four corner blocks of
/// `(side - short_edge) / 2` cells removed on each side. `side` must be odd
/// and at least `short_edge`, and `side - short_edge` must be even so the
/// cross is symmetric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Side length of the enclosing square.
    pub side: usize,

    /// Length of the cross's short edge (the width of each arm).
    pub short_edge: usize,

    /// Flat id of the cell that starts empty, or `None` for the board
    /// center.
    pub empty_cell: Option<usize>,
}

impl Default for BoardConfig {
    /// The standard 33-slot cross: 7×7 square, short edge 3, center empty.
    fn default() -> Self {
        Self {
            side: 7,
            short_edge: 3,
            empty_cell: None,
        }
    }
}

/// Errors reported when a board configuration is rejected.
///
/// All variants are raised before any mutable state is built; the caller can
/// recover by supplying a corrected configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The side length is even, so the board has no center cell.
    EvenSideLength { side: usize },

    /// The short edge is longer than the side it is cut from.
    ShortEdgeTooLong { side: usize, short_edge: usize },

    /// `side - short_edge` is odd, so the corner blocks cannot be symmetric.
    AsymmetricCorners { side: usize, short_edge: usize },

    /// The configured empty cell is off the square or inside a removed
    /// corner block.
    EmptyCellInvalid { id: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EvenSideLength { side } => {
                write!(f, "side length {} is even (no center cell)", side)
            }
            ConfigError::ShortEdgeTooLong { side, short_edge } => {
                write!(
                    f,
                    "short edge {} exceeds side length {}",
                    short_edge, side
                )
            }
            ConfigError::AsymmetricCorners { side, short_edge } => {
                write!(
                    f,
                    "side {} minus short edge {} is odd (corners would be asymmetric)",
                    side, short_edge
                )
            }
            ConfigError::EmptyCellInvalid { id } => {
                write!(f, "cell {} is not a valid slot", id)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
