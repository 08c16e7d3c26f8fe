// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Deterministic depth-first backtracking search.
//!
//! The driver walks the state space with a single iterative loop over the
//! board's choice stack; no recursion, so the call stack never grows with
//! the puzzle size.
//!
//! # Execution model
//!
//! 1. Before each exploring step, check the terminal conditions: one peg
//!    left means `Solved`; a depth-0 frame pushed past its default option
//!    means `HaltedEarly` (board symmetry makes the remaining first-move
//!    alternatives redundant for finding *a* solution).
//! 2. Exploring: count the legal moves. Zero is a dead end; otherwise push
//!    a [`ChoiceFrame`] and apply the lowest-indexed legal move.
//! 3. Backtracking: undo the last logged move and advance the top frame.
//!    Frames whose options are spent are popped and the unwind continues on
//!    the frame below. When a frame still has options, the move at its new
//!    index is recomputed against the restored parent occupancy and
//!    applied. An empty stack means the whole tree failed: `Exhausted`.
//!
//! `HaltedEarly` is deliberately distinct from `Exhausted`: the former means
//! "no further exploration attempted", the latter is a proof that no
//! solution exists from the starting configuration.

pub mod choice;
pub mod statistics;

pub use choice::{ChoiceFrame, ChoiceStack};
pub use statistics::{Counters, Statistics};

use crate::board::Board;
use crate::catalog::Move;
use crate::render::Snapshot;

/// How a search run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// One peg remains; the board's applied-move log holds the winning
    /// sequence.
    Solved,
    /// Every alternative failed: no solution exists from this
    /// configuration.
    Exhausted,
    /// The symmetry short-circuit fired before the tree was exhausted.
    /// Inconclusive: no further exploration was attempted.
    HaltedEarly,
}

/// Observer invoked with a read-only snapshot at each decision point.
pub type Observer = Box<dyn FnMut(&Snapshot)>;

/// The iterative search driver.
///
/// Owns the run's statistics and an optional diagnostics observer; all
/// position state lives on the [`Board`] it drives.
pub struct SearchDriver {
    statistics: Statistics,
    observer: Option<Observer>,
}

impl SearchDriver {
    pub fn new() -> Self {
        Self {
            statistics: Statistics::new(),
            observer: None,
        }
    }

    /// A driver that passes a snapshot to `observer` after every applied
    /// move. The observer is diagnostics only: it sees read-only snapshots
    /// and never influences the search.
    pub fn with_observer(observer: Observer) -> Self {
        Self {
            statistics: Statistics::new(),
            observer: Some(observer),
        }
    }

    /// Counters accumulated so far.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Run the search on `board` until a terminal state.
    ///
    /// The walk is fully deterministic: at every position the lowest-indexed
    /// legal catalog entry is tried first, so identical configurations
    /// produce identical applied-move logs.
    pub fn run(&mut self, board: &mut Board) -> SearchOutcome {
        loop {
            if board.occupied_count() == 1 {
                return SearchOutcome::Solved;
            }
            if board.choices.first_choice_deviated() {
                return SearchOutcome::HaltedEarly;
            }

            let (count, first) = board.legal_count_and_nth(0);
            if count == 0 {
                self.statistics.increment(Counters::DeadEnds);
                if !self.backtrack(board) {
                    return SearchOutcome::Exhausted;
                }
            } else {
                board.choices.push(ChoiceFrame::new(count));
                let mv = match first {
                    Some(mv) => mv,
                    None => panic!("legal filter found {} moves but no move 0", count),
                };
                self.apply(board, mv);
            }
        }
    }

    /// Unwind the choice stack until a frame with untried options is found
    /// and its next move applied. Returns `false` when the stack runs out.
    fn backtrack(&mut self, board: &mut Board) -> bool {
        loop {
            if board.choices.is_empty() {
                return false;
            }

            board.undo();
            self.statistics.increment(Counters::MovesUndone);

            let next = {
                let frame = match board.choices.top_mut() {
                    Some(frame) => frame,
                    None => panic!("applied move without a choice frame"),
                };
                frame.advance();
                if frame.exhausted() {
                    None
                } else {
                    Some((frame.chosen_index(), frame.option_count()))
                }
            };

            let (chosen, options) = match next {
                Some(pair) => pair,
                None => {
                    board.choices.pop();
                    continue;
                }
            };

            // Recomputed against the restored parent occupancy; the count
            // cannot have changed since the frame was pushed.
            let (count, mv) = board.legal_count_and_nth(chosen);
            debug_assert_eq!(count, options);
            let mv = match mv {
                Some(mv) => mv,
                None => panic!("no legal move at chosen index {} of {}", chosen, options),
            };
            self.apply(board, mv);
            return true;
        }
    }

    fn apply(&mut self, board: &mut Board, mv: Move) {
        board.apply(mv);
        self.statistics.increment(Counters::MovesApplied);
        if let Some(observer) = &mut self.observer {
            observer(&board.snapshot());
        }
    }
}

impl Default for SearchDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoardConfig;

    fn board(config: &BoardConfig) -> Board {
        Board::new(config).expect("valid config")
    }

    #[test]
    fn test_exploring_pushes_frame_and_applies_default() {
        let mut board = board(&BoardConfig::default());
        let mut driver = SearchDriver::new();

        // One hand-stepped exploring iteration.
        let (count, first) = board.legal_count_and_nth(0);
        board.choices.push(ChoiceFrame::new(count));
        driver.apply(&mut board, first.expect("legal move"));

        assert_eq!(board.choices.depth(), 1);
        assert_eq!(board.depth(), 1);
        assert_eq!(board.occupied_count(), 31);
        assert_eq!(driver.statistics().get(Counters::MovesApplied), 1);
    }

    #[test]
    fn test_backtrack_advances_to_next_option() {
        let mut board = board(&BoardConfig::default());
        let mut driver = SearchDriver::new();

        let (count, first) = board.legal_count_and_nth(0);
        assert_eq!(count, 4);
        let first = first.expect("legal move");
        board.choices.push(ChoiceFrame::new(count));
        driver.apply(&mut board, first);

        assert!(driver.backtrack(&mut board));
        // Same depth, different move: option 1 instead of option 0.
        assert_eq!(board.depth(), 1);
        assert_eq!(board.choices.depth(), 1);
        assert_ne!(board.applied_moves()[0], first);
        assert_eq!(
            board.choices.top().map(ChoiceFrame::chosen_index),
            Some(1)
        );
        assert_eq!(driver.statistics().get(Counters::MovesUndone), 1);
    }

    #[test]
    fn test_backtrack_with_empty_stack_reports_exhaustion() {
        let mut board = board(&BoardConfig::default());
        let mut driver = SearchDriver::new();
        assert!(!driver.backtrack(&mut board));
    }

    #[test]
    fn test_halted_early_reported_before_exploring() {
        let mut board = board(&BoardConfig::default());
        let mut driver = SearchDriver::new();

        // Force the root frame past its default option, as a long unwind
        // back to the first decision would.
        let (count, first) = board.legal_count_and_nth(0);
        board.choices.push(ChoiceFrame::new(count));
        driver.apply(&mut board, first.expect("legal move"));
        assert!(driver.backtrack(&mut board));

        assert_eq!(driver.run(&mut board), SearchOutcome::HaltedEarly);
    }

    #[test]
    fn test_exhausted_when_no_first_move_exists() {
        // A full 3x3 square with only the center free has no legal jump at
        // all: lines through the center lack a middle peg, every other line
        // has both ends occupied.
        let config = BoardConfig {
            side: 3,
            short_edge: 3,
            empty_cell: None,
        };
        let mut board = board(&config);
        let mut driver = SearchDriver::new();

        assert_eq!(board.legal_count_and_nth(0), (0, None));
        assert_eq!(driver.run(&mut board), SearchOutcome::Exhausted);
        assert_eq!(driver.statistics().get(Counters::MovesApplied), 0);
        assert_eq!(driver.statistics().get(Counters::MovesUndone), 0);
        assert_eq!(driver.statistics().get(Counters::DeadEnds), 1);
    }
}
