// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The board: constant geometry and catalog plus mutable search state.
//!
//! A [`Board`] is an explicitly constructed value owned by the caller; there
//! is no process-wide instance. It combines:
//!
//! - [`GridGeometry`] and [`MoveCatalog`]: constant after construction
//! - [`SlotStore`]: occupancy, mutated only by [`Board::apply`] and
//!   [`Board::undo`]
//! - [`ChoiceStack`] and the applied-move log: the search driver's
//!   bookkeeping, one frame and one logged move per depth

pub mod slots;

pub use slots::{Slot, SlotStore};

use crate::catalog::{Move, MoveCatalog};
use crate::config::{BoardConfig, ConfigError};
use crate::geometry::{Cell, GridGeometry, SlotId};
use crate::render::Snapshot;
use crate::search::ChoiceStack;

/// One cross board and its search state.
#[derive(Debug)]
pub struct Board {
    geometry: GridGeometry,
    slots: SlotStore,
    catalog: MoveCatalog,

    /// One frame per search depth; the driver pushes and pops these.
    pub choices: ChoiceStack,

    /// The exact move applied at each depth, in order. Undo cannot be
    /// derived from occupancy once more than one legal option existed, so
    /// the log is authoritative.
    log: Vec<Move>,
}

impl Board {
    /// Build a board from a validated configuration.
    ///
    /// Validation happens before any slot or catalog construction; on error
    /// nothing is built. `empty_cell: None` designates the board center.
    pub fn new(config: &BoardConfig) -> Result<Self, ConfigError> {
        let geometry = GridGeometry::new(config.side, config.short_edge)?;
        let empty = match config.empty_cell {
            Some(id) => Self::checked_cell(&geometry, id)?,
            None => geometry.center(),
        };
        let slots = SlotStore::new(&geometry, empty);
        let catalog = MoveCatalog::build(&geometry);
        let depth_bound = slots.occupied_count();
        Ok(Self {
            geometry,
            slots,
            catalog,
            choices: ChoiceStack::with_capacity(depth_bound),
            log: Vec::with_capacity(depth_bound),
        })
    }

    fn checked_cell(geometry: &GridGeometry, id: usize) -> Result<SlotId, ConfigError> {
        if id >= geometry.square_len() {
            return Err(ConfigError::EmptyCellInvalid { id });
        }
        let (row, col) = geometry.coords(SlotId::new(id));
        match geometry.cell(row, col) {
            Cell::Slot(slot) => Ok(slot),
            Cell::Outside => Err(ConfigError::EmptyCellInvalid { id }),
        }
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    pub fn catalog(&self) -> &MoveCatalog {
        &self.catalog
    }

    pub fn slots(&self) -> &SlotStore {
        &self.slots
    }

    /// Number of pegs on the board.
    pub fn occupied_count(&self) -> usize {
        self.slots.occupied_count()
    }

    /// Number of free slots.
    pub fn free_count(&self) -> usize {
        self.slots.free_count()
    }

    /// Current search depth: the number of applied moves.
    pub fn depth(&self) -> usize {
        self.log.len()
    }

    /// The moves applied so far, in order.
    pub fn applied_moves(&self) -> &[Move] {
        &self.log
    }

    /// Count the currently legal moves and fetch the `n`th, in one catalog
    /// pass.
    pub fn legal_count_and_nth(&self, n: usize) -> (usize, Option<Move>) {
        self.catalog.count_and_nth(&self.slots, n)
    }

    /// Iterate over the currently legal moves in catalog order.
    pub fn legal_moves(&self) -> impl Iterator<Item = (usize, Move)> + '_ {
        self.catalog.legal_moves(&self.slots)
    }

    /// Apply `mv`: flip the occupancy of its three slots and log it.
    ///
    /// Exactly one of jumper/landing was occupied, so the flip removes one
    /// peg whichever direction the jump travels.
    ///
    /// # Panics
    ///
    /// Panics if `mv` is not legal in the current position. Applying an
    /// illegal move would corrupt the peg-count invariant, so this is a
    /// driver bug, not a recoverable condition.
    pub fn apply(&mut self, mv: Move) {
        assert!(
            mv.is_legal(&self.slots),
            "move {} is not legal in the current position",
            mv
        );
        self.slots.toggle(mv.jumper);
        self.slots.toggle(mv.middle);
        self.slots.toggle(mv.landing);
        self.log.push(mv);
    }

    /// Undo the most recently applied move and return it.
    ///
    /// Flipping the same three slots again restores the previous occupancy
    /// exactly.
    ///
    /// # Panics
    ///
    /// Panics if no move has been applied.
    pub fn undo(&mut self) -> Move {
        let mv = match self.log.pop() {
            Some(mv) => mv,
            None => panic!("undo with an empty move log"),
        };
        self.slots.toggle(mv.jumper);
        self.slots.toggle(mv.middle);
        self.slots.toggle(mv.landing);
        mv
    }

    /// Read-only occupancy snapshot for the presentation collaborator.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.geometry, &self.slots)
    }
}
