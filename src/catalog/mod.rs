// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The move catalog: every jump the geometry could ever allow.
//!
//! The catalog is pure geometry, computed once before any search and
//! independent of occupancy: a [`Move`] exists for every line of three
//! collinear adjacent valid slots. Whether a catalog entry is *legal* at a
//! given moment is derived from occupancy by [`Move::is_legal`] and never
//! stored.
//!
//! Catalog order is the search's tie-break order. Anchors are enumerated in
//! row-major order and axes in the fixed order `[Row, Column]`; nothing in
//! the construction depends on hash-map iteration, so two builds of the same
//! geometry produce identical catalogs.

use std::fmt;

use crate::board::SlotStore;
use crate::geometry::{Axis, Cell, GridGeometry, SlotId};

/// A line of three collinear adjacent slots that could form a jump.
///
/// `jumper` is the anchor (the upper or left end), `middle` the hopped-over
/// slot, `landing` the far end. The names describe the downward/rightward
/// reading; the legality predicate is symmetric in `jumper` and `landing`,
/// so the same entry covers the reverse jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub axis: Axis,
    pub jumper: SlotId,
    pub middle: SlotId,
    pub landing: SlotId,
}

impl Move {
    /// Whether this move can be played against the given occupancy: the
    /// middle slot holds a peg and exactly one of the two ends does. The peg
    /// on the occupied end jumps into the free end, whichever that is.
    pub fn is_legal(&self, slots: &SlotStore) -> bool {
        slots.occupied(self.middle)
            && slots.occupied(self.jumper) != slots.occupied(self.landing)
    }

    /// The three slots the move touches.
    pub fn cells(&self) -> [SlotId; 3] {
        [self.jumper, self.middle, self.landing]
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} over {} to {} ({})",
            self.jumper.index(),
            self.middle.index(),
            self.landing.index(),
            self.axis
        )
    }
}

/// All geometrically possible moves of one board, in deterministic order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveCatalog {
    moves: Vec<Move>,
}

impl MoveCatalog {
    /// Enumerate the catalog for `geometry`.
    ///
    /// For each valid slot as anchor and each axis, the one-step and
    /// two-step neighbors are computed; the move enters the catalog only if
    /// both are valid cells. Combinations whose landing (or middle) falls
    /// off the cross are discarded here and never reconsidered.
    pub fn build(geometry: &GridGeometry) -> Self {
        let mut moves = Vec::with_capacity(geometry.slot_count() * 2);
        for anchor in geometry.slots() {
            for axis in Axis::BOTH {
                let middle = match geometry.neighbor(anchor, axis, 1) {
                    Cell::Slot(id) => id,
                    Cell::Outside => continue,
                };
                let landing = match geometry.neighbor(anchor, axis, 2) {
                    Cell::Slot(id) => id,
                    Cell::Outside => continue,
                };
                moves.push(Move {
                    axis,
                    jumper: anchor,
                    middle,
                    landing,
                });
            }
        }
        Self { moves }
    }

    /// Number of catalog entries.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// All entries in catalog order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Iterate over the entries legal against `slots`, in catalog order,
    /// with their catalog indices.
    pub fn legal_moves<'a>(
        &'a self,
        slots: &'a SlotStore,
    ) -> impl Iterator<Item = (usize, Move)> + 'a {
        self.moves
            .iter()
            .enumerate()
            .filter(|(_, mv)| mv.is_legal(slots))
            .map(|(index, mv)| (index, *mv))
    }

    /// Count the legal moves and fetch the `n`th one in a single pass,
    /// without materializing the filtered list.
    ///
    /// Returns the total legal count together with the `n`th legal move
    /// (`None` when fewer than `n + 1` are legal).
    pub fn count_and_nth(&self, slots: &SlotStore, n: usize) -> (usize, Option<Move>) {
        let mut count = 0;
        let mut nth = None;
        for mv in &self.moves {
            if mv.is_legal(slots) {
                if count == n {
                    nth = Some(*mv);
                }
                count += 1;
            }
        }
        (count, nth)
    }
}
