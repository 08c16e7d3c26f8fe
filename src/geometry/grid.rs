// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Flat slot ids and cross-shape validity.
//!
//! A [`GridGeometry`] maps between flat slot ids and `(row, col)` coordinates
//! on the enclosing `side × side` square, and knows which cells belong to the
//! cross: the four `corner × corner` blocks (with
//! `corner = (side - short_edge) / 2`) are removed. It holds no mutable
//! state; occupancy lives in [`SlotStore`].
//!
//! Queries that may land off the cross return a [`Cell`] rather than a
//! sentinel id, so callers match on the result instead of comparing against
//! a magic number.
//!
//! [`SlotStore`]: crate::board::SlotStore

use crate::config::ConfigError;
use crate::geometry::Axis;

/// Flat identifier of a cell: `row * side + col` on the enclosing square.
///
/// Ids cover the whole square, including the removed corner blocks; corner
/// ids exist in the id space but never get a slot. Ids are only minted by
/// [`GridGeometry`], which keeps them in range for their board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotId(usize);

impl SlotId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// The flat index backing this id.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Result of a geometry query for a cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// The position is off the square or inside a removed corner block.
    Outside,
    /// The position is a valid slot of the cross.
    Slot(SlotId),
}

impl Cell {
    /// The slot id, if the cell is on the cross.
    pub fn slot(self) -> Option<SlotId> {
        match self {
            Cell::Outside => None,
            Cell::Slot(id) => Some(id),
        }
    }
}

/// Id/coordinate mapping and validity for one cross board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridGeometry {
    side: usize,
    short_edge: usize,
    /// Width of each removed corner block: `(side - short_edge) / 2`.
    corner: usize,
}

impl GridGeometry {
    /// Create the geometry for a `side × side` square with corner blocks
    /// removed down to a short edge of `short_edge`.
    ///
    /// Fails fast with a [`ConfigError`] when the side is even, the short
    /// edge is longer than the side, or their difference is odd (the corner
    /// blocks would be asymmetric).
    pub fn new(side: usize, short_edge: usize) -> Result<Self, ConfigError> {
        if side % 2 == 0 {
            return Err(ConfigError::EvenSideLength { side });
        }
        if short_edge > side {
            return Err(ConfigError::ShortEdgeTooLong { side, short_edge });
        }
        if (side - short_edge) % 2 != 0 {
            return Err(ConfigError::AsymmetricCorners { side, short_edge });
        }
        Ok(Self {
            side,
            short_edge,
            corner: (side - short_edge) / 2,
        })
    }

    /// Side length of the enclosing square.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Length of the cross's short edge.
    pub fn short_edge(&self) -> usize {
        self.short_edge
    }

    /// Number of cells in the enclosing square (`side²`), the size of the
    /// flat id space.
    pub fn square_len(&self) -> usize {
        self.side * self.side
    }

    /// Map coordinates on the square to a flat id.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is off the square. The mapping is defined
    /// for corner-block cells too; use [`GridGeometry::cell`] when validity
    /// matters.
    pub fn slot_id(&self, row: usize, col: usize) -> SlotId {
        assert!(
            row < self.side && col < self.side,
            "coordinates ({}, {}) off the {}x{} square",
            row,
            col,
            self.side,
            self.side
        );
        SlotId(row * self.side + col)
    }

    /// Map a flat id back to `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the id is outside the square's id space.
    pub fn coords(&self, id: SlotId) -> (usize, usize) {
        assert!(
            id.index() < self.square_len(),
            "slot id {} outside the {}-cell square",
            id.index(),
            self.square_len()
        );
        (id.index() / self.side, id.index() % self.side)
    }

    /// Whether `(row, col)` is a cell of the cross (on the square and not in
    /// a removed corner block).
    pub fn is_valid_cell(&self, row: usize, col: usize) -> bool {
        if row >= self.side || col >= self.side {
            return false;
        }
        let row_in_arm = row >= self.corner && row < self.side - self.corner;
        let col_in_arm = col >= self.corner && col < self.side - self.corner;
        row_in_arm || col_in_arm
    }

    /// Query the cell at `(row, col)`.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        if self.is_valid_cell(row, col) {
            Cell::Slot(self.slot_id(row, col))
        } else {
            Cell::Outside
        }
    }

    /// Query the cell `steps` cells away from `id` along `axis`.
    pub fn neighbor(&self, id: SlotId, axis: Axis, steps: isize) -> Cell {
        let (row, col) = self.coords(id);
        match axis.shift(row, col, steps) {
            Some((row, col)) => self.cell(row, col),
            None => Cell::Outside,
        }
    }

    /// Iterate over all valid slots in row-major order.
    ///
    /// This order is load-bearing: the move catalog enumerates anchors with
    /// it, which fixes the search's deterministic tie-breaking.
    pub fn slots(&self) -> impl Iterator<Item = SlotId> + '_ {
        (0..self.side).flat_map(move |row| {
            (0..self.side).filter_map(move |col| self.cell(row, col).slot())
        })
    }

    /// Number of valid slots on the cross.
    pub fn slot_count(&self) -> usize {
        self.square_len() - 4 * self.corner * self.corner
    }

    /// The central cell, `floor(side² / 2)`: the canonical starting empty
    /// slot for odd side lengths.
    pub fn center(&self) -> SlotId {
        SlotId(self.square_len() / 2)
    }
}
