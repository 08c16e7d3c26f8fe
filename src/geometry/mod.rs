// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Grid geometry for the cross board.
//!
//! This module contains the type-safe geometric primitives:
//! - Axis: the two jump directions (row-wise and column-wise)
//! - SlotId: flat identifier of a cell on the enclosing square
//! - Cell: result of a geometry query (a valid slot, or off the cross)
//! - GridGeometry: id/coordinate mapping and cross validity

pub mod axis;
pub mod grid;

// Re-export for convenience
pub use axis::Axis;
pub use grid::{Cell, GridGeometry, SlotId};
