// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Regression tests pinning the move catalog: its size and order are pure
//! functions of the geometry and fix the search's tie-breaking.

mod common;

use common::{cross_board, standard_board};
use solitaire_search::{Axis, GridGeometry, MoveCatalog};

#[test]
fn test_catalog_size_is_pinned() {
    // 19 lines of three per axis on the standard cross.
    assert_eq!(standard_board().catalog().len(), 38);
}

#[test]
fn test_catalog_is_reproducible() {
    let geometry = GridGeometry::new(7, 3).expect("standard cross");
    let first = MoveCatalog::build(&geometry);
    let second = MoveCatalog::build(&geometry);
    assert_eq!(first, second);
}

#[test]
fn test_catalog_entries_are_geometrically_sound() {
    let board = standard_board();
    let geometry = board.geometry();
    for mv in board.catalog().moves() {
        let (jumper_row, jumper_col) = geometry.coords(mv.jumper);
        let (middle_row, middle_col) = geometry.coords(mv.middle);
        let (landing_row, landing_col) = geometry.coords(mv.landing);
        match mv.axis {
            Axis::Row => {
                assert_eq!(jumper_col, middle_col);
                assert_eq!(middle_col, landing_col);
                assert_eq!(middle_row, jumper_row + 1);
                assert_eq!(landing_row, jumper_row + 2);
            }
            Axis::Column => {
                assert_eq!(jumper_row, middle_row);
                assert_eq!(middle_row, landing_row);
                assert_eq!(middle_col, jumper_col + 1);
                assert_eq!(landing_col, jumper_col + 2);
            }
        }
        for (row, col) in [
            (jumper_row, jumper_col),
            (middle_row, middle_col),
            (landing_row, landing_col),
        ] {
            assert!(geometry.is_valid_cell(row, col));
        }
    }
}

#[test]
fn test_catalog_anchor_order_is_row_major() {
    let board = standard_board();
    let anchors: Vec<usize> = board
        .catalog()
        .moves()
        .iter()
        .map(|mv| mv.jumper.index())
        .collect();
    let mut sorted = anchors.clone();
    sorted.sort_unstable();
    assert_eq!(anchors, sorted);
}

#[test]
fn test_small_cross_catalog() {
    // side 5 / short edge 3: arms one block narrower, 21 slots.
    let board = cross_board(5, 3);
    assert_eq!(board.slots().len(), 21);
    // Per column (or row): runs of 3, 5, 5, 5, 3 valid cells give
    // 1 + 3 + 3 + 3 + 1 = 11 lines per axis.
    assert_eq!(board.catalog().len(), 22);
}
