// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Full count for the compiled-in driver board size.
//!
//! Only built for the small feature-selected boards (cfg flags emitted by
//! build.rs); the larger sizes take too long to enumerate in debug test
//! runs and are covered by the per-size tests instead.

#![cfg(board_le_12)]

mod common;

use common::KNOWN_COUNTS;
use queens_search::board::BOARD_SIZE;
use queens_search::driver::{count_solutions, DriverConfig};

#[test]
fn test_default_board_full_count() {
    let config = DriverConfig::default().with_split_depth(1);
    let report = count_solutions::<BOARD_SIZE>(&config).unwrap();
    assert_eq!(report.solutions, KNOWN_COUNTS[BOARD_SIZE]);
    assert_eq!(report.lanes, BOARD_SIZE);
}
