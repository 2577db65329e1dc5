// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end dispatch loop runs.
//!
//! These exercise the full driver path: configuration validation, lane
//! construction, parallel bounded rounds, retirement, and the final sum.

mod common;

use common::KNOWN_COUNTS;
use queens_search::driver::{count_solutions, ConfigError, Counters, DriverConfig};

#[test]
fn test_eight_board_default_config() {
    let config = DriverConfig::default();
    let report = count_solutions::<8>(&config).unwrap();
    assert_eq!(report.solutions, KNOWN_COUNTS[8]);
}

#[test]
fn test_single_lane_single_thread() {
    let config = DriverConfig::default().with_split_depth(0).with_threads(1);
    let report = count_solutions::<8>(&config).unwrap();
    assert_eq!(report.solutions, KNOWN_COUNTS[8]);
    assert_eq!(report.lanes, 1);
}

#[test]
fn test_thread_counts_agree() {
    let base = DriverConfig::default().with_split_depth(2);
    let one = count_solutions::<9>(&base.clone().with_threads(1)).unwrap();
    let four = count_solutions::<9>(&base.with_threads(4)).unwrap();
    assert_eq!(one.solutions, KNOWN_COUNTS[9]);
    assert_eq!(one.solutions, four.solutions);
    assert_eq!(one.lanes, four.lanes);
}

#[test]
fn test_small_quota_needs_many_rounds() {
    let config = DriverConfig::default()
        .with_split_depth(1)
        .with_steps_per_round(50)
        .with_threads(2);
    let report = count_solutions::<8>(&config).unwrap();
    assert_eq!(report.solutions, KNOWN_COUNTS[8]);
    assert_eq!(report.lanes, 8);
    assert!(report.rounds > 1);
    assert_eq!(report.statistics.get(Counters::LanesRetired), 8);
    assert_eq!(
        report.statistics.get(Counters::SolutionsFound),
        KNOWN_COUNTS[8]
    );
}

#[test]
fn test_round_count_shrinks_with_bigger_quota() {
    let small = DriverConfig::default()
        .with_split_depth(1)
        .with_steps_per_round(10)
        .with_threads(1);
    let large = small.clone().with_steps_per_round(1 << 20);
    let many = count_solutions::<7>(&small).unwrap();
    let few = count_solutions::<7>(&large).unwrap();
    assert_eq!(many.solutions, few.solutions);
    assert!(many.rounds > few.rounds);
    assert_eq!(few.rounds, 1);
}

#[test]
fn test_invalid_split_depth_is_a_config_error() {
    let config = DriverConfig::default().with_split_depth(9);
    match count_solutions::<9>(&config) {
        Err(ConfigError::SplitDepthOutOfRange { split_depth, board }) => {
            assert_eq!((split_depth, board), (9, 9));
        }
        other => panic!("expected SplitDepthOutOfRange, got {:?}", other),
    }
}
