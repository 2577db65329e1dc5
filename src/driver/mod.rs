// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Host-side dispatch loop.
//!
//! The driver owns the lane records and is the only place where anything
//! crosses lanes: it builds the static partition, repeatedly dispatches
//! one bounded [`engine::advance`] round over every unfinished lane on a
//! thread pool, retires lanes that report `Done`, and finally sums the
//! per-lane solution counts. While a round is running no lane reads or
//! writes another lane's state, so the only synchronization is the
//! barrier between rounds.
//!
//! The round structure mirrors a bounded-step execution substrate: each
//! lane gets at most `steps_per_round` state-machine iterations per
//! dispatch, then is re-invoked in the next round if unfinished. With
//! the default quota a lane frequently finishes in its first round; the
//! structure only costs when it is needed.

pub mod statistics;

pub use statistics::{Counters, Statistics};

use crate::engine;
use crate::partition;
use crate::state::SearchState;
use log::{debug, info};
use rayon::prelude::*;
use std::fmt;

/// Configuration for one full counting run.
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Rows pre-assigned per lane; `split(split_depth)` lanes are built.
    pub split_depth: usize,
    /// Engine step quota per lane per dispatch round.
    pub steps_per_round: u64,
    /// Worker threads for the pool; 0 lets rayon choose.
    pub threads: usize,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            split_depth: 2,
            steps_per_round: 1 << 20,
            threads: 0,
        }
    }
}

impl DriverConfig {
    /// Set the number of pre-assigned rows per lane.
    pub fn with_split_depth(mut self, split_depth: usize) -> Self {
        self.split_depth = split_depth;
        self
    }

    /// Set the per-lane step quota for each dispatch round.
    pub fn with_steps_per_round(mut self, steps_per_round: u64) -> Self {
        self.steps_per_round = steps_per_round;
        self
    }

    /// Set the worker thread count (0 = automatic).
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }
}

/// Configuration rejected before any lane was constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `split_depth` must leave at least one row for the lanes to fill.
    SplitDepthOutOfRange { split_depth: usize, board: usize },
    /// A zero step quota would dispatch rounds forever without progress.
    ZeroStepQuota,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::SplitDepthOutOfRange { split_depth, board } => {
                write!(
                    f,
                    "split depth {} out of range 0..{} for a {}-board",
                    split_depth, board, board
                )
            }
            ConfigError::ZeroStepQuota => {
                write!(f, "steps per round must be at least 1")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Outcome of a full counting run.
#[derive(Debug)]
pub struct SearchReport {
    /// Total solutions summed across all retired lanes.
    pub solutions: u64,
    /// Number of lanes the partition produced.
    pub lanes: usize,
    /// Dispatch rounds needed before every lane retired.
    pub rounds: u64,
    /// Host-side counters accumulated during the run.
    pub statistics: Statistics,
}

/// Count all solutions on a `Q`-board under the given configuration.
///
/// Validates the configuration once, up front; after that the run is
/// total and cannot fail (the engine has no error path).
///
/// # Example
///
/// ```
/// use queens_search::driver::{count_solutions, DriverConfig};
///
/// let config = DriverConfig::default().with_split_depth(1).with_threads(1);
/// let report = count_solutions::<8>(&config).unwrap();
/// assert_eq!(report.solutions, 92);
/// assert_eq!(report.lanes, 8);
/// ```
pub fn count_solutions<const Q: usize>(
    config: &DriverConfig,
) -> Result<SearchReport, ConfigError> {
    if config.split_depth >= Q {
        return Err(ConfigError::SplitDepthOutOfRange {
            split_depth: config.split_depth,
            board: Q,
        });
    }
    if config.steps_per_round == 0 {
        return Err(ConfigError::ZeroStepQuota);
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
        .expect("failed to build queens-search rayon thread pool");

    let mut in_progress: Vec<SearchState<Q>> = partition::split(config.split_depth);
    let lanes = in_progress.len();
    let mut statistics = Statistics::new();
    let mut done: Vec<SearchState<Q>> = Vec::with_capacity(lanes);

    info!(
        "dispatching {} lanes (split depth {}, {} steps per round)",
        lanes, config.split_depth, config.steps_per_round
    );

    while !in_progress.is_empty() {
        let quota = config.steps_per_round;
        pool.install(|| {
            in_progress.par_iter_mut().for_each(|lane| {
                let _ = engine::advance(lane, quota);
            });
        });
        statistics.increment(Counters::RoundsDispatched);

        let (retired, live): (Vec<_>, Vec<_>) =
            in_progress.into_iter().partition(|lane| lane.is_done());
        statistics.add(Counters::LanesRetired, retired.len() as u64);
        done.extend(retired);
        in_progress = live;

        debug!(
            "round {}: {} lanes retired, {} still searching",
            statistics.get(Counters::RoundsDispatched),
            done.len(),
            in_progress.len()
        );
    }

    let solutions: u64 = done.iter().map(|lane| lane.solutions).sum();
    statistics.add(Counters::SolutionsFound, solutions);

    Ok(SearchReport {
        solutions,
        lanes,
        rounds: statistics.get(Counters::RoundsDispatched),
        statistics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_five_board() {
        let config = DriverConfig::default().with_split_depth(1).with_threads(1);
        let report = count_solutions::<5>(&config).unwrap();
        assert_eq!(report.solutions, 10);
        assert_eq!(report.lanes, 5);
        assert_eq!(
            report.statistics.get(Counters::LanesRetired),
            report.lanes as u64
        );
    }

    #[test]
    fn test_tiny_quota_takes_many_rounds() {
        let config = DriverConfig::default()
            .with_split_depth(0)
            .with_steps_per_round(7)
            .with_threads(1);
        let report = count_solutions::<6>(&config).unwrap();
        assert_eq!(report.solutions, 4);
        assert!(report.rounds > 1);
    }

    #[test]
    fn test_split_depth_must_leave_rows() {
        let config = DriverConfig::default().with_split_depth(4);
        let err = count_solutions::<4>(&config).unwrap_err();
        assert_eq!(
            err,
            ConfigError::SplitDepthOutOfRange {
                split_depth: 4,
                board: 4
            }
        );
    }

    #[test]
    fn test_zero_quota_rejected() {
        let config = DriverConfig::default().with_steps_per_round(0);
        assert_eq!(
            count_solutions::<8>(&config).unwrap_err(),
            ConfigError::ZeroStepQuota
        );
    }
}
