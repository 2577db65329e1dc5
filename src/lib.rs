// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Resumable bitmask N-queens solution counter.
//!
//! The core is a non-recursive backtracking search expressed as an
//! explicit state machine, designed to run as one independent search per
//! parallel lane and to be suspended and resumed across invocation
//! boundaries that impose a bounded number of steps per call.
//!
//! # Architecture
//!
//! Two tightly coupled facets of one algorithm:
//!
//! ## State Model ([`state`])
//!
//! [`SearchState`] is the complete, serializable record of one lane's
//! in-progress search: the per-row undo log of candidate masks, the three
//! pre-shifted attack accumulators, the state-machine phase, and the
//! solution count. There is no call stack to preserve; the record is the
//! whole continuation.
//!
//! ## Step Engine ([`engine`])
//!
//! The transition function that advances a record - either to completion
//! ([`engine::run`]) or by a bounded step quota ([`engine::advance`]),
//! returning with the record persisted so a later call resumes with
//! bit-for-bit identical behavior.
//!
//! # Search Algorithm
//!
//! Candidate columns for a row are the complement of
//! `rook | (add >> col) | (sub >> (Q-1-col))`, masked to the board width:
//! the two diagonal accumulators are pre-shifted so a uniform right shift
//! projects their occupancy onto any row, and a single OR tests all three
//! attack families at once. Candidates are tried lowest-bit-first, so the
//! enumeration order is deterministic and reproducible.
//!
//! # Parallelization
//!
//! Lanes are embarrassingly parallel: [`partition::split`] assigns each
//! lane a distinct legal prefix of the first `depth` rows (`start_col`
//! marks the row above which the lane never backtracks), and the
//! [`driver`] dispatches bounded rounds over all unfinished lanes,
//! summing per-lane counts once every lane retires. No state is shared
//! while lanes run.

pub mod board;
pub mod driver;
pub mod engine;
pub mod partition;
pub mod state;

// Re-export commonly used types
pub use engine::{advance, run, EngineStatus};
pub use state::{SearchState, Step};
