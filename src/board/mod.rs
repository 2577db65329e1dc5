// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Board-size configuration and bitmask algebra.
//!
//! A board of size `Q` is represented entirely as `Q`-bit masks over the
//! columns of a single row. The three attack accumulators (`rook`, `add`,
//! `sub`) are kept shifted to a shared reference row so that one OR and
//! one complement produce the candidate set for any row; the helpers in
//! [`mask`] implement the handful of primitive operations that the engine
//! is built from.

pub mod constants;
pub mod mask;

pub use constants::{BOARD_SIZE, MAX_BOARD_SIZE};
pub use mask::Mask;
