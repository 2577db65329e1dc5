// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time board-size constants.
//!
//! This module defines BOARD_SIZE (the board side length used by the
//! `queens` binary) and the limits every board size must respect.
//! BOARD_SIZE can be configured at compile time via cargo features.
//!
//! # Supported BOARD_SIZE values
//!
//! - 8: the classic puzzle (92 solutions), instant even in debug builds
//! - 10, 12: small benchmark boards
//! - 14: **default** (365,596 solutions)
//! - 15, 16: larger benchmark boards
//!
//! # Example
//!
//! ```bash
//! # Default: BOARD_SIZE=14
//! cargo build --release
//!
//! # Build the driver for BOARD_SIZE=15
//! cargo build --release --features queens_15
//! ```
//!
//! The library itself is generic over the board size (`SearchState<Q>`),
//! so tests exercise many sizes in one build; BOARD_SIZE only selects
//! what the driver binary runs.

/// Board side length for the driver binary.
///
/// This is configurable at compile time via cargo features:
/// - `queens_8` → BOARD_SIZE=8
/// - `queens_10` → BOARD_SIZE=10
/// - `queens_12` → BOARD_SIZE=12
/// - `queens_14` → BOARD_SIZE=14 (explicit)
/// - `queens_15` → BOARD_SIZE=15
/// - `queens_16` → BOARD_SIZE=16
/// - (default) → BOARD_SIZE=14 (when no feature specified)
#[cfg(not(any(
    feature = "queens_8",
    feature = "queens_10",
    feature = "queens_12",
    feature = "queens_14",
    feature = "queens_15",
    feature = "queens_16"
)))]
pub const BOARD_SIZE: usize = 14;

#[cfg(feature = "queens_8")]
pub const BOARD_SIZE: usize = 8;

#[cfg(feature = "queens_10")]
pub const BOARD_SIZE: usize = 10;

#[cfg(feature = "queens_12")]
pub const BOARD_SIZE: usize = 12;

#[cfg(feature = "queens_14")]
pub const BOARD_SIZE: usize = 14;

#[cfg(feature = "queens_15")]
pub const BOARD_SIZE: usize = 15;

#[cfg(feature = "queens_16")]
pub const BOARD_SIZE: usize = 16;

/// Largest supported board size.
///
/// Column masks occupy the low `Q` bits of a [`crate::board::Mask`], but
/// the two diagonal accumulators are stored shifted to a shared reference
/// row and can carry set bits up to index `2*Q - 2`. With 64-bit masks
/// that bounds `Q` at 32.
pub const MAX_BOARD_SIZE: usize = 32;

/// Compile-time assertion that we're on a 64-bit architecture.
///
/// Mask arithmetic and the shift bookkeeping assume 64-bit words.
/// This assertion will cause a compile-time error on 32-bit systems.
const _: () = assert!(
    std::mem::size_of::<usize>() == 8,
    "64-bit architecture required"
);

/// Compile-time assertion that the configured driver board fits the mask width.
const _: () = assert!(
    BOARD_SIZE >= 1 && BOARD_SIZE <= MAX_BOARD_SIZE,
    "BOARD_SIZE must be in 1..=MAX_BOARD_SIZE"
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::mask::full_board;

    #[test]
    #[allow(clippy::assertions_on_constants)] // Validates compile-time constant
    fn test_board_size_in_valid_range() {
        assert!(
            BOARD_SIZE >= 8 && BOARD_SIZE <= 16,
            "feature-selectable BOARD_SIZE must be 8, 10, 12, 14, 15, or 16"
        );
    }

    #[test]
    fn test_diagonal_headroom() {
        // The most-shifted diagonal bit for the largest board must stay
        // inside a 64-bit mask.
        assert!(2 * MAX_BOARD_SIZE - 1 <= 64);
        let widest = full_board(MAX_BOARD_SIZE);
        assert_eq!(widest.count_ones() as usize, MAX_BOARD_SIZE);
    }
}
