// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Build script to emit custom cfg flags based on board-size feature selection.
//!
//! This enables cleaner conditional compilation in tests:
//! - `#[cfg(board_le_10)]` instead of `#[cfg(any(feature = "queens_8", feature = "queens_10"))]`
//! - `#[cfg(board_le_12)]` for boards small enough to enumerate fully in debug test runs

fn main() {
    // Declare the custom cfg names to avoid warnings
    println!("cargo:rustc-check-cfg=cfg(board_le_10)");
    println!("cargo:rustc-check-cfg=cfg(board_le_12)");

    // BOARD_SIZE <= 10
    #[cfg(any(feature = "queens_8", feature = "queens_10"))]
    println!("cargo:rustc-cfg=board_le_10");

    // BOARD_SIZE <= 12
    #[cfg(any(feature = "queens_8", feature = "queens_10", feature = "queens_12"))]
    println!("cargo:rustc-cfg=board_le_12");
}
