// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `queens` - count N-queens solutions for the compiled-in board size.
//!
//! The board side length is fixed at build time (see
//! [`queens_search::board::constants`]); this binary only chooses how the
//! search space is partitioned into lanes and how those lanes are
//! scheduled.

use clap::Parser;
use log::info;
use queens_search::board::BOARD_SIZE;
use queens_search::driver::{count_solutions, Counters, DriverConfig};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "queens")]
#[command(about = "Count N-queens solutions with statically partitioned parallel lanes")]
#[command(version)]
struct Args {
    /// Rows pre-assigned per lane (0 = a single full-board lane)
    #[arg(long, default_value_t = 2)]
    split_depth: usize,

    /// Engine step quota per lane per dispatch round
    #[arg(long, default_value_t = 1 << 20)]
    steps_per_round: u64,

    /// Worker threads (0 = automatic)
    #[arg(long, default_value_t = 0)]
    threads: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = DriverConfig::default()
        .with_split_depth(args.split_depth)
        .with_steps_per_round(args.steps_per_round)
        .with_threads(args.threads);

    let started = Instant::now();
    let report = match count_solutions::<BOARD_SIZE>(&config) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("queens: {}", err);
            std::process::exit(2);
        }
    };

    info!(
        "{} lanes retired over {} rounds in {:.3}s",
        report.statistics.get(Counters::LanesRetired),
        report.rounds,
        started.elapsed().as_secs_f64()
    );

    println!("Q({})={}", BOARD_SIZE, report.solutions);
}
