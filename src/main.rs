// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! CLI micro-benchmark: populates a block of integers and times two ways of
//! summing it.

use blocksum::{expected_sum, populate, sum_fold, sum_loop, time};
use clap::Parser;
use std::hint::black_box;

/// Populates a block of the first `block_size` positive integers and times
/// two ways of summing it.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Number of integers in the block.
    #[arg(long, default_value_t = 400_000)]
    block_size: u64,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!(
        "closed form: expected_sum({}) = {}",
        cli.block_size,
        expected_sum(cli.block_size)
    );

    let (block, elapsed) = time(|| populate(black_box(cli.block_size)));
    println!("populate: {elapsed:?}");
    println!("Block of size: {}", block.len());

    let (sum, elapsed) = time(|| sum_loop(black_box(&block)));
    println!("Sum using loop: {elapsed:?}");
    println!("Sum: {sum}");

    let (sum, elapsed) = time(|| sum_fold(black_box(&block)));
    println!("Sum using reduce: {elapsed:?}");
    println!("Sum: {sum}");
}
