// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Summation strategies over a block of integers.
//!
//! All strategies accumulate with plain `u64` addition; the caller is
//! responsible for keeping the total within `u64` range.

/// Sums the block with an explicit loop and a mutable accumulator.
pub fn sum_loop(block: &[u64]) -> u64 {
    let mut sum = 0;
    for &x in block {
        sum += x;
    }
    sum
}

/// Sums the block with the standard library's [`Iterator::sum()`].
pub fn sum_iter(block: &[u64]) -> u64 {
    block.iter().sum()
}

/// Sums the block by folding with a zero seed, the reduce-style strategy.
pub fn sum_fold(block: &[u64]) -> u64 {
    block.iter().fold(0, |sum, &x| sum + x)
}
