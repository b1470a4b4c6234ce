// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Population of the block of the first N positive integers.

/// Builds the block `[1, 2, ..., len]` by growing a vector one push at a
/// time.
///
/// No capacity hint: incremental growth is part of what this strategy
/// measures. [`populate_collect()`] builds the same block from a range.
pub fn populate(len: u64) -> Vec<u64> {
    let mut block = Vec::new();
    for i in 1..=len {
        block.push(i);
    }
    block
}

/// Builds the block `[1, 2, ..., len]` by collecting a range, with the
/// capacity known up front.
pub fn populate_collect(len: u64) -> Vec<u64> {
    (1..=len).collect()
}

/// Returns the sum of the first `len` positive integers in closed form,
/// `len * (len + 1) / 2`.
///
/// The product is computed in `u128`, so the result is exact for every `len`
/// whose true sum fits in a `u64`.
pub fn expected_sum(len: u64) -> u64 {
    (u128::from(len) * (u128::from(len) + 1) / 2) as u64
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn populate_zero_is_empty() {
        assert!(populate(0).is_empty());
        assert!(populate_collect(0).is_empty());
    }

    #[test]
    fn populate_is_ascending_from_one() {
        assert_eq!(populate(5), [1, 2, 3, 4, 5]);
        assert_eq!(populate_collect(5), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn populate_strategies_agree() {
        for len in [0, 1, 2, 100, 400_000] {
            let block = populate(len);
            assert_eq!(block.len() as u64, len);
            assert_eq!(block, populate_collect(len));
        }
    }

    #[test]
    fn expected_sum_closed_form() {
        assert_eq!(expected_sum(0), 0);
        assert_eq!(expected_sum(1), 1);
        assert_eq!(expected_sum(2), 3);
        assert_eq!(expected_sum(100), 5_050);
        assert_eq!(expected_sum(400_000), 80_000_200_000);
    }

    #[test]
    fn expected_sum_no_intermediate_overflow() {
        // The product len * (len + 1) overflows u64 long before the sum
        // itself does.
        let len = 6_000_000_000;
        assert_eq!(expected_sum(len), 18_000_000_003_000_000_000);
    }
}
