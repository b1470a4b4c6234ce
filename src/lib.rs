// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![doc = include_str!("../README.md")]
#![forbid(missing_docs, unsafe_code)]

mod block;
mod stopwatch;
mod sum;

pub use block::{expected_sum, populate, populate_collect};
pub use stopwatch::time;
pub use sum::{sum_fold, sum_iter, sum_loop};
