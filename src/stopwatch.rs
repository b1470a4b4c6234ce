// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::time::{Duration, Instant};

/// Runs the closure once, returning its output together with the elapsed
/// wall-clock time.
///
/// This is single-shot timing, good enough for the coarse phase timings the
/// binary prints. For statistical comparisons of the strategies, use the
/// Criterion and Divan harnesses under `benches/`.
pub fn time<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let output = f();
    (output, start.elapsed())
}
