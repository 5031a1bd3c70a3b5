//! Cubic easing lookup for volume transitions
//!
//! A 4000-entry table of `x^3` over `[0, 1]`, built once per process and
//! shared read-only across all mix calls. Lookups take the nearest lower
//! index with no blending between adjacent entries, so the curve is
//! stepped at table resolution.

use std::sync::OnceLock;

const TABLE_SIZE: usize = 4000;

fn table() -> &'static [f64] {
    static EASING_TABLE: OnceLock<Vec<f64>> = OnceLock::new();
    EASING_TABLE.get_or_init(|| {
        (0..TABLE_SIZE)
            .map(|i| {
                let x = i as f64 / (TABLE_SIZE - 1) as f64;
                x * x * x
            })
            .collect()
    })
}

/// Map an eased progress value into `[from, to]`
///
/// `x` is clamped to `[0, 1]` before lookup, so out-of-range progress
/// (including the `length == 0` degenerate fade) saturates at the
/// endpoints instead of indexing out of bounds.
pub fn ease(x: f64, from: f64, to: f64) -> f64 {
    let x = x.clamp(0.0, 1.0);
    let index = (x * (TABLE_SIZE - 1) as f64).floor() as usize;
    from + table()[index] * (to - from)
}
