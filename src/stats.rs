//! Price statistics over a route's tickets.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places used when reporting the mean/median difference.
pub const DIFF_SCALE: u32 = 2;

/// Arithmetic mean. Returns 0.0 for empty input.
///
/// Prices are summed as `i64`, so no realistic input length can overflow.
pub fn mean(prices: &[i32]) -> f64 {
    if prices.is_empty() {
        return 0.0;
    }
    prices.iter().map(|&p| i64::from(p)).sum::<i64>() as f64 / prices.len() as f64
}

/// Median of the prices. An even count averages the two middle values.
/// Returns 0.0 for empty input.
pub fn median(prices: &[i32]) -> f64 {
    if prices.is_empty() {
        return 0.0;
    }

    let mut sorted = prices.to_vec();
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0
    } else {
        sorted[mid] as f64
    }
}

/// `|mean - median|`, rounded half-up to [`DIFF_SCALE`] places.
pub fn mean_median_diff(prices: &[i32]) -> Decimal {
    let diff = (mean(prices) - median(prices)).abs();
    round_half_up(diff, DIFF_SCALE)
}

/// Rounds `value` to `places` decimals, sending exact halves away from zero.
///
/// Rounding works on the shortest decimal text of the float, so `12.345`
/// becomes `12.35` even though its binary value sits slightly below the half.
/// The result always carries exactly `places` decimals.
pub fn round_half_up(value: f64, places: u32) -> Decimal {
    let exact = value
        .to_string()
        .parse::<Decimal>()
        .ok()
        .or_else(|| Decimal::from_f64(value))
        .unwrap_or_default();

    let mut rounded = exact.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(places);
    rounded
}
