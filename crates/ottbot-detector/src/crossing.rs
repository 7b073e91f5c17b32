//! Two-sample crossing tests.
//!
//! A crossing consults only the last two points of each series: the
//! earlier point must be strictly on one side of the reference and the
//! latest point on the other side or exactly touching it. The test is
//! level-triggered per bar; edge-triggering across bars is handled by
//! the lifecycle engine's re-entry latch.

use rust_decimal::Decimal;

/// `a` crossed above `b`: previously strictly below, now at or above.
pub fn crossed_above(a: &[Decimal], b: &[Decimal]) -> bool {
    match (last_two(a), last_two(b)) {
        (Some((a_prev, a_now)), Some((b_prev, b_now))) => a_prev < b_prev && a_now >= b_now,
        _ => false,
    }
}

/// `a` crossed below `b`: previously strictly above, now at or below.
pub fn crossed_below(a: &[Decimal], b: &[Decimal]) -> bool {
    match (last_two(a), last_two(b)) {
        (Some((a_prev, a_now)), Some((b_prev, b_now))) => a_prev > b_prev && a_now <= b_now,
        _ => false,
    }
}

fn last_two(series: &[Decimal]) -> Option<(Decimal, Decimal)> {
    let n = series.len();
    if n < 2 {
        return None;
    }
    Some((series[n - 2], series[n - 1]))
}
