//! Linear vesting curve (cliff, then straight-line release).
//! - elapsed < cliff:                     nothing vested
//! - elapsed >= cliff + vesting duration: fully vested
//! - in between:                          share * (elapsed - cliff) / duration, floored

/// Seconds elapsed since `start_ts`, clamped to zero for pre-start clocks.
pub fn elapsed_since(start_ts: i64, now: i64) -> u64 {
    now.saturating_sub(start_ts).max(0) as u64
}

/// Tokens vested out of a single `share` at `now`.
///
/// Returns 0 until the cliff has fully elapsed and the whole `share` once
/// `cliff_seconds + vesting_seconds` have passed since `start_ts`. In between
/// the release is linear in whole seconds with floor rounding, so the result
/// never exceeds `share`.
pub fn vested_amount(
    share: u64,
    cliff_seconds: u64,
    vesting_seconds: u64,
    start_ts: i64,
    now: i64,
) -> u64 {
    let elapsed = elapsed_since(start_ts, now);
    if elapsed < cliff_seconds {
        return 0;
    }
    let in_vesting = elapsed - cliff_seconds;
    if in_vesting >= vesting_seconds {
        // Fully vested; also covers vesting_seconds == 0.
        return share;
    }
    // u128 widening: the product of two u64s always fits, quotient <= share.
    ((share as u128 * in_vesting as u128) / vesting_seconds as u128) as u64
}
