//! Conversions between the JSON time representations (epoch milliseconds,
//! fractional seconds) and the protobuf `{seconds, nanos}` pairs.

pub const MILLIS_PER_SECOND: i64 = 1_000;
pub const NANOS_PER_MILLI: i32 = 1_000_000;
pub const NANOS_PER_SECOND: i32 = 1_000_000_000;

/// Split epoch milliseconds into `(seconds, nanos)` with `nanos` in `[0, 1e9)`.
pub fn millis_to_timestamp(millis: i64) -> (i64, i32) {
    let seconds = millis.div_euclid(MILLIS_PER_SECOND);
    // rem_euclid is in [0, 1000), the product fits i32.
    let nanos = millis.rem_euclid(MILLIS_PER_SECOND) as i32 * NANOS_PER_MILLI;
    (seconds, nanos)
}

/// Join `(seconds, nanos)` into epoch milliseconds, truncating sub-millisecond
/// precision.
pub fn timestamp_to_millis(seconds: i64, nanos: i32) -> i64 {
    seconds
        .saturating_mul(MILLIS_PER_SECOND)
        .saturating_add(i64::from(nanos / NANOS_PER_MILLI))
}

/// Split fractional seconds into a `(seconds, nanos)` duration. Both parts
/// carry the same sign.
pub fn seconds_to_duration(secs: f64) -> (i64, i32) {
    let whole = secs.trunc();
    let mut seconds = whole as i64;
    let mut nanos = ((secs - whole) * f64::from(NANOS_PER_SECOND)).round() as i32;
    if nanos >= NANOS_PER_SECOND {
        seconds = seconds.saturating_add(1);
        nanos -= NANOS_PER_SECOND;
    } else if nanos <= -NANOS_PER_SECOND {
        seconds = seconds.saturating_sub(1);
        nanos += NANOS_PER_SECOND;
    }
    (seconds, nanos)
}

pub fn duration_to_seconds(seconds: i64, nanos: i32) -> f64 {
    seconds as f64 + f64::from(nanos) / f64::from(NANOS_PER_SECOND)
}
