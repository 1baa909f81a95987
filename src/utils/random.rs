use chrono::{Duration, NaiveDateTime};
use rand::Rng;
use rust_decimal::Decimal;

/// Fractional digits carried by every generated amount.
pub const AMOUNT_SCALE: u32 = 4;

// 999.9999 expressed as an integer mantissa at AMOUNT_SCALE.
const MAX_AMOUNT_MANTISSA: i64 = 9_999_999;

/// Positive amount with three integer and four fractional digits.
pub fn random_amount<R: Rng + ?Sized>(rng: &mut R) -> Decimal {
    let mantissa = rng.gen_range(1..=MAX_AMOUNT_MANTISSA);
    Decimal::new(mantissa, AMOUNT_SCALE)
}

/// Uniform timestamp in `[start, end]` at whole-second resolution.
///
/// Callers guarantee `start <= end`.
pub fn random_timestamp<R: Rng + ?Sized>(
    rng: &mut R,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> NaiveDateTime {
    let span = (end - start).num_seconds().max(0);
    let offset = rng.gen_range(0..=span);
    start + Duration::seconds(offset)
}
