//! Decimal rounding used to keep float drift out of exact comparisons.

/// Quotients `|x| / 10^e` at or above this are returned unchanged: the f64
/// grid there is already finer than a quarter unit, and re-rounding the
/// product `m * 10^e` would no longer land on the same `m`.
const EXACT_QUOTIENT: f64 = (1u64 << 50) as f64;

/// Round `x` to the nearest multiple of `10^e`, halves away from zero.
///
/// `e` may be negative (sub-unit places) or non-negative. Rounding twice at
/// the same place gives the same value as rounding once.
///
/// ```
/// use randvariate::round;
///
/// assert_eq!(round(0.05, -1), 0.1);
/// assert_eq!(round(-0.8e1, 1), -10.0);
/// ```
pub fn round(x: f64, e: i32) -> f64 {
    // 1 / 10^n is the correctly rounded decimal, 10^-n via powi is not always.
    let unit = if e < 0 {
        1.0 / 10f64.powi(-e)
    } else {
        10f64.powi(e)
    };
    if unit.is_infinite() {
        return 0.0f64.copysign(x);
    }
    if unit == 0.0 {
        return x;
    }
    let q = x.abs() / unit;
    if q >= EXACT_QUOTIENT {
        return x;
    }
    let v = (q + 0.5).floor() * unit;
    if x.is_sign_negative() { -v } else { v }
}
