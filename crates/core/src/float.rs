//! IEEE-754 floating-point semantics
//!
//! Overflow and invalid operations are values here, not faults: multiplying
//! past `f64::MAX` yields infinity, `0.0 / 0.0` yields NaN, and both
//! propagate silently through further arithmetic. Direct equality on
//! computed decimals is unreliable; [`approx_eq`] is the tolerant form.

/// A double near the top of the f64 range
pub const NEAR_MAX: f64 = 1e308;

/// Tolerance used by the tour's epsilon comparisons
pub const EPSILON: f64 = 1e-9;

/// Overflow `NEAR_MAX` past the representable range
///
/// IEEE-754 overflow rounds to positive infinity, not an error.
pub fn overflow_to_infinity() -> f64 {
    NEAR_MAX * 10.0
}

/// The invalid operation `0.0 / 0.0`
///
/// Floating division by zero is defined: `0.0 / 0.0` is NaN (a nonzero
/// numerator would give infinity). Only integer division by zero faults.
pub fn zero_over_zero() -> f64 {
    let zero = 0.0_f64;
    zero / zero
}

/// Narrow a double to single precision, losing mantissa bits
pub fn narrow_f64_to_f32(v: f64) -> f32 {
    v as f32
}

/// Approximate equality within a tolerance
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() < tolerance
}

/// Accumulate `step` into a zero-valued f64, `times` repeated additions
///
/// Repeated addition (not one multiplication) so each step's representation
/// error compounds. Ten additions of 0.1 land near 1.0 but not exactly on it.
pub fn accumulate(step: f64, times: u32) -> f64 {
    let mut total = 0.0_f64;
    for _ in 0..times {
        total += step;
    }
    total
}
