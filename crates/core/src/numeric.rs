//! Signed integer semantics: ranges, literals, wraparound, casts, promotion
//!
//! Every overflow demonstration in this module goes through an explicit
//! `wrapping_*` operation. Plain `+` panics on overflow in debug builds, and
//! the tour's contract is that overflow wraps silently, so plain arithmetic
//! on values that can overflow is never used here.
//!
//! ## Cast rules demonstrated
//!
//! - **Widening** (`i8` -> `i32`, `i32` -> `i64`): lossless, via `From`.
//! - **Narrowing** (`i64` -> `i8`, `i32` -> `i16`): reduces modulo 2^width
//!   (two's-complement truncation), never saturates.
//! - **Float truncation** (`f64` -> `i32`): drops the fractional part,
//!   never rounds.

use serde::{Deserialize, Serialize};

/// Range of one signed integer width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    /// Width in bits (8, 16, 32, or 64)
    pub bits: u32,
    /// Minimum representable value
    pub min: i64,
    /// Maximum representable value
    pub max: i64,
}

/// Ranges of the four signed integer widths, narrowest first
pub fn signed_ranges() -> [IntRange; 4] {
    [
        IntRange {
            bits: 8,
            min: i64::from(i8::MIN),
            max: i64::from(i8::MAX),
        },
        IntRange {
            bits: 16,
            min: i64::from(i16::MIN),
            max: i64::from(i16::MAX),
        },
        IntRange {
            bits: 32,
            min: i64::from(i32::MIN),
            max: i64::from(i32::MAX),
        },
        IntRange {
            bits: 64,
            min: i64::MIN,
            max: i64::MAX,
        },
    ]
}

/// Integer literal notations, all fixed values
///
/// Hex, binary (with digit grouping), octal, and a 64-bit literal with
/// digit grouping. The grouping underscores are a source notation only;
/// the values are ordinary integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiteralShowcase {
    /// `0xFF`
    pub hex: i32,
    /// `0b1010_0110`
    pub binary: i32,
    /// `0o777`
    pub octal: i32,
    /// `12_345_678_901`
    pub grouped: i64,
}

/// The fixed literal set the tour prints
pub fn literal_showcase() -> LiteralShowcase {
    LiteralShowcase {
        hex: 0xFF,
        binary: 0b1010_0110,
        octal: 0o777,
        grouped: 12_345_678_901,
    }
}

/// 32-bit addition with two's-complement wraparound
///
/// `wrapping_add_i32(i32::MAX, 1)` is `i32::MIN`; no value of `a` and `b`
/// can make this panic.
pub fn wrapping_add_i32(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Lossless widening of an 8-bit value into 32 bits
pub fn widen_i8_to_i32(v: i8) -> i32 {
    i32::from(v)
}

/// Narrow a 64-bit value to 8 bits by modulo-2^8 wraparound
pub fn truncate_i64_to_i8(v: i64) -> i8 {
    v as i8
}

/// Narrow a 32-bit value to 16 bits by modulo-2^16 wraparound
pub fn truncate_i32_to_i16(v: i32) -> i16 {
    v as i16
}

/// Truncate a float to its integer part (toward zero, no rounding)
pub fn truncate_f64_to_i32(v: f64) -> i32 {
    v as i32
}

/// Result of summing two 8-bit values under promotion rules
///
/// The raw sum is computed at 32-bit width, then narrowed back to 8 bits,
/// then promoted further: to 64 bits by adding a 64-bit literal, and to
/// floating point by adding a fractional literal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PromotionChain {
    /// The sum at 32-bit width, before any narrowing
    pub wide: i32,
    /// The sum explicitly narrowed back to 8 bits
    pub narrowed: i8,
    /// `wide + 5` carried at 64-bit width
    pub widened: i64,
    /// `widened + 0.5` carried as a 64-bit float
    pub as_float: f64,
}

/// Sum two 8-bit values the way expression promotion does it
pub fn promote_and_sum(x: i8, y: i8) -> PromotionChain {
    let wide = i32::from(x).wrapping_add(i32::from(y));
    let widened = i64::from(wide).wrapping_add(5);
    PromotionChain {
        wide,
        narrowed: wide as i8,
        widened,
        as_float: widened as f64 + 0.5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_signed_ranges_values() {
        let ranges = signed_ranges();
        assert_eq!(ranges[0].min, -128);
        assert_eq!(ranges[0].max, 127);
        assert_eq!(ranges[1].min, -32_768);
        assert_eq!(ranges[1].max, 32_767);
        assert_eq!(ranges[2].min, -2_147_483_648);
        assert_eq!(ranges[2].max, 2_147_483_647);
        assert_eq!(ranges[3].min, i64::MIN);
        assert_eq!(ranges[3].max, i64::MAX);
    }

    #[test]
    fn test_signed_ranges_ordered_by_width() {
        let ranges = signed_ranges();
        for pair in ranges.windows(2) {
            assert!(pair[0].bits < pair[1].bits);
            assert!(pair[0].min > pair[1].min);
            assert!(pair[0].max < pair[1].max);
        }
    }

    #[test]
    fn test_literal_showcase_values() {
        let lits = literal_showcase();
        assert_eq!(lits.hex, 255);
        assert_eq!(lits.binary, 166);
        assert_eq!(lits.octal, 511);
        assert_eq!(lits.grouped, 12_345_678_901);
    }

    #[test]
    fn test_max_plus_one_wraps_to_min() {
        assert_eq!(wrapping_add_i32(i32::MAX, 1), i32::MIN);
    }

    #[test]
    fn test_min_minus_one_wraps_to_max() {
        assert_eq!(wrapping_add_i32(i32::MIN, -1), i32::MAX);
    }

    #[test]
    fn test_widening_preserves_value() {
        assert_eq!(widen_i8_to_i32(i8::MAX), 127);
        assert_eq!(widen_i8_to_i32(i8::MIN), -128);
    }

    #[test]
    fn test_narrowing_wraps_not_saturates() {
        // i64::MAX is 0x7FFF_FFFF_FFFF_FFFF; its low byte is 0xFF, i.e. -1.
        assert_eq!(truncate_i64_to_i8(i64::MAX), -1);
        // Saturation would have produced i8::MAX instead.
        assert_ne!(truncate_i64_to_i8(i64::MAX), i8::MAX);
        // 1_000_000 = 0xF4240; its low 16 bits are 0x4240 = 16960.
        assert_eq!(truncate_i32_to_i16(1_000_000), 16_960);
    }

    #[test]
    fn test_float_truncation_drops_fraction() {
        assert_eq!(truncate_f64_to_i32(12345.6789), 12_345);
        assert_eq!(truncate_f64_to_i32(-2.9), -2);
    }

    #[test]
    fn test_promotion_chain() {
        let chain = promote_and_sum(10, 20);
        assert_eq!(chain.wide, 30);
        assert_eq!(chain.narrowed, 30);
        assert_eq!(chain.widened, 35);
        assert!((chain.as_float - 35.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_promotion_sum_exceeding_i8() {
        // 100 + 100 overflows i8, but the sum is carried at i32 width.
        let chain = promote_and_sum(100, 100);
        assert_eq!(chain.wide, 200);
        // Narrowing 200 back to i8 wraps to -56.
        assert_eq!(chain.narrowed, -56);
    }

    #[test]
    fn test_int_range_serde_roundtrip() {
        let range = signed_ranges()[2];
        let json = serde_json::to_string(&range).unwrap();
        let back: IntRange = serde_json::from_str(&json).unwrap();
        assert_eq!(range, back);
    }

    proptest! {
        // Wraparound law: wrapping addition agrees with arithmetic modulo 2^32.
        #[test]
        fn prop_wrapping_add_matches_mod_2_32(a: i32, b: i32) {
            let wrapped = wrapping_add_i32(a, b);
            let exact = i64::from(a) + i64::from(b);
            prop_assert_eq!(
                i64::from(wrapped).rem_euclid(1_i64 << 32),
                exact.rem_euclid(1_i64 << 32)
            );
        }

        // Widen-then-narrow is the identity for every 8-bit value.
        #[test]
        fn prop_widen_narrow_roundtrip(v: i8) {
            prop_assert_eq!(truncate_i64_to_i8(i64::from(widen_i8_to_i32(v))), v);
        }

        // Narrowing agrees with the low byte reinterpreted as signed.
        #[test]
        fn prop_narrowing_is_low_byte(v: i64) {
            let low = (v & 0xFF) as u8;
            prop_assert_eq!(truncate_i64_to_i8(v), low as i8);
        }
    }
}
