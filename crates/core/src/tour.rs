//! The demonstration runner
//!
//! [`run`] executes a fixed, non-configurable sequence of demonstrations and
//! writes one formatted line per behavior or group, in a deterministic
//! order, to the provided sink. The wording of each line is presentation;
//! the computed values and their relative order are the contract.
//!
//! Nothing here can panic: all overflowing arithmetic goes through the
//! wrapping helpers in [`crate::numeric`], and floating special values are
//! ordinary outputs. The only error path is a failed write to the sink.

use std::io::Write;

use tracing::debug;

use crate::boxed::{BoxedInt, IntCache, CACHE_MAX, CACHE_MIN};
use crate::error::Result;
use crate::float;
use crate::greet::{ConsoleGreeter, Greeter};
use crate::numeric;
use crate::person::PersonHandle;
use crate::sequence::SharedSeq;
use crate::text::{self, CodeUnit};
use crate::weekday::Weekday;

/// Run the full tour against `out`
///
/// # Errors
///
/// Returns an error if a write to `out` fails; the demonstration sequence
/// itself has no failure modes.
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "=== Primitive vs Reference Semantics Tour ===")?;

    integer_ranges(out)?;
    integer_literals(out)?;
    integer_overflow(out)?;
    integer_casts(out)?;
    float_specials(out)?;
    float_epsilon(out)?;
    code_units(out)?;
    logicals(out)?;
    boxing(out)?;
    boxed_identity(out)?;
    text_replace(out)?;
    sequences(out)?;
    nested_sequences(out)?;
    weekday(out)?;
    shared_record(out)?;
    greeting(out)?;
    promotion(out)?;
    narrowing_pitfalls(out)?;
    absent_and_empty(out)?;

    demo_sequence_aliasing(out)?;
    demo_text_immutability(out)?;
    demo_float_accumulation(out)?;

    Ok(())
}

fn integer_ranges<W: Write>(out: &mut W) -> Result<()> {
    debug!("section: integer ranges");
    for range in numeric::signed_ranges() {
        writeln!(out, "i{:<2} range      : {} .. {}", range.bits, range.min, range.max)?;
    }
    Ok(())
}

fn integer_literals<W: Write>(out: &mut W) -> Result<()> {
    debug!("section: integer literals");
    let lits = numeric::literal_showcase();
    writeln!(
        out,
        "hex 0xFF       : {}, binary 0b1010_0110 : {}, octal 0o777 : {}",
        lits.hex, lits.binary, lits.octal
    )?;
    writeln!(out, "grouped i64    : {}", lits.grouped)?;
    Ok(())
}

fn integer_overflow<W: Write>(out: &mut W) -> Result<()> {
    debug!("section: integer overflow");
    let wrapped = numeric::wrapping_add_i32(i32::MAX, 1);
    writeln!(out, "i32::MAX + 1   : {} (wraps to i32::MIN)", wrapped)?;
    Ok(())
}

fn integer_casts<W: Write>(out: &mut W) -> Result<()> {
    debug!("section: widening and narrowing");
    let widened = numeric::widen_i8_to_i32(i8::MAX);
    let narrowed = numeric::truncate_i64_to_i8(i64::MAX);
    writeln!(
        out,
        "widened i8->i32: {}, narrowed i64::MAX->i8: {} (wraparound, not saturation)",
        widened, narrowed
    )?;
    Ok(())
}

fn float_specials<W: Write>(out: &mut W) -> Result<()> {
    debug!("section: float special values");
    writeln!(out, "f32 pi         : {}", std::f32::consts::PI)?;
    writeln!(out, "f64 pi         : {}", std::f64::consts::PI)?;
    writeln!(out, "f64 big        : {:e}", float::NEAR_MAX)?;
    writeln!(out, "f64 big * 10   : {}", float::overflow_to_infinity())?;
    writeln!(out, "f64 0.0 / 0.0  : {}", float::zero_over_zero())?;
    writeln!(
        out,
        "f64 pi -> f32  : {}",
        float::narrow_f64_to_f32(std::f64::consts::PI)
    )?;
    Ok(())
}

fn float_epsilon<W: Write>(out: &mut W) -> Result<()> {
    debug!("section: epsilon comparison");
    let computed = 0.1 * 3.0;
    let direct = computed == 0.3;
    let tolerant = float::approx_eq(computed, 0.3, float::EPSILON);
    writeln!(
        out,
        "0.1 * 3 == 0.3 ? {} (direct) vs {} (epsilon)",
        direct, tolerant
    )?;
    Ok(())
}

fn code_units<W: Write>(out: &mut W) -> Result<()> {
    debug!("section: UTF-16 code units");
    let letter = CodeUnit::from_char('A').unwrap_or(CodeUnit::new(0x41));
    let heart = CodeUnit::new(0x2665);
    let decimal = CodeUnit::new(65);
    let surrogate = CodeUnit::new(0xD83D);
    writeln!(out, "unit literal   : {}", letter)?;
    writeln!(out, "unit U+2665    : {}", heart)?;
    writeln!(out, "unit decimal 65: {}", decimal)?;
    writeln!(
        out,
        "surrogate only : {} (needs a low surrogate to form a code point)",
        surrogate
    )?;
    Ok(())
}

fn logicals<W: Write>(out: &mut W) -> Result<()> {
    debug!("section: logical values");
    let feature_flag = true;
    let is_adult = 20 >= 18;
    writeln!(out, "flag: {}, 20 >= 18: {}", feature_flag, is_adult)?;
    Ok(())
}

fn boxing<W: Write>(out: &mut W) -> Result<()> {
    debug!("section: boxing and absence");
    let boxed = BoxedInt::new(42);
    let unboxed = boxed.value();
    let nullable: Option<BoxedInt> = None;
    writeln!(
        out,
        "boxed: {}, unboxed: {}, nullable absent? {}",
        boxed,
        unboxed,
        nullable.is_none()
    )?;
    Ok(())
}

fn boxed_identity<W: Write>(out: &mut W) -> Result<()> {
    debug!("section: boxed identity cache");
    let cache = IntCache::new();
    let a1 = cache.boxed(128);
    let a2 = cache.boxed(128);
    let c1 = cache.boxed(100);
    let c2 = cache.boxed(100);
    writeln!(
        out,
        "boxed 128 same instance? {} (outside cache)",
        BoxedInt::same_instance(&a1, &a2)
    )?;
    writeln!(
        out,
        "boxed 100 same instance? {} (inside cache {}..={})",
        BoxedInt::same_instance(&c1, &c2),
        CACHE_MIN,
        CACHE_MAX
    )?;
    Ok(())
}

fn text_replace<W: Write>(out: &mut W) -> Result<()> {
    debug!("section: text immutability");
    let course = String::from("Rust & Cargo");
    let updated = text::replaced(&course, "Rust", "Rust 2021");
    writeln!(out, "course: {} | updated: {}", course, updated)?;
    Ok(())
}

fn sequences<W: Write>(out: &mut W) -> Result<()> {
    debug!("section: fixed-length sequences");
    let scores = SharedSeq::new(vec![90, 85, 95]);
    writeln!(
        out,
        "scores length: {}, first: {}",
        scores.len(),
        scores.get(0).unwrap_or_default()
    )?;
    Ok(())
}

fn nested_sequences<W: Write>(out: &mut W) -> Result<()> {
    debug!("section: nested sequences");
    let matrix = [[1_i64, 2, 3], [4, 5, 6]];
    writeln!(out, "matrix[1][2]: {}", matrix[1][2])?;
    Ok(())
}

fn weekday<W: Write>(out: &mut W) -> Result<()> {
    debug!("section: weekday enum");
    let today = Weekday::Wednesday;
    writeln!(
        out,
        "today is: {}, weekend? {}",
        today,
        today.is_weekend()
    )?;
    Ok(())
}

fn shared_record<W: Write>(out: &mut W) -> Result<()> {
    debug!("section: shared record handles");
    let p1 = PersonHandle::new("Ada", 36);
    let p2 = p1.clone();
    p2.set_age(37);
    writeln!(out, "age via first handle after write through second: {}", p1.age())?;
    Ok(())
}

fn greeting<W: Write>(out: &mut W) -> Result<()> {
    debug!("section: greeting capability");
    let greeter: &dyn Greeter = &ConsoleGreeter;
    greeter.greet("developers", out)
}

fn promotion<W: Write>(out: &mut W) -> Result<()> {
    debug!("section: promotion chain");
    let chain = numeric::promote_and_sum(10, 20);
    writeln!(
        out,
        "i8 sum narrowed: {}, wide i32: {}, + 5i64: {}, + 0.5: {}",
        chain.narrowed, chain.wide, chain.widened, chain.as_float
    )?;
    Ok(())
}

fn narrowing_pitfalls<W: Write>(out: &mut W) -> Result<()> {
    debug!("section: narrowing pitfalls");
    let narrowed = numeric::truncate_i32_to_i16(1_000_000);
    let truncated = numeric::truncate_f64_to_i32(12345.6789);
    writeln!(
        out,
        "1_000_000 -> i16: {}, 12345.6789 -> i32: {}",
        narrowed, truncated
    )?;
    Ok(())
}

fn absent_and_empty<W: Write>(out: &mut W) -> Result<()> {
    debug!("section: absent vs empty");
    let absent: Option<String> = None;
    let empty = String::new();
    let zero_len = SharedSeq::new(vec![]);
    writeln!(
        out,
        "text absent? {}, empty text length: {}, empty sequence length: {}",
        absent.is_none(),
        empty.len(),
        zero_len.len()
    )?;
    Ok(())
}

/// Aliasing helper: a write through the alias is read through the original
fn demo_sequence_aliasing<W: Write>(out: &mut W) -> Result<()> {
    debug!("helper: sequence aliasing");
    let original = SharedSeq::new(vec![1, 2, 3]);
    let alias = original.alias();
    alias.set(0, 99)?;
    writeln!(
        out,
        "sequence aliasing -> original[0]: {}",
        original.get(0).unwrap_or_default()
    )?;
    Ok(())
}

/// Immutability helper: deriving an upper-cased copy leaves the base intact
fn demo_text_immutability<W: Write>(out: &mut W) -> Result<()> {
    debug!("helper: text immutability");
    let base = String::from("hello");
    let upper = text::upper_cased(&base);
    writeln!(out, "text immutability -> base: {}, upper: {}", base, upper)?;
    Ok(())
}

/// Accumulation helper: ten additions of 0.1 drift off exactly 1.0
fn demo_float_accumulation<W: Write>(out: &mut W) -> Result<()> {
    debug!("helper: float accumulation");
    let total = float::accumulate(0.1, 10);
    writeln!(out, "float accumulation -> total: {} (expected 1.0)", total)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string() -> String {
        let mut buf = Vec::new();
        run(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_run_succeeds() {
        let output = run_to_string();
        assert!(!output.is_empty());
    }

    #[test]
    fn test_run_is_deterministic() {
        assert_eq!(run_to_string(), run_to_string());
    }

    #[test]
    fn test_greeting_line_present() {
        assert!(run_to_string().contains("Hello, developers!"));
    }

    #[test]
    fn test_failed_write_propagates() {
        struct FailingSink;
        impl Write for FailingSink {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let err = run(&mut FailingSink).unwrap_err();
        assert!(matches!(err, crate::error::Error::Io(_)));
    }
}
