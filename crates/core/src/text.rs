//! UTF-16 code units and immutable text transformations
//!
//! [`CodeUnit`] is a raw 16-bit UTF-16 code unit, which is deliberately not
//! a `char`: a unit in the surrogate range (U+D800..=U+DFFF) is a valid code
//! unit but not a decodable code point on its own, and `char` cannot hold
//! one. [`CodeUnit::to_char`] decodes exactly the units that stand alone.
//!
//! The transformation functions return new `String`s; the input is borrowed
//! and never mutated, which is the whole demonstration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One UTF-16 code unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeUnit(u16);

impl CodeUnit {
    /// Code unit from its raw 16-bit value
    pub const fn new(raw: u16) -> Self {
        CodeUnit(raw)
    }

    /// The raw 16-bit value
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Code unit for a BMP character
    ///
    /// Returns None for characters outside the Basic Multilingual Plane,
    /// which need a surrogate pair rather than a single unit.
    pub fn from_char(c: char) -> Option<Self> {
        if (c as u32) <= 0xFFFF {
            Some(CodeUnit(c as u16))
        } else {
            None
        }
    }

    /// Decode this unit as a standalone code point
    ///
    /// Returns None for surrogate-range units, which only form a code point
    /// when paired.
    pub fn to_char(self) -> Option<char> {
        char::from_u32(u32::from(self.0))
    }

    /// True for units in the high-surrogate range U+D800..=U+DBFF
    pub fn is_high_surrogate(self) -> bool {
        (0xD800..=0xDBFF).contains(&self.0)
    }

    /// True for units in the low-surrogate range U+DC00..=U+DFFF
    pub fn is_low_surrogate(self) -> bool {
        (0xDC00..=0xDFFF).contains(&self.0)
    }
}

impl fmt::Display for CodeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_char() {
            Some(c) => write!(f, "{}", c),
            None => write!(f, "U+{:04X}", self.0),
        }
    }
}

/// Replace every occurrence of `from` with `to`, producing a new string
pub fn replaced(original: &str, from: &str, to: &str) -> String {
    original.replace(from, to)
}

/// Upper-cased copy of `original`
pub fn upper_cased(original: &str) -> String {
    original.to_uppercase()
}
