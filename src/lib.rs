//! Typetour - a guided tour of primitive and reference type semantics
//!
//! Typetour is a deterministic console demonstration: integer ranges and
//! wraparound overflow, widening and narrowing casts, IEEE-754 special
//! values and epsilon comparison, UTF-16 code units, boxing with a
//! small-integer identity cache, string immutability, sequence aliasing,
//! an enumerated weekday, records shared through handles, and trait
//! dispatch.
//!
//! # Quick Start
//!
//! ```
//! let mut buf = Vec::new();
//! typetour::tour::run(&mut buf)?;
//! assert!(!buf.is_empty());
//! # Ok::<(), typetour::Error>(())
//! ```
//!
//! The `typetour` binary runs the same tour against stdout.

// Re-export the public API from typetour-core
pub use typetour_core::*;
