//! Core library for the typetour demonstration program
//!
//! This crate holds the semantics the tour demonstrates and the runner that
//! walks through them:
//! - numeric: integer ranges, literals, wraparound, casts, promotion
//! - float: IEEE-754 special values, epsilon comparison, accumulation
//! - text: UTF-16 code units and immutable string transformations
//! - boxed: BoxedInt with an explicit small-integer identity cache
//! - sequence: fixed-length sequences with aliasing handle semantics
//! - weekday: closed weekday enum with a weekend predicate
//! - person: mutable record shared through handles
//! - greet: single-method greeting capability
//! - tour: the demonstration runner
//! - error: Error type and Result alias

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod boxed;
pub mod error;
pub mod float;
pub mod greet;
pub mod numeric;
pub mod person;
pub mod sequence;
pub mod text;
pub mod tour;
pub mod weekday;

// Re-export commonly used types
pub use boxed::{BoxedInt, IntCache, CACHE_MAX, CACHE_MIN};
pub use error::{Error, Result};
pub use greet::{ConsoleGreeter, Greeter};
pub use numeric::{IntRange, LiteralShowcase, PromotionChain};
pub use person::PersonHandle;
pub use sequence::SharedSeq;
pub use text::CodeUnit;
pub use weekday::Weekday;
