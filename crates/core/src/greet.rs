//! Greeting capability: a single-method behavioral contract
//!
//! The implementation is chosen statically; there is no registry or runtime
//! plugin mechanism. The trait takes the output sink as a parameter so the
//! side effect is testable against a buffer.

use std::io::Write;

use crate::error::Result;

/// Accept an audience name, produce a greeting side effect
pub trait Greeter {
    /// Write a greeting for `audience` to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if the write to `out` fails.
    fn greet(&self, audience: &str, out: &mut dyn Write) -> Result<()>;
}

/// Greeter that writes `Hello, <audience>!` as one line
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleGreeter;

impl Greeter for ConsoleGreeter {
    fn greet(&self, audience: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Hello, {}!", audience)?;
        Ok(())
    }
}
