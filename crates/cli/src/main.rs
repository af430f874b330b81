//! typetour — walk through primitive and reference type semantics.
//!
//! Takes no arguments and reads no configuration: the demonstration
//! sequence is fixed. Diagnostic logging goes to stderr (filtered by
//! `RUST_LOG`, default `warn`) so stdout carries only the tour itself.

use std::io::Write;
use std::process;

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = typetour_core::tour::run(&mut out) {
        eprintln!("typetour: {}", e);
        process::exit(1);
    }
    if let Err(e) = out.flush() {
        eprintln!("typetour: {}", e);
        process::exit(1);
    }
}
