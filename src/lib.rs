//! # Call-site aware assertions for tests
//!
//! Checks, debug prints and benchmarks that report where they were called
//! from. [`Session::debug`] goes one step further and reads the calling line
//! back from disk to print the text of the debugged expression next to its value.

// Avaliabe to user
pub mod api;
pub mod cache;
pub mod compare;
pub mod config;
pub mod display;
pub mod error;
pub mod expr;
pub mod location;
pub mod prelude;
pub mod stack;
pub mod value;

pub use assert::{Mode, Outcome};
pub use bench::BenchmarkResult;
pub use error::{Error, Result};
pub use location::SourceLocation;
pub use session::Session;

// Avaliabe internally
mod assert;
mod bench;
mod case;
mod debug;
mod session;

#[cfg(test)]
mod tests;
