//! # Free functions over a stdout [`Session`]
//!
//! The configuration is read from the environment once, see [`crate::config`].
//! Each function is `#[track_caller]`, so reports point at the caller.
//!
//! ```rust,no_run
//! use callprobe::api::*;
//!
//! fn sums() -> callprobe::Result<()> {
//!     test(true, true, "v", &(1 + 1), &2)?;
//!     let total: i32 = [1, 2, 3].iter().sum();
//!     debug("v", &total);
//!     Ok(())
//! }
//! ```

use crate::compare::Structural;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::{BenchmarkResult, Mode, Outcome, Session};
use colored::Colorize;
use std::fmt::{Debug, Display};
use std::sync::OnceLock;

fn config() -> Config {
    static CONFIG: OnceLock<Config> = OnceLock::new();
    *CONFIG.get_or_init(|| match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {e}, using defaults", "Warning".yellow());
            Config::default()
        }
    })
}

/// Every function below calls its session method directly
const WRAPPER_FRAMES: usize = 1;

/// Shift a backtrace depth past the wrapper frame
pub(crate) fn wrapped(config: Config) -> Config {
    config.with_resolver(config.resolver.nested(WRAPPER_FRAMES))
}

fn session() -> Session {
    Session::stdout(wrapped(config()))
}

/// # Fatal check, verbose on success when `print` is set
///
/// See [`Session::check`]
#[track_caller]
pub fn test<T: Structural + Debug + ?Sized>(
    print: bool,
    is_equal: bool,
    hint: &str,
    actual: &T,
    expected: &T,
) -> Result<()> {
    let mode = Mode {
        fatal_on_failure: true,
        verbose_on_success: print,
    };
    session()
        .check(mode, is_equal, hint, actual, expected)
        .map(|_| ())
}

/// # Non-fatal check
///
/// Reports like [`test`] but a mismatch only yields [`Outcome::Failed`]
#[track_caller]
pub fn soft_test<T: Structural + Debug + ?Sized>(
    print: bool,
    is_equal: bool,
    hint: &str,
    actual: &T,
    expected: &T,
) -> Result<Outcome> {
    let mode = Mode {
        fatal_on_failure: false,
        verbose_on_success: print,
    };
    session().check(mode, is_equal, hint, actual, expected)
}

/// # Print `value` with the text of its expression
///
/// # Panics
/// When the call site can't be found or read, see [`Session::debug`]
#[track_caller]
pub fn debug<T: Debug + ?Sized>(hint: &str, value: &T) {
    if let Err(e) = session().debug(hint, value) {
        panic!("{e}");
    }
}

/// See [`Session::benchmark`]
#[track_caller]
pub fn benchmark(iterations: u32, blocks: &mut [&mut dyn FnMut()]) -> Result<Vec<BenchmarkResult>> {
    session().benchmark(iterations, blocks)
}

/// See [`Session::test_case`]
#[track_caller]
pub fn test_case<I, T>(hint: &str, label: &str, input: &I, expected: &T, actual: &T) -> Result<()>
where
    I: Debug + ?Sized,
    T: Structural + Debug + ?Sized,
{
    session().test_case(hint, label, input, expected, actual)
}

/// # The caller's location as `path:line:column`
///
/// # Panics
/// When the configured resolver can't find the call site
#[track_caller]
#[must_use]
pub fn stack() -> String {
    // calls `resolve` itself, as deep as a session method
    match config().resolver.resolve() {
        Ok(location) => location.to_string(),
        Err(e) => panic!("{e}"),
    }
}

/// # Panics
/// When `result` is an `Err`, with the error as message
#[track_caller]
pub fn panic_if_err<T, E: Display>(result: std::result::Result<T, E>) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("{e}"),
    }
}

/// # Report `error` on stderr and exit with status 1
pub fn terminate(error: &Error) -> ! {
    eprintln!("[{}] {error}", "ERROR".red());
    std::process::exit(1)
}

/// # Turn a failed run into a non-zero exit
///
/// For `main`-style drivers; tests returning [`Result`] get the same from the harness
pub fn exit_on_failure<T>(result: Result<T>) -> T {
    match result {
        Ok(v) => v,
        Err(e) => terminate(&e),
    }
}
