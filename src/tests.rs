mod api;
mod bench;
mod cache;
mod debug;
mod stack;

use crate::SourceLocation;
use crate::config::Config;
use crate::location::Resolver;
use crate::session::Session;
use crate::stack::DEFAULT_FRAME_DEPTH;

// like assert_eq but shows `got` and `expected`
macro_rules! test_eq {
    (got: $got:expr, expected: $expected:expr) => {{
        if $got != $expected {
            panic!(
                r"assertion failed: `got == expected`
     got: `{:?}`,
expected: `{:?}`",
                $got, $expected
            )
        }
    }};
}
use test_eq;

/// Colorless session writing into memory
fn quiet_session() -> Session<Vec<u8>> {
    Session::with_writer(Config::default().with_color(false), Vec::new())
}

/// Colorless session that finds call sites in a live stack dump
fn backtrace_session() -> Session<Vec<u8>> {
    let config = Config::default()
        .with_color(false)
        .with_resolver(Resolver::Backtrace {
            depth: DEFAULT_FRAME_DEPTH,
        });
    Session::with_writer(config, Vec::new())
}

fn written<C>(session: &Session<Vec<u8>, C>) -> String {
    String::from_utf8_lossy(&session.out).into_owned()
}

/// Where the failure in `got` was reported
fn failed_at<T: std::fmt::Debug>(got: crate::error::Result<T>) -> SourceLocation {
    match got {
        Err(crate::Error::Failure(failure)) => failure.location().clone(),
        other => panic!("expected a failure, got {other:?}"),
    }
}
