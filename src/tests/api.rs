use super::{failed_at, test_eq};
use crate::api::{panic_if_err, stack, test, test_case, wrapped};
use crate::config::Config;
use crate::error::{Error, IntrospectError};
use crate::location::Resolver;
use crate::session::Session;
use crate::stack::DEFAULT_FRAME_DEPTH;
use crate::{Mode, Outcome};

#[test]
fn stack_is_the_caller() {
    let (location, line) = (stack(), line!());
    assert!(location.starts_with(&format!("{}:{line}:", file!())));
}

#[test]
fn passing_checks() -> Result<(), Error> {
    test(false, true, "v", &1, &1)?;
    test(true, false, "v", &1, &2)?;
    test_case("v", "sum", &(1, 2), &3, &(1 + 2))?;
    Ok(())
}

#[test]
fn panic_if_err_passes_values_through() {
    let got = panic_if_err(Ok::<_, IntrospectError>(3));
    test_eq!(got: got, expected: 3);
}

#[test]
#[should_panic(expected = "Benchmarks need at least one iteration")]
fn panic_if_err_panics() {
    panic_if_err(Err::<(), _>(IntrospectError::ZeroIterations));
}

#[test]
fn wrapping_shifts_backtrace_depth_only() {
    let backtrace = Config::default().with_resolver(Resolver::Backtrace {
        depth: DEFAULT_FRAME_DEPTH,
    });
    test_eq!(
        got: wrapped(backtrace).resolver,
        expected: Resolver::Backtrace { depth: DEFAULT_FRAME_DEPTH + 2 }
    );
    test_eq!(got: wrapped(Config::default()).resolver, expected: Resolver::Caller);
}

// shaped like the free functions, one frame above the session method
fn check_through_wrapper(session: &mut Session<Vec<u8>>) -> Result<Outcome, Error> {
    session.check(Mode::FATAL, true, "v", &1, &2)
}

#[test]
fn wrapped_depth_reaches_the_caller() {
    let config = wrapped(Config::default().with_color(false).with_resolver(
        Resolver::Backtrace {
            depth: DEFAULT_FRAME_DEPTH,
        },
    ));
    let mut session = Session::with_writer(config, Vec::new());
    let got = check_through_wrapper(&mut session);
    let line = line!() - 1;
    let location = failed_at(got);
    assert!(location.file_path().ends_with(file!()));
    test_eq!(got: location.line_number(), expected: line as usize);
}
