use super::*;
use crate::cache::MockFileCacher;
use crate::error::{Error, IntrospectError};

#[test]
fn prints_expression_and_value() -> Result<(), Error> {
    let mut session = quiet_session();
    let names = vec!["Samuel", "John", "Samuel"];
    session.debug("v", &names)?;
    let age = 10;
    session.debug("v", &age)?;

    let out = written(&session);
    assert!(out.contains("&names: [\"Samuel\", \"John\", \"Samuel\"]\n"));
    assert!(out.contains("&age: 10\n"));
    test_eq!(got: out.matches(file!()).count(), expected: 2);
    Ok(())
}

#[test]
fn follows_the_hint() -> Result<(), Error> {
    let mut session = quiet_session();
    session.debug("x", &255u8)?;
    session.debug("#v", &(1, "a"))?;
    let out = written(&session);
    assert!(out.contains("&255u8: ff\n"));
    assert!(out.contains("&(1, \"a\"): (\n    1,\n    \"a\",\n)\n"));
    Ok(())
}

#[test]
fn degraded_name_still_prints_value() -> Result<(), Error> {
    let mut files = MockFileCacher::new();
    files.mock_file(file!(), "debug(\n".repeat(1000));
    let mut session = quiet_session().with_files(files);
    session.debug("v", &42)?;
    let out = written(&session);
    assert!(out.contains("Warning"));
    assert!(out.contains("\n: 42\n"));
    Ok(())
}

#[test]
fn unreadable_call_site_is_an_error() {
    let mut session = quiet_session().with_files(MockFileCacher::new());
    let got = session.debug("v", &1);
    assert!(matches!(
        got,
        Err(Error::Introspect(IntrospectError::CantReadFile { .. }))
    ));
    test_eq!(got: written(&session), expected: "");
}

#[test]
fn backtrace_reads_the_calling_line() -> Result<(), Error> {
    let mut session = backtrace_session();
    let answer = 42;
    session.debug("v", &answer)?;
    let line = line!() - 1;

    let out = written(&session);
    assert!(out.contains(&format!("{}:{line}:", file!())), "{out}");
    assert!(out.contains("&answer: 42\n"), "{out}");
    assert!(!out.contains("Warning"), "{out}");
    Ok(())
}
