use super::*;
use crate::error::IntrospectError;
use crate::stack::{DEFAULT_FRAME_DEPTH, StackDump, capture_frame};

pub(super) const DUMP: &str = "   0: callprobe::stack::StackDump::capture
             at ./src/stack.rs:43:20
   1: callprobe::location::Resolver::resolve
             at ./src/location.rs:130:28
   2: callprobe::debug::<impl callprobe::session::Session<W,C>>::debug
             at ./src/debug.rs:27:24
   3: demo::names
             at ./tests/demo.rs:12:5
   4: demo::names::{{closure}}
             at ./tests/demo.rs:9:11
   5: core::ops::function::FnOnce::call_once
             at /rustc/17067e9a/library/core/src/ops/function.rs:250:5
   6: core::ops::function::FnOnce::call_once
             at /rustc/17067e9a/library/core/src/ops/function.rs:250:5
   7: test::__rust_begin_short_backtrace
             at /rustc/17067e9a/library/test/src/lib.rs:648:18";

#[test]
fn frame_at_default_depth() -> Result<(), IntrospectError> {
    let dump = StackDump::from_text(DUMP);
    test_eq!(got: dump.len(), expected: 16);
    let frame = dump.frame(DEFAULT_FRAME_DEPTH)?;
    test_eq!(got: frame.trim(), expected: "at ./tests/demo.rs:12:5");
    Ok(())
}

#[test]
fn rejects_symbol_lines() {
    let dump = StackDump::from_text(DUMP);
    let got = dump.frame(12);
    assert!(matches!(
        got,
        Err(IntrospectError::DepthParity { depth: 12, parity: 1 })
    ));
}

#[test]
fn rejects_capturer_frames() {
    let dump = StackDump::from_text(DUMP);
    assert!(matches!(
        dump.frame(1),
        Err(IntrospectError::DepthTooShallow { depth: 1, .. })
    ));
    assert!(matches!(
        capture_frame(0),
        Err(IntrospectError::DepthTooShallow { depth: 0, .. })
    ));
}

#[test]
fn rejects_depth_past_the_end() {
    let dump = StackDump::from_text(DUMP);
    assert!(matches!(
        dump.frame(41),
        Err(IntrospectError::DepthOutOfStack { depth: 41, len: 16 })
    ));
}

#[test]
fn capture_has_frames() {
    let dump = StackDump::capture();
    assert!(!dump.is_empty());
    assert!(dump.lines().any(|line| line.contains("capture_has_frames")));
}

#[test]
fn captured_location_lines_parse() -> Result<(), IntrospectError> {
    let dump = StackDump::capture();
    let Some(line) = dump.lines().find(|line| line.contains(file!())) else {
        panic!("no frame of {} in the dump", file!());
    };
    let location = crate::location::parse_location(line)?;
    assert!(location.file_path().ends_with(file!()));
    Ok(())
}

#[test]
fn live_dump_starts_at_the_capturer() {
    let dump = StackDump::capture();
    let lines: Vec<&str> = dump.lines().take(2).collect();
    assert!(lines[0].contains("StackDump::capture"), "{lines:?}");
    assert!(lines[1].contains("src/stack.rs"), "{lines:?}");
}
