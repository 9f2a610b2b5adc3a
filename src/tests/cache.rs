use super::*;
use crate::cache::{CacheHelper, FileCacher, MockFileCacher, NoCache};
use crate::error::IntrospectError;

const FIXTURE: &str = "fn main() {\n    let names = vec![\"Samuel\"];\n    debug(\"v\", &names);\n}\n";

#[test]
fn reads_requested_line() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("fixture.rs");
    std::fs::write(&path, FIXTURE)?;

    test_eq!(got: NoCache.get_line(&path, 3)?, expected: "    debug(\"v\", &names);");
    test_eq!(got: NoCache.get_line(&path, 1)?, expected: "fn main() {");
    test_eq!(got: NoCache.get_line(&path, 4)?, expected: "}");
    Ok(())
}

#[test]
fn line_out_of_range() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("fixture.rs");
    std::fs::write(&path, FIXTURE)?;

    assert!(matches!(
        NoCache.get_line(&path, 0),
        Err(IntrospectError::LineOutOfRange { line: 0, total: 4, .. })
    ));
    assert!(matches!(
        NoCache.get_line(&path, 5),
        Err(IntrospectError::LineOutOfRange { line: 5, total: 4, .. })
    ));
    Ok(())
}

#[test]
fn unreadable_file() {
    let got = NoCache.get_line("does/not/exist.rs", 1);
    assert!(matches!(got, Err(IntrospectError::CantReadFile { .. })));
}

#[test]
fn no_cache_sees_rewrites() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("fixture.rs");
    std::fs::write(&path, "old")?;
    test_eq!(got: NoCache.get_line(&path, 1)?, expected: "old");
    std::fs::write(&path, "new")?;
    test_eq!(got: NoCache.get_line(&path, 1)?, expected: "new");
    Ok(())
}

#[test]
fn cache_helper_reads_once() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("fixture.rs");
    std::fs::write(&path, "old")?;
    let mut cache = CacheHelper::new();
    test_eq!(got: cache.get_line(&path, 1)?, expected: "old");
    std::fs::write(&path, "new")?;
    test_eq!(got: cache.get_line(&path, 1)?, expected: "old");
    Ok(())
}

#[test]
fn mocked_files() -> Result<(), IntrospectError> {
    let mut files = MockFileCacher::new();
    files.mock_file("src/mocked.rs", "a\r\nb\r\n");
    test_eq!(got: files.get_line("src/mocked.rs", 2)?, expected: "b");
    assert!(matches!(
        files.get_line("src/other.rs", 1),
        Err(IntrospectError::CantReadFile { .. })
    ));
    Ok(())
}
