use crate::location::SourceLocation;
use colored::Colorize;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// # Any error produced by this crate
///
/// Either the instrumentation itself broke ([`IntrospectError`]), a check did not
/// hold ([`Failure`]) or the report couldn't be written to its sink
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Introspect(#[from] IntrospectError),
    #[error(transparent)]
    Failure(#[from] Failure),
    #[error("Can't write report: {0}")]
    Output(#[from] std::io::Error),
}

impl Error {
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Error::Failure(_))
    }
    #[must_use]
    pub fn as_failure(&self) -> Option<&Failure> {
        match self {
            Error::Failure(f) => Some(f),
            _ => None,
        }
    }
}

/// # A check that did not hold
///
/// Always fatal for the current test: the outermost driver decides how
/// to turn it into a non-zero exit
#[derive(thiserror::Error, Debug)]
pub enum Failure {
    #[error("{} {location}: this should {}equal to each other", "Failed".red(), negation(.expect_equal))]
    Assertion {
        location: SourceLocation,
        expect_equal: bool,
    },
    #[error("{} {location}: case `{label}`", "Failed".red())]
    Case {
        location: SourceLocation,
        label: String,
    },
}

fn negation(expect_equal: &bool) -> &'static str {
    if *expect_equal { "" } else { "not " }
}

impl Failure {
    #[must_use]
    pub fn location(&self) -> &SourceLocation {
        match self {
            Failure::Assertion { location, .. } | Failure::Case { location, .. } => location,
        }
    }
}

/// # The instrumentation's own invariants were violated
#[derive(thiserror::Error, Debug)]
pub enum IntrospectError {
    #[error("Frame depth {depth} would land inside the capturer, it must be at least {min}")]
    DepthTooShallow { depth: usize, min: usize },
    #[error("Frame depth {depth} points at a symbol line, location lines sit at indices where index % 2 == {parity}")]
    DepthParity { depth: usize, parity: usize },
    #[error("Stack dump only has {len} lines, can't read line {depth}")]
    DepthOutOfStack { depth: usize, len: usize },
    #[error("Frame depth {depth} must be greater than the {internal} frames the engine adds")]
    DepthInsideEngine { depth: usize, internal: usize },
    #[error("Can't find `{marker}` in stack frame {frame:?}")]
    LocationFormat { frame: String, marker: &'static str },
    #[error("Invalid line number in stack frame {frame:?}: {source}")]
    LineNumber {
        frame: String,
        source: std::num::ParseIntError,
    },
    #[error("Line numbers start at 1, got 0 for {0:?}")]
    ZeroLine(PathBuf),
    #[error("Can't read file {path:?}: {source}")]
    CantReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Line {line} is outside of {path:?}, which has {total} lines")]
    LineOutOfRange {
        path: PathBuf,
        line: usize,
        total: usize,
    },
    #[error("Can't find `, ` in call line {0:?}, the call may span more than one line")]
    MissingDelimiter(String),
    #[error("Can't compare {this} with {that}")]
    Uncomparable { this: String, that: String },
    #[error("Format hint `{0}` isn't recognised, only 'v', '?', '#v', '#?', 'x', 'X' and '#x' are avaliable")]
    UnknownFormatHint(String),
    #[error("Benchmarks need at least one iteration per block")]
    ZeroIterations,
    #[error("Invalid value {value:?} for {key}, expected {expected}")]
    InvalidConfig {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}
