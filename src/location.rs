use crate::error::IntrospectError;
use crate::stack::{self, StackDump};
use colored::Colorize;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const MARKER: &str = ".rs:";

/// # Where an instrumentation call was made
///
/// Built fresh on every call, source files can change between runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    file_path: PathBuf,
    line_number: usize,
    column: Option<u32>,
}

impl SourceLocation {
    pub fn new(file_path: impl Into<PathBuf>, line_number: usize) -> Result<Self, IntrospectError> {
        let file_path = file_path.into();
        if line_number == 0 {
            return Err(IntrospectError::ZeroLine(file_path));
        }
        Ok(Self {
            file_path,
            line_number,
            column: None,
        })
    }

    #[must_use]
    pub fn with_column(mut self, column: u32) -> Self {
        self.column = Some(column);
        self
    }

    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    #[must_use]
    pub fn column(&self) -> Option<u32> {
        self.column
    }

    fn from_caller(caller: &std::panic::Location<'_>) -> Self {
        Self {
            file_path: PathBuf::from(caller.file()),
            // `Location::line` is 1-based
            line_number: caller.line() as usize,
            column: Some(caller.column()),
        }
    }
}

impl Display for SourceLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.file_path.display(), self.line_number)?;
        if let Some(column) = self.column {
            write!(f, ":{column}")?;
        }
        Ok(())
    }
}

/// # Parse a backtrace location line
///
/// Expects `<path>.rs:<line>[:<column>]` with anything before the path
/// (indentation and the `at ` prefix) and after the numbers ignored
pub fn parse_location(frame: &str) -> Result<SourceLocation, IntrospectError> {
    let Some((path, rest)) = frame.split_once(MARKER) else {
        return Err(IntrospectError::LocationFormat {
            frame: frame.to_owned(),
            marker: MARKER,
        });
    };
    let path = path.trim();
    let path = path.strip_prefix("at ").unwrap_or(path).trim_start();
    let file_path = format!("{path}.rs");

    let line = rest
        .split(|c: char| c == ':' || c.is_whitespace())
        .next()
        .unwrap_or_default();
    let line_number = line
        .parse()
        .map_err(|source| IntrospectError::LineNumber {
            frame: frame.to_owned(),
            source,
        })?;
    let location = SourceLocation::new(file_path, line_number)?;

    // only a column right after the line counts, `rest` may carry anything else
    let column = rest[line.len()..]
        .strip_prefix(':')
        .and_then(|c| c.split(|c: char| !c.is_ascii_digit()).next())
        .and_then(|c| c.parse().ok());
    Ok(match column {
        Some(column) => location.with_column(column),
        None => location,
    })
}

/// # How to find the call site of an instrumentation call
///
/// Every public entry point is `#[track_caller]`, so [`Resolver::Caller`]
/// sees the user's call site. [`Resolver::Backtrace`] reads it out of a
/// textual stack dump instead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Resolver {
    #[default]
    Caller,
    Backtrace { depth: usize },
}

impl Resolver {
    #[track_caller]
    #[inline(never)]
    pub fn resolve(&self) -> Result<SourceLocation, IntrospectError> {
        match self {
            Resolver::Caller => Ok(SourceLocation::from_caller(std::panic::Location::caller())),
            Resolver::Backtrace { depth } => {
                let dump = StackDump::capture();
                parse_location(dump.frame(*depth)?)
            }
        }
    }

    /// # Check the depth against the frames an engine adds on top of the call site
    pub fn validate(&self, internal_frames: usize) -> Result<(), IntrospectError> {
        let Resolver::Backtrace { depth } = *self else {
            return Ok(());
        };
        stack::check_depth(depth)?;
        // each frame is two lines
        if depth <= stack::MIN_FRAME_DEPTH + 2 * internal_frames {
            return Err(IntrospectError::DepthInsideEngine {
                depth,
                internal: internal_frames,
            });
        }
        Ok(())
    }

    /// # The same resolver for a call that goes through `frames` more functions
    ///
    /// Each frame is two lines of the dump
    #[must_use]
    pub fn nested(self, frames: usize) -> Self {
        match self {
            Resolver::Caller => Resolver::Caller,
            Resolver::Backtrace { depth } => Resolver::Backtrace {
                depth: depth + 2 * frames,
            },
        }
    }
}

impl Display for Resolver {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Resolver::Caller => write!(f, "caller"),
            Resolver::Backtrace { depth } => {
                write!(f, "backtrace at line {}", depth.to_string().bright_magenta())
            }
        }
    }
}
