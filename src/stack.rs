//! # Textual stack dumps
//!
//! Rust renders a [`Backtrace`] with two lines per frame:
//!
//! ```text
//!    0: callprobe::stack::StackDump::capture
//!              at ./src/stack.rs:43:20
//! ```
//!
//! std leaves `Backtrace::force_capture` itself out, the dump starts at its
//! caller. So the location lines sit at odd indices of the dump. Frames without
//! debug info only print the symbol line and shift every following index,
//! which is why the depth is a [configurable](crate::config::Config) constant
//! and not something this module tries to guess.

use crate::error::IntrospectError;
use std::backtrace::Backtrace;

/// Lines below this index belong to [`StackDump::capture`]
pub const MIN_FRAME_DEPTH: usize = 2;

/// `depth % 2` of every `at path:line:col` line
pub const LOCATION_LINE_PARITY: usize = 1;

/// Location line of the frame that called a [`Session`](crate::Session) method,
/// counted for unoptimized builds
///
/// The dump then reads `capture`, `Resolver::resolve`, the session method and
/// the caller, at lines 1, 3, 5 and 7
pub const DEFAULT_FRAME_DEPTH: usize = 7;

/// # A captured call stack as text lines
#[derive(Debug, Clone)]
pub struct StackDump {
    lines: Vec<String>,
}

impl StackDump {
    /// Capture the current stack, regardless of `RUST_BACKTRACE`
    #[must_use]
    #[inline(never)]
    pub fn capture() -> Self {
        let text = Backtrace::force_capture().to_string();
        Self::from_text(&text)
    }

    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_owned).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// # Get the line at `depth`
    ///
    /// Rejects depths that would land on the capturer's own frames
    /// or on a symbol line instead of a location line
    pub fn frame(&self, depth: usize) -> Result<&str, IntrospectError> {
        check_depth(depth)?;
        self.lines
            .get(depth)
            .map(String::as_str)
            .ok_or(IntrospectError::DepthOutOfStack {
                depth,
                len: self.lines.len(),
            })
    }
}

pub(crate) fn check_depth(depth: usize) -> Result<(), IntrospectError> {
    if depth < MIN_FRAME_DEPTH {
        return Err(IntrospectError::DepthTooShallow {
            depth,
            min: MIN_FRAME_DEPTH,
        });
    }
    if depth % 2 != LOCATION_LINE_PARITY {
        return Err(IntrospectError::DepthParity {
            depth,
            parity: LOCATION_LINE_PARITY,
        });
    }
    Ok(())
}

/// Capture the stack and return the line at `depth`
pub fn capture_frame(depth: usize) -> Result<String, IntrospectError> {
    check_depth(depth)?;
    StackDump::capture().frame(depth).map(str::to_owned)
}
