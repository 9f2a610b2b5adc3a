use crate::error::IntrospectError;
use colored::{Color, Colorize};
use std::fmt::{Debug, Display, Formatter, Write as _};
use std::str::FromStr;

pub const SEPARATOR: &str =
    "________________________________________________________________________________";

/// # How a value gets rendered
///
/// All hints go through [`Debug`], so any value that can be compared can be printed
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FormatHint {
    /// `v` or `?`
    #[default]
    Debug,
    /// `#v` or `#?`
    Pretty,
    /// `x`
    LowerHex,
    /// `X`
    UpperHex,
    /// `#x`
    PrettyLowerHex,
}

impl FromStr for FormatHint {
    type Err = IntrospectError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "v" | "?" | "" => Self::Debug,
            "#v" | "#?" => Self::Pretty,
            "x" => Self::LowerHex,
            "X" => Self::UpperHex,
            "#x" => Self::PrettyLowerHex,
            _ => return Err(IntrospectError::UnknownFormatHint(s.to_owned())),
        })
    }
}

impl FormatHint {
    #[must_use]
    pub fn render<T: Debug + ?Sized>(self, value: &T) -> String {
        match self {
            Self::Debug => format!("{value:?}"),
            Self::Pretty => format!("{value:#?}"),
            Self::LowerHex => format!("{value:x?}"),
            Self::UpperHex => format!("{value:X?}"),
            Self::PrettyLowerHex => format!("{value:#x?}"),
        }
    }
}

/// # What a piece of a report is about
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Role {
    Fail,
    Success,
    Actual,
    Expected,
    Debug,
    Benchmark,
    Plain,
}

impl Role {
    #[must_use]
    pub fn color(self) -> Option<Color> {
        match self {
            Role::Fail => Some(Color::Red),
            Role::Success => Some(Color::Green),
            Role::Actual => Some(Color::Yellow),
            Role::Expected => Some(Color::Blue),
            Role::Debug => Some(Color::Magenta),
            Role::Benchmark => Some(Color::Cyan),
            Role::Plain => None,
        }
    }
}

/// # Output of one call
///
/// Collected in full and written to the sink at once, so reports
/// from different threads don't interleave
#[derive(Default)]
pub struct Report {
    buf: String,
}

impl Report {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, role: Role, text: impl Display) -> &mut Self {
        let text = text.to_string();
        // infallible for String
        let _ = match role.color() {
            Some(color) => writeln!(self.buf, "{}", text.color(color)),
            None => writeln!(self.buf, "{text}"),
        };
        self
    }

    pub fn separator(&mut self) -> &mut Self {
        self.line(Role::Plain, SEPARATOR)
    }

    pub fn labelled<T: Debug + ?Sized>(
        &mut self,
        role: Role,
        label: &str,
        hint: FormatHint,
        value: &T,
    ) -> &mut Self {
        self.line(role, format_args!("{label}:"));
        self.line(role, hint.render(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.buf)
    }
}
