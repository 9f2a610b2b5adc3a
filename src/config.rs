//! # Session configuration
//!
//! Read from the environment by the [free functions](crate::api):
//!
//! | variable | values |
//! |---|---|
//! | `CALLPROBE_RESOLVER` | `caller` (default), `backtrace` |
//! | `CALLPROBE_FRAME_DEPTH` | line index into the stack dump, implies `backtrace` |
//! | `CALLPROBE_ON_FATAL` | `return` (default), `exit` |
//! | `CALLPROBE_COLOR` | `always`, `never`, unset follows the terminal and `NO_COLOR` |

use crate::error::IntrospectError;
use crate::location::Resolver;
use crate::stack::DEFAULT_FRAME_DEPTH;

pub const ENV_RESOLVER: &str = "CALLPROBE_RESOLVER";
pub const ENV_FRAME_DEPTH: &str = "CALLPROBE_FRAME_DEPTH";
pub const ENV_ON_FATAL: &str = "CALLPROBE_ON_FATAL";
pub const ENV_COLOR: &str = "CALLPROBE_COLOR";

/// # What a fatal failure does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnFatal {
    /// Hand the [failure](crate::error::Failure) back as an `Err`
    #[default]
    Return,
    /// Report and [terminate](crate::api::terminate) the process
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    pub resolver: Resolver,
    /// `None` leaves the decision to `colored`
    pub color: Option<bool>,
    pub on_fatal: OnFatal,
}

impl Config {
    pub fn from_env() -> Result<Self, IntrospectError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// # Build a config from any key-value source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, IntrospectError> {
        let mut config = Config::default();

        if let Some(value) = lookup(ENV_RESOLVER) {
            config.resolver = match value.as_str() {
                "caller" => Resolver::Caller,
                "backtrace" => Resolver::Backtrace {
                    depth: DEFAULT_FRAME_DEPTH,
                },
                _ => return Err(invalid(ENV_RESOLVER, value, "`caller` or `backtrace`")),
            };
        }
        if let Some(value) = lookup(ENV_FRAME_DEPTH) {
            let Ok(depth) = value.parse() else {
                return Err(invalid(ENV_FRAME_DEPTH, value, "a line index"));
            };
            config.resolver = Resolver::Backtrace { depth };
        }
        if let Some(value) = lookup(ENV_ON_FATAL) {
            config.on_fatal = match value.as_str() {
                "return" => OnFatal::Return,
                "exit" => OnFatal::Exit,
                _ => return Err(invalid(ENV_ON_FATAL, value, "`return` or `exit`")),
            };
        }
        if let Some(value) = lookup(ENV_COLOR) {
            config.color = match value.as_str() {
                "always" => Some(true),
                "never" => Some(false),
                _ => return Err(invalid(ENV_COLOR, value, "`always` or `never`")),
            };
        }
        Ok(config)
    }

    #[must_use]
    pub fn with_resolver(mut self, resolver: Resolver) -> Self {
        self.resolver = resolver;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_on_fatal(mut self, on_fatal: OnFatal) -> Self {
        self.on_fatal = on_fatal;
        self
    }

    /// Applies the color choice, `colored`'s override is process-wide
    pub(crate) fn apply_color(&self) {
        if let Some(color) = self.color {
            colored::control::set_override(color);
        }
    }
}

fn invalid(key: &'static str, value: String, expected: &'static str) -> IntrospectError {
    IntrospectError::InvalidConfig {
        key,
        value,
        expected,
    }
}
