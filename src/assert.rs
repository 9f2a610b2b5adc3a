//! # Equality assertions
//!
//! A check passes when the structural comparison of `actual` and `expected`
//! matches what the caller expected, so "these must differ" is a check
//! like any other.

use crate::cache::FileCacher;
use crate::compare::Structural;
use crate::display::{FormatHint, Report, Role};
use crate::error::{Failure, Result};
use crate::session::{ENGINE_FRAMES, Session};
use std::fmt::Debug;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mode {
    /// Return the failure as an `Err` instead of only reporting it
    pub fatal_on_failure: bool,
    /// Print the values on success too
    pub verbose_on_success: bool,
}

impl Mode {
    pub const FATAL: Mode = Mode {
        fatal_on_failure: true,
        verbose_on_success: false,
    };
    pub const VERBOSE: Mode = Mode {
        fatal_on_failure: true,
        verbose_on_success: true,
    };
    pub const SOFT: Mode = Mode {
        fatal_on_failure: false,
        verbose_on_success: false,
    };
}

impl Default for Mode {
    fn default() -> Self {
        Self::FATAL
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Outcome {
    Passed,
    /// Only returned by non-fatal checks
    Failed,
}

impl Outcome {
    #[must_use]
    pub fn passed(self) -> bool {
        self == Outcome::Passed
    }
}

impl<W: Write, C: FileCacher> Session<W, C> {
    /// # Check that `actual` and `expected` are (or aren't) structurally equal
    ///
    /// On failure reports the call site, what was expected and both values.
    /// A fatal failure comes back as [`Failure::Assertion`]; a non-fatal one
    /// as [`Outcome::Failed`]
    #[track_caller]
    pub fn check<T: Structural + Debug + ?Sized>(
        &mut self,
        mode: Mode,
        expect_equal: bool,
        hint: &str,
        actual: &T,
        expected: &T,
    ) -> Result<Outcome> {
        self.config.resolver.validate(ENGINE_FRAMES)?;
        let hint: FormatHint = hint.parse()?;
        let location = self.config.resolver.resolve()?;
        let equal = actual.structural_eq(expected)?;

        let mut report = Report::new();
        if equal != expect_equal {
            report.line(Role::Fail, &location);
            report.line(
                Role::Plain,
                if expect_equal {
                    "this should equal to each other"
                } else {
                    "this should not equal to each other"
                },
            );
            report
                .labelled(Role::Actual, "Actual", hint, actual)
                .labelled(Role::Expected, "Expected", hint, expected)
                .separator();
            self.emit(&report)?;
            if mode.fatal_on_failure {
                return self.fail(Failure::Assertion {
                    location,
                    expect_equal,
                });
            }
            return Ok(Outcome::Failed);
        }

        report.line(Role::Success, &location);
        if mode.verbose_on_success {
            report.line(
                Role::Plain,
                if expect_equal {
                    "this is equal to each other"
                } else {
                    "this is not equal to each other"
                },
            );
            report.labelled(Role::Actual, "Actual", hint, actual);
            if !expect_equal {
                report.labelled(Role::Expected, "Expected", hint, expected);
            }
            report.separator();
        }
        self.emit(&report)?;
        Ok(Outcome::Passed)
    }

    /// Fatal, quiet check that both values are equal
    #[track_caller]
    pub fn assert_equal<T: Structural + Debug + ?Sized>(
        &mut self,
        actual: &T,
        expected: &T,
    ) -> Result<()> {
        // one frame above `check`
        let resolver = self.config.resolver;
        self.config.resolver = resolver.nested(1);
        let checked = self.check(Mode::FATAL, true, "v", actual, expected);
        self.config.resolver = resolver;
        checked.map(|_| ())
    }

    /// Fatal, quiet check that both values differ
    #[track_caller]
    pub fn assert_differ<T: Structural + Debug + ?Sized>(
        &mut self,
        actual: &T,
        expected: &T,
    ) -> Result<()> {
        // one frame above `check`
        let resolver = self.config.resolver;
        self.config.resolver = resolver.nested(1);
        let checked = self.check(Mode::FATAL, false, "v", actual, expected);
        self.config.resolver = resolver;
        checked.map(|_| ())
    }
}
