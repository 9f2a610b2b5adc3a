use crate::cache::FileCacher;
use crate::compare::Structural;
use crate::display::{FormatHint, Report, Role};
use crate::error::{Failure, Result};
use crate::session::{ENGINE_FRAMES, Session};
use std::fmt::Debug;
use std::io::Write;

impl<W: Write, C: FileCacher> Session<W, C> {
    /// # Check one row of a table-driven test
    ///
    /// Silent when `actual` matches `expected`. Otherwise reports the label,
    /// the input and both values and always fails with [`Failure::Case`]
    #[track_caller]
    pub fn test_case<I, T>(
        &mut self,
        hint: &str,
        label: &str,
        input: &I,
        expected: &T,
        actual: &T,
    ) -> Result<()>
    where
        I: Debug + ?Sized,
        T: Structural + Debug + ?Sized,
    {
        self.config.resolver.validate(ENGINE_FRAMES)?;
        let hint: FormatHint = hint.parse()?;
        if actual.structural_eq(expected)? {
            return Ok(());
        }
        let location = self.config.resolver.resolve()?;

        let mut report = Report::new();
        report
            .line(Role::Fail, &location)
            .line(Role::Plain, format_args!("Case: {label}"))
            .labelled(Role::Plain, "Input", hint, input)
            .labelled(Role::Actual, "Actual", hint, actual)
            .labelled(Role::Expected, "Expected", hint, expected)
            .separator();
        self.emit(&report)?;
        self.fail(Failure::Case {
            location,
            label: label.to_owned(),
        })
    }
}
