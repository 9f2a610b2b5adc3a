use crate::cache::FileCacher;
use crate::display::{FormatHint, Report, Role};
use crate::error::Result;
use crate::expr::extract_expression_name;
use crate::session::{ENGINE_FRAMES, Session};
use colored::Colorize;
use std::fmt::Debug;
use std::io::Write;

impl<W: Write, C: FileCacher> Session<W, C> {
    /// # Print a value next to the source text that produced it
    ///
    /// ```rust,no_run
    /// let mut session = callprobe::Session::stdout(Default::default());
    /// let names = vec!["Samuel", "John"];
    /// session.debug("v", &names)?;
    /// # Ok::<(), callprobe::Error>(())
    /// ```
    /// prints `&names: ["Samuel", "John"]` under the call site.
    ///
    /// The call has to fit on one line, otherwise the name is left empty and a
    /// warning is printed instead. Failing to find or read the call site is an error
    #[track_caller]
    pub fn debug<T: Debug + ?Sized>(&mut self, hint: &str, value: &T) -> Result<()> {
        self.config.resolver.validate(ENGINE_FRAMES)?;
        let hint: FormatHint = hint.parse()?;
        let location = self.config.resolver.resolve()?;
        let line = self
            .files
            .get_line(location.file_path(), location.line_number())?;

        let mut report = Report::new();
        report.line(Role::Debug, &location);
        let name = match extract_expression_name(&line) {
            Ok(name) => name,
            Err(e) => {
                report.line(Role::Plain, format_args!("{} {e}", "Warning".yellow()));
                String::new()
            }
        };
        report.line(
            Role::Plain,
            format_args!("{}: {}", name.yellow(), hint.render(value)),
        );
        report.separator();
        self.emit(&report)
    }
}
