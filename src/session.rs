use crate::cache::{FileCacher, NoCache};
use crate::config::{Config, OnFatal};
use crate::display::Report;
use crate::error::{Error, Failure, Result};
use std::io::{Stdout, Write};

/// A session method and `Resolver::resolve` sit between the call site and the capture
pub(crate) const ENGINE_FRAMES: usize = 2;

/// # Where reports go and how call sites are found
///
/// Every check, debug print and benchmark renders its report in full and
/// writes it to `out` with a single `write_all`
pub struct Session<W = Stdout, C = NoCache> {
    pub(crate) config: Config,
    pub(crate) out: W,
    pub(crate) files: C,
}

impl Session<Stdout, NoCache> {
    #[must_use]
    pub fn stdout(config: Config) -> Self {
        Self::with_writer(config, std::io::stdout())
    }
}

impl<W: Write> Session<W, NoCache> {
    #[must_use]
    pub fn with_writer(config: Config, out: W) -> Self {
        config.apply_color();
        Self {
            config,
            out,
            files: NoCache,
        }
    }
}

impl<W: Write, C: FileCacher> Session<W, C> {
    /// Swap how source files are read, see [`crate::cache`]
    #[must_use]
    pub fn with_files<F: FileCacher>(self, files: F) -> Session<W, F> {
        Session {
            config: self.config,
            out: self.out,
            files,
        }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    pub(crate) fn emit(&mut self, report: &Report) -> Result<()> {
        if report.is_empty() {
            return Ok(());
        }
        self.out.write_all(report.as_str().as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    /// Hand a failure to whoever drives the test, or end the process
    pub(crate) fn fail<T>(&self, failure: Failure) -> Result<T> {
        let error = Error::from(failure);
        match self.config.on_fatal {
            OnFatal::Return => Err(error),
            OnFatal::Exit => crate::api::terminate(&error),
        }
    }
}
