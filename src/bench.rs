use crate::cache::FileCacher;
use crate::display::{Report, Role};
use crate::error::{IntrospectError, Result};
use crate::session::{ENGINE_FRAMES, Session};
use std::io::Write;
use std::time::{Duration, Instant};

/// # Time spent by one block over all its iterations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkResult {
    pub block_index: usize,
    pub total: Duration,
    iterations: u32,
}

impl BenchmarkResult {
    #[must_use]
    pub fn per_iteration(&self) -> Duration {
        self.total / self.iterations
    }
}

impl<W: Write, C: FileCacher> Session<W, C> {
    /// # Run every block `iterations` times and rank them, fastest first
    ///
    /// Blocks run one after the other and are timed as a whole, ties keep
    /// their original order
    #[track_caller]
    pub fn benchmark(
        &mut self,
        iterations: u32,
        blocks: &mut [&mut dyn FnMut()],
    ) -> Result<Vec<BenchmarkResult>> {
        if iterations == 0 {
            return Err(IntrospectError::ZeroIterations.into());
        }
        self.config.resolver.validate(ENGINE_FRAMES)?;
        let location = self.config.resolver.resolve()?;

        let mut results: Vec<BenchmarkResult> = blocks
            .iter_mut()
            .enumerate()
            .map(|(block_index, block)| {
                let start = Instant::now();
                for _ in 0..iterations {
                    block();
                }
                BenchmarkResult {
                    block_index,
                    total: start.elapsed(),
                    iterations,
                }
            })
            .collect();
        results.sort_by_key(|r| r.total);

        let mut report = Report::new();
        report.line(Role::Benchmark, &location);
        for r in &results {
            report.line(
                Role::Plain,
                format_args!(
                    "block index {}: it takes {:?} and {:?} for each loop",
                    r.block_index,
                    r.total,
                    r.per_iteration()
                ),
            );
        }
        report.separator();
        self.emit(&report)?;
        Ok(results)
    }
}
