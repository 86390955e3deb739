use std::fmt;

use super::{Config, Solution, Status, Trace};

/// Renders a [`Trace`] as a fixed-width text table.
///
/// Missing relative errors are shown as `0`.
#[derive(Debug, Clone, Copy)]
pub struct TraceTable<'a> {
    trace: &'a Trace,
}

impl<'a> TraceTable<'a> {
    #[must_use]
    pub fn new(trace: &'a Trace) -> Self {
        Self { trace }
    }
}

impl fmt::Display for TraceTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = format!(
            "{:<10} {:<10} {:<10} {:<10} {:<10} {:<10} {:<20}",
            "Iteration", "a", "b", "c", "f(a)", "f(c)", "Approx. % Rel. Error"
        );
        writeln!(f, "{}", header.trim_end())?;

        for record in self.trace {
            let row = format!(
                "{:<10} {:<10.6} {:<10.6} {:<10.6} {:<10.6} {:<10.6} {:<20.6}",
                record.index,
                record.a,
                record.b,
                record.c,
                record.fa,
                record.fc,
                record.approx_rel_error.unwrap_or(0.0),
            );
            writeln!(f, "{}", row.trim_end())?;
        }

        Ok(())
    }
}

/// Renders a complete [`Solution`]: a status line, the iteration table, and
/// the final midpoint with its approximate percent relative error.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    solution: &'a Solution,
    desired_error_percent: f64,
}

impl<'a> Report<'a> {
    /// Creates a report for a solution produced with `config`.
    #[must_use]
    pub fn new(solution: &'a Solution, config: &Config) -> Self {
        Self {
            solution,
            desired_error_percent: config.desired_error_percent,
        }
    }

    /// Returns the one-line status message.
    #[must_use]
    pub fn status_line(&self) -> String {
        match self.solution.status {
            Status::Converged => format!(
                "Convergence achieved within tolerance in {} iterations.",
                self.solution.iters()
            ),
            Status::ErrorThreshold => format!(
                "Approximate percent relative error is less than {}%. Stopping iteration.",
                self.desired_error_percent
            ),
            Status::MaxIters => "Maximum number of iterations reached.".to_owned(),
            Status::StoppedByObserver => {
                format!("Stopped early at iteration {}.", self.solution.iters())
            }
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.status_line())?;
        writeln!(f)?;
        writeln!(f, "Iterations:")?;
        write!(f, "{}", TraceTable::new(&self.solution.trace))?;

        if let Some(c) = self.solution.estimate() {
            writeln!(f, "Final approximation (c): {c}")?;
            writeln!(
                f,
                "Approximate percent relative error: {} %",
                self.solution.final_error().unwrap_or(0.0)
            )?;
        }

        Ok(())
    }
}
