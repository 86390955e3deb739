use super::Trace;

/// Indicates why the solver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// `|f(c)|` dropped below the tolerance.
    Converged,

    /// The approximate percent relative error dropped below the desired value.
    ErrorThreshold,

    /// Reached the iteration limit without meeting either stopping condition.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a bisection solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Every iteration performed, in order.
    pub trace: Trace,

    /// Number of function evaluations, including both bracket endpoints.
    pub evals: usize,
}

impl Solution {
    /// Returns the root estimate if the solver stopped on a convergence criterion.
    ///
    /// This is `None` for [`Status::MaxIters`] and [`Status::StoppedByObserver`].
    #[must_use]
    pub fn root(&self) -> Option<f64> {
        match self.status {
            Status::Converged | Status::ErrorThreshold => self.estimate(),
            Status::MaxIters | Status::StoppedByObserver => None,
        }
    }

    /// Returns the last midpoint, regardless of status.
    #[must_use]
    pub fn estimate(&self) -> Option<f64> {
        self.trace.last().map(|record| record.c)
    }

    /// Returns the approximate percent relative error of the last iteration.
    #[must_use]
    pub fn final_error(&self) -> Option<f64> {
        self.trace.last().and_then(|record| record.approx_rel_error)
    }

    /// Returns the number of iterations performed.
    #[must_use]
    pub fn iters(&self) -> usize {
        self.trace.len()
    }
}
