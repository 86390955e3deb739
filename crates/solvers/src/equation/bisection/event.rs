use super::IterationRecord;

/// Iteration event emitted by the bisection solver.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The record for the iteration that just completed.
    pub record: &'a IterationRecord,
}

impl Event<'_> {
    /// Returns the 1-based iteration index.
    #[must_use]
    pub fn iter(&self) -> usize {
        self.record.index
    }

    /// Returns the midpoint evaluated in this iteration.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.record.c
    }

    /// Returns `f` at the midpoint.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.record.fc
    }
}
