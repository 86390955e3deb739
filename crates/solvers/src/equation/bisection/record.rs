/// One row of a bisection trace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationRecord {
    /// 1-based iteration number.
    pub index: usize,

    /// Left bracket bound at the start of the iteration.
    pub a: f64,

    /// Right bracket bound at the start of the iteration.
    pub b: f64,

    /// Midpoint `(a + b) / 2`.
    pub c: f64,

    /// `f(a)`.
    pub fa: f64,

    /// `f(c)`.
    pub fc: f64,

    /// Percent change of `c` relative to the previous midpoint.
    ///
    /// `None` for the first iteration, and when the current midpoint is zero
    /// while the previous one was not.
    pub approx_rel_error: Option<f64>,
}

/// Approximate percent relative error between successive midpoints.
///
/// Returns `Some(0.0)` when the midpoint did not move and `None` when
/// `current` is zero but `previous` is not.
#[must_use]
pub fn approx_rel_error(current: f64, previous: f64) -> Option<f64> {
    #[allow(clippy::float_cmp)]
    if current == previous {
        return Some(0.0);
    }
    if current == 0.0 {
        return None;
    }
    Some(((current - previous) / current).abs() * 100.0)
}

/// The ordered iteration history of a single solve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace {
    records: Vec<IterationRecord>,
}

impl Trace {
    /// Returns all records in iteration order.
    #[must_use]
    pub fn records(&self) -> &[IterationRecord] {
        &self.records
    }

    /// Iterates over the records in iteration order.
    pub fn iter(&self) -> std::slice::Iter<'_, IterationRecord> {
        self.records.iter()
    }

    /// Returns the most recent record.
    #[must_use]
    pub fn last(&self) -> Option<&IterationRecord> {
        self.records.last()
    }

    /// Returns the number of recorded iterations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no iterations were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consumes the trace and returns its records.
    #[must_use]
    pub fn into_records(self) -> Vec<IterationRecord> {
        self.records
    }

    pub(super) fn push(&mut self, record: IterationRecord) {
        debug_assert_eq!(record.index, self.records.len() + 1);
        self.records.push(record);
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a IterationRecord;
    type IntoIter = std::slice::Iter<'a, IterationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn error_is_percent_of_current_midpoint() {
        let error = approx_rel_error(1.5, 1.0).expect("defined");
        assert_relative_eq!(error, 100.0 / 3.0);
    }

    #[test]
    fn error_is_zero_when_midpoint_does_not_move() {
        assert_eq!(approx_rel_error(0.0, 0.0), Some(0.0));
        assert_eq!(approx_rel_error(2.5, 2.5), Some(0.0));
    }

    #[test]
    fn error_is_undefined_at_zero_midpoint() {
        assert_eq!(approx_rel_error(0.0, 0.5), None);
    }

    #[test]
    fn trace_is_replayable() {
        let mut trace = Trace::default();
        for index in 1..=3 {
            trace.push(IterationRecord {
                index,
                a: 0.0,
                b: 1.0,
                c: 0.5,
                fa: -1.0,
                fc: 1.0,
                approx_rel_error: None,
            });
        }

        let first: Vec<usize> = trace.iter().map(|r| r.index).collect();
        let second: Vec<usize> = (&trace).into_iter().map(|r| r.index).collect();
        assert_eq!(first, [1, 2, 3]);
        assert_eq!(first, second);
        assert_eq!(trace.last().map(|r| r.index), Some(3));
    }
}
