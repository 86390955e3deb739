use bisect_core::Observer;
use bisect_solvers::equation::bisection::{Action, Event};

/// Collects `[iteration, c]` points while a solve runs.
///
/// Pass `&mut MidpointTrace` as the observer to keep the points afterwards.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct MidpointTrace {
    points: Vec<[f64; 2]>,
}

impl MidpointTrace {
    pub(crate) fn into_points(self) -> Vec<[f64; 2]> {
        self.points
    }
}

impl Observer<Event<'_>, Action> for MidpointTrace {
    #[allow(clippy::cast_precision_loss)]
    fn observe(&mut self, event: &Event<'_>) -> Option<Action> {
        self.points.push([event.iter() as f64, event.x()]);
        None
    }
}

impl Observer<Event<'_>, Action> for &mut MidpointTrace {
    fn observe(&mut self, event: &Event<'_>) -> Option<Action> {
        (*self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use bisect_core::from_fn;
    use bisect_solvers::equation::bisection::{Config, solve};

    #[test]
    fn records_every_midpoint() {
        let f = from_fn(|x| x * x - 2.0);
        let mut trace = MidpointTrace::default();

        let solution = solve(&f, [0.0, 2.0], &Config::default(), &mut trace).expect("valid bracket");
        let points = trace.into_points();

        assert_eq!(points.len(), solution.iters());
        assert_eq!(points[0], [1.0, 1.0]);
        assert_eq!(points[1], [2.0, 1.5]);
        assert_eq!(points.last().map(|p| p[1]), solution.estimate());
    }
}
