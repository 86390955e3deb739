/// Watches a solver run one event at a time.
///
/// The bisection solver hands every finished iteration to its observer. An
/// observer can record the event (a trace logger, the GUI's midpoint plot)
/// and can ask the solver to act by returning `Some(action)`. The action
/// type is defined by the solver; bisection only knows how to stop early.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is the
/// observer that watches nothing.
pub trait Observer<E, A> {
    /// Handles one event. `None` means "keep going".
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_observer_never_acts() {
        let mut observer = ();
        let action: Option<()> = observer.observe(&42);
        assert!(action.is_none());
    }

    #[test]
    fn closure_observer_sees_every_event() {
        let mut seen = Vec::new();
        let mut observer = |event: &usize| {
            seen.push(*event);
            (*event >= 2).then_some("stop")
        };

        assert_eq!(observer.observe(&1), None);
        assert_eq!(observer.observe(&2), Some("stop"));
        assert_eq!(seen, [1, 2]);
    }
}
