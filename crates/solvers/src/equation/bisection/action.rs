/// Control actions supported by the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver after the current iteration.
    ///
    /// The solution keeps the full trace but reports no root.
    StopEarly,
}
