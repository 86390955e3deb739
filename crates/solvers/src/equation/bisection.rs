//! Bisection root finding with a recorded iteration history.
//!
//! # Algorithm
//!
//! Given `f` and a bracket `[a, b]` with `f(a) * f(b) < 0`, each iteration
//! evaluates the midpoint `c = (a + b) / 2`, records the step, and keeps the
//! half of the bracket across which `f` still changes sign.
//!
//! The solver stops on the first of:
//!
//! - `|f(c)| < tolerance` ([`Status::Converged`])
//! - the approximate percent relative error between successive midpoints
//!   dropping below `desired_error_percent` ([`Status::ErrorThreshold`])
//! - an observer returning [`Action::StopEarly`] ([`Status::StoppedByObserver`])
//! - `max_iters` iterations ([`Status::MaxIters`])
//!
//! Every iteration is kept in the returned [`Trace`], including for
//! [`Status::MaxIters`], so callers can render the full history.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after the iteration's record
//! is complete and before any stopping condition is checked.

mod action;
mod config;
mod error;
mod event;
mod record;
mod report;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use record::{IterationRecord, Trace, approx_rel_error};
pub use report::{Report, TraceTable};
pub use solution::{Solution, Status};

use bisect_core::{Function, Observer};

/// Finds a root of `function` inside `bracket` using the bisection method.
///
/// The bracket endpoints are used as given; `[a, b]` and `[b, a]` both work.
/// Observers see each iteration's record and may stop the solver early.
///
/// # Errors
///
/// Returns an error if the config is invalid, if `f(a)` and `f(b)` do not
/// have strictly opposite signs, or if the function fails to evaluate.
pub fn solve<F, Obs>(
    function: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    config.validate()?;

    let mut evals = 0;
    let mut eval = |x: f64| -> Result<f64, Error> {
        evals += 1;
        function.call(x).map_err(|source| Error::Function {
            x,
            source: Box::new(source),
        })
    };

    let [mut a, mut b] = bracket;
    let mut fa = eval(a)?;
    let fb = eval(b)?;

    let has_sign_change = fa * fb < 0.0;
    if !has_sign_change {
        return Err(Error::NoSignChange { a, b, fa, fb });
    }

    let mut trace = Trace::default();

    let status = 'solve: {
        for index in 1..=config.max_iters {
            let c = 0.5 * a + 0.5 * b;
            let fc = eval(c)?;

            let record = IterationRecord {
                index,
                a,
                b,
                c,
                fa,
                fc,
                approx_rel_error: trace.last().and_then(|prev| approx_rel_error(c, prev.c)),
            };
            trace.push(record);

            tracing::trace!(
                index,
                a,
                b,
                c,
                fa,
                fc,
                approx_rel_error = ?record.approx_rel_error,
                "bisection iteration"
            );

            if let Some(Action::StopEarly) = observer.observe(&Event { record: &record }) {
                break 'solve Status::StoppedByObserver;
            }

            if fc.abs() < config.tolerance {
                break 'solve Status::Converged;
            }

            // An exact zero at `a` or `c` falls through to the right half.
            if fc * fa < 0.0 {
                b = c;
            } else {
                a = c;
                fa = fc;
            }

            if index > 1
                && record
                    .approx_rel_error
                    .is_some_and(|error| error < config.desired_error_percent)
            {
                break 'solve Status::ErrorThreshold;
            }
        }

        Status::MaxIters
    };

    tracing::debug!(
        a = bracket[0],
        b = bracket[1],
        ?status,
        iters = trace.len(),
        evals,
        "bisection finished"
    );

    Ok(Solution {
        status,
        trace,
        evals,
    })
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error if the config is invalid, if `f(a)` and `f(b)` do not
/// have strictly opposite signs, or if the function fails to evaluate.
pub fn solve_unobserved<F>(
    function: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
{
    solve(function, bracket, config, ())
}
