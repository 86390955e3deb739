//! Solvers for scalar equations `f(x) = 0`.
//!
//! A [`Function`] maps `x` to `f(x)`. Solvers in this module drive `f(x)`
//! toward zero and report how they got there.
//!
//! # Solvers
//!
//! - [`bisection`]: guaranteed progress on a bracketed interval
//!
//! [`Function`]: bisect_core::Function

pub mod bisection;
