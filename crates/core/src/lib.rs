//! Core traits and types for the Bisect crates.
//!
//! This crate defines the shared abstractions that the solver, the expression
//! evaluator, and the front ends build on:
//!
//! - [`Function`]: a scalar function `f(x)` whose evaluation may fail
//! - [`Observer`]: receives solver events and optionally returns control actions

mod function;
mod observer;

pub use function::{FromFn, Function, TryFromFn, from_fn, try_from_fn};
pub use observer::Observer;
