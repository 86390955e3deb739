//! Root-finding solvers for the Bisect crates.
//!
//! - [`equation::bisection`]: bisection on a sign-changing bracket, recording
//!   every iteration so callers can render the full history

pub mod equation;
