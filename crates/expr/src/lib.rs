//! A small, sandboxed expression language for scalar functions of `x`.
//!
//! Formulas are parsed once into an [`Expr`] and evaluated at any number of
//! points. Nothing outside the language is ever executed: the only names an
//! expression can refer to are `x`, a few constants, and a fixed table of
//! math functions.
//!
//! ```
//! use bisect_expr::Expr;
//!
//! let f = Expr::parse("3*x**3 - 15*x**2 - 20*x + 50").unwrap();
//! assert_eq!(f.eval(1.0).unwrap(), 18.0);
//! ```
//!
//! # Syntax
//!
//! - Operators: `+ - * / %`, unary `-`/`+`, and `^` or `**` for powers
//!   (right associative, binding tighter than unary minus on its left)
//! - Constants: `pi`, `e`, `tau`
//! - Functions: `sin cos tan asin acos atan sinh cosh tanh exp ln log log10
//!   log2 sqrt abs floor ceil`, `pow(a, b)`, `atan2(y, x)`, and `log(v, base)`
//! - A `math.` prefix is accepted on any name, so `math.cos(x) - 3` works
//! - Literals must fit in an `f64`, and nesting is limited to a few hundred
//!   levels

mod builtin;
mod error;
mod expr;
mod parser;
mod token;

pub use error::{Error, EvalError, ParseError};
pub use expr::Expr;

/// Parses and evaluates an expression that must not refer to `x`.
///
/// Useful for reading interval bounds such as `pi/2`.
///
/// # Errors
///
/// Returns an error if the text does not parse as a constant expression or
/// if evaluating it fails.
pub fn evaluate_constant(source: &str) -> Result<f64, Error> {
    let expr = Expr::parse_constant(source)?;
    Ok(expr.eval(0.0)?)
}
