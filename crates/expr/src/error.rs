use thiserror::Error;

/// Errors raised while turning text into an [`Expr`](crate::Expr).
///
/// Offsets are byte positions into the source text.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("expression is empty")]
    Empty,

    #[error("unexpected character {ch:?} at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },

    #[error("invalid number {text:?} at offset {offset}")]
    InvalidNumber { text: String, offset: usize },

    #[error("number {text:?} at offset {offset} is too large")]
    NumberOutOfRange { text: String, offset: usize },

    #[error("expression nests too deeply at offset {offset}")]
    TooDeep { offset: usize },

    #[error("unknown name {name:?} at offset {offset}")]
    UnknownName { name: String, offset: usize },

    #[error("{name} is a function and must be called, at offset {offset}")]
    MissingCall { name: String, offset: usize },

    #[error("{name} expects {expected} argument(s) but got {got}, at offset {offset}")]
    Arity {
        name: &'static str,
        expected: &'static str,
        got: usize,
        offset: usize,
    },

    #[error("expected {expected} at offset {offset}, found {found}")]
    Unexpected {
        expected: &'static str,
        found: String,
        offset: usize,
    },

    #[error("expected {expected} but the expression ended")]
    UnexpectedEnd { expected: &'static str },
}

/// Errors raised while evaluating an [`Expr`](crate::Expr) at a point.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("{function}({arg}) is outside the domain of {function}")]
    Domain { function: &'static str, arg: f64 },

    #[error("{op} overflowed")]
    Overflow { op: &'static str },

    #[error("{op} is undefined for the given operands")]
    Undefined { op: &'static str },
}

/// Either a parse or an evaluation failure.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}
