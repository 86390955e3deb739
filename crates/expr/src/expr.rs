use std::{fmt, str::FromStr};

use bisect_core::Function;

use crate::{
    EvalError, ParseError,
    builtin::{Builtin, checked, power},
    parser,
};

/// A parsed expression in the single variable `x`.
///
/// Parsing happens once; [`Expr::eval`] then walks the tree for each point.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    source: String,
    root: Node,
}

impl Expr {
    /// Parses an expression that may refer to `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid expression.
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let root = parser::parse(source, true)?;
        Ok(Self {
            source: source.trim().to_owned(),
            root,
        })
    }

    /// Parses an expression that must not refer to `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid expression or uses `x`.
    pub fn parse_constant(source: &str) -> Result<Self, ParseError> {
        let root = parser::parse(source, false)?;
        Ok(Self {
            source: source.trim().to_owned(),
            root,
        })
    }

    /// Evaluates the expression at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error for division by zero, arguments outside a function's
    /// domain, and results that are not finite.
    pub fn eval(&self, x: f64) -> Result<f64, EvalError> {
        self.root.eval(x)
    }

    /// Returns the trimmed source text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns true if the expression refers to `x`.
    #[must_use]
    pub fn depends_on_x(&self) -> bool {
        self.root.depends_on_x()
    }
}

impl FromStr for Expr {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl Function for Expr {
    type Error = EvalError;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        self.eval(x)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    Number(f64),
    X,
    Neg(Box<Node>),
    Binary {
        op: BinOp,
        lhs: Box<Node>,
        rhs: Box<Node>,
    },
    Call {
        func: Builtin,
        args: Vec<Node>,
    },
}

impl Node {
    fn eval(&self, x: f64) -> Result<f64, EvalError> {
        match self {
            Node::Number(value) => Ok(*value),
            Node::X => Ok(x),
            Node::Neg(inner) => Ok(-inner.eval(x)?),
            Node::Binary { op, lhs, rhs } => binary(*op, lhs.eval(x)?, rhs.eval(x)?),
            Node::Call { func, args } => {
                let values = args
                    .iter()
                    .map(|arg| arg.eval(x))
                    .collect::<Result<Vec<_>, _>>()?;
                func.apply(&values)
            }
        }
    }

    fn depends_on_x(&self) -> bool {
        match self {
            Node::Number(_) => false,
            Node::X => true,
            Node::Neg(inner) => inner.depends_on_x(),
            Node::Binary { lhs, rhs, .. } => lhs.depends_on_x() || rhs.depends_on_x(),
            Node::Call { args, .. } => args.iter().any(Node::depends_on_x),
        }
    }
}

#[allow(clippy::float_cmp)]
fn binary(op: BinOp, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
    match op {
        BinOp::Add => checked("addition", lhs + rhs),
        BinOp::Sub => checked("subtraction", lhs - rhs),
        BinOp::Mul => checked("multiplication", lhs * rhs),
        BinOp::Div => {
            if rhs == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            checked("division", lhs / rhs)
        }
        BinOp::Rem => {
            if rhs == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            // Floored modulo: the result takes the sign of the divisor.
            let rem = lhs % rhs;
            let rem = if rem != 0.0 && (rem < 0.0) != (rhs < 0.0) {
                rem + rhs
            } else {
                rem
            };
            checked("modulo", rem)
        }
        BinOp::Pow => power(lhs, rhs),
    }
}
