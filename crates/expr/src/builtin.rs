use std::f64::consts;

use crate::EvalError;

/// Named constants available in expressions.
pub(crate) fn constant(name: &str) -> Option<f64> {
    match name {
        "pi" => Some(consts::PI),
        "e" => Some(consts::E),
        "tau" => Some(consts::TAU),
        _ => None,
    }
}

/// The fixed table of functions an expression may call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Builtin {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Exp,
    Ln,
    Log,
    Log10,
    Log2,
    Sqrt,
    Abs,
    Floor,
    Ceil,
    Pow,
    Atan2,
}

impl Builtin {
    pub(crate) fn lookup(name: &str) -> Option<Self> {
        let builtin = match name {
            "sin" => Self::Sin,
            "cos" => Self::Cos,
            "tan" => Self::Tan,
            "asin" => Self::Asin,
            "acos" => Self::Acos,
            "atan" => Self::Atan,
            "sinh" => Self::Sinh,
            "cosh" => Self::Cosh,
            "tanh" => Self::Tanh,
            "exp" => Self::Exp,
            "ln" => Self::Ln,
            "log" => Self::Log,
            "log10" => Self::Log10,
            "log2" => Self::Log2,
            "sqrt" => Self::Sqrt,
            "abs" | "fabs" => Self::Abs,
            "floor" => Self::Floor,
            "ceil" => Self::Ceil,
            "pow" => Self::Pow,
            "atan2" => Self::Atan2,
            _ => return None,
        };
        Some(builtin)
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Exp => "exp",
            Self::Ln => "ln",
            Self::Log => "log",
            Self::Log10 => "log10",
            Self::Log2 => "log2",
            Self::Sqrt => "sqrt",
            Self::Abs => "abs",
            Self::Floor => "floor",
            Self::Ceil => "ceil",
            Self::Pow => "pow",
            Self::Atan2 => "atan2",
        }
    }

    /// Returns true if the function accepts `count` arguments.
    pub(crate) fn accepts(self, count: usize) -> bool {
        match self {
            Self::Log => matches!(count, 1 | 2),
            Self::Pow | Self::Atan2 => count == 2,
            _ => count == 1,
        }
    }

    /// Describes the accepted argument count for error messages.
    pub(crate) fn arity(self) -> &'static str {
        match self {
            Self::Log => "1 or 2",
            Self::Pow | Self::Atan2 => "2",
            _ => "1",
        }
    }

    /// Applies the function to already evaluated arguments.
    ///
    /// The parser guarantees `args.len()` is accepted by [`Builtin::accepts`].
    pub(crate) fn apply(self, args: &[f64]) -> Result<f64, EvalError> {
        let x = args[0];
        let value = match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Tan => x.tan(),
            Self::Asin => self.within_unit(x)?.asin(),
            Self::Acos => self.within_unit(x)?.acos(),
            Self::Atan => x.atan(),
            Self::Sinh => x.sinh(),
            Self::Cosh => x.cosh(),
            Self::Tanh => x.tanh(),
            Self::Exp => x.exp(),
            Self::Ln => self.positive(x)?.ln(),
            Self::Log => match args.get(1) {
                None => self.positive(x)?.ln(),
                Some(&base) => {
                    #[allow(clippy::float_cmp)]
                    if base <= 0.0 || base == 1.0 {
                        return Err(EvalError::Domain {
                            function: self.name(),
                            arg: base,
                        });
                    }
                    self.positive(x)?.ln() / base.ln()
                }
            },
            Self::Log10 => self.positive(x)?.log10(),
            Self::Log2 => self.positive(x)?.log2(),
            Self::Sqrt => {
                if x < 0.0 {
                    return Err(EvalError::Domain {
                        function: self.name(),
                        arg: x,
                    });
                }
                x.sqrt()
            }
            Self::Abs => x.abs(),
            Self::Floor => x.floor(),
            Self::Ceil => x.ceil(),
            Self::Pow => return power(x, args[1]),
            Self::Atan2 => x.atan2(args[1]),
        };
        checked(self.name(), value)
    }

    fn positive(self, x: f64) -> Result<f64, EvalError> {
        if x > 0.0 {
            Ok(x)
        } else {
            Err(EvalError::Domain {
                function: self.name(),
                arg: x,
            })
        }
    }

    fn within_unit(self, x: f64) -> Result<f64, EvalError> {
        if (-1.0..=1.0).contains(&x) {
            Ok(x)
        } else {
            Err(EvalError::Domain {
                function: self.name(),
                arg: x,
            })
        }
    }
}

/// Raises `base` to `exponent`, rejecting results that are not real.
#[allow(clippy::float_cmp)]
pub(crate) fn power(base: f64, exponent: f64) -> Result<f64, EvalError> {
    if base == 0.0 && exponent < 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    if base < 0.0 && exponent.fract() != 0.0 {
        return Err(EvalError::Domain {
            function: "pow",
            arg: base,
        });
    }
    checked("pow", base.powf(exponent))
}

/// Turns non-finite results into errors.
pub(crate) fn checked(op: &'static str, value: f64) -> Result<f64, EvalError> {
    if value.is_nan() {
        Err(EvalError::Undefined { op })
    } else if value.is_infinite() {
        Err(EvalError::Overflow { op })
    } else {
        Ok(value)
    }
}
