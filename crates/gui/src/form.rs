use bisect_expr::{Expr, ParseError, evaluate_constant};
use bisect_solvers::equation::bisection::{Config, ConfigError};
use thiserror::Error;

/// Raw text of every input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Form {
    pub(crate) function: String,
    pub(crate) a: String,
    pub(crate) b: String,
    pub(crate) desired_error: String,
    pub(crate) tolerance: String,
    pub(crate) max_iters: String,
}

/// A fully parsed and validated problem.
#[derive(Debug, Clone)]
pub(crate) struct Problem {
    pub(crate) function: Expr,
    pub(crate) bracket: [f64; 2],
    pub(crate) config: Config,
}

#[derive(Debug, Error)]
pub(crate) enum FormError {
    #[error("Invalid function: {0}")]
    Function(ParseError),

    #[error("Invalid {field}: {error}")]
    Value {
        field: &'static str,
        error: bisect_expr::Error,
    },

    #[error("Invalid {field}: {value} is not finite")]
    NotFinite { field: &'static str, value: f64 },

    #[error("Invalid maximum iterations: {0:?} is not a whole number")]
    MaxIters(String),

    #[error("Invalid options: {0}")]
    Config(#[from] ConfigError),
}

impl Default for Form {
    fn default() -> Self {
        let config = Config::default();
        Self {
            function: "3*x**3 - 15*x**2 - 20*x + 50".to_owned(),
            a: "-3".to_owned(),
            b: "0".to_owned(),
            desired_error: config.desired_error_percent.to_string(),
            tolerance: config.tolerance.to_string(),
            max_iters: config.max_iters.to_string(),
        }
    }
}

impl Form {
    /// Parses every field, stopping at the first invalid one.
    pub(crate) fn parse(&self) -> Result<Problem, FormError> {
        let function = Expr::parse(&self.function).map_err(FormError::Function)?;
        let a = constant("left boundary (a)", &self.a)?;
        let b = constant("right boundary (b)", &self.b)?;

        let max_iters = self
            .max_iters
            .trim()
            .parse()
            .map_err(|_| FormError::MaxIters(self.max_iters.trim().to_owned()))?;

        let config = Config {
            max_iters,
            tolerance: constant("tolerance", &self.tolerance)?,
            desired_error_percent: constant("desired error", &self.desired_error)?,
        };
        config.validate()?;

        Ok(Problem {
            function,
            bracket: [a, b],
            config,
        })
    }
}

fn constant(field: &'static str, text: &str) -> Result<f64, FormError> {
    let value = evaluate_constant(text).map_err(|error| FormError::Value { field, error })?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FormError::NotFinite { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn default_form_is_valid() {
        let problem = Form::default().parse().expect("default form parses");

        assert_eq!(problem.bracket, [-3.0, 0.0]);
        assert_eq!(problem.config, Config::default());
    }

    #[test]
    fn bounds_accept_constant_expressions() {
        let form = Form {
            function: "cos(x)".to_owned(),
            a: "0".to_owned(),
            b: "pi".to_owned(),
            ..Form::default()
        };
        let problem = form.parse().expect("valid form");

        assert_relative_eq!(problem.bracket[1], std::f64::consts::PI);
    }

    #[test]
    fn reports_the_first_bad_field() {
        let form = Form {
            function: "sin(".to_owned(),
            a: "nope".to_owned(),
            ..Form::default()
        };
        assert!(matches!(form.parse(), Err(FormError::Function(_))));

        let form = Form {
            a: "x".to_owned(),
            ..Form::default()
        };
        let err = form.parse().expect_err("x is not a constant");
        assert!(err.to_string().starts_with("Invalid left boundary (a):"));
    }

    #[test]
    fn rejects_bad_options() {
        let form = Form {
            max_iters: "ten".to_owned(),
            ..Form::default()
        };
        assert!(matches!(form.parse(), Err(FormError::MaxIters(text)) if text == "ten"));

        let form = Form {
            tolerance: "-1".to_owned(),
            ..Form::default()
        };
        assert!(matches!(
            form.parse(),
            Err(FormError::Config(ConfigError::Tolerance))
        ));

        let form = Form {
            desired_error: "1/0".to_owned(),
            ..Form::default()
        };
        assert!(matches!(form.parse(), Err(FormError::Value { .. })));
    }
}
