use std::{error::Error as _, io};

use bisect_solvers::equation::bisection::{Config, Error, Report, Solution};

/// Writes the outcome of a solve to `out`.
///
/// Returns `true` only when a root was found.
pub(crate) fn outcome(
    out: &mut impl io::Write,
    result: &Result<Solution, Error>,
    config: &Config,
) -> io::Result<bool> {
    match result {
        Ok(solution) => {
            write!(out, "{}", Report::new(solution, config))?;
            Ok(solution.root().is_some())
        }
        Err(Error::NoSignChange { fa, fb, .. }) => {
            tracing::warn!(fa, fb, "rejected bracket");
            writeln!(
                out,
                "Bisection method may not converge as f(a) and f(b) must have opposite signs."
            )?;
            writeln!(out, "f(a) = {fa}, f(b) = {fb}")?;
            Ok(false)
        }
        Err(err) => {
            tracing::warn!(%err, "solve failed");
            write!(out, "Error: {err}")?;
            let mut source = err.source();
            while let Some(cause) = source {
                write!(out, ": {cause}")?;
                source = cause.source();
            }
            writeln!(out)?;
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use bisect_expr::Expr;
    use bisect_solvers::equation::bisection::solve_unobserved;

    fn render(function: &str, bracket: [f64; 2]) -> (bool, String) {
        let expr: Expr = function.parse().expect("valid function");
        let config = Config::default();
        let result = solve_unobserved(&expr, bracket, &config);

        let mut out = Vec::new();
        let found = outcome(&mut out, &result, &config).expect("writing to a Vec");
        (found, String::from_utf8(out).expect("utf-8 output"))
    }

    #[test]
    fn found_root_prints_report() {
        let (found, text) = render("x**2 - 2", [0.0, 2.0]);

        assert!(found);
        assert!(text.starts_with("Approximate percent relative error is less than 1%."));
        assert!(text.contains("Final approximation (c): 1.4140625\n"));
    }

    #[test]
    fn rejected_bracket_explains_sign_rule() {
        let (found, text) = render("cos(x) - 3", [0.0, 2.0]);

        assert!(!found);
        assert!(text.starts_with("Bisection method may not converge"));
        assert!(!text.contains("Iterations:"));
    }

    #[test]
    fn evaluation_failure_prints_cause() {
        let (found, text) = render("1/x - 1", [0.0, 2.0]);

        assert!(!found);
        assert!(text.starts_with("Error: function evaluation failed at x = 0"));
        assert!(text.contains("division by zero"));
    }
}
