use clap::Parser;

use bisect_solvers::equation::bisection::{Config, ConfigError};

/// Find a root of f(x) on [a, b] with the bisection method.
///
/// Run without --function, -a and -b for an interactive session.
#[derive(Debug, Parser)]
#[command(name = "bisect", author, version, about)]
pub(crate) struct Args {
    /// Function of x, for example "3*x**3 - 15*x**2 - 20*x + 50"
    #[arg(short, long, requires = "a", requires = "b")]
    pub(crate) function: Option<String>,

    /// Left bound of the interval; constant expressions such as "pi/2" are allowed
    #[arg(short, long = "left", allow_hyphen_values = true, requires = "function")]
    pub(crate) a: Option<String>,

    /// Right bound of the interval
    #[arg(short, long = "right", allow_hyphen_values = true, requires = "function")]
    pub(crate) b: Option<String>,

    /// Convergence threshold on |f(c)|
    #[arg(short, long, env = "BISECT_TOLERANCE", default_value_t = 1e-6)]
    pub(crate) tolerance: f64,

    /// Maximum number of iterations
    #[arg(short, long, env = "BISECT_MAX_ITERS", default_value_t = 100)]
    pub(crate) max_iters: usize,

    /// Desired approximate percent relative error; prompted for when omitted
    /// in an interactive session, 1% otherwise
    #[arg(short = 'e', long, env = "BISECT_DESIRED_ERROR")]
    pub(crate) desired_error: Option<f64>,
}

impl Args {
    /// Builds a validated solver config from the command-line options.
    pub(crate) fn config(&self) -> Result<Config, ConfigError> {
        let defaults = Config::default();
        let config = Config {
            max_iters: self.max_iters,
            tolerance: self.tolerance,
            desired_error_percent: self
                .desired_error
                .unwrap_or(defaults.desired_error_percent),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_match_solver_defaults() {
        let args = Args::try_parse_from(["bisect"]).expect("no arguments needed");
        assert_eq!(args.config(), Ok(Config::default()));
    }

    #[test]
    fn accepts_negative_bounds() {
        let args = Args::try_parse_from(["bisect", "-f", "x", "-a", "-1", "-b", "2"])
            .expect("should parse");
        assert_eq!(args.a.as_deref(), Some("-1"));
        assert_eq!(args.b.as_deref(), Some("2"));
    }

    #[test]
    fn function_requires_both_bounds() {
        assert!(Args::try_parse_from(["bisect", "-f", "x", "-a", "0"]).is_err());
    }

    #[test]
    fn rejects_negative_desired_error() {
        let args = Args::try_parse_from(["bisect", "--desired-error=-1"]).expect("should parse");
        assert_eq!(args.config(), Err(ConfigError::DesiredError));
    }
}
