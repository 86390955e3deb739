use thiserror::Error;

/// Configuration for the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Hard cap on the number of iterations.
    pub max_iters: usize,

    /// Convergence threshold on `|f(c)|`.
    pub tolerance: f64,

    /// Early-stop threshold on the approximate percent relative error between
    /// successive midpoints.
    ///
    /// Set to `0.0` to disable early stopping.
    pub desired_error_percent: f64,
}

/// Errors that can occur when validating a bisection solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and non-negative")]
    Tolerance,

    #[error("desired_error_percent must be finite and non-negative")]
    DesiredError,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            tolerance: 1e-6,
            desired_error_percent: 1.0,
        }
    }
}

impl Config {
    /// Validates that all thresholds are finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if any threshold is negative or non-finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ConfigError::Tolerance);
        }
        if !self.desired_error_percent.is_finite() || self.desired_error_percent < 0.0 {
            return Err(ConfigError::DesiredError);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_negative_tolerance() {
        let config = Config {
            tolerance: -1e-6,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::Tolerance));
    }

    #[test]
    fn rejects_non_finite_desired_error() {
        let config = Config {
            desired_error_percent: f64::NAN,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::DesiredError));
    }

    #[test]
    fn zero_thresholds_are_allowed() {
        let config = Config {
            tolerance: 0.0,
            desired_error_percent: 0.0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }
}
