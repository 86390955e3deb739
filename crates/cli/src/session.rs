use std::io::{BufRead, Write};

use bisect_expr::{Expr, evaluate_constant};
use bisect_solvers::equation::bisection::{self, Config};

use crate::present;

const WELCOME: &str = "\
Welcome to the Bisection Method Calculator.
Please enter the function f(x) for which you want to find the root.
For a polynomial function enter: 3*x**3 - 15*x**2 - 20*x + 50
For a trigonometric function enter: cos(x) - 3
For an exponential function enter: exp(x) - 2";

/// An interactive prompt-driven session over any line reader and writer.
///
/// Invalid input re-prompts. End of input ends the session quietly.
pub(crate) struct Session<R, W> {
    input: R,
    output: W,
    config: Config,
    desired_error: Option<f64>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session.
    ///
    /// When `desired_error` is `None` the user is asked for it on every
    /// calculation; otherwise it overrides `config.desired_error_percent`.
    pub(crate) fn new(input: R, output: W, config: Config, desired_error: Option<f64>) -> Self {
        Self {
            input,
            output,
            config,
            desired_error,
        }
    }

    /// Runs calculations until the user declines another one.
    pub(crate) fn run(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "{WELCOME}")?;

        loop {
            if self.calculate()?.is_none() {
                return Ok(());
            }

            let answer = self.prompt("\nDo you want to perform another calculation? (yes/no): ")?;
            match answer {
                Some(answer) if answer.eq_ignore_ascii_case("yes") => {}
                _ => return Ok(()),
            }
        }
    }

    /// Collects one problem, solves it, and prints the outcome.
    ///
    /// Returns `None` if input ended before the problem was complete.
    fn calculate(&mut self) -> anyhow::Result<Option<()>> {
        let Some(function) = self.read_function()? else {
            return Ok(None);
        };

        writeln!(
            self.output,
            "\nNow, enter the interval [a, b] where you want to search for the root."
        )?;
        let Some(a) = self.read_value("Enter the left boundary (a): ", |_| true)? else {
            return Ok(None);
        };
        let Some(b) = self.read_value("Enter the right boundary (b): ", |_| true)? else {
            return Ok(None);
        };

        let desired_error_percent = match self.desired_error {
            Some(value) => value,
            None => match self.read_value(
                "Enter the desired approximate percent relative error (%): ",
                |value| value >= 0.0,
            )? {
                Some(value) => value,
                None => return Ok(None),
            },
        };
        let config = Config {
            desired_error_percent,
            ..self.config
        };

        tracing::debug!(function = %function, a, b, ?config, "solving");
        let result = bisection::solve_unobserved(&function, [a, b], &config);

        writeln!(self.output)?;
        present::outcome(&mut self.output, &result, &config)?;
        Ok(Some(()))
    }

    fn read_function(&mut self) -> anyhow::Result<Option<Expr>> {
        loop {
            let Some(line) = self.prompt("Enter the function: ")? else {
                return Ok(None);
            };
            match Expr::parse(&line) {
                Ok(expr) => return Ok(Some(expr)),
                Err(err) => writeln!(self.output, "Invalid function: {err}")?,
            }
        }
    }

    /// Prompts for a constant expression until one evaluates to a finite
    /// value accepted by `accept`.
    fn read_value(
        &mut self,
        message: &str,
        accept: impl Fn(f64) -> bool,
    ) -> anyhow::Result<Option<f64>> {
        loop {
            let Some(line) = self.prompt(message)? else {
                return Ok(None);
            };
            match evaluate_constant(&line) {
                Ok(value) if value.is_finite() && accept(value) => return Ok(Some(value)),
                Ok(value) => writeln!(self.output, "Invalid value: {value} is out of range")?,
                Err(err) => writeln!(self.output, "Invalid value: {err}")?,
            }
        }
    }

    /// Writes `message` and reads one trimmed line, or `None` at end of input.
    fn prompt(&mut self, message: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }
}
