//! `bisect`: find a root of `f(x)` on `[a, b]` with the bisection method.
//!
//! With `--function`, `-a` and `-b` the solver runs once and exits. Without
//! them an interactive session prompts for each input and repeats until the
//! user declines another calculation.

mod args;
mod logging;
mod present;
mod session;

use std::{
    io::{self, Write},
    process::ExitCode,
};

use anyhow::Context;
use clap::Parser;

use bisect_expr::{Expr, evaluate_constant};
use bisect_solvers::equation::bisection;

use args::Args;
use session::Session;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init();

    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("{err:#}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<ExitCode> {
    let config = args.config().context("invalid solver options")?;

    let (Some(function), Some(a), Some(b)) = (&args.function, &args.a, &args.b) else {
        let stdin = io::stdin();
        let mut session = Session::new(stdin.lock(), io::stdout().lock(), config, args.desired_error);
        session.run()?;
        return Ok(ExitCode::SUCCESS);
    };

    let expr = Expr::parse(function).with_context(|| format!("invalid function {function:?}"))?;
    let a = evaluate_constant(a).with_context(|| format!("invalid left bound {a:?}"))?;
    let b = evaluate_constant(b).with_context(|| format!("invalid right bound {b:?}"))?;

    tracing::debug!(function = %expr, a, b, ?config, "solving once");
    let result = bisection::solve_unobserved(&expr, [a, b], &config);

    let mut out = io::stdout().lock();
    let found = present::outcome(&mut out, &result, &config)?;
    out.flush()?;

    Ok(if found {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
