use assert_cmd::Command;

fn bisect() -> Command {
    let mut cmd = Command::cargo_bin("bisect").expect("cli binary");
    cmd.env_remove("BISECT_TOLERANCE")
        .env_remove("BISECT_MAX_ITERS")
        .env_remove("BISECT_DESIRED_ERROR")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf8 output")
}

#[test]
fn one_shot_prints_report() {
    let output = bisect()
        .args(["-f", "x**2 - 2", "-a", "0", "-b", "2"])
        .assert()
        .success()
        .get_output()
        .clone();
    let out = stdout_of(&output);

    assert!(out.starts_with("Approximate percent relative error is less than 1%."));
    assert!(out.contains("Iteration  a          b          c"));
    assert!(out.contains("Final approximation (c): 1.4140625\n"));
}

#[test]
fn one_shot_converges_without_error_threshold() {
    let output = bisect()
        .args(["-f", "x^3 - x - 2", "-a", "1", "-b", "2", "--desired-error", "0"])
        .assert()
        .success()
        .get_output()
        .clone();
    let out = stdout_of(&output);

    assert!(out.starts_with("Convergence achieved within tolerance in 22 iterations."));
}

#[test]
fn one_shot_reads_options_from_environment() {
    let output = bisect()
        .env("BISECT_MAX_ITERS", "5")
        .env("BISECT_DESIRED_ERROR", "0")
        .args(["-f", "x**2 - 2", "-a", "0", "-b", "2"])
        .assert()
        .failure()
        .get_output()
        .clone();
    let out = stdout_of(&output);

    assert!(out.starts_with("Maximum number of iterations reached."));
    assert!(out.contains("Final approximation (c): 1.4375\n"));
}

#[test]
fn one_shot_rejects_bracket_without_sign_change() {
    let output = bisect()
        .args(["-f", "x**2 + 1", "-a", "0", "-b", "1"])
        .assert()
        .failure()
        .get_output()
        .clone();

    assert!(stdout_of(&output).contains("must have opposite signs"));
}

#[test]
fn one_shot_reports_parse_errors() {
    let output = bisect()
        .args(["-f", "x ** ", "-a", "0", "-b", "1"])
        .assert()
        .failure()
        .get_output()
        .clone();

    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid function"));
}

#[test]
fn one_shot_rejects_bounds_beyond_f64() {
    let output = bisect()
        .args(["-f", "x", "-a", "-1", "-b", "1e999"])
        .assert()
        .failure()
        .get_output()
        .clone();

    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid right bound"));
    assert!(output.stdout.is_empty());
}

#[test]
fn invalid_options_fail_before_solving() {
    let output = bisect()
        .args(["-f", "x", "-a", "-1", "-b", "1", "--tolerance=-1"])
        .assert()
        .failure()
        .get_output()
        .clone();

    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid solver options"));
    assert!(output.stdout.is_empty());
}

#[test]
fn interactive_session_runs_until_declined() {
    let output = bisect()
        .write_stdin("exp(x) - 2\n0\n1\n1\nyes\nx - 1\n0\n2\n1\nno\n")
        .assert()
        .success()
        .get_output()
        .clone();
    let out = stdout_of(&output);

    assert!(out.starts_with("Welcome to the Bisection Method Calculator."));
    assert_eq!(out.matches("Iterations:").count(), 2);
    assert!(out.contains("Convergence achieved within tolerance in 1 iterations."));
}
