use std::error::Error as _;

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use bisect_solvers::equation::bisection::{self, Report};

use crate::{form::Form, midpoints::MidpointTrace};

const NO_SIGN_CHANGE: &str =
    "Bisection method may not converge as f(a) and f(b) must have opposite signs.";

/// The rendered result of the last successful solve.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Outcome {
    pub(crate) report: String,
    pub(crate) midpoints: Vec<[f64; 2]>,
}

#[derive(Debug, Default)]
pub(crate) struct BisectApp {
    form: Form,
    outcome: Option<Outcome>,
    error: Option<String>,
}

impl BisectApp {
    /// Parses the form and runs the solver, replacing the previous outcome.
    ///
    /// Failures clear the outcome and set the error message instead.
    fn solve(&mut self) {
        self.outcome = None;
        self.error = None;

        let problem = match self.form.parse() {
            Ok(problem) => problem,
            Err(err) => {
                tracing::debug!(%err, "rejected form");
                self.error = Some(err.to_string());
                return;
            }
        };

        let mut midpoints = MidpointTrace::default();
        let result = bisection::solve(
            &problem.function,
            problem.bracket,
            &problem.config,
            &mut midpoints,
        );

        match result {
            Ok(solution) => {
                self.outcome = Some(Outcome {
                    report: Report::new(&solution, &problem.config).to_string(),
                    midpoints: midpoints.into_points(),
                });
            }
            Err(bisection::Error::NoSignChange { fa, fb, .. }) => {
                self.error = Some(format!("{NO_SIGN_CHANGE}\nf(a) = {fa}, f(b) = {fb}"));
            }
            Err(err) => {
                let mut message = err.to_string();
                let mut source = err.source();
                while let Some(cause) = source {
                    message.push_str(&format!(": {cause}"));
                    source = cause.source();
                }
                tracing::warn!(%message, "solve failed");
                self.error = Some(message);
            }
        }
    }

    fn form_ui(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("problem")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                let form = &mut self.form;
                for (label, text) in [
                    ("Function f(x)", &mut form.function),
                    ("Left boundary (a)", &mut form.a),
                    ("Right boundary (b)", &mut form.b),
                    ("Desired error (%)", &mut form.desired_error),
                    ("Tolerance", &mut form.tolerance),
                    ("Max iterations", &mut form.max_iters),
                ] {
                    ui.label(label);
                    ui.add(egui::TextEdit::singleline(text).desired_width(320.0));
                    ui.end_row();
                }
            });

        ui.add_space(6.0);
        if ui.button("Solve").clicked() {
            self.solve();
        }
    }

    fn error_window(&mut self, ctx: &egui::Context) {
        let Some(message) = &self.error else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message.as_str());
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });

        if dismissed {
            self.error = None;
        }
    }
}

impl eframe::App for BisectApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Bisection Method Calculator");
            ui.add_enabled_ui(self.error.is_none(), |ui| self.form_ui(ui));
            ui.separator();

            let Some(outcome) = &self.outcome else {
                return;
            };

            egui::ScrollArea::both()
                .max_height(ui.available_height() * 0.5)
                .show(ui, |ui| {
                    ui.monospace(outcome.report.as_str());
                });

            ui.separator();
            Plot::new("midpoints")
                .legend(Legend::default())
                .x_axis_label("Iteration")
                .y_axis_label("c")
                .show(ui, |plot_ui| {
                    let points: PlotPoints = outcome.midpoints.iter().copied().collect();
                    plot_ui.line(Line::new(points).name("Midpoint c"));
                });
        });

        self.error_window(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solved(form: Form) -> BisectApp {
        let mut app = BisectApp {
            form,
            ..BisectApp::default()
        };
        app.solve();
        app
    }

    #[test]
    fn default_form_solves() {
        let app = solved(Form::default());
        let outcome = app.outcome.expect("default problem has a root");

        assert!(app.error.is_none());
        assert!(outcome.report.contains("Iterations:"));
        assert_eq!(
            outcome.midpoints.len(),
            outcome.report.lines().filter(|line| line.starts_with(char::is_numeric)).count()
        );
    }

    #[test]
    fn sign_rule_violation_opens_error() {
        let app = solved(Form {
            function: "cos(x) - 3".to_owned(),
            a: "0".to_owned(),
            b: "2".to_owned(),
            ..Form::default()
        });

        assert!(app.outcome.is_none());
        assert!(app.error.expect("error shown").starts_with(NO_SIGN_CHANGE));
    }

    #[test]
    fn evaluation_failure_opens_error() {
        let app = solved(Form {
            function: "log(x)".to_owned(),
            a: "-1".to_owned(),
            b: "2".to_owned(),
            ..Form::default()
        });

        let message = app.error.expect("error shown");
        assert!(message.starts_with("function evaluation failed at x = -1"));
    }

    #[test]
    fn parse_failure_opens_error() {
        let app = solved(Form {
            function: "x +".to_owned(),
            ..Form::default()
        });

        assert!(app.outcome.is_none());
        assert!(app.error.expect("error shown").starts_with("Invalid function:"));
    }

    #[test]
    fn max_iterations_still_shows_table() {
        let app = solved(Form {
            function: "x**2 - 2".to_owned(),
            a: "0".to_owned(),
            b: "2".to_owned(),
            desired_error: "0".to_owned(),
            max_iters: "5".to_owned(),
            ..Form::default()
        });
        let outcome = app.outcome.expect("max iterations is not an error");

        assert!(outcome.report.starts_with("Maximum number of iterations reached."));
        assert_eq!(outcome.midpoints.len(), 5);
        assert_eq!(outcome.midpoints[4], [5.0, 1.4375]);
    }
}
