use plotters::prelude::*;
use std::fmt;
use std::path::Path;

use crate::error::{Error, Result};
use crate::gradient_descent::{mean, ErrorHistory};

/// Spread of the per-sample errors in the first and last epochs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorSummary {
    pub first_min: f64,
    pub first_max: f64,
    pub last_min: f64,
    pub last_max: f64,
}

impl ErrorSummary {
    pub fn from_history(history: &ErrorHistory) -> Self {
        let first = history.first().map_or(&[][..], Vec::as_slice);
        let last = history.last().map_or(&[][..], Vec::as_slice);

        Self {
            first_min: first.iter().copied().fold(f64::INFINITY, f64::min),
            first_max: first.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            last_min: last.iter().copied().fold(f64::INFINITY, f64::min),
            last_max: last.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        }
    }

    pub fn range_expanded(&self) -> bool {
        self.last_max - self.last_min > self.first_max - self.first_min
    }

    fn range_change(&self) -> &'static str {
        if self.range_expanded() {
            "expanded"
        } else {
            "narrowed"
        }
    }
}

#[derive(Debug, Clone)]
pub struct Report {
    pub mse_accuracy: f64,
    pub logloss_accuracy: f64,
    pub reference_accuracy: f64,
    pub mse_errors: ErrorHistory,
    pub logloss_errors: ErrorHistory,
}

impl Report {
    pub fn mse_summary(&self) -> ErrorSummary {
        ErrorSummary::from_history(&self.mse_errors)
    }

    pub fn logloss_summary(&self) -> ErrorSummary {
        ErrorSummary::from_history(&self.logloss_errors)
    }
}

fn format_epoch(errors: Option<&Vec<f64>>) -> String {
    let values: Vec<String> = errors
        .map(|epoch| epoch.iter().map(f64::to_string).collect())
        .unwrap_or_default();

    format!("[{}]", values.join(", "))
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{{'mse_accuracy': {}, 'logloss_accuracy': {}, 'reference_accuracy': {}, \
             'mse_error_first': {}, 'mse_error_last': {}, \
             'logloss_error_first': {}, 'logloss_error_last': {}}}",
            self.mse_accuracy,
            self.logloss_accuracy,
            self.reference_accuracy,
            format_epoch(self.mse_errors.first()),
            format_epoch(self.mse_errors.last()),
            format_epoch(self.logloss_errors.first()),
            format_epoch(self.logloss_errors.last()),
        )?;

        let mse = self.mse_summary();
        let logloss = self.logloss_summary();

        writeln!(f, "Answers to the questions:")?;
        writeln!(f, "1) {:.5}", mse.first_min)?;
        writeln!(f, "2) {:.5}", mse.last_min)?;
        writeln!(f, "3) {:.5}", logloss.first_max)?;
        writeln!(f, "4) {:.5}", logloss.last_max)?;
        writeln!(f, "5) {}", mse.range_change())?;
        write!(f, "6) {}", logloss.range_change())
    }
}

fn epoch_means(history: &ErrorHistory) -> Vec<(f64, f64)> {
    history
        .iter()
        .enumerate()
        .map(|(epoch, errors)| (epoch as f64, mean(errors)))
        .collect()
}

/// Draws the mean error per epoch of both fits into an SVG file.
pub fn plot_error_curves<P: AsRef<Path>>(path: P, report: &Report) -> Result<()> {
    draw_error_curves(path.as_ref(), report).map_err(|e| Error::Plot(e.to_string()))?;
    log::info!("error curves written to {}", path.as_ref().display());

    Ok(())
}

fn draw_error_curves(
    path: &Path,
    report: &Report,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let mse = epoch_means(&report.mse_errors);
    let logloss = epoch_means(&report.logloss_errors);

    let epochs = mse.len().max(logloss.len()).max(1) as f64;
    let max_error = mse
        .iter()
        .chain(&logloss)
        .map(|&(_, error)| error)
        .filter(|error| error.is_finite())
        .fold(0.0, f64::max)
        .max(f64::EPSILON);

    let root = SVGBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Mean error per epoch", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..epochs, 0.0..max_error * 1.05)?;

    chart
        .configure_mesh()
        .x_desc("epoch")
        .y_desc("mean error")
        .draw()?;

    chart
        .draw_series(LineSeries::new(mse, RED))?
        .label("MSE")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));
    chart
        .draw_series(LineSeries::new(logloss, BLUE))?
        .label("log-loss")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    root.present()?;

    Ok(())
}
