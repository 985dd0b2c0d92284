//! Off-the-shelf logistic regression used as the accuracy baseline.
//!
//! `linfa-logistic` minimises the L2-regularised log-loss with L-BFGS, using
//! `alpha = 1.0` by default (the same penalty as scikit-learn's `C = 1.0`).

use linfa::prelude::*;
use linfa_logistic::LogisticRegression;
use ndarray::{Array1, Array2};

use crate::error::Result;

/// Fits the baseline on the training split and labels `x_test`.
pub fn reference_predictions(
    x_train: &Array2<f64>,
    y_train: &Array1<usize>,
    x_test: &Array2<f64>,
    fit_intercept: bool,
) -> Result<Array1<usize>> {
    let dataset = Dataset::new(x_train.clone(), y_train.clone());
    let model = LogisticRegression::default()
        .with_intercept(fit_intercept)
        .fit(&dataset)?;

    log::debug!(
        "reference model: intercept {}, params {}",
        model.intercept(),
        model.params()
    );

    let predictions: Array1<usize> = model.predict(x_test);

    Ok(predictions)
}
