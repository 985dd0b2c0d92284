use ndarray::{Array1, Array2};

use crate::config::ExperimentConfig;
use crate::error::Result;
use crate::gradient_descent::GradientLogisticTrainer;
use crate::metrics::accuracy_score;
use crate::model_selection::train_test_split;
use crate::parse::{csv_entries_to_dataset, parse, z_standard};
use crate::reference::reference_predictions;
use crate::report::Report;

/// Loads the configured dataset and compares both fits with the reference.
pub fn run(config: &ExperimentConfig) -> Result<Report> {
    let entries = parse(&config.data_path, &config.feature_columns)?;
    let (features, targets) = csv_entries_to_dataset(&entries)?;

    evaluate(&features, &targets, config)
}

/// Standardizes `features`, splits, and scores the MSE fit, the log-loss fit
/// and the reference model on the held-out rows.
pub fn evaluate(
    features: &Array2<f64>,
    targets: &Array1<usize>,
    config: &ExperimentConfig,
) -> Result<Report> {
    let features = z_standard(features)?;
    let split = train_test_split(&features, targets, config.train_size, config.seed)?;

    let mut model = GradientLogisticTrainer::new(config.trainer.clone())?;

    let mse_errors = model.fit_mse(&split.x_train, &split.y_train)?;
    let mse_accuracy = accuracy_score(&split.y_test, &model.predict(&split.x_test, config.cutoff)?)?;
    log::info!("MSE fit accuracy: {mse_accuracy:.3}");

    let logloss_errors = model.fit_log_loss(&split.x_train, &split.y_train)?;
    let logloss_accuracy =
        accuracy_score(&split.y_test, &model.predict(&split.x_test, config.cutoff)?)?;
    log::info!("log-loss fit accuracy: {logloss_accuracy:.3}");

    let reference = reference_predictions(
        &split.x_train,
        &split.y_train,
        &split.x_test,
        config.trainer.fit_intercept,
    )?;
    let reference_accuracy = accuracy_score(&split.y_test, &reference)?;
    log::info!("reference accuracy: {reference_accuracy:.3}");

    Ok(Report {
        mse_accuracy,
        logloss_accuracy,
        reference_accuracy,
        mse_errors,
        logloss_errors,
    })
}
