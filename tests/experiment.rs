//! End-to-end runs of the trainer and the experiment pipeline.

use approx::assert_abs_diff_eq;
use ndarray::{array, Array1, Array2};

use logistic::config::{ExperimentConfig, TrainerConfig};
use logistic::error::Error;
use logistic::experiment::{evaluate, run};
use logistic::gradient_descent::{GradientLogisticTrainer, DEFAULT_CUTOFF};
use logistic::parse::z_standard;

// ---------------------------------------------------------------------------
// Trainer on a four-point line
// ---------------------------------------------------------------------------

#[test]
fn standardized_line_is_separated_by_log_loss() {
    let x = z_standard(&array![[0.0], [1.0], [2.0], [3.0]]).unwrap();
    let y = array![0, 0, 1, 1];
    let mut model = GradientLogisticTrainer::new(TrainerConfig {
        fit_intercept: true,
        learning_rate: 0.1,
        epoch_count: 50,
    })
    .unwrap();

    let errors = model.fit_log_loss(&x, &y).unwrap();

    assert_eq!(errors.len(), 50);
    assert!(model
        .coefficients()
        .unwrap()
        .abs_diff_eq(&array![0.001_404_082_223_338_806_3, 1.367_631_511_482_866_3], 1e-9));
    assert_eq!(model.predict(&x, DEFAULT_CUTOFF).unwrap(), y);
}

#[test]
fn fresh_trainer_refuses_to_predict() {
    let model = GradientLogisticTrainer::default();

    let err = model.predict(&array![[0.0], [1.0]], DEFAULT_CUTOFF).unwrap_err();

    assert!(matches!(err, Error::NotFitted));
}

// ---------------------------------------------------------------------------
// Full pipeline
// ---------------------------------------------------------------------------

fn synthetic(n: usize) -> (Array2<f64>, Array1<usize>) {
    let x = Array2::from_shape_fn((n, 3), |(i, j)| match j {
        0 => i as f64,
        1 => (2 * i + i % 3) as f64,
        _ => (i % 5) as f64 - 3.0 + 0.5 * i as f64,
    });
    let y = Array1::from_shape_fn(n, |i| usize::from(i >= n / 2));

    (x, y)
}

#[test]
fn evaluate_scores_all_three_models() {
    let (x, y) = synthetic(50);
    let config = ExperimentConfig::default();

    let report = evaluate(&x, &y, &config).unwrap();

    assert_eq!(report.mse_errors.len(), 1000);
    assert_eq!(report.logloss_errors.len(), 1000);
    assert!(report.mse_errors.iter().all(|epoch| epoch.len() == 40));
    assert!(report.mse_accuracy >= 0.7, "mse accuracy {}", report.mse_accuracy);
    assert!(report.logloss_accuracy >= 0.7, "log-loss accuracy {}", report.logloss_accuracy);
    assert!(report.reference_accuracy >= 0.7, "reference accuracy {}", report.reference_accuracy);
    assert!(report.to_string().contains("Answers to the questions:"));
}

#[test]
fn evaluate_is_reproducible() {
    let (x, y) = synthetic(50);
    let config = ExperimentConfig {
        trainer: TrainerConfig {
            epoch_count: 20,
            ..TrainerConfig::default()
        },
        ..ExperimentConfig::default()
    };

    let first = evaluate(&x, &y, &config).unwrap();
    let second = evaluate(&x, &y, &config).unwrap();

    assert_eq!(first.mse_errors, second.mse_errors);
    assert_eq!(first.logloss_errors, second.logloss_errors);
    assert_abs_diff_eq!(first.mse_accuracy, second.mse_accuracy);
}

#[test]
fn run_reads_the_configured_csv() {
    let (x, y) = synthetic(40);
    let mut csv = String::from("id,diagnosis,radius_worst,perimeter_worst,concave points_worst\n");
    for (i, (row, &label)) in x.rows().into_iter().zip(&y).enumerate() {
        let diagnosis = if label == 1 { "B" } else { "M" };
        csv.push_str(&format!("{i},{diagnosis},{},{},{}\n", row[2], row[1], row[0]));
    }

    let path = std::env::temp_dir().join(format!("logistic-run-{}.csv", std::process::id()));
    std::fs::write(&path, csv).unwrap();

    let config = ExperimentConfig {
        data_path: path.clone(),
        trainer: TrainerConfig {
            epoch_count: 200,
            ..TrainerConfig::default()
        },
        ..ExperimentConfig::default()
    };
    let report = run(&config);
    std::fs::remove_file(&path).unwrap();

    let report = report.unwrap();
    assert_eq!(report.mse_errors[0].len(), 32);
    assert!(report.reference_accuracy >= 0.7);
}

#[test]
fn run_reports_missing_file() {
    let config = ExperimentConfig {
        data_path: "does/not/exist.csv".into(),
        ..ExperimentConfig::default()
    };

    assert!(matches!(run(&config), Err(Error::Io(_))));
}
