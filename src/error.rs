use thiserror::Error;
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Expected `x` and `y` to have same number of rows, got {0} != {1}")]
    MismatchedShapes(usize, usize),
    #[error("Expected {expected} columns to match the fitted coefficients, got {got}")]
    MismatchedColumns { expected: usize, got: usize },
    #[error("Model is not fitted, call `fit_mse` or `fit_log_loss` first")]
    NotFitted,
    #[error("Labels must be 0 or 1, got {0}")]
    InvalidLabel(usize),
    #[error("learning_rate must be a positive, finite number")]
    InvalidLearningRate,
    #[error("epoch_count must be at least 1")]
    InvalidEpochCount,
    #[error("train_size must leave both train and test sets non-empty, got {0}")]
    InvalidTrainSize(f64),
    #[error("Column `{0}` not found in dataset header")]
    MissingColumn(String),
    #[error("Unexpected diagnosis `{0}`")]
    UnknownDiagnosis(String),
    #[error("Cannot parse `{value}` in column `{column}` as a number")]
    InvalidValue { column: String, value: String },
    #[error("Dataset is empty")]
    EmptyDataset,
    #[error("Failed to draw error curves: {0}")]
    Plot(String),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Reference(#[from] linfa_logistic::error::Error),
}
