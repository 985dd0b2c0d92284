use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Hyper-parameters of the gradient trainer.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TrainerConfig {
    /// Prepend a constant `1.0` column before fitting and predicting.
    pub fit_intercept: bool,
    pub learning_rate: f64,
    /// Number of full passes over the training set.
    pub epoch_count: usize,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            fit_intercept: true,
            learning_rate: 0.01,
            epoch_count: 100,
        }
    }
}

/// Everything needed to run the comparison end to end.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct ExperimentConfig {
    pub data_path: PathBuf,
    /// Dataset columns used as features, in matrix column order.
    pub feature_columns: Vec<String>,
    pub train_size: f64,
    pub seed: u64,
    pub cutoff: f64,
    pub trainer: TrainerConfig,
}

pub const DEFAULT_FEATURE_COLUMNS: [&str; 3] =
    ["concave points_worst", "perimeter_worst", "radius_worst"];

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/breast-cancer.csv"),
            feature_columns: DEFAULT_FEATURE_COLUMNS
                .iter()
                .map(ToString::to_string)
                .collect(),
            train_size: 0.8,
            seed: 43,
            cutoff: 0.5,
            trainer: TrainerConfig {
                epoch_count: 1000,
                ..TrainerConfig::default()
            },
        }
    }
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ExperimentConfig> {
    let content = std::fs::read_to_string(&path)?;
    let config: ExperimentConfig = serde_json::from_str(&content)?;
    log::debug!("loaded config from {}: {config:?}", path.as_ref().display());

    Ok(config)
}
