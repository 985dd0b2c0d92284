use ndarray::{Array1, Array2, ArrayBase, ArrayView1, Axis, Data, Ix1, Ix2, Zip};

use crate::config::TrainerConfig;
use crate::error::{Error, Result};

pub const DEFAULT_CUTOFF: f64 = 0.5;

pub type ErrorHistory = Vec<Vec<f64>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossType {
    MeanSquared,
    LogLoss,
}

pub fn sigmoid(t: f64) -> f64 {
    1.0 / (1.0 + (-t).exp())
}

pub trait PredictProbability {
    type Output;

    fn width(&self) -> usize;

    fn probability_unchecked(&self, coefficients: &Array1<f64>) -> Self::Output;
}

impl<S: Data<Elem = f64>> PredictProbability for ArrayBase<S, Ix1> {
    type Output = f64;

    fn width(&self) -> usize {
        self.len()
    }

    fn probability_unchecked(&self, coefficients: &Array1<f64>) -> f64 {
        sigmoid(self.dot(coefficients))
    }
}

impl<S: Data<Elem = f64>> PredictProbability for ArrayBase<S, Ix2> {
    type Output = Array1<f64>;

    fn width(&self) -> usize {
        self.ncols()
    }

    fn probability_unchecked(&self, coefficients: &Array1<f64>) -> Array1<f64> {
        self.dot(coefficients).mapv_into(sigmoid)
    }
}

pub fn predict_probability<X: PredictProbability>(
    x: &X,
    coefficients: &Array1<f64>,
) -> Result<X::Output> {
    if x.width() != coefficients.len() {
        return Err(Error::MismatchedColumns {
            expected: coefficients.len(),
            got: x.width(),
        });
    }

    Ok(x.probability_unchecked(coefficients))
}

#[derive(Debug, Clone, Default)]
pub struct GradientLogisticTrainer {
    config: TrainerConfig,
    coefficients: Option<Array1<f64>>,
}

impl GradientLogisticTrainer {
    pub fn new(config: TrainerConfig) -> Result<Self> {
        if !(config.learning_rate.is_finite() && config.learning_rate > 0.0) {
            return Err(Error::InvalidLearningRate);
        }
        if config.epoch_count == 0 {
            return Err(Error::InvalidEpochCount);
        }

        Ok(Self {
            config,
            coefficients: None,
        })
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    /// Coefficients of the last fit, intercept first when enabled.
    pub fn coefficients(&self) -> Option<&Array1<f64>> {
        self.coefficients.as_ref()
    }

    pub fn fit_mse<S: Data<Elem = f64>>(
        &mut self,
        x: &ArrayBase<S, Ix2>,
        y: &Array1<usize>,
    ) -> Result<ErrorHistory> {
        self.fit(x, y, LossType::MeanSquared)
    }

    pub fn fit_log_loss<S: Data<Elem = f64>>(
        &mut self,
        x: &ArrayBase<S, Ix2>,
        y: &Array1<usize>,
    ) -> Result<ErrorHistory> {
        self.fit(x, y, LossType::LogLoss)
    }

    /// Resets the coefficients to zero and runs `epoch_count` passes of
    /// sequential per-sample updates, each seeing the updates before it.
    /// Probabilities are not clipped, so `ln(0)` and `exp` overflow reach the
    /// error history as `inf`/`NaN` and, through the coefficients, every
    /// later prediction.
    pub fn fit<S: Data<Elem = f64>>(
        &mut self,
        x: &ArrayBase<S, Ix2>,
        y: &Array1<usize>,
        loss_type: LossType,
    ) -> Result<ErrorHistory> {
        if x.nrows() != y.len() {
            return Err(Error::MismatchedShapes(x.nrows(), y.len()));
        }
        if let Some(&label) = y.iter().find(|&&label| label > 1) {
            return Err(Error::InvalidLabel(label));
        }

        let features = self.with_intercept(x);
        let n_samples = features.nrows() as f64;
        let mut coefficients = Array1::zeros(features.ncols());
        let mut errors = Vec::with_capacity(self.config.epoch_count);

        for epoch in 0..self.config.epoch_count {
            let mut epoch_errors = Vec::with_capacity(features.nrows());

            for (row, &label) in features.axis_iter(Axis(0)).zip(y) {
                let target = label as f64;
                let predicted = predict_probability(&row, &coefficients)?;

                let (scale, error) = match loss_type {
                    LossType::MeanSquared => (
                        (predicted - target) * predicted * (1.0 - predicted),
                        (predicted - target).powi(2),
                    ),
                    LossType::LogLoss => (
                        (predicted - target) / n_samples,
                        -target * predicted.ln() - (1.0 - target) * (1.0 - predicted).ln(),
                    ),
                };

                self.step(&mut coefficients, row, scale);
                epoch_errors.push(error);
            }

            log::trace!(
                "{loss_type:?} epoch {epoch}: mean error {}",
                mean(&epoch_errors)
            );
            errors.push(epoch_errors);
        }

        log::debug!(
            "{loss_type:?} fit on {} samples: mean error {} -> {}",
            features.nrows(),
            errors.first().map_or(f64::NAN, |epoch| mean(epoch)),
            errors.last().map_or(f64::NAN, |epoch| mean(epoch)),
        );

        self.coefficients = Some(coefficients);

        Ok(errors)
    }

    /// Positive-class probability for every row of `x`.
    pub fn predict_proba<S: Data<Elem = f64>>(&self, x: &ArrayBase<S, Ix2>) -> Result<Array1<f64>> {
        let coefficients = self.coefficients.as_ref().ok_or(Error::NotFitted)?;

        predict_probability(&self.with_intercept(x), coefficients)
    }

    /// Labels every row of `x`: `1` when its probability is at least `cutoff`.
    pub fn predict<S: Data<Elem = f64>>(
        &self,
        x: &ArrayBase<S, Ix2>,
        cutoff: f64,
    ) -> Result<Array1<usize>> {
        let probabilities = self.predict_proba(x)?;

        Ok(probabilities.mapv(|probability| usize::from(probability >= cutoff)))
    }

    // coefficient_j -= learning_rate * (scale * row_j)
    fn step(&self, coefficients: &mut Array1<f64>, row: ArrayView1<f64>, scale: f64) {
        let learning_rate = self.config.learning_rate;

        Zip::from(coefficients)
            .and(&row)
            .for_each(|coefficient, &feature| *coefficient -= learning_rate * (scale * feature));
    }

    fn with_intercept<S: Data<Elem = f64>>(&self, x: &ArrayBase<S, Ix2>) -> Array2<f64> {
        if !self.config.fit_intercept {
            return x.to_owned();
        }

        let mut extended = Array2::ones((x.nrows(), x.ncols() + 1));
        extended
            .slice_axis_mut(Axis(1), ndarray::Slice::from(1..))
            .assign(x);

        extended
    }
}

pub(crate) fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
