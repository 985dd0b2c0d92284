use ndarray::{Array1, Array2, Axis};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct TrainTestSplit {
    pub x_train: Array2<f64>,
    pub x_test: Array2<f64>,
    pub y_train: Array1<usize>,
    pub y_test: Array1<usize>,
}

/// Shuffles the rows with a seeded generator and puts the first
/// `floor(train_size * n)` of them in the training set.
pub fn train_test_split(
    x: &Array2<f64>,
    y: &Array1<usize>,
    train_size: f64,
    seed: u64,
) -> Result<TrainTestSplit> {
    if x.nrows() != y.len() {
        return Err(Error::MismatchedShapes(x.nrows(), y.len()));
    }

    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::cast_sign_loss)]
    let train_count = (x.nrows() as f64 * train_size).floor() as usize;
    if !(train_size > 0.0 && train_size < 1.0) || train_count == 0 || train_count >= x.nrows() {
        return Err(Error::InvalidTrainSize(train_size));
    }

    let mut indices: Vec<usize> = (0..x.nrows()).collect();
    indices.shuffle(&mut StdRng::seed_from_u64(seed));
    let (train, test) = indices.split_at(train_count);

    log::debug!(
        "split {} samples into {} train / {} test (seed {seed})",
        x.nrows(),
        train.len(),
        test.len()
    );

    Ok(TrainTestSplit {
        x_train: x.select(Axis(0), train),
        x_test: x.select(Axis(0), test),
        y_train: y.select(Axis(0), train),
        y_test: y.select(Axis(0), test),
    })
}
