use ndarray::{Array1, Zip};

use crate::error::{Error, Result};

/// Fraction of positions where the predicted label equals the true one.
pub fn accuracy_score(y_true: &Array1<usize>, y_pred: &Array1<usize>) -> Result<f64> {
    if y_true.len() != y_pred.len() {
        return Err(Error::MismatchedShapes(y_true.len(), y_pred.len()));
    }
    if y_true.is_empty() {
        return Err(Error::EmptyDataset);
    }

    let correct_predictions = Zip::from(y_true)
        .and(y_pred)
        .fold(0_usize, |count, truth, prediction| {
            count + usize::from(truth == prediction)
        });

    Ok(correct_predictions as f64 / y_true.len() as f64)
}
