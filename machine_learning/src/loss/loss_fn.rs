use ndarray::{Array1, ArrayView1};

/// Measures how far a prediction is from the expected output.
pub trait LossFn {
    /// The loss value for the given predictions.
    fn loss(&self, y_pred: ArrayView1<f32>, y: ArrayView1<f32>) -> f32;

    /// The derivative of the loss with respect to each prediction.
    fn loss_prime(&self, y_pred: ArrayView1<f32>, y: ArrayView1<f32>) -> Array1<f32>;
}
