use ndarray::{Array1, ArrayView1};

use super::LossFn;

/// Mean squared error loss function.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mse;

impl Mse {
    /// Returns a new `Mse`.
    pub fn new() -> Self {
        Self
    }
}

impl LossFn for Mse {
    fn loss(&self, y_pred: ArrayView1<f32>, y: ArrayView1<f32>) -> f32 {
        (&y_pred - &y)
            .mapv(|x| x.powi(2))
            .mean()
            .unwrap_or_default()
    }

    fn loss_prime(&self, y_pred: ArrayView1<f32>, y: ArrayView1<f32>) -> Array1<f32> {
        (&y_pred - &y) * (2.0 / y_pred.len() as f32)
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn zero_on_exact_predictions() {
        let y = array![1., 2., 3.];
        assert_eq!(Mse.loss(y.view(), y.view()), 0.);
        assert!(Mse.loss_prime(y.view(), y.view()).iter().all(|&d| d == 0.));
    }

    #[test]
    fn mean_of_squared_residuals() {
        let y_pred = array![1., 2., 5.];
        let y = array![1., 0., 3.];

        // (0 + 4 + 4) / 3
        assert!((Mse.loss(y_pred.view(), y.view()) - 8. / 3.).abs() < 1e-6);
        let d = Mse.loss_prime(y_pred.view(), y.view());
        let expected = [0., 4. / 3., 4. / 3.];
        assert!(d.iter().zip(expected).all(|(a, b)| (a - b).abs() < 1e-6));
    }

    #[test]
    fn empty_input_has_no_loss() {
        let empty = ndarray::Array1::<f32>::zeros(0);
        assert_eq!(Mse.loss(empty.view(), empty.view()), 0.);
    }
}
