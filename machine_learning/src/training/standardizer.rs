use ndarray::{Array1, ArrayView1};

use crate::model::LinearModel;

/// Rescales inputs to zero mean and unit variance.
///
/// Gradient descent then sees the same curvature whatever the range of the samples, so a
/// fixed learning rate stays stable as the dataset grows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Standardizer {
    mean: f32,
    scale: f32,
}

impl Standardizer {
    /// Measures the mean and population standard deviation of `x`.
    ///
    /// A column with no spread keeps a unit scale.
    pub(crate) fn fit(x: ArrayView1<f32>) -> Self {
        let mean = x.mean().unwrap_or_default();
        let std = x.std(0.);
        let scale = if std.is_finite() && std > f32::EPSILON {
            std
        } else {
            1.
        };

        Self { mean, scale }
    }

    pub(crate) fn transform(&self, x: ArrayView1<f32>) -> Array1<f32> {
        x.mapv(|x| (x - self.mean) / self.scale)
    }

    /// Expresses a model over raw inputs as the equivalent model over standardized inputs.
    pub(crate) fn to_scaled(&self, model: LinearModel) -> LinearModel {
        LinearModel::new(
            model.weight * self.scale,
            model.bias + model.weight * self.mean,
        )
    }

    /// Expresses a model over standardized inputs as the equivalent model over raw inputs.
    pub(crate) fn to_raw(&self, model: LinearModel) -> LinearModel {
        let weight = model.weight / self.scale;
        LinearModel::new(weight, model.bias - weight * self.mean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_mean_unit_variance() {
        let x = ndarray::arr1(&[1., 2., 3., 4., 5.]);
        let standardizer = Standardizer::fit(x.view());
        let z = standardizer.transform(x.view());

        assert!(z.mean().unwrap().abs() < 1e-6);
        assert!((z.std(0.) - 1.).abs() < 1e-5);
    }

    #[test]
    fn models_map_both_ways() {
        let x = ndarray::arr1(&[-1., 0., 7., 100.]);
        let standardizer = Standardizer::fit(x.view());
        let model = LinearModel::new(2., -1.);

        let scaled = standardizer.to_scaled(model);
        let z = standardizer.transform(x.view());
        for (&x, &z) in x.iter().zip(z.iter()) {
            assert!((scaled.predict(z) - model.predict(x)).abs() < 1e-3);
        }

        let back = standardizer.to_raw(scaled);
        assert!((back.weight - 2.).abs() < 1e-5);
        assert!((back.bias + 1.).abs() < 1e-4);
    }

    #[test]
    fn constant_column_keeps_unit_scale() {
        let x = ndarray::arr1(&[3., 3., 3.]);
        let standardizer = Standardizer::fit(x.view());
        assert_eq!(standardizer.transform(x.view()), ndarray::arr1(&[0., 0., 0.]));
    }
}
