/// A scalar linear model, `y = weight * x + bias`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearModel {
    pub weight: f32,
    pub bias: f32,
}

impl LinearModel {
    /// Creates a new `LinearModel`.
    pub fn new(weight: f32, bias: f32) -> Self {
        Self { weight, bias }
    }

    /// Builds a model out of a flat `[weight, bias]` parameter slice.
    pub(crate) fn from_params(params: &[f32; 2]) -> Self {
        Self::new(params[0], params[1])
    }

    /// Applies the model to `x`.
    ///
    /// Non-finite parameters are not validated, whatever the arithmetic yields is returned.
    #[inline]
    pub fn predict(&self, x: f32) -> f32 {
        self.weight * x + self.bias
    }

    /// Whether both parameters are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.weight.is_finite() && self.bias.is_finite()
    }
}

/// Predicts the output for `x` using a fitted `model`.
#[inline]
pub fn predict(model: &LinearModel, x: f32) -> f32 {
    model.predict(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predict_applies_weight_and_bias() {
        let model = LinearModel::new(2., -1.);
        assert_eq!(predict(&model, 5.), 9.);
        assert_eq!(predict(&model, 0.), -1.);
    }

    #[test]
    fn predict_is_deterministic() {
        let model = LinearModel::new(0.37, 1.9);
        let first = predict(&model, 3.3);
        assert!((0..10).all(|_| predict(&model, 3.3) == first));
    }

    #[test]
    fn non_finite_params_propagate() {
        let model = LinearModel::new(f32::NAN, 0.);
        assert!(!model.is_finite());
        assert!(predict(&model, 1.).is_nan());

        let model = LinearModel::new(f32::INFINITY, 0.);
        assert_eq!(predict(&model, 2.), f32::INFINITY);
    }
}
