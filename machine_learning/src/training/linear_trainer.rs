use std::num::NonZeroUsize;

use log::{debug, info, trace};
use ndarray::ArrayView1;
use rand::{SeedableRng, rngs::StdRng};

use super::{Trainer, standardizer::Standardizer};
use crate::{
    MlErr, Result,
    dataset::Dataset,
    initialization::ParamInit,
    loss::{LossFn, Mse},
    model::LinearModel,
    optimization::{GradientDescent, Optimizer},
};

/// The outcome of a training invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Fit {
    pub model: LinearModel,
    /// The loss measured at the start of each epoch, before its update.
    pub losses: Vec<f32>,
}

impl Fit {
    /// The loss of the last epoch, if any ran.
    pub fn final_loss(&self) -> Option<f32> {
        self.losses.last().copied()
    }
}

/// Trains a `LinearModel` with full-batch gradient descent.
///
/// Every call to `train` starts from freshly initialized parameters and runs exactly
/// `epochs` passes over the whole snapshot, there is no early stopping. The descent runs on
/// standardized inputs and the fitted model is mapped back to raw inputs.
#[derive(Debug, Clone)]
pub struct LinearTrainer<O = GradientDescent, L = Mse>
where
    O: Optimizer,
    L: LossFn,
{
    epochs: NonZeroUsize,
    optimizer: O,
    loss_fn: L,
    weight_init: ParamInit,
    bias_init: ParamInit,
    seed: Option<u64>,
}

impl LinearTrainer {
    /// Returns a `LinearTrainer` using gradient descent over the mean squared error.
    ///
    /// # Arguments
    /// * `epochs` - The amount of full passes over the dataset per invocation.
    /// * `learning_rate` - The gradient descent step length.
    pub fn gradient_descent(epochs: NonZeroUsize, learning_rate: f32) -> Self {
        Self::new(epochs, GradientDescent::new(learning_rate), Mse::new())
    }
}

impl<O, L> LinearTrainer<O, L>
where
    O: Optimizer,
    L: LossFn,
{
    /// Returns a new `LinearTrainer`.
    ///
    /// The weight starts Xavier uniform and the bias at zero, the way a single dense unit
    /// is initialized.
    ///
    /// # Arguments
    /// * `epochs` - The amount of full passes over the dataset per invocation.
    /// * `optimizer` - The optimizer that dictates how to update the parameters.
    /// * `loss_fn` - The loss function to minimize.
    pub fn new(epochs: NonZeroUsize, optimizer: O, loss_fn: L) -> Self {
        Self {
            epochs,
            optimizer,
            loss_fn,
            weight_init: ParamInit::XavierUniform,
            bias_init: ParamInit::Const { value: 0. },
            seed: None,
        }
    }

    /// Sets the initialization policy of each parameter.
    pub fn with_init(mut self, weight_init: ParamInit, bias_init: ParamInit) -> Self {
        self.weight_init = weight_init;
        self.bias_init = bias_init;
        self
    }

    /// Makes every invocation draw its initial parameters from `StdRng::seed_from_u64(seed)`.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn epochs(&self) -> usize {
        self.epochs.get()
    }

    fn generate_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    fn init_model(&self) -> Result<LinearModel> {
        let mut rng = self.generate_rng();
        let weight = self.weight_init.sample(&mut rng)?;
        let bias = self.bias_init.sample(&mut rng)?;

        Ok(LinearModel::new(weight, bias))
    }
}

impl<O, L> Trainer for LinearTrainer<O, L>
where
    O: Optimizer,
    L: LossFn,
{
    fn train(&mut self, dataset: &Dataset) -> Result<Fit> {
        if dataset.is_empty() {
            return Err(MlErr::EmptyDataset);
        }

        let (xs, ys) = dataset.columns();
        let standardizer = Standardizer::fit(ArrayView1::from(&xs[..]));
        let x = standardizer.transform(ArrayView1::from(&xs[..]));
        let y = ArrayView1::from(&ys[..]);

        let init = self.init_model()?;
        let mut params = {
            let scaled = standardizer.to_scaled(init);
            [scaled.weight, scaled.bias]
        };

        let epochs = self.epochs.get();
        let mut losses = Vec::with_capacity(epochs);

        debug!(
            samples = dataset.len(),
            epochs = epochs,
            weight = init.weight,
            bias = init.bias;
            "training linear model"
        );

        for epoch in 0..epochs {
            let model = LinearModel::from_params(&params);
            let y_pred = x.mapv(|x| model.predict(x));

            let loss = self.loss_fn.loss(y_pred.view(), y);
            let d = self.loss_fn.loss_prime(y_pred.view(), y);
            let grad = [d.dot(&x), d.sum()];

            self.optimizer.update_params(&mut params, &grad);
            losses.push(loss);

            trace!(epoch = epoch, loss = loss; "epoch done");
        }

        let model = standardizer.to_raw(LinearModel::from_params(&params));
        if !model.is_finite() {
            return Err(MlErr::NumericDivergence {
                weight: model.weight,
                bias: model.bias,
            });
        }

        let fit = Fit { model, losses };

        info!(
            weight = model.weight,
            bias = model.bias,
            loss = fit.final_loss().unwrap_or_default();
            "linear model fitted"
        );

        Ok(fit)
    }
}
