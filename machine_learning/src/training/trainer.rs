use crate::{Result, dataset::Dataset};

use super::Fit;

/// Fits a model to a dataset snapshot.
pub trait Trainer {
    /// Trains a brand new model on `dataset`, no state is kept between invocations.
    ///
    /// # Arguments
    /// * `dataset` - The samples to fit.
    ///
    /// # Returns
    /// The fitted model along with the loss of each epoch, or an error if the training failed.
    fn train(&mut self, dataset: &Dataset) -> Result<Fit>;
}
