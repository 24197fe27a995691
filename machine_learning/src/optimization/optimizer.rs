/// Defines how parameters move from step `t` to `t+1` given their gradient.
pub trait Optimizer {
    /// Updates the parameters in place.
    ///
    /// # Arguments
    /// * `params` - The parameters that are going to be modified.
    /// * `grad` - The gradient of the loss with respect to `params`.
    fn update_params(&mut self, params: &mut [f32], grad: &[f32]);
}
