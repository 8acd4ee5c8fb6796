//! Interpolator trait for sampling values at continuous coordinates.

use burn::tensor::Tensor;
use burn::tensor::backend::Backend;

/// Interpolator trait for sampling values at continuous coordinates.
///
/// Interpolators resample a 2D field at non-integer positions, which is how
/// backward trajectories read both the velocity components and the input
/// precipitation field.
///
/// # Type Parameters
/// * `B` - The Burn backend
pub trait Interpolator<B: Backend> {
    /// Interpolate values from a 2D field at given continuous indices.
    ///
    /// # Arguments
    /// * `data` - The source field `[rows, cols]`
    /// * `indices` - The positions at which to sample, `[Batch, 2]` in
    ///               `(x, y)` order
    ///
    /// # Returns
    /// Tensor of sampled values `[Batch]`
    fn interpolate(&self, data: &Tensor<B, 2>, indices: Tensor<B, 2>) -> Tensor<B, 1>;
}
