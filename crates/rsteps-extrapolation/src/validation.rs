//! Input validation shared by the extrapolation methods.
//!
//! Shapes and argument ranges are checked up front, before any trajectory
//! computation; a failing input never produces a partial result.

use burn::tensor::Tensor;
use burn::tensor::backend::Backend;
use rsteps_core::VelocityField;

use crate::error::{ExtrapolationError, Result};

/// Validate a field/velocity pair and the requested timestep count.
///
/// Returns the common `[rows, cols]` shape on success.
pub fn validate_inputs<B: Backend>(
    precip: &Tensor<B, 2>,
    velocity: &VelocityField<B>,
    num_timesteps: usize,
) -> Result<[usize; 2]> {
    let shape = precip.dims();

    if velocity.shape() != shape {
        return Err(ExtrapolationError::ShapeMismatch {
            expected: shape.to_vec(),
            actual: velocity.shape().to_vec(),
        });
    }

    validate_timesteps(num_timesteps)?;

    Ok(shape)
}

/// Validate the output timestep count.
pub fn validate_timesteps(num_timesteps: usize) -> Result<()> {
    if num_timesteps == 0 {
        return Err(ExtrapolationError::invalid_argument(
            "num_timesteps must be positive",
        ));
    }
    Ok(())
}
