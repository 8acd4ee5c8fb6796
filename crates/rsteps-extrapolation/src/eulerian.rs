//! Eulerian persistence.
//!
//! The null-advection baseline: the last observed field is repeated
//! unchanged for every future timestep. Velocity values are ignored, but
//! the inputs are validated with the same rules as the advecting methods
//! so persistence can stand in for them interchangeably.

use burn::tensor::Tensor;
use burn::tensor::backend::Backend;
use rsteps_core::VelocityField;

use crate::error::Result;
use crate::options::ExtrapolationOptions;
use crate::sequence::Extrapolation;
use crate::validation;

/// Repeat the input field unchanged for `num_timesteps` output steps.
///
/// When `options.return_displacement` is set, the displacement grids are
/// all zero: persistence moves nothing.
pub fn extrapolate<B: Backend>(
    precip: &Tensor<B, 2>,
    velocity: &VelocityField<B>,
    num_timesteps: usize,
    _outside_value: f32,
    options: &ExtrapolationOptions,
) -> Result<Extrapolation<B>> {
    let [rows, cols] = validation::validate_inputs(precip, velocity, num_timesteps)?;
    options.validate()?;

    let device = precip.device();

    let fields = (0..num_timesteps).map(|_| precip.clone()).collect();
    let displacement = options.return_displacement.then(|| {
        (0..num_timesteps)
            .map(|_| Tensor::<B, 3>::zeros([2, rows, cols], &device))
            .collect()
    });

    Ok(Extrapolation::new(fields, displacement))
}
