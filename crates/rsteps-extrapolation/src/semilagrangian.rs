//! Semi-Lagrangian backward-trajectory extrapolation.
//!
//! Implements the advection scheme of Germann et al. (2002): each output
//! grid cell is traced backward through the velocity field to its source
//! location at the initial time, and the input field is resampled there.
//! Backward (target-to-source) integration leaves no gaps or overlaps in
//! the output, unlike forward scatter advection, at the cost of sampling
//! the velocity at arbitrary continuous positions.

use burn::tensor::Tensor;
use burn::tensor::backend::Backend;
use rsteps_core::grid::generate_grid_2d;
use rsteps_core::interpolation::{Interpolator, LinearInterpolator, NearestNeighborInterpolator};
use rsteps_core::VelocityField;

use crate::error::Result;
use crate::options::{ExtrapolationOptions, Interpolation};
use crate::sequence::Extrapolation;
use crate::validation;

/// Extrapolate a precipitation field along a velocity field.
///
/// For each output timestep the per-cell backward trajectory is advanced
/// in `options.sub_steps` increments: the velocity is sampled bilinearly
/// at the current displaced position, scaled by `1 / sub_steps` and
/// accumulated. The **original** input field is then resampled at the
/// accumulated source coordinates; previously extrapolated fields are
/// never resampled, so interpolation error does not compound across
/// timesteps.
///
/// Velocity sampling always clamps positions to the field extent,
/// independent of `options.allow_outside`; a trajectory outside the
/// domain has no meaningful local velocity. The outside policy only
/// governs the final field resampling: fill with `outside_value`
/// (default) or clamp the source coordinate to the nearest valid cell.
///
/// Non-finite values in the input field propagate through interpolation;
/// a cell whose trajectory itself becomes non-finite yields
/// `outside_value`.
///
/// # Arguments
/// * `precip` - Input field `[rows, cols]`
/// * `velocity` - Co-registered velocity field, grid-cell units/timestep
/// * `num_timesteps` - Number of output timesteps, at least 1
/// * `outside_value` - Fill value for cells sourced from outside the grid
/// * `options` - See [`ExtrapolationOptions`]
///
/// # Returns
/// The extrapolated sequence, with accumulated displacement grids when
/// `options.return_displacement` is set.
pub fn extrapolate<B: Backend>(
    precip: &Tensor<B, 2>,
    velocity: &VelocityField<B>,
    num_timesteps: usize,
    outside_value: f32,
    options: &ExtrapolationOptions,
) -> Result<Extrapolation<B>> {
    let [rows, cols] = validation::validate_inputs(precip, velocity, num_timesteps)?;
    options.validate()?;

    tracing::debug!(
        "Semi-Lagrangian extrapolation: {}x{} grid, {} timesteps, {} sub-steps, {} interpolation",
        rows,
        cols,
        num_timesteps,
        options.sub_steps,
        options.interpolation.name()
    );

    let device = precip.device();
    let cells = rows * cols;

    // Target cell coordinates, flattened row-major, (x, y) columns.
    let targets = generate_grid_2d::<B>([rows, cols], &device);
    let x_target = targets.clone().narrow(1, 0, 1).squeeze::<1>(1);
    let y_target = targets.narrow(1, 1, 1).squeeze::<1>(1);

    let x_max = (cols - 1) as f32;
    let y_max = (rows - 1) as f32;

    let velocity_sampler = LinearInterpolator::new();
    let inv_sub_steps = 1.0 / options.sub_steps as f32;

    // Accumulated backward displacement per cell, in continuous grid
    // coordinates. Carried across timesteps: step t continues from the
    // trajectory state of step t-1.
    let mut dx = Tensor::<B, 1>::zeros([cells], &device);
    let mut dy = Tensor::<B, 1>::zeros([cells], &device);

    let mut fields = Vec::with_capacity(num_timesteps);
    let mut displacement = options
        .return_displacement
        .then(|| Vec::with_capacity(num_timesteps));

    for _ in 0..num_timesteps {
        for _ in 0..options.sub_steps {
            // Velocity sampling always clamps: outside the domain there is
            // no meaningful local velocity to read.
            let x_pos = (x_target.clone() - dx.clone()).clamp(0.0, x_max);
            let y_pos = (y_target.clone() - dy.clone()).clamp(0.0, y_max);
            let positions: Tensor<B, 2> =
                Tensor::cat(vec![x_pos.unsqueeze_dim(1), y_pos.unsqueeze_dim(1)], 1);

            let u = velocity_sampler.interpolate(velocity.u(), positions.clone());
            let v = velocity_sampler.interpolate(velocity.v(), positions);

            dx = dx + u.mul_scalar(inv_sub_steps);
            dy = dy + v.mul_scalar(inv_sub_steps);
        }

        let src_x = x_target.clone() - dx.clone();
        let src_y = y_target.clone() - dy.clone();
        fields.push(resample(precip, src_x, src_y, outside_value, options));

        if let Some(displacement) = &mut displacement {
            let dx_grid = dx.clone().reshape([rows, cols]);
            let dy_grid = dy.clone().reshape([rows, cols]);
            displacement.push(Tensor::stack::<3>(vec![dx_grid, dy_grid], 0));
        }
    }

    Ok(Extrapolation::new(fields, displacement))
}

/// Resample the input field at the given flattened source coordinates and
/// apply the out-of-domain policy.
fn resample<B: Backend>(
    precip: &Tensor<B, 2>,
    src_x: Tensor<B, 1>,
    src_y: Tensor<B, 1>,
    outside_value: f32,
    options: &ExtrapolationOptions,
) -> Tensor<B, 2> {
    let [rows, cols] = precip.dims();
    let x_max = (cols - 1) as f32;
    let y_max = (rows - 1) as f32;

    let (sample_x, sample_y) = if options.allow_outside {
        (src_x.clone(), src_y.clone())
    } else {
        (
            src_x.clone().clamp(0.0, x_max),
            src_y.clone().clamp(0.0, y_max),
        )
    };
    let coords: Tensor<B, 2> =
        Tensor::cat(vec![sample_x.unsqueeze_dim(1), sample_y.unsqueeze_dim(1)], 1);

    let sampled = match options.interpolation {
        Interpolation::Bilinear => LinearInterpolator::new().interpolate(precip, coords),
        Interpolation::Nearest => NearestNeighborInterpolator::new().interpolate(precip, coords),
    };

    let filled = if options.allow_outside {
        // Product of the four bound indicators; non-finite coordinates
        // fail every comparison, so an invalid trajectory lands in the
        // fill mask as well.
        let inside = src_x.clone().greater_equal_elem(0.0).float()
            * src_x.lower_equal_elem(x_max).float()
            * src_y.clone().greater_equal_elem(0.0).float()
            * src_y.lower_equal_elem(y_max).float();
        sampled.mask_fill(inside.lower_elem(0.5), outside_value)
    } else {
        sampled
    };

    filled.reshape([rows, cols])
}
