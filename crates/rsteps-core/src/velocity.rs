//! Velocity field type for advection.
//!
//! A velocity field holds the x- and y-components of the per-timestep
//! displacement at each grid cell, co-registered with the precipitation
//! field it advects. Components are expressed in grid-cell units per
//! timestep; callers pre-scale physical motion vectors to the grid
//! resolution and timestep of the extrapolation.

use burn::tensor::Tensor;
use burn::tensor::backend::Backend;

/// Dense 2D velocity field.
///
/// Holds two grids of identical shape: `u` is the x-component
/// (columns/timestep) and `v` the y-component (rows/timestep) of the
/// displacement at each cell.
///
/// # Type Parameters
/// * `B` - The Burn backend
#[derive(Debug, Clone)]
pub struct VelocityField<B: Backend> {
    /// x-component (columns per timestep), shape [rows, cols]
    u: Tensor<B, 2>,
    /// y-component (rows per timestep), shape [rows, cols]
    v: Tensor<B, 2>,
}

impl<B: Backend> VelocityField<B> {
    /// Create a new velocity field from its components.
    ///
    /// # Panics
    /// Panics if the two components differ in shape; a velocity field with
    /// inconsistent components is a programmer error, not a runtime input.
    pub fn new(u: Tensor<B, 2>, v: Tensor<B, 2>) -> Self {
        assert_eq!(
            u.dims(),
            v.dims(),
            "velocity components must have identical shapes"
        );
        Self { u, v }
    }

    /// Create a velocity field from a stacked `[2, rows, cols]` tensor,
    /// where index 0 along the leading axis is the x-component.
    ///
    /// # Panics
    /// Panics if the leading dimension is not 2.
    pub fn from_tensor(stacked: Tensor<B, 3>) -> Self {
        let dims = stacked.dims();
        assert_eq!(dims[0], 2, "stacked velocity must have shape [2, rows, cols]");

        let u = stacked.clone().narrow(0, 0, 1).squeeze::<2>(0);
        let v = stacked.narrow(0, 1, 1).squeeze::<2>(0);
        Self { u, v }
    }

    /// Create an all-zero velocity field for the given shape.
    pub fn zeros(shape: [usize; 2], device: &B::Device) -> Self {
        Self {
            u: Tensor::zeros(shape, device),
            v: Tensor::zeros(shape, device),
        }
    }

    /// Create a spatially uniform velocity field.
    ///
    /// # Arguments
    /// * `u` - x-component (columns per timestep) at every cell
    /// * `v` - y-component (rows per timestep) at every cell
    /// * `shape` - Field shape `[rows, cols]`
    /// * `device` - Device to create the tensors on
    pub fn constant(u: f32, v: f32, shape: [usize; 2], device: &B::Device) -> Self {
        Self {
            u: Tensor::full(shape, u, device),
            v: Tensor::full(shape, v, device),
        }
    }

    /// Get the x-component grid.
    pub fn u(&self) -> &Tensor<B, 2> {
        &self.u
    }

    /// Get the y-component grid.
    pub fn v(&self) -> &Tensor<B, 2> {
        &self.v
    }

    /// Get the field shape as `[rows, cols]`.
    pub fn shape(&self) -> [usize; 2] {
        self.u.dims()
    }
}
