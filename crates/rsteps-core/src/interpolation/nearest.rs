//! Nearest neighbor interpolation implementation.

use burn::tensor::Tensor;
use burn::tensor::backend::Backend;
use serde::{Deserialize, Serialize};

use super::trait_::Interpolator;

/// Nearest Neighbor Interpolator.
///
/// Rounds each coordinate to the closest integer cell and returns that
/// cell's value. Coordinates outside the field extent are clamped to the
/// nearest valid cell.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NearestNeighborInterpolator;

impl NearestNeighborInterpolator {
    /// Create a new nearest neighbor interpolator.
    pub fn new() -> Self {
        Self
    }
}

impl Default for NearestNeighborInterpolator {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Backend> Interpolator<B> for NearestNeighborInterpolator {
    fn interpolate(&self, data: &Tensor<B, 2>, indices: Tensor<B, 2>) -> Tensor<B, 1> {
        let [rows, cols] = data.dims();

        // indices columns are (x, y)
        let x = indices.clone().narrow(1, 0, 1).squeeze::<1>(1);
        let y = indices.narrow(1, 1, 1).squeeze::<1>(1);

        // Round to nearest integer and clamp
        let x_i = x.round().clamp(0.0, (cols - 1) as f64).int();
        let y_i = y.round().clamp(0.0, (rows - 1) as f64).int();

        // Stride for [rows, cols] layout
        let stride_y = cols as i32;

        let idx = y_i * stride_y + x_i;
        let flat_data = data.clone().reshape([rows * cols]);
        flat_data.gather(0, idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn_ndarray::NdArray;

    type TestBackend = NdArray<f32>;

    #[test]
    fn test_nearest_neighbor_at_grid_points() {
        let device = Default::default();
        let data = Tensor::<TestBackend, 2>::from_floats([[0.0, 1.0], [2.0, 3.0]], &device);
        let interpolator = NearestNeighborInterpolator::new();

        let indices = Tensor::<TestBackend, 2>::from_floats([[0.0, 0.0], [1.0, 1.0]], &device);
        let values = interpolator.interpolate(&data, indices);
        let values_data = values.into_data();
        let slice = values_data.as_slice::<f32>().unwrap();

        assert_eq!(slice[0], 0.0);
        assert_eq!(slice[1], 3.0);
    }

    #[test]
    fn test_nearest_neighbor_rounding() {
        let device = Default::default();
        let data = Tensor::<TestBackend, 2>::from_floats([[0.0, 1.0], [2.0, 3.0]], &device);
        let interpolator = NearestNeighborInterpolator::new();

        // 0.4 rounds down, 0.6 rounds up
        let indices = Tensor::<TestBackend, 2>::from_floats([[0.4, 0.4], [0.6, 0.6]], &device);
        let values = interpolator.interpolate(&data, indices);
        let values_data = values.into_data();
        let slice = values_data.as_slice::<f32>().unwrap();

        assert_eq!(slice[0], 0.0);
        assert_eq!(slice[1], 3.0);
    }

    #[test]
    fn test_nearest_neighbor_axes() {
        let device = Default::default();
        // Row 0: 0, 1. Row 1: 2, 3.
        let data = Tensor::<TestBackend, 2>::from_floats([[0.0, 1.0], [2.0, 3.0]], &device);
        let interpolator = NearestNeighborInterpolator::new();

        // (x=1, y=0) is column 1, row 0
        let indices = Tensor::<TestBackend, 2>::from_floats([[1.0, 0.0]], &device);
        let val = interpolator
            .interpolate(&data, indices)
            .into_data()
            .as_slice::<f32>()
            .unwrap()[0];

        assert_eq!(val, 1.0);
    }

    #[test]
    fn test_nearest_neighbor_out_of_bounds_clamps() {
        let device = Default::default();
        let data = Tensor::<TestBackend, 2>::from_floats([[0.0, 1.0], [2.0, 3.0]], &device);
        let interpolator = NearestNeighborInterpolator::new();

        let indices =
            Tensor::<TestBackend, 2>::from_floats([[-2.0, 0.0], [4.0, 4.0]], &device);
        let values = interpolator.interpolate(&data, indices);
        let values_data = values.into_data();
        let slice = values_data.as_slice::<f32>().unwrap();

        assert_eq!(slice[0], 0.0);
        assert_eq!(slice[1], 3.0);
    }
}
