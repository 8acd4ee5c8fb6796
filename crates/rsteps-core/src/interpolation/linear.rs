//! Bilinear interpolation implementation.

use burn::tensor::{Int, Tensor};
use burn::tensor::backend::Backend;
use serde::{Deserialize, Serialize};

use super::trait_::Interpolator;

/// Bilinear Interpolator.
///
/// Samples a 2D field as the proximity-weighted average of the four grid
/// cells surrounding each coordinate. Coordinates outside the field extent
/// are clamped to the nearest valid cell, so out-of-domain sampling
/// degenerates to edge values; callers that need a fill value instead apply
/// it on top of the sampled result.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LinearInterpolator;

impl LinearInterpolator {
    /// Create a new bilinear interpolator.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LinearInterpolator {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Backend> Interpolator<B> for LinearInterpolator {
    fn interpolate(&self, data: &Tensor<B, 2>, indices: Tensor<B, 2>) -> Tensor<B, 1> {
        let [rows, cols] = data.dims();
        let batch_size = indices.dims()[0];
        let device = indices.device();

        // indices columns are (x, y)
        let x = indices.clone().narrow(1, 0, 1).squeeze::<1>(1);
        let y = indices.narrow(1, 1, 1).squeeze::<1>(1);

        // Compute floor coordinates
        let x0 = x.clone().floor();
        let y0 = y.clone().floor();

        // Compute interpolation weights
        let wx = x - x0.clone();
        let wy = y - y0.clone();

        // Compute x1, y1
        let x1 = x0.clone() + 1.0;
        let y1 = y0.clone() + 1.0;

        // Clamp indices to valid range
        let x0_i = x0.clamp(0.0, (cols - 1) as f64).int();
        let y0_i = y0.clamp(0.0, (rows - 1) as f64).int();
        let x1_i = x1.clamp(0.0, (cols - 1) as f64).int();
        let y1_i = y1.clamp(0.0, (rows - 1) as f64).int();

        // Stride for [rows, cols] layout
        let stride_y = cols as i32;

        // Pre-flatten data
        let flat_data = data.clone().reshape([rows * cols]);

        // Gather the 4 surrounding cell values
        let v00 = Self::gather_2d(&flat_data, &x0_i, &y0_i, stride_y);
        let v01 = Self::gather_2d(&flat_data, &x0_i, &y1_i, stride_y);
        let v10 = Self::gather_2d(&flat_data, &x1_i, &y0_i, stride_y);
        let v11 = Self::gather_2d(&flat_data, &x1_i, &y1_i, stride_y);

        // Pre-compute (1 - weight)
        let one = Tensor::<B, 1>::ones([batch_size], &device);
        let one_minus_wx = one.clone() - wx.clone();
        let one_minus_wy = one - wy.clone();

        // Bilinear interpolation
        let c0 = v00 * one_minus_wx.clone() + v10 * wx.clone();
        let c1 = v01 * one_minus_wx + v11 * wx;

        c0 * one_minus_wy + c1 * wy
    }
}

impl LinearInterpolator {
    #[inline]
    fn gather_2d<B: Backend>(
        flat_data: &Tensor<B, 1>,
        xi: &Tensor<B, 1, Int>,
        yi: &Tensor<B, 1, Int>,
        stride_y: i32,
    ) -> Tensor<B, 1> {
        let idx = yi.clone() * stride_y + xi.clone();
        flat_data.clone().gather(0, idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn_ndarray::NdArray;

    type TestBackend = NdArray<f32>;

    #[test]
    fn test_linear_interpolation_at_grid_points() {
        let device = Default::default();
        let data = Tensor::<TestBackend, 2>::from_floats([[0.0, 1.0], [2.0, 3.0]], &device);

        let interpolator = LinearInterpolator::new();

        // All 4 grid points, (x, y) order
        let indices = Tensor::<TestBackend, 2>::from_floats(
            [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]],
            &device,
        );
        let result = interpolator.interpolate(&data, indices);
        let result_data = result.into_data();
        let slice = result_data.as_slice::<f32>().unwrap();

        assert_eq!(slice[0], 0.0);
        assert_eq!(slice[1], 1.0);
        assert_eq!(slice[2], 2.0);
        assert_eq!(slice[3], 3.0);
    }

    #[test]
    fn test_linear_interpolator_center() {
        let device = Default::default();
        let data = Tensor::<TestBackend, 2>::from_floats([[0.0, 1.0], [10.0, 11.0]], &device);

        let interpolator = LinearInterpolator::new();

        let center = Tensor::<TestBackend, 2>::from_floats([[0.5, 0.5]], &device);
        let result = interpolator.interpolate(&data, center);
        let result_data = result.into_data();
        let slice = result_data.as_slice::<f32>().unwrap();

        // Average of all 4 corners
        let expected = (0.0 + 1.0 + 10.0 + 11.0) / 4.0;
        assert!((slice[0] - expected).abs() < 1e-5);
    }

    #[test]
    fn test_linear_interpolator_axes() {
        let device = Default::default();
        // Row 0: 0, 1. Row 1: 2, 3.
        let data = Tensor::<TestBackend, 2>::from_floats([[0.0, 1.0], [2.0, 3.0]], &device);

        let interpolator = LinearInterpolator::new();

        // (x=1, y=0) is column 1, row 0
        let indices = Tensor::<TestBackend, 2>::from_floats([[1.0, 0.0]], &device);
        let result = interpolator.interpolate(&data, indices);
        let val = result.into_data().as_slice::<f32>().unwrap()[0];

        assert_eq!(val, 1.0);
    }

    #[test]
    fn test_linear_interpolator_out_of_bounds_clamps() {
        let device = Default::default();
        let data = Tensor::<TestBackend, 2>::from_floats([[0.0, 1.0], [2.0, 3.0]], &device);

        let interpolator = LinearInterpolator::new();

        let indices =
            Tensor::<TestBackend, 2>::from_floats([[-1.0, -1.0], [5.0, 5.0]], &device);
        let result = interpolator.interpolate(&data, indices);
        let result_data = result.into_data();
        let slice = result_data.as_slice::<f32>().unwrap();

        // Clamped to the nearest corner
        assert_eq!(slice[0], 0.0);
        assert_eq!(slice[1], 3.0);
    }

    #[test]
    fn test_linear_interpolator_nan_propagates() {
        let device = Default::default();
        let data =
            Tensor::<TestBackend, 2>::from_floats([[f32::NAN, 1.0], [2.0, 3.0]], &device);

        let interpolator = LinearInterpolator::new();

        let indices = Tensor::<TestBackend, 2>::from_floats([[0.5, 0.5]], &device);
        let result = interpolator.interpolate(&data, indices);
        let val = result.into_data().as_slice::<f32>().unwrap()[0];

        assert!(val.is_nan());
    }
}
