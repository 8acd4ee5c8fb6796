use burn::tensor::{Shape, Tensor, TensorData};
use burn::tensor::backend::Backend;

/// Generate the grid of target cell coordinates for a 2D field shape.
///
/// Returns a tensor of shape `[N, 2]` where N is the total number of cells,
/// flattened row-major. Each row holds a continuous `(x, y)` coordinate,
/// matching the index order expected by the interpolators.
///
/// # Arguments
/// * `shape` - The field shape `[rows, cols]`
/// * `device` - The device to create the tensor on
pub fn generate_grid_2d<B>(shape: [usize; 2], device: &B::Device) -> Tensor<B, 2>
where
    B: Backend,
{
    let rows = shape[0];
    let cols = shape[1];
    let total = rows * cols;

    let mut grid = Vec::with_capacity(total * 2);
    for y in 0..rows {
        for x in 0..cols {
            grid.push(x as f32);
            grid.push(y as f32);
        }
    }

    Tensor::<B, 1>::from_data(TensorData::new(grid, Shape::new([total * 2])), device)
        .reshape([total, 2])
}
