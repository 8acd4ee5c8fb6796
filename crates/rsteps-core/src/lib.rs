pub mod grid;
pub mod interpolation;
pub mod velocity;

pub use interpolation::{Interpolator, LinearInterpolator, NearestNeighborInterpolator};
pub use velocity::VelocityField;
