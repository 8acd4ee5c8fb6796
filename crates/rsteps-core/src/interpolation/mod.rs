//! Interpolation methods for sampling fields at continuous coordinates.

pub mod linear;
pub mod nearest;
pub mod trait_;

pub use linear::LinearInterpolator;
pub use nearest::NearestNeighborInterpolator;
pub use trait_::Interpolator;
