//! Extrapolation methods for precipitation nowcasting.
//!
//! Every method implements one uniform contract:
//!
//! `extrapolate(precip, velocity, num_timesteps, outside_value, options)`
//!
//! where `precip` is a `[rows, cols]` field, `velocity` a co-registered
//! [`rsteps_core::VelocityField`] in grid-cell units per timestep and the
//! result an ordered sequence of extrapolated fields, one per requested
//! output timestep. Methods are selected through the [`Method`] registry.

pub mod error;
pub mod eulerian;
pub mod interface;
pub mod options;
pub mod semilagrangian;
pub mod sequence;
pub mod validation;

pub use error::{ExtrapolationError, Result};
pub use interface::{Method, AVAILABLE_METHODS};
pub use options::{ExtrapolationOptions, Interpolation};
pub use sequence::Extrapolation;
