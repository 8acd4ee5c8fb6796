//! Extrapolation options.
//!
//! The recognized options are the named fields of
//! [`ExtrapolationOptions`]; there is no free-form option bag, so an
//! unrecognized key cannot reach the extrapolators. Textual values for the
//! interpolation order are parsed through [`Interpolation::parse`], which
//! rejects anything outside the accepted set.

use serde::{Deserialize, Serialize};

use crate::error::{ExtrapolationError, Result};

/// Accepted textual names for the interpolation order.
pub const INTERPOLATION_VALUES: [&str; 2] = ["nearest", "bilinear"];

/// Resampling method used when reading the input field at trajectory
/// source coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interpolation {
    /// Round to the closest integer cell.
    Nearest,
    /// Proximity-weighted average of the four surrounding cells.
    Bilinear,
}

impl Interpolation {
    /// Parse a case-insensitive textual interpolation order.
    pub fn parse(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "nearest" => Ok(Self::Nearest),
            "bilinear" => Ok(Self::Bilinear),
            _ => Err(ExtrapolationError::invalid_option(
                "interpolation",
                value,
                &INTERPOLATION_VALUES,
            )),
        }
    }

    /// Get the canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Nearest => "nearest",
            Self::Bilinear => "bilinear",
        }
    }
}

impl Default for Interpolation {
    fn default() -> Self {
        Self::Bilinear
    }
}

impl std::str::FromStr for Interpolation {
    type Err = ExtrapolationError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Options shared by all extrapolation methods.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtrapolationOptions {
    /// Trajectory integration sub-steps per output timestep. More
    /// sub-steps improve accuracy under spatially varying velocity at
    /// proportional compute cost. Must be at least 1.
    pub sub_steps: usize,
    /// Resampling method for reading the input field.
    pub interpolation: Interpolation,
    /// Also return the accumulated backward-displacement grids.
    pub return_displacement: bool,
    /// When true (default), cells sourced from outside the field extent
    /// are filled with the outside value; when false, source coordinates
    /// are clamped to the nearest valid cell instead.
    pub allow_outside: bool,
}

impl Default for ExtrapolationOptions {
    fn default() -> Self {
        Self {
            sub_steps: 1,
            interpolation: Interpolation::Bilinear,
            return_displacement: false,
            allow_outside: true,
        }
    }
}

impl ExtrapolationOptions {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of trajectory sub-steps per output timestep.
    pub fn with_sub_steps(mut self, sub_steps: usize) -> Self {
        self.sub_steps = sub_steps;
        self
    }

    /// Set the interpolation order.
    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    /// Request the accumulated displacement grids alongside the fields.
    pub fn with_return_displacement(mut self, return_displacement: bool) -> Self {
        self.return_displacement = return_displacement;
        self
    }

    /// Clamp out-of-domain source coordinates instead of filling.
    pub fn with_clamped_boundaries(mut self) -> Self {
        self.allow_outside = false;
        self
    }

    /// Validate the option values.
    pub fn validate(&self) -> Result<()> {
        if self.sub_steps == 0 {
            return Err(ExtrapolationError::invalid_argument(
                "sub_steps must be positive",
            ));
        }
        Ok(())
    }
}
