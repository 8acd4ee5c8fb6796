//! Extrapolation method registry.
//!
//! Methods are variants of one sum type rather than entries in a mutable
//! lookup table, so every registered method is verified against the
//! uniform extrapolation signature at compile time and there is no
//! process-wide state to initialize.

use burn::tensor::Tensor;
use burn::tensor::backend::Backend;
use rsteps_core::VelocityField;
use serde::{Deserialize, Serialize};

use crate::error::{ExtrapolationError, Result};
use crate::options::ExtrapolationOptions;
use crate::sequence::Extrapolation;
use crate::{eulerian, semilagrangian};

/// Names accepted by [`Method::resolve`].
pub const AVAILABLE_METHODS: [&str; 3] = ["none", "eulerian", "semilagrangian"];

/// Registered extrapolation methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    /// No-op: produces an empty sequence.
    None,
    /// Eulerian persistence: repeats the input field unchanged.
    Eulerian,
    /// Semi-Lagrangian backward-trajectory advection
    /// (Germann et al. 2002).
    SemiLagrangian,
}

impl Method {
    /// Resolve a method by name.
    ///
    /// Textual names are case-insensitive; an absent name selects the
    /// no-op method. Unknown names fail with
    /// [`ExtrapolationError::UnknownMethod`] listing the valid options.
    pub fn resolve(name: Option<&str>) -> Result<Self> {
        let method = match name {
            None => Self::None,
            Some(name) => match name.to_ascii_lowercase().as_str() {
                "none" => Self::None,
                "eulerian" => Self::Eulerian,
                "semilagrangian" => Self::SemiLagrangian,
                _ => {
                    return Err(ExtrapolationError::unknown_method(
                        name,
                        &AVAILABLE_METHODS,
                    ))
                }
            },
        };

        tracing::trace!("Resolved extrapolation method '{}'", method.name());
        Ok(method)
    }

    /// Get the canonical method name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Eulerian => "eulerian",
            Self::SemiLagrangian => "semilagrangian",
        }
    }

    /// Run the method with the uniform extrapolation signature.
    ///
    /// The no-op method returns an empty sequence without touching its
    /// inputs; the others validate and extrapolate.
    pub fn extrapolate<B: Backend>(
        &self,
        precip: &Tensor<B, 2>,
        velocity: &VelocityField<B>,
        num_timesteps: usize,
        outside_value: f32,
        options: &ExtrapolationOptions,
    ) -> Result<Extrapolation<B>> {
        match self {
            Self::None => Ok(Extrapolation::empty()),
            Self::Eulerian => {
                eulerian::extrapolate(precip, velocity, num_timesteps, outside_value, options)
            }
            Self::SemiLagrangian => {
                semilagrangian::extrapolate(precip, velocity, num_timesteps, outside_value, options)
            }
        }
    }
}

impl std::str::FromStr for Method {
    type Err = ExtrapolationError;

    fn from_str(s: &str) -> Result<Self> {
        Self::resolve(Some(s))
    }
}
