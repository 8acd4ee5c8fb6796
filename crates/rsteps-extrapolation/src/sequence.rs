//! Output container for extrapolated field sequences.

use burn::tensor::Tensor;
use burn::tensor::backend::Backend;

/// Ordered result of an extrapolation run.
///
/// Index 0 is one timestep ahead of the input, index `len() - 1` is
/// `len()` timesteps ahead. When displacement output was requested, each
/// entry carries the matching accumulated backward displacement as a
/// `[2, rows, cols]` grid pair (x-offset first), recording the net offset
/// used to source each output cell.
#[derive(Debug, Clone)]
pub struct Extrapolation<B: Backend> {
    fields: Vec<Tensor<B, 2>>,
    displacement: Option<Vec<Tensor<B, 3>>>,
}

impl<B: Backend> Extrapolation<B> {
    /// Create a new extrapolation result.
    pub fn new(fields: Vec<Tensor<B, 2>>, displacement: Option<Vec<Tensor<B, 3>>>) -> Self {
        if let Some(displacement) = &displacement {
            debug_assert_eq!(fields.len(), displacement.len());
        }
        Self {
            fields,
            displacement,
        }
    }

    /// Create an empty result (the no-op method's output).
    pub fn empty() -> Self {
        Self {
            fields: Vec::new(),
            displacement: None,
        }
    }

    /// Get the extrapolated fields in timestep order.
    pub fn fields(&self) -> &[Tensor<B, 2>] {
        &self.fields
    }

    /// Get the accumulated displacement grids, if they were requested.
    pub fn displacement(&self) -> Option<&[Tensor<B, 3>]> {
        self.displacement.as_deref()
    }

    /// Number of output timesteps.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the sequence holds no timesteps.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Consume the result into its parts.
    pub fn into_parts(self) -> (Vec<Tensor<B, 2>>, Option<Vec<Tensor<B, 3>>>) {
        (self.fields, self.displacement)
    }
}
