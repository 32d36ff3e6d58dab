//! Router error types.

use crate::core::FactoryError;
use thiserror::Error;

/// Errors that abort a navigation attempt.
///
/// Missing pop destinations and states matching no transition are normal
/// outcomes reported through [`Navigation`](super::Navigation), not errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RouterError {
    /// The screens factory could not create the push destination.
    /// The navigation stack is left unchanged.
    #[error("Screen creation failed: {0}")]
    Factory(#[from] FactoryError),
}
