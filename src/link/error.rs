//! Error types for deep-link construction.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LinkError {
    /// The destination is not a phone number in international format.
    #[error("Invalid destination: {0:?}")]
    InvalidDestination(String),
}
