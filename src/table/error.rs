//! Error types for table number validation.

use thiserror::Error;

/// Errors that can occur while validating the diner's table number.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableError {
    /// The input is empty, not an integer, or outside the table range.
    ///
    /// The display text is shown to the diner as-is.
    #[error("Veuillez entrer un numéro de table valide (1-50)")]
    InvalidTableNumber { input: String },
}
