//! Error types for cart construction.

use thiserror::Error;

/// Errors that can occur while building a [`Cart`](super::Cart).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The cart has no items.
    #[error("Cart is empty")]
    Empty,

    /// The unit price is negative or not a finite number.
    #[error("Invalid price for {name}: {price}")]
    InvalidPrice { name: String, price: f64 },

    /// The quantity is zero.
    #[error("Invalid quantity for {name}: {quantity}")]
    InvalidQuantity { name: String, quantity: u32 },
}
