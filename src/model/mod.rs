//! Cart data handed over by the UI layer.

pub mod cart;
pub mod error;

pub use cart::*;
pub use error::*;
