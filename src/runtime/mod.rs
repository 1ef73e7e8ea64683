//! Runtime environment of the ordering screen.
//!
//! - [`OrderConfig`] - Restaurant settings loaded from the environment
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod config;
pub mod tracing;

pub use config::*;
pub use self::tracing::*;
