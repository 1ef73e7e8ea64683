//! Restaurant configuration.
//!
//! | Variable                  | Default       |
//! |---------------------------|---------------|
//! | `TABLE_ORDER_DESTINATION` | `22879689386` |
//! | `TABLE_ORDER_RESTAURANT`  | `AfricaEats`  |

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::link::{Destination, LinkError};

pub const DESTINATION_VAR: &str = "TABLE_ORDER_DESTINATION";
pub const RESTAURANT_VAR: &str = "TABLE_ORDER_RESTAURANT";

const DEFAULT_DESTINATION: &str = "22879689386";
const DEFAULT_RESTAURANT: &str = "AfricaEats";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("TABLE_ORDER_DESTINATION: {0}")]
    Destination(#[from] LinkError),

    #[error("TABLE_ORDER_RESTAURANT must not be empty")]
    EmptyRestaurantName,
}

/// Settings of the restaurant receiving the orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfig {
    /// WhatsApp number the orders are sent to.
    pub destination: Destination,
    /// Name used in the message header and footer.
    pub restaurant_name: String,
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            destination: Destination(DEFAULT_DESTINATION.to_string()),
            restaurant_name: DEFAULT_RESTAURANT.to_string(),
        }
    }
}

impl OrderConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, falling back to defaults for
    /// unset variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(DESTINATION_VAR) {
            config.destination = Destination::parse(&raw)?;
        }
        if let Some(name) = lookup(RESTAURANT_VAR) {
            let name = name.trim();
            if name.is_empty() {
                return Err(ConfigError::EmptyRestaurantName);
            }
            config.restaurant_name = name.to_string();
        }

        tracing::debug!(?config, "Loaded order configuration");
        Ok(config)
    }
}
