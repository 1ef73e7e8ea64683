//! WhatsApp deep links and the capability that opens them.
//!
//! Building the URL is pure. Opening it belongs to the host environment,
//! modelled as the [`LinkOpener`] trait.

pub mod error;
pub mod mock;

pub use error::*;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Base of every link: `https://wa.me/<destination>?text=<message>`.
pub const WA_ME_BASE: &str = "https://wa.me/";

/// Phone number receiving the orders, digits only (country code included).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Destination(pub(crate) String);

impl Destination {
    /// Parses a phone number such as `22879689386` or `+228 79 68 93 86`.
    ///
    /// A leading `+` and inner spaces are dropped, as wa.me expects bare digits.
    pub fn parse(raw: &str) -> Result<Self, LinkError> {
        let trimmed = raw.trim();
        let digits: String = trimmed
            .strip_prefix('+')
            .unwrap_or(trimmed)
            .chars()
            .filter(|c| *c != ' ')
            .collect();

        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(LinkError::InvalidDestination(raw.to_string()));
        }
        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Destination {
    type Err = LinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Destination {
    type Error = LinkError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Destination> for String {
    fn from(destination: Destination) -> Self {
        destination.0
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds the deep link for an already percent-encoded message.
pub fn build_deep_link(destination: &Destination, encoded_message: &str) -> String {
    format!("{WA_ME_BASE}{destination}?text={encoded_message}")
}

/// Opens a URL in whatever the host uses for external links.
pub trait LinkOpener {
    fn open(&self, url: &str);
}

impl<O: LinkOpener + ?Sized> LinkOpener for &O {
    fn open(&self, url: &str) {
        (**self).open(url)
    }
}

/// Prints the link on stdout, for terminals that turn URLs into clickable links.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutOpener;

impl LinkOpener for StdoutOpener {
    fn open(&self, url: &str) {
        tracing::info!(len = url.len(), "Opening deep link");
        println!("{url}");
    }
}
