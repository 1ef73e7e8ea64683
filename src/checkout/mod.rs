//! Order submission: the "send via WhatsApp" button of the table screen.
//!
//! [`Checkout`] composes the pieces: it validates the table number, formats
//! the message, builds the deep link, hands it to a [`LinkOpener`] and finally
//! confirms the table to the caller. [`TableForm`] keeps the field state the
//! screen renders (current input, error to display).

pub mod form;

pub use form::*;

use tracing::{debug, info, warn};

use crate::link::{build_deep_link, Destination, LinkOpener};
use crate::message::{Clock, CurrencyFormatter, OrderMessageFormatter};
use crate::model::Cart;
use crate::runtime::OrderConfig;
use crate::table::{parse_table_number, TableError, TableNumber};

/// Sends orders for one restaurant to its configured WhatsApp number.
pub struct Checkout<C, F> {
    formatter: OrderMessageFormatter<C, F>,
    destination: Destination,
}

impl<C: Clock, F: CurrencyFormatter> Checkout<C, F> {
    pub fn new(config: &OrderConfig, clock: C, currency: F) -> Self {
        Self {
            formatter: OrderMessageFormatter::new(config.restaurant_name.clone(), clock, currency),
            destination: config.destination.clone(),
        }
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    /// Deep link carrying the formatted order for `table`.
    pub fn deep_link(&self, table: TableNumber, cart: &Cart) -> String {
        let message = self.formatter.format(table, cart);
        build_deep_link(&self.destination, &message.encoded())
    }

    /// Submits the order typed in for `raw_table`.
    ///
    /// On success the link has been handed to `opener` and `on_confirm` has
    /// been called with the table number. On failure neither happens.
    pub fn submit<O>(
        &self,
        raw_table: &str,
        cart: &Cart,
        opener: &O,
        on_confirm: impl FnOnce(TableNumber),
    ) -> Result<TableNumber, TableError>
    where
        O: LinkOpener + ?Sized,
    {
        let table = parse_table_number(raw_table).inspect_err(|_| {
            warn!(input = raw_table, "Rejected table number");
        })?;

        debug!(?cart, "Submitting order");
        let url = self.deep_link(table, cart);
        opener.open(&url);
        info!(table = %table, items = cart.len(), "Order sent");

        on_confirm(table);
        Ok(table)
    }
}
