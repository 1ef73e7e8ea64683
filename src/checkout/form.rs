use crate::link::LinkOpener;
use crate::message::{Clock, CurrencyFormatter};
use crate::model::Cart;
use crate::table::{TableError, TableNumber};

use super::Checkout;

/// State of the table number field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableForm {
    input: String,
    error: Option<TableError>,
}

impl TableForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn error(&self) -> Option<&TableError> {
        self.error.as_ref()
    }

    /// Text to show under the field, if any.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    /// Replaces the field content. Editing dismisses the previous error.
    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
        self.error = None;
    }

    /// Submits the current input through `checkout`.
    ///
    /// Returns the confirmed table, or `None` when the input was rejected, in
    /// which case [`error`](Self::error) holds the reason.
    pub fn submit<C, F, O>(
        &mut self,
        checkout: &Checkout<C, F>,
        cart: &Cart,
        opener: &O,
        on_confirm: impl FnOnce(TableNumber),
    ) -> Option<TableNumber>
    where
        C: Clock,
        F: CurrencyFormatter,
        O: LinkOpener + ?Sized,
    {
        match checkout.submit(&self.input, cart, opener, on_confirm) {
            Ok(table) => {
                self.error = None;
                Some(table)
            }
            Err(err) => {
                self.error = Some(err);
                None
            }
        }
    }
}
