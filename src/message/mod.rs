//! Order message formatting.
//!
//! [`OrderMessageFormatter`] turns a validated table number and a cart into the
//! WhatsApp message the restaurant receives. Its two side inputs, the time and
//! the currency rendering, are injected as [`Clock`] and [`CurrencyFormatter`].

pub mod clock;
pub mod currency;

pub use clock::*;
pub use currency::*;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt;

use crate::model::Cart;
use crate::table::TableNumber;

/// Characters left as-is by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// `fr-FR` short date and time, e.g. `19/10/2026 14:05:33`.
const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Percent-encodes text for use as a single URL query parameter value.
pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// A formatted order, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderMessage(String);

impl OrderMessage {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The message percent-encoded for a URL query parameter.
    pub fn encoded(&self) -> String {
        encode_component(&self.0)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for OrderMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds order messages for one restaurant.
#[derive(Debug, Clone)]
pub struct OrderMessageFormatter<C, F> {
    restaurant_name: String,
    clock: C,
    currency: F,
}

impl<C: Clock, F: CurrencyFormatter> OrderMessageFormatter<C, F> {
    pub fn new(restaurant_name: impl Into<String>, clock: C, currency: F) -> Self {
        Self {
            restaurant_name: restaurant_name.into(),
            clock,
            currency,
        }
    }

    pub fn restaurant_name(&self) -> &str {
        &self.restaurant_name
    }

    /// Formats the order for `table`.
    ///
    /// Line prices and the grand total go through the currency formatter; the
    /// grand total is rounded once, after summing the unrounded line totals.
    pub fn format(&self, table: TableNumber, cart: &Cart) -> OrderMessage {
        let name = &self.restaurant_name;
        let mut message = format!("🍽️ *Nouvelle Commande - {name} - Table {table}*\n\n");
        message.push_str(&format!("📍 *Numéro de Table :* {table}\n\n"));
        message.push_str("📋 *Détails de la Commande :*\n");

        for (index, item) in cart.items().iter().enumerate() {
            message.push_str(&format!("{}. {}\n", index + 1, item.name));
            message.push_str(&format!("   Quantité : {}\n", item.quantity));
            message.push_str(&format!(
                "   Prix : {}\n\n",
                self.currency.format(item.line_total())
            ));
        }

        message.push_str(&format!(
            "💰 *Montant Total : {}*\n\n",
            self.currency.format(cart.total())
        ));
        message.push_str(&format!(
            "⏰ Commande passée le : {}\n\n",
            self.clock.now().format(TIMESTAMP_FORMAT)
        ));
        message.push_str(&format!("Merci d'avoir choisi {name} ! 🙏"));

        OrderMessage(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CartItem;
    use chrono::NaiveDate;

    fn clock() -> FixedClock {
        let at = NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(14, 5, 33)
            .unwrap();
        FixedClock(at)
    }

    fn formatter() -> OrderMessageFormatter<FixedClock, LocaleCurrencyFormatter> {
        OrderMessageFormatter::new("AfricaEats", clock(), LocaleCurrencyFormatter::fr_xof())
    }

    fn table(n: u32) -> TableNumber {
        TableNumber::try_from(n).unwrap()
    }

    #[test]
    fn test_single_item_message_layout() {
        let cart = Cart::new(vec![CartItem::new("Riz", 1500.0, 2).unwrap()]).unwrap();
        let message = formatter().format(table(5), &cart);

        let expected = "🍽️ *Nouvelle Commande - AfricaEats - Table 5*\n\n\
            📍 *Numéro de Table :* 5\n\n\
            📋 *Détails de la Commande :*\n\
            1. Riz\n   Quantité : 2\n   Prix : 3\u{202f}000\u{a0}F\u{202f}CFA\n\n\
            💰 *Montant Total : 3\u{202f}000\u{a0}F\u{202f}CFA*\n\n\
            ⏰ Commande passée le : 19/10/2026 14:05:33\n\n\
            Merci d'avoir choisi AfricaEats ! 🙏";
        assert_eq!(message.as_str(), expected);
    }

    #[test]
    fn test_items_are_numbered_in_cart_order() {
        let cart = Cart::new(vec![
            CartItem::new("Riz", 1500.0, 1).unwrap(),
            CartItem::new("Poulet DG", 4500.0, 1).unwrap(),
            CartItem::new("Bissap", 500.0, 3).unwrap(),
        ])
        .unwrap();
        let text = formatter().format(table(12), &cart).into_string();

        let riz = text.find("1. Riz\n").unwrap();
        let poulet = text.find("2. Poulet DG\n").unwrap();
        let bissap = text.find("3. Bissap\n").unwrap();
        assert!(riz < poulet && poulet < bissap);
        assert!(text.contains("   Quantité : 3\n   Prix : 1\u{202f}500\u{a0}F\u{202f}CFA\n"));
        assert!(text.contains("💰 *Montant Total : 7\u{202f}500\u{a0}F\u{202f}CFA*"));
    }

    #[test]
    fn test_total_is_rounded_after_summing() {
        // 0.4 + 0.4 per line would round to 0 each, the sum rounds to 1.
        let cart = Cart::new(vec![
            CartItem::new("Sel", 0.4, 1).unwrap(),
            CartItem::new("Poivre", 0.4, 1).unwrap(),
        ])
        .unwrap();
        let text = formatter().format(table(1), &cart).into_string();
        assert!(text.contains("   Prix : 0\u{a0}F\u{202f}CFA\n"));
        assert!(text.contains("Montant Total : 1\u{a0}F\u{202f}CFA*"));
    }

    #[test]
    fn test_same_inputs_give_same_message() {
        let cart = Cart::new(vec![CartItem::new("Riz", 1500.0, 2).unwrap()]).unwrap();
        let formatter = formatter();
        let first = formatter.format(table(5), &cart);
        let second = formatter.format(table(5), &cart);
        assert_eq!(first, second);
        assert_eq!(first.encoded(), second.encoded());
    }

    #[test]
    fn test_encode_component_matches_uri_component_rules() {
        assert_eq!(encode_component("a b\nc"), "a%20b%0Ac");
        assert_eq!(encode_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_component("é&=?/#+"), "%C3%A9%26%3D%3F%2F%23%2B");
        assert_eq!(encode_component("🙏"), "%F0%9F%99%8F");
    }
}
