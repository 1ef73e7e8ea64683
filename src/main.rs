//! Demo of the table screen.
//!
//! Sends a sample cart for the table number given as first argument and prints
//! the resulting WhatsApp link.
//!
//! ```bash
//! TABLE_ORDER_DESTINATION=+22879689386 RUST_LOG=debug cargo run -- 12
//! ```

use table_order::checkout::{Checkout, TableForm};
use table_order::link::StdoutOpener;
use table_order::message::{LocaleCurrencyFormatter, SystemClock};
use table_order::model::{Cart, CartItem};
use table_order::runtime::{setup_tracing, OrderConfig};
use tracing::{error, info};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = OrderConfig::from_env()?;
    info!(restaurant = %config.restaurant_name, destination = %config.destination, "Starting table screen");

    let cart = Cart::new(vec![
        CartItem::new("Riz au gras", 1500.0, 2)?,
        CartItem::new("Poulet braisé", 3500.0, 1)?,
        CartItem::new("Jus de bissap", 500.0, 3)?,
    ])?;

    let checkout = Checkout::new(&config, SystemClock, LocaleCurrencyFormatter::fr_xof());
    let mut form = TableForm::new();
    form.set_input(std::env::args().nth(1).unwrap_or_default());

    let confirmed = form.submit(&checkout, &cart, &StdoutOpener, |table| {
        info!(table = %table, "Table confirmed");
    });

    match (confirmed, form.error()) {
        (Some(_), _) => Ok(()),
        (None, Some(err)) => {
            error!(input = form.input(), "Order not sent");
            Err(err.clone().into())
        }
        (None, None) => Err("order not sent".into()),
    }
}
