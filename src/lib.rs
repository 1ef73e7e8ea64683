//! # Table Order
//!
//! > **Send a restaurant order to WhatsApp from the table screen.**
//!
//! The diner picks dishes, types their table number and taps a button; this
//! crate turns that into a pre-filled `https://wa.me/` link for the restaurant.
//! Rendering the screen and actually launching WhatsApp belong to the host UI;
//! everything in between lives here.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`], [`table`])
//! - **Role**: Validated inputs. A [`Cart`](model::Cart) is never empty and a
//!   [`TableNumber`](table::TableNumber) is always within `1..=50`.
//! - **Key items**: [`CartItem`](model::CartItem), [`parse_table_number`](table::parse_table_number).
//!
//! ### 2. The Message ([`message`])
//! - **Role**: Formats the order text, with prices in `fr-FR` CFA francs.
//! - **Key items**: [`OrderMessageFormatter`](message::OrderMessageFormatter),
//!   [`Clock`](message::Clock), [`CurrencyFormatter`](message::CurrencyFormatter).
//!
//! ### 3. The Link ([`link`])
//! - **Role**: Builds the deep link and abstracts the host's "open URL" capability.
//! - **Key items**: [`build_deep_link`](link::build_deep_link), [`LinkOpener`](link::LinkOpener).
//!
//! ### 4. The Flow ([`checkout`])
//! - **Role**: What happens when the diner taps "send": validate, format, open, confirm.
//! - **Key items**: [`Checkout`](checkout::Checkout), [`TableForm`](checkout::TableForm).
//!
//! ### 5. The Environment ([`runtime`])
//! - **Role**: Configuration and logging.
//! - **Key items**: [`OrderConfig`](runtime::OrderConfig), [`setup_tracing`](runtime::setup_tracing).
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### Type-Safe Error Handling
//! Each module defines its own error type (`TableError`, `CartError`,
//! `LinkError`, `ConfigError`) with `thiserror`. Only the table number can be
//! wrong at submission time; formatting and link building cannot fail.
//!
//! ### Injected Side Inputs
//! The current time and the host's link opener are traits. Tests use
//! [`FixedClock`](message::FixedClock) and
//! [`RecordingOpener`](link::mock::RecordingOpener).
//!
//! ### Observability
//! `tracing` with structured fields. See [`runtime::setup_tracing`].
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run -- 12
//! ```

pub mod checkout;
pub mod link;
pub mod message;
pub mod model;
pub mod runtime;
pub mod table;
