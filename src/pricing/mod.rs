//! Pricing engine module for MoBooking.
//!
//! Computes booking totals from a service's base price and the customer's
//! answers to its configurable options. The booking plugin calls it via
//! HTTP/JSON; the calculator itself is a pure function.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::round_money;
pub use routes::router;
pub use services::{
    validate_definition, LineItem, PriceCalculator, PriceError, PriceResult, Selections,
};
