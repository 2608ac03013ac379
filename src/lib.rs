//! MoBooking pricing service.
//!
//! Prices home-service bookings from a service's base price and the
//! customer's answers to its configurable options.

pub mod cache;
pub mod config;
pub mod error;
pub mod pricing;
pub mod routes;

use axum::Router;
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use cache::ServiceCatalog;
use config::Config;
use pricing::PriceCalculator;

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    pub catalog: ServiceCatalog,
    pub calculator: Arc<PriceCalculator>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            catalog: ServiceCatalog::new(config.catalog_max_capacity, config.catalog_ttl),
            calculator: Arc::new(PriceCalculator::new(config.currency.clone())),
        }
    }
}

/// Build the full application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(pricing::router())
        .merge(routes::router())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
