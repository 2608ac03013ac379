//! Route handlers outside the pricing engine

pub mod catalog;
pub mod health;

use axum::Router;

use crate::AppState;

/// Catalog management and health routes
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(catalog::router())
}
