//! Pricing route handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::pricing::models::ServiceDefinition;
use crate::AppState;

use super::requests::QuoteRequest;
use super::responses::QuoteResponse;

/// Pricing API routes
pub fn router() -> Router<AppState> {
    Router::new().route("/api/pricing/quote", post(quote))
}

/// Price a booking against an inline or cataloged service definition
async fn quote(
    State(state): State<AppState>,
    payload: std::result::Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<Json<QuoteResponse>> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    // `priced_id` is only set when the cataloged definition is used
    let (definition, priced_id): (Arc<ServiceDefinition>, Option<u64>) =
        match (request.service, request.service_id) {
            (Some(service), _) => (
                Arc::new(ServiceDefinition {
                    service_id: 0,
                    name: String::new(),
                    service,
                    options: request.options,
                }),
                None,
            ),
            (None, Some(service_id)) => {
                let definition = state.catalog.get(service_id).await.ok_or_else(|| {
                    tracing::debug!("Catalog MISS for service: {}", service_id);
                    AppError::NotFound
                })?;
                (definition, Some(service_id))
            }
            (None, None) => {
                return Err(AppError::BadRequest(
                    "Either service_id or service must be provided".to_string(),
                ))
            }
        };

    let price = state.calculator.compute(
        &definition.service,
        &definition.options,
        &request.selections,
    )?;

    tracing::info!(
        service_id = ?priced_id,
        total = %price.total,
        "Quoted booking"
    );

    Ok(Json(QuoteResponse::new(priced_id, price)))
}
