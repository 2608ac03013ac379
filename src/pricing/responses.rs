//! Response DTOs for pricing API endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::services::PriceResult;

/// Response for a priced booking
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub quote_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<u64>,
    pub computed_at: DateTime<Utc>,
    #[serde(flatten)]
    pub price: PriceResult,
}

impl QuoteResponse {
    pub fn new(service_id: Option<u64>, price: PriceResult) -> Self {
        Self {
            quote_id: Uuid::new_v4(),
            service_id,
            computed_at: Utc::now(),
            price,
        }
    }
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
