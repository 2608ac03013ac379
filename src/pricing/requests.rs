//! Request DTOs for pricing API endpoints.

use serde::Deserialize;

use super::models::{Service, ServiceOption};
use super::services::Selections;

/// Request to price a booking.
///
/// Either carries the service definition inline (`service` + `options`)
/// or references a definition already in the catalog by `service_id`.
/// An inline definition wins when both are present; the quote then
/// carries no `service_id`.
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    #[serde(default)]
    pub service_id: Option<u64>,
    #[serde(default)]
    pub service: Option<Service>,
    #[serde(default)]
    pub options: Vec<ServiceOption>,
    #[serde(default)]
    pub selections: Selections,
}

/// Request to store a service definition in the catalog
#[derive(Debug, Deserialize)]
pub struct UpsertServiceRequest {
    #[serde(default)]
    pub name: String,
    pub service: Service,
    #[serde(default)]
    pub options: Vec<ServiceOption>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::models::SelectionValue;
    use rust_decimal_macros::dec;

    #[test]
    fn test_quote_request_by_reference() {
        let json = r#"{"service_id": 42, "selections": {"1": true, "2": 3, "3": "large"}}"#;
        let request: QuoteRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.service_id, Some(42));
        assert!(request.service.is_none());
        assert_eq!(request.selections.get(&1), Some(&SelectionValue::Bool(true)));
        assert_eq!(request.selections.get(&2), Some(&SelectionValue::Number(dec!(3))));
        assert_eq!(request.selections.get(&3), Some(&SelectionValue::text("large")));
    }

    #[test]
    fn test_quote_request_inline() {
        let json = r#"{
            "service": {"base_price": "50.00", "duration_minutes": 120},
            "options": [{"id": 1, "name": "Oven", "type": "checkbox", "price_type": "fixed", "price_impact": 5}]
        }"#;
        let request: QuoteRequest = serde_json::from_str(json).unwrap();

        let service = request.service.unwrap();
        assert_eq!(service.base_price, dec!(50));
        assert_eq!(service.duration_minutes, 120);
        assert_eq!(request.options.len(), 1);
        assert!(request.selections.is_empty());
    }
}
