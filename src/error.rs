//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::pricing::responses::PricingErrorResponse;
use crate::pricing::PriceError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Service not found")]
    NotFound,

    #[error("Pricing error: {0}")]
    Pricing(#[from] PriceError),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Structured details for a pricing error, keyed by the offending option
fn price_error_details(err: &PriceError) -> serde_json::Value {
    match err {
        PriceError::OutOfRange {
            option_id,
            value,
            min,
            max,
        } => json!({
            "option_id": option_id,
            "value": value.to_string(),
            "min": min.map(|m| m.to_string()),
            "max": max.map(|m| m.to_string()),
        }),
        PriceError::TypeMismatch {
            option_id,
            expected,
        } => json!({ "option_id": option_id, "expected": expected }),
        PriceError::InvalidChoice { option_id, value } => {
            json!({ "option_id": option_id, "value": value })
        }
        other => json!({ "option_id": other.option_id() }),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                PricingErrorResponse {
                    error_type: "not_found".to_string(),
                    message: self.to_string(),
                    details: None,
                },
            ),
            AppError::Pricing(e) => {
                tracing::warn!(error_type = e.kind(), "Rejected pricing input: {}", e);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    PricingErrorResponse {
                        error_type: e.kind().to_string(),
                        message: e.to_string(),
                        details: Some(price_error_details(e)),
                    },
                )
            }
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                PricingErrorResponse {
                    error_type: "bad_request".to_string(),
                    message: msg.clone(),
                    details: None,
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::NotFound.into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::BadRequest("nope".to_string()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(PriceError::MissingRequired { option_id: 1 })
                .into_response()
                .status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_out_of_range_details() {
        let details = price_error_details(&PriceError::OutOfRange {
            option_id: 2,
            value: dec!(15),
            min: Some(dec!(1)),
            max: None,
        });
        assert_eq!(details["option_id"], 2);
        assert_eq!(details["value"], "15");
        assert_eq!(details["min"], "1");
        assert!(details["max"].is_null());
    }

    #[test]
    fn test_generic_details_carry_option_id() {
        let details = price_error_details(&PriceError::UnknownOption { option_id: 8 });
        assert_eq!(details["option_id"], 8);

        let details = price_error_details(&PriceError::AmountOverflow { option_id: Some(4) });
        assert_eq!(details["option_id"], 4);

        let details = price_error_details(&PriceError::InvalidService {
            reason: "negative".to_string(),
        });
        assert!(details["option_id"].is_null());
    }
}
