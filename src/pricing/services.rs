//! Price calculator service.
//!
//! Validates a customer's selections against a service's option definitions
//! and folds the per-option contributions into an itemized booking price.
//! Stateless: every call works only on its own arguments.

use std::collections::{BTreeMap, HashSet};

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::{option_contribution, to_minor_units};
use super::models::{
    Currency, OptionId, OptionType, SelectionValue, Service, ServiceDefinition, ServiceOption,
};

/// Customer selections keyed by option id
pub type Selections = BTreeMap<OptionId, SelectionValue>;

/// Pricing calculation error types.
///
/// The calculator reports the first violation it finds and stops.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PriceError {
    #[error("Option {option_id} does not exist on this service")]
    UnknownOption { option_id: OptionId },

    #[error("Option {option_id} expects a {expected} value")]
    TypeMismatch {
        option_id: OptionId,
        expected: &'static str,
    },

    #[error("Option {option_id} value {value} is out of range")]
    OutOfRange {
        option_id: OptionId,
        value: Decimal,
        min: Option<Decimal>,
        max: Option<Decimal>,
    },

    #[error("Option {option_id} has no choice '{value}'")]
    InvalidChoice { option_id: OptionId, value: String },

    #[error("Option {option_id} is required")]
    MissingRequired { option_id: OptionId },

    #[error("Booking price exceeds the representable amount")]
    AmountOverflow { option_id: Option<OptionId> },

    #[error("Invalid service: {reason}")]
    InvalidService { reason: String },

    #[error("Invalid option definition: {reason}")]
    InvalidDefinition {
        option_id: Option<OptionId>,
        reason: String,
    },
}

impl PriceError {
    /// Stable machine-readable tag for the error
    pub fn kind(&self) -> &'static str {
        match self {
            PriceError::UnknownOption { .. } => "unknown_option",
            PriceError::TypeMismatch { .. } => "type_mismatch",
            PriceError::OutOfRange { .. } => "out_of_range",
            PriceError::InvalidChoice { .. } => "invalid_choice",
            PriceError::MissingRequired { .. } => "missing_required",
            PriceError::AmountOverflow { .. } => "amount_overflow",
            PriceError::InvalidService { .. } => "invalid_service",
            PriceError::InvalidDefinition { .. } => "invalid_definition",
        }
    }

    /// Option the error is about, if any
    pub fn option_id(&self) -> Option<OptionId> {
        match self {
            PriceError::UnknownOption { option_id }
            | PriceError::TypeMismatch { option_id, .. }
            | PriceError::OutOfRange { option_id, .. }
            | PriceError::InvalidChoice { option_id, .. }
            | PriceError::MissingRequired { option_id } => Some(*option_id),
            PriceError::InvalidDefinition { option_id, .. }
            | PriceError::AmountOverflow { option_id } => *option_id,
            PriceError::InvalidService { .. } => None,
        }
    }
}

/// One option's share of the booking price
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    pub option_id: OptionId,
    pub label: String,
    /// Label of the picked choice for select/radio options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choice_label: Option<String>,
    /// Rounded for display
    #[serde(with = "rust_decimal::serde::str")]
    pub contribution: Decimal,
    /// Unrounded value the total is built from
    #[serde(skip)]
    pub exact_contribution: Decimal,
}

/// Result of a price computation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceResult {
    /// Service base price
    #[serde(with = "rust_decimal::serde::str")]
    pub subtotal: Decimal,
    pub line_items: Vec<LineItem>,
    #[serde(with = "rust_decimal::serde::str")]
    pub options_total: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
    pub currency: String,
}

/// Check a service snapshot before pricing it
pub fn validate_service(service: &Service) -> Result<(), PriceError> {
    if service.base_price < Decimal::ZERO {
        return Err(PriceError::InvalidService {
            reason: format!("base price {} is negative", service.base_price),
        });
    }
    if service.duration_minutes < Service::MIN_DURATION_MINUTES {
        return Err(PriceError::InvalidService {
            reason: format!(
                "duration {} is shorter than {} minutes",
                service.duration_minutes,
                Service::MIN_DURATION_MINUTES
            ),
        });
    }
    Ok(())
}

/// Check option definitions: unique ids, unique choice values, sane bounds.
pub fn validate_options(options: &[ServiceOption]) -> Result<(), PriceError> {
    let mut seen_ids = HashSet::new();

    for option in options {
        if !seen_ids.insert(option.id) {
            return Err(PriceError::InvalidDefinition {
                option_id: Some(option.id),
                reason: format!("duplicate option id {}", option.id),
            });
        }

        let mut seen_values = HashSet::new();
        for choice in &option.choices {
            if !seen_values.insert(choice.value.as_str()) {
                return Err(PriceError::InvalidDefinition {
                    option_id: Some(option.id),
                    reason: format!("duplicate choice value '{}'", choice.value),
                });
            }
        }

        if let (Some(min), Some(max)) = (option.min_value, option.max_value) {
            if min > max {
                return Err(PriceError::InvalidDefinition {
                    option_id: Some(option.id),
                    reason: format!("min value {} exceeds max value {}", min, max),
                });
            }
        }
    }

    Ok(())
}

/// Check a full catalog definition
pub fn validate_definition(definition: &ServiceDefinition) -> Result<(), PriceError> {
    validate_service(&definition.service)?;
    validate_options(&definition.options)
}

/// Check a resolved, non-empty value against the option's type and rules
fn check_value(option: &ServiceOption, value: &SelectionValue) -> Result<(), PriceError> {
    let mismatch = || PriceError::TypeMismatch {
        option_id: option.id,
        expected: option.option_type.expected_value(),
    };

    match (option.option_type, value) {
        (OptionType::Checkbox, SelectionValue::Bool(_)) => Ok(()),
        (option_type, SelectionValue::Number(n)) if option_type.is_numeric() => {
            if option.option_type == OptionType::Quantity && !n.fract().is_zero() {
                return Err(mismatch());
            }
            let below = option.min_value.is_some_and(|min| *n < min);
            let above = option.max_value.is_some_and(|max| *n > max);
            if below || above {
                return Err(PriceError::OutOfRange {
                    option_id: option.id,
                    value: *n,
                    min: option.min_value,
                    max: option.max_value,
                });
            }
            Ok(())
        }
        (OptionType::Select | OptionType::Radio, SelectionValue::Text(s)) => {
            if option.find_choice(s).is_none() {
                return Err(PriceError::InvalidChoice {
                    option_id: option.id,
                    value: s.clone(),
                });
            }
            Ok(())
        }
        (OptionType::Text | OptionType::Textarea, SelectionValue::Text(_)) => Ok(()),
        _ => Err(mismatch()),
    }
}

/// Pick the value an option is priced with.
///
/// Customer value if non-empty, else the option default, else a neutral
/// value for optional options. Required options never fall back to neutral.
fn resolve_selection(
    option: &ServiceOption,
    selection: Option<&SelectionValue>,
) -> Result<SelectionValue, PriceError> {
    let provided = selection
        .filter(|v| !v.is_empty())
        .or_else(|| option.default_value.as_ref().filter(|v| !v.is_empty()));

    match provided {
        Some(value) => {
            check_value(option, value)?;
            Ok(value.clone())
        }
        None if option.is_required => Err(PriceError::MissingRequired {
            option_id: option.id,
        }),
        None => Ok(SelectionValue::neutral_for(option.option_type)),
    }
}

/// Stateless booking price calculator
#[derive(Debug, Clone, Default)]
pub struct PriceCalculator {
    currency: Currency,
}

impl PriceCalculator {
    pub fn new(currency: Currency) -> Self {
        Self { currency }
    }

    /// Compute the itemized price of a booking.
    ///
    /// Either returns a complete result or the first validation error;
    /// never a partial result.
    pub fn compute(
        &self,
        service: &Service,
        options: &[ServiceOption],
        selections: &Selections,
    ) -> Result<PriceResult, PriceError> {
        validate_service(service)?;
        validate_options(options)?;

        // BTreeMap iteration keeps the reported unknown id deterministic
        if let Some(option_id) = selections
            .keys()
            .find(|id| !options.iter().any(|o| o.id == **id))
        {
            return Err(PriceError::UnknownOption {
                option_id: *option_id,
            });
        }

        let places = self.currency.minor_units;
        let mut line_items = Vec::with_capacity(options.len());
        let mut options_total = Decimal::ZERO;

        for option in options {
            let value = resolve_selection(option, selections.get(&option.id))?;
            let contribution = option_contribution(option, &value, service.base_price)
                .ok_or(PriceError::AmountOverflow {
                    option_id: Some(option.id),
                })?;

            let choice_label = match (&value, option.option_type.is_choice()) {
                (SelectionValue::Text(s), true) => option.find_choice(s).map(|c| c.label.clone()),
                _ => None,
            };

            options_total = options_total.checked_add(contribution).ok_or(
                PriceError::AmountOverflow {
                    option_id: Some(option.id),
                },
            )?;
            line_items.push(LineItem {
                option_id: option.id,
                label: option.name.clone(),
                choice_label,
                contribution: to_minor_units(contribution, places),
                exact_contribution: contribution,
            });
        }

        let total = service
            .base_price
            .checked_add(options_total)
            .map(|total| to_minor_units(total, places))
            .ok_or(PriceError::AmountOverflow { option_id: None })?;

        tracing::debug!(
            base_price = %service.base_price,
            options = options.len(),
            total = %total,
            "Computed booking price"
        );

        Ok(PriceResult {
            subtotal: to_minor_units(service.base_price, places),
            line_items,
            options_total: to_minor_units(options_total, places),
            total,
            currency: self.currency.code.clone(),
        })
    }
}
