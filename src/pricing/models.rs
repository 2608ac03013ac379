//! Service and option models for pricing.
//!
//! These are immutable input snapshots handed to the calculator. They
//! deserialize from the JSON shapes the booking front end posts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier of a service option, unique within its service.
pub type OptionId = u64;

/// Bookable service being priced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub base_price: Decimal,
    pub duration_minutes: i32,
}

impl Service {
    /// Shortest duration a service can be booked for
    pub const MIN_DURATION_MINUTES: i32 = 15;

    pub fn new(base_price: Decimal, duration_minutes: i32) -> Self {
        Self {
            base_price,
            duration_minutes,
        }
    }
}

/// How an option is presented to, and answered by, the customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionType {
    Checkbox,
    Number,
    Select,
    Radio,
    Text,
    Textarea,
    Quantity,
}

impl OptionType {
    /// Options answered by picking one of the declared choices
    pub fn is_choice(self) -> bool {
        matches!(self, OptionType::Select | OptionType::Radio)
    }

    /// Options answered with a number
    pub fn is_numeric(self) -> bool {
        matches!(self, OptionType::Number | OptionType::Quantity)
    }

    /// Shape of value this option accepts, for error reporting
    pub fn expected_value(self) -> &'static str {
        match self {
            OptionType::Checkbox => "boolean",
            OptionType::Number => "number",
            OptionType::Quantity => "whole number",
            OptionType::Select | OptionType::Radio => "choice",
            OptionType::Text | OptionType::Textarea => "text",
        }
    }
}

/// Rule governing how an option modifies the service price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceType {
    /// Flat amount added when the option is active
    Fixed,
    /// Percent of the service base price added when the option is active
    Percentage,
    /// Selected numeric value times the impact
    Multiply,
    #[default]
    None,
}

/// One selectable value of a select/radio option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionChoice {
    pub value: String,
    pub label: String,
    /// Flat amount layered on top of the option's own price rule
    #[serde(default)]
    pub price_delta: Decimal,
}

/// Customer-configurable add-on attached to a service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOption {
    pub id: OptionId,
    pub name: String,
    #[serde(rename = "type")]
    pub option_type: OptionType,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub price_type: PriceType,
    #[serde(default)]
    pub price_impact: Decimal,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<OptionChoice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<SelectionValue>,
}

impl ServiceOption {
    /// Create an option with no price effect, no choices and no bounds
    pub fn new(id: OptionId, name: impl Into<String>, option_type: OptionType) -> Self {
        Self {
            id,
            name: name.into(),
            option_type,
            is_required: false,
            price_type: PriceType::None,
            price_impact: Decimal::ZERO,
            choices: Vec::new(),
            min_value: None,
            max_value: None,
            default_value: None,
        }
    }

    pub fn priced(mut self, price_type: PriceType, price_impact: Decimal) -> Self {
        self.price_type = price_type;
        self.price_impact = price_impact;
        self
    }

    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    pub fn with_choice(
        mut self,
        value: impl Into<String>,
        label: impl Into<String>,
        price_delta: Decimal,
    ) -> Self {
        self.choices.push(OptionChoice {
            value: value.into(),
            label: label.into(),
            price_delta,
        });
        self
    }

    pub fn with_bounds(mut self, min_value: Option<Decimal>, max_value: Option<Decimal>) -> Self {
        self.min_value = min_value;
        self.max_value = max_value;
        self
    }

    pub fn with_default(mut self, value: SelectionValue) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Look up a declared choice by its exact value
    pub fn find_choice(&self, value: &str) -> Option<&OptionChoice> {
        self.choices.iter().find(|c| c.value == value)
    }
}

/// Customer's answer for one option.
///
/// Variant order matters for untagged deserialization: numeric strings
/// coming from a form stay `Text`, only JSON numbers become `Number`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectionValue {
    Bool(bool),
    Text(String),
    Number(#[serde(with = "rust_decimal::serde::float")] Decimal),
}

impl SelectionValue {
    pub fn text(value: impl Into<String>) -> Self {
        SelectionValue::Text(value.into())
    }

    /// Only the empty string counts as "no answer"; `false` and `0` are answers.
    pub fn is_empty(&self) -> bool {
        matches!(self, SelectionValue::Text(s) if s.is_empty())
    }

    /// Value contributing nothing, used for unanswered optional options
    pub fn neutral_for(option_type: OptionType) -> Self {
        match option_type {
            OptionType::Checkbox => SelectionValue::Bool(false),
            OptionType::Number | OptionType::Quantity => SelectionValue::Number(Decimal::ZERO),
            OptionType::Select | OptionType::Radio | OptionType::Text | OptionType::Textarea => {
                SelectionValue::Text(String::new())
            }
        }
    }
}

impl From<bool> for SelectionValue {
    fn from(value: bool) -> Self {
        SelectionValue::Bool(value)
    }
}

impl From<Decimal> for SelectionValue {
    fn from(value: Decimal) -> Self {
        SelectionValue::Number(value)
    }
}

impl From<&str> for SelectionValue {
    fn from(value: &str) -> Self {
        SelectionValue::Text(value.to_string())
    }
}

/// Complete pricing input for one service, as pushed by the catalog provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDefinition {
    pub service_id: u64,
    #[serde(default)]
    pub name: String,
    pub service: Service,
    #[serde(default)]
    pub options: Vec<ServiceOption>,
}

/// Currency used for rounding and labelling totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub code: String,
    /// Digits after the decimal point (2 for USD, 0 for JPY)
    pub minor_units: u32,
}

impl Currency {
    pub fn new(code: impl Into<String>, minor_units: u32) -> Self {
        Self {
            code: code.into(),
            minor_units,
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::new("USD", 2)
    }
}
