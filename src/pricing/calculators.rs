//! Core pricing calculation functions.
//!
//! Pure functions for option price math - no validation, no I/O.
//! Callers pass values that already went through selection resolution.

use rust_decimal::prelude::*;

use crate::pricing::models::{OptionType, PriceType, SelectionValue, ServiceOption};

/// Round to specified decimal places, halves away from zero (round-half-up).
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use mobooking_pricing::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(3));
/// assert_eq!(round_money(dec!(1.005), 2), dec!(1.01));
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Round and pad to exactly `places` digits, so `15` reports as `15.00`.
pub fn to_minor_units(amount: Decimal, places: u32) -> Decimal {
    let mut rounded = round_money(amount, places);
    rounded.rescale(places);
    rounded
}

/// Whether an option counts as "taken" for fixed and percentage pricing.
///
/// Checkbox: checked. Number/quantity: strictly positive.
/// Select, radio and text types: a non-empty value.
pub fn is_active(option_type: OptionType, value: &SelectionValue) -> bool {
    match value {
        SelectionValue::Bool(checked) => option_type == OptionType::Checkbox && *checked,
        SelectionValue::Number(n) => option_type.is_numeric() && *n > Decimal::ZERO,
        SelectionValue::Text(s) => {
            option_type != OptionType::Checkbox && !option_type.is_numeric() && !s.is_empty()
        }
    }
}

/// Numeric reading of a selection for multiply pricing.
pub fn numeric_value(option_type: OptionType, value: &SelectionValue) -> Decimal {
    match value {
        SelectionValue::Number(n) if option_type.is_numeric() => *n,
        SelectionValue::Bool(true) if option_type == OptionType::Checkbox => Decimal::ONE,
        _ => Decimal::ZERO,
    }
}

/// Contribution from the option's own price rule, before any choice delta.
///
/// `None` when the amount does not fit in a `Decimal`.
pub fn base_contribution(
    option: &ServiceOption,
    value: &SelectionValue,
    base_price: Decimal,
) -> Option<Decimal> {
    let active = is_active(option.option_type, value);

    match option.price_type {
        PriceType::None => Some(Decimal::ZERO),
        PriceType::Fixed if active => Some(option.price_impact),
        PriceType::Percentage if active => base_price
            .checked_mul(option.price_impact)?
            .checked_div(Decimal::ONE_HUNDRED),
        PriceType::Fixed | PriceType::Percentage => Some(Decimal::ZERO),
        PriceType::Multiply => option
            .price_impact
            .checked_mul(numeric_value(option.option_type, value)),
    }
}

/// Flat delta of the selected choice; zero for non-choice options or empty picks.
pub fn choice_delta(option: &ServiceOption, value: &SelectionValue) -> Decimal {
    if !option.option_type.is_choice() {
        return Decimal::ZERO;
    }

    match value {
        SelectionValue::Text(s) if !s.is_empty() => option
            .find_choice(s)
            .map(|c| c.price_delta)
            .unwrap_or(Decimal::ZERO),
        _ => Decimal::ZERO,
    }
}

/// Total unrounded contribution of one option to the booking price.
///
/// `None` when the amount does not fit in a `Decimal`.
pub fn option_contribution(
    option: &ServiceOption,
    value: &SelectionValue,
    base_price: Decimal,
) -> Option<Decimal> {
    base_contribution(option, value, base_price)?.checked_add(choice_delta(option, value))
}
