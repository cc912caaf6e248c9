//! Currency-aware display formatting.

use rust_decimal::{Decimal, RoundingStrategy};

use super::Amount;
use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Returns the display prefix for a currency code.
///
/// Known codes get their en-GB symbol. Unknown codes fall back to the code
/// itself followed by a space.
pub fn currency_symbol(currency: &str) -> String {
    let symbol = match currency.to_ascii_uppercase().as_str() {
        "GBP" => "£",
        "EUR" => "€",
        "USD" => "US$",
        "CAD" => "CA$",
        "AUD" => "A$",
        "NZD" => "NZ$",
        "JPY" => "JP¥",
        "INR" => "₹",
        _ => return format!("{} ", currency),
    };
    symbol.to_string()
}

/// Formats a decimal with thousands separators and two fraction digits.
pub fn format_decimal(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(
            DISPLAY_DECIMAL_PRECISION,
            RoundingStrategy::MidpointAwayFromZero,
        )
        .abs();
    let text = format!("{:.*}", DISPLAY_DECIMAL_PRECISION as usize, rounded);
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    if fraction.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, fraction)
    }
}

/// Formats an amount for display, e.g. `£1,234.56`.
///
/// Malformed values render as zero in the amount's currency.
pub fn format_amount(amount: &Amount) -> String {
    let value = amount.value();
    let number = format_decimal(value);
    match number.strip_prefix('-') {
        Some(unsigned) => format!("-{}{}", currency_symbol(&amount.currency), unsigned),
        None => format!("{}{}", currency_symbol(&amount.currency), number),
    }
}
