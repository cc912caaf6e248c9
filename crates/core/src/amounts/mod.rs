//! Amounts module - monetary values and their display formatting.

mod amount_format;
mod amount_model;

pub use amount_format::{currency_symbol, format_amount, format_decimal};
pub use amount_model::{Amount, AmountValue};
