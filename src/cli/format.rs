//! Console formatting helpers

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats money with thousands separators and a currency prefix
///
/// At most three fractional digits are kept; trailing zeros are dropped.
pub fn format_money(value: Decimal, currency_symbol: &str) -> String {
    format!("{currency_symbol}{}", format_grouped(value))
}

/// Formats a decimal with `,` between groups of three integer digits
pub fn format_grouped(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let text = rounded.abs().to_string();
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(text.len() + integer.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        grouped.push('-');
    }
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }

    grouped
}

/// Formats a count with thousands separators
pub fn format_count(value: u64) -> String {
    format_grouped(Decimal::from(value))
}

/// One-decimal percentage, `-` when undefined
pub fn format_percentage(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |pct| format!("{pct:.1}%"))
}
