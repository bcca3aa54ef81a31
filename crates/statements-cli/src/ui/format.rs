//! String formatting utilities for UI rendering.

use rust_decimal::{Decimal, RoundingStrategy};

use super::context::UiContext;

/// Format an amount with thousands separators and two decimals.
///
/// `50000` becomes `50,000.00`; negatives keep a leading minus.
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = format!("{:.2}", rounded.abs());
    let (whole, frac) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{}.{}", grouped, frac)
    } else {
        format!("{}.{}", grouped, frac)
    }
}

/// Plain amount for scripts: two decimals, no separators.
pub fn format_plain_amount(amount: Decimal) -> String {
    format!(
        "{:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Amount as shown in the current mode: grouped when pretty, bare otherwise.
pub fn amount(ctx: &UiContext, value: Decimal) -> String {
    if ctx.mode.is_pretty() {
        format_money(value)
    } else {
        format_plain_amount(value)
    }
}
