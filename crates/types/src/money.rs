//! The single rounding rule applied to every money value.

use rust_decimal::Decimal;

/// Number of decimal places every money value is rounded to.
pub const MONEY_SCALE: u32 = 2;

/// Rounds a money value to two decimal places, half-to-even.
///
/// The result always carries a scale of two, so `250` comes back as `250.00`
/// and prints and serializes that way.
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp(MONEY_SCALE);
    rounded.rescale(MONEY_SCALE);
    rounded
}

/// The amount of a single line: `round(quantity * rate, 2)`.
///
/// Never fails. Products that would overflow `Decimal` saturate, and
/// negative inputs simply yield a negative amount.
pub fn line_amount(quantity: Decimal, rate: Decimal) -> Decimal {
    round_money(quantity.saturating_mul(rate))
}
