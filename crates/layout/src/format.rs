use invoicer_types::round_money;
use rust_decimal::Decimal;

/// Formats money with thousands separators and exactly two decimals.
///
/// `1234567.891` becomes `1,234,567.89`.
pub fn format_money(value: Decimal) -> String {
    let mut rounded = round_money(value);
    if rounded.is_zero() {
        // Avoid printing "-0.00" for tiny negative values.
        rounded = Decimal::ZERO;
    }
    let fixed = format!("{rounded:.2}");
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}.{fraction}")
}

/// Formats a quantity without trailing zeros: `2.50` becomes `2.5`.
pub fn format_quantity(value: Decimal) -> String {
    value.normalize().to_string()
}
