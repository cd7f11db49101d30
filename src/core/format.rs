use rust_decimal::{Decimal, RoundingStrategy};

/// Currency symbol and separators for Brazilian reais (pt-BR)
const CURRENCY_SYMBOL: &str = "R$";
const THOUSANDS_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';
/// Digits in the minor unit (centavos)
const MINOR_UNIT_DP: u32 = 2;

/// Format an amount as currency, e.g. `R$ 1.500,00` or `-R$ 12,30`.
///
/// This is the only place amounts are rounded to the minor unit.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(MINOR_UNIT_DP, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let digits = format!("{:.2}", rounded.abs());
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    format!(
        "{}{} {}{}{}",
        sign,
        CURRENCY_SYMBOL,
        group_thousands(integer),
        DECIMAL_SEPARATOR,
        fraction
    )
}

/// Currency with an explicit `+ ` / `- ` prefix, as shown on list rows
pub fn format_signed_currency(amount: Decimal, negative: bool) -> String {
    let symbol = if negative { "- " } else { "+ " };
    format!("{}{}", symbol, format_currency(amount))
}

fn group_thousands(integer: &str) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(c);
    }
    grouped
}

/// Reformat an ISO `YYYY-MM-DD` date as `DD/MM/YYYY`.
///
/// Works on the literal components only. Input that isn't three `-` separated
/// parts is returned unchanged.
pub fn format_date(iso: &str) -> String {
    let mut parts = iso.split('-');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day), None) => format!("{}/{}/{}", day, month, year),
        _ => iso.to_string(),
    }
}
