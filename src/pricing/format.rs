//! Currency display strings for API consumers.

use rust_decimal::Decimal;

use super::calculators::round_money;

/// Format an amount as US dollars, e.g. `$1,234.56` or `-$12.50`.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use lightquote::pricing::format_currency;
///
/// assert_eq!(format_currency(dec!(2765.664)), "$2,765.66");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = round_money(amount, 2);
    let digits = format!("{:.2}", rounded.abs());
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_currency_grouping() {
        assert_eq!(format_currency(dec!(0)), "$0.00");
        assert_eq!(format_currency(dec!(7.5)), "$7.50");
        assert_eq!(format_currency(dec!(999.99)), "$999.99");
        assert_eq!(format_currency(dec!(1000)), "$1,000.00");
        assert_eq!(format_currency(dec!(2514.24)), "$2,514.24");
        assert_eq!(format_currency(dec!(1234567.891)), "$1,234,567.89");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(dec!(-12.5)), "-$12.50");
        assert_eq!(format_currency(dec!(-1460.755)), "-$1,460.76");
        assert_eq!(format_currency(dec!(-0.001)), "$0.00");
    }
}
