//! Currency display formatting.
//!
//! Two display modes for the presentation layer: a precise price
//! ("$1,234.56") and a rounded summary ("1,235"). Amounts are rounded to
//! whole cents before formatting (see [`round_to_cents`]).

pub use crate::shared::round_to_cents;

/// Insert thousands separators into a non-negative whole number.
fn group_thousands(amount: u64) -> String {
    let s = amount.to_string();
    let mut result = String::new();
    let digits: Vec<char> = s.chars().collect();
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*ch);
    }
    result
}

/// Precise-price display: currency symbol, thousands separators, cents.
pub fn format_money(amount: f64) -> String {
    let total_cents = (amount * 100.0).round() as i64;
    let sign = if total_cents < 0 { "-" } else { "" };
    let total_cents = total_cents.unsigned_abs();
    let whole = total_cents / 100;
    let cents = total_cents % 100;
    format!("{}${}.{:02}", sign, group_thousands(whole), cents)
}

/// Rounded-summary display: thousands-separated whole units, no symbol,
/// cents rounded away.
pub fn format_money_rounded(amount: f64) -> String {
    let whole = amount.round() as i64;
    let sign = if whole < 0 { "-" } else { "" };
    format!("{}{}", sign, group_thousands(whole.unsigned_abs()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(1.2345), 1.23);
        assert_eq!(round_to_cents(9.999), 10.0);
        assert_eq!(round_to_cents(10.0), 10.0);
        assert_eq!(round_to_cents(0.1 + 0.2), 0.3);
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(500.0), "$500.00");
        assert_eq!(format_money(4321.5), "$4,321.50");
        assert_eq!(format_money(1234567.891), "$1,234,567.89");
    }

    #[test]
    fn test_format_money_rounded() {
        assert_eq!(format_money_rounded(0.0), "0");
        assert_eq!(format_money_rounded(4321.5), "4,322");
        assert_eq!(format_money_rounded(999.4), "999");
        assert_eq!(format_money_rounded(1000000.0), "1,000,000");
    }
}
