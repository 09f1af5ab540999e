//! Money display formatting. The currency glyph is a fixed literal, not
//! locale-derived; amounts always render with exactly two decimals.

/// Fixed currency glyph used on invoices and totals.
pub const CURRENCY: &str = "₹";

/// Format an amount for display: `₹` plus the value rounded to two
/// decimals, half-up (99.995 rounds to 100.00).
pub fn format_amount(amount: f64) -> String {
    format!("{CURRENCY}{}", format_fixed2(amount))
}

/// Round-half-up to two decimals, operating on the value's shortest
/// decimal representation so that inputs written as e.g. 99.995 round the
/// way their decimal form reads, not the way the nearest binary float
/// happens to fall.
fn format_fixed2(value: f64) -> String {
    let text = format!("{}", value.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, f),
        None => (text.as_str(), ""),
    };

    let digit = |i: usize| frac_part.as_bytes().get(i).map_or(0, |b| (b - b'0') as i64);
    let mut cents: i64 = int_part.parse::<i64>().unwrap_or(0) * 100 + digit(0) * 10 + digit(1);
    if digit(2) >= 5 {
        cents += 1;
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}{}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_amounts_gain_two_decimals() {
        assert_eq!(format_amount(100.0), "₹100.00");
        assert_eq!(format_amount(0.0), "₹0.00");
    }

    #[test]
    fn half_cent_rounds_up() {
        assert_eq!(format_amount(99.995), "₹100.00");
        assert_eq!(format_amount(0.005), "₹0.01");
        assert_eq!(format_amount(1.005), "₹1.01");
    }

    #[test]
    fn below_half_cent_rounds_down() {
        assert_eq!(format_amount(2.004), "₹2.00");
        assert_eq!(format_amount(0.0049), "₹0.00");
    }

    #[test]
    fn existing_precision_is_preserved() {
        assert_eq!(format_amount(1234.5), "₹1234.50");
        assert_eq!(format_amount(50.25), "₹50.25");
        assert_eq!(format_amount(0.1), "₹0.10");
    }

    #[test]
    fn extra_precision_is_truncated_with_rounding() {
        assert_eq!(format_amount(10.12999), "₹10.13");
        assert_eq!(format_amount(10.1201), "₹10.12");
    }
}
