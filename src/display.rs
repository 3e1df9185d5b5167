//! Number formatting for the results panel
//!
//! Rounding happens here only; engine values stay unrounded.

/// Fraction as a percentage with two decimals (`0.1` -> `10.00%`)
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Currency amount with thousands separators and two decimals
/// (`1234567.891` -> `£1,234,567.89`)
pub fn format_currency(symbol: &str, value: f64) -> String {
    if !value.is_finite() {
        return format!("{}{}", symbol, value);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    // "-0.00" would be noise
    let sign = if whole == "0" && cents == "00" { "" } else { sign };
    format!("{}{}{}.{}", sign, symbol, group_thousands(whole), cents)
}

/// Whole amounts without decimals (`100000.0` -> `£100,000`), anything
/// fractional falls back to [`format_currency`]
pub fn format_whole_amount(symbol: &str, value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        let sign = if value < 0.0 { "-" } else { "" };
        let digits = format!("{:.0}", value.abs());
        format!("{}{}{}", sign, symbol, group_thousands(&digits))
    } else {
        format_currency(symbol, value)
    }
}

/// Insert `,` every three digits from the right
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.1), "10.00%");
        assert_eq!(format_percent(0.2), "20.00%");
        assert_eq!(format_percent(0.0), "0.00%");
        assert_eq!(format_percent(1.5), "150.00%");
        assert_eq!(format_percent(0.125), "12.50%");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency("£", 2000.0), "£2,000.00");
        assert_eq!(format_currency("£", 0.0), "£0.00");
        assert_eq!(format_currency("£", 999.999), "£1,000.00");
        assert_eq!(format_currency("$", 1234567.891), "$1,234,567.89");
        assert_eq!(format_currency("£", -1234.5), "-£1,234.50");
        assert_eq!(format_currency("£", -0.001), "£0.00");
    }

    #[test]
    fn test_format_whole_amount() {
        assert_eq!(format_whole_amount("£", 100_000.0), "£100,000");
        assert_eq!(format_whole_amount("£", 50.0), "£50");
        assert_eq!(format_whole_amount("£", 1_000_000.0), "£1,000,000");
        assert_eq!(format_whole_amount("£", 1500.5), "£1,500.50");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("123456"), "123,456");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }
}
