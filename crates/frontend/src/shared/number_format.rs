//! Number parsing and formatting for forms and tables.

/// Parse a free-text numeric field, treating blank or non-numeric input as 0.
///
/// The stock forms keep quantity and price as raw strings while the user
/// types; the running total must stay well-defined throughout.
pub fn parse_decimal(input: &str) -> f64 {
    input.trim().parse::<f64>().unwrap_or(0.0)
}

/// Quantity x unit price.
pub fn total_amount(quantity: &str, price: &str) -> f64 {
    parse_decimal(quantity) * parse_decimal(price)
}

/// Format a money value with two decimals and a thousands separator.
///
/// # Examples
///
/// ```
/// let formatted = frontend::shared::number_format::format_money(1234567.89);
/// assert_eq!(formatted, "1 234 567.89");
/// ```
pub fn format_money(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let (integer_part, decimal_part) = formatted.split_once('.').unwrap_or((&formatted, "00"));

    // Insert a space every 3 digits from the end of the integer part
    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(' ');
        }
        result.push(*c);
    }
    let grouped: String = result.chars().rev().collect();

    format!("{}.{}", grouped, decimal_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("3"), 3.0);
        assert_eq!(parse_decimal("2.5"), 2.5);
        assert_eq!(parse_decimal(""), 0.0);
        assert_eq!(parse_decimal("abc"), 0.0);
        assert_eq!(parse_decimal(" 7 "), 7.0);
    }

    #[test]
    fn test_total_amount() {
        assert_eq!(total_amount("3", "2.5"), 7.5);
        assert_eq!(format_money(total_amount("3", "2.5")), "7.50");
        assert_eq!(total_amount("", "2.5"), 0.0);
        assert_eq!(total_amount("4", ""), 0.0);
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "1 234.56");
        assert_eq!(format_money(1234567.89), "1 234 567.89");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(-1234.56), "-1 234.56");
    }
}
