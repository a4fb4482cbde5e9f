//! Locale-aware currency display
//!
//! Only an enumerated set of currencies get locale formatting; anything else
//! falls back to `"<amount> <code>"`.

/// Currencies with dedicated locale formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    /// Vietnamese dong, vi-VN: `6.000.000 ₫`
    Vnd,
    /// US dollar, en-US: `$1,234.50`
    Usd,
    /// Singapore dollar, en-SG: `$1,234.50`
    Sgd,
}

impl Currency {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "VND" => Some(Currency::Vnd),
            "USD" => Some(Currency::Usd),
            "SGD" => Some(Currency::Sgd),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Vnd => "VND",
            Currency::Usd => "USD",
            Currency::Sgd => "SGD",
        }
    }

    pub fn format(&self, amount: f64) -> String {
        let sign = if amount < 0.0 { "-" } else { "" };
        match self {
            Currency::Vnd => {
                let digits = group_number(amount.abs(), 0, 3, '.', ',');
                format!("{}{} ₫", sign, digits)
            }
            Currency::Usd | Currency::Sgd => {
                let digits = group_number(amount.abs(), 2, 2, ',', '.');
                format!("{}${}", sign, digits)
            }
        }
    }
}

/// Format an amount for display in the given currency
pub fn format_currency(amount: f64, code: &str) -> String {
    match Currency::from_code(code) {
        Some(currency) if amount.is_finite() => currency.format(amount),
        _ => format!("{} {}", format_number(amount), code),
    }
}

/// Shortest plain rendering of a number: `1500`, `62.5`
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // normalises -0
        return "0".to_string();
    }
    value.to_string()
}

/// Render a non-negative amount with digit grouping and a bounded fraction
fn group_number(
    amount: f64,
    min_fraction: usize,
    max_fraction: usize,
    group_sep: char,
    decimal_sep: char,
) -> String {
    let fixed = format!("{:.*}", max_fraction, amount);
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, f),
        None => (fixed.as_str(), ""),
    };

    let mut fraction = frac_part.to_string();
    while fraction.len() > min_fraction && fraction.ends_with('0') {
        fraction.pop();
    }

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(group_sep);
        }
        grouped.push(ch);
    }

    if fraction.is_empty() {
        grouped
    } else {
        format!("{}{}{}", grouped, decimal_sep, fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vnd() {
        assert_eq!(format_currency(6_000_000.0, "VND"), "6.000.000 ₫");
        assert_eq!(format_currency(85_000.0, "VND"), "85.000 ₫");
        assert_eq!(format_currency(1234.5, "VND"), "1.234,5 ₫");
        assert_eq!(format_currency(999.0, "VND"), "999 ₫");
    }

    #[test]
    fn test_usd_and_sgd() {
        assert_eq!(format_currency(45.0, "USD"), "$45.00");
        assert_eq!(format_currency(162_000.0, "USD"), "$162,000.00");
        assert_eq!(format_currency(1234.567, "USD"), "$1,234.57");
        assert_eq!(format_currency(-12.5, "USD"), "-$12.50");
        assert_eq!(format_currency(950.0, "SGD"), "$950.00");
        assert_eq!(format_currency(1_228_000.0, "SGD"), "$1,228,000.00");
    }

    #[test]
    fn test_unsupported_code_falls_back() {
        assert_eq!(format_currency(1500.0, "EUR"), "1500 EUR");
        assert_eq!(format_currency(12.75, "GBP"), "12.75 GBP");
        assert_eq!(format_currency(10.0, ""), "10 ");
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(format_currency(950.0, "SGD"), format_currency(950.0, "SGD"));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(62.5), "62.5");
        assert_eq!(format_number(-0.0), "0");
    }
}
