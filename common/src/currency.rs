use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies an order can be created in. The backend accepts the ISO code
/// as a plain string; this list is the client-side allow-list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    #[default]
    Usd,
    Eur,
    Gbp,
    Cad,
    Aud,
}

impl CurrencyCode {
    pub fn all() -> &'static [CurrencyCode] {
        &[
            CurrencyCode::Usd,
            CurrencyCode::Eur,
            CurrencyCode::Gbp,
            CurrencyCode::Cad,
            CurrencyCode::Aud,
        ]
    }

    /// ISO 4217 code as sent over the wire.
    pub fn code(self) -> &'static str {
        match self {
            CurrencyCode::Usd => "USD",
            CurrencyCode::Eur => "EUR",
            CurrencyCode::Gbp => "GBP",
            CurrencyCode::Cad => "CAD",
            CurrencyCode::Aud => "AUD",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            CurrencyCode::Usd => "$",
            CurrencyCode::Eur => "\u{20ac}",
            CurrencyCode::Gbp => "\u{a3}",
            CurrencyCode::Cad => "CA$",
            CurrencyCode::Aud => "A$",
        }
    }

    /// Parse an ISO code, case-insensitively. `None` for anything outside
    /// the allow-list.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.code().eq_ignore_ascii_case(code.trim()))
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Format an amount for display: currency symbol, thousands grouping, two
/// decimals. Codes outside the allow-list fall back to `"CODE amount"`.
pub fn format_amount(amount: f64, currency: &str) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let digits = group_thousands(amount.abs());
    match CurrencyCode::from_code(currency) {
        Some(code) => format!("{sign}{}{digits}", code.symbol()),
        None => format!("{sign}{currency} {digits}"),
    }
}

/// Render `|amount|` with two decimals and a comma every three integer digits.
fn group_thousands(amount: f64) -> String {
    let rendered = format!("{amount:.2}");
    let (int_part, frac_part) = rendered.split_once('.').unwrap_or((&rendered, "00"));
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped.push('.');
    grouped.push_str(frac_part);
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_known_currencies() {
        assert_eq!(format_amount(1000.0, "USD"), "$1,000.00");
        assert_eq!(format_amount(0.5, "EUR"), "\u{20ac}0.50");
        assert_eq!(format_amount(25.5, "GBP"), "\u{a3}25.50");
        assert_eq!(format_amount(12.0, "CAD"), "CA$12.00");
        assert_eq!(format_amount(7.25, "AUD"), "A$7.25");
    }

    #[test]
    fn test_format_grouping() {
        assert_eq!(format_amount(1234567.891, "USD"), "$1,234,567.89");
        assert_eq!(format_amount(999.99, "USD"), "$999.99");
        assert_eq!(format_amount(1000000.0, "EUR"), "\u{20ac}1,000,000.00");
    }

    #[test]
    fn test_format_unknown_code_falls_back() {
        assert_eq!(format_amount(12.0, "JPY"), "JPY 12.00");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_amount(-5.0, "USD"), "-$5.00");
    }

    #[test]
    fn test_format_is_deterministic() {
        let a = format_amount(1000.0, "USD");
        let b = format_amount(1000.0, "USD");
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(CurrencyCode::from_code("USD"), Some(CurrencyCode::Usd));
        assert_eq!(CurrencyCode::from_code("eur"), Some(CurrencyCode::Eur));
        assert_eq!(CurrencyCode::from_code(" aud "), Some(CurrencyCode::Aud));
        assert_eq!(CurrencyCode::from_code("JPY"), None);
        assert_eq!(CurrencyCode::from_code(""), None);
    }

    #[test]
    fn test_wire_format_is_uppercase_code() {
        let json = serde_json::to_string(&CurrencyCode::Eur).unwrap();
        assert_eq!(json, "\"EUR\"");
        let parsed: CurrencyCode = serde_json::from_str("\"GBP\"").unwrap();
        assert_eq!(parsed, CurrencyCode::Gbp);
    }
}
