use std::fmt;

use crate::currency::CurrencyCode;

/// Validated payload emitted by the create-order form. The form owns raw
/// text fields; this is what reaches the network layer.
#[derive(Clone, Debug, PartialEq)]
pub struct CreateOrderInput {
    pub amount: f64,
    pub description: String,
    pub email: String,
    pub currency: CurrencyCode,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationError {
    InvalidAmount,
    InvalidEmail,
    EmptyDescription,
    UnsupportedCurrency,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidAmount => write!(f, "Enter a valid amount"),
            ValidationError::InvalidEmail => write!(f, "Enter a valid email"),
            ValidationError::EmptyDescription => write!(f, "Enter a description"),
            ValidationError::UnsupportedCurrency => write!(f, "Select a currency"),
        }
    }
}

/// Syntactic email shape: exactly one `@`, non-empty local part, domain
/// with a dot and non-empty labels around it, no whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    if domain.chars().any(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Parse a positive finite amount from raw form input.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let amount: f64 = raw.trim().parse().ok()?;
    (amount.is_finite() && amount > 0.0).then_some(amount)
}

/// Per-keystroke gate for the submit control. Currency comes from a closed
/// select, so only the free-text fields are checked here.
pub fn is_complete(amount: &str, description: &str, email: &str) -> bool {
    parse_amount(amount).is_some() && is_valid_email(email) && !description.trim().is_empty()
}

impl CreateOrderInput {
    /// Validate raw form fields; the first violated rule wins, in the same
    /// order the form reports them.
    pub fn validate(
        amount: &str,
        description: &str,
        email: &str,
        currency: &str,
    ) -> Result<Self, ValidationError> {
        let amount = parse_amount(amount).ok_or(ValidationError::InvalidAmount)?;
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        if description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        let currency =
            CurrencyCode::from_code(currency).ok_or(ValidationError::UnsupportedCurrency)?;
        Ok(Self {
            amount,
            description: description.to_string(),
            email: email.to_string(),
            currency,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input_passes_through_exactly() {
        let input =
            CreateOrderInput::validate("25.50", "Invoice #1", "a@b.com", "EUR").unwrap();
        assert_eq!(input.amount, 25.5);
        assert_eq!(input.description, "Invoice #1");
        assert_eq!(input.email, "a@b.com");
        assert_eq!(input.currency, CurrencyCode::Eur);
    }

    #[test]
    fn test_each_violation_disables_submit() {
        assert!(is_complete("25.50", "Invoice #1", "a@b.com"));
        assert!(!is_complete("", "Invoice #1", "a@b.com"));
        assert!(!is_complete("0", "Invoice #1", "a@b.com"));
        assert!(!is_complete("-3", "Invoice #1", "a@b.com"));
        assert!(!is_complete("abc", "Invoice #1", "a@b.com"));
        assert!(!is_complete("25.50", "", "a@b.com"));
        assert!(!is_complete("25.50", "   ", "a@b.com"));
        assert!(!is_complete("25.50", "Invoice #1", "not-an-email"));
        assert!(!is_complete("25.50", "Invoice #1", ""));
    }

    #[test]
    fn test_first_violation_wins() {
        assert_eq!(
            CreateOrderInput::validate("", "", "", "EUR"),
            Err(ValidationError::InvalidAmount)
        );
        assert_eq!(
            CreateOrderInput::validate("5", "", "nope", "EUR"),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(
            CreateOrderInput::validate("5", "", "a@b.com", "EUR"),
            Err(ValidationError::EmptyDescription)
        );
        assert_eq!(
            CreateOrderInput::validate("5", "rent", "a@b.com", "JPY"),
            Err(ValidationError::UnsupportedCurrency)
        );
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@sub.domain.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email("a@b .com"));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("25.50"), Some(25.5));
        assert_eq!(parse_amount(" 100 "), Some(100.0));
        assert_eq!(parse_amount("0"), None);
        assert_eq!(parse_amount("-1"), None);
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount("inf"), None);
        assert_eq!(parse_amount("12,50"), None);
    }
}
