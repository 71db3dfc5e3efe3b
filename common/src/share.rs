use crate::currency::format_amount;
use crate::order::OrderRow;

/// Shareable payment URL for an order: `<origin>/pay/<order-id>`.
pub fn payment_link(origin: &str, order_id: &str) -> String {
    format!("{}/pay/{}", origin.trim_end_matches('/'), order_id)
}

/// Pre-filled WhatsApp message for an order row: who it is for, the
/// formatted amount, and the payment link.
pub fn whatsapp_text(row: &OrderRow, origin: &str) -> String {
    let link = payment_link(origin, &row.id);
    let amount = format_amount(row.amount, &row.currency);
    format!("Payment for {}: {} \u{2014} {}", row.customer, amount, link)
}

/// `wa.me` deep link that opens WhatsApp with `text` pre-filled.
pub fn whatsapp_url(text: &str) -> String {
    format!("https://wa.me/?text={}", urlencoding::encode(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> OrderRow {
        OrderRow {
            id: "ord_1".into(),
            customer: "a@b.com".into(),
            amount: 25.5,
            description: "Invoice #1".into(),
            currency: "EUR".into(),
            status: "pending".into(),
            created: "2026-02-23T10:30:00Z".parse().unwrap(),
            expires_in: "\u{2014}".into(),
        }
    }

    #[test]
    fn test_payment_link() {
        assert_eq!(
            payment_link("https://pay.example.com", "ord_1"),
            "https://pay.example.com/pay/ord_1"
        );
        assert_eq!(
            payment_link("https://pay.example.com/", "ord_1"),
            "https://pay.example.com/pay/ord_1"
        );
    }

    #[test]
    fn test_whatsapp_text() {
        let text = whatsapp_text(&sample_row(), "https://pay.example.com");
        assert_eq!(
            text,
            "Payment for a@b.com: \u{20ac}25.50 \u{2014} https://pay.example.com/pay/ord_1"
        );
    }

    #[test]
    fn test_whatsapp_url_is_encoded() {
        let url = whatsapp_url("Payment for a@b.com: \u{20ac}25.50");
        assert!(url.starts_with("https://wa.me/?text="));
        assert!(!url.contains(' '));
        assert!(url.contains("%20"));
        assert!(url.contains("a%40b.com"));
    }
}
