use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder shown for fields the backend left empty.
pub const EMPTY_FIELD: &str = "\u{2014}";

/// An order (payment request) as returned by the backend. The client never
/// mutates one in place; it only prepends a freshly created order to its
/// list or replaces the whole list on refresh.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderDto {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: String,
    pub status: String,
    pub amount: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub customer_email: Option<String>,
    pub currency: String,
}

/// Per-row display projection of an order. Derived, never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderRow {
    pub id: String,
    pub customer: String,
    pub amount: f64,
    pub description: String,
    pub currency: String,
    pub status: String,
    pub created: DateTime<Utc>,
    pub expires_in: String,
}

impl OrderRow {
    pub fn from_dto(order: &OrderDto) -> Self {
        Self {
            id: order.id.clone(),
            customer: order
                .customer_email
                .clone()
                .unwrap_or_else(|| EMPTY_FIELD.to_string()),
            amount: order.amount,
            description: order.description.clone().unwrap_or_default(),
            currency: order.currency.clone(),
            status: order.status.clone(),
            created: order.created_at,
            expires_in: EMPTY_FIELD.to_string(),
        }
    }
}

/// Short display stamp, e.g. "Feb 23, 2026, 10:30".
pub fn format_created(ts: &DateTime<Utc>) -> String {
    ts.format("%b %d, %Y, %H:%M").to_string()
}

/// Display bucket for an order status. Statuses are an open-ended set on
/// the wire; anything that is not paid or pending renders as failed,
/// including statuses introduced after this client shipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusBucket {
    Paid,
    Pending,
    Failed,
}

impl StatusBucket {
    /// Case-insensitive classification into the three display buckets.
    pub fn classify(status: &str) -> Self {
        match status.to_ascii_lowercase().as_str() {
            "paid" => StatusBucket::Paid,
            "pending" => StatusBucket::Pending,
            _ => StatusBucket::Failed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusBucket::Paid => "Paid",
            StatusBucket::Pending => "Pending",
            StatusBucket::Failed => "Failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dto() -> OrderDto {
        serde_json::from_str(
            r#"{
                "id": "ord_1",
                "created_at": "2026-02-23T10:30:00Z",
                "updated_at": "2026-02-23T10:30:00Z",
                "created_by": "usr_9",
                "status": "pending",
                "amount": 25.5,
                "description": "Invoice #1",
                "customer_email": "a@b.com",
                "currency": "EUR"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_status_buckets() {
        assert_eq!(StatusBucket::classify("Paid"), StatusBucket::Paid);
        assert_eq!(StatusBucket::classify("PAID"), StatusBucket::Paid);
        assert_eq!(StatusBucket::classify("pending"), StatusBucket::Pending);
        assert_eq!(StatusBucket::classify("failed"), StatusBucket::Failed);
        assert_eq!(StatusBucket::classify("refunded"), StatusBucket::Failed);
        assert_eq!(StatusBucket::classify(""), StatusBucket::Failed);
    }

    #[test]
    fn test_row_from_dto() {
        let row = OrderRow::from_dto(&sample_dto());
        assert_eq!(row.id, "ord_1");
        assert_eq!(row.customer, "a@b.com");
        assert_eq!(row.description, "Invoice #1");
        assert_eq!(row.amount, 25.5);
        assert_eq!(row.expires_in, EMPTY_FIELD);
    }

    #[test]
    fn test_row_placeholders_for_missing_fields() {
        let mut dto = sample_dto();
        dto.customer_email = None;
        dto.description = None;
        let row = OrderRow::from_dto(&dto);
        assert_eq!(row.customer, EMPTY_FIELD);
        assert_eq!(row.description, "");
    }

    #[test]
    fn test_optional_fields_default_when_absent() {
        let dto: OrderDto = serde_json::from_str(
            r#"{
                "id": "ord_2",
                "created_at": "2026-02-23T10:30:00Z",
                "updated_at": "2026-02-23T10:31:00Z",
                "created_by": "usr_9",
                "status": "paid",
                "amount": 10.0,
                "currency": "USD"
            }"#,
        )
        .unwrap();
        assert_eq!(dto.description, None);
        assert_eq!(dto.customer_email, None);
    }

    #[test]
    fn test_format_created() {
        let ts: DateTime<Utc> = "2026-02-23T10:30:00Z".parse().unwrap();
        assert_eq!(format_created(&ts), "Feb 23, 2026, 10:30");
    }
}
