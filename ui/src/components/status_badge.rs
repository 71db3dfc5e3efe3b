use dioxus::prelude::*;

use paylink_common::order::StatusBucket;

/// Three-way status badge: paid and pending get their own treatment,
/// every other status renders as failed.
#[component]
pub fn StatusBadge(status: String) -> Element {
    let bucket = StatusBucket::classify(&status);
    let class = match bucket {
        StatusBucket::Paid => "status-badge status-paid",
        StatusBucket::Pending => "status-badge status-pending",
        StatusBucket::Failed => "status-badge status-failed",
    };
    rsx! {
        span { class: "{class}", "{bucket.label()}" }
    }
}
