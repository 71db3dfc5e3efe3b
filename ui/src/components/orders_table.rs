use dioxus::prelude::*;

use paylink_common::currency::format_amount;
use paylink_common::order::{format_created, OrderRow};
use paylink_common::share::{payment_link, whatsapp_text, whatsapp_url};

use super::status_badge::StatusBadge;

/// Presentational order table with per-row share actions. The row list is
/// owned by the parent; this component only renders it.
#[component]
pub fn OrdersTable(
    business_id: String,
    rows: Vec<OrderRow>,
    loading: bool,
    error: Option<String>,
) -> Element {
    let mut copied_id = use_signal(|| None::<String>);

    let on_copy = move |id: String| {
        let link = payment_link(&page_origin(), &id);
        spawn(async move {
            if !copy_to_clipboard(&link).await {
                tracing::warn!("failed to copy payment link to clipboard");
                return;
            }
            copied_id.set(Some(id.clone()));
            #[cfg(target_family = "wasm")]
            gloo_timers::future::TimeoutFuture::new(1_500).await;
            // Keyed clear: copying another row in the meantime hands the
            // indicator to that row, and this timer must not touch it.
            if copied_id.read().as_deref() == Some(id.as_str()) {
                copied_id.set(None);
            }
        });
    };

    rsx! {
        div { class: "orders-table-wrap",
            table { class: "orders-table",
                thead {
                    tr {
                        th { "Customer" }
                        th { "Amount" }
                        th { "Description" }
                        th { "Currency" }
                        th { "Status" }
                        th { "Created" }
                        th { "Expires in" }
                        th { "Share" }
                    }
                }
                tbody {
                    if business_id.is_empty() {
                        tr { td { colspan: "8", class: "placeholder", "No business selected." } }
                    } else if loading {
                        tr { td { colspan: "8", class: "placeholder", "Loading\u{2026}" } }
                    } else if let Some(err) = error {
                        tr { td { colspan: "8", class: "placeholder placeholder-error", "{err}" } }
                    } else if rows.is_empty() {
                        tr { td { colspan: "8", class: "placeholder", "No orders" } }
                    } else {
                        {rows.iter().map(|row| {
                            let id = row.id.clone();
                            let copy_id = id.clone();
                            let share_row = row.clone();
                            let amount_str = format_amount(row.amount, &row.currency);
                            let created_str = format_created(&row.created);
                            let is_copied = copied_id.read().as_deref() == Some(id.as_str());
                            rsx! {
                                tr { key: "{id}",
                                    td { "{row.customer}" }
                                    td { "{amount_str}" }
                                    td { "{row.description}" }
                                    td { "{row.currency}" }
                                    td { StatusBadge { status: row.status.clone() } }
                                    td { "{created_str}" }
                                    td { "{row.expires_in}" }
                                    td {
                                        div { class: "share-actions",
                                            button {
                                                class: "copy-btn",
                                                onclick: move |_| on_copy(copy_id.clone()),
                                                if is_copied { "Copied!" } else { "Copy" }
                                            }
                                            button {
                                                class: "whatsapp-btn",
                                                onclick: move |_| {
                                                    let text = whatsapp_text(&share_row, &page_origin());
                                                    open_in_new_tab(&whatsapp_url(&text));
                                                },
                                                "WhatsApp"
                                            }
                                        }
                                    }
                                }
                            }
                        })}
                    }
                }
            }
        }
    }
}

/// Origin of the running page, the base for shareable payment links.
fn page_origin() -> String {
    #[cfg(target_family = "wasm")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(target_family = "wasm"))]
    {
        String::new()
    }
}

/// Best effort: a clipboard failure only disables the copied indicator.
async fn copy_to_clipboard(text: &str) -> bool {
    #[cfg(target_family = "wasm")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let clipboard = window.navigator().clipboard();
        wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
            .await
            .is_ok()
    }
    #[cfg(not(target_family = "wasm"))]
    {
        let _ = text;
        false
    }
}

fn open_in_new_tab(url: &str) {
    #[cfg(target_family = "wasm")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.open_with_url_and_target(url, "_blank") {
                tracing::warn!("failed to open share window: {e:?}");
            }
        }
    }
    #[cfg(not(target_family = "wasm"))]
    {
        let _ = url;
    }
}
