use dioxus::prelude::*;

use paylink_common::fetch::FetchSequence;
use paylink_common::order::OrderRow;
use paylink_common::validate::CreateOrderInput;

use super::backend_api::{BackendApi, CreateOrderRequest};
use super::create_order_form::CreateOrderForm;
use super::modal::Modal;
use super::orders_table::OrdersTable;
use super::session;

/// Transient feedback shown above the table.
#[derive(Clone, Debug, PartialEq)]
enum Banner {
    Success(String),
    Error(String),
}

/// Owns the order list and everything that mutates it: the keyed fetch,
/// the create flow (which prepends instead of refetching), and the
/// transient banners. The table below is purely presentational.
#[component]
pub fn OrdersView(business_id: String) -> Element {
    let session = session::use_session();
    let mut rows = use_signal(Vec::<OrderRow>::new);
    let mut loading = use_signal(|| false);
    let mut fetch_error = use_signal(|| None::<String>);
    let seq = use_hook(FetchSequence::new);
    let mut refresh = use_signal(|| 0u32);
    let mut show_create = use_signal(|| false);
    let mut banner = use_signal(|| None::<Banner>);
    let mut banner_gen = use_signal(|| 0u64);

    let user_key = use_memo(move || session.read().user.as_ref().map(|u| u.user_id.clone()));

    // Fetch keyed by (session user, business id, refresh counter); a
    // response that resolves after a newer key was requested is dropped.
    use_effect(use_reactive((&business_id,), move |(business_id,)| {
        let user = user_key();
        let _ = refresh();
        let ticket = seq.begin();
        fetch_error.set(None);
        if business_id.is_empty() || user.is_none() {
            rows.set(Vec::new());
            loading.set(false);
            return;
        }
        loading.set(true);
        let seq = seq.clone();
        spawn(async move {
            let result = async {
                let token = session::current_id_token(session)
                    .await
                    .ok_or_else(|| "not authenticated".to_string())?;
                BackendApi::from_env()
                    .list_orders(&token, &business_id)
                    .await
                    .map_err(|e| e.to_string())
            }
            .await;
            if !seq.is_current(&ticket) {
                return;
            }
            loading.set(false);
            match result {
                Ok(orders) => rows.set(orders.iter().map(OrderRow::from_dto).collect()),
                Err(e) => {
                    tracing::error!("failed to fetch orders: {e}");
                    fetch_error.set(Some("Failed to load orders. Please try again.".into()));
                }
            }
        });
    }));

    let on_create = {
        let business_id = business_id.clone();
        move |input: CreateOrderInput| {
            let business_id = business_id.clone();
            spawn(async move {
                let result = async {
                    if session.read().user.is_none() {
                        return Err("not authenticated".to_string());
                    }
                    if business_id.is_empty() {
                        return Err("no selected business".to_string());
                    }
                    let token = session::current_id_token(session)
                        .await
                        .ok_or_else(|| "not authenticated".to_string())?;
                    let req = CreateOrderRequest {
                        amount: input.amount,
                        description: input.description,
                        email: input.email,
                        currency: input.currency.code().to_string(),
                        business_id,
                    };
                    BackendApi::from_env()
                        .create_order(&token, &req)
                        .await
                        .map_err(|e| e.to_string())
                }
                .await;
                match result {
                    Ok(order) => {
                        // The created order becomes the first row; no refetch.
                        rows.write().insert(0, OrderRow::from_dto(&order));
                        show_create.set(false);
                        let gen = banner_gen() + 1;
                        banner_gen.set(gen);
                        banner.set(Some(Banner::Success("Order created.".into())));
                        #[cfg(target_family = "wasm")]
                        gloo_timers::future::TimeoutFuture::new(3_000).await;
                        if banner_gen() == gen {
                            banner.set(None);
                        }
                    }
                    Err(e) => {
                        // Modal stays open so the entered data survives.
                        tracing::error!("failed to create order: {e}");
                        let gen = banner_gen() + 1;
                        banner_gen.set(gen);
                        banner.set(Some(Banner::Error(
                            "Failed to create order. Please try again.".into(),
                        )));
                        #[cfg(target_family = "wasm")]
                        gloo_timers::future::TimeoutFuture::new(4_000).await;
                        if banner_gen() == gen {
                            banner.set(None);
                        }
                    }
                }
            });
        }
    };

    let business_missing = business_id.is_empty();
    let create_title = if business_missing {
        "Select or create a business first"
    } else {
        "Create order"
    };

    rsx! {
        section { class: "orders-section",
            div { class: "orders-header",
                h2 { "Orders" }
                div { class: "orders-actions",
                    button {
                        class: "refresh-btn",
                        onclick: move |_| refresh += 1,
                        "Refresh"
                    }
                    button {
                        class: "create-btn",
                        disabled: business_missing,
                        title: "{create_title}",
                        onclick: move |_| show_create.set(true),
                        "Create order"
                    }
                }
            }

            if let Some(b) = banner.read().as_ref() {
                match b {
                    Banner::Success(msg) => rsx! {
                        div { class: "banner banner-success", role: "alert", "{msg}" }
                    },
                    Banner::Error(msg) => rsx! {
                        div { class: "banner banner-error", role: "alert", "{msg}" }
                    },
                }
            }

            OrdersTable {
                business_id: business_id.clone(),
                rows: rows(),
                loading: loading(),
                error: fetch_error(),
            }

            Modal {
                open: show_create(),
                title: "Create order".to_string(),
                on_close: move |_| show_create.set(false),
                CreateOrderForm {
                    on_create,
                    on_cancel: move |_| show_create.set(false),
                }
            }
        }
    }
}
