use dioxus::prelude::*;

use super::app::Route;
use super::orders_view::OrdersView;
use super::session;
use super::use_auth::{use_auth, UseAuthOptions};

/// Authenticated landing screen: welcome header, sign-out, and the orders
/// feature scoped to the user's business.
#[component]
pub fn HomeView() -> Element {
    let auth = use_auth(UseAuthOptions {
        require_auth: true,
        redirect_to: None,
    });
    let mut session = auth.session;
    let nav = use_navigator();

    let profile_state = auth.profile.read().clone();
    let full_name = profile_state
        .profile
        .as_ref()
        .map(|p| p.full_name())
        .unwrap_or_default();
    let businesses = profile_state.businesses.clone().unwrap_or_default();

    // Only the single-business flow is wired end to end; zero or many need
    // product input before a selection UI exists.
    let business_id = if businesses.len() == 1 {
        businesses[0].id.clone()
    } else {
        String::new()
    };

    let logout = move |_| {
        session::clear_session(&mut session);
        nav.replace(Route::Login {});
    };

    rsx! {
        div { class: "home-screen",
            header { class: "home-header",
                h1 {
                    if full_name.is_empty() {
                        "Welcome"
                    } else {
                        "Welcome, {full_name}"
                    }
                }
                button { class: "logout-btn", onclick: logout, "Logout" }
            }

            if let Some(err) = profile_state.error.as_ref() {
                p { class: "notice notice-error", "{err}" }
            }
            if businesses.len() > 1 {
                p { class: "notice",
                    "Your account belongs to several businesses; switching between them is not available yet."
                }
            }

            main { class: "home-main",
                OrdersView { business_id }
            }
        }
    }
}
