use dioxus::prelude::*;

use super::home_view::HomeView;
use super::login_view::LoginView;
use super::register_view::RegisterView;
use super::session::{self, SessionState};

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[route("/")]
    Base {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/home")]
    Home {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    let session = use_context_provider(|| Signal::new(SessionState::default()));

    // Restore any persisted provider session before the routes act on it.
    use_future(move || session::restore_session(session));

    rsx! { Router::<Route> {} }
}

/// Route component: redirect dispatcher for `/`.
#[component]
fn Base() -> Element {
    let session = session::use_session();
    let nav = use_navigator();

    let state = session.read();
    if !state.resolved {
        return rsx! {};
    }
    let target = if state.user.is_some() {
        Route::Home {}
    } else {
        Route::Login {}
    };
    drop(state);

    nav.replace(target);
    rsx! {}
}

#[component]
fn Login() -> Element {
    rsx! { LoginView {} }
}

#[component]
fn Register() -> Element {
    rsx! { RegisterView {} }
}

#[component]
fn Home() -> Element {
    rsx! { HomeView {} }
}

/// Static fallback for unmatched paths.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!("unmatched route: /{}", segments.join("/"));
    rsx! {
        main { class: "not-found",
            p { class: "not-found-code", "404" }
            h1 { "Page not found" }
            p { "Sorry, we couldn't find the page you're looking for." }
            div { class: "not-found-links",
                Link { to: Route::Home {}, class: "not-found-home", "Go to Home" }
                Link { to: Route::Login {}, "Login" }
            }
        }
    }
}
