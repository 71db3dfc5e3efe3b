use dioxus::prelude::*;

use paylink_common::validate::is_valid_email;

use super::app::Route;
use super::identity_client::{self, IdentityClient};
use super::session;
use super::use_auth::use_google_completion;

#[component]
pub fn LoginView() -> Element {
    let mut session = session::use_session();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    use_google_completion(error);

    let submit = move |_| {
        error.set(None);
        let email_value = email.read().trim().to_string();
        let password_value = password.read().clone();
        if !is_valid_email(&email_value) {
            error.set(Some("Enter a valid email".into()));
            return;
        }
        if password_value.is_empty() {
            error.set(Some("Enter your password".into()));
            return;
        }
        spawn(async move {
            match IdentityClient::from_env()
                .sign_in_with_email(&email_value, &password_value)
                .await
            {
                Ok(tokens) => {
                    session::establish_session(&mut session, tokens);
                    nav.replace(Route::Home {});
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let google = move |_| {
        error.set(None);
        identity_client::start_google_sign_in();
    };

    rsx! {
        div { class: "auth-screen",
            div { class: "auth-card",
                h1 { "Login" }

                if let Some(err) = error.read().as_ref() {
                    div { class: "form-error", role: "alert", "{err}" }
                }

                div { class: "form-group",
                    label { "Email" }
                    input {
                        r#type: "email",
                        placeholder: "you@example.com",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                div { class: "form-group",
                    label { "Password" }
                    input {
                        r#type: "password",
                        placeholder: "\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                button { class: "primary-btn", onclick: submit, "Login" }
                button { class: "google-btn", onclick: google, "Login with Google" }

                p { class: "auth-switch",
                    "Don't have an account? "
                    Link { to: Route::Register {}, "Register" }
                }
            }
        }
    }
}
