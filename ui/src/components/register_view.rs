use dioxus::prelude::*;

use paylink_common::profile::RegisterRequest;
use paylink_common::validate::is_valid_email;

use super::app::Route;
use super::backend_api::BackendApi;
use super::identity_client::{self, IdentityClient};
use super::session;
use super::use_auth::use_google_completion;

#[component]
pub fn RegisterView() -> Element {
    let mut session = session::use_session();
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    use_google_completion(error);

    let submit = move |_| {
        error.set(None);
        let name_value = name.read().trim().to_string();
        let last_name_value = last_name.read().trim().to_string();
        let email_value = email.read().trim().to_string();
        let password_value = password.read().clone();
        if name_value.is_empty() || last_name_value.is_empty() {
            error.set(Some("Enter your first and last name".into()));
            return;
        }
        if !is_valid_email(&email_value) {
            error.set(Some("Enter a valid email".into()));
            return;
        }
        if password_value.is_empty() {
            error.set(Some("Enter a password".into()));
            return;
        }
        spawn(async move {
            // The backend account must exist before the provider session
            // does; a failed creation aborts without touching sign-in.
            let req = RegisterRequest {
                email: email_value.clone(),
                password: password_value.clone(),
                name: name_value,
                last_name: last_name_value,
            };
            if let Err(e) = BackendApi::from_env().register_account(&req).await {
                error.set(Some(e.to_string()));
                return;
            }
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
                h1 { "Register" }

                if let Some(err) = error.read().as_ref() {
                    div { class: "form-error", role: "alert", "{err}" }
                }

                div { class: "form-group",
                    label { "First name" }
                    input {
                        r#type: "text",
                        placeholder: "Jane",
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                }
                div { class: "form-group",
                    label { "Last name" }
                    input {
                        r#type: "text",
                        placeholder: "Doe",
                        value: "{last_name}",
                        oninput: move |evt| last_name.set(evt.value()),
                    }
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
                button { class: "primary-btn", onclick: submit, "Register" }
                button { class: "google-btn", onclick: google, "Register with Google" }

                p { class: "auth-switch",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Login" }
                }
            }
        }
    }
}
