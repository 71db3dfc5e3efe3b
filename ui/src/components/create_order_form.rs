use dioxus::prelude::*;

use paylink_common::currency::CurrencyCode;
use paylink_common::validate::{is_complete, CreateOrderInput};

/// Validated order-creation form. Emits the typed payload through
/// `on_create`; it never talks to the network itself.
#[component]
pub fn CreateOrderForm(
    on_create: EventHandler<CreateOrderInput>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut amount = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut currency = use_signal(|| CurrencyCode::Usd);
    let mut error = use_signal(|| None::<String>);

    let can_submit =
        use_memo(move || is_complete(&amount.read(), &description.read(), &email.read()));

    let submit = move |_| {
        error.set(None);
        let validated = CreateOrderInput::validate(
            &amount.read(),
            &description.read(),
            &email.read(),
            currency.read().code(),
        );
        match validated {
            Ok(input) => on_create.call(input),
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    rsx! {
        div { class: "create-order-form",
            if let Some(err) = error.read().as_ref() {
                div { class: "form-error", role: "alert", "{err}" }
            }

            div { class: "form-group",
                label { "Amount" }
                input {
                    inputmode: "decimal",
                    placeholder: "0.00",
                    value: "{amount}",
                    oninput: move |evt| amount.set(evt.value()),
                }
            }
            div { class: "form-group",
                label { "Currency" }
                select {
                    value: "{currency.read().code()}",
                    onchange: move |evt| {
                        if let Some(code) = CurrencyCode::from_code(&evt.value()) {
                            currency.set(code);
                        }
                    },
                    for code in CurrencyCode::all() {
                        option { value: "{code.code()}", "{code.code()}" }
                    }
                }
            }
            div { class: "form-group",
                label { "Customer email" }
                input {
                    r#type: "email",
                    placeholder: "customer@example.com",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
            }
            div { class: "form-group",
                label { "Description" }
                input {
                    r#type: "text",
                    placeholder: "What is this payment for?",
                    value: "{description}",
                    oninput: move |evt| description.set(evt.value()),
                }
            }

            div { class: "form-actions",
                button { class: "cancel-btn", onclick: move |_| on_cancel.call(()), "Cancel" }
                button {
                    class: "submit-btn",
                    disabled: !can_submit(),
                    onclick: submit,
                    "Create link"
                }
            }
        }
    }
}
