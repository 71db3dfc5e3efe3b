use dioxus::prelude::*;

/// Generic overlay. Visibility is owned by the caller; backdrop clicks and
/// the Escape key invoke `on_close`.
#[component]
pub fn Modal(
    open: bool,
    title: Option<String>,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }
    rsx! {
        div {
            class: "modal-overlay",
            tabindex: "0",
            autofocus: true,
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    on_close.call(());
                }
            },
            div { class: "modal-backdrop", onclick: move |_| on_close.call(()) }
            div { class: "modal-dialog",
                if let Some(t) = title.as_ref() {
                    div { class: "modal-title", h2 { "{t}" } }
                }
                div { class: "modal-body", {children} }
            }
        }
    }
}
