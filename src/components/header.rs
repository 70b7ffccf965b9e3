use dioxus::prelude::*;

/// Wizard/detail header: optional back arrow on the left, screen title
/// in the middle, cancel "x" on the right when the screen belongs to
/// the registration flow.
#[component]
pub fn Header(
    title: String,
    cancelable: bool,
    show_back: bool,
    on_back: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "header",
            if show_back {
                button {
                    class: "header-button",
                    onclick: move |_| on_back.call(()),
                    "←"
                }
            } else {
                div { class: "header-button" }
            }

            span { class: "header-title", "{title}" }

            if cancelable {
                button {
                    class: "header-button header-cancel",
                    onclick: move |_| on_cancel.call(()),
                    "✕"
                }
            } else {
                div { class: "header-button" }
            }
        }
    }
}
