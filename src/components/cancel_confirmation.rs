use dioxus::prelude::*;

/// Confirmation overlay for abandoning the registration. "Não" resumes
/// the step underneath untouched; "Sim" discards the whole draft.
#[component]
pub fn CancelConfirmation(on_dismiss: EventHandler<()>, on_confirm: EventHandler<()>) -> Element {
    rsx! {
        div { class: "cancel-overlay",
            div { class: "cancel-content",
                div { class: "cancel-icon", "✕" }
                h1 { class: "cancel-title", "Cancelar cadastro" }
                p { class: "cancel-text", "Tem certeza que quer cancelar esse cadastro?" }
                div { class: "cancel-buttons",
                    button {
                        class: "cancel-button cancel-outline",
                        onclick: move |_| on_dismiss.call(()),
                        "Não"
                    }
                    button {
                        class: "cancel-button cancel-default",
                        onclick: move |_| on_confirm.call(()),
                        "Sim"
                    }
                }
            }
        }
    }
}
