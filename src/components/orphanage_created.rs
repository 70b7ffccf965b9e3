use dioxus::prelude::*;

use crate::Screen;

/// Terminal success screen after the create request went through.
#[component]
pub fn OrphanageCreatedScreen(on_navigate: EventHandler<Screen>) -> Element {
    rsx! {
        div { class: "done-screen",
            div { class: "done-image", "🎉" }
            h1 { class: "done-title", "Ebaaa!" }
            p { class: "done-text",
                "O cadastro deu certo e foi enviado ao administrador para ser aprovado. "
                "Agora é só esperar :)"
            }
            button {
                class: "btn-done",
                onclick: move |_| on_navigate.call(Screen::OrphanagesMap),
                "Ok"
            }
        }
    }
}
