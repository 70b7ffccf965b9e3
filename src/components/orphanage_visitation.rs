use dioxus::prelude::*;

use crate::models::RegistrationDraft;
use crate::services::api::OrphanageApi;
use crate::Screen;

/// Lifecycle of the single create request. The submit button is
/// disabled while pending, so a double tap cannot post twice.
#[derive(Debug, Clone, PartialEq)]
enum SubmitState {
    Idle,
    Pending,
    Done,
    Failed(String),
}

/// Wizard step three: visitation details and the one network write.
/// Failure keeps every entered value in place for a manual retry.
#[component]
pub fn OrphanageVisitationScreen(
    draft: RegistrationDraft,
    on_navigate: EventHandler<Screen>,
) -> Element {
    let mut instructions = use_signal(String::new);
    let mut opening_hours = use_signal(String::new);
    // controlled toggle, default "yes"
    let mut open_on_weekends = use_signal(|| true);
    let mut submit_state = use_signal(|| SubmitState::Idle);

    let submit = move |_| {
        if submit_state() == SubmitState::Pending {
            return;
        }
        submit_state.set(SubmitState::Pending);

        let complete = draft.clone().with_visitation(
            instructions(),
            opening_hours(),
            open_on_weekends(),
        );

        spawn(async move {
            match OrphanageApi::from_env() {
                Ok(api) => match api.create(&complete).await {
                    Ok(()) => {
                        submit_state.set(SubmitState::Done);
                        on_navigate.call(Screen::OrphanageCreated);
                    }
                    Err(e) => {
                        log::error!("Orphanage creation failed: {}", e);
                        submit_state.set(SubmitState::Failed(e.user_message()));
                    }
                },
                Err(e) => submit_state.set(SubmitState::Failed(e.user_message())),
            }
        });
    };

    let pending = submit_state() == SubmitState::Pending;

    rsx! {
        div { class: "form-screen",
            div { class: "form-title-row",
                h1 { class: "form-title", "Visitação" }
                div { class: "form-pagination",
                    span { class: "page", "01" }
                    span { class: "page", " - " }
                    span { class: "page-active", "02" }
                }
            }

            if let SubmitState::Failed(err) = submit_state() {
                div { class: "error-banner", "⚠️ {err}" }
            }

            label { class: "form-label", "Instruções" }
            textarea {
                class: "input input-multiline",
                value: "{instructions}",
                oninput: move |e| instructions.set(e.value()),
            }

            label { class: "form-label", "Horario de visitas" }
            input {
                r#type: "text",
                class: "input",
                value: "{opening_hours}",
                oninput: move |e| opening_hours.set(e.value()),
            }

            label { class: "form-label", "Atende final de semana?" }
            div { class: "weekend-switch",
                button {
                    class: if open_on_weekends() { "switch-button switch-yes-active" } else { "switch-button" },
                    onclick: move |_| open_on_weekends.set(true),
                    "Sim"
                }
                button {
                    class: if !open_on_weekends() { "switch-button switch-no-active" } else { "switch-button" },
                    onclick: move |_| open_on_weekends.set(false),
                    "Não"
                }
            }

            button {
                class: "btn-next",
                disabled: pending,
                onclick: submit,
                if pending { "Enviando..." } else { "Cadastrar" }
            }
        }
    }
}
