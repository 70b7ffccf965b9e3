use dioxus::prelude::*;

use crate::services::flag_service;
use crate::{database, Screen};

const PAGES: [(&str, &str, &str); 2] = [
    (
        "🌎",
        "Leve felicidade para o mundo",
        "Visite orfanatos e mude o dia de muitas crianças.",
    ),
    (
        "🏡",
        "Escolha um orfanato no mapa e faça uma visita",
        "",
    ),
];

/// Two-page intro swiper, shown only until it was completed once.
#[component]
pub fn OnboardingScreen(on_navigate: EventHandler<Screen>) -> Element {
    let mut page_index = use_signal(|| 0usize);

    // Skip straight to the map when the onboarding flag is already set
    use_effect(move || match database::init_database() {
        Ok(conn) => {
            match flag_service::flag_is_set(&conn, flag_service::ONBOARDING_FLAG) {
                Ok(true) => on_navigate.call(Screen::OrphanagesMap),
                Ok(false) => {}
                Err(e) => log::warn!("Onboarding flag read failed: {}", e),
            }
        }
        Err(e) => log::warn!("Database unavailable: {}", e),
    });

    let complete_onboarding = move |_| {
        match database::init_database()
            .and_then(|conn| flag_service::set_flag(&conn, flag_service::ONBOARDING_FLAG, "true"))
        {
            Ok(()) => {}
            // Not fatal: the user just sees the intro again next launch
            Err(e) => log::warn!("Onboarding flag write failed: {}", e),
        }
        on_navigate.call(Screen::OrphanagesMap);
    };

    let (emoji, title, subtitle) = PAGES[page_index().min(PAGES.len() - 1)];

    rsx! {
        div { class: "onboarding",
            div {
                class: "onboarding-page",
                onclick: move |_| {
                    if page_index() + 1 < PAGES.len() {
                        page_index.set(page_index() + 1);
                    }
                },
                div { class: "onboarding-image", "{emoji}" }
                h1 { class: "onboarding-title", "{title}" }
                if !subtitle.is_empty() {
                    p { class: "onboarding-subtitle", "{subtitle}" }
                }
            }

            div { class: "onboarding-bottom",
                div { class: "onboarding-dots",
                    for idx in 0..PAGES.len() {
                        button {
                            key: "{idx}",
                            class: if idx == page_index() { "dot dot-selected" } else { "dot" },
                            onclick: move |_| page_index.set(idx),
                        }
                    }
                }
                button {
                    class: "btn-round",
                    onclick: complete_onboarding,
                    "→"
                }
            }
        }
    }
}
