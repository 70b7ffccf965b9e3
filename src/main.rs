use dioxus::prelude::*;

mod components;
mod database;
mod error;
mod format;
mod image_processing;
mod location;
mod models;
mod picker;
mod services;

use components::{
    CancelConfirmation, Header, OnboardingScreen, OrphanageCreatedScreen, OrphanageDataScreen,
    OrphanageDetailsScreen, OrphanageVisitationScreen, OrphanagesMapScreen,
    SelectMapPositionScreen,
};
use models::{GeoPosition, RegistrationDraft};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(target_os = "android")]
    android_logger::init_once(
        android_logger::Config::default().with_max_level(log::LevelFilter::Info),
    );
    #[cfg(not(target_os = "android"))]
    env_logger::init();

    dioxus::launch(App);
}

/// Screen navigation for the app. Wizard steps carry their accumulated
/// draft slice as navigation parameters; nothing else crosses screens.
#[derive(Clone, PartialEq, Debug)]
pub enum Screen {
    Onboarding,
    OrphanagesMap,
    OrphanageDetails { id: i64 },
    SelectMapPosition,
    OrphanageData { position: GeoPosition },
    OrphanageVisitation { draft: RegistrationDraft },
    OrphanageCreated,
}

/// Header chrome per screen: title, cancel "x", back arrow.
fn header_for(screen: &Screen) -> Option<(&'static str, bool, bool)> {
    match screen {
        Screen::OrphanageDetails { .. } => Some(("Orfanato", false, true)),
        Screen::SelectMapPosition => Some(("Selecione no mapa", true, true)),
        Screen::OrphanageData { .. } => Some(("Informe os dados", true, false)),
        Screen::OrphanageVisitation { .. } => Some(("Informe os dados", true, false)),
        _ => None,
    }
}

#[component]
fn App() -> Element {
    let mut current_screen = use_signal(|| Screen::Onboarding);
    // The confirmation renders above the active step, so "Não" resumes
    // it with every entered value still in place.
    let mut show_cancel = use_signal(|| false);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div { class: "app",
            if let Some((title, cancelable, show_back)) = header_for(&current_screen()) {
                Header {
                    title,
                    cancelable,
                    show_back,
                    on_back: move |_| current_screen.set(Screen::OrphanagesMap),
                    on_cancel: move |_| show_cancel.set(true),
                }
            }

            div { class: "app-content",
                match current_screen() {
                    Screen::Onboarding => rsx! {
                        OnboardingScreen { on_navigate: move |s| current_screen.set(s) }
                    },
                    Screen::OrphanagesMap => rsx! {
                        OrphanagesMapScreen { on_navigate: move |s| current_screen.set(s) }
                    },
                    Screen::OrphanageDetails { id } => rsx! {
                        OrphanageDetailsScreen { id }
                    },
                    Screen::SelectMapPosition => rsx! {
                        SelectMapPositionScreen { on_navigate: move |s| current_screen.set(s) }
                    },
                    Screen::OrphanageData { position } => rsx! {
                        OrphanageDataScreen {
                            position,
                            on_navigate: move |s| current_screen.set(s),
                        }
                    },
                    Screen::OrphanageVisitation { draft } => rsx! {
                        OrphanageVisitationScreen {
                            draft,
                            on_navigate: move |s| current_screen.set(s),
                        }
                    },
                    Screen::OrphanageCreated => rsx! {
                        OrphanageCreatedScreen { on_navigate: move |s| current_screen.set(s) }
                    },
                }
            }

            if show_cancel() {
                CancelConfirmation {
                    on_dismiss: move |_| show_cancel.set(false),
                    on_confirm: move |_| {
                        show_cancel.set(false);
                        // abandon the draft: its parameters are simply
                        // never forwarded
                        current_screen.set(Screen::OrphanagesMap);
                    },
                }
            }
        }
    }
}
