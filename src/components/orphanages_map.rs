use dioxus::prelude::*;

use crate::components::{MapMarker, MapSurface};
use crate::location;
use crate::models::{GeoPosition, MapRegion, OrphanageSummary};
use crate::services::api::OrphanageApi;
use crate::Screen;

/// Map listing: one fetch per mount, pins for every registered
/// orphanage, and the entry point into the registration wizard.
#[component]
pub fn OrphanagesMapScreen(on_navigate: EventHandler<Screen>) -> Element {
    let mut orphanages = use_signal(Vec::<OrphanageSummary>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);
    let mut user_position = use_signal(|| None::<GeoPosition>);

    let mut fetch_orphanages = move || {
        loading.set(true);
        spawn(async move {
            match OrphanageApi::from_env() {
                Ok(api) => match api.list_created().await {
                    Ok(list) => {
                        error.set(None);
                        orphanages.set(list);
                    }
                    Err(e) => {
                        log::error!("Failed to load orphanages: {}", e);
                        error.set(Some(e.user_message()));
                        // failure shows as zero results, not a crash
                        orphanages.set(Vec::new());
                    }
                },
                Err(e) => error.set(Some(e.user_message())),
            }
            loading.set(false);
        });
    };

    let request_position = move || {
        spawn(async move {
            // waiting for a fix blocks; keep it off the UI executor
            match tokio::task::spawn_blocking(location::current_position).await {
                Ok(Ok(position)) => user_position.set(Some(position)),
                Ok(Err(e)) => log::debug!("Location unavailable: {}", e),
                Err(e) => log::error!("Location task failed: {}", e),
            }
        });
    };

    // Load on mount
    use_effect(move || {
        fetch_orphanages();
        request_position();
    });

    if loading() {
        return rsx! {
            div { class: "loading-container",
                div { class: "spinner" }
            }
        };
    }

    rsx! {
        div { class: "map-screen",
            if let Some(err) = error() {
                div { class: "error-banner", "⚠️ {err}" }
            }

            if let Some(position) = user_position() {
                MapSurface {
                    region: MapRegion {
                        latitude: position.latitude,
                        longitude: position.longitude,
                        latitude_delta: 0.008,
                        longitude_delta: 0.008,
                    },
                    markers: orphanages()
                        .iter()
                        .filter_map(|orphanage| {
                            let position = orphanage.position().ok()?;
                            Some(MapMarker {
                                id: orphanage.id,
                                name: orphanage.name.clone(),
                                position,
                            })
                        })
                        .collect::<Vec<_>>(),
                    on_marker: move |id| on_navigate.call(Screen::OrphanageDetails { id }),
                }

                div { class: "map-footer",
                    span { class: "map-footer-text",
                        "{orphanages().len()} orfanatos encontrados"
                    }
                    button {
                        class: "btn-create",
                        onclick: move |_| on_navigate.call(Screen::SelectMapPosition),
                        "+"
                    }
                }
            } else {
                div { class: "no-permission",
                    div { class: "no-permission-image", "🗺️" }
                    p { class: "no-permission-text", "Você nao tem permissão." }
                    button {
                        class: "btn-primary",
                        onclick: move |_| request_position(),
                        "Habilitar localização"
                    }
                }
            }
        }
    }
}
