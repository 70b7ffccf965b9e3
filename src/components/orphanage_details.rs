use dioxus::prelude::*;

use crate::components::{MapMarker, MapSurface};
use crate::models::{MapRegion, OrphanageRecord};
use crate::services::api::OrphanageApi;

/// Detail view of one orphanage: photos, descriptions, a static map
/// with a routes deep link, visitation schedule and the WhatsApp link.
#[component]
pub fn OrphanageDetailsScreen(id: i64) -> Element {
    let mut orphanage = use_signal(|| None::<OrphanageRecord>);
    let mut error = use_signal(|| None::<String>);

    use_effect(move || {
        spawn(async move {
            match OrphanageApi::from_env() {
                Ok(api) => match api.fetch_by_id(id).await {
                    Ok(record) => orphanage.set(Some(record)),
                    Err(e) => {
                        log::error!("Failed to load orphanage {}: {}", id, e);
                        error.set(Some(e.user_message()));
                    }
                },
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    });

    let Some(record) = orphanage() else {
        // spinner until the record arrives or the fetch failed
        return rsx! {
            div { class: "loading-container",
                if let Some(err) = error() {
                    div { class: "error-banner", "⚠️ {err}" }
                } else {
                    div { class: "spinner" }
                }
            }
        };
    };

    let region = record.position().ok().map(|position| MapRegion {
        latitude: position.latitude,
        longitude: position.longitude,
        latitude_delta: 0.005,
        longitude_delta: 0.005,
    });

    rsx! {
        div { class: "details",
            div { class: "details-images",
                for image in record.images.iter() {
                    img {
                        key: "{image.id}",
                        class: "details-image",
                        src: "{image.url}",
                    }
                }
            }

            div { class: "details-content",
                h1 { class: "details-title", "{record.name}" }
                p { class: "details-description", "{record.about}" }

                if let Some(region) = region {
                    div { class: "details-map",
                        MapSurface {
                            region,
                            markers: record
                                .position()
                                .ok()
                                .map(|position| {
                                    vec![MapMarker {
                                        id: record.id,
                                        name: record.name.clone(),
                                        position,
                                    }]
                                })
                                .unwrap_or_default(),
                        }
                        a {
                            class: "details-routes",
                            href: "{record.routes_url()}",
                            "Ver rotas no Google Maps"
                        }
                    }
                }

                div { class: "separator" }

                h2 { class: "details-title", "Instruções para visita" }
                p { class: "details-description", "{record.instructions}" }

                div { class: "schedule",
                    div { class: "schedule-item schedule-blue",
                        "🕐 Segunda à Sexta {record.opening_hours}"
                    }
                    if record.open_on_weekends {
                        div { class: "schedule-item schedule-green",
                            "ℹ️ Atendemos fim de semana"
                        }
                    } else {
                        div { class: "schedule-item schedule-red",
                            "ℹ️ Não atendemos fim de semana"
                        }
                    }
                }

                a {
                    class: "btn-contact",
                    href: "{record.whatsapp_url()}",
                    "Entrar em contato"
                }
            }
        }
    }
}
