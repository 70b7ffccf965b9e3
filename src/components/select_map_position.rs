use dioxus::prelude::*;

use crate::components::MapSurface;
use crate::models::{GeoPosition, MapRegion};
use crate::services::flag_service;
use crate::{database, Screen};

/// Wizard step one: tap the map once to place the orphanage. A first
/// visit shows the tip overlay instead of the map until dismissed.
#[component]
pub fn SelectMapPositionScreen(on_navigate: EventHandler<Screen>) -> Element {
    let mut position = use_signal(|| None::<GeoPosition>);
    let mut show_map_tip = use_signal(|| false);

    use_effect(move || match database::init_database() {
        Ok(conn) => match flag_service::flag_is_set(&conn, flag_service::MAP_TIP_FLAG) {
            Ok(seen) => show_map_tip.set(!seen),
            Err(e) => log::warn!("Map tip flag read failed: {}", e),
        },
        Err(e) => log::warn!("Database unavailable: {}", e),
    });

    let hide_map_tip = move |_| {
        match database::init_database()
            .and_then(|conn| flag_service::set_flag(&conn, flag_service::MAP_TIP_FLAG, "true"))
        {
            Ok(()) => {}
            Err(e) => log::warn!("Map tip flag write failed: {}", e),
        }
        show_map_tip.set(false);
    };

    rsx! {
        div { class: "map-screen",
            MapSurface {
                region: MapRegion {
                    latitude: -9.414112,
                    longitude: -36.6328008,
                    latitude_delta: 0.008,
                    longitude_delta: 0.008,
                },
                markers: Vec::new(),
                selected: position(),
                // re-tapping overwrites the previous selection
                on_tap: move |tapped| position.set(Some(tapped)),
            }

            if position().is_some() {
                button {
                    class: "btn-next btn-floating",
                    onclick: move |_| {
                        if let Some(position) = position() {
                            on_navigate.call(Screen::OrphanageData { position });
                        }
                    },
                    "Próximo"
                }
            }

            if show_map_tip() {
                div { class: "map-tip", onclick: hide_map_tip,
                    div { class: "map-tip-animation", "👆" }
                    p { class: "map-tip-text", "Toque no mapa para adicionar um orfanato" }
                }
            }
        }
    }
}
