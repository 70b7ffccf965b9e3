use dioxus::prelude::*;

use crate::models::{GeoPosition, MapRegion};

/// A pin shown on the surface, tappable to open its callout target.
#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub id: i64,
    pub name: String,
    pub position: GeoPosition,
}

/// Stand-in for a real map view: renders a fixed region as a tappable
/// surface and places pins by linear interpolation inside it.
#[component]
pub fn MapSurface(
    region: MapRegion,
    markers: Vec<MapMarker>,
    selected: Option<GeoPosition>,
    on_tap: Option<EventHandler<GeoPosition>>,
    on_marker: Option<EventHandler<i64>>,
) -> Element {
    // Measured on mount; taps are meaningless before the first layout,
    // so start from a typical phone viewport.
    let mut surface_size = use_signal(|| (360.0f64, 560.0f64));

    let placed: Vec<(i64, String, f64, f64)> = markers
        .iter()
        .map(|marker| {
            let (fx, fy) = region.locate(marker.position);
            (marker.id, marker.name.clone(), fx, fy)
        })
        .filter(|(_, _, fx, fy)| (0.0..=1.0).contains(fx) && (0.0..=1.0).contains(fy))
        .collect();

    rsx! {
        div {
            class: "map-surface",
            onmounted: move |evt| async move {
                if let Ok(rect) = evt.data().get_client_rect().await {
                    surface_size.set((rect.size.width, rect.size.height));
                }
            },
            onclick: move |evt| {
                if let Some(handler) = on_tap {
                    let point = evt.data().element_coordinates();
                    let (width, height) = surface_size();
                    if width > 0.0 && height > 0.0 {
                        handler.call(region.position_at(point.x / width, point.y / height));
                    }
                }
            },

            for (id, name, fx, fy) in placed {
                button {
                    key: "{id}",
                    class: "map-marker",
                    style: format!("left: {:.3}%; top: {:.3}%;", fx * 100.0, fy * 100.0),
                    onclick: move |evt| {
                        evt.stop_propagation();
                        if let Some(handler) = on_marker {
                            handler.call(id);
                        }
                    },
                    "📍"
                    span { class: "map-callout", "{name}" }
                }
            }

            if let Some(position) = selected {
                {
                    let (fx, fy) = region.locate(position);
                    rsx! {
                        div {
                            class: "map-marker map-marker-selected",
                            style: format!("left: {:.3}%; top: {:.3}%;", fx * 100.0, fy * 100.0),
                            "📍"
                        }
                    }
                }
            }
        }
    }
}
