use dioxus::prelude::*;

use crate::image_processing;
use crate::models::{draft, photo, GeoPosition, PhotoAttachment, RegistrationDraft};
use crate::picker::{self, PickerError};
use crate::Screen;

/// Wizard step two: identity fields and the photo list. "Próximo" stays
/// disabled until name, about, whatsapp and at least one photo exist.
#[component]
pub fn OrphanageDataScreen(position: GeoPosition, on_navigate: EventHandler<Screen>) -> Element {
    let mut name = use_signal(String::new);
    let mut about = use_signal(String::new);
    let mut whatsapp = use_signal(String::new);
    let mut photos = use_signal(Vec::<PhotoAttachment>::new);
    let mut picking = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let select_image = move |_| {
        picking.set(true);
        error.set(None);
        spawn(async move {
            // the picker polls MainActivity and blocks for the whole
            // selection; keep it off the UI executor so the disabled
            // state actually renders
            match tokio::task::spawn_blocking(picker::pick_image).await {
                Ok(Ok(path)) => match image_processing::image_dimensions(&path) {
                    Ok((width, height)) => {
                        photos
                            .write()
                            .push(PhotoAttachment::from_picked(&path, width, height));
                    }
                    Err(e) => {
                        log::error!("Failed to read picked image: {}", e);
                        error.set(Some(e.user_message()));
                    }
                },
                // a closed picker is not an error
                Ok(Err(PickerError::Cancelled(_))) => {}
                Ok(Err(e @ PickerError::PermissionDenied(_)))
                | Ok(Err(e @ PickerError::PlatformNotSupported(_))) => {
                    log::warn!("Picker unavailable: {}", e);
                    error.set(Some("Precisamos de acesso às suas fotos...".to_string()));
                }
                Ok(Err(e)) => {
                    log::error!("Picker failed: {}", e);
                    error.set(Some("Ocorreu um erro!".to_string()));
                }
                Err(e) => {
                    log::error!("Picker task failed: {}", e);
                    error.set(Some("Ocorreu um erro!".to_string()));
                }
            }
            picking.set(false);
        });
    };

    let form_complete = draft::data_complete(&name(), &about(), &whatsapp(), photos().len());

    rsx! {
        div { class: "form-screen",
            div { class: "form-title-row",
                h1 { class: "form-title", "Dados" }
                div { class: "form-pagination",
                    span { class: "page-active", "01" }
                    span { class: "page", " - " }
                    span { class: "page", "02" }
                }
            }

            if let Some(err) = error() {
                div { class: "error-banner", "⚠️ {err}" }
            }

            label { class: "form-label", "Nome" }
            input {
                r#type: "text",
                class: "input",
                value: "{name}",
                oninput: move |e| name.set(e.value()),
            }

            label { class: "form-label", "Sobre" }
            textarea {
                class: "input input-multiline",
                value: "{about}",
                oninput: move |e| about.set(e.value()),
            }

            label { class: "form-label", "Whatsapp" }
            input {
                r#type: "text",
                class: "input",
                value: "{whatsapp}",
                oninput: move |e| whatsapp.set(e.value()),
            }

            label { class: "form-label", "Fotos" }
            div { class: "uploaded-images",
                for photo in photos() {
                    div { key: "{photo.source_uri}", class: "uploaded-image-row",
                        if let Ok(data_url) = image_processing::image_path_to_data_url(&photo.source_uri) {
                            img { class: "uploaded-image", src: data_url }
                        } else {
                            div { class: "uploaded-image-placeholder", "📷" }
                        }
                        div { class: "uploaded-image-details",
                            div { class: "uploaded-image-title", "{photo.title}" }
                            div { class: "uploaded-image-size", "{photo.size_label}" }
                        }
                        button {
                            class: "btn-remove",
                            onclick: move |_| {
                                photo::remove_by_source(&mut photos.write(), &photo.source_uri);
                            },
                            "✕"
                        }
                    }
                }
            }

            button {
                class: "images-input",
                disabled: picking(),
                onclick: select_image,
                if picking() { "⏳" } else { "+" }
            }

            button {
                class: "btn-next",
                disabled: !form_complete,
                onclick: move |_| {
                    match RegistrationDraft::new(
                        position,
                        name(),
                        about(),
                        whatsapp(),
                        photos(),
                    ) {
                        Ok(draft) => {
                            on_navigate.call(Screen::OrphanageVisitation { draft });
                        }
                        // unreachable while the button is gated, but the
                        // boundary check stays authoritative
                        Err(e) => error.set(Some(e.user_message())),
                    }
                },
                "Próximo"
            }
        }
    }
}
