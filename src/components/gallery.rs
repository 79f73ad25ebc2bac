use crate::components::LightboxOverlay;
use crate::services::{photo_service, StoreHandle};
use crate::state::{GalleryState, Lightbox};
use dioxus::prelude::*;
use photo_store::{Category, Photo};

/// Public gallery screen: hero header, category filter tabs, photo grid and
/// the lightbox overlay.
#[component]
pub fn GalleryScreen() -> Element {
    let store = use_context::<StoreHandle>();
    let mut gallery = use_signal(GalleryState::default);
    let mut lightbox = use_signal(Lightbox::default);
    let mut loading = use_signal(|| true);

    // Load once on mount. A failed load keeps the (empty) collection and is
    // only logged; the store stays the source of truth.
    use_effect(move || {
        let store = store.clone();
        let ticket = gallery.write().begin_load();
        spawn(async move {
            match photo_service::fetch_photos(&store).await {
                Ok(photos) => {
                    if gallery.write().complete_load(ticket, photos) {
                        // Any captured lightbox sequence is stale now
                        lightbox.write().close();
                    }
                }
                Err(e) => log::error!("Failed to load photos: {}", e),
            }
            loading.set(false);
        });
    });

    let state = gallery.read();
    let filter = state.filter();
    let view = state.filtered_view();
    let collection_empty = state.is_empty();
    drop(state);

    let viewer = lightbox.read();
    let lightbox_photo = viewer.current().cloned();
    let has_next = viewer.has_next();
    let has_previous = viewer.has_previous();
    drop(viewer);

    rsx! {
        section { class: "hero",
            h2 { class: "hero-title", "PHOTOFOLIO" }
            p { class: "hero-subtitle", "Photography" }
        }

        section { class: "gallery-section",
            // Category filter tabs
            div { class: "filter-tabs",
                button {
                    class: if filter.is_none() { "tab active" } else { "tab" },
                    onclick: move |_| gallery.write().set_filter(None),
                    "All Photos"
                }
                for category in Category::all().iter().copied() {
                    button {
                        class: if filter == Some(category) { "tab active" } else { "tab" },
                        onclick: move |_| gallery.write().set_filter(Some(category)),
                        "{category.display_name()}"
                    }
                }
            }

            if loading() {
                div { class: "gallery-message", "Loading photos..." }
            } else if view.is_empty() {
                div { class: "gallery-message",
                    if let Some(category) = filter {
                        "No photos in {category.display_name()} yet."
                    } else {
                        "No photos uploaded yet."
                    }
                }
            } else {
                div { class: "photo-grid",
                    for photo in view.clone() {
                        PhotoCard {
                            key: "{photo.id}",
                            photo: photo.clone(),
                            on_click: move |_| {
                                let current_view = gallery.read().filtered_view();
                                lightbox.write().open(&photo, &current_view);
                            },
                        }
                    }
                }
            }

            // Distinguish "nothing in this category" from "nothing at all"
            if !loading() && view.is_empty() && !collection_empty && filter.is_some() {
                div { class: "gallery-hint", "Other categories do have photos." }
            }
        }

        if let Some(photo) = lightbox_photo {
            LightboxOverlay {
                photo,
                has_next,
                has_previous,
                on_close: move |_| lightbox.write().close(),
                on_next: move |_| lightbox.write().next(),
                on_previous: move |_| lightbox.write().previous(),
            }
        }

        footer { class: "footer",
            p { "© 2026 Photofolio. All rights reserved." }
        }
    }
}

/// A single tile in the photo grid. A broken image URL hides the image
/// element instead of rendering a broken-image icon.
#[component]
fn PhotoCard(photo: Photo, on_click: EventHandler<()>) -> Element {
    let mut broken = use_signal(|| false);

    rsx! {
        div { class: "photo-card", onclick: move |_| on_click.call(()),
            if !broken() {
                img {
                    src: "{photo.image_url}",
                    alt: "{photo.title}",
                    onerror: move |_| broken.set(true),
                }
            }
            div { class: "photo-card-overlay",
                p { class: "photo-card-title", "{photo.title}" }
                p { class: "photo-card-category", "{photo.category.display_name()}" }
            }
        }
    }
}
