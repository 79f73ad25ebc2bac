use crate::services::{photo_service, StoreHandle};
use crate::state::GalleryState;
use dioxus::prelude::*;
use photo_store::Photo;

/// Admin photo list: every stored photo with thumbnail, metadata and a
/// delete action. Deletion reloads the whole list from the store on success;
/// on failure the list stays as it was and a banner reports the error.
#[component]
pub fn PhotoList(refresh_token: ReadOnlySignal<u64>) -> Element {
    let store = use_context::<StoreHandle>();
    let mut gallery = use_signal(GalleryState::default);
    let mut loading = use_signal(|| true);
    let mut error_message = use_signal(|| None::<String>);
    let mut confirm_delete = use_signal(|| None::<String>);

    let reload = {
        let store = store.clone();
        move || {
            let store = store.clone();
            let ticket = gallery.write().begin_load();
            spawn(async move {
                match photo_service::fetch_photos(&store).await {
                    Ok(photos) => {
                        gallery.write().complete_load(ticket, photos);
                        error_message.set(None);
                    }
                    Err(e) => {
                        log::error!("Failed to load photos: {}", e);
                        error_message.set(Some(e.user_message()));
                    }
                }
                loading.set(false);
            });
        }
    };

    // Initial load, plus a reload whenever an upload bumps the token
    let mut reload_on_refresh = reload.clone();
    use_effect(move || {
        let _ = refresh_token();
        reload_on_refresh();
    });

    let on_delete = {
        let store = store.clone();
        move |id: String| {
            let store = store.clone();
            let mut reload = reload.clone();
            spawn(async move {
                match photo_service::delete_photo(&store, &id).await {
                    Ok(()) => {
                        // Full reload instead of local removal keeps us
                        // consistent with the source of truth
                        reload();
                    }
                    Err(e) => {
                        log::error!("Failed to delete photo {}: {}", id, e);
                        error_message.set(Some(e.user_message()));
                    }
                }
                confirm_delete.set(None);
            });
        }
    };

    let photos = gallery.read().photos().to_vec();

    rsx! {
        div { class: "panel list-panel",
            h2 { "Stored Photos" }

            if let Some(error) = error_message() {
                div { class: "banner banner-error", "{error}" }
            }

            if loading() {
                p { class: "list-message", "Loading photos..." }
            } else if photos.is_empty() {
                p { class: "list-message", "No photos uploaded yet." }
            } else {
                div { class: "photo-rows",
                    for photo in photos.clone() {
                        PhotoRow {
                            key: "{photo.id}",
                            photo: photo.clone(),
                            pending_confirm: confirm_delete() == Some(photo.id.clone()),
                            on_request_delete: move |_| confirm_delete.set(Some(photo.id.clone())),
                            on_cancel_delete: move |_| confirm_delete.set(None),
                            on_confirm_delete: on_delete.clone(),
                        }
                    }
                }
                p { class: "list-total", "Total photos: {photos.len()}" }
            }
        }
    }
}

#[component]
fn PhotoRow(
    photo: Photo,
    pending_confirm: bool,
    on_request_delete: EventHandler<()>,
    on_cancel_delete: EventHandler<()>,
    on_confirm_delete: EventHandler<String>,
) -> Element {
    let mut broken = use_signal(|| false);
    let delete_id = photo.id.clone();

    let created = chrono::DateTime::parse_from_rfc3339(&photo.created_at)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| photo.created_at.clone());

    rsx! {
        div { class: "photo-row",
            div { class: "photo-row-thumb",
                if !broken() {
                    img {
                        src: "{photo.image_url}",
                        alt: "{photo.title}",
                        onerror: move |_| broken.set(true),
                    }
                } else {
                    div { class: "thumb-placeholder", "IMG" }
                }
            }

            div { class: "photo-row-meta",
                h3 { "{photo.title}" }
                p { class: "photo-row-category", "{photo.category.display_name()}" }
                p { class: "photo-row-date", "{created}" }
                if let Some(description) = &photo.description {
                    p { class: "photo-row-description", "{description}" }
                }
            }

            div { class: "photo-row-actions",
                if pending_confirm {
                    span { class: "confirm-hint", "Delete this photo?" }
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| on_confirm_delete.call(delete_id.clone()),
                        "Confirm"
                    }
                    button {
                        class: "btn",
                        onclick: move |_| on_cancel_delete.call(()),
                        "Cancel"
                    }
                } else {
                    a {
                        class: "btn",
                        href: "{photo.image_url}",
                        target: "_blank",
                        "View"
                    }
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| on_request_delete.call(()),
                        "Delete"
                    }
                }
            }
        }
    }
}
