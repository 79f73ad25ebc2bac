use dioxus::prelude::*;
use photo_store::Photo;

/// Full-screen photo overlay.
///
/// The keyboard handler sits on the overlay root: Escape closes, the arrow
/// keys navigate when a neighbour exists. Because the handler belongs to
/// this element, it is registered exactly while the overlay is mounted and
/// dropped with it on unmount.
#[component]
pub fn LightboxOverlay(
    photo: Photo,
    has_next: bool,
    has_previous: bool,
    on_close: EventHandler<()>,
    on_next: EventHandler<()>,
    on_previous: EventHandler<()>,
) -> Element {
    // Broken image tracking is keyed by photo id so navigating to another
    // photo shows its image again
    let mut broken_id = use_signal(|| None::<String>);
    let broken = broken_id() == Some(photo.id.clone());
    let error_id = photo.id.clone();

    rsx! {
        div {
            class: "lightbox-overlay",
            tabindex: "0",
            onmounted: move |element| async move {
                let _ = element.set_focus(true).await;
            },
            onkeydown: move |evt| match evt.key() {
                Key::Escape => on_close.call(()),
                Key::ArrowRight => {
                    if has_next {
                        on_next.call(());
                    }
                }
                Key::ArrowLeft => {
                    if has_previous {
                        on_previous.call(());
                    }
                }
                _ => {}
            },
            // Click outside the image closes the viewer
            onclick: move |_| on_close.call(()),

            button {
                class: "lightbox-close",
                onclick: move |evt| {
                    evt.stop_propagation();
                    on_close.call(());
                },
                "×"
            }

            if has_previous {
                button {
                    class: "lightbox-nav lightbox-prev",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        on_previous.call(());
                    },
                    "‹"
                }
            }

            if has_next {
                button {
                    class: "lightbox-nav lightbox-next",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        on_next.call(());
                    },
                    "›"
                }
            }

            div {
                class: "lightbox-content",
                onclick: move |evt| evt.stop_propagation(),

                if !broken {
                    img {
                        src: "{photo.image_url}",
                        alt: "{photo.title}",
                        onerror: move |_| broken_id.set(Some(error_id.clone())),
                    }
                }

                div { class: "lightbox-info",
                    h3 { "{photo.title}" }
                    p { class: "lightbox-category", "{photo.category.display_name()}" }
                    if let Some(description) = &photo.description {
                        p { class: "lightbox-description", "{description}" }
                    }
                }
            }
        }
    }
}
