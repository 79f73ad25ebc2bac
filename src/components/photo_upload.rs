use crate::services::{photo_service, StoreHandle};
use dioxus::html::FileData;
use dioxus::prelude::*;
use photo_store::Category;

/// Admin upload form: title, optional description, category and image file.
/// On success the form resets and the parent is notified so the photo list
/// can refresh.
#[component]
pub fn PhotoUpload(on_uploaded: EventHandler<()>) -> Element {
    let store = use_context::<StoreHandle>();
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut category = use_signal(|| Category::Portraits);
    let mut picked_file = use_signal(|| None::<FileData>);
    let mut uploading = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);
    let mut success_message = use_signal(|| None::<String>);

    let on_submit = {
        let store = store.clone();
        move |_| {
            if uploading() {
                return;
            }
            let store = store.clone();
            spawn(async move {
                let Some(file) = picked_file() else {
                    error_message.set(Some("Please choose an image file.".to_string()));
                    return;
                };

                uploading.set(true);
                error_message.set(None);
                success_message.set(None);

                let bytes = match file.read_bytes().await {
                    Ok(bytes) => bytes.to_vec(),
                    Err(e) => {
                        log::error!("Failed to read selected file: {:?}", e);
                        error_message.set(Some("Could not read the selected file.".to_string()));
                        uploading.set(false);
                        return;
                    }
                };

                let description_opt = if description().trim().is_empty() {
                    None
                } else {
                    Some(description())
                };

                match photo_service::upload_photo(
                    &store,
                    &title(),
                    description_opt,
                    category(),
                    &file.name(),
                    bytes,
                )
                .await
                {
                    Ok(()) => {
                        title.set(String::new());
                        description.set(String::new());
                        category.set(Category::Portraits);
                        picked_file.set(None);
                        success_message.set(Some("Photo uploaded successfully.".to_string()));
                        on_uploaded.call(());
                    }
                    Err(e) => {
                        log::error!("Upload failed: {}", e);
                        error_message.set(Some(e.user_message()));
                    }
                }
                uploading.set(false);
            });
        }
    };

    rsx! {
        div { class: "panel upload-panel",
            h2 { "Upload Photo" }

            if let Some(error) = error_message() {
                div { class: "banner banner-error", "{error}" }
            }
            if let Some(message) = success_message() {
                div { class: "banner banner-success", "{message}" }
            }

            div { class: "form-group",
                label { "Title" }
                input {
                    r#type: "text",
                    value: "{title}",
                    placeholder: "Enter photo title",
                    oninput: move |e| title.set(e.value()),
                }
            }

            div { class: "form-group",
                label { "Description (optional)" }
                textarea {
                    value: "{description}",
                    placeholder: "Enter description",
                    oninput: move |e| description.set(e.value()),
                }
            }

            div { class: "form-group",
                label { "Category" }
                select {
                    value: "{category().as_str()}",
                    onchange: move |e| category.set(Category::from_str(&e.value())),
                    for c in Category::all().iter().copied() {
                        option { value: "{c.as_str()}", "{c.display_name()}" }
                    }
                }
            }

            div { class: "form-group",
                label { "Photo" }
                input {
                    r#type: "file",
                    accept: "image/*",
                    onchange: move |e| {
                        if let Some(file) = e.files().into_iter().next() {
                            picked_file.set(Some(file));
                        }
                    },
                }
                if let Some(file) = picked_file() {
                    p { class: "file-hint", "Selected: {file.name()}" }
                }
            }

            button {
                class: "btn btn-primary",
                disabled: uploading(),
                onclick: on_submit,
                if uploading() { "Uploading..." } else { "Upload Photo" }
            }
        }
    }
}
