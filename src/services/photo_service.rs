use crate::config::AppConfig;
use crate::error::AppError;
use photo_store::{Category, NewPhoto, Photo, PhotoStoreClient};
use std::sync::Arc;

/// Shared handle to the photo store client.
///
/// Passed to components through Dioxus context instead of a module-level
/// singleton. Equality is handle identity, which keeps component props cheap
/// to diff.
#[derive(Clone)]
pub struct StoreHandle(Arc<PhotoStoreClient>);

impl PartialEq for StoreHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl StoreHandle {
    pub fn client(&self) -> &PhotoStoreClient {
        &self.0
    }
}

/// Load configuration and build the store handle
pub fn init_store() -> Result<StoreHandle, AppError> {
    let config = AppConfig::load()?;
    let client = PhotoStoreClient::new(config.store_config())?;
    Ok(StoreHandle(Arc::new(client)))
}

/// Fetch the full photo collection, newest first. Single attempt.
pub async fn fetch_photos(store: &StoreHandle) -> Result<Vec<Photo>, AppError> {
    Ok(store.client().list_photos().await?)
}

/// Delete a photo row. The caller reloads the collection on success.
pub async fn delete_photo(store: &StoreHandle, id: &str) -> Result<(), AppError> {
    Ok(store.client().delete_photo(id).await?)
}

/// Upload a photo: store the file, derive its public URL, insert the
/// metadata row. Fails before any network call on invalid input.
pub async fn upload_photo(
    store: &StoreHandle,
    title: &str,
    description: Option<String>,
    category: Category,
    file_name: &str,
    bytes: Vec<u8>,
) -> Result<(), AppError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(AppError::Validation("Title must not be empty".to_string()));
    }
    if bytes.is_empty() {
        return Err(AppError::Validation("Selected file is empty".to_string()));
    }

    let object_name = object_name_for(file_name);
    let content_type = content_type_for(&object_name);

    let stored = store
        .client()
        .upload_file(&object_name, bytes, content_type)
        .await?;
    let image_url = store.client().public_url(&stored);

    let new_photo = NewPhoto {
        title: title.to_string(),
        description: description.filter(|d| !d.trim().is_empty()),
        category,
        image_url,
    };

    store.client().insert_photo(&new_photo).await?;
    Ok(())
}

/// Unique object name for an uploaded file, keeping the original extension
fn object_name_for(file_name: &str) -> String {
    let extension = std::path::Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_else(|| "jpg".to_string());
    format!("{}.{}", uuid::Uuid::new_v4(), extension)
}

fn content_type_for(object_name: &str) -> &'static str {
    match object_name.rsplit('.').next() {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "image/jpeg",
    }
}
