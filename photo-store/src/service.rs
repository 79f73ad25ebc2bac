use crate::models::{NewPhoto, Photo};

/// Error type for photo store operations
#[derive(Debug)]
pub enum StoreError {
    NetworkError(String),
    JsonError(String),
    ServerError { status: u16, message: String },
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            StoreError::JsonError(msg) => write!(f, "JSON error: {}", msg),
            StoreError::ServerError { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// Connection settings for the hosted backend
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoStoreConfig {
    /// Project base URL, e.g. `https://project.supabase.co`
    pub base_url: String,
    /// Anon API key, sent as `apikey` and bearer token
    pub anon_key: String,
    /// Storage bucket holding the image files
    pub bucket: String,
}

/// Client for the photo table and its storage bucket
pub struct PhotoStoreClient {
    config: PhotoStoreConfig,
    http: reqwest::Client,
}

impl PhotoStoreClient {
    /// Create a new client for the given backend
    pub fn new(config: PhotoStoreConfig) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .user_agent("PhotoStore/0.1.0")
            .build()
            .map_err(|e| StoreError::NetworkError(format!("Client build failed: {}", e)))?;

        Ok(Self { config, http })
    }

    fn base(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/photos", self.base())
    }

    /// Public URL for an object in the bucket. Pure string building, the
    /// bucket must be public for the URL to resolve.
    pub fn public_url(&self, object_name: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base(),
            self.config.bucket,
            object_name
        )
    }

    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header("apikey", &self.config.anon_key)
            .header(
                "Authorization",
                format!("Bearer {}", self.config.anon_key),
            )
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(StoreError::ServerError {
            status: status.as_u16(),
            message,
        })
    }

    /// Fetch the full photo collection, newest first
    pub async fn list_photos(&self) -> Result<Vec<Photo>, StoreError> {
        let url = format!("{}?select=*&order=created_at.desc", self.table_url());

        let response = self
            .authed(self.http.get(&url))
            .send()
            .await
            .map_err(|e| StoreError::NetworkError(format!("List request failed: {}", e)))?;

        let response = Self::check_status(response).await?;

        let photos = response
            .json::<Vec<Photo>>()
            .await
            .map_err(|e| StoreError::JsonError(format!("Failed to parse photo list: {}", e)))?;

        log::debug!("Listed {} photos", photos.len());
        Ok(photos)
    }

    /// Insert a new photo row
    pub async fn insert_photo(&self, photo: &NewPhoto) -> Result<(), StoreError> {
        let response = self
            .authed(self.http.post(self.table_url()))
            .header("Prefer", "return=minimal")
            .json(photo)
            .send()
            .await
            .map_err(|e| StoreError::NetworkError(format!("Insert request failed: {}", e)))?;

        Self::check_status(response).await?;
        log::info!("Inserted photo '{}'", photo.title);
        Ok(())
    }

    /// Delete a photo row by id
    pub async fn delete_photo(&self, id: &str) -> Result<(), StoreError> {
        let url = format!("{}?id=eq.{}", self.table_url(), id);

        let response = self
            .authed(self.http.delete(&url))
            .send()
            .await
            .map_err(|e| StoreError::NetworkError(format!("Delete request failed: {}", e)))?;

        Self::check_status(response).await?;
        log::info!("Deleted photo {}", id);
        Ok(())
    }

    /// Upload a file into the bucket, returns the stored object name
    pub async fn upload_file(
        &self,
        object_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StoreError> {
        let url = format!(
            "{}/storage/v1/object/{}/{}",
            self.base(),
            self.config.bucket,
            object_name
        );

        let response = self
            .authed(self.http.post(&url))
            .header("Content-Type", content_type)
            .body(bytes)
            .send()
            .await
            .map_err(|e| StoreError::NetworkError(format!("Upload request failed: {}", e)))?;

        Self::check_status(response).await?;
        log::info!("Uploaded object {}", object_name);
        Ok(object_name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> PhotoStoreClient {
        PhotoStoreClient::new(PhotoStoreConfig {
            base_url: base_url.to_string(),
            anon_key: "test-key".to_string(),
            bucket: "photos".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_public_url() {
        let c = client("https://project.supabase.co");
        assert_eq!(
            c.public_url("abc.jpg"),
            "https://project.supabase.co/storage/v1/object/public/photos/abc.jpg"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let c = client("https://project.supabase.co/");
        assert_eq!(c.table_url(), "https://project.supabase.co/rest/v1/photos");
        assert_eq!(
            c.public_url("x.webp"),
            "https://project.supabase.co/storage/v1/object/public/photos/x.webp"
        );
    }
}
