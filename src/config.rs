use crate::error::AppError;
use photo_store::PhotoStoreConfig;
use serde::Deserialize;

const CONFIG_FILE: &str = "portfolio.toml";
const DEFAULT_BUCKET: &str = "photos";

/// Application configuration
///
/// Resolution order: environment variables (`PORTFOLIO_STORE_URL`,
/// `PORTFOLIO_STORE_KEY`, optional `PORTFOLIO_STORE_BUCKET`) first, then a
/// `portfolio.toml` file in the working directory.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AppConfig {
    pub store: StoreSettings,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StoreSettings {
    pub base_url: String,
    pub anon_key: String,
    #[serde(default = "default_bucket")]
    pub bucket: String,
}

fn default_bucket() -> String {
    DEFAULT_BUCKET.to_string()
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        if let Some(config) = Self::from_env() {
            log::debug!("Using store settings from environment");
            return Ok(config);
        }

        let raw = std::fs::read_to_string(CONFIG_FILE).map_err(|e| {
            AppError::Config(format!(
                "no store settings in environment and '{}' not readable: {}",
                CONFIG_FILE, e
            ))
        })?;

        toml::from_str(&raw)
            .map_err(|e| AppError::Config(format!("invalid '{}': {}", CONFIG_FILE, e)))
    }

    fn from_env() -> Option<Self> {
        let base_url = std::env::var("PORTFOLIO_STORE_URL").ok()?;
        let anon_key = std::env::var("PORTFOLIO_STORE_KEY").ok()?;
        let bucket = std::env::var("PORTFOLIO_STORE_BUCKET").unwrap_or_else(|_| default_bucket());

        Some(Self {
            store: StoreSettings {
                base_url,
                anon_key,
                bucket,
            },
        })
    }

    pub fn store_config(&self) -> PhotoStoreConfig {
        PhotoStoreConfig {
            base_url: self.store.base_url.clone(),
            anon_key: self.store.anon_key.clone(),
            bucket: self.store.bucket.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: AppConfig = toml::from_str(
            r#"
            [store]
            base_url = "https://project.supabase.co"
            anon_key = "anon"
            bucket = "gallery"
            "#,
        )
        .unwrap();
        assert_eq!(config.store.bucket, "gallery");
        assert_eq!(
            config.store_config().base_url,
            "https://project.supabase.co"
        );
    }

    #[test]
    fn test_bucket_defaults_to_photos() {
        let config: AppConfig = toml::from_str(
            r#"
            [store]
            base_url = "https://project.supabase.co"
            anon_key = "anon"
            "#,
        )
        .unwrap();
        assert_eq!(config.store.bucket, "photos");
    }

    #[test]
    fn test_missing_key_is_an_error() {
        let result: Result<AppConfig, _> = toml::from_str(
            r#"
            [store]
            base_url = "https://project.supabase.co"
            "#,
        );
        assert!(result.is_err());
    }
}
