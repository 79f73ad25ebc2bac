//! # Photo Store
//!
//! A typed client for a Supabase-style hosted backend: a `photos` table
//! behind a PostgREST endpoint plus a public object-storage bucket.
//!
//! This crate owns the photo data model and the network plumbing. It knows
//! nothing about UI; callers decide how to present errors and when to
//! refresh their state.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use photo_store::{PhotoStoreClient, PhotoStoreConfig};
//!
//! let client = PhotoStoreClient::new(PhotoStoreConfig {
//!     base_url: "https://project.supabase.co".to_string(),
//!     anon_key: "anon-key".to_string(),
//!     bucket: "photos".to_string(),
//! })?;
//!
//! let photos = client.list_photos().await?;
//! ```

pub mod models;
pub mod service;

pub use models::{Category, NewPhoto, Photo};
pub use service::{PhotoStoreClient, PhotoStoreConfig, StoreError};
