use std::fmt;

/// Central error types for the portfolio app
#[derive(Debug)]
pub enum AppError {
    /// Photo store (backend) error
    Store(photo_store::StoreError),
    /// Configuration error (missing or malformed settings)
    Config(String),
    /// Validation error (e.g. invalid inputs)
    Validation(String),
    /// General error
    #[allow(dead_code)]
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Store(e) => write!(f, "Photo store error: {}", e),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<photo_store::StoreError> for AppError {
    fn from(e: photo_store::StoreError) -> Self {
        AppError::Store(e)
    }
}

/// User-friendly error messages for UI banners
impl AppError {
    pub fn user_message(&self) -> String {
        match self {
            AppError::Store(_) => {
                "Could not reach the photo store. Please try again.".to_string()
            }
            AppError::Config(msg) => format!("Configuration problem: {}", msg),
            AppError::Validation(msg) => msg.clone(),
            AppError::Other(msg) => msg.clone(),
        }
    }
}
