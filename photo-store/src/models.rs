use serde::{Deserialize, Serialize};

/// A photo record as stored in the `photos` table. Read-only on the wire,
/// inserts go through [`NewPhoto`].
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Photo {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: Category,
    pub image_url: String,
    /// ISO-8601 timestamp, set by the backend
    pub created_at: String,
    /// ISO-8601 timestamp, set by the backend
    pub updated_at: String,
}

/// Insert payload for a new photo row (id and timestamps are server-side)
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewPhoto {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: Category,
    pub image_url: String,
}

/// The four portfolio categories
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Portraits,
    Landscapes,
    Street,
    Abstract,
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Portraits => "portraits",
            Category::Landscapes => "landscapes",
            Category::Street => "street",
            Category::Abstract => "abstract",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "portraits" => Category::Portraits,
            "landscapes" => Category::Landscapes,
            "street" => Category::Street,
            "abstract" => Category::Abstract,
            _ => Category::Portraits, // Fallback, select inputs only send valid values
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Category::Portraits => "Portraits",
            Category::Landscapes => "Landscapes",
            Category::Street => "Street",
            Category::Abstract => "Abstract",
        }
    }

    pub fn all() -> &'static [Category] {
        static ALL: [Category; 4] = [
            Category::Portraits,
            Category::Landscapes,
            Category::Street,
            Category::Abstract,
        ];
        &ALL
    }
}
