pub mod gallery;
pub mod lightbox;

pub use gallery::GalleryState;
pub use lightbox::Lightbox;
