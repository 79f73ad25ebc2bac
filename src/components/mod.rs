mod admin;
mod gallery;
mod lightbox;
mod nav;
mod photo_list;
mod photo_upload;

pub use admin::AdminScreen;
pub use gallery::GalleryScreen;
pub use lightbox::LightboxOverlay;
pub use nav::NavigationBar;
pub use photo_list::PhotoList;
pub use photo_upload::PhotoUpload;
