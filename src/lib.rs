//! Gallery Store - folder-and-asset management core
//!
//! The storage engine of a self-hosted image gallery: maps logical folder
//! paths onto a filesystem store, keeps a derived thumbnail cache next to the
//! source images, validates user-supplied folder names, and answers shallow
//! and recursive listing queries. HTTP routing and rendering live in the
//! embedding application, which drives everything through [`Gallery`].

pub mod config;
pub mod error;
pub mod gallery;
pub mod listing;
pub mod naming;
pub mod store;
pub mod thumbs;

pub use config::GalleryConfig;
pub use error::GalleryError;
pub use gallery::Gallery;
