//! Filesystem-backed asset storage
//!
//! Single source of truth for the on-disk folder/file hierarchy rooted at the
//! configured upload directory. Handles listing, storing and deleting of
//! folders and images, plus logical-path safety checks.

mod operations;
mod results;
mod validation;

pub use operations::{ALLOWED_EXTENSIONS, AssetStore, allowed_file};
pub use results::{DEFAULT_DIMENSIONS, FolderEntry, ImageEntry};
pub use validation::{join_logical, normalize_path, sanitize_filename};
