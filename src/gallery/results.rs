//! Facade result types
//!
//! Records returned to the request layer; all serializable so the caller can
//! render them directly as JSON or template context.

use serde::Serialize;

use crate::listing::Breadcrumb;
use crate::store::{FolderEntry, ImageEntry};

/// One file offered for upload
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Result of browsing one folder
#[derive(Debug, Serialize)]
pub struct BrowsePage {
    pub current_path: String,
    pub folders: Vec<FolderEntry>,
    pub images: Vec<ImageEntry>,
    pub breadcrumbs: Vec<Breadcrumb>,
}

/// Result of an upload batch
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct UploadOutcome {
    pub uploaded: usize,
    pub skipped: usize,
}

/// Metadata for a single image's detail view
#[derive(Debug, Serialize)]
pub struct ImageDetails {
    pub relative_path: String,
    pub full_image_path: String,
    pub width: u32,
    pub height: u32,
}

/// Result of a folder-name pre-check
#[derive(Debug, Serialize)]
pub struct NameCheck {
    pub valid: bool,
    pub message: String,
}

/// Result of a recursive image query
#[derive(Debug, Serialize)]
pub struct ImageSet {
    pub images: Vec<ImageEntry>,
    pub count: usize,
}
