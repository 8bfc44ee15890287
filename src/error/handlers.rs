//! Error handlers
//!
//! Maps gallery errors onto caller-facing handling.

use crate::error::types::{GalleryError, StorageError};
use log::error;

/// Handle a gallery error
pub fn handle_error(err: &GalleryError) {
    error!("Gallery error: {}", err);
}

/// Convert error to an HTTP-style status code for the request layer
pub fn error_to_status(err: &GalleryError) -> u16 {
    match err {
        GalleryError::Name(_) => 400,
        GalleryError::Storage(e) => match e {
            StorageError::FolderNotFound(_) | StorageError::ImageNotFound(_) => 404,
            StorageError::FolderAlreadyExists(_) => 409,
            StorageError::SizeLimitExceeded { .. } => 413,
            StorageError::UnsupportedExtension(_) => 415,
            StorageError::InvalidPath(_) | StorageError::PathTraversal(_) => 400,
            StorageError::IoError(_) => 500,
        },
        GalleryError::IoError(_) => 500,
    }
}
