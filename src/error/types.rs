//! Error types
//!
//! Defines domain-specific error types for each module of the gallery store.

use std::fmt;
use std::io;

/// Folder-name validation errors
///
/// Messages are user-correctable and surfaced verbatim by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    Empty,
    TooLong(usize),
    InvalidCharacters,
    Reserved(String),
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameError::Empty => write!(f, "Folder name cannot be empty"),
            NameError::TooLong(len) => {
                write!(f, "Folder name too long (max 100 characters, got {})", len)
            }
            NameError::InvalidCharacters => write!(
                f,
                "Folder name can only contain letters, numbers, spaces, hyphens, and underscores"
            ),
            NameError::Reserved(name) => {
                write!(f, "The folder name \"{}\" is reserved by the system", name)
            }
        }
    }
}

impl std::error::Error for NameError {}

/// Storage module errors
#[derive(Debug)]
pub enum StorageError {
    FolderNotFound(String),
    ImageNotFound(String),
    FolderAlreadyExists(String),
    InvalidPath(String),
    PathTraversal(String),
    UnsupportedExtension(String),
    SizeLimitExceeded { size: u64, limit: u64 },
    IoError(io::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::FolderNotFound(p) => write!(f, "Folder not found: {}", p),
            StorageError::ImageNotFound(p) => write!(f, "Image not found: {}", p),
            StorageError::FolderAlreadyExists(p) => {
                write!(f, "A folder with this name already exists: {}", p)
            }
            StorageError::InvalidPath(p) => write!(f, "Invalid path: {}", p),
            StorageError::PathTraversal(p) => write!(f, "Path traversal attempt: {}", p),
            StorageError::UnsupportedExtension(name) => {
                write!(f, "File type not allowed: {}", name)
            }
            StorageError::SizeLimitExceeded { size, limit } => {
                write!(f, "Upload of {} bytes exceeds the {} byte limit", size, limit)
            }
            StorageError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<io::Error> for StorageError {
    fn from(error: io::Error) -> Self {
        StorageError::IoError(error)
    }
}

/// General gallery error that encompasses all error types
#[derive(Debug)]
pub enum GalleryError {
    Name(NameError),
    Storage(StorageError),
    IoError(io::Error),
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalleryError::Name(e) => write!(f, "Validation error: {}", e),
            GalleryError::Storage(e) => write!(f, "Storage error: {}", e),
            GalleryError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for GalleryError {}

impl From<NameError> for GalleryError {
    fn from(error: NameError) -> Self {
        GalleryError::Name(error)
    }
}

impl From<StorageError> for GalleryError {
    fn from(error: StorageError) -> Self {
        GalleryError::Storage(error)
    }
}

impl From<io::Error> for GalleryError {
    fn from(error: io::Error) -> Self {
        GalleryError::IoError(error)
    }
}
