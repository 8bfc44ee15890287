//! Storage operations
//!
//! Filesystem operations behind the gallery: listing folders and images,
//! storing uploads, and creating or deleting folders.

use log::{error, info, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::GalleryConfig;
use crate::error::StorageError;
use crate::store::results::{FolderEntry, ImageEntry};
use crate::store::validation::{
    join_logical, normalize_path, resolve_dir, resolve_file, sanitize_filename,
};

/// File extensions accepted for storage, matched case-insensitively
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

/// True when a filename carries an allowed image extension
pub fn allowed_file(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Filesystem-backed store for the folder tree and canonical image bytes
pub struct AssetStore {
    root: PathBuf,
    public_prefix: String,
    max_upload_bytes: u64,
}

impl AssetStore {
    /// Open the store, creating the root directory if absent
    pub fn new(config: &GalleryConfig) -> io::Result<Self> {
        let root = config.upload_root();
        fs::create_dir_all(&root)?;

        let public_prefix = root
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "uploads".to_string());

        Ok(Self {
            root,
            public_prefix,
            max_upload_bytes: config.max_upload_bytes(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// True when the logical path resolves to an existing directory
    pub fn folder_exists(&self, path: &str) -> bool {
        match resolve_dir(&self.root, path) {
            Ok(real) => real.is_dir(),
            Err(_) => false,
        }
    }

    /// Resolve a root-relative image path to its real location
    pub fn image_path(&self, relative_path: &str) -> Result<PathBuf, StorageError> {
        let (real, _) = resolve_file(&self.root, relative_path)?;
        Ok(real)
    }

    /// List the immediate subfolders of a logical path, alphabetically
    ///
    /// Each entry carries the recursive image count of its subtree.
    pub fn list_folders(&self, path: &str) -> Result<Vec<FolderEntry>, StorageError> {
        let logical = normalize_path(path);
        let real = resolve_dir(&self.root, &logical)?;
        if !real.is_dir() {
            return Err(StorageError::FolderNotFound(logical));
        }

        let mut folders = Vec::new();
        for entry in fs::read_dir(&real)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().to_string();
            let folder_path = join_logical(&logical, &name);
            let image_count = self.count_images(entry.path());

            folders.push(FolderEntry {
                name,
                path: folder_path,
                image_count,
            });
        }
        folders.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(folders)
    }

    /// List the images directly inside a logical path (never descends)
    pub fn list_images(&self, path: &str) -> Result<Vec<ImageEntry>, StorageError> {
        let logical = normalize_path(path);
        let real = resolve_dir(&self.root, &logical)?;
        if !real.is_dir() {
            return Err(StorageError::FolderNotFound(logical));
        }

        let mut images = Vec::new();
        for entry in fs::read_dir(&real)? {
            let entry = entry?;
            let filename = entry.file_name().to_string_lossy().to_string();
            if !entry.file_type()?.is_file() || !allowed_file(&filename) {
                continue;
            }

            let relative_path = join_logical(&logical, &filename);
            images.push(ImageEntry::new(filename, relative_path, &self.public_prefix));
        }
        images.sort_by(|a, b| a.filename.cmp(&b.filename));

        Ok(images)
    }

    /// List every image in the subtree of a logical path
    ///
    /// An absent path yields an empty listing; a delete racing a recursive
    /// list is benign.
    pub fn list_images_recursive(&self, path: &str) -> Result<Vec<ImageEntry>, StorageError> {
        let logical = normalize_path(path);
        let real = resolve_dir(&self.root, &logical)?;

        let mut images = Vec::new();
        for entry in WalkDir::new(&real)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let filename = entry.file_name().to_string_lossy().to_string();
            if !entry.file_type().is_file() || !allowed_file(&filename) {
                continue;
            }

            let relative_path = self.logical_path_of(entry.path());
            images.push(ImageEntry::new(filename, relative_path, &self.public_prefix));
        }

        Ok(images)
    }

    /// Count the images in a subtree, treating unreadable entries as absent
    fn count_images(&self, dir: PathBuf) -> usize {
        WalkDir::new(dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.file_type().is_file() && allowed_file(&e.file_name().to_string_lossy())
            })
            .count()
    }

    /// Store uploaded bytes under a logical folder path
    ///
    /// The filename is reduced to a safe basename, so a client-sent
    /// "../../etc/evil.png" lands as "evil.png" inside the target folder.
    pub fn store_image(
        &self,
        path: &str,
        filename: &str,
        bytes: &[u8],
    ) -> Result<ImageEntry, StorageError> {
        let filename = sanitize_filename(filename)
            .ok_or_else(|| StorageError::InvalidPath(filename.to_string()))?;

        if !allowed_file(&filename) {
            return Err(StorageError::UnsupportedExtension(filename));
        }

        if bytes.len() as u64 > self.max_upload_bytes {
            return Err(StorageError::SizeLimitExceeded {
                size: bytes.len() as u64,
                limit: self.max_upload_bytes,
            });
        }

        let logical = normalize_path(path);
        let dir = resolve_dir(&self.root, &logical)?;
        fs::create_dir_all(&dir)?;

        let real = dir.join(&filename);
        fs::write(&real, bytes)?;

        let relative_path = join_logical(&logical, &filename);
        info!(
            "Stored image {} (logical: {}, real: {})",
            filename,
            relative_path,
            real.display()
        );

        Ok(ImageEntry::new(filename, relative_path, &self.public_prefix))
    }

    /// Delete an image if present; true when a deletion occurred
    pub fn delete_image(&self, relative_path: &str) -> Result<bool, StorageError> {
        let (real, logical) = resolve_file(&self.root, relative_path)?;

        if !real.is_file() {
            return Ok(false);
        }

        match fs::remove_file(&real) {
            Ok(()) => {
                info!("Deleted image {} (real: {})", logical, real.display());
                Ok(true)
            }
            // A concurrent delete winning the race is not an error
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => {
                error!("Failed to delete image {}: {}", logical, e);
                Err(StorageError::from(e))
            }
        }
    }

    /// Create a folder under a parent path
    ///
    /// The name must already have passed the folder-name validator; this only
    /// guards against an existing directory of the same name.
    pub fn create_folder(&self, parent: &str, name: &str) -> Result<String, StorageError> {
        let logical = join_logical(&normalize_path(parent), name);
        let real = resolve_dir(&self.root, &logical)?;

        if real.exists() {
            return Err(StorageError::FolderAlreadyExists(logical));
        }

        fs::create_dir_all(&real)?;
        info!("Created folder {} (real: {})", logical, real.display());

        Ok(logical)
    }

    /// Recursively delete a folder and everything below it
    pub fn delete_folder(&self, path: &str) -> Result<(), StorageError> {
        let logical = normalize_path(path);
        if logical.is_empty() {
            return Err(StorageError::InvalidPath("cannot delete the store root".to_string()));
        }

        let real = resolve_dir(&self.root, &logical)?;
        if !real.is_dir() {
            return Err(StorageError::FolderNotFound(logical));
        }

        fs::remove_dir_all(&real).map_err(|e| {
            error!("Failed to delete folder {}: {}", logical, e);
            StorageError::from(e)
        })?;
        info!("Deleted folder {} (real: {})", logical, real.display());

        Ok(())
    }

    /// Logical path of a real path inside the root, with forward slashes
    fn logical_path_of(&self, real: &Path) -> String {
        let relative = real.strip_prefix(&self.root).unwrap_or(real);
        let segments: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().to_string())
            .collect();

        if segments.is_empty() {
            warn!("Real path {} is not inside the store root", real.display());
        }
        segments.join("/")
    }
}
