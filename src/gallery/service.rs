//! Gallery service
//!
//! Owns the asset store and thumbnail cache and composes them into the
//! operations the request layer exposes. Everything runs synchronously
//! within the calling request.

use log::info;
use std::io;

use crate::config::GalleryConfig;
use crate::error::{GalleryError, StorageError};
use crate::gallery::results::{
    BrowsePage, ImageDetails, ImageSet, NameCheck, UploadFile, UploadOutcome,
};
use crate::listing;
use crate::naming::validate_folder_name;
use crate::store::{AssetStore, allowed_file, join_logical, normalize_path, sanitize_filename};
use crate::thumbs::ThumbnailCache;

/// The folder-and-asset management core behind the gallery
pub struct Gallery {
    store: AssetStore,
    thumbs: ThumbnailCache,
}

impl Gallery {
    /// Open the gallery, creating both storage roots if absent
    pub fn new(config: &GalleryConfig) -> io::Result<Self> {
        let store = AssetStore::new(config)?;
        let thumbs = ThumbnailCache::new(config)?;
        info!("Gallery opened at {}", store.root().display());

        Ok(Self { store, thumbs })
    }

    pub fn store(&self) -> &AssetStore {
        &self.store
    }

    pub fn thumbnails(&self) -> &ThumbnailCache {
        &self.thumbs
    }

    /// Browse one folder: subfolders, decorated images, breadcrumbs
    pub fn browse(&self, path: &str) -> Result<BrowsePage, GalleryError> {
        let current_path = normalize_path(path);
        if !self.store.folder_exists(&current_path) {
            return Err(StorageError::FolderNotFound(current_path).into());
        }

        let contents = listing::list(&self.store, &self.thumbs, &current_path)?;
        let breadcrumbs = listing::build_breadcrumbs(&current_path);

        Ok(BrowsePage {
            current_path,
            folders: contents.folders,
            images: contents.images,
            breadcrumbs,
        })
    }

    /// Upload a batch of files into a folder
    ///
    /// Files whose sanitized names are empty or lack an allowed extension
    /// are skipped and counted; oversized payloads abort the batch with
    /// SizeLimitExceeded.
    /// Thumbnails are generated eagerly for accepted files.
    pub fn upload(&self, path: &str, files: &[UploadFile]) -> Result<UploadOutcome, GalleryError> {
        let target = normalize_path(path);
        let mut outcome = UploadOutcome::default();

        for file in files {
            // Skip on the name as it will be stored; sanitization can strip
            // a client-sent extension, and that file is a skip, not an abort
            let filename = match sanitize_filename(&file.filename) {
                Some(name) if allowed_file(&name) => name,
                _ => {
                    outcome.skipped += 1;
                    continue;
                }
            };

            let entry = self.store.store_image(&target, &filename, &file.bytes)?;
            if let Ok(source) = self.store.image_path(&entry.relative_path) {
                self.thumbs.ensure(&source, &entry.relative_path);
            }
            outcome.uploaded += 1;
        }

        info!(
            "Upload to '{}': {} stored, {} skipped",
            target, outcome.uploaded, outcome.skipped
        );
        Ok(outcome)
    }

    /// Metadata for a single image's detail view
    pub fn image_details(&self, relative_path: &str) -> Result<ImageDetails, GalleryError> {
        let real = self.store.image_path(relative_path)?;
        let relative_path = normalize_path(relative_path);
        if !real.is_file() {
            return Err(StorageError::ImageNotFound(relative_path).into());
        }

        let (width, height) = listing::read_dimensions(&real);
        let prefix = self
            .store
            .root()
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(ImageDetails {
            full_image_path: format!("{}/{}", prefix, relative_path),
            relative_path,
            width,
            height,
        })
    }

    /// Delete one image and its thumbnail; true when the image existed
    pub fn delete_image(&self, relative_path: &str) -> Result<bool, GalleryError> {
        let deleted = self.store.delete_image(relative_path)?;
        // The thumbnail may exist even when the source is already gone
        self.thumbs.remove(&normalize_path(relative_path));
        Ok(deleted)
    }

    /// Create a folder after validating its name
    pub fn create_folder(&self, parent: &str, name: &str) -> Result<String, GalleryError> {
        let name = validate_folder_name(name)?;
        let path = self.store.create_folder(parent, &name)?;
        Ok(path)
    }

    /// Recursively delete a folder, removing descendant thumbnails first
    pub fn delete_folder(&self, path: &str) -> Result<(), GalleryError> {
        let logical = normalize_path(path);
        if !logical.is_empty() && self.store.folder_exists(&logical) {
            for image in self.store.list_images_recursive(&logical)? {
                self.thumbs.remove(&image.relative_path);
            }
        }
        // The store produces the precise error for absent or root paths
        self.store.delete_folder(&logical)?;

        Ok(())
    }

    /// Pre-check a candidate folder name against the rules and existing
    /// folders, for real-time form validation
    pub fn check_folder_name(&self, parent: &str, name: &str) -> NameCheck {
        match validate_folder_name(name) {
            Err(e) => NameCheck {
                valid: false,
                message: e.to_string(),
            },
            Ok(name) => {
                let candidate = join_logical(&normalize_path(parent), &name);
                if self.store.folder_exists(&candidate) {
                    NameCheck {
                        valid: false,
                        message: "A folder with this name already exists".to_string(),
                    }
                } else {
                    NameCheck {
                        valid: true,
                        message: String::new(),
                    }
                }
            }
        }
    }

    /// Every image under a path, recursively, with a total count
    pub fn all_images(&self, path: &str) -> Result<ImageSet, GalleryError> {
        let images = listing::list_all_recursive(&self.store, &self.thumbs, &normalize_path(path))?;

        Ok(ImageSet {
            count: images.len(),
            images,
        })
    }
}
