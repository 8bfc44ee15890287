//! Listing operations
//!
//! Per-image decoration (thumbnail, dimensions) is fail-soft: one corrupt
//! file degrades to default dimensions and a missing thumbnail instead of
//! failing the whole listing.

use log::warn;
use std::path::Path;

use crate::error::StorageError;
use crate::store::{AssetStore, DEFAULT_DIMENSIONS, FolderEntry, ImageEntry};
use crate::thumbs::ThumbnailCache;

/// Folders and images of one listed path
#[derive(Debug)]
pub struct Listing {
    pub folders: Vec<FolderEntry>,
    pub images: Vec<ImageEntry>,
}

/// List the immediate contents of a logical path, presentation-ready
pub fn list(
    store: &AssetStore,
    thumbs: &ThumbnailCache,
    path: &str,
) -> Result<Listing, StorageError> {
    let folders = store.list_folders(path)?;
    let mut images = store.list_images(path)?;
    for image in &mut images {
        decorate(store, thumbs, image);
    }

    Ok(Listing { folders, images })
}

/// List every image in a subtree, presentation-ready
pub fn list_all_recursive(
    store: &AssetStore,
    thumbs: &ThumbnailCache,
    path: &str,
) -> Result<Vec<ImageEntry>, StorageError> {
    let mut images = store.list_images_recursive(path)?;
    for image in &mut images {
        decorate(store, thumbs, image);
    }

    Ok(images)
}

/// Read image dimensions from the file header, defaulting on failure
pub fn read_dimensions(path: &Path) -> (u32, u32) {
    match image::image_dimensions(path) {
        Ok(dimensions) => dimensions,
        Err(e) => {
            warn!("Cannot read dimensions of {}: {}", path.display(), e);
            DEFAULT_DIMENSIONS
        }
    }
}

/// Attach thumbnail and dimensions to a listed image
fn decorate(store: &AssetStore, thumbs: &ThumbnailCache, image: &mut ImageEntry) {
    let source = match store.image_path(&image.relative_path) {
        Ok(source) => source,
        Err(e) => {
            warn!("Skipping decoration of {}: {}", image.relative_path, e);
            return;
        }
    };

    image.thumbnail_path = thumbs.ensure(&source, &image.relative_path);
    let (width, height) = read_dimensions(&source);
    image.width = width;
    image.height = height;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GalleryConfig;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn fixture_png(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::new(width, height);
        let mut bytes = Cursor::new(Vec::new());
        img.write_to(&mut bytes, image::ImageFormat::Png).unwrap();
        bytes.into_inner()
    }

    fn setup(root: &Path) -> (AssetStore, ThumbnailCache) {
        let config = GalleryConfig {
            upload_dir: root.join("uploads").to_string_lossy().to_string(),
            thumbnail_dir: root.join("thumbnails").to_string_lossy().to_string(),
            ..GalleryConfig::default()
        };
        (
            AssetStore::new(&config).unwrap(),
            ThumbnailCache::new(&config).unwrap(),
        )
    }

    #[test]
    fn test_listing_decorates_images() {
        let temp = tempdir().unwrap();
        let (store, thumbs) = setup(temp.path());

        store
            .store_image("album", "cat.png", &fixture_png(320, 240))
            .unwrap();

        let listing = list(&store, &thumbs, "album").unwrap();
        assert!(listing.folders.is_empty());
        assert_eq!(listing.images.len(), 1);

        let image = &listing.images[0];
        assert_eq!((image.width, image.height), (320, 240));
        assert!(image.thumbnail_path.is_some());
        assert!(thumbs.exists("album/cat.png"));
    }

    #[test]
    fn test_corrupt_image_degrades_without_failing() {
        let temp = tempdir().unwrap();
        let (store, thumbs) = setup(temp.path());

        store.store_image("", "good.png", &fixture_png(64, 64)).unwrap();
        fs::write(store.root().join("bad.png"), b"garbage").unwrap();

        let listing = list(&store, &thumbs, "").unwrap();
        assert_eq!(listing.images.len(), 2);

        let bad = listing
            .images
            .iter()
            .find(|i| i.filename == "bad.png")
            .unwrap();
        assert_eq!((bad.width, bad.height), DEFAULT_DIMENSIONS);
        assert_eq!(bad.thumbnail_path, None);

        let good = listing
            .images
            .iter()
            .find(|i| i.filename == "good.png")
            .unwrap();
        assert_eq!((good.width, good.height), (64, 64));
        assert!(good.thumbnail_path.is_some());
    }

    #[test]
    fn test_recursive_listing_decorates_subtree() {
        let temp = tempdir().unwrap();
        let (store, thumbs) = setup(temp.path());

        store.store_image("a", "one.png", &fixture_png(10, 20)).unwrap();
        store
            .store_image("a/b", "two.png", &fixture_png(30, 40))
            .unwrap();

        let images = list_all_recursive(&store, &thumbs, "").unwrap();
        assert_eq!(images.len(), 2);
        assert!(images.iter().all(|i| i.thumbnail_path.is_some()));
    }
}
