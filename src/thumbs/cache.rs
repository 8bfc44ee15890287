//! Thumbnail cache operations
//!
//! Thumbnails are created lazily, keyed by a digest of the image's logical
//! path, and never invalidated by source changes; uploads always create new
//! filenames, so a generated thumbnail stays valid until removed.

use log::{info, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::GalleryConfig;

/// Flat, single-level cache of scaled image copies
pub struct ThumbnailCache {
    dir: PathBuf,
    public_prefix: String,
    max_edge: u32,
}

impl ThumbnailCache {
    /// Open the cache, creating its directory if absent
    pub fn new(config: &GalleryConfig) -> io::Result<Self> {
        let dir = config.thumbnail_root();
        fs::create_dir_all(&dir)?;

        let public_prefix = dir
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "thumbnails".to_string());

        Ok(Self {
            dir,
            public_prefix,
            max_edge: config.thumbnail_max_px,
        })
    }

    /// Cache key for an image's logical path
    ///
    /// A digest of the whole path keeps distinct paths collision-free; the
    /// trailing filename keeps the cache directory human-readable and gives
    /// the saved file its encoding extension.
    pub fn key_for(relative_path: &str) -> String {
        let digest = md5::compute(relative_path.as_bytes());
        let filename = relative_path.rsplit('/').next().unwrap_or(relative_path);
        format!("{:x}-{}", digest, filename)
    }

    /// Ensure a thumbnail exists for a source image
    ///
    /// Returns the cache-relative path of the existing or newly created
    /// thumbnail, or None when the source cannot be decoded. Decode failures
    /// are logged and never propagate; the caller falls back to the full
    /// image.
    pub fn ensure(&self, source: &Path, relative_path: &str) -> Option<String> {
        let key = Self::key_for(relative_path);
        let target = self.dir.join(&key);

        if !target.exists() {
            let img = match image::open(source) {
                Ok(img) => img,
                Err(e) => {
                    warn!("Cannot decode {} for thumbnailing: {}", relative_path, e);
                    return None;
                }
            };

            let thumbnail = img.thumbnail(self.max_edge, self.max_edge);
            if let Err(e) = thumbnail.save(&target) {
                warn!("Failed to save thumbnail for {}: {}", relative_path, e);
                // Don't leave a partial file behind
                let _ = fs::remove_file(&target);
                return None;
            }

            info!("Created thumbnail {} for {}", key, relative_path);
        }

        Some(format!("{}/{}", self.public_prefix, key))
    }

    /// Remove the thumbnail for a logical path; no error if absent
    pub fn remove(&self, relative_path: &str) {
        let target = self.dir.join(Self::key_for(relative_path));
        match fs::remove_file(&target) {
            Ok(()) => info!("Removed thumbnail for {}", relative_path),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!("Failed to remove thumbnail for {}: {}", relative_path, e),
        }
    }

    /// True when a thumbnail exists for a logical path
    pub fn exists(&self, relative_path: &str) -> bool {
        self.dir.join(Self::key_for(relative_path)).is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn test_cache(root: &Path) -> ThumbnailCache {
        let config = GalleryConfig {
            upload_dir: root.join("uploads").to_string_lossy().to_string(),
            thumbnail_dir: root.join("thumbnails").to_string_lossy().to_string(),
            ..GalleryConfig::default()
        };
        ThumbnailCache::new(&config).unwrap()
    }

    fn write_png(path: &Path, width: u32, height: u32) {
        let img = image::RgbaImage::new(width, height);
        let mut bytes = Cursor::new(Vec::new());
        img.write_to(&mut bytes, image::ImageFormat::Png).unwrap();
        fs::write(path, bytes.into_inner()).unwrap();
    }

    #[test]
    fn test_keys_do_not_collide_across_separator_placement() {
        // "a/b" + "c.png" vs "a" + "b_c.png" collided under the old
        // slash-to-underscore flattening
        assert_ne!(
            ThumbnailCache::key_for("a/b/c.png"),
            ThumbnailCache::key_for("a/b_c.png")
        );
    }

    #[test]
    fn test_ensure_creates_and_is_idempotent() {
        let temp = tempdir().unwrap();
        let cache = test_cache(temp.path());

        let source = temp.path().join("wide.png");
        write_png(&source, 400, 100);

        let first = cache.ensure(&source, "album/wide.png").unwrap();
        assert!(cache.exists("album/wide.png"));

        let second = cache.ensure(&source, "album/wide.png").unwrap();
        assert_eq!(first, second);

        // Aspect ratio preserved within the bounding box
        let key = ThumbnailCache::key_for("album/wide.png");
        let (w, h) = image::image_dimensions(temp.path().join("thumbnails").join(key)).unwrap();
        assert_eq!((w, h), (200, 50));
    }

    #[test]
    fn test_ensure_tolerates_undecodable_source() {
        let temp = tempdir().unwrap();
        let cache = test_cache(temp.path());

        let source = temp.path().join("broken.png");
        fs::write(&source, b"not an image at all").unwrap();

        assert_eq!(cache.ensure(&source, "broken.png"), None);
        assert!(!cache.exists("broken.png"));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let temp = tempdir().unwrap();
        let cache = test_cache(temp.path());

        let source = temp.path().join("cat.png");
        write_png(&source, 10, 10);
        cache.ensure(&source, "cat.png").unwrap();

        cache.remove("cat.png");
        assert!(!cache.exists("cat.png"));
        // Second removal is a no-op
        cache.remove("cat.png");
    }
}
