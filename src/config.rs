//! Configuration management for the gallery store
//!
//! All settings are immutable once loaded; constructors receive the config
//! explicitly instead of reading ambient state.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Gallery storage configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GalleryConfig {
    /// Root directory holding the canonical uploaded images
    pub upload_dir: String,

    /// Flat directory holding derived thumbnails
    pub thumbnail_dir: String,

    /// Maximum size of a single stored file in MiB
    pub max_upload_mb: u64,

    /// Longest edge of a generated thumbnail in pixels
    pub thumbnail_max_px: u32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            upload_dir: "static/uploads".to_string(),
            thumbnail_dir: "static/thumbnails".to_string(),
            max_upload_mb: 16,
            thumbnail_max_px: 200,
        }
    }
}

impl GalleryConfig {
    /// Load configuration from gallery.toml (optional) with environment
    /// overrides (GALLERY_UPLOAD_DIR, GALLERY_MAX_UPLOAD_MB, ...)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("gallery").required(false))
            .add_source(Environment::with_prefix("GALLERY"))
            .build()?;

        let config: GalleryConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.upload_dir.is_empty() {
            return Err(ConfigError::Message("upload_dir cannot be empty".into()));
        }

        if self.thumbnail_dir.is_empty() {
            return Err(ConfigError::Message("thumbnail_dir cannot be empty".into()));
        }

        if self.upload_dir == self.thumbnail_dir {
            return Err(ConfigError::Message(
                "upload_dir and thumbnail_dir must be distinct".into(),
            ));
        }

        if self.max_upload_mb == 0 {
            return Err(ConfigError::Message(
                "max_upload_mb must be greater than 0".into(),
            ));
        }

        if self.thumbnail_max_px == 0 {
            return Err(ConfigError::Message(
                "thumbnail_max_px must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Get the upload root as a PathBuf
    pub fn upload_root(&self) -> PathBuf {
        PathBuf::from(&self.upload_dir)
    }

    /// Get the thumbnail root as a PathBuf
    pub fn thumbnail_root(&self) -> PathBuf {
        PathBuf::from(&self.thumbnail_dir)
    }

    /// Get the maximum upload size in bytes
    pub fn max_upload_bytes(&self) -> u64 {
        self.max_upload_mb * 1024 * 1024
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GalleryConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_upload_bytes(), 16 * 1024 * 1024);
    }

    #[test]
    fn test_zero_upload_limit_rejected() {
        let config = GalleryConfig {
            max_upload_mb: 0,
            ..GalleryConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_shared_roots_rejected() {
        let config = GalleryConfig {
            upload_dir: "static/files".to_string(),
            thumbnail_dir: "static/files".to_string(),
            ..GalleryConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
