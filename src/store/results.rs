//! Storage result records
//!
//! Presentation-ready records derived fresh from the filesystem on every
//! listing call; nothing here is persisted.

use serde::Serialize;

/// Dimensions reported when an image cannot be decoded
pub const DEFAULT_DIMENSIONS: (u32, u32) = (800, 600);

/// A subfolder of a listed path, with its recursive image count
#[derive(Debug, Clone, Serialize)]
pub struct FolderEntry {
    pub name: String,
    pub path: String,
    pub image_count: usize,
}

/// A stored image
///
/// `thumbnail_path` is absent until the lister has ensured a thumbnail, and
/// stays absent when the source cannot be decoded. Dimensions start at the
/// defaults and are overwritten once the header has been read.
#[derive(Debug, Clone, Serialize)]
pub struct ImageEntry {
    pub filename: String,
    pub relative_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_path: Option<String>,
    pub full_image_path: String,
    pub width: u32,
    pub height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
}

impl ImageEntry {
    pub(crate) fn new(filename: String, relative_path: String, public_prefix: &str) -> Self {
        let folder = relative_path
            .rsplit_once('/')
            .map(|(parent, _)| parent.rsplit('/').next().unwrap_or(parent).to_string());
        let full_image_path = format!("{}/{}", public_prefix, relative_path);

        Self {
            filename,
            relative_path,
            thumbnail_path: None,
            full_image_path,
            width: DEFAULT_DIMENSIONS.0,
            height: DEFAULT_DIMENSIONS.1,
            folder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_derives_parent_folder() {
        let entry = ImageEntry::new("c.png".to_string(), "a/b/c.png".to_string(), "uploads");
        assert_eq!(entry.folder.as_deref(), Some("b"));
        assert_eq!(entry.full_image_path, "uploads/a/b/c.png");

        let root_entry = ImageEntry::new("c.png".to_string(), "c.png".to_string(), "uploads");
        assert_eq!(root_entry.folder, None);
    }

    #[test]
    fn test_entry_serializes_presentation_fields() {
        let entry = ImageEntry::new("c.png".to_string(), "a/c.png".to_string(), "uploads");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["relative_path"], "a/c.png");
        assert_eq!(json["width"], 800);
        assert_eq!(json["height"], 600);
        // No thumbnail yet, so the field is omitted entirely
        assert!(json.get("thumbnail_path").is_none());
    }
}
