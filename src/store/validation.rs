//! Logical-path validation
//!
//! Maps caller-supplied logical paths onto the storage root and rejects
//! anything that could escape it. Runs on every lookup, not only on folder
//! creation, as defense in depth behind the folder-name validator.

use std::path::{Path, PathBuf};

use crate::error::StorageError;

/// Normalize a logical path: strip leading/trailing separators
///
/// The empty string denotes the store root.
pub fn normalize_path(path: &str) -> String {
    path.trim_matches('/').to_string()
}

/// Join a logical folder path and a child name with forward slashes
pub fn join_logical(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", path, name)
    }
}

/// True when a segment sticks to the folder-name alphabet
fn is_safe_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_'))
}

/// True when a filename is safe to resolve inside a folder
///
/// Looser than the folder alphabet (dots are part of extensions), but still
/// rejects anything that could alter the resolved directory.
fn is_safe_filename(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', ':', '\0'])
}

/// Split a logical folder path into validated segments
pub fn split_segments(path: &str) -> Result<Vec<&str>, StorageError> {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let mut segments = Vec::new();
    for segment in trimmed.split('/') {
        if segment == ".." || segment.contains(['\\', ':']) {
            return Err(StorageError::PathTraversal(path.to_string()));
        }
        if !is_safe_segment(segment) {
            return Err(StorageError::InvalidPath(path.to_string()));
        }
        segments.push(segment);
    }

    Ok(segments)
}

/// Resolve a logical folder path to a real path under the root
pub fn resolve_dir(root: &Path, path: &str) -> Result<PathBuf, StorageError> {
    let mut real = root.to_path_buf();
    for segment in split_segments(path)? {
        real.push(segment);
    }
    Ok(real)
}

/// Resolve a root-relative image path to (real path, normalized logical path)
pub fn resolve_file(root: &Path, relative_path: &str) -> Result<(PathBuf, String), StorageError> {
    let trimmed = relative_path.trim_matches('/');
    if trimmed.is_empty() {
        return Err(StorageError::InvalidPath(relative_path.to_string()));
    }

    let (folder, filename) = match trimmed.rsplit_once('/') {
        Some((folder, filename)) => (folder, filename),
        None => ("", trimmed),
    };

    if filename == ".." || filename.contains('\\') {
        return Err(StorageError::PathTraversal(relative_path.to_string()));
    }
    if !is_safe_filename(filename) {
        return Err(StorageError::InvalidPath(relative_path.to_string()));
    }

    let real = resolve_dir(root, folder)?.join(filename);
    Ok((real, join_logical(&normalize_path(folder), filename)))
}

/// Reduce an uploaded filename to a safe basename
///
/// Strips any path components the client sent along, then drops every
/// character outside the storage alphabet. Returns None when nothing safe
/// remains.
pub fn sanitize_filename(filename: &str) -> Option<String> {
    let basename = filename.rsplit(['/', '\\']).next().unwrap_or("");

    let cleaned: String = basename
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_' | ' '))
        .collect();
    let cleaned = cleaned.trim().trim_start_matches('.').to_string();

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/a/b/"), "a/b");
        assert_eq!(normalize_path(""), "");
        assert_eq!(normalize_path("/"), "");
    }

    #[test]
    fn test_split_segments_accepts_valid_paths() {
        assert_eq!(split_segments("").unwrap(), Vec::<&str>::new());
        assert_eq!(split_segments("a/b c/d_e").unwrap(), vec!["a", "b c", "d_e"]);
    }

    #[test]
    fn test_split_segments_rejects_traversal() {
        assert!(matches!(
            split_segments("../etc"),
            Err(StorageError::PathTraversal(_))
        ));
        assert!(matches!(
            split_segments("a/../b"),
            Err(StorageError::PathTraversal(_))
        ));
        assert!(matches!(
            split_segments("a\\b"),
            Err(StorageError::PathTraversal(_))
        ));
        assert!(matches!(
            split_segments("C:/windows"),
            Err(StorageError::PathTraversal(_))
        ));
    }

    #[test]
    fn test_split_segments_rejects_bad_characters() {
        assert!(matches!(
            split_segments("a//b"),
            Err(StorageError::InvalidPath(_))
        ));
        assert!(matches!(
            split_segments("dots.in.folder"),
            Err(StorageError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_resolve_file_splits_folder_and_name() {
        let root = Path::new("/store");
        let (real, logical) = resolve_file(root, "a/b/cat.png").unwrap();
        assert_eq!(real, Path::new("/store/a/b/cat.png"));
        assert_eq!(logical, "a/b/cat.png");

        let (real, logical) = resolve_file(root, "cat.png").unwrap();
        assert_eq!(real, Path::new("/store/cat.png"));
        assert_eq!(logical, "cat.png");
    }

    #[test]
    fn test_resolve_file_rejects_escapes() {
        let root = Path::new("/store");
        assert!(resolve_file(root, "../cat.png").is_err());
        assert!(resolve_file(root, "a/..").is_err());
        assert!(resolve_file(root, "").is_err());
    }

    #[test]
    fn test_sanitize_filename_strips_path_components() {
        assert_eq!(
            sanitize_filename("../../etc/evil.png"),
            Some("evil.png".to_string())
        );
        assert_eq!(
            sanitize_filename("C:\\photos\\cat.jpg"),
            Some("cat.jpg".to_string())
        );
        assert_eq!(sanitize_filename("plain.gif"), Some("plain.gif".to_string()));
    }

    #[test]
    fn test_sanitize_filename_rejects_empty_results() {
        assert_eq!(sanitize_filename(""), None);
        assert_eq!(sanitize_filename("../.."), None);
        assert_eq!(sanitize_filename("???"), None);
    }
}
