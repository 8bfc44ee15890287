//! Folder-name validation rules
//!
//! Rules are applied in order and the first failure wins.

use crate::error::NameError;

/// Maximum length of a folder name after trimming
pub const MAX_NAME_LENGTH: usize = 100;

/// Names reserved by legacy filesystems, rejected case-insensitively
const RESERVED_NAMES: [&str; 22] = [
    "con", "prn", "aux", "nul", "com1", "com2", "com3", "com4", "com5", "com6", "com7", "com8",
    "com9", "lpt1", "lpt2", "lpt3", "lpt4", "lpt5", "lpt6", "lpt7", "lpt8", "lpt9",
];

/// Validate a user-supplied folder name, returning the trimmed name on success
///
/// The character rule implicitly forbids path separators, `..` segments and
/// control characters.
pub fn validate_folder_name(name: &str) -> Result<String, NameError> {
    let name = name.trim();

    if name.is_empty() {
        return Err(NameError::Empty);
    }

    let length = name.chars().count();
    if length > MAX_NAME_LENGTH {
        return Err(NameError::TooLong(length));
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_'))
    {
        return Err(NameError::InvalidCharacters);
    }

    if RESERVED_NAMES.contains(&name.to_ascii_lowercase().as_str()) {
        return Err(NameError::Reserved(name.to_string()));
    }

    Ok(name.to_string())
}
