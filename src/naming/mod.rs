//! Folder-name validation
//!
//! Enforces the naming rules for user-supplied folder names, both on folder
//! creation and for real-time pre-checks before a mutating operation runs.

mod validator;

pub use validator::{MAX_NAME_LENGTH, validate_folder_name};
