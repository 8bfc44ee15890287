//! Error handling
//!
//! Defines error types and handling for the gallery store.

pub mod handlers;
pub mod types;

pub use types::*;
