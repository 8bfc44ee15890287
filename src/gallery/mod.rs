//! Gallery facade
//!
//! The operation surface consumed by the request layer: browsing, uploads,
//! folder management, name pre-checks and recursive image queries.

mod results;
mod service;

pub use results::{BrowsePage, ImageDetails, ImageSet, NameCheck, UploadFile, UploadOutcome};
pub use service::Gallery;
