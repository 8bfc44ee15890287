//! Thumbnail cache
//!
//! Derived, disposable scaled copies of stored images. Losing the cache costs
//! recomputation only; the canonical bytes live in the asset store.

mod cache;

pub use cache::ThumbnailCache;
