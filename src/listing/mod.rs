//! Directory listings
//!
//! Composes the asset store and the thumbnail cache into presentation-ready
//! listings, and derives breadcrumb navigation from logical paths.

mod breadcrumbs;
mod operations;

pub use breadcrumbs::{Breadcrumb, build_breadcrumbs};
pub use operations::{Listing, list, list_all_recursive, read_dimensions};
