//! Breadcrumb navigation
//!
//! Pure derivation from a logical path; no I/O and no validation, the path
//! is assumed well-formed.

use serde::Serialize;

/// One step of the navigation trail from the root to the current folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub name: String,
    pub path: String,
}

/// Build the breadcrumb trail for a logical path
///
/// Always starts with the root entry; each segment follows with its
/// cumulative slash-joined path.
pub fn build_breadcrumbs(path: &str) -> Vec<Breadcrumb> {
    let mut crumbs = vec![Breadcrumb {
        name: "Gallery".to_string(),
        path: String::new(),
    }];

    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        return crumbs;
    }

    let mut prefix = String::new();
    for segment in trimmed.split('/') {
        if prefix.is_empty() {
            prefix.push_str(segment);
        } else {
            prefix.push('/');
            prefix.push_str(segment);
        }
        crumbs.push(Breadcrumb {
            name: segment.to_string(),
            path: prefix.clone(),
        });
    }

    crumbs
}
