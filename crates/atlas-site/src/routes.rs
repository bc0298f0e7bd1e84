//! Route and permalink construction.
//!
//! A route is the site-internal path a page is served under; a permalink
//! points back at the markdown source in the upstream repository. Both are
//! derived once at catalog build time and never parsed back.

use std::path::Path;

use crate::page::Slug;
use crate::section::Section;

/// Site route for a page.
///
/// The overview page is the site root; every other page lives under its
/// section: `/{section}/{slug}`.
pub fn route(section: Section, slug: &Slug) -> String {
    match section {
        Section::Overview => "/".to_owned(),
        _ => format!("/{}/{slug}", section.id()),
    }
}

/// Permalink for a page's markdown source.
///
/// Joins the configured base with the source path relative to the content
/// root, using `/` separators regardless of platform.
pub fn permalink(base: &str, source_path: &Path) -> String {
    let rel = unix_path(source_path);
    if base.is_empty() {
        rel
    } else if base.ends_with('/') {
        format!("{base}{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

fn unix_path(path: &Path) -> String {
    let parts: Vec<_> = path
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();
    parts.join("/")
}
