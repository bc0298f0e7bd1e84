//! Page identity and metadata.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::section::Section;

/// Path segments identifying a page within its section, extension stripped.
///
/// The overview page is the empty slug. Segments are taken verbatim from the
/// source tree; they are not normalized or slugified.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Slug(Vec<String>);

impl Slug {
    /// Build a slug from explicit segments.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// The empty slug of the overview page.
    #[must_use]
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Derive a slug from a path relative to its section root.
    pub(crate) fn from_rel_path(path: &Path) -> Self {
        let mut segments = Vec::new();
        if let Some(parent) = path.parent() {
            for component in parent.components() {
                if let Component::Normal(part) = component {
                    segments.push(part.to_string_lossy().into_owned());
                }
            }
        }
        if let Some(stem) = path.file_stem() {
            segments.push(stem.to_string_lossy().into_owned());
        }
        Self(segments)
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("/"))
    }
}

/// Catalog entry for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub section: Section,
    pub title: String,
    pub slug: Slug,
    /// Source location relative to the content root.
    pub source_path: PathBuf,
    /// Stable external URL of the canonical source.
    pub permalink: String,
}

impl PageMeta {
    /// Site route this page is served under.
    #[must_use]
    pub fn route(&self) -> String {
        crate::routes::route(self.section, &self.slug)
    }
}

/// A page with its body loaded.
///
/// The body is read fresh per lookup and has front matter stripped; only the
/// metadata is held for the catalog's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub meta: PageMeta,
    pub body: String,
}
