//! Top-level access to a built site.

use std::fs;

use tracing::warn;

use atlas_markdown::front_matter;

use crate::catalog::{Catalog, CatalogError};
use crate::config::SiteConfig;
use crate::nav::{self, NavSection};
use crate::page::{Page, PageMeta, Slug};
use crate::section::Section;

/// A content tree with its catalog built.
///
/// The catalog is fixed at open time; page bodies are read fresh on every
/// lookup so body edits show up without a rebuild.
#[derive(Debug, Clone)]
pub struct Site {
    config: SiteConfig,
    catalog: Catalog,
}

impl Site {
    /// Build the catalog for `config` and wrap it for serving.
    pub fn open(config: SiteConfig) -> Result<Self, CatalogError> {
        let catalog = Catalog::build(&config)?;
        Ok(Self { config, catalog })
    }

    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Page listing, optionally narrowed to one section.
    #[must_use]
    pub fn pages(&self, section: Option<Section>) -> &[PageMeta] {
        match section {
            Some(section) => self.catalog.pages_in(section),
            None => self.catalog.pages(),
        }
    }

    /// Load one page with its current body.
    ///
    /// Returns `None` for slugs the catalog does not know, and for cataloged
    /// pages whose file has since become unreadable. A body whose front
    /// matter no longer parses is served as-is rather than dropped.
    #[must_use]
    pub fn page(&self, section: Section, slug: &Slug) -> Option<Page> {
        let meta = self.catalog.find(section, slug)?;
        let path = self.config.root.join(&meta.source_path);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(error) => {
                warn!(path = %path.display(), error = %error, "cataloged page is unreadable");
                return None;
            }
        };
        let stripped = front_matter::strip(&text).map(str::to_owned);
        let body = match stripped {
            Ok(body) => body,
            Err(error) => {
                warn!(path = %path.display(), error = %error, "serving body with front matter left in place");
                text
            }
        };
        Some(Page {
            meta: meta.clone(),
            body,
        })
    }

    /// Navigation tree with active flags for `current_route`.
    #[must_use]
    pub fn nav(&self, current_route: &str) -> Vec<NavSection> {
        nav::nav_sections(&self.catalog, current_route)
    }
}
