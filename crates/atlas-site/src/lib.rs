//! Site structure and navigation for the Atlas documentation content tree.
//!
//! This crate provides:
//! - [`Catalog`]: sorted page metadata built in one pass over the content tree
//! - [`Site`]: page lookup with fresh body reads, plus navigation assembly
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use atlas_site::{Section, Site, SiteConfig, Slug};
//!
//! let site = Site::open(SiteConfig::new("content"))?;
//!
//! // Navigation tree for the page being viewed
//! let nav = site.nav("/docs/setup");
//!
//! // Load a page body
//! let page = site.page(Section::Docs, &Slug::new(["setup"]));
//! # Ok(())
//! # }
//! ```

mod catalog;
mod config;
mod nav;
mod page;
mod routes;
pub(crate) mod scanner;
mod section;
mod site;

pub use catalog::{Catalog, CatalogError, OVERVIEW_FILE};
pub use config::{DEFAULT_PERMALINK_BASE, SiteConfig};
pub use nav::{NavItem, NavSection, is_active, nav_sections};
pub use page::{Page, PageMeta, Slug};
pub use routes::{permalink, route};
pub use section::Section;
pub use site::Site;

// Re-export the markdown surface so template code needs one import.
pub use atlas_markdown::{Block, Inline, TocEntry, render, toc};
