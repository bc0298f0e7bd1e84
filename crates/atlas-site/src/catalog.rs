//! Building and querying the page catalog.
//!
//! The catalog is the complete, sorted list of page metadata built in one
//! pass over the content tree. Building reads each file once to extract its
//! title; bodies are not kept. A file that cannot be read or carries
//! malformed front matter is logged and skipped so one bad page never takes
//! down the whole catalog. The only build failure is a slug collision, which
//! means the content tree itself is ambiguous.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use tracing::{debug, warn};

use atlas_markdown::front_matter;

use crate::config::SiteConfig;
use crate::page::{PageMeta, Slug};
use crate::routes;
use crate::scanner;
use crate::section::Section;

/// File at the content root serving as the overview page.
pub const OVERVIEW_FILE: &str = "README.md";

static H1_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#[ \t]+(.+)$").unwrap());
static H2_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^##[ \t]+(.+)$").unwrap());

/// Failure to construct a [`Catalog`].
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two source files map to the same section and slug.
    #[error("slug collision in section {}: `{}` is claimed by both {} and {}", .section, .slug, .first.display(), .second.display())]
    SlugCollision {
        section: Section,
        slug: Slug,
        first: PathBuf,
        second: PathBuf,
    },
}

/// Sorted page metadata for the whole site.
///
/// Entries are ordered by section (display order) and then by slug segments,
/// so listings need no further sorting and lookups can binary search.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<PageMeta>,
}

impl Catalog {
    /// Scan the content tree and build the catalog.
    ///
    /// Missing section directories (and a missing overview file) simply
    /// contribute no pages.
    pub fn build(config: &SiteConfig) -> Result<Self, CatalogError> {
        let mut entries = Vec::new();

        if let Some(overview) = load_overview(config) {
            entries.push(overview);
        }
        for section in Section::DISPLAY_ORDER {
            let Some(dir_name) = section.dir_name() else {
                continue;
            };
            let section_dir = config.root.join(dir_name);
            if !section_dir.exists() {
                debug!(section = %section, "section directory missing, contributing no pages");
                continue;
            }
            for rel_path in scanner::scan_markdown(&section_dir) {
                if let Some(meta) = load_page(config, section, dir_name, &rel_path) {
                    entries.push(meta);
                }
            }
        }

        entries.sort_by(|a, b| (a.section, &a.slug).cmp(&(b.section, &b.slug)));
        if let Some(pair) = entries
            .windows(2)
            .find(|pair| pair[0].section == pair[1].section && pair[0].slug == pair[1].slug)
        {
            return Err(CatalogError::SlugCollision {
                section: pair[0].section,
                slug: pair[0].slug.clone(),
                first: pair[0].source_path.clone(),
                second: pair[1].source_path.clone(),
            });
        }

        debug!(pages = entries.len(), "catalog built");
        Ok(Self { entries })
    }

    /// All pages in catalog order.
    #[must_use]
    pub fn pages(&self) -> &[PageMeta] {
        &self.entries
    }

    /// The contiguous run of pages belonging to one section.
    #[must_use]
    pub fn pages_in(&self, section: Section) -> &[PageMeta] {
        let start = self.entries.partition_point(|m| m.section < section);
        let end = self.entries.partition_point(|m| m.section <= section);
        &self.entries[start..end]
    }

    /// Look up one page by section and slug.
    #[must_use]
    pub fn find(&self, section: Section, slug: &Slug) -> Option<&PageMeta> {
        self.entries
            .binary_search_by(|m| (m.section, &m.slug).cmp(&(section, slug)))
            .ok()
            .map(|index| &self.entries[index])
    }
}

fn load_overview(config: &SiteConfig) -> Option<PageMeta> {
    let source_path = PathBuf::from(OVERVIEW_FILE);
    let file_path = config.root.join(&source_path);
    if !file_path.exists() {
        debug!(path = %file_path.display(), "no overview file");
        return None;
    }
    let body = read_body(&file_path)?;
    let title = extract_title(&body).unwrap_or_else(|| config.overview_title.clone());
    let permalink = routes::permalink(&config.permalink_base, &source_path);
    Some(PageMeta {
        section: Section::Overview,
        title,
        slug: Slug::root(),
        source_path,
        permalink,
    })
}

fn load_page(
    config: &SiteConfig,
    section: Section,
    dir_name: &str,
    rel_path: &Path,
) -> Option<PageMeta> {
    let source_path = Path::new(dir_name).join(rel_path);
    let body = read_body(&config.root.join(&source_path))?;
    let title = extract_title(&body).unwrap_or_else(|| file_stem_title(rel_path));
    let slug = Slug::from_rel_path(rel_path);
    let permalink = routes::permalink(&config.permalink_base, &source_path);
    Some(PageMeta {
        section,
        title,
        slug,
        source_path,
        permalink,
    })
}

/// Read a page body with front matter removed, or log and skip.
fn read_body(path: &Path) -> Option<String> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(error) => {
            warn!(path = %path.display(), error = %error, "skipping unreadable page");
            return None;
        }
    };
    match front_matter::strip(&text) {
        Ok(body) => Some(body.to_owned()),
        Err(error) => {
            warn!(path = %path.display(), error = %error, "skipping page with malformed front matter");
            None
        }
    }
}

/// First H1 text, else first H2 text, trimmed.
fn extract_title(body: &str) -> Option<String> {
    let caps = H1_RE.captures(body).or_else(|| H2_RE.captures(body))?;
    Some(caps[1].trim().to_owned())
}

fn file_stem_title(rel_path: &Path) -> String {
    rel_path
        .file_stem()
        .map_or_else(String::new, |stem| stem.to_string_lossy().into_owned())
}
