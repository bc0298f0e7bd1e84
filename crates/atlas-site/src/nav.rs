//! Navigation tree assembly.
//!
//! Navigation is recomputed per request against the current route; only the
//! active flags differ between requests, so the shape is a plain serializable
//! value rather than anything cached.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::page::PageMeta;
use crate::section::Section;

/// One link in the navigation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub title: String,
    pub route: String,
    pub active: bool,
}

/// One titled group of navigation links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavSection {
    pub id: &'static str,
    pub label: &'static str,
    pub items: Vec<NavItem>,
}

/// Assemble the navigation tree in fixed section order.
///
/// Sections without pages are omitted, except the overview section which is
/// always present even when its page is missing.
#[must_use]
pub fn nav_sections(catalog: &Catalog, current_route: &str) -> Vec<NavSection> {
    Section::DISPLAY_ORDER
        .iter()
        .filter_map(|&section| {
            let pages = catalog.pages_in(section);
            if pages.is_empty() && section != Section::Overview {
                return None;
            }
            Some(NavSection {
                id: section.id(),
                label: section.label(),
                items: pages
                    .iter()
                    .map(|meta| nav_item(meta, current_route))
                    .collect(),
            })
        })
        .collect()
}

/// Whether `current_route` is `page_route` itself or a descendant of it.
///
/// Descendance is segment-bounded: `/docs/a` is active while `/docs/a/b` is
/// shown, but not while `/docs/ab` is. The root route only matches exactly,
/// since every route would otherwise descend from it.
#[must_use]
pub fn is_active(page_route: &str, current_route: &str) -> bool {
    page_route == current_route
        || current_route
            .strip_prefix(page_route)
            .is_some_and(|rest| rest.starts_with('/'))
}

fn nav_item(meta: &PageMeta, current_route: &str) -> NavItem {
    let route = meta.route();
    let active = is_active(&route, current_route);
    NavItem {
        title: meta.title.clone(),
        route,
        active,
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use pretty_assertions::assert_eq;

    use crate::config::SiteConfig;

    use super::*;

    fn write_file(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn sample_catalog(root: &Path) -> Catalog {
        write_file(root, "README.md", "# Home\n");
        write_file(root, "docs/a/b.md", "# Guide b\n");
        write_file(root, "docs/guide.md", "# Guide\n");
        write_file(root, "software/kernel.md", "# Kernel\n");
        Catalog::build(&SiteConfig::new(root)).unwrap()
    }

    #[test]
    fn test_sections_follow_display_order_and_skip_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let catalog = sample_catalog(temp_dir.path());

        let sections = nav_sections(&catalog, "/");

        let ids: Vec<_> = sections.iter().map(|s| s.id).collect();
        // No hardware pages, so no hardware section.
        assert_eq!(ids, vec!["overview", "docs", "software"]);
    }

    #[test]
    fn test_overview_section_survives_missing_overview_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_file(temp_dir.path(), "docs/only.md", "# Only\n");
        let catalog = Catalog::build(&SiteConfig::new(temp_dir.path())).unwrap();

        let sections = nav_sections(&catalog, "/docs/only");

        assert_eq!(sections[0].id, "overview");
        assert!(sections[0].items.is_empty());
    }

    #[test]
    fn test_exact_route_is_active() {
        let temp_dir = tempfile::tempdir().unwrap();
        let catalog = sample_catalog(temp_dir.path());

        let sections = nav_sections(&catalog, "/docs/guide");

        let docs = sections.iter().find(|s| s.id == "docs").unwrap();
        let guide = docs.items.iter().find(|i| i.route == "/docs/guide").unwrap();
        assert!(guide.active);
        let nested = docs.items.iter().find(|i| i.route == "/docs/a/b").unwrap();
        assert!(!nested.active);
    }

    #[test]
    fn test_descendant_must_be_segment_bounded() {
        assert!(is_active("/docs/a", "/docs/a/b"));
        assert!(is_active("/docs/a", "/docs/a/b/c"));
        assert!(!is_active("/docs/a", "/docs/ab"));
        assert!(!is_active("/docs/a/b", "/docs/a"));
    }

    #[test]
    fn test_root_route_is_exact_only() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/docs/guide"));
    }

    #[test]
    fn test_items_carry_catalog_titles() {
        let temp_dir = tempfile::tempdir().unwrap();
        let catalog = sample_catalog(temp_dir.path());

        let sections = nav_sections(&catalog, "/");

        let overview = &sections[0];
        assert_eq!(overview.items.len(), 1);
        assert_eq!(overview.items[0].title, "Home");
        assert_eq!(overview.items[0].route, "/");
        assert!(overview.items[0].active);
    }

    #[test]
    fn test_serializes_for_templates() {
        let temp_dir = tempfile::tempdir().unwrap();
        let catalog = sample_catalog(temp_dir.path());

        let json = serde_json::to_value(nav_sections(&catalog, "/docs/a/b")).unwrap();

        assert_eq!(json[1]["id"], "docs");
        assert_eq!(json[1]["label"], "Docs");
        assert_eq!(json[1]["items"][0]["route"], "/docs/a/b");
        assert_eq!(json[1]["items"][0]["active"], true);
    }
}
