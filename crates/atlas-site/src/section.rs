//! Top-level content sections.

use std::fmt;

use serde::Serialize;

/// The four fixed groupings of site content.
///
/// Declaration order is both the navigation display order and the catalog
/// sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// The single page read from the root overview file.
    Overview,
    Docs,
    Hardware,
    Software,
}

impl Section {
    /// All sections in navigation display order.
    pub const DISPLAY_ORDER: [Section; 4] = [
        Section::Overview,
        Section::Docs,
        Section::Hardware,
        Section::Software,
    ];

    /// Stable identifier used in routes and serialized output.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Section::Overview => "overview",
            Section::Docs => "docs",
            Section::Hardware => "hardware",
            Section::Software => "software",
        }
    }

    /// Human-readable navigation label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::Docs => "Docs",
            Section::Hardware => "Hardware",
            Section::Software => "Software",
        }
    }

    /// Directory under the content root holding this section's files.
    /// Overview has none; it is a single file at the root.
    #[must_use]
    pub fn dir_name(self) -> Option<&'static str> {
        match self {
            Section::Overview => None,
            Section::Docs => Some("docs"),
            Section::Hardware => Some("hardware"),
            Section::Software => Some("software"),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_order_starts_at_overview() {
        assert_eq!(Section::DISPLAY_ORDER[0], Section::Overview);
        assert_eq!(Section::DISPLAY_ORDER.len(), 4);
    }

    #[test]
    fn test_sort_order_matches_display_order() {
        let mut sorted = Section::DISPLAY_ORDER;
        sorted.sort();
        assert_eq!(sorted, Section::DISPLAY_ORDER);
    }

    #[test]
    fn test_only_overview_lacks_a_directory() {
        for section in Section::DISPLAY_ORDER {
            assert_eq!(
                section.dir_name().is_none(),
                section == Section::Overview,
                "{section} directory mapping"
            );
        }
    }

    #[test]
    fn test_serializes_as_lowercase_id() {
        let json = serde_json::to_value(Section::Hardware).unwrap();
        assert_eq!(json, "hardware");
    }
}
