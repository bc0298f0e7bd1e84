//! Site configuration.

use std::path::PathBuf;

/// Base URL the default configuration points permalinks at.
pub const DEFAULT_PERMALINK_BASE: &str = "https://github.com/atlas-docs/atlas/blob/main/";

/// Where the content lives and how permalinks are formed.
///
/// This is the whole configuration surface; nothing is read from the
/// environment.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Directory containing the overview file and the section directories.
    pub root: PathBuf,
    /// Prefix joined with a page's relative source path to form its
    /// permalink.
    pub permalink_base: String,
    /// Title given to the overview page when its file has no heading.
    pub overview_title: String,
}

impl SiteConfig {
    /// Configuration with defaults for everything but the content root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("content"),
            permalink_base: DEFAULT_PERMALINK_BASE.to_owned(),
            overview_title: "Overview".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_defaults_for_other_fields() {
        let config = SiteConfig::new("/srv/content");
        assert_eq!(config.root, PathBuf::from("/srv/content"));
        assert_eq!(config.permalink_base, DEFAULT_PERMALINK_BASE);
        assert_eq!(config.overview_title, "Overview");
    }
}
