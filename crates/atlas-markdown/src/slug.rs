//! Anchor id generation for headings.

use std::collections::HashMap;

/// Turn heading text into a URL-fragment-safe anchor id.
///
/// Lowercases the text, drops every character that is not an ASCII word
/// character, whitespace, or hyphen, trims the ends, then collapses each
/// whitespace run into a single hyphen. Existing hyphens pass through
/// untouched, so the transform is idempotent.
///
/// # Examples
///
/// ```
/// use atlas_markdown::slugify;
///
/// assert_eq!(slugify("Section One"), "section-one");
/// assert_eq!(slugify("What's New?"), "whats-new");
/// assert_eq!(slugify("pre-built images"), "pre-built-images");
/// ```
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let kept: String = lowered
        .chars()
        .filter(|&c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c.is_whitespace())
        .collect();

    let trimmed = kept.trim();
    let mut slug = String::with_capacity(trimmed.len());
    let mut gap = false;
    for c in trimmed.chars() {
        if c.is_whitespace() {
            gap = true;
        } else {
            if gap {
                slug.push('-');
                gap = false;
            }
            slug.push(c);
        }
    }
    slug
}

/// Assigns unique anchor ids within a single document.
///
/// Repeated heading text gets a numeric suffix in document order: `setup`,
/// `setup-1`, `setup-2`. One allocator must see every heading the document
/// will expose so that independently computed outlines stay in agreement.
#[derive(Debug, Default)]
pub struct IdAllocator {
    counts: HashMap<String, usize>,
}

impl IdAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Slugify `text` and return an id unused so far in this document.
    pub fn assign(&mut self, text: &str) -> String {
        let base = slugify(text);
        let seen = self.counts.entry(base.clone()).or_insert(0);
        *seen += 1;
        if *seen == 1 {
            base
        } else {
            format!("{base}-{}", *seen - 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Section One"), "section-one");
    }

    #[test]
    fn test_slugify_lowercases() {
        assert_eq!(slugify("API Reference"), "api-reference");
    }

    #[test]
    fn test_slugify_strips_punctuation() {
        assert_eq!(slugify("What's New?"), "whats-new");
        assert_eq!(slugify("Hello, World!"), "hello-world");
    }

    #[test]
    fn test_slugify_keeps_underscores() {
        assert_eq!(slugify("snake_case name"), "snake_case-name");
    }

    #[test]
    fn test_slugify_keeps_existing_hyphens() {
        assert_eq!(slugify("pre-built"), "pre-built");
        assert_eq!(slugify("a - b"), "a---b");
    }

    #[test]
    fn test_slugify_collapses_whitespace_runs() {
        assert_eq!(slugify("a   b"), "a-b");
        assert_eq!(slugify("tab\tseparated"), "tab-separated");
    }

    #[test]
    fn test_slugify_trims_ends() {
        assert_eq!(slugify("  padded  "), "padded");
    }

    #[test]
    fn test_slugify_drops_non_ascii() {
        assert_eq!(slugify("café"), "caf");
    }

    #[test]
    fn test_slugify_digits() {
        assert_eq!(slugify("Version 2 Notes"), "version-2-notes");
    }

    #[test]
    fn test_slugify_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("???"), "");
    }

    #[test]
    fn test_slugify_idempotent() {
        for input in [
            "Section One",
            "What's New?",
            "a - b",
            "snake_case name",
            "  padded  ",
            "Version 2 Notes",
            "café au lait",
        ] {
            let once = slugify(input);
            assert_eq!(slugify(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_allocator_suffixes_duplicates() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.assign("FAQ"), "faq");
        assert_eq!(ids.assign("FAQ"), "faq-1");
        assert_eq!(ids.assign("FAQ"), "faq-2");
    }

    #[test]
    fn test_allocator_tracks_bases_independently() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.assign("Setup"), "setup");
        assert_eq!(ids.assign("Usage"), "usage");
        assert_eq!(ids.assign("Setup"), "setup-1");
        assert_eq!(ids.assign("Usage"), "usage-1");
    }

    #[test]
    fn test_allocator_collides_on_slug_not_text() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.assign("Getting Started"), "getting-started");
        assert_eq!(ids.assign("getting started!"), "getting-started-1");
    }
}
