//! Heading outline extraction.

use std::sync::LazyLock;

use regex::Regex;

use crate::slug::IdAllocator;

static IMAGE_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\([^)]*\)").unwrap());
static LINK_LABEL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\([^)]*\)").unwrap());

/// One entry of a page outline.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TocEntry {
    /// Heading level, always 2 through 6.
    pub level: u8,
    /// Heading text reduced to plain form.
    pub text: String,
    /// Anchor id the rendered page exposes for this heading.
    pub id: String,
}

/// Extract the table of contents from a markdown body.
///
/// Scans line by line for ATX headings of level 2 through 6, in document
/// order. Level 1 is the page title and never appears in the outline. Lines
/// inside fenced code blocks are ignored. Anchor ids use the same transform
/// and duplicate suffixing as [`render`](crate::render), so outline links hit
/// the rendered anchors.
pub fn toc(body: &str) -> Vec<TocEntry> {
    let mut entries = Vec::new();
    let mut ids = IdAllocator::new();
    let mut fence: Option<(char, usize)> = None;

    for line in body.lines() {
        if let Some((marker, len)) = fence {
            if closes_fence(line, marker, len) {
                fence = None;
            }
            continue;
        }
        if let Some(open) = fence_open(line) {
            fence = Some(open);
            continue;
        }
        let Some((level, raw)) = heading_line(line) else {
            continue;
        };
        let text = display_text(raw);
        if text.is_empty() {
            continue;
        }
        let id = ids.assign(&text);
        entries.push(TocEntry { level, text, id });
    }
    entries
}

/// Strip the up-to-three spaces of indentation a block marker may carry.
/// Four or more spaces mean an indented code block.
fn strip_indent(line: &str) -> Option<&str> {
    let trimmed = line.trim_start_matches(' ');
    (line.len() - trimmed.len() <= 3).then_some(trimmed)
}

fn heading_line(line: &str) -> Option<(u8, &str)> {
    let rest = strip_indent(line)?;
    let level = rest.chars().take_while(|&c| c == '#').count();
    if !(2..=6).contains(&level) {
        return None;
    }
    let text = rest[level..].strip_prefix([' ', '\t'])?;
    Some((u8::try_from(level).ok()?, strip_closing_hashes(text)))
}

/// Remove an ATX closing sequence (`## Foo ##`). A trailing hash run only
/// closes the heading when preceded by whitespace, so `## C#` keeps its hash.
fn strip_closing_hashes(text: &str) -> &str {
    let trimmed = text.trim_end();
    let without = trimmed.trim_end_matches('#');
    if without.len() == trimmed.len() {
        return trimmed;
    }
    if without.is_empty() || without.ends_with([' ', '\t']) {
        without.trim_end()
    } else {
        trimmed
    }
}

fn fence_open(line: &str) -> Option<(char, usize)> {
    let rest = strip_indent(line)?;
    let marker = rest.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let len = rest.chars().take_while(|&c| c == marker).count();
    (len >= 3).then_some((marker, len))
}

fn closes_fence(line: &str, marker: char, open_len: usize) -> bool {
    let Some(rest) = strip_indent(line) else {
        return false;
    };
    let len = rest.chars().take_while(|&c| c == marker).count();
    len >= open_len && rest[len..].trim().is_empty()
}

/// Reduce raw heading markup to its visible text: links and images collapse
/// to their label, emphasis and code markers disappear.
fn display_text(raw: &str) -> String {
    let text = IMAGE_LABEL.replace_all(raw, "$1");
    let text = LINK_LABEL.replace_all(&text, "$1");
    let cleaned: String = text
        .chars()
        .filter(|c| !matches!(c, '`' | '*' | '~'))
        .collect();
    cleaned.trim().to_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(level: u8, text: &str, id: &str) -> TocEntry {
        TocEntry {
            level,
            text: text.to_owned(),
            id: id.to_owned(),
        }
    }

    // ── extraction tests ─────────────────────────────────────────

    #[test]
    fn test_toc_single_heading() {
        assert_eq!(
            toc("## Section One\n"),
            vec![entry(2, "Section One", "section-one")]
        );
    }

    #[test]
    fn test_toc_excludes_level_one() {
        let body = "# Page Title\n\n## First\n\n### Nested\n";
        assert_eq!(
            toc(body),
            vec![entry(2, "First", "first"), entry(3, "Nested", "nested")]
        );
    }

    #[test]
    fn test_toc_level_bounds() {
        let body = "## Two\n###### Six\n####### Seven hashes\n";
        let entries = toc(body);
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| (2..=6).contains(&e.level)));
    }

    #[test]
    fn test_toc_preserves_document_order() {
        let body = "## Zebra\n\n## Alpha\n\n## Middle\n";
        let texts: Vec<&str> = toc(body).iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, ["Zebra", "Alpha", "Middle"]);
    }

    #[test]
    fn test_toc_requires_space_after_hashes() {
        assert_eq!(toc("##nospace\n"), vec![]);
    }

    #[test]
    fn test_toc_empty_heading_skipped() {
        assert_eq!(toc("##\n## \n"), vec![]);
    }

    #[test]
    fn test_toc_allows_three_space_indent() {
        assert_eq!(toc("   ## Indented\n"), vec![entry(2, "Indented", "indented")]);
        assert_eq!(toc("    ## Code\n"), vec![]);
    }

    // ── anchor id tests ──────────────────────────────────────────

    #[test]
    fn test_toc_duplicate_headings_get_suffixes() {
        let body = "## FAQ\n\ntext\n\n## FAQ\n\n## FAQ\n";
        let ids: Vec<&str> = toc(body).iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["faq", "faq-1", "faq-2"]);
    }

    #[test]
    fn test_toc_duplicate_counter_spans_levels() {
        let body = "## Setup\n\n### Setup\n";
        let ids: Vec<&str> = toc(body).iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["setup", "setup-1"]);
    }

    #[test]
    fn test_toc_level_one_does_not_consume_ids() {
        let body = "# Introduction\n\n## Introduction\n";
        assert_eq!(toc(body), vec![entry(2, "Introduction", "introduction")]);
    }

    // ── markup reduction tests ───────────────────────────────────

    #[test]
    fn test_toc_inline_code_in_heading() {
        assert_eq!(
            toc("## Using `cargo` here\n"),
            vec![entry(2, "Using cargo here", "using-cargo-here")]
        );
    }

    #[test]
    fn test_toc_link_reduced_to_label() {
        assert_eq!(
            toc("## See [Docs](https://example.com/a_b)\n"),
            vec![entry(2, "See Docs", "see-docs")]
        );
    }

    #[test]
    fn test_toc_image_reduced_to_alt() {
        assert_eq!(
            toc("## ![Logo](logo.png) Intro\n"),
            vec![entry(2, "Logo Intro", "logo-intro")]
        );
    }

    #[test]
    fn test_toc_emphasis_markers_dropped() {
        assert_eq!(
            toc("## **Bold** and *em* and ~~gone~~\n"),
            vec![entry(2, "Bold and em and gone", "bold-and-em-and-gone")]
        );
    }

    #[test]
    fn test_toc_closing_hashes_stripped() {
        assert_eq!(toc("## Setup ##\n"), vec![entry(2, "Setup", "setup")]);
        assert_eq!(toc("## C#\n"), vec![entry(2, "C#", "c")]);
    }

    // ── fence tests ──────────────────────────────────────────────

    #[test]
    fn test_toc_skips_fenced_code() {
        let body = "```\n## not a heading\n```\n\n## Real\n";
        assert_eq!(toc(body), vec![entry(2, "Real", "real")]);
    }

    #[test]
    fn test_toc_skips_tilde_fences() {
        let body = "~~~text\n## shadow\n~~~\n## Real\n";
        assert_eq!(toc(body), vec![entry(2, "Real", "real")]);
    }

    #[test]
    fn test_toc_fence_closes_only_on_matching_run() {
        let body = "````\n```\n## still code\n````\n## Real\n";
        assert_eq!(toc(body), vec![entry(2, "Real", "real")]);
    }

    #[test]
    fn test_toc_unclosed_fence_swallows_rest() {
        assert_eq!(toc("```\n## swallowed\n"), vec![]);
    }
}
