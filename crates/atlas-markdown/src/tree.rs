//! Presentation tree node types.
//!
//! [`render`](crate::render) produces these instead of markup text so the
//! presentation layer decides how each node is displayed.

/// One table cell's inline content.
pub type TableCell = Vec<Inline>;

/// A block-level node of a rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Block {
    /// Section heading. `id` is the injected anchor, present on levels 2-4.
    Heading {
        level: u8,
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        id: Option<String>,
        content: Vec<Inline>,
    },
    Paragraph {
        content: Vec<Inline>,
    },
    /// Fenced or indented code. Fenced blocks may carry a language tag.
    CodeBlock {
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        language: Option<String>,
        code: String,
    },
    Quote {
        content: Vec<Block>,
    },
    /// `start` is the first ordinal of an ordered list, `None` for bullets.
    List {
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        start: Option<u64>,
        items: Vec<Vec<Block>>,
    },
    Table {
        header: Vec<TableCell>,
        rows: Vec<Vec<TableCell>>,
    },
    Rule,
}

/// An inline node inside a block.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Inline {
    Text(String),
    /// Inline code span, no enclosing block.
    Code(String),
    Emphasis(Vec<Inline>),
    Strong(Vec<Inline>),
    Strikethrough(Vec<Inline>),
    Link {
        href: String,
        content: Vec<Inline>,
    },
    Image {
        src: String,
        alt: String,
    },
    /// Task list checkbox state.
    TaskMarker(bool),
    HardBreak,
}

/// Flatten inline content to the text a reader would see.
pub fn plain_text(content: &[Inline]) -> String {
    let mut out = String::new();
    collect_text(content, &mut out);
    out
}

fn collect_text(content: &[Inline], out: &mut String) {
    for node in content {
        match node {
            Inline::Text(text) | Inline::Code(text) => out.push_str(text),
            Inline::Emphasis(inner) | Inline::Strong(inner) | Inline::Strikethrough(inner) => {
                collect_text(inner, out);
            }
            Inline::Link { content, .. } => collect_text(content, out),
            Inline::Image { alt, .. } => out.push_str(alt),
            Inline::HardBreak => out.push(' '),
            Inline::TaskMarker(_) => {}
        }
    }
}
