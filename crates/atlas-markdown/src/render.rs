//! Markdown to presentation tree rendering.

use std::mem;

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use crate::slug::IdAllocator;
use crate::tree::{Block, Inline, TableCell, plain_text};

/// Render a markdown body into a presentation tree.
///
/// Headings of level 2 through 4 get an anchor id computed with the same
/// transform and duplicate suffixing as [`toc`](crate::toc). Fenced code
/// blocks carry the first token of their info string as a language tag, with
/// a `language-` classification prefix stripped when present. Raw HTML and
/// other unsupported fragments degrade to literal text; no input fails the
/// page.
pub fn render(body: &str) -> Vec<Block> {
    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let mut builder = TreeBuilder::default();
    for event in Parser::new_ext(body, options) {
        builder.event(event);
    }
    builder.finish()
}

/// An open block container awaiting its end tag.
enum Scope {
    Quote(Vec<Block>),
    List {
        start: Option<u64>,
        items: Vec<Vec<Block>>,
    },
    Item(Vec<Block>),
    HtmlBlock(String),
}

/// An open inline container; `parent` is the run it will rejoin.
struct InlineFrame {
    kind: FrameKind,
    parent: Vec<Inline>,
}

enum FrameKind {
    Emphasis,
    Strong,
    Strikethrough,
    Link { href: String },
    Image { src: String },
}

struct OpenHeading {
    level: u8,
    text: String,
}

struct OpenCode {
    language: Option<String>,
    code: String,
}

#[derive(Default)]
struct OpenTable {
    header: Vec<TableCell>,
    rows: Vec<Vec<TableCell>>,
    row: Vec<TableCell>,
}

#[derive(Default)]
struct TreeBuilder {
    blocks: Vec<Block>,
    scopes: Vec<Scope>,
    inline: Vec<Inline>,
    frames: Vec<InlineFrame>,
    heading: Option<OpenHeading>,
    code: Option<OpenCode>,
    table: Option<OpenTable>,
    ids: IdAllocator,
}

impl TreeBuilder {
    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.code_span(&code),
            Event::Html(html) | Event::InlineHtml(html) => self.raw_html(&html),
            Event::SoftBreak => self.soft_break(),
            Event::HardBreak => self.hard_break(),
            Event::Rule => {
                self.flush_inline();
                self.push_block(Block::Rule);
            }
            Event::TaskListMarker(checked) => self.inline.push(Inline::TaskMarker(checked)),
            // Gated behind options this renderer does not enable.
            Event::FootnoteReference(_) | Event::InlineMath(_) | Event::DisplayMath(_) => {}
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {}
            Tag::Heading { level, .. } => {
                self.flush_inline();
                self.heading = Some(OpenHeading {
                    level: heading_level(level),
                    text: String::new(),
                });
            }
            Tag::BlockQuote(_) => {
                self.flush_inline();
                self.scopes.push(Scope::Quote(Vec::new()));
            }
            Tag::CodeBlock(kind) => {
                self.flush_inline();
                let language = match kind {
                    CodeBlockKind::Fenced(info) => parse_language(&info),
                    CodeBlockKind::Indented => None,
                };
                self.code = Some(OpenCode {
                    language,
                    code: String::new(),
                });
            }
            Tag::HtmlBlock => {
                self.flush_inline();
                self.scopes.push(Scope::HtmlBlock(String::new()));
            }
            Tag::List(start) => {
                self.flush_inline();
                self.scopes.push(Scope::List {
                    start,
                    items: Vec::new(),
                });
            }
            Tag::Item => self.scopes.push(Scope::Item(Vec::new())),
            Tag::Table(_) => {
                self.flush_inline();
                self.table = Some(OpenTable::default());
            }
            Tag::TableHead | Tag::TableRow | Tag::TableCell => {}
            Tag::Emphasis => self.open_frame(FrameKind::Emphasis),
            Tag::Strong => self.open_frame(FrameKind::Strong),
            Tag::Strikethrough => self.open_frame(FrameKind::Strikethrough),
            Tag::Link { dest_url, .. } => self.open_frame(FrameKind::Link {
                href: dest_url.into_string(),
            }),
            Tag::Image { dest_url, .. } => self.open_frame(FrameKind::Image {
                src: dest_url.into_string(),
            }),
            // Gated behind options this renderer does not enable.
            _ => {}
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => self.flush_inline(),
            TagEnd::Heading(_) => self.complete_heading(),
            TagEnd::BlockQuote(_) => {
                if let Some(Scope::Quote(content)) = self.scopes.pop() {
                    self.push_block(Block::Quote { content });
                }
            }
            TagEnd::CodeBlock => {
                if let Some(open) = self.code.take() {
                    self.push_block(Block::CodeBlock {
                        language: open.language,
                        code: open.code,
                    });
                }
            }
            TagEnd::HtmlBlock => {
                if let Some(Scope::HtmlBlock(raw)) = self.scopes.pop()
                    && !raw.trim().is_empty()
                {
                    self.push_block(Block::Paragraph {
                        content: vec![Inline::Text(raw)],
                    });
                }
            }
            TagEnd::List(_) => {
                if let Some(Scope::List { start, items }) = self.scopes.pop() {
                    self.push_block(Block::List { start, items });
                }
            }
            TagEnd::Item => {
                self.flush_inline();
                if let Some(Scope::Item(blocks)) = self.scopes.pop() {
                    if let Some(Scope::List { items, .. }) = self.scopes.last_mut() {
                        items.push(blocks);
                    } else {
                        self.blocks.extend(blocks);
                    }
                }
            }
            TagEnd::Table => {
                if let Some(table) = self.table.take() {
                    self.push_block(Block::Table {
                        header: table.header,
                        rows: table.rows,
                    });
                }
            }
            TagEnd::TableHead => {
                if let Some(table) = self.table.as_mut() {
                    table.header = mem::take(&mut table.row);
                }
            }
            TagEnd::TableRow => {
                if let Some(table) = self.table.as_mut() {
                    let row = mem::take(&mut table.row);
                    table.rows.push(row);
                }
            }
            TagEnd::TableCell => {
                let cell = mem::take(&mut self.inline);
                if let Some(table) = self.table.as_mut() {
                    table.row.push(cell);
                }
            }
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough | TagEnd::Link
            | TagEnd::Image => self.close_frame(),
            // Gated behind options this renderer does not enable.
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        if let Some(code) = self.code.as_mut() {
            code.code.push_str(text);
            return;
        }
        if let Some(Scope::HtmlBlock(raw)) = self.scopes.last_mut() {
            raw.push_str(text);
            return;
        }
        if let Some(heading) = self.heading.as_mut() {
            heading.text.push_str(text);
        }
        self.push_text(text);
    }

    fn code_span(&mut self, code: &str) {
        if let Some(heading) = self.heading.as_mut() {
            heading.text.push_str(code);
        }
        self.inline.push(Inline::Code(code.to_owned()));
    }

    /// Raw HTML is not interpreted; it lands in the tree as literal text.
    fn raw_html(&mut self, html: &str) {
        if let Some(Scope::HtmlBlock(raw)) = self.scopes.last_mut() {
            raw.push_str(html);
            return;
        }
        if let Some(heading) = self.heading.as_mut() {
            heading.text.push_str(html);
        }
        self.push_text(html);
    }

    fn soft_break(&mut self) {
        if let Some(heading) = self.heading.as_mut() {
            heading.text.push(' ');
        }
        self.push_text(" ");
    }

    fn hard_break(&mut self) {
        if let Some(heading) = self.heading.as_mut() {
            heading.text.push(' ');
        }
        self.inline.push(Inline::HardBreak);
    }

    /// Anchor decision keyed by depth: 2-4 anchored, 5-6 counted but bare,
    /// 1 untouched so the page title never claims an id.
    fn complete_heading(&mut self) {
        let Some(open) = self.heading.take() else {
            return;
        };
        let content = mem::take(&mut self.inline);
        let text = open.text.trim();
        let id = match open.level {
            2..=4 if !text.is_empty() => Some(self.ids.assign(text)),
            5 | 6 if !text.is_empty() => {
                self.ids.assign(text);
                None
            }
            _ => None,
        };
        self.push_block(Block::Heading {
            level: open.level,
            id,
            content,
        });
    }

    fn open_frame(&mut self, kind: FrameKind) {
        self.frames.push(InlineFrame {
            kind,
            parent: mem::take(&mut self.inline),
        });
    }

    fn close_frame(&mut self) {
        let Some(frame) = self.frames.pop() else {
            return;
        };
        let content = mem::replace(&mut self.inline, frame.parent);
        let node = match frame.kind {
            FrameKind::Emphasis => Inline::Emphasis(content),
            FrameKind::Strong => Inline::Strong(content),
            FrameKind::Strikethrough => Inline::Strikethrough(content),
            FrameKind::Link { href } => Inline::Link { href, content },
            FrameKind::Image { src } => Inline::Image {
                src,
                alt: plain_text(&content),
            },
        };
        self.inline.push(node);
    }

    fn push_text(&mut self, text: &str) {
        if let Some(Inline::Text(last)) = self.inline.last_mut() {
            last.push_str(text);
        } else {
            self.inline.push(Inline::Text(text.to_owned()));
        }
    }

    /// Wrap any pending inline run into a paragraph. Tight list items carry
    /// bare inline content, so this runs at every block boundary.
    fn flush_inline(&mut self) {
        if self.inline.is_empty() {
            return;
        }
        let content = mem::take(&mut self.inline);
        self.push_block(Block::Paragraph { content });
    }

    fn push_block(&mut self, block: Block) {
        match self.scopes.last_mut() {
            Some(Scope::Quote(children) | Scope::Item(children)) => children.push(block),
            _ => self.blocks.push(block),
        }
    }

    fn finish(mut self) -> Vec<Block> {
        self.flush_inline();
        while let Some(scope) = self.scopes.pop() {
            let block = match scope {
                Scope::Quote(content) => Block::Quote { content },
                Scope::List { start, items } => Block::List { start, items },
                Scope::Item(blocks) => Block::List {
                    start: None,
                    items: vec![blocks],
                },
                Scope::HtmlBlock(raw) => Block::Paragraph {
                    content: vec![Inline::Text(raw)],
                },
            };
            self.push_block(block);
        }
        self.blocks
    }
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// First token of a fence info string, minus any `language-` prefix.
fn parse_language(info: &str) -> Option<String> {
    let token = info.split_whitespace().next()?;
    let name = token.strip_prefix("language-").unwrap_or(token);
    (!name.is_empty()).then(|| name.to_owned())
}
