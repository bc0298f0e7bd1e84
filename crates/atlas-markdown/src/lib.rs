//! Markdown analysis and rendering for documentation pages.
//!
//! Three views of one body text, kept in agreement:
//! - [`toc`] lists the headings a page exposes, with anchor ids.
//! - [`render`] builds a presentation tree of [`Block`] and [`Inline`]
//!   nodes, injecting the same anchor ids on headings of level 2-4.
//! - [`front_matter`] strips and validates the optional YAML header before
//!   either of the above sees the text.
//!
//! Rendering never fails: raw HTML and unsupported syntax degrade to literal
//! text nodes.
//!
//! # Example
//!
//! ```
//! use atlas_markdown::{render, toc, Block};
//!
//! let body = "## Install\n\nRun `cargo build`.\n";
//! let outline = toc(body);
//! assert_eq!(outline[0].id, "install");
//!
//! let tree = render(body);
//! let Block::Heading { id, .. } = &tree[0] else { unreachable!() };
//! assert_eq!(id.as_deref(), Some("install"));
//! ```

pub mod front_matter;
mod render;
mod slug;
mod toc;
mod tree;

pub use front_matter::FrontMatterError;
pub use render::render;
pub use slug::{IdAllocator, slugify};
pub use toc::{TocEntry, toc};
pub use tree::{Block, Inline, TableCell, plain_text};
