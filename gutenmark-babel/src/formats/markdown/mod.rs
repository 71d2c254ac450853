//! Markdown format implementation
//!
//! This module implements bidirectional conversion between blog Markdown and blocks.
//!
//! # Library Choice
//!
//! We use the `comrak` crate to render CommonMark + GFM to HTML. Import goes through
//! HTML on purpose: the sanitizer works on the rendered tree, so raw HTML written
//! inside Markdown is subject to the same allow-list as any other HTML input.
//!
//! # Element Mapping Table
//!
//! | Block              | Markdown                               | Export Notes                     |
//! |--------------------|----------------------------------------|----------------------------------|
//! | paragraph          | Paragraph                              | Inline markup stripped to text   |
//! | heading            | `#`…`######`                           | Level clamped to 1..=6           |
//! | list               | `- item` / `1. item`                   | Items stripped to text           |
//! | quote              | `> text` + `> — citation`              |                                  |
//! | code               | Fenced code block                      | Language → info string           |
//! | image              | `![alt](url)`                          | Caption lost                     |
//! | table              | GFM pipe table                         | Pipes in cells escaped           |
//! | separator          | `---`                                  |                                  |
//! | decorative-box     | `:::box id="…"` / `:::box type="…"`    | id preferred over legacy type    |
//! | decorative-balloon | `:::balloon position="…" icon="…"`     |                                  |
//! | passthrough        | raw text                               | Logged as a warning              |
//!
//! # Lossy Conversions
//!
//! - Inline formatting (bold, links, code spans) → plain text on export
//! - Image captions and quote inner structure → dropped on export
//! - Nested lists → flattened into the parent item's text

pub mod parser;
pub mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::Block;

pub use parser::{parse_from_markdown, render, render_unsanitized};
pub use serializer::serialize_to_markdown;

/// comrak extensions used when rendering Markdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkdownOptions {
    pub tables: bool,
    pub strikethrough: bool,
    pub autolink: bool,
    pub tasklist: bool,
    /// Treat single newlines inside a paragraph as `<br>`.
    pub hard_breaks: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            autolink: true,
            tasklist: false,
            hard_breaks: false,
        }
    }
}

/// Format implementation for Markdown
#[derive(Debug, Default)]
pub struct MarkdownFormat {
    options: crate::ConversionOptions,
}

impl MarkdownFormat {
    pub fn new(options: crate::ConversionOptions) -> Self {
        Self { options }
    }
}

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "CommonMark + GFM Markdown with :::box / :::balloon decorations"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Vec<Block>, FormatError> {
        Ok(crate::markdown_to_blocks_with_options(source, &self.options))
    }

    fn serialize(&self, blocks: &[Block]) -> Result<String, FormatError> {
        Ok(serialize_to_markdown(blocks))
    }
}
