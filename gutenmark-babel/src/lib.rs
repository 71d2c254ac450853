//! Markdown ↔ editor-block conversion
//!
//!     This crate turns blog Markdown (including the `:::box` / `:::balloon` decoration DSL)
//!     into the closed set of semantic blocks the blog editor works with, and turns blocks
//!     back into Markdown, JSON or WordPress block markup.
//!
//!     This is a pure lib: it powers gutenmark-cli but is shell agnostic, so no code here
//!     prints, reads environment variables or touches the filesystem.
//!
//! Architecture
//!
//!     Import is a pipeline of four stages, each usable on its own:
//!
//!         Markdown ──extract──▶ cleaned Markdown + PlaceholderTable
//!                  ──render───▶ HTML (comrak)
//!                  ──sanitize─▶ allow-listed HTML (html5ever)
//!                  ──map──────▶ Vec<Block>
//!
//!     The decoration DSL is unknown to any Markdown renderer, so the extractor cuts each
//!     fence out and leaves an opaque token in its place. The mapper resolves the token via
//!     the table built by the same call; nothing is shared between calls.
//!
//!     Export is a direct mapping per block (formats/markdown/serializer.rs,
//!     formats/gutenberg/mod.rs). The HTML document and the JSON export envelope reuse the
//!     block HTML and add the metadata from common/meta.rs.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── markdown            # comrak rendering + Markdown export
//!     │   ├── html                # DOM helpers, sanitizer, block mapper, document export
//!     │   ├── json                # block interchange form
//!     │   └── gutenberg           # WordPress block markup (output only)
//!     ├── ir
//!     │   ├── nodes.rs            # Block model
//!     │   └── block_types.rs      # Editor block-type schemas
//!     └── common
//!         ├── placeholders.rs     # Custom-tag extraction
//!         ├── legacy.rs           # Legacy type ↔ decoration id
//!         ├── cleanup.rs          # Empty-block removal
//!         └── meta.rs             # Title, description, keywords, word count
//!
//! Testing
//!     tests
//!     └── <area>
//!         └── <testname>.rs
//!
//!     Rust does not discover tests in subdirectories, so tests/lib.rs includes them.

pub mod error;
pub mod format;
pub mod formats;
pub mod registry;

pub mod common;
pub mod ir;

pub use common::cleanup::{is_block_empty, remove_empty_blocks};
pub use common::legacy::{decoration_id_to_legacy_type, legacy_type_to_decoration_id};
pub use error::FormatError;
pub use format::Format;
pub use formats::markdown::{render, render_unsanitized, MarkdownOptions};
pub use ir::block_types::{block_types, initialize_blocks};
pub use ir::nodes::Block;
pub use registry::FormatRegistry;

/// Options for the Markdown → blocks pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionOptions {
    pub markdown: MarkdownOptions,
    /// Drop blocks that would render as nothing (see [`is_block_empty`]).
    pub remove_empty_blocks: bool,
}

/// Convert Markdown to blocks with the default options.
pub fn markdown_to_blocks(markdown: &str) -> Vec<Block> {
    markdown_to_blocks_with_options(markdown, &ConversionOptions::default())
}

/// Convert Markdown to blocks.
///
/// Never fails: malformed DSL fences stay in the text, and whatever the sanitizer
/// removes is simply absent from the result.
pub fn markdown_to_blocks_with_options(markdown: &str, options: &ConversionOptions) -> Vec<Block> {
    initialize_blocks();
    let blocks = formats::markdown::parse_from_markdown(markdown, &options.markdown);
    if options.remove_empty_blocks {
        remove_empty_blocks(blocks)
    } else {
        blocks
    }
}

/// Convert blocks back to Markdown.
pub fn blocks_to_markdown(blocks: &[Block]) -> String {
    formats::markdown::serialize_to_markdown(blocks)
}

/// Convert Markdown straight to WordPress block markup.
pub fn markdown_to_block_markup(markdown: &str) -> String {
    formats::gutenberg::serialize_to_block_markup(&markdown_to_blocks(markdown))
}
