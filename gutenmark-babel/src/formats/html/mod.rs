//! HTML format implementation
//!
//! As input, a fragment is sanitized and its top-level elements are mapped to
//! blocks. The same two stages finish the Markdown import pipeline after comrak
//! has rendered the document.
//!
//! As output, blocks become a standalone page (see [`export`]): the block HTML
//! without comment delimiters, with the article metadata in the head. The
//! `title`, `description` and `keywords` extra parameters override the
//! generated metadata.
//!
//! # Library Choice
//!
//! We use the `html5ever` + `markup5ever_rcdom` pair for parsing and serialization:
//! - `html5ever`: browser-grade HTML5 parser that repairs malformed markup
//! - `markup5ever_rcdom`: reference-counted DOM that can be edited in place
//!
//! Sanitizing a real DOM rather than scanning text means the allow-list sees the
//! same tree a browser would build.

pub mod dom;
pub mod export;
pub mod parser;
pub mod sanitizer;

use crate::common::meta::{generate_meta, META_OPTIONS};
use crate::common::placeholders::PlaceholderTable;
use crate::error::FormatError;
use crate::format::{check_known_options, Format};
use crate::ir::nodes::Block;
use std::collections::HashMap;

pub use export::serialize_to_document;
pub use parser::map_to_blocks;
pub use sanitizer::sanitize;

/// Format implementation for HTML fragments
#[derive(Default)]
pub struct HtmlFormat;

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML fragment in, standalone HTML document out"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Vec<Block>, FormatError> {
        let clean = sanitize(source);
        Ok(map_to_blocks(&clean, &PlaceholderTable::for_source(source)))
    }

    fn serialize(&self, blocks: &[Block]) -> Result<String, FormatError> {
        Ok(serialize_to_document(blocks, &generate_meta(blocks)))
    }

    fn serialize_with_options(
        &self,
        blocks: &[Block],
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        check_known_options(self.name(), options, META_OPTIONS)?;
        let meta = generate_meta(blocks).with_options(options);
        Ok(serialize_to_document(blocks, &meta))
    }
}
