//! Markdown parsing (Markdown → blocks import)
//!
//! Pipeline: Markdown → custom-tag extraction → comrak HTML → sanitizer → block mapper

use super::MarkdownOptions;
use crate::common::placeholders;
use crate::formats::html::{map_to_blocks, sanitize};
use crate::ir::nodes::Block;
use comrak::{markdown_to_html, ComrakOptions};

/// Parse Markdown (with the `:::box` / `:::balloon` DSL) into blocks.
pub fn parse_from_markdown(source: &str, options: &MarkdownOptions) -> Vec<Block> {
    let (cleaned, table) = placeholders::extract(source);
    log::debug!("extracted {} custom tag(s)", table.len());

    let html = render(&cleaned, options);
    let blocks = map_to_blocks(&html, &table);
    log::debug!("mapped {} block(s)", blocks.len());
    blocks
}

/// Render Markdown to sanitized HTML.
pub fn render(markdown: &str, options: &MarkdownOptions) -> String {
    sanitize(&render_unsanitized(markdown, options))
}

/// Render Markdown to HTML without sanitizing. Raw HTML in the source is passed
/// through, so the result must not reach a page before [`sanitize`].
pub fn render_unsanitized(markdown: &str, options: &MarkdownOptions) -> String {
    markdown_to_html(markdown, &comrak_options(options))
}

fn comrak_options(options: &MarkdownOptions) -> ComrakOptions<'static> {
    let mut comrak = ComrakOptions::default();
    comrak.extension.table = options.tables;
    comrak.extension.strikethrough = options.strikethrough;
    comrak.extension.autolink = options.autolink;
    comrak.extension.tasklist = options.tasklist;
    comrak.render.hardbreaks = options.hard_breaks;
    // the sanitizer decides what raw HTML survives
    comrak.render.unsafe_ = true;
    comrak
}
