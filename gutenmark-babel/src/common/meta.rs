//! Article metadata derived from a block sequence.
//!
//! The title comes from the first heading, the description from the first
//! paragraph and the keywords from the headings. Authors can override any of the
//! three through the `title`, `description` and `keywords` extra parameters of the
//! formats that embed metadata.

use crate::formats::html::dom::strip_tags;
use crate::ir::nodes::Block;
use serde::Serialize;
use std::collections::HashMap;

/// Longest generated description, in characters, before the ellipsis.
pub const DESCRIPTION_CHARS: usize = 160;

/// At most this many headings become keywords.
pub const MAX_KEYWORDS: usize = 5;

/// Extra parameters understood by [`DocumentMeta::with_options`].
pub const META_OPTIONS: &[&str] = &["title", "description", "keywords"];

/// Metadata of one article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMeta {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub word_count: usize,
    pub block_count: usize,
}

impl DocumentMeta {
    /// Replace generated fields with the ones given as extra parameters.
    ///
    /// `keywords` is a comma separated list.
    pub fn with_options(mut self, options: &HashMap<String, String>) -> Self {
        if let Some(title) = options.get("title") {
            self.title = title.trim().to_string();
        }
        if let Some(description) = options.get("description") {
            self.description = description.trim().to_string();
        }
        if let Some(keywords) = options.get("keywords") {
            self.keywords = keywords
                .split(',')
                .map(str::trim)
                .filter(|keyword| !keyword.is_empty())
                .map(str::to_string)
                .collect();
        }
        self
    }
}

/// Derive the metadata of `blocks`.
pub fn generate_meta(blocks: &[Block]) -> DocumentMeta {
    let headings: Vec<String> = blocks
        .iter()
        .filter_map(|block| match block {
            Block::Heading(heading) => Some(strip_tags(&heading.html).trim().to_string()),
            _ => None,
        })
        .collect();

    let description = blocks
        .iter()
        .find_map(|block| match block {
            Block::Paragraph(paragraph) => Some(strip_tags(&paragraph.html)),
            _ => None,
        })
        .map(|text| truncate_description(text.trim()))
        .unwrap_or_default();

    DocumentMeta {
        title: headings.first().cloned().unwrap_or_default(),
        description,
        keywords: headings
            .iter()
            .filter(|heading| !heading.is_empty())
            .take(MAX_KEYWORDS)
            .cloned()
            .collect(),
        word_count: count_words(blocks),
        block_count: blocks.len(),
    }
}

/// Count the words of the readable text in `blocks`.
///
/// When CJK characters outnumber the whitespace separated words the text is
/// counted per character instead, whitespace excluded.
pub fn count_words(blocks: &[Block]) -> usize {
    let text = blocks
        .iter()
        .filter_map(block_text)
        .collect::<Vec<_>>()
        .join(" ");

    let words = text.split_whitespace().count();
    let cjk = text.chars().filter(|&c| is_cjk(c)).count();
    if cjk > words {
        text.chars().filter(|c| !c.is_whitespace()).count()
    } else {
        words
    }
}

fn block_text(block: &Block) -> Option<String> {
    match block {
        Block::Paragraph(paragraph) => Some(strip_tags(&paragraph.html)),
        Block::Heading(heading) => Some(strip_tags(&heading.html)),
        Block::List(list) => Some(
            list.items
                .iter()
                .map(|item| strip_tags(item))
                .collect::<Vec<_>>()
                .join(" "),
        ),
        Block::Quote(quote) => Some(strip_tags(&quote.html)),
        Block::Code(code) => Some(code.text.clone()),
        Block::DecorativeBox(decoration) => Some(decoration.content.clone()),
        Block::DecorativeBalloon(balloon) => Some(balloon.content.clone()),
        Block::Image(_) | Block::Table(_) | Block::Separator | Block::Passthrough(_) => None,
    }
}

/// Hiragana, katakana and the CJK unified ideographs.
fn is_cjk(c: char) -> bool {
    matches!(c, '\u{3040}'..='\u{309F}' | '\u{30A0}'..='\u{30FF}' | '\u{4E00}'..='\u{9FFF}')
}

fn truncate_description(text: &str) -> String {
    if text.chars().count() <= DESCRIPTION_CHARS {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(DESCRIPTION_CHARS).collect();
    cut.push_str("...");
    cut
}
