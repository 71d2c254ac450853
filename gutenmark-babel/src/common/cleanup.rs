//! Empty-block detection
//!
//! Generated articles often end up with blocks that render as nothing (a
//! paragraph holding only `<br>`, a code block with no code). These helpers find
//! and drop them.

use crate::formats::html::dom::strip_tags;
use crate::ir::nodes::Block;

/// Whether a block would render as nothing.
///
/// Text blocks are empty when their HTML has no visible text. Separators and
/// tables are never empty; passthrough blocks are empty only without raw text.
pub fn is_block_empty(block: &Block) -> bool {
    match block {
        Block::Paragraph(paragraph) => is_blank_html(&paragraph.html),
        Block::Heading(heading) => is_blank_html(&heading.html),
        Block::List(list) => list.items.iter().all(|item| is_blank_html(item)),
        Block::Quote(quote) => is_blank_html(&quote.html),
        Block::Code(code) => code.text.trim().is_empty(),
        Block::Image(image) => image.url.is_empty(),
        Block::DecorativeBox(decoration) => decoration.content.trim().is_empty(),
        Block::DecorativeBalloon(balloon) => balloon.content.trim().is_empty(),
        Block::Passthrough(passthrough) => passthrough.raw.trim().is_empty(),
        Block::Table(_) | Block::Separator => false,
    }
}

/// Drop every block for which [`is_block_empty`] holds, keeping order.
pub fn remove_empty_blocks(blocks: Vec<Block>) -> Vec<Block> {
    let before = blocks.len();
    let kept: Vec<Block> = blocks
        .into_iter()
        .filter(|block| !is_block_empty(block))
        .collect();
    if kept.len() != before {
        log::debug!("removed {} empty block(s)", before - kept.len());
    }
    kept
}

fn is_blank_html(html: &str) -> bool {
    strip_tags(html).trim().is_empty()
}
