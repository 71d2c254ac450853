//! Markdown serialization (blocks → Markdown export)
//!
//! Rich inline markup does not survive: paragraph, heading, list and quote HTML
//! is reduced to its text. Decorative blocks are written back in the `:::` DSL so
//! that they parse to the same blocks again.

use crate::formats::html::dom::strip_tags;
use crate::ir::nodes::{
    Block, Code, DecorativeBalloon, DecorativeBox, Heading, Image, List, Passthrough, Quote, Table,
    TableRow,
};

/// Serialize blocks to Markdown, one blank line between blocks.
pub fn serialize_to_markdown(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(block_to_markdown)
        .filter(|markdown| !markdown.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Serialize a single block. Returns an empty string for blocks with nothing to emit.
pub fn block_to_markdown(block: &Block) -> String {
    match block {
        Block::Paragraph(paragraph) => strip_tags(&paragraph.html),
        Block::Heading(heading) => heading_to_markdown(heading),
        Block::List(list) => list_to_markdown(list),
        Block::Quote(quote) => quote_to_markdown(quote),
        Block::Code(code) => code_to_markdown(code),
        Block::Image(image) => image_to_markdown(image),
        Block::Table(table) => table_to_markdown(table),
        Block::Separator => "---".to_string(),
        Block::DecorativeBox(decoration) => box_to_markdown(decoration),
        Block::DecorativeBalloon(balloon) => balloon_to_markdown(balloon),
        Block::Passthrough(passthrough) => passthrough_to_markdown(passthrough),
    }
}

fn heading_to_markdown(heading: &Heading) -> String {
    let level = heading.level.clamp(1, 6) as usize;
    format!("{} {}", "#".repeat(level), strip_tags(&heading.html))
}

fn list_to_markdown(list: &List) -> String {
    list.items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let text = strip_tags(item);
            if list.ordered {
                format!("{}. {text}", index + 1)
            } else {
                format!("- {text}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn quote_to_markdown(quote: &Quote) -> String {
    let text = strip_tags(&quote.html);
    let mut lines: Vec<String> = text.trim().lines().map(|line| format!("> {line}")).collect();
    if !quote.citation.is_empty() {
        lines.push(format!("> — {}", quote.citation));
    }
    lines.join("\n")
}

fn code_to_markdown(code: &Code) -> String {
    format!("```{}\n{}\n```", code.language, code.text)
}

fn image_to_markdown(image: &Image) -> String {
    format!("![{}]({})", image.alt, image.url)
}

fn table_to_markdown(table: &Table) -> String {
    let mut lines = Vec::new();

    if let Some((first, rest)) = table.header.split_first() {
        lines.push(table_row(first));
        lines.push(format!("|{}|", vec![" --- "; first.len()].join("|")));
        lines.extend(rest.iter().map(table_row));
    }
    lines.extend(table.body.iter().map(table_row));

    lines.join("\n")
}

fn table_row(row: &TableRow) -> String {
    let cells: Vec<String> = row.iter().map(|cell| cell.replace('|', "\\|")).collect();
    format!("| {} |", cells.join(" | "))
}

fn box_to_markdown(decoration: &DecorativeBox) -> String {
    match decoration.decoration_id() {
        Some(id) => format!(":::box id=\"{id}\"\n{}\n:::", decoration.content),
        None => format!(
            ":::box type=\"{}\"\n{}\n:::",
            decoration.effective_legacy_type(),
            decoration.content
        ),
    }
}

fn balloon_to_markdown(balloon: &DecorativeBalloon) -> String {
    format!(
        ":::balloon position=\"{}\" icon=\"{}\"\n{}\n:::",
        balloon.position, balloon.icon, balloon.content
    )
}

fn passthrough_to_markdown(passthrough: &Passthrough) -> String {
    log::warn!(
        "block kind '{}' has no Markdown form; emitting its raw text",
        passthrough.kind
    );
    passthrough.raw.clone()
}
