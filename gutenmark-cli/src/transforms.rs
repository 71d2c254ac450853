//! CLI-specific transforms
//!
//! Each transform exposes one stage of the Markdown import pipeline so a
//! misbehaving conversion can be narrowed down to the stage that broke it.
//!
//! ## Transform Pipeline
//!
//! 1. **Extraction** - Markdown → cleaned Markdown + placeholder table
//!    - `placeholders-json`: the captured `:::box` / `:::balloon` fences
//!
//! 2. **Rendering** - cleaned Markdown → HTML
//!    - `html-raw`: comrak output, raw HTML passed through
//!    - `html-sanitized`: after the allow-list sanitizer
//!
//! 3. **Mapping** - HTML → blocks
//!    - `blocks-json`: the block list as JSON
//!    - `blocks-summary`: one line per block (default)
//!    - `meta-json`: title, description, keywords and counts derived from the blocks
//!
//! Example: `gutenmark inspect post.md html-sanitized`

use gutenmark_babel::common::meta::generate_meta;
use gutenmark_babel::common::placeholders::{self, CustomTag, TagKind};
use gutenmark_babel::formats::html::dom::strip_tags;
use gutenmark_babel::ir::nodes::Block;
use gutenmark_babel::{markdown_to_blocks_with_options, render, render_unsanitized, ConversionOptions};
use serde_json::{json, Value};

/// All available CLI transforms
pub const AVAILABLE_TRANSFORMS: &[&str] = &[
    "placeholders-json",
    "html-raw",
    "html-sanitized",
    "blocks-json",
    "blocks-summary",
    "meta-json",
];

pub const DEFAULT_TRANSFORM: &str = "blocks-summary";

/// Longest preview shown per block in `blocks-summary`.
const PREVIEW_CHARS: usize = 60;

/// Execute a named transform on Markdown source
///
/// # Returns
///
/// The transformed output, newline terminated, or an error message
pub fn execute_transform(
    source: &str,
    transform_name: &str,
    options: &ConversionOptions,
) -> Result<String, String> {
    let output = match transform_name {
        "placeholders-json" => {
            let (_, table) = placeholders::extract(source);
            let tags: Vec<Value> = table
                .iter()
                .enumerate()
                .map(|(index, (_, tag))| tag_to_json(index, tag))
                .collect();
            serde_json::to_string_pretty(&tags)
                .map_err(|e| format!("JSON serialization failed: {e}"))?
        }
        "html-raw" => {
            let (cleaned, _) = placeholders::extract(source);
            render_unsanitized(&cleaned, &options.markdown)
        }
        "html-sanitized" => {
            let (cleaned, _) = placeholders::extract(source);
            render(&cleaned, &options.markdown)
        }
        "blocks-json" => {
            let blocks = markdown_to_blocks_with_options(source, options);
            serde_json::to_string_pretty(&blocks)
                .map_err(|e| format!("JSON serialization failed: {e}"))?
        }
        "blocks-summary" => blocks_to_summary(&markdown_to_blocks_with_options(source, options)),
        "meta-json" => {
            let meta = generate_meta(&markdown_to_blocks_with_options(source, options));
            serde_json::to_string_pretty(&meta)
                .map_err(|e| format!("JSON serialization failed: {e}"))?
        }
        other => return Err(format!("Unknown transform: {other}")),
    };

    Ok(terminate(output))
}

fn terminate(mut output: String) -> String {
    if !output.ends_with('\n') {
        output.push('\n');
    }
    output
}

fn tag_to_json(index: usize, tag: &CustomTag) -> Value {
    let kind = match tag.kind {
        TagKind::Box => "box",
        TagKind::Balloon => "balloon",
    };
    json!({
        "index": index,
        "kind": kind,
        "attributes": tag.attributes,
        "content": tag.content,
    })
}

fn blocks_to_summary(blocks: &[Block]) -> String {
    if blocks.is_empty() {
        return "(no blocks)".to_string();
    }
    blocks
        .iter()
        .enumerate()
        .map(|(index, block)| {
            let preview = preview(block);
            if preview.is_empty() {
                format!("{index:>3}  {}", block.kind())
            } else {
                format!("{index:>3}  {:<19}{preview}", block.kind())
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn preview(block: &Block) -> String {
    let text = match block {
        Block::Paragraph(p) => strip_tags(&p.html),
        Block::Heading(h) => format!("h{} {}", h.level, strip_tags(&h.html)),
        Block::List(l) => {
            let marker = if l.ordered { "ordered" } else { "unordered" };
            format!("{marker}, {} item(s)", l.items.len())
        }
        Block::Quote(q) => strip_tags(&q.html),
        Block::Code(c) if c.language.is_empty() => c.text.clone(),
        Block::Code(c) => format!("[{}] {}", c.language, c.text),
        Block::Image(i) => i.url.clone(),
        Block::Table(t) => format!(
            "{} header row(s), {} body row(s)",
            t.header.len(),
            t.body.len()
        ),
        Block::Separator => String::new(),
        Block::DecorativeBox(b) => format!(
            "[{}] {}",
            b.decoration_id().unwrap_or(b.effective_legacy_type().as_str()),
            b.content
        ),
        Block::DecorativeBalloon(b) => format!("[{} {}] {}", b.position.as_str(), b.icon, b.content),
        Block::Passthrough(p) => format!("[{}]", p.kind),
    };
    truncate(&text.split_whitespace().collect::<Vec<_>>().join(" "))
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= PREVIEW_CHARS {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(PREVIEW_CHARS - 1).collect();
    cut.push('…');
    cut
}
