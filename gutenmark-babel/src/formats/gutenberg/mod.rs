//! Block-markup format implementation (output only)
//!
//! Serializes blocks the way the WordPress editor saves them: every block is a
//! pair of comment delimiters around its HTML, with the attributes that cannot be
//! read back from the HTML JSON-encoded inside the opening comment.
//!
//! ```text
//! <!-- wp:heading {"level":3} -->
//! <h3 class="wp-block-heading">Title</h3>
//! <!-- /wp:heading -->
//! ```
//!
//! Which attributes go into the comment is decided by the block-type schema in
//! [`crate::ir::block_types`]. Plain-text fields (code, captions, cell text,
//! decoration content) are HTML-escaped; paragraph, heading, list and quote HTML
//! has already been sanitized and is written as is.
//!
//! [`serialize_to_plain_html`] writes the same HTML without the delimiters; the HTML
//! document export and the JSON envelope build on it.

use crate::common::legacy::box_style;
use crate::error::FormatError;
use crate::format::Format;
use crate::formats::html::dom::escape_html;
use crate::ir::block_types::{block_type_name, block_types};
use crate::ir::nodes::{
    BalloonPosition, Block, Code, DecorativeBalloon, DecorativeBox, Image, List, Quote, Table,
    TableRow,
};
use serde_json::{json, Value};

/// Format implementation for WordPress block markup
#[derive(Debug, Default)]
pub struct GutenbergFormat;

impl Format for GutenbergFormat {
    fn name(&self) -> &str {
        "gutenberg"
    }

    fn description(&self) -> &str {
        "WordPress block markup (output only)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["wp", "gutenberg"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, blocks: &[Block]) -> Result<String, FormatError> {
        Ok(serialize_to_block_markup(blocks))
    }
}

/// Serialize blocks to block markup, one blank line between blocks.
pub fn serialize_to_block_markup(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(block_to_markup)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Serialize blocks to their saved HTML with the comment delimiters left out.
pub fn serialize_to_plain_html(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(block_to_html)
        .filter(|html| !html.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// The HTML a block saves between its comment delimiters.
pub fn block_to_html(block: &Block) -> String {
    match block {
        Block::Passthrough(passthrough) => escape_html(&passthrough.raw),
        _ => block_parts(block).1,
    }
}

fn block_to_markup(block: &Block) -> String {
    let Some(type_name) = block_type_name(block) else {
        if let Block::Passthrough(passthrough) = block {
            log::warn!(
                "block kind '{}' has no block markup; emitting it as freeform text",
                passthrough.kind
            );
            return escape_html(&passthrough.raw);
        }
        return String::new();
    };

    let (attributes, html) = block_parts(block);
    let comment_attributes = block_types()
        .get(type_name)
        .map(|block_type| block_type.comment_attributes(&attributes))
        .unwrap_or_default();
    let comment_name = type_name.strip_prefix("core/").unwrap_or(type_name);

    let mut opening = format!("<!-- wp:{comment_name} ");
    if !comment_attributes.is_empty() {
        opening.push_str(&encode_comment_attributes(&Value::Object(comment_attributes)));
        opening.push(' ');
    }
    opening.push_str("-->");

    format!("{opening}\n{html}\n<!-- /wp:{comment_name} -->")
}

/// Candidate comment attributes and saved HTML of a block.
fn block_parts(block: &Block) -> (Vec<(&'static str, Value)>, String) {
    match block {
        Block::Paragraph(paragraph) => (vec![], format!("<p>{}</p>", paragraph.html)),
        Block::Heading(heading) => {
            let level = heading.level.clamp(1, 6);
            (
                vec![("level", json!(level))],
                format!("<h{level} class=\"wp-block-heading\">{}</h{level}>", heading.html),
            )
        }
        Block::List(list) => (vec![("ordered", json!(list.ordered))], list_html(list)),
        Block::Quote(quote) => (vec![], quote_html(quote)),
        Block::Code(code) => (vec![("language", json!(code.language))], code_html(code)),
        Block::Image(image) => (vec![], image_html(image)),
        Block::Table(table) => (vec![], table_html(table)),
        Block::Separator => (
            vec![],
            "<hr class=\"wp-block-separator has-alpha-channel-opacity\"/>".to_string(),
        ),
        Block::DecorativeBox(decoration) => (
            vec![
                ("type", json!(decoration.effective_legacy_type().as_str())),
                ("decorationId", json!(decoration.decoration_id().unwrap_or(""))),
                ("content", json!(decoration.content)),
            ],
            box_html(decoration),
        ),
        Block::DecorativeBalloon(balloon) => (
            vec![
                ("position", json!(balloon.position.as_str())),
                ("icon", json!(balloon.icon)),
                ("content", json!(balloon.content)),
            ],
            balloon_html(balloon),
        ),
        Block::Passthrough(_) => (vec![], String::new()),
    }
}

/// JSON-encode attributes for a block comment, escaping sequences that would end
/// the comment or be read as markup.
///
/// Escaped backslashes are rewritten first so that the quote pass only ever sees
/// `\"` pairs that stand for a quote.
pub fn encode_comment_attributes(attributes: &Value) -> String {
    attributes
        .to_string()
        .replace("\\\\", "\\u005c")
        .replace("--", "\\u002d\\u002d")
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
        .replace("\\\"", "\\u0022")
}

fn list_html(list: &List) -> String {
    let tag = if list.ordered { "ol" } else { "ul" };
    let items: String = list
        .items
        .iter()
        .map(|item| format!("<li>{item}</li>"))
        .collect();
    format!("<{tag} class=\"wp-block-list\">{items}</{tag}>")
}

fn quote_html(quote: &Quote) -> String {
    let citation = if quote.citation.is_empty() {
        String::new()
    } else {
        format!("<cite>{}</cite>", escape_html(&quote.citation))
    };
    format!("<blockquote class=\"wp-block-quote\">{}{citation}</blockquote>", quote.html)
}

fn code_html(code: &Code) -> String {
    format!(
        "<pre class=\"wp-block-code\"><code>{}</code></pre>",
        escape_html(&code.text)
    )
}

fn image_html(image: &Image) -> String {
    let caption = if image.caption.is_empty() {
        String::new()
    } else {
        format!(
            "<figcaption class=\"wp-element-caption\">{}</figcaption>",
            escape_html(&image.caption)
        )
    };
    format!(
        "<figure class=\"wp-block-image\"><img src=\"{}\" alt=\"{}\"/>{caption}</figure>",
        escape_html(&image.url),
        escape_html(&image.alt)
    )
}

fn table_html(table: &Table) -> String {
    let row = |cells: &TableRow, tag: &str| -> String {
        let cells: String = cells
            .iter()
            .map(|cell| format!("<{tag}>{}</{tag}>", escape_html(cell)))
            .collect();
        format!("<tr>{cells}</tr>")
    };

    let mut html = String::from("<figure class=\"wp-block-table\"><table>");
    if !table.header.is_empty() {
        html.push_str("<thead>");
        table.header.iter().for_each(|cells| html.push_str(&row(cells, "th")));
        html.push_str("</thead>");
    }
    html.push_str("<tbody>");
    table.body.iter().for_each(|cells| html.push_str(&row(cells, "td")));
    html.push_str("</tbody></table></figure>");
    html
}

fn box_html(decoration: &DecorativeBox) -> String {
    let content = escape_html(&decoration.content);
    if let Some(id) = decoration.decoration_id() {
        // styled by the site's stylesheet
        return format!("<div class=\"{}\"><div>{content}</div></div>", escape_html(id));
    }

    let legacy_type = decoration.effective_legacy_type();
    let style = box_style(legacy_type);
    format!(
        concat!(
            "<div class=\"blog-agent-box blog-agent-box-{ty}\" ",
            "style=\"background-color:{bg};border-left:4px solid {border};padding:16px;margin:16px 0;border-radius:4px\">",
            "<div class=\"blog-agent-box-header\" ",
            "style=\"display:flex;align-items:center;gap:8px;margin-bottom:8px;font-weight:bold\">{icon}{label}</div>",
            "<div class=\"blog-agent-box-content\">{content}</div></div>"
        ),
        ty = legacy_type,
        bg = style.background,
        border = style.border,
        icon = style.icon,
        label = style.label,
        content = content,
    )
}

fn balloon_html(balloon: &DecorativeBalloon) -> String {
    let (direction, background) = match balloon.position {
        BalloonPosition::Left => ("row", "#f0f0f0"),
        BalloonPosition::Right => ("row-reverse", "#e3f2fd"),
    };
    format!(
        concat!(
            "<div class=\"blog-agent-balloon blog-agent-balloon-{position}\" ",
            "style=\"display:flex;flex-direction:{direction};align-items:flex-start;gap:12px;margin:16px 0\">",
            "<div class=\"blog-agent-balloon-icon\" style=\"font-size:2em;flex-shrink:0\">{icon}</div>",
            "<div class=\"blog-agent-balloon-content\" ",
            "style=\"background-color:{background};padding:12px 16px;border-radius:12px;max-width:80%\">",
            "<div>{content}</div></div></div>"
        ),
        position = balloon.position,
        direction = direction,
        icon = escape_html(&balloon.icon),
        background = background,
        content = escape_html(&balloon.content),
    )
}
