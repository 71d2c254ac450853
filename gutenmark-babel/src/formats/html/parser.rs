//! HTML → block mapping
//!
//! Walks the top-level elements of a sanitized fragment and turns each one into
//! at most one [`Block`]. Nested structure below the top level is kept as inner
//! HTML inside the block payload. Rules are tried in order and the first match
//! wins:
//!
//! | Element                          | Block                                        |
//! |----------------------------------|----------------------------------------------|
//! | text is exactly one placeholder  | decorative box / balloon from the side table |
//! | empty inner HTML (not hr / img)  | none                                         |
//! | `h1`–`h6`                        | heading                                      |
//! | `p`                              | paragraph                                    |
//! | `ul` / `ol`                      | list of direct `li` inner HTML               |
//! | `blockquote`                     | quote, `cite` text as citation               |
//! | `pre`                            | code, language from `language-*` class       |
//! | `img`                            | image from `src` / `alt` / `title`           |
//! | `figure` with an `img`           | image, `figcaption` text as caption          |
//! | `hr`                             | separator                                    |
//! | `table`                          | table                                        |
//! | anything else                    | paragraph with the inner HTML verbatim       |

use super::dom;
use crate::common::placeholders::{CustomTag, PlaceholderTable, TagKind};
use crate::ir::nodes::{
    Block, Code, DecorativeBalloon, DecorativeBox, Heading, Image, List, Paragraph, Quote, Table,
    TableRow,
};
use markup5ever_rcdom::Handle;

/// Map a sanitized HTML fragment to blocks, in source order.
pub fn map_to_blocks(html: &str, placeholders: &PlaceholderTable) -> Vec<Block> {
    let dom = dom::parse(html);
    let Some(body) = dom::body(&dom) else {
        return Vec::new();
    };
    let mapper = Mapper { placeholders };
    dom::element_children(&body)
        .iter()
        .filter_map(|element| mapper.element_to_block(element))
        .collect()
}

struct Mapper<'a> {
    placeholders: &'a PlaceholderTable,
}

impl Mapper<'_> {
    fn element_to_block(&self, element: &Handle) -> Option<Block> {
        let tag = dom::tag_name(element)?;

        if let Some(custom) = self.placeholders.resolve(&dom::text_content(element)) {
            return Some(decorative_block(custom));
        }

        if tag != "hr" && tag != "img" && dom::inner_html(element).trim().is_empty() {
            return None;
        }

        let block = match tag {
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                let level = tag[1..].parse().unwrap_or(2);
                Block::Heading(Heading::new(self.inner_html(element), level))
            }
            "p" => Block::Paragraph(Paragraph {
                html: self.inner_html(element),
            }),
            "ul" | "ol" => Block::List(List {
                ordered: tag == "ol",
                items: dom::children_named(element, &["li"])
                    .iter()
                    .map(|li| self.inner_html(li))
                    .collect(),
            }),
            "blockquote" => {
                let citation = dom::find_descendant(element, "cite")
                    .map(|cite| dom::text_content(&cite))
                    .unwrap_or_default();
                dom::remove_descendants(element, "cite");
                Block::Quote(Quote {
                    html: self.inner_html(element),
                    citation: self.restore_text(&citation),
                })
            }
            "pre" => code_block(element),
            "img" => Block::Image(Image {
                url: dom::attr(element, "src").unwrap_or_default(),
                alt: dom::attr(element, "alt").unwrap_or_default(),
                caption: dom::attr(element, "title").unwrap_or_default(),
            }),
            "figure" => match dom::find_descendant(element, "img") {
                Some(img) => Block::Image(Image {
                    url: dom::attr(&img, "src").unwrap_or_default(),
                    alt: dom::attr(&img, "alt").unwrap_or_default(),
                    caption: dom::find_descendant(element, "figcaption")
                        .map(|caption| dom::text_content(&caption))
                        .unwrap_or_default(),
                }),
                None => self.fallback_paragraph(element),
            },
            "hr" => Block::Separator,
            "table" => self.table_block(element),
            _ => self.fallback_paragraph(element),
        };
        Some(block)
    }

    fn fallback_paragraph(&self, element: &Handle) -> Block {
        Block::Paragraph(Paragraph {
            html: self.inner_html(element),
        })
    }

    fn table_block(&self, table: &Handle) -> Block {
        let header = dom::children_named(table, &["thead"])
            .iter()
            .flat_map(|thead| dom::children_named(thead, &["tr"]))
            .map(|tr| self.table_row(&tr))
            .collect();

        let tbodies = dom::children_named(table, &["tbody"]);
        let rows = if tbodies.is_empty() {
            dom::children_named(table, &["tr"])
        } else {
            tbodies
                .iter()
                .flat_map(|tbody| dom::children_named(tbody, &["tr"]))
                .collect()
        };
        let body = rows.iter().map(|tr| self.table_row(tr)).collect();

        Block::Table(Table { header, body })
    }

    fn table_row(&self, tr: &Handle) -> TableRow {
        dom::children_named(tr, &["th", "td"])
            .iter()
            .map(|cell| self.restore_text(&dom::text_content(cell)))
            .collect()
    }

    /// Inner HTML with any stray placeholder turned back into its fence text.
    fn inner_html(&self, element: &Handle) -> String {
        self.placeholders
            .restore_with(&dom::inner_html(element), dom::escape_html)
    }

    fn restore_text(&self, text: &str) -> String {
        self.placeholders.restore_with(text, str::to_string)
    }
}

fn decorative_block(tag: &CustomTag) -> Block {
    match tag.kind {
        TagKind::Box => Block::DecorativeBox(DecorativeBox {
            decoration_id: tag.attribute("decorationId").map(str::to_string),
            legacy_type: tag.attribute("legacyType").and_then(|ty| ty.parse().ok()),
            content: tag.content.clone(),
        }),
        TagKind::Balloon => Block::DecorativeBalloon(DecorativeBalloon {
            position: tag
                .attribute("position")
                .and_then(|position| position.parse().ok())
                .unwrap_or_default(),
            icon: tag.attribute("icon").unwrap_or_default().to_string(),
            content: tag.content.clone(),
        }),
    }
}

fn code_block(pre: &Handle) -> Block {
    let code = dom::find_descendant(pre, "code");
    let mut text = dom::text_content(code.as_ref().unwrap_or(pre));
    if text.ends_with('\n') {
        text.pop();
    }
    let language = code
        .and_then(|code| dom::attr(&code, "class"))
        .and_then(|class| {
            class
                .split_whitespace()
                .find_map(|name| name.strip_prefix("language-"))
                .map(str::to_string)
        })
        .unwrap_or_default();
    Block::Code(Code { text, language })
}
