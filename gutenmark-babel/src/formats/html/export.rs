//! Standalone HTML document export
//!
//! Wraps the saved HTML of every block, without the block comment delimiters, in a
//! complete page whose head carries the article metadata.

use crate::common::meta::DocumentMeta;
use crate::formats::gutenberg::serialize_to_plain_html;
use crate::formats::html::dom::escape_html;
use crate::ir::nodes::Block;

/// Page title used when the article has no heading.
pub const UNTITLED: &str = "Untitled Article";

const STYLESHEET: &str = r#"    body {
      font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
      line-height: 1.8;
      max-width: 800px;
      margin: 0 auto;
      padding: 20px;
      color: #333;
    }
    h1, h2, h3, h4, h5, h6 { margin-top: 1.5em; margin-bottom: 0.5em; }
    h2 { border-bottom: 2px solid #0073aa; padding-bottom: 0.3em; }
    p { margin: 0 0 1.5em; }
    ul, ol { margin: 0 0 1.5em 1.5em; }
    blockquote { margin: 1.5em 0; padding: 1em 1.5em; border-left: 4px solid #0073aa; background: #f7f7f7; }
    pre { background: #1e1e1e; color: #f8f8f2; padding: 1em; border-radius: 4px; overflow-x: auto; }
    code { font-family: Consolas, Monaco, monospace; }
    img { max-width: 100%; height: auto; }
    table { width: 100%; border-collapse: collapse; margin: 1.5em 0; }
    th, td { border: 1px solid #ddd; padding: 0.75em; }
    th { background: #f7f7f7; }"#;

/// Render `blocks` as a complete HTML document described by `meta`.
pub fn serialize_to_document(blocks: &[Block], meta: &DocumentMeta) -> String {
    let title = if meta.title.is_empty() {
        UNTITLED
    } else {
        meta.title.as_str()
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <meta name="description" content="{description}">
  <meta name="keywords" content="{keywords}">
  <style>
{STYLESHEET}
  </style>
</head>
<body>
  <article>
{body}
  </article>
</body>
</html>
"#,
        title = escape_html(title),
        description = escape_html(&meta.description),
        keywords = escape_html(&meta.keywords.join(", ")),
        body = serialize_to_plain_html(blocks),
    )
}
