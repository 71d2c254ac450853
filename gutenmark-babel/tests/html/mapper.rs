//! HTML → block mapping through the `html` format

use gutenmark_babel::common::placeholders::PlaceholderTable;
use gutenmark_babel::format::Format;
use gutenmark_babel::formats::html::{map_to_blocks, HtmlFormat};
use gutenmark_babel::ir::nodes::{Block, Image, Paragraph, Quote, Table};

fn map(html: &str) -> Vec<Block> {
    map_to_blocks(html, &PlaceholderTable::default())
}

#[test]
fn test_only_top_level_elements_become_blocks() {
    let blocks = map("<p>One</p><ul><li><p>Nested para</p></li></ul><p>Two</p>");
    let kinds: Vec<_> = blocks.iter().map(Block::kind).collect();
    assert_eq!(kinds, vec!["paragraph", "list", "paragraph"]);
}

#[test]
fn test_figure_without_image_is_a_paragraph() {
    assert_eq!(
        map("<figure><figcaption>Just text</figcaption></figure>"),
        vec![Block::Paragraph(Paragraph {
            html: "<figcaption>Just text</figcaption>".into()
        })]
    );
}

#[test]
fn test_figure_prefers_figcaption_over_title() {
    assert_eq!(
        map(r#"<figure><img src="x.png" alt="X" title="Title"><figcaption>Caption</figcaption></figure>"#),
        vec![Block::Image(Image {
            url: "x.png".into(),
            alt: "X".into(),
            caption: "Caption".into(),
        })]
    );
}

#[test]
fn test_quote_with_inline_cite() {
    assert_eq!(
        map("<blockquote><p>Be kind. <cite>Anon</cite></p></blockquote>"),
        vec![Block::Quote(Quote {
            html: "<p>Be kind. </p>".into(),
            citation: "Anon".into(),
        })]
    );
}

#[test]
fn test_table_with_thead_and_tbody() {
    let html = "<table><thead><tr><th>H1</th><th>H2</th></tr></thead><tbody><tr><td>a</td><th>b</th></tr></tbody></table>";
    assert_eq!(
        map(html),
        vec![Block::Table(Table {
            header: vec![vec!["H1".into(), "H2".into()]],
            body: vec![vec!["a".into(), "b".into()]],
        })]
    );
}

#[test]
fn test_whitespace_between_elements_is_ignored() {
    assert_eq!(map("\n  <hr>\n\n"), vec![Block::Separator]);
}

#[test]
fn test_html_format_parses_fragments() {
    let blocks = HtmlFormat
        .parse("<h2>Title</h2><div><p>Wrapped</p></div><script>x()</script>")
        .unwrap();
    let kinds: Vec<_> = blocks.iter().map(Block::kind).collect();
    assert_eq!(kinds, vec!["heading", "paragraph"]);
}
