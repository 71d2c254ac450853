//! WordPress block-markup output

use gutenmark_babel::ir::nodes::{Block, Code, Table};
use gutenmark_babel::{markdown_to_block_markup, FormatRegistry};
use insta::assert_snapshot;

#[test]
fn test_heading_and_paragraph() {
    assert_snapshot!(markdown_to_block_markup("## Title\n\nHello *world*\n"), @r###"
    <!-- wp:heading -->
    <h2 class="wp-block-heading">Title</h2>
    <!-- /wp:heading -->

    <!-- wp:paragraph -->
    <p>Hello <em>world</em></p>
    <!-- /wp:paragraph -->
    "###);
}

#[test]
fn test_legacy_box_records_its_type() {
    let markup = markdown_to_block_markup(":::box type=\"warning\"\nCareful\n:::\n");
    assert!(markup.starts_with("<!-- wp:blog-agent/box "));
    assert!(markup.contains(r#""type":"warning""#));
    assert!(markup.contains(r#""decorationId":"ba-warning""#));
    assert!(markup.contains(r#"<div class="ba-warning"><div>Careful</div></div>"#));
    assert!(markup.ends_with("<!-- /wp:blog-agent/box -->"));
}

#[test]
fn test_default_balloon_attributes_are_omitted() {
    let markup = markdown_to_block_markup(":::balloon position=\"left\" icon=\"😊\"\nHi\n:::\n");
    assert!(markup.starts_with(r#"<!-- wp:blog-agent/balloon {"content":"Hi"} -->"#));
    assert!(markup.contains("flex-direction:row;"));
}

#[test]
fn test_code_is_escaped() {
    let registry = FormatRegistry::default();
    let blocks = vec![Block::Code(Code {
        text: "if a < b && c > d {}".into(),
        language: "rust".into(),
    })];
    assert_snapshot!(registry.serialize(&blocks, "gutenberg").unwrap(), @r###"
    <!-- wp:code {"language":"rust"} -->
    <pre class="wp-block-code"><code>if a &lt; b &amp;&amp; c &gt; d {}</code></pre>
    <!-- /wp:code -->
    "###);
}

#[test]
fn test_table_markup() {
    let blocks = vec![Block::Table(Table {
        header: vec![vec!["A".into()]],
        body: vec![vec!["<1>".into()]],
    })];
    let markup = FormatRegistry::default()
        .serialize(&blocks, "gutenberg")
        .unwrap();
    assert!(markup.contains(
        "<table><thead><tr><th>A</th></tr></thead><tbody><tr><td>&lt;1&gt;</td></tr></tbody></table>"
    ));
}

#[test]
fn test_separator_and_list() {
    let markup = markdown_to_block_markup("1. a\n2. b\n\n---\n");
    assert_eq!(
        markup,
        concat!(
            "<!-- wp:list {\"ordered\":true} -->\n",
            "<ol class=\"wp-block-list\"><li>a</li><li>b</li></ol>\n",
            "<!-- /wp:list -->\n\n",
            "<!-- wp:separator -->\n",
            "<hr class=\"wp-block-separator has-alpha-channel-opacity\"/>\n",
            "<!-- /wp:separator -->"
        )
    );
}
