//! Export tests for Markdown format (blocks → Markdown)

use gutenmark_babel::blocks_to_markdown;
use gutenmark_babel::format::Format;
use gutenmark_babel::formats::markdown::MarkdownFormat;
use gutenmark_babel::ir::nodes::{
    BalloonPosition, Block, Code, DecorativeBalloon, DecorativeBox, Heading, Image, LegacyType,
    List, Paragraph, Passthrough, Quote,
};
use insta::assert_snapshot;

fn sample_blocks() -> Vec<Block> {
    vec![
        Block::Heading(Heading::new("Getting <em>started</em>", 2)),
        Block::Paragraph(Paragraph {
            html: "Hello <strong>world</strong> &amp; friends".into(),
        }),
        Block::List(List {
            ordered: false,
            items: vec!["one".into(), "<em>two</em>".into()],
        }),
        Block::List(List {
            ordered: true,
            items: vec!["first".into(), "second".into()],
        }),
        Block::Quote(Quote {
            html: "<p>Line one</p>\n<p>Line two</p>".into(),
            citation: "Someone".into(),
        }),
        Block::Code(Code {
            text: "let x = 1;".into(),
            language: "rust".into(),
        }),
        Block::Image(Image {
            url: "https://example.com/cat.png".into(),
            alt: "A cat".into(),
            caption: "ignored".into(),
        }),
        Block::Separator,
        Block::DecorativeBox(DecorativeBox {
            decoration_id: Some("ba-point".into()),
            legacy_type: Some(LegacyType::Info),
            content: "Remember this".into(),
        }),
        Block::DecorativeBalloon(DecorativeBalloon {
            position: BalloonPosition::Right,
            icon: "🐱".into(),
            content: "Nyan".into(),
        }),
    ]
}

#[test]
fn test_export_every_kind() {
    assert_snapshot!(blocks_to_markdown(&sample_blocks()), @r###"
    ## Getting started

    Hello world & friends

    - one
    - two

    1. first
    2. second

    > Line one
    > Line two
    > — Someone

    ```rust
    let x = 1;
    ```

    ![A cat](https://example.com/cat.png)

    ---

    :::box id="ba-point"
    Remember this
    :::

    :::balloon position="right" icon="🐱"
    Nyan
    :::
    "###);
}

#[test]
fn test_box_without_decoration_id_uses_legacy_type() {
    let blocks = vec![
        Block::DecorativeBox(DecorativeBox {
            decoration_id: None,
            legacy_type: Some(LegacyType::Success),
            content: "Done".into(),
        }),
        Block::DecorativeBox(DecorativeBox {
            decoration_id: Some(String::new()),
            legacy_type: None,
            content: "Plain".into(),
        }),
    ];
    assert_eq!(
        blocks_to_markdown(&blocks),
        ":::box type=\"success\"\nDone\n:::\n\n:::box type=\"info\"\nPlain\n:::"
    );
}

#[test]
fn test_quote_without_citation() {
    let blocks = vec![Block::Quote(Quote {
        html: "\n<p>Only words</p>\n".into(),
        citation: String::new(),
    })];
    assert_eq!(blocks_to_markdown(&blocks), "> Only words");
}

#[test]
fn test_passthrough_is_kept() {
    let blocks = vec![
        Block::Paragraph(Paragraph {
            html: "Before".into(),
        }),
        Block::Passthrough(Passthrough {
            kind: "core/embed".into(),
            raw: "https://example.com/video".into(),
        }),
    ];
    assert_eq!(
        blocks_to_markdown(&blocks),
        "Before\n\nhttps://example.com/video"
    );
}

#[test]
fn test_empty_sequence() {
    assert_eq!(blocks_to_markdown(&[]), "");
}

#[test]
fn test_format_trait_serialize() {
    let output = MarkdownFormat::default()
        .serialize(&[Block::Separator, Block::Separator])
        .unwrap();
    assert_eq!(output, "---\n\n---");
}
