//! Import tests for Markdown format (Markdown → blocks)

use gutenmark_babel::format::Format;
use gutenmark_babel::formats::markdown::MarkdownFormat;
use gutenmark_babel::ir::nodes::{Block, Code, Heading, List, Paragraph};
use gutenmark_babel::{markdown_to_blocks, markdown_to_blocks_with_options, ConversionOptions};
use std::path::PathBuf;

fn read_fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

fn kinds(blocks: &[Block]) -> Vec<&'static str> {
    blocks.iter().map(Block::kind).collect()
}

#[test]
fn test_paragraph_simple() {
    let blocks = markdown_to_blocks("This is a simple paragraph.\n");
    assert_eq!(
        blocks,
        vec![Block::Paragraph(Paragraph {
            html: "This is a simple paragraph.".into()
        })]
    );
}

#[test]
fn test_headings_keep_inline_html() {
    let blocks = markdown_to_blocks("# Title\n\n### Sub *it*\n");
    assert_eq!(
        blocks,
        vec![
            Block::Heading(Heading::new("Title", 1)),
            Block::Heading(Heading::new("Sub <em>it</em>", 3)),
        ]
    );
}

#[test]
fn test_lists() {
    let blocks = markdown_to_blocks("- a\n- **b**\n\n1. one\n2. two\n");
    assert_eq!(
        blocks,
        vec![
            Block::List(List {
                ordered: false,
                items: vec!["a".into(), "<strong>b</strong>".into()],
            }),
            Block::List(List {
                ordered: true,
                items: vec!["one".into(), "two".into()],
            }),
        ]
    );
}

#[test]
fn test_code_blocks() {
    let blocks = markdown_to_blocks("```rust\nfn main() {}\n```\n\n```\nplain\n```\n");
    assert_eq!(
        blocks,
        vec![
            Block::Code(Code {
                text: "fn main() {}".into(),
                language: "rust".into(),
            }),
            Block::Code(Code {
                text: "plain".into(),
                language: String::new(),
            }),
        ]
    );
}

#[test]
fn test_quote() {
    let blocks = markdown_to_blocks("> quoted text\n");
    match blocks.as_slice() {
        [Block::Quote(quote)] => {
            assert!(quote.html.contains("<p>quoted text</p>"));
            assert_eq!(quote.citation, "");
        }
        other => panic!("expected a single quote, got {other:?}"),
    }
}

#[test]
fn test_separator_between_paragraphs() {
    let blocks = markdown_to_blocks("a\n\n---\n\nb\n");
    assert_eq!(kinds(&blocks), vec!["paragraph", "separator", "paragraph"]);
}

#[test]
fn test_inline_image_stays_in_paragraph() {
    let blocks = markdown_to_blocks("![alt text](https://example.com/a.png)\n");
    match blocks.as_slice() {
        [Block::Paragraph(paragraph)] => {
            assert!(paragraph.html.contains(r#"src="https://example.com/a.png""#));
            assert!(paragraph.html.contains(r#"alt="alt text""#));
        }
        other => panic!("expected a single paragraph, got {other:?}"),
    }
}

#[test]
fn test_raw_script_is_removed() {
    let blocks = markdown_to_blocks("Hello\n\n<script>alert(1)</script>\n");
    assert_eq!(
        blocks,
        vec![Block::Paragraph(Paragraph {
            html: "Hello".into()
        })]
    );
}

#[test]
fn test_raw_wrapper_is_unwrapped() {
    let blocks = markdown_to_blocks("<div class=\"note\">\n<p>inside</p>\n</div>\n");
    assert_eq!(
        blocks,
        vec![Block::Paragraph(Paragraph {
            html: "inside".into()
        })]
    );
}

#[test]
fn test_empty_input() {
    assert!(markdown_to_blocks("").is_empty());
    assert!(markdown_to_blocks("\n\n   \n").is_empty());
}

#[test]
fn test_remove_empty_blocks_option() {
    let md = "Text\n\n```\n\n```\n";
    let kept = markdown_to_blocks(md);
    assert_eq!(kinds(&kept), vec!["paragraph", "code"]);

    let options = ConversionOptions {
        remove_empty_blocks: true,
        ..ConversionOptions::default()
    };
    let cleaned = markdown_to_blocks_with_options(md, &options);
    assert_eq!(kinds(&cleaned), vec!["paragraph"]);
}

#[test]
fn test_format_trait_parse() {
    let blocks = MarkdownFormat::default().parse("## Hi\n").unwrap();
    assert_eq!(blocks, vec![Block::Heading(Heading::new("Hi", 2))]);
}

#[test]
fn test_article_fixture() {
    let blocks = markdown_to_blocks(&read_fixture("article.md"));
    assert_eq!(
        kinds(&blocks),
        vec![
            "heading",
            "paragraph",
            "decorative-box",
            "heading",
            "list",
            "quote",
            "code",
            "decorative-balloon",
            "table",
            "separator",
            "decorative-box",
        ]
    );
}
