//! `:::box` / `:::balloon` decorations through the full import pipeline

use gutenmark_babel::ir::nodes::{
    BalloonPosition, Block, Code, DecorativeBalloon, DecorativeBox, Heading, LegacyType, Paragraph,
};
use gutenmark_babel::markdown_to_blocks;

#[test]
fn test_new_style_box() {
    let blocks = markdown_to_blocks(":::box id=\"ba-point\"\nThis is important\n:::");
    assert_eq!(
        blocks,
        vec![Block::DecorativeBox(DecorativeBox {
            decoration_id: Some("ba-point".into()),
            legacy_type: None,
            content: "This is important".into(),
        })]
    );
}

#[test]
fn test_legacy_box_carries_both_identifiers() {
    let blocks = markdown_to_blocks(":::box type=\"warning\"\nCareful\n:::\n");
    assert_eq!(
        blocks,
        vec![Block::DecorativeBox(DecorativeBox {
            decoration_id: Some("ba-warning".into()),
            legacy_type: Some(LegacyType::Warning),
            content: "Careful".into(),
        })]
    );
}

#[test]
fn test_balloon() {
    let blocks = markdown_to_blocks(":::balloon position=\"left\" icon=\"😊\"\nHello!\n:::\n");
    assert_eq!(
        blocks,
        vec![Block::DecorativeBalloon(DecorativeBalloon {
            position: BalloonPosition::Left,
            icon: "😊".into(),
            content: "Hello!".into(),
        })]
    );
}

#[test]
fn test_box_among_regular_blocks() {
    let md = "# Title\n\nIntro paragraph.\n\n:::box id=\"ba-summary\"\nSummary **here**\n:::\n\nOutro.\n";
    let blocks = markdown_to_blocks(md);
    assert_eq!(
        blocks,
        vec![
            Block::Heading(Heading::new("Title", 1)),
            Block::Paragraph(Paragraph {
                html: "Intro paragraph.".into()
            }),
            Block::DecorativeBox(DecorativeBox {
                decoration_id: Some("ba-summary".into()),
                legacy_type: None,
                content: "Summary **here**".into(),
            }),
            Block::Paragraph(Paragraph {
                html: "Outro.".into()
            }),
        ]
    );
}

#[test]
fn test_fence_touching_paragraphs() {
    let blocks = markdown_to_blocks("Before\n:::box id=\"ba-point\"\nBody\n:::\nAfter\n");
    let kinds: Vec<_> = blocks.iter().map(Block::kind).collect();
    assert_eq!(kinds, vec!["paragraph", "decorative-box", "paragraph"]);
}

#[test]
fn test_unterminated_fence_stays_text() {
    let blocks = markdown_to_blocks(":::box id=\"x\"\nNo close\n");
    match blocks.as_slice() {
        [Block::Paragraph(paragraph)] => assert!(paragraph.html.contains(":::box")),
        other => panic!("expected one paragraph, got {other:?}"),
    }
}

#[test]
fn test_invalid_balloon_stays_text() {
    let blocks = markdown_to_blocks(":::balloon position=\"top\" icon=\"😊\"\nHi\n:::\n");
    assert!(blocks
        .iter()
        .all(|block| !matches!(block, Block::DecorativeBalloon(_))));
}

#[test]
fn test_fence_inside_code_block_is_code() {
    let blocks = markdown_to_blocks("```markdown\n:::box id=\"ba-point\"\nSample\n:::\n```\n");
    assert_eq!(
        blocks,
        vec![Block::Code(Code {
            text: ":::box id=\"ba-point\"\nSample\n:::".into(),
            language: "markdown".into(),
        })]
    );
}

#[test]
fn test_nested_fence_belongs_to_outer() {
    let md = ":::balloon position=\"right\" icon=\"🐱\"\nOuter\n:::box id=\"ba-point\"\nInner\n:::\n:::\n";
    let blocks = markdown_to_blocks(md);
    assert_eq!(
        blocks,
        vec![Block::DecorativeBalloon(DecorativeBalloon {
            position: BalloonPosition::Right,
            icon: "🐱".into(),
            content: "Outer\n:::box id=\"ba-point\"\nInner\n:::".into(),
        })]
    );
}

#[test]
fn test_multiple_decorations_keep_their_own_content() {
    let md = ":::box id=\"a\"\nFirst\n:::\n\n:::box id=\"b\"\nSecond\n:::\n";
    let contents: Vec<String> = markdown_to_blocks(md)
        .into_iter()
        .map(|block| match block {
            Block::DecorativeBox(decoration) => decoration.content,
            other => panic!("expected a box, got {other:?}"),
        })
        .collect();
    assert_eq!(contents, vec!["First", "Second"]);
}

#[test]
fn test_user_text_resembling_a_token_is_untouched() {
    let md = "__CUSTOM_TAG_0__\n\n:::box id=\"ba-point\"\nReal\n:::\n";
    let blocks = markdown_to_blocks(md);
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].kind(), "paragraph");
    assert_eq!(blocks[1].kind(), "decorative-box");
}

#[test]
fn test_other_fence_name_inside_box_is_content() {
    let md = ":::box id=\"ba-point\"\nUse admonitions like\n:::note\nbody\n:::\n";
    let blocks = markdown_to_blocks(md);
    assert_eq!(
        blocks,
        vec![Block::DecorativeBox(DecorativeBox {
            decoration_id: Some("ba-point".into()),
            legacy_type: None,
            content: "Use admonitions like\n:::note\nbody".into(),
        })]
    );
}
