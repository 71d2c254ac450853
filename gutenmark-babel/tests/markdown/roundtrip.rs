//! Markdown → blocks → Markdown stability

use gutenmark_babel::ir::nodes::Block;
use gutenmark_babel::{blocks_to_markdown, markdown_to_blocks};

const DOCUMENT: &str = r#"## Heading

Plain paragraph.

- one
- two

:::box id="ba-point"
Point
:::

:::box type="error"
Something failed
:::

:::balloon position="left" icon="😊"
Hi there
:::

```sh
echo hello
```

---
"#;

#[test]
fn test_export_is_stable_after_one_pass() {
    let first = blocks_to_markdown(&markdown_to_blocks(DOCUMENT));
    let second = blocks_to_markdown(&markdown_to_blocks(&first));
    assert_eq!(first, second);
}

#[test]
fn test_decorations_survive_the_round_trip() {
    let blocks = markdown_to_blocks(&blocks_to_markdown(&markdown_to_blocks(DOCUMENT)));
    let decorations: Vec<String> = blocks
        .iter()
        .filter_map(|block| match block {
            Block::DecorativeBox(decoration) => Some(format!(
                "box {} {}",
                decoration.decoration_id().unwrap_or("-"),
                decoration.effective_legacy_type()
            )),
            Block::DecorativeBalloon(balloon) => {
                Some(format!("balloon {} {}", balloon.position, balloon.icon))
            }
            _ => None,
        })
        .collect();
    assert_eq!(
        decorations,
        vec!["box ba-point info", "box ba-error error", "balloon left 😊"]
    );
}

#[test]
fn test_block_sequence_is_preserved() {
    let original = markdown_to_blocks(DOCUMENT);
    let reparsed = markdown_to_blocks(&blocks_to_markdown(&original));
    let kinds = |blocks: &[Block]| blocks.iter().map(Block::kind).collect::<Vec<_>>();
    assert_eq!(kinds(&original), kinds(&reparsed));
}
