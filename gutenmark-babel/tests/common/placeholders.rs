//! Property tests for custom-tag extraction

use gutenmark_babel::common::placeholders::{extract, TagKind};
use gutenmark_babel::ir::nodes::Block;
use gutenmark_babel::markdown_to_blocks;
use proptest::prelude::*;

fn decoration_id() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,12}"
}

fn content() -> impl Strategy<Value = String> {
    "[A-Za-z0-9]([A-Za-z0-9 ]{0,18}[A-Za-z0-9])?"
}

proptest! {
    #[test]
    fn tokens_never_occur_in_the_input(prefix in "[^`~:\\p{C}]{0,80}", id in decoration_id()) {
        let md = format!("{prefix}\n\n:::box id=\"{id}\"\nBody\n:::\n\n:::box id=\"{id}\"\nAgain\n:::\n");
        let (_, table) = extract(&md);
        let tokens: Vec<&str> = table.iter().map(|(token, _)| token).collect();
        prop_assert!(tokens.len() >= 2);
        for token in &tokens {
            prop_assert!(!md.contains(token));
        }
        for (i, a) in tokens.iter().enumerate() {
            for b in &tokens[i + 1..] {
                prop_assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn every_box_becomes_one_block(boxes in prop::collection::vec((decoration_id(), content()), 1..6)) {
        let md: String = boxes
            .iter()
            .map(|(id, body)| format!(":::box id=\"{id}\"\n{body}\n:::\n\n"))
            .collect();

        let (_, table) = extract(&md);
        prop_assert_eq!(table.len(), boxes.len());
        prop_assert!(table.iter().all(|(_, tag)| tag.kind == TagKind::Box));

        let blocks = markdown_to_blocks(&md);
        prop_assert_eq!(blocks.len(), boxes.len());
        for (block, (id, body)) in blocks.iter().zip(&boxes) {
            match block {
                Block::DecorativeBox(decoration) => {
                    prop_assert_eq!(decoration.decoration_id(), Some(id.as_str()));
                    prop_assert_eq!(&decoration.content, body);
                }
                other => prop_assert!(false, "expected a box, got {:?}", other),
            }
        }
    }

    #[test]
    fn conversion_never_panics(md in "\\PC{0,200}") {
        let _ = markdown_to_blocks(&md);
    }
}

#[test]
fn test_extraction_without_fences_is_identity() {
    let md = "# Title\n\nNo decorations here, only ::: colons.\n";
    let (cleaned, table) = extract(md);
    assert_eq!(cleaned, md);
    assert!(table.is_empty());
}
