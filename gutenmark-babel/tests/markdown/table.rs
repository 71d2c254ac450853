//! GFM tables in both directions

use gutenmark_babel::ir::nodes::{Block, Table};
use gutenmark_babel::{
    blocks_to_markdown, markdown_to_blocks, markdown_to_blocks_with_options, ConversionOptions,
    MarkdownOptions,
};

const SIMPLE_TABLE: &str = "| Name | Age |\n| --- | --- |\n| Ann | 30 |\n| Bob | 25 |\n";

#[test]
fn test_import_table() {
    let blocks = markdown_to_blocks(SIMPLE_TABLE);
    assert_eq!(
        blocks,
        vec![Block::Table(Table {
            header: vec![vec!["Name".into(), "Age".into()]],
            body: vec![
                vec!["Ann".into(), "30".into()],
                vec!["Bob".into(), "25".into()],
            ],
        })]
    );
}

#[test]
fn test_export_table() {
    let blocks = markdown_to_blocks(SIMPLE_TABLE);
    assert_eq!(blocks_to_markdown(&blocks), SIMPLE_TABLE.trim_end());
}

#[test]
fn test_cell_markup_is_reduced_to_text() {
    let blocks = markdown_to_blocks("| A |\n| --- |\n| **bold** `code` |\n");
    match blocks.as_slice() {
        [Block::Table(table)] => assert_eq!(table.body, vec![vec!["bold code".to_string()]]),
        other => panic!("expected a table, got {other:?}"),
    }
}

#[test]
fn test_header_only_table() {
    let blocks = markdown_to_blocks("| A | B |\n| --- | --- |\n");
    match blocks.as_slice() {
        [Block::Table(table)] => {
            assert_eq!(table.header, vec![vec!["A".to_string(), "B".to_string()]]);
            assert!(table.body.is_empty());
        }
        other => panic!("expected a table, got {other:?}"),
    }
    assert_eq!(blocks_to_markdown(&blocks), "| A | B |\n| --- | --- |");
}

#[test]
fn test_ragged_rows_are_not_validated() {
    let table = Table {
        header: vec![vec!["A".into(), "B".into()]],
        body: vec![vec!["1".into()], vec!["2".into(), "3".into(), "4".into()]],
    };
    assert_eq!(
        blocks_to_markdown(&[Block::Table(table)]),
        "| A | B |\n| --- | --- |\n| 1 |\n| 2 | 3 | 4 |"
    );
}

#[test]
fn test_tables_extension_disabled() {
    let options = ConversionOptions {
        markdown: MarkdownOptions {
            tables: false,
            ..MarkdownOptions::default()
        },
        ..ConversionOptions::default()
    };
    let blocks = markdown_to_blocks_with_options(SIMPLE_TABLE, &options);
    assert!(blocks.iter().all(|block| block.kind() == "paragraph"));
}
