//! Block-type schemas
//!
//! Each [`Block`] variant corresponds to a named editor block type (`core/paragraph`,
//! `blog-agent/box`, ...). The schema lists the type's attributes, their defaults and
//! whether an attribute is sourced from the saved HTML or stored in the block
//! comment. The block-markup serializer uses it to decide which attributes to write.
//!
//! The process-wide registry is installed once by [`initialize_blocks`].

use super::nodes::Block;
use crate::error::FormatError;
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// One attribute of a block type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeSpec {
    pub name: String,
    /// Value assumed when the attribute is absent.
    pub default: Option<Value>,
    /// Read back from the block's HTML rather than from the comment delimiter.
    pub sourced: bool,
}

impl AttributeSpec {
    pub fn stored(name: &str, default: Value) -> Self {
        Self {
            name: name.to_string(),
            default: Some(default),
            sourced: false,
        }
    }

    pub fn sourced(name: &str) -> Self {
        Self {
            name: name.to_string(),
            default: None,
            sourced: true,
        }
    }
}

/// Schema of a named block type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockType {
    pub name: String,
    pub title: String,
    pub category: String,
    pub attributes: Vec<AttributeSpec>,
}

impl BlockType {
    pub fn new(name: &str, title: &str, category: &str, attributes: Vec<AttributeSpec>) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
            category: category.to_string(),
            attributes,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeSpec> {
        self.attributes.iter().find(|attr| attr.name == name)
    }

    /// The subset of `values` that belongs in the block comment: declared,
    /// not sourced from HTML, and different from the default.
    pub fn comment_attributes(&self, values: &[(&str, Value)]) -> serde_json::Map<String, Value> {
        values
            .iter()
            .filter(|(name, value)| match self.attribute(name) {
                Some(spec) => !spec.sourced && spec.default.as_ref() != Some(value),
                None => false,
            })
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }
}

/// Registry of block types keyed by name.
#[derive(Debug, Clone, Default)]
pub struct BlockTypeRegistry {
    types: BTreeMap<String, BlockType>,
}

impl BlockTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a block type. Names are unique; registering a name twice fails.
    pub fn register(&mut self, block_type: BlockType) -> Result<(), FormatError> {
        if self.types.contains_key(&block_type.name) {
            return Err(FormatError::DuplicateBlockType(block_type.name));
        }
        log::debug!("registered block type {}", block_type.name);
        self.types.insert(block_type.name.clone(), block_type);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&BlockType> {
        self.types.get(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.types.keys().map(String::as_str).collect()
    }

    /// Schema for the block type a [`Block`] is saved as.
    pub fn for_block(&self, block: &Block) -> Option<&BlockType> {
        self.get(block_type_name(block)?)
    }

    /// A registry holding the core and the custom decoration types.
    pub fn with_defaults() -> Self {
        let types = core_block_types()
            .into_iter()
            .chain(custom_block_types())
            .map(|block_type| (block_type.name.clone(), block_type))
            .collect();
        Self { types }
    }
}

/// The editor block type a [`Block`] variant is saved as. `None` for passthrough blocks.
pub fn block_type_name(block: &Block) -> Option<&'static str> {
    match block {
        Block::Paragraph(_) => Some("core/paragraph"),
        Block::Heading(_) => Some("core/heading"),
        Block::List(_) => Some("core/list"),
        Block::Quote(_) => Some("core/quote"),
        Block::Code(_) => Some("core/code"),
        Block::Image(_) => Some("core/image"),
        Block::Table(_) => Some("core/table"),
        Block::Separator => Some("core/separator"),
        Block::DecorativeBox(_) => Some("blog-agent/box"),
        Block::DecorativeBalloon(_) => Some("blog-agent/balloon"),
        Block::Passthrough(_) => None,
    }
}

fn core_block_types() -> Vec<BlockType> {
    vec![
        BlockType::new(
            "core/paragraph",
            "Paragraph",
            "text",
            vec![AttributeSpec::sourced("content")],
        ),
        BlockType::new(
            "core/heading",
            "Heading",
            "text",
            vec![
                AttributeSpec::sourced("content"),
                AttributeSpec::stored("level", json!(2)),
            ],
        ),
        BlockType::new(
            "core/list",
            "List",
            "text",
            vec![
                AttributeSpec::stored("ordered", json!(false)),
                AttributeSpec::sourced("values"),
            ],
        ),
        BlockType::new(
            "core/quote",
            "Quote",
            "text",
            vec![
                AttributeSpec::sourced("value"),
                AttributeSpec::sourced("citation"),
            ],
        ),
        BlockType::new(
            "core/code",
            "Code",
            "text",
            vec![
                AttributeSpec::sourced("content"),
                AttributeSpec::stored("language", json!("")),
            ],
        ),
        BlockType::new(
            "core/image",
            "Image",
            "media",
            vec![
                AttributeSpec::sourced("url"),
                AttributeSpec::sourced("alt"),
                AttributeSpec::sourced("caption"),
            ],
        ),
        BlockType::new("core/separator", "Separator", "design", vec![]),
        BlockType::new(
            "core/table",
            "Table",
            "text",
            vec![AttributeSpec::sourced("head"), AttributeSpec::sourced("body")],
        ),
    ]
}

fn custom_block_types() -> Vec<BlockType> {
    vec![
        BlockType::new(
            "blog-agent/box",
            "装飾ボックス",
            "formatting",
            vec![
                AttributeSpec::stored("type", json!("info")),
                AttributeSpec::stored("decorationId", json!("")),
                AttributeSpec::stored("content", json!("")),
            ],
        ),
        BlockType::new(
            "blog-agent/balloon",
            "吹き出し",
            "formatting",
            vec![
                AttributeSpec::stored("position", json!("left")),
                AttributeSpec::stored("icon", json!("😊")),
                AttributeSpec::stored("content", json!("")),
            ],
        ),
    ]
}

static BLOCK_TYPES: OnceLock<BlockTypeRegistry> = OnceLock::new();

/// Install the process-wide block-type registry.
///
/// Safe to call any number of times from any thread; the registry is built once.
/// Returns `true` only for the call that built it.
pub fn initialize_blocks() -> bool {
    let mut built = false;
    BLOCK_TYPES.get_or_init(|| {
        built = true;
        log::debug!("initializing block types");
        BlockTypeRegistry::with_defaults()
    });
    built
}

/// The process-wide registry, initializing it on first use.
pub fn block_types() -> &'static BlockTypeRegistry {
    BLOCK_TYPES.get_or_init(BlockTypeRegistry::with_defaults)
}
