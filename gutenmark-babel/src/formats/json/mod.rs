//! JSON format implementation
//!
//! The interchange form of a block sequence: a JSON array of
//! `{"kind": ..., "payload": {...}}` objects, exactly as serde derives it for
//! [`Block`]. Objects whose `kind` this version does not know are kept as
//! passthrough blocks holding the original object text, and are written back
//! unchanged, so newer documents pass through older tools without losing content.
//!
//! With `--extra-envelope` the array is wrapped in an export document:
//!
//! ```text
//! {"version": "1.0", "meta": {...}, "content": {"gutenberg": ..., "html": ..., "blocks": [...]}}
//! ```
//!
//! Parsing accepts both shapes.

use crate::common::meta::{generate_meta, META_OPTIONS};
use crate::error::FormatError;
use crate::format::{check_known_options, parse_bool_flag, Format};
use crate::formats::gutenberg::{serialize_to_block_markup, serialize_to_plain_html};
use crate::ir::nodes::{Block, Passthrough, BLOCK_KINDS};
use serde_json::{json, Value};
use std::collections::HashMap;

/// Version written into export envelopes.
pub const ENVELOPE_VERSION: &str = "1.0";

/// Format implementation for block JSON
#[derive(Debug)]
pub struct JsonFormat {
    pretty: bool,
}

impl JsonFormat {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Default for JsonFormat {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Block sequence as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Vec<Block>, FormatError> {
        let document: Value = serde_json::from_str(source)
            .map_err(|e| FormatError::ParseError(format!("Invalid block JSON: {e}")))?;
        let values = match document {
            Value::Array(values) => values,
            mut envelope => match envelope.pointer_mut("/content/blocks").map(Value::take) {
                Some(Value::Array(values)) => values,
                _ => {
                    return Err(FormatError::ParseError(
                        "Block JSON must be an array or an export envelope with content.blocks"
                            .to_string(),
                    ))
                }
            },
        };
        values
            .into_iter()
            .enumerate()
            .map(|(index, value)| value_to_block(index, value))
            .collect()
    }

    fn serialize(&self, blocks: &[Block]) -> Result<String, FormatError> {
        to_json(blocks, self.pretty)
    }

    fn serialize_with_options(
        &self,
        blocks: &[Block],
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let known: Vec<&str> = ["pretty", "envelope"]
            .into_iter()
            .chain(META_OPTIONS.iter().copied())
            .collect();
        check_known_options(self.name(), options, &known)?;
        let pretty = parse_bool_flag(options, "pretty", self.pretty)?;
        if !parse_bool_flag(options, "envelope", false)? {
            if let Some(key) = META_OPTIONS.iter().find(|key| options.contains_key(**key)) {
                return Err(FormatError::NotSupported(format!(
                    "--extra-{key} requires --extra-envelope"
                )));
            }
            return to_json(blocks, pretty);
        }

        let meta = generate_meta(blocks).with_options(options);
        let envelope = json!({
            "version": ENVELOPE_VERSION,
            "meta": meta,
            "content": {
                "gutenberg": serialize_to_block_markup(blocks),
                "html": serialize_to_plain_html(blocks),
                "blocks": blocks_to_values(blocks)?,
            },
        });
        write_value(&envelope, pretty)
    }
}

fn value_to_block(index: usize, value: Value) -> Result<Block, FormatError> {
    let kind = value
        .get("kind")
        .and_then(Value::as_str)
        .ok_or_else(|| FormatError::ParseError(format!("Block {index} has no string 'kind'")))?;

    if !BLOCK_KINDS.contains(&kind) {
        log::warn!("block {index} has unknown kind '{kind}'; keeping it as passthrough");
        return Ok(Block::Passthrough(Passthrough {
            kind: kind.to_string(),
            raw: value.to_string(),
        }));
    }

    serde_json::from_value(value)
        .map_err(|e| FormatError::ParseError(format!("Block {index} is malformed: {e}")))
}

fn to_json(blocks: &[Block], pretty: bool) -> Result<String, FormatError> {
    write_value(&Value::Array(blocks_to_values(blocks)?), pretty)
}

fn blocks_to_values(blocks: &[Block]) -> Result<Vec<Value>, FormatError> {
    blocks.iter().map(block_to_value).collect()
}

/// Passthrough blocks read from JSON are written back as the object they came from.
fn block_to_value(block: &Block) -> Result<Value, FormatError> {
    if let Block::Passthrough(passthrough) = block {
        match serde_json::from_str::<Value>(&passthrough.raw) {
            Ok(value @ Value::Object(_)) => return Ok(value),
            _ => log::debug!(
                "passthrough '{}' is not a JSON object; writing its block form",
                passthrough.kind
            ),
        }
    }
    serde_json::to_value(block).map_err(|e| FormatError::SerializationError(e.to_string()))
}

fn write_value(value: &Value, pretty: bool) -> Result<String, FormatError> {
    let result = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    result.map_err(|e| FormatError::SerializationError(e.to_string()))
}
