//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations must implement.
//! The trait provides a uniform interface for turning text into blocks and blocks into text.

use crate::error::FormatError;
use crate::ir::nodes::Block;
use std::collections::HashMap;

/// Trait for block formats
///
/// Implementors provide conversion between a string representation and a block sequence.
/// Formats can support parsing, serialization, or both.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn supports_parsing(&self) -> bool {
///         true
///     }
///
///     fn parse(&self, source: &str) -> Result<Vec<Block>, FormatError> {
///         todo!()
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "markdown", "json", "gutenberg")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format (e.g., ["md", "markdown"])
    ///
    /// Returns a slice of file extensions without the leading dot.
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → blocks)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (blocks → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into blocks
    ///
    /// Default implementation returns NotSupported error.
    fn parse(&self, _source: &str) -> Result<Vec<Block>, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize blocks into source text
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _blocks: &[Block]) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }

    /// Serialize blocks, optionally using extra parameters.
    ///
    /// Formats without parameters can rely on the default implementation, which
    /// delegates to [`Format::serialize`] and rejects any parameter it is given.
    fn serialize_with_options(
        &self,
        blocks: &[Block],
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            self.serialize(blocks)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}

/// Read a boolean `--extra-<key>` parameter. A bare flag (empty value) means `true`.
pub fn parse_bool_flag(
    options: &HashMap<String, String>,
    key: &str,
    default: bool,
) -> Result<bool, FormatError> {
    if let Some(value) = options.get(key) {
        if value.is_empty() {
            return Ok(true);
        }
        match value.to_lowercase().as_str() {
            "true" | "1" | "yes" | "y" => Ok(true),
            "false" | "0" | "no" | "n" => Ok(false),
            other => Err(FormatError::SerializationError(format!(
                "Invalid boolean value '{other}' for --extra-{key}"
            ))),
        }
    } else {
        Ok(default)
    }
}

/// Reject any extra parameter not in `known`.
pub fn check_known_options(
    format: &str,
    options: &HashMap<String, String>,
    known: &[&str],
) -> Result<(), FormatError> {
    match options.keys().find(|key| !known.contains(&key.as_str())) {
        Some(key) => Err(FormatError::NotSupported(format!(
            "Format '{format}' does not support parameter '{key}'"
        ))),
        None => Ok(()),
    }
}
