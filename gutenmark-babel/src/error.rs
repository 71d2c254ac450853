//! Error types for format operations

/// Errors that can occur during format operations
///
/// The conversion pipeline itself never fails; these come from the format layer
/// (unknown names, unsupported directions, malformed JSON) and from block-type
/// registration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during parsing
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// Format does not support the requested direction
    #[error("Operation not supported: {0}")]
    NotSupported(String),
    /// A block type with this name is already registered
    #[error("Block type '{0}' is already registered")]
    DuplicateBlockType(String),
}
