//! Core data structures for the block model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A semantic unit of editor content.
///
/// The variant fully determines the payload shape. Serialized as
/// `{"kind": "<kebab-case>", "payload": {...}}`; `separator` carries no payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "kebab-case")]
pub enum Block {
    Paragraph(Paragraph),
    Heading(Heading),
    List(List),
    Quote(Quote),
    Code(Code),
    Image(Image),
    Table(Table),
    Separator,
    DecorativeBox(DecorativeBox),
    DecorativeBalloon(DecorativeBalloon),
    /// A block kind this version does not understand, kept with its raw text.
    Passthrough(Passthrough),
}

impl Block {
    /// The kebab-case kind name, matching the serialized `kind` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Paragraph(_) => "paragraph",
            Block::Heading(_) => "heading",
            Block::List(_) => "list",
            Block::Quote(_) => "quote",
            Block::Code(_) => "code",
            Block::Image(_) => "image",
            Block::Table(_) => "table",
            Block::Separator => "separator",
            Block::DecorativeBox(_) => "decorative-box",
            Block::DecorativeBalloon(_) => "decorative-balloon",
            Block::Passthrough(_) => "passthrough",
        }
    }
}

/// Every kind name a [`Block`] can be deserialized from.
pub const BLOCK_KINDS: &[&str] = &[
    "paragraph",
    "heading",
    "list",
    "quote",
    "code",
    "image",
    "table",
    "separator",
    "decorative-box",
    "decorative-balloon",
    "passthrough",
];

/// Represents a paragraph of inline HTML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub html: String,
}

/// Represents a heading with a specific level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    pub html: String,
    /// 1..=6; serializers clamp anything outside that range.
    pub level: u8,
}

impl Heading {
    pub fn new(html: impl Into<String>, level: u8) -> Self {
        Self {
            html: html.into(),
            level: level.clamp(1, 6),
        }
    }
}

/// Represents a list of items, each item being raw inner HTML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    pub ordered: bool,
    pub items: Vec<String>,
}

/// Represents a block quote with an optional citation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub html: String,
    pub citation: String,
}

/// Represents a code block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Code {
    pub text: String,
    /// Empty when no language was given.
    pub language: String,
}

/// Represents an image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub alt: String,
    pub caption: String,
}

/// A table row: cell text in column order.
pub type TableRow = Vec<String>;

/// Represents a table. Rows are not required to have equal cell counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub header: Vec<TableRow>,
    pub body: Vec<TableRow>,
}

/// Represents a decorative callout box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecorativeBox {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decoration_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legacy_type: Option<LegacyType>,
    pub content: String,
}

impl DecorativeBox {
    /// The decoration id if one is set and non-empty.
    pub fn decoration_id(&self) -> Option<&str> {
        self.decoration_id.as_deref().filter(|id| !id.is_empty())
    }

    /// The legacy type to present to legacy consumers: the stored one, otherwise
    /// the type inferred from the decoration id.
    pub fn effective_legacy_type(&self) -> LegacyType {
        match (self.legacy_type, self.decoration_id()) {
            (Some(legacy), _) => legacy,
            (None, Some(id)) => crate::common::legacy::decoration_id_to_legacy_type(id),
            (None, None) => LegacyType::default(),
        }
    }
}

/// Represents a speech-balloon decoration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecorativeBalloon {
    pub position: BalloonPosition,
    pub icon: String,
    pub content: String,
}

/// A block of an unknown kind, kept so that serializers can emit it verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passthrough {
    /// The kind name as it appeared in the input.
    pub kind: String,
    pub raw: String,
}

/// The closed set of box types used before decoration ids became free-form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegacyType {
    #[default]
    Info,
    Warning,
    Success,
    Error,
}

impl LegacyType {
    pub const ALL: [LegacyType; 4] = [
        LegacyType::Info,
        LegacyType::Warning,
        LegacyType::Success,
        LegacyType::Error,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LegacyType::Info => "info",
            LegacyType::Warning => "warning",
            LegacyType::Success => "success",
            LegacyType::Error => "error",
        }
    }
}

impl fmt::Display for LegacyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LegacyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(LegacyType::Info),
            "warning" => Ok(LegacyType::Warning),
            "success" => Ok(LegacyType::Success),
            "error" => Ok(LegacyType::Error),
            other => Err(format!("unknown legacy box type '{other}'")),
        }
    }
}

/// Which side of the content a balloon's icon sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BalloonPosition {
    #[default]
    Left,
    Right,
}

impl BalloonPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            BalloonPosition::Left => "left",
            BalloonPosition::Right => "right",
        }
    }
}

impl fmt::Display for BalloonPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BalloonPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(BalloonPosition::Left),
            "right" => Ok(BalloonPosition::Right),
            other => Err(format!("unknown balloon position '{other}'")),
        }
    }
}
