//! Legacy box type ↔ decoration id translation
//!
//! Boxes were first written as `:::box type="info"` with a closed set of four
//! types. Newer content names a free-form decoration id (`:::box id="ba-point"`)
//! whose styling lives in the site's CSS. Both generations are still read, so the
//! two lookups below are total: unknown inputs resolve to a usable default.

use crate::ir::nodes::LegacyType;

/// Decoration id used when a legacy type cannot be resolved.
pub const DEFAULT_DECORATION_ID: &str = "ba-point";

/// Legacy type → decoration id.
pub static LEGACY_TYPE_TO_DECORATION_ID: &[(LegacyType, &str)] = &[
    (LegacyType::Info, "ba-point"),
    (LegacyType::Warning, "ba-warning"),
    (LegacyType::Success, "ba-success"),
    (LegacyType::Error, "ba-error"),
];

/// Decoration id → legacy type. Ids without a dedicated legacy type map to `info`.
pub static DECORATION_ID_TO_LEGACY_TYPE: &[(&str, LegacyType)] = &[
    ("ba-point", LegacyType::Info),
    ("ba-warning", LegacyType::Warning),
    ("ba-success", LegacyType::Success),
    ("ba-error", LegacyType::Error),
    ("ba-highlight", LegacyType::Info),
    ("ba-quote", LegacyType::Info),
    ("ba-summary", LegacyType::Info),
    ("ba-checklist", LegacyType::Info),
    ("ba-number-list", LegacyType::Info),
];

/// Translate a legacy `type` attribute value to a decoration id.
///
/// Unrecognized values fall back to [`DEFAULT_DECORATION_ID`].
pub fn legacy_type_to_decoration_id(legacy_type: &str) -> &'static str {
    legacy_type
        .parse::<LegacyType>()
        .map(decoration_id_for)
        .unwrap_or(DEFAULT_DECORATION_ID)
}

/// Typed form of [`legacy_type_to_decoration_id`].
pub fn decoration_id_for(legacy_type: LegacyType) -> &'static str {
    LEGACY_TYPE_TO_DECORATION_ID
        .iter()
        .find(|(ty, _)| *ty == legacy_type)
        .map(|(_, id)| *id)
        .unwrap_or(DEFAULT_DECORATION_ID)
}

/// Infer the legacy type for a decoration id, defaulting to `info`.
pub fn decoration_id_to_legacy_type(decoration_id: &str) -> LegacyType {
    DECORATION_ID_TO_LEGACY_TYPE
        .iter()
        .find(|(id, _)| *id == decoration_id)
        .map(|(_, ty)| *ty)
        .unwrap_or_default()
}

/// Inline presentation of a legacy box, used when rendering block markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxStyle {
    pub background: &'static str,
    pub border: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}

pub fn box_style(legacy_type: LegacyType) -> BoxStyle {
    match legacy_type {
        LegacyType::Info => BoxStyle {
            background: "#e7f3ff",
            border: "#2196f3",
            icon: "ℹ️",
            label: "情報",
        },
        LegacyType::Warning => BoxStyle {
            background: "#fff3e0",
            border: "#ff9800",
            icon: "⚠️",
            label: "警告",
        },
        LegacyType::Success => BoxStyle {
            background: "#e8f5e9",
            border: "#4caf50",
            icon: "✅",
            label: "成功",
        },
        LegacyType::Error => BoxStyle {
            background: "#ffebee",
            border: "#f44336",
            icon: "❌",
            label: "エラー",
        },
    }
}
