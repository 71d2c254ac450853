//! Custom-tag extraction
//!
//! Decorations are written in Markdown with a small fenced DSL:
//!
//! ```text
//! :::box id="ba-point"              new style, free-form decoration id
//! Content
//! :::
//!
//! :::box type="warning"             legacy style, closed set of types
//! Content
//! :::
//!
//! :::balloon position="left" icon="😊"
//! Content
//! :::
//! ```
//!
//! No Markdown renderer knows this syntax, so before rendering each fence is cut
//! out and replaced by an opaque placeholder token standing in its own paragraph.
//! The captured fence goes into a [`PlaceholderTable`] owned by the current
//! conversion; the HTML mapper later finds the token again and turns it into a
//! decorative block.
//!
//! Fences are located by a line scan that understands nesting: an inner
//! `:::name` opener raises the depth and a bare `:::` lowers it, so the
//! outermost fence captures its inner fences as raw content. `:::` inside fenced
//! code blocks is ignored. Anything malformed (no closing fence, missing or
//! invalid required attributes) is left in place as literal text.

use super::fence::FenceTracker;
use super::legacy;
use crate::ir::nodes::{BalloonPosition, LegacyType};
use std::collections::{BTreeMap, HashMap};

/// Start of every placeholder token. Private-use code points keep the token
/// inert under Markdown and HTML processing.
const TOKEN_OPEN: &str = "\u{E000}gm-tag-";
const TOKEN_CLOSE: char = '\u{E001}';

/// The decoration a fence declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Box,
    Balloon,
}

/// A captured DSL fence.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomTag {
    pub kind: TagKind,
    /// `decorationId` and optional `legacyType` for boxes, `position` and `icon`
    /// for balloons.
    pub attributes: BTreeMap<String, String>,
    /// Body text between the fences, trimmed.
    pub content: String,
    /// The fence exactly as written, opening and closing lines included.
    pub original: String,
}

impl CustomTag {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// Placeholder token → captured tag, in extraction order.
///
/// One table belongs to one conversion call; tokens are only meaningful to the
/// table that issued them.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderTable {
    prefix: String,
    entries: Vec<(String, CustomTag)>,
    index: HashMap<String, usize>,
}

impl PlaceholderTable {
    /// An empty table whose tokens cannot occur anywhere in `source`.
    pub fn for_source(source: &str) -> Self {
        let mut prefix = TOKEN_OPEN.to_string();
        let mut salt = 0usize;
        while source.contains(&prefix) {
            prefix = format!("{TOKEN_OPEN}{salt}-");
            salt += 1;
        }
        Self {
            prefix,
            ..Default::default()
        }
    }

    /// Record a tag and return its freshly issued token.
    pub fn insert(&mut self, tag: CustomTag) -> String {
        let token = format!("{}{}{}", self.prefix, self.entries.len(), TOKEN_CLOSE);
        self.index.insert(token.clone(), self.entries.len());
        self.entries.push((token.clone(), tag));
        token
    }

    pub fn get(&self, token: &str) -> Option<&CustomTag> {
        self.index.get(token).map(|&i| &self.entries[i].1)
    }

    /// Look up text that consists of exactly one token, ignoring surrounding
    /// whitespace.
    pub fn resolve(&self, text: &str) -> Option<&CustomTag> {
        self.get(text.trim())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CustomTag)> {
        self.entries.iter().map(|(token, tag)| (token.as_str(), tag))
    }

    /// Replace every token in `text` with its original fence text, passed
    /// through `encode`.
    pub fn restore_with(&self, text: &str, encode: impl Fn(&str) -> String) -> String {
        if self.is_empty() || !text.contains(&self.prefix) {
            return text.to_string();
        }
        let mut restored = text.to_string();
        for (token, tag) in &self.entries {
            if restored.contains(token.as_str()) {
                restored = restored.replace(token.as_str(), &encode(&tag.original));
            }
        }
        restored
    }
}

/// Replace every recognized DSL fence in `markdown` with a placeholder token.
///
/// Returns the cleaned Markdown and the table describing each token.
pub fn extract(markdown: &str) -> (String, PlaceholderTable) {
    let mut table = PlaceholderTable::for_source(markdown);
    let lines: Vec<&str> = markdown.split_inclusive('\n').collect();
    let mut cleaned = String::with_capacity(markdown.len());
    let mut code = FenceTracker::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        if code.update(line) || code.in_fence() {
            cleaned.push_str(line);
            i += 1;
            continue;
        }

        let Some(opening) = parse_opening(line).filter(|opening| opening.is_decoration()) else {
            cleaned.push_str(line);
            i += 1;
            continue;
        };

        let Some(close) = find_closing(&lines, i + 1) else {
            log::warn!("unterminated :::{} fence on line {}", opening.name, i + 1);
            cleaned.push_str(line);
            i += 1;
            continue;
        };

        let body = lines[i + 1..close].concat();
        let original = lines[i..=close].concat();
        let original = original.trim_end_matches(['\n', '\r']).to_string();

        match classify(&opening, body.trim(), original) {
            Some(tag) => {
                let token = table.insert(tag);
                push_blank_line(&mut cleaned);
                cleaned.push_str(&token);
                cleaned.push_str("\n\n");
                i = close + 1;
            }
            None => {
                log::warn!(
                    "leaving :::{} fence on line {} as text: unrecognized attributes",
                    opening.name,
                    i + 1
                );
                cleaned.push_str(line);
                i += 1;
            }
        }
    }

    (cleaned, table)
}

/// An opening fence line: `:::name attrs`.
#[derive(Debug, PartialEq)]
struct Opening<'a> {
    name: &'a str,
    attrs: BTreeMap<String, String>,
}

impl Opening<'_> {
    /// `:::box` and `:::balloon`; other `:::name` lines are plain text.
    fn is_decoration(&self) -> bool {
        matches!(self.name, "box" | "balloon")
    }
}

fn parse_opening(line: &str) -> Option<Opening<'_>> {
    let line = line.trim_end_matches(['\n', '\r']);
    let indent = line.len() - line.trim_start_matches(' ').len();
    if indent > 3 {
        return None;
    }
    let rest = line[indent..].strip_prefix(":::")?;
    let name_end = rest
        .find(|c: char| !(c.is_alphanumeric() || c == '-' || c == '_'))
        .unwrap_or(rest.len());
    if name_end == 0 {
        return None;
    }
    let name = &rest[..name_end];
    let tail = &rest[name_end..];
    if !tail.is_empty() && !tail.starts_with(char::is_whitespace) {
        return None;
    }
    Some(Opening {
        name,
        attrs: parse_attributes(tail),
    })
}

fn is_closing(line: &str) -> bool {
    line.trim() == ":::"
}

/// Index of the line closing the fence whose body starts at `start`.
///
/// Only nested decoration fences open a level; a `:::note` line in the body is text.
fn find_closing(lines: &[&str], start: usize) -> Option<usize> {
    let mut depth = 1usize;
    let mut code = FenceTracker::new();
    for (offset, line) in lines[start..].iter().enumerate() {
        if code.update(line) || code.in_fence() {
            continue;
        }
        if is_closing(line) {
            depth -= 1;
            if depth == 0 {
                return Some(start + offset);
            }
        } else if parse_opening(line).is_some_and(|opening| opening.is_decoration()) {
            depth += 1;
        }
    }
    None
}

fn classify(opening: &Opening<'_>, content: &str, original: String) -> Option<CustomTag> {
    let mut attributes = BTreeMap::new();
    let kind = match opening.name {
        "box" => {
            let legacy_type = opening
                .attrs
                .get("type")
                .and_then(|ty| ty.parse::<LegacyType>().ok());
            match opening.attrs.get("id").filter(|id| !id.is_empty()) {
                Some(id) => {
                    attributes.insert("decorationId".to_string(), id.clone());
                }
                None => {
                    let legacy_type = legacy_type?;
                    attributes.insert(
                        "decorationId".to_string(),
                        legacy::decoration_id_for(legacy_type).to_string(),
                    );
                }
            }
            if let Some(legacy_type) = legacy_type {
                attributes.insert("legacyType".to_string(), legacy_type.to_string());
            }
            TagKind::Box
        }
        "balloon" => {
            let position = opening.attrs.get("position")?.parse::<BalloonPosition>().ok()?;
            let icon = opening.attrs.get("icon").filter(|icon| !icon.is_empty())?;
            attributes.insert("position".to_string(), position.to_string());
            attributes.insert("icon".to_string(), icon.clone());
            TagKind::Balloon
        }
        _ => return None,
    };

    Some(CustomTag {
        kind,
        attributes,
        content: content.to_string(),
        original,
    })
}

/// Parse `key="value" key='value' key=value` pairs. Unparseable text is skipped.
fn parse_attributes(s: &str) -> BTreeMap<String, String> {
    let mut attrs = BTreeMap::new();
    let mut remaining = s.trim();
    while !remaining.is_empty() {
        match parse_key_value(remaining) {
            Some((key, value, rest)) => {
                attrs.insert(key.to_string(), value.to_string());
                remaining = rest.trim_start();
            }
            None => {
                let skip = remaining
                    .find(char::is_whitespace)
                    .unwrap_or(remaining.len());
                remaining = remaining[skip..].trim_start();
            }
        }
    }
    attrs
}

fn parse_key_value(s: &str) -> Option<(&str, &str, &str)> {
    let eq = s.find('=')?;
    let key = &s[..eq];
    if key.is_empty() || key.contains(char::is_whitespace) {
        return None;
    }
    let after = &s[eq + 1..];
    for quote in ['"', '\''] {
        if let Some(quoted) = after.strip_prefix(quote) {
            let end = quoted.find(quote)?;
            return Some((key, &quoted[..end], &quoted[end + 1..]));
        }
    }
    let end = after.find(char::is_whitespace).unwrap_or(after.len());
    Some((key, &after[..end], &after[end..]))
}

fn push_blank_line(out: &mut String) {
    if out.is_empty() || out.ends_with("\n\n") {
        return;
    }
    if out.ends_with('\n') {
        out.push('\n');
    } else {
        out.push_str("\n\n");
    }
}
