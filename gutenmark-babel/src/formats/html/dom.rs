//! Small query helpers over an `RcDom` tree.
//!
//! Enough of the browser DOM API (`textContent`, `innerHTML`, `querySelector`)
//! for the sanitizer and the block mapper, built on html5ever.

use html5ever::tendril::TendrilSink;
use html5ever::{
    parse_document, serialize, serialize::SerializeOpts, serialize::TraversalScope, ParseOpts,
};
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};

/// Parse `html` as a complete document. html5ever recovers from any input, so
/// this never fails.
pub fn parse(html: &str) -> RcDom {
    parse_document(RcDom::default(), ParseOpts::default()).one(html)
}

/// The `<body>` element of a parsed document.
pub fn body(dom: &RcDom) -> Option<Handle> {
    if is_element(&dom.document, "body") {
        return Some(dom.document.clone());
    }
    find_descendant(&dom.document, "body")
}

/// Lower-case local name of an element node.
pub fn tag_name(handle: &Handle) -> Option<&str> {
    match &handle.data {
        NodeData::Element { name, .. } => Some(&*name.local),
        _ => None,
    }
}

pub fn is_element(handle: &Handle, tag: &str) -> bool {
    tag_name(handle) == Some(tag)
}

/// Direct children that are elements.
pub fn element_children(handle: &Handle) -> Vec<Handle> {
    handle
        .children
        .borrow()
        .iter()
        .filter(|child| tag_name(child).is_some())
        .cloned()
        .collect()
}

/// Direct element children whose tag is one of `tags`.
pub fn children_named(handle: &Handle, tags: &[&str]) -> Vec<Handle> {
    element_children(handle)
        .into_iter()
        .filter(|child| tag_name(child).is_some_and(|tag| tags.contains(&tag)))
        .collect()
}

/// First descendant element (document order, excluding `handle`) named `tag`.
pub fn find_descendant(handle: &Handle, tag: &str) -> Option<Handle> {
    for child in handle.children.borrow().iter() {
        if is_element(child, tag) {
            return Some(child.clone());
        }
        if let Some(found) = find_descendant(child, tag) {
            return Some(found);
        }
    }
    None
}

/// Value of an attribute on an element node.
pub fn attr(handle: &Handle, name: &str) -> Option<String> {
    match &handle.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| &*attr.name.local == name)
            .map(|attr| attr.value.to_string()),
        _ => None,
    }
}

/// Concatenated text of all descendant text nodes.
pub fn text_content(handle: &Handle) -> String {
    let mut text = String::new();
    collect_text(handle, &mut text);
    text
}

fn collect_text(handle: &Handle, out: &mut String) {
    match &handle.data {
        NodeData::Text { contents } => out.push_str(&contents.borrow()),
        NodeData::Element { .. } | NodeData::Document => {
            for child in handle.children.borrow().iter() {
                collect_text(child, out);
            }
        }
        _ => {}
    }
}

/// Serialized HTML of the node's children.
pub fn inner_html(handle: &Handle) -> String {
    let mut output = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::ChildrenOnly(None),
        ..Default::default()
    };
    let serializable = SerializableHandle::from(handle.clone());
    if let Err(e) = serialize(&mut output, &serializable, opts) {
        log::warn!("HTML serialization failed: {e}");
        return String::new();
    }
    String::from_utf8(output).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}

/// Detach every descendant element named `tag`.
pub fn remove_descendants(handle: &Handle, tag: &str) {
    handle
        .children
        .borrow_mut()
        .retain(|child| !is_element(child, tag));
    for child in handle.children.borrow().iter() {
        remove_descendants(child, tag);
    }
}

/// Text content of an HTML fragment, with all markup removed.
pub fn strip_tags(html: &str) -> String {
    if !html.contains(['<', '&']) {
        return html.to_string();
    }
    let dom = parse(html);
    body(&dom).map(|body| text_content(&body)).unwrap_or_default()
}

/// Escape text for use in HTML element content or a double-quoted attribute.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
