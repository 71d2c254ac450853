//! Allow-list HTML sanitizer
//!
//! Rendered Markdown may carry raw HTML written by the author (or by a model), so
//! before anything is mapped to blocks the fragment is reduced to the tags and
//! attributes below. Elements outside the list are unwrapped, keeping their
//! children, except for the elements in [`DROPPED_WITH_CONTENT`], whose content is
//! never meaningful text. Comments are removed. Link and image URLs with script
//! schemes are removed.

use super::dom;
use html5ever::ns;
use markup5ever_rcdom::{Handle, NodeData};
use std::rc::Rc;

/// Elements that survive sanitization.
pub const ALLOWED_TAGS: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "br", "hr", "ul", "ol", "li", "blockquote", "cite",
    "pre", "code", "a", "strong", "em", "del", "mark", "img", "figure", "figcaption", "table",
    "thead", "tbody", "tr", "th", "td",
];

/// Attributes that survive on allowed elements.
pub const ALLOWED_ATTRIBUTES: &[&str] = &["href", "src", "alt", "title", "class", "target", "rel"];

/// Disallowed elements removed together with everything inside them.
pub const DROPPED_WITH_CONTENT: &[&str] = &[
    "script", "style", "iframe", "frame", "frameset", "object", "embed", "applet", "noscript",
    "noembed", "noframes", "template", "textarea", "select", "svg", "math", "audio", "video",
    "title", "xmp", "plaintext",
];

const URL_ATTRIBUTES: &[&str] = &["href", "src"];

/// Sanitize an HTML fragment.
///
/// Never fails: malformed input is repaired by the HTML parser, and anything the
/// sanitizer cannot keep is removed.
pub fn sanitize(html: &str) -> String {
    let dom = dom::parse(html);
    let Some(body) = dom::body(&dom) else {
        return String::new();
    };
    clean_children(&body);
    dom::inner_html(&body)
}

fn clean_children(node: &Handle) {
    let children: Vec<Handle> = node.children.borrow_mut().drain(..).collect();
    let mut kept = Vec::with_capacity(children.len());

    for child in children {
        match &child.data {
            NodeData::Text { .. } => kept.push(child.clone()),
            NodeData::Element { name, attrs, .. } => {
                let tag = &*name.local;
                if name.ns != ns!(html) || DROPPED_WITH_CONTENT.contains(&tag) {
                    log::debug!("sanitizer dropped <{tag}> with its content");
                    continue;
                }
                clean_children(&child);
                if ALLOWED_TAGS.contains(&tag) {
                    attrs.borrow_mut().retain(|attr| {
                        let key = &*attr.name.local;
                        attr.name.ns == ns!()
                            && ALLOWED_ATTRIBUTES.contains(&key)
                            && (!URL_ATTRIBUTES.contains(&key) || is_safe_url(key, &attr.value))
                    });
                    kept.push(child.clone());
                } else {
                    log::debug!("sanitizer unwrapped <{tag}>");
                    kept.extend(child.children.borrow_mut().drain(..));
                }
            }
            // comments, doctypes, processing instructions
            _ => {}
        }
    }

    for child in &kept {
        child.parent.set(Some(Rc::downgrade(node)));
    }
    *node.children.borrow_mut() = kept;
}

/// Whether a URL attribute value may be kept.
fn is_safe_url(attribute: &str, value: &str) -> bool {
    // browsers ignore whitespace and control characters inside the scheme
    let normalized: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .flat_map(char::to_lowercase)
        .collect();

    if normalized.starts_with("javascript:") || normalized.starts_with("vbscript:") {
        return false;
    }
    if let Some(data) = normalized.strip_prefix("data:") {
        return attribute == "src" && data.starts_with("image/") && !data.starts_with("image/svg");
    }
    true
}
