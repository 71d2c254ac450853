//! Format implementations
//!
//! This module contains all format implementations that convert between
//! blocks and text representations.

pub mod gutenberg;
pub mod html;
pub mod json;
pub mod markdown;

pub use gutenberg::GutenbergFormat;
pub use html::HtmlFormat;
pub use json::JsonFormat;
pub use markdown::{MarkdownFormat, MarkdownOptions};
