//! Format-agnostic pieces shared by both conversion directions.
//!
//! - [`placeholders`]: pulls the `:::box` / `:::balloon` DSL out of Markdown
//!   before rendering and hands the mapper a table to resolve it again.
//! - [`legacy`]: the legacy `type` ↔ decoration id lookups used on both sides.
//! - [`cleanup`]: empty-block detection and removal.
//! - [`meta`]: title, description, keywords and word count of an article.

pub mod cleanup;
mod fence;
pub mod legacy;
pub mod meta;
pub mod placeholders;
