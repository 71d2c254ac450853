//! Block model shared by every stage of the pipeline.
//!
//! Markdown and HTML are both lowered into the same closed set of [`nodes::Block`]
//! variants, and every serializer works from that set. The block-type schemas the
//! editor registers live in [`block_types`].

pub mod block_types;
pub mod nodes;
