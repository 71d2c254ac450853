//! Tests for the format-agnostic pieces: extraction, legacy ids, cleanup.

mod legacy;
mod placeholders;
