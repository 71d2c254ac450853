//! Library half of the `gutenmark` binary, shared with its integration tests.

pub mod transforms;
