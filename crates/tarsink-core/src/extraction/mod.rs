//! Extraction pipeline: entry loop, filesystem materialization and
//! best-effort metadata restore.

pub mod engine;
pub(crate) mod materialize;
pub(crate) mod metadata;

pub use engine::Extractor;
pub use materialize::CREATE_RETRY_DELAY;
pub use metadata::MODE_MASK;
