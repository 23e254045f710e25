//! jdq-core: dot-path value lookup over serde_json trees
//!
//! This crate focuses on a small, well-factored surface:
//! - Dot-path tokenizer with `\.` / `\\` escapes and a bounded segment cache
//! - Resolver over `serde_json::Value` (object keys, array indices,
//!   negative indices), in lossy and strict lookup forms
//! - Thin `std::fs` wrappers (exists/copy/remove/backup) for CLI use
//!
pub mod cache;
pub mod fsutil;
pub mod path;
pub mod query;

// Re-export the lookup API
pub use cache::SegmentCache;
pub use path::{escape_segment, split_segments};
pub use query::{JsonKind, Miss, PathResolver, kind_of, resolve_path, string_paths};
