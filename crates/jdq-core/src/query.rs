// Dot-path lookup over serde_json::Value trees.
//
// Paths address object keys and array indices with `.` separators, e.g.
// `profile.slots.0.name`. Array indices may be negative (-1 = last).
// Keys containing literal dots or backslashes are escaped (`\.`, `\\`).

use std::num::NonZeroUsize;
use std::sync::Arc;

use indexmap::IndexMap;
use log::debug;
use serde_json::Value;
use thiserror::Error;

use crate::cache::SegmentCache;
use crate::path::split_segments;

static NULL: Value = Value::Null;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Object,
    Array,
}

pub fn kind_of(v: &Value) -> JsonKind {
    match v {
        Value::Null => JsonKind::Null,
        Value::Bool(_) => JsonKind::Bool,
        Value::Number(_) => JsonKind::Number,
        Value::String(_) => JsonKind::String,
        Value::Object(_) => JsonKind::Object,
        Value::Array(_) => JsonKind::Array,
    }
}

/// Why a lookup stopped. Every variant is local to one path; none of them
/// aborts a batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Miss {
    #[error("key \"{key}\" not found (segment {segment})")]
    KeyNotFound { segment: usize, key: String },
    #[error("\"{token}\" is not an array index (segment {segment})")]
    IndexInvalid { segment: usize, token: String },
    #[error("index {index} out of range for array of {len} (segment {segment})")]
    IndexOutOfRange {
        segment: usize,
        index: i64,
        len: usize,
    },
    #[error("cannot descend into {kind:?} with \"{token}\" (segment {segment})")]
    TypeMismatch {
        segment: usize,
        kind: JsonKind,
        token: String,
    },
}

fn walk<'a>(root: &'a Value, segments: &[String]) -> Result<&'a Value, Miss> {
    let mut current = root;
    for (i, seg) in segments.iter().enumerate() {
        current = match current {
            Value::Object(map) => map.get(seg).ok_or_else(|| Miss::KeyNotFound {
                segment: i,
                key: seg.clone(),
            })?,
            Value::Array(arr) => {
                let idx: i64 = seg.parse().map_err(|_| Miss::IndexInvalid {
                    segment: i,
                    token: seg.clone(),
                })?;
                let norm = if idx < 0 { idx + arr.len() as i64 } else { idx };
                if norm < 0 || norm as usize >= arr.len() {
                    return Err(Miss::IndexOutOfRange {
                        segment: i,
                        index: idx,
                        len: arr.len(),
                    });
                }
                &arr[norm as usize]
            }
            // scalars cannot be descended into
            other => {
                return Err(Miss::TypeMismatch {
                    segment: i,
                    kind: kind_of(other),
                    token: seg.clone(),
                });
            }
        };
    }
    // Consuming every segment is a found result even when the node is null.
    Ok(current)
}

// One-shot form: tokenizes on every call, shares the walk. Results are
// identical to the cached resolver's.
pub fn resolve_path<'a>(root: &'a Value, path: &str) -> Result<&'a Value, Miss> {
    walk(root, &split_segments(path))
}

/// Lookup engine owning a bounded cache of tokenized paths.
///
/// `get`/`get_all` are lossy: a miss comes back as `Value::Null`,
/// indistinguishable from a stored null. `try_get`/`try_get_all` keep the
/// distinction; `resolve` additionally keeps the failure kind.
pub struct PathResolver {
    cache: SegmentCache,
}

impl PathResolver {
    pub fn new() -> Self {
        Self {
            cache: SegmentCache::default(),
        }
    }

    pub fn with_cache_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            cache: SegmentCache::new(capacity),
        }
    }

    pub fn segments(&self, path: &str) -> Arc<[String]> {
        self.cache.segments(path)
    }

    pub fn resolve<'a>(&self, root: &'a Value, path: &str) -> Result<&'a Value, Miss> {
        walk(root, &self.cache.segments(path))
    }

    pub fn try_get<'a>(&self, root: &'a Value, path: &str) -> Option<&'a Value> {
        match self.resolve(root, path) {
            Ok(v) => Some(v),
            Err(miss) => {
                debug!("path \"{path}\": {miss}");
                None
            }
        }
    }

    pub fn get<'a>(&self, root: &'a Value, path: &str) -> &'a Value {
        self.try_get(root, path).unwrap_or(&NULL)
    }

    pub fn get_all<'a, I, S>(&self, root: &'a Value, paths: I) -> IndexMap<String, &'a Value>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        paths
            .into_iter()
            .map(|p| {
                let p = p.as_ref();
                (p.to_string(), self.get(root, p))
            })
            .collect()
    }

    pub fn try_get_all<'a, I, S>(
        &self,
        root: &'a Value,
        paths: I,
    ) -> IndexMap<String, Option<&'a Value>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        paths
            .into_iter()
            .map(|p| {
                let p = p.as_ref();
                (p.to_string(), self.try_get(root, p))
            })
            .collect()
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    pub fn cached_paths(&self) -> usize {
        self.cache.len()
    }
}

impl Default for PathResolver {
    fn default() -> Self {
        Self::new()
    }
}

// Extract path strings from a JSON array, e.g. a query list loaded from a
// config file. Non-string entries are skipped, never fatal.
pub fn string_paths(list: &Value) -> Vec<&str> {
    let Value::Array(items) = list else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(items.len());
    for it in items {
        match it {
            Value::String(s) => out.push(s.as_str()),
            other => debug!("skipping non-string path entry ({:?})", kind_of(other)),
        }
    }
    out
}
