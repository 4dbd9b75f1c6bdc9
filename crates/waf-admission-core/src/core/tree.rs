// crates/waf-admission-core/src/core/tree.rs
// ============================================================================
// Module: Configuration Tree Accessors
// Description: Dotted-path traversal over untyped configuration trees.
// Purpose: Resolve field paths with a found / absent / type-mismatch outcome.
// Dependencies: serde_json, thiserror
// ============================================================================

//! ## Overview
//! Custom-resource bodies arrive as untyped JSON-equivalent trees. This module
//! resolves compile-time field paths inside such a tree without copying or
//! mutating it. Every accessor distinguishes three outcomes: the value is
//! present, some segment along the path is absent, or a segment exists but
//! the container at that point has the wrong shape.
//!
//! Security posture: tree contents are untrusted operator input; accessors
//! must never panic on hostile shapes.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde_json::Map;
use serde_json::Value;
use thiserror::Error;

// ============================================================================
// SECTION: Field Paths
// ============================================================================

/// Dotted path locating a field inside a configuration tree.
///
/// # Invariants
/// - Segments are compile-time constants; paths are never built from user
///   input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(&'static [&'static str]);

impl FieldPath {
    /// Creates a field path from a static segment list.
    #[must_use]
    pub const fn new(segments: &'static [&'static str]) -> Self {
        Self(segments)
    }

    /// Returns the path segments in traversal order.
    #[must_use]
    pub const fn segments(self) -> &'static [&'static str] {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

// ============================================================================
// SECTION: Traversal Errors
// ============================================================================

/// Shape mismatch encountered while resolving a field path.
///
/// # Invariants
/// - `path` names the value whose shape was wrong, dotted from the root.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field {path} is of type {actual}, expected {expected}")]
pub struct TraversalError {
    /// Dotted path of the mismatched value.
    pub path: String,
    /// Container shape traversal expected at that point.
    pub expected: &'static str,
    /// Shape actually present in the tree.
    pub actual: &'static str,
}

/// Returns the human-readable shape name of a JSON value.
fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}

/// Names the value at `depth` segments into `path` for error reporting.
fn path_prefix(path: FieldPath, depth: usize) -> String {
    if depth == 0 {
        "(root)".to_string()
    } else {
        path.segments()[.. depth].join(".")
    }
}

// ============================================================================
// SECTION: Accessors
// ============================================================================

/// Resolves a path to any value without copying it.
///
/// Returns `Ok(None)` when any segment along the path is absent.
///
/// # Errors
///
/// Returns [`TraversalError`] when an intermediate value is not a mapping.
pub fn nested_value<'a>(
    root: &'a Value,
    path: FieldPath,
) -> Result<Option<&'a Value>, TraversalError> {
    let mut current = root;
    for (depth, segment) in path.segments().iter().enumerate() {
        let Value::Object(map) = current else {
            return Err(TraversalError {
                path: path_prefix(path, depth),
                expected: "mapping",
                actual: shape_name(current),
            });
        };
        match map.get(*segment) {
            Some(next) => current = next,
            None => return Ok(None),
        }
    }
    Ok(Some(current))
}

/// Resolves a path to a mapping.
///
/// Returns `Ok(None)` when any segment along the path is absent.
///
/// # Errors
///
/// Returns [`TraversalError`] when an intermediate value is not a mapping or
/// the leaf value is not a mapping.
pub fn nested_map<'a>(
    root: &'a Value,
    path: FieldPath,
) -> Result<Option<&'a Map<String, Value>>, TraversalError> {
    match nested_value(root, path)? {
        None => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(other) => Err(TraversalError {
            path: path.to_string(),
            expected: "mapping",
            actual: shape_name(other),
        }),
    }
}

/// Resolves a path to a sequence.
///
/// Returns `Ok(None)` when any segment along the path is absent.
///
/// # Errors
///
/// Returns [`TraversalError`] when an intermediate value is not a mapping or
/// the leaf value is not a sequence.
pub fn nested_sequence<'a>(
    root: &'a Value,
    path: FieldPath,
) -> Result<Option<&'a Vec<Value>>, TraversalError> {
    match nested_value(root, path)? {
        None => Ok(None),
        Some(Value::Array(items)) => Ok(Some(items)),
        Some(other) => Err(TraversalError {
            path: path.to_string(),
            expected: "sequence",
            actual: shape_name(other),
        }),
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
