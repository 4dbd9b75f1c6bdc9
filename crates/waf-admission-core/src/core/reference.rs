// crates/waf-admission-core/src/core/reference.rs
// ============================================================================
// Module: Resource References
// Description: Namespace qualification and validation of resource references.
// Purpose: Turn annotation strings into namespace-qualified identifiers.
// Dependencies: crate::core::{errors, grammar}
// ============================================================================

//! ## Overview
//! Annotations name other resources either bare (`my-policy`) or already
//! qualified (`other-ns/my-policy`). Qualification prepends the ambient
//! namespace to bare names and is idempotent on qualified ones. No existence
//! check is performed here; callers resolve the identifiers themselves.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::errors::ValidationError;
use crate::core::grammar::is_qualified_name;

// ============================================================================
// SECTION: Qualification
// ============================================================================

/// Qualifies a reference with the ambient namespace when it carries none.
#[must_use]
pub fn qualify_reference(namespace: &str, reference: &str) -> String {
    if reference.contains('/') {
        reference.to_string()
    } else {
        format!("{namespace}/{reference}")
    }
}

/// Qualifies each element of a comma-separated reference list.
///
/// Order is preserved and empty segments are not filtered: an empty element
/// between commas qualifies to `namespace + "/"`, which callers observe.
#[must_use]
pub fn qualify_reference_list(namespace: &str, references: &str) -> Vec<String> {
    references
        .split(',')
        .map(|reference| qualify_reference(namespace, reference))
        .collect()
}

/// Builds the `namespace/name` key for a resource.
#[must_use]
pub fn ns_name(namespace: &str, name: &str) -> String {
    format!("{namespace}/{name}")
}

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Validates that a reference is a syntactically legal qualified name.
///
/// # Errors
///
/// Returns [`ValidationError::ReferenceFormat`] quoting the offending input.
pub fn validate_resource_reference(reference: &str) -> Result<(), ValidationError> {
    if is_qualified_name(reference) {
        return Ok(());
    }
    Err(ValidationError::ReferenceFormat {
        reference: reference.to_string(),
    })
}

// ============================================================================
// SECTION: Tests
// ============================================================================
