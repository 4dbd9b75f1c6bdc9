// crates/waf-admission-core/src/core/resources.rs
// ============================================================================
// Module: Resource Validators
// Description: Per-kind orchestration of structural checks over untyped
//              resource bodies.
// Purpose: Classify a resource snapshot as admissible, with operator context.
// Dependencies: crate::core::{errors, fields, tree}, serde_json, tracing
// ============================================================================

//! ## Overview
//! Each resource kind composes the structural validators with its own
//! required-field table. Validation is fail-fast: paths are checked in table
//! order and the first violation aborts, wrapped with the resource kind and
//! name so the message can be shown to the operator as-is.
//!
//! The WAF policy validator additionally scans for legacy external-reference
//! fields. Hits are reported as deprecation notices on the side channel and
//! never affect the pass/fail outcome.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde_json::Value;

use crate::core::errors::ResourceKind;
use crate::core::errors::ValidationError;
use crate::core::fields::DOS_LOG_CONF_REQUIRED_FIELDS;
use crate::core::fields::DOS_POLICY_REQUIRED_FIELDS;
use crate::core::fields::WAF_LOG_CONF_REQUIRED_FIELDS;
use crate::core::fields::WAF_POLICY_EXT_REFS;
use crate::core::fields::WAF_POLICY_REQUIRED_FIELDS;
use crate::core::fields::WAF_USER_SIG_REQUIRED_SLICES;
use crate::core::reference::ns_name;
use crate::core::tree::FieldPath;
use crate::core::tree::nested_map;
use crate::core::tree::nested_sequence;
use crate::core::tree::nested_value;

// ============================================================================
// SECTION: Resource Snapshot
// ============================================================================

/// Snapshot of one custom-resource object under validation.
///
/// # Invariants
/// - `body` is owned by the caller and never mutated by validators.
/// - A snapshot lives only for the duration of one validation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigResource {
    /// Resource name from object metadata.
    pub name: String,
    /// Resource namespace from object metadata.
    pub namespace: String,
    /// Untyped resource body.
    pub body: Value,
}

impl ConfigResource {
    /// Creates a resource snapshot.
    #[must_use]
    pub fn new(name: impl Into<String>, namespace: impl Into<String>, body: Value) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            body,
        }
    }

    /// Returns the `namespace/name` key of this resource.
    #[must_use]
    pub fn ns_name(&self) -> String {
        ns_name(&self.namespace, &self.name)
    }
}

// ============================================================================
// SECTION: Deprecation Notices
// ============================================================================

/// Informational notice for a deprecated external-reference field.
///
/// # Invariants
/// - Notices never represent a validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeprecationNotice {
    /// Dotted path of the deprecated field.
    pub path: String,
}

impl fmt::Display for DeprecationNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field {} (external reference) is deprecated", self.path)
    }
}

// ============================================================================
// SECTION: Structural Validators
// ============================================================================

/// Validates that every path resolves to a present mapping.
///
/// Paths are checked in declaration order and the first violation wins.
///
/// # Errors
///
/// Returns [`ValidationError::MissingField`] for the first absent path and
/// [`ValidationError::MalformedField`] for the first shape mismatch.
pub fn validate_required_fields(
    body: &Value,
    paths: &[FieldPath],
) -> Result<(), ValidationError> {
    for path in paths {
        match nested_map(body, *path) {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Err(ValidationError::MissingField {
                    path: path.to_string(),
                });
            }
            Err(source) => {
                return Err(ValidationError::MalformedField {
                    path: path.to_string(),
                    source,
                });
            }
        }
    }
    Ok(())
}

/// Validates that every path resolves to a present sequence.
///
/// Identical contract to [`validate_required_fields`] in sequence mode; an
/// empty sequence is present and therefore valid.
///
/// # Errors
///
/// Returns [`ValidationError::MissingField`] for the first absent path and
/// [`ValidationError::MalformedField`] for the first shape mismatch.
pub fn validate_required_slices(
    body: &Value,
    paths: &[FieldPath],
) -> Result<(), ValidationError> {
    for path in paths {
        match nested_sequence(body, *path) {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Err(ValidationError::MissingField {
                    path: path.to_string(),
                });
            }
            Err(source) => {
                return Err(ValidationError::MalformedField {
                    path: path.to_string(),
                    source,
                });
            }
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Deprecated Reference Scan
// ============================================================================

/// Scans a WAF policy body for deprecated external-reference fields.
///
/// Presence only; the value at each path is irrelevant and never copied.
///
/// # Errors
///
/// Returns [`ValidationError::MalformedField`] when a scan path hits a shape
/// mismatch in the tree.
fn scan_deprecated_references(body: &Value) -> Result<Vec<DeprecationNotice>, ValidationError> {
    let mut notices = Vec::new();
    for path in WAF_POLICY_EXT_REFS {
        match nested_value(body, *path) {
            Ok(Some(_)) => notices.push(DeprecationNotice {
                path: path.to_string(),
            }),
            Ok(None) => {}
            Err(source) => {
                return Err(ValidationError::MalformedField {
                    path: path.to_string(),
                    source,
                });
            }
        }
    }
    Ok(notices)
}

// ============================================================================
// SECTION: Resource Orchestrators
// ============================================================================

/// Validates a WAF policy resource.
///
/// On success, returns the deprecation notices recorded for legacy
/// external-reference fields; each notice is also logged at `warn` level.
///
/// # Errors
///
/// Returns [`ValidationError::Resource`] wrapping the first structural
/// violation.
pub fn validate_waf_policy(
    resource: &ConfigResource,
) -> Result<Vec<DeprecationNotice>, ValidationError> {
    let wrap = |source| ValidationError::resource(ResourceKind::WafPolicy, &resource.name, source);
    validate_required_fields(&resource.body, WAF_POLICY_REQUIRED_FIELDS).map_err(wrap)?;
    let notices = scan_deprecated_references(&resource.body).map_err(wrap)?;
    for notice in &notices {
        tracing::warn!(policy = %resource.ns_name(), "{notice}");
    }
    Ok(notices)
}

/// Validates a WAF log configuration resource.
///
/// # Errors
///
/// Returns [`ValidationError::Resource`] wrapping the first structural
/// violation.
pub fn validate_waf_log_conf(resource: &ConfigResource) -> Result<(), ValidationError> {
    validate_required_fields(&resource.body, WAF_LOG_CONF_REQUIRED_FIELDS)
        .map_err(|source| ValidationError::resource(ResourceKind::WafLogConf, &resource.name, source))
}

/// Validates a WAF user signature resource.
///
/// The signature list may be empty; only its absence fails.
///
/// # Errors
///
/// Returns [`ValidationError::Resource`] wrapping the first structural
/// violation.
pub fn validate_waf_user_signature(resource: &ConfigResource) -> Result<(), ValidationError> {
    validate_required_slices(&resource.body, WAF_USER_SIG_REQUIRED_SLICES).map_err(|source| {
        ValidationError::resource(ResourceKind::WafUserSignature, &resource.name, source)
    })
}

/// Validates a DoS policy resource.
///
/// # Errors
///
/// Returns [`ValidationError::Resource`] wrapping the first structural
/// violation.
pub fn validate_dos_policy(resource: &ConfigResource) -> Result<(), ValidationError> {
    validate_required_fields(&resource.body, DOS_POLICY_REQUIRED_FIELDS)
        .map_err(|source| ValidationError::resource(ResourceKind::DosPolicy, &resource.name, source))
}

/// Validates a DoS log configuration resource.
///
/// # Errors
///
/// Returns [`ValidationError::Resource`] wrapping the first structural
/// violation.
pub fn validate_dos_log_conf(resource: &ConfigResource) -> Result<(), ValidationError> {
    validate_required_fields(&resource.body, DOS_LOG_CONF_REQUIRED_FIELDS)
        .map_err(|source| ValidationError::resource(ResourceKind::DosLogConf, &resource.name, source))
}
