// crates/waf-admission-core/src/core/dos.rs
// ============================================================================
// Module: DoS Protected Resource
// Description: Typed model and composite validator for DoS protection
//              profiles.
// Purpose: Gate protected-endpoint settings before admission.
// Dependencies: crate::core::{errors, grammar, reference}, serde, url
// ============================================================================

//! ## Overview
//! A DoS protected resource describes denial-of-service mitigation for one
//! endpoint: a display name, an optional health monitor, an access log
//! destination, and optional policy and security-log references. Unlike the
//! untyped WAF bodies, the protected resource carries a typed spec, so it is
//! deserialized into a struct before validation.
//!
//! Validation runs five independent gates in fixed order, each gated by its
//! own applicability condition; the first failure wins and is wrapped with
//! the offending field name.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use url::Url;

use crate::core::errors::ResourceKind;
use crate::core::errors::ValidationError;
use crate::core::grammar::MONITOR_PROTOCOLS;
use crate::core::grammar::MONITOR_URI_EXAMPLE;
use crate::core::grammar::validate_dos_log_destination;
use crate::core::grammar::validate_dos_name;
use crate::core::grammar::validate_escaped_string;
use crate::core::reference::validate_resource_reference;

// ============================================================================
// SECTION: Typed Model
// ============================================================================

/// Health monitor settings for a protected endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DosMonitor {
    /// Monitor request URI.
    pub uri: String,
    /// Monitor protocol; empty means unset.
    pub protocol: String,
    /// Monitor timeout in seconds; carried but not validated.
    pub timeout: Option<u64>,
}

/// Security-log settings for a protected endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DosSecurityLog {
    /// Whether security logging is enabled; carried but not validated.
    pub enable: bool,
    /// Reference to a DoS log configuration resource.
    pub ap_dos_log_conf: String,
    /// Security log destination in the DoS dialect.
    pub dos_log_dest: String,
}

/// Spec body of a DoS protected resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DosProtectedResourceSpec {
    /// Protected-object display name.
    pub name: String,
    /// Optional health monitor block.
    pub ap_dos_monitor: Option<DosMonitor>,
    /// Access log destination in the DoS dialect.
    pub dos_access_log_dest: String,
    /// Optional reference to a DoS policy resource; empty means unset.
    pub ap_dos_policy: String,
    /// Optional security-log block.
    pub dos_security_log: Option<DosSecurityLog>,
}

/// DoS protected resource under validation.
///
/// # Invariants
/// - Read-only for validators; failures are pure functions of this snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DosProtectedResource {
    /// Resource name from object metadata.
    pub name: String,
    /// Resource namespace from object metadata.
    pub namespace: String,
    /// Typed spec body.
    pub spec: DosProtectedResourceSpec,
}

// ============================================================================
// SECTION: Monitor Validation
// ============================================================================

/// Fixed base used to parse scheme-less monitor URIs.
const MONITOR_URI_BASE: &str = "http://localhost";

/// Reports whether a monitor URI is a well-formed URL.
///
/// Scheme-less URIs (`dos.example.com`, `/health`) are legal monitor targets,
/// so relative inputs are parsed against a fixed base; only inputs neither an
/// absolute nor a relative URL can form are rejected.
fn monitor_uri_parses(uri: &str) -> bool {
    if Url::parse(uri).is_ok() {
        return true;
    }
    Url::parse(MONITOR_URI_BASE)
        .and_then(|base| base.join(uri))
        .is_ok()
}

/// Validates a monitor block: URL shape, escaped-string grammar, protocol.
fn validate_monitor(monitor: &DosMonitor) -> Result<(), ValidationError> {
    if !monitor_uri_parses(&monitor.uri) {
        return Err(ValidationError::MonitorUrl {
            uri: monitor.uri.clone(),
        });
    }
    validate_escaped_string(&monitor.uri, MONITOR_URI_EXAMPLE)?;
    if !monitor.protocol.is_empty() && !MONITOR_PROTOCOLS.contains(&monitor.protocol.as_str()) {
        return Err(ValidationError::InvalidProtocol {
            value: monitor.protocol.clone(),
        });
    }
    Ok(())
}

// ============================================================================
// SECTION: Composite Validator
// ============================================================================

/// Validates a DoS protected resource.
///
/// Gates run in fixed order: protected-object name, monitor block, access log
/// destination, policy reference, security-log block. The first failure wins
/// and is wrapped with the offending field and the resource name.
///
/// # Errors
///
/// Returns [`ValidationError::Resource`] wrapping the first violated gate.
pub fn validate_dos_protected_resource(
    protected: &DosProtectedResource,
) -> Result<(), ValidationError> {
    let wrap = |source| {
        ValidationError::resource(ResourceKind::DosProtectedResource, &protected.name, source)
    };
    let spec = &protected.spec;

    // name
    if spec.name.is_empty() {
        return Err(wrap(ValidationError::MissingValue { field: "name" }));
    }
    validate_dos_name(&spec.name)
        .map_err(|err| wrap(ValidationError::field("name", err)))?;

    // apDosMonitor
    if let Some(monitor) = &spec.ap_dos_monitor {
        validate_monitor(monitor)
            .map_err(|err| wrap(ValidationError::field("apDosMonitor", err)))?;
    }

    // dosAccessLogDest
    if spec.dos_access_log_dest.is_empty() {
        return Err(wrap(ValidationError::MissingValue {
            field: "dosAccessLogDest",
        }));
    }
    validate_dos_log_destination(&spec.dos_access_log_dest)
        .map_err(|err| wrap(ValidationError::field("dosAccessLogDest", err)))?;

    // apDosPolicy
    if !spec.ap_dos_policy.is_empty() {
        validate_resource_reference(&spec.ap_dos_policy)
            .map_err(|err| wrap(ValidationError::field("apDosPolicy", err)))?;
    }

    // dosSecurityLog
    if let Some(security_log) = &spec.dos_security_log {
        validate_dos_log_destination(&security_log.dos_log_dest)
            .map_err(|err| wrap(ValidationError::field("dosSecurityLog/dosLogDest", err)))?;
        validate_resource_reference(&security_log.ap_dos_log_conf)
            .map_err(|err| wrap(ValidationError::field("dosSecurityLog/apDosLogConf", err)))?;
    }

    Ok(())
}
