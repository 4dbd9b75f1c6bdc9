// crates/waf-admission-core/src/core/errors.rs
// ============================================================================
// Module: Validation Errors
// Description: Error taxonomy for admission validation outcomes.
// Purpose: Carry operator-facing cause chains without panicking or retrying.
// Dependencies: crate::core::tree, thiserror
// ============================================================================

//! ## Overview
//! A validation failure is a routine outcome representing bad operator input,
//! never a system fault. Errors are detected synchronously, short-circuit the
//! first violation, and gain context as they return up through a resource
//! orchestrator: grammar or structural cause, then offending field, then
//! resource kind and name. The rendered chain is meant to be shown to the
//! operator verbatim.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use thiserror::Error;

use crate::core::tree::TraversalError;

// ============================================================================
// SECTION: Resource Kinds
// ============================================================================

/// Resource kinds this crate knows how to validate.
///
/// # Invariants
/// - Display forms are stable operator-facing names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// WAF policy custom resource.
    WafPolicy,
    /// WAF log configuration custom resource.
    WafLogConf,
    /// WAF user-defined signature custom resource.
    WafUserSignature,
    /// DoS policy custom resource.
    DosPolicy,
    /// DoS log configuration custom resource.
    DosLogConf,
    /// DoS protected resource custom resource.
    DosProtectedResource,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::WafPolicy => "App Protect Policy",
            Self::WafLogConf => "App Protect Log Configuration",
            Self::WafUserSignature => "App Protect User Signature",
            Self::DosPolicy => "DosPolicy",
            Self::DosLogConf => "App Protect Dos Log Configuration",
            Self::DosProtectedResource => "DosProtectedResource",
        };
        f.write_str(name)
    }
}

// ============================================================================
// SECTION: Validation Errors
// ============================================================================

/// Validation failure for a configuration object.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - Wrapping variants (`Field`, `Resource`) only ever wrap another
///   [`ValidationError`].
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field path did not resolve to a present value.
    #[error("required field {path} not found")]
    MissingField {
        /// Dotted path that failed to resolve.
        path: String,
    },

    /// A required field path hit a shape mismatch during traversal.
    #[error("error checking for required field {path}: {source}")]
    MalformedField {
        /// Dotted path that was being resolved.
        path: String,
        /// Underlying traversal mismatch.
        #[source]
        source: TraversalError,
    },

    /// A mandatory scalar field was empty or absent.
    #[error("missing value for field: {field}")]
    MissingValue {
        /// Wire name of the empty field.
        field: &'static str,
    },

    /// A WAF-dialect log destination did not match any accepted form.
    #[error(
        "log destination {dest} did not follow format: \
         syslog:server=<ip-address | localhost>:<port> or fqdn or stderr \
         or absolute path to file"
    )]
    LogDestinationFormat {
        /// Offending destination string.
        dest: String,
    },

    /// A DoS-dialect log destination did not match any accepted form.
    #[error(
        "invalid log destination: {dest}, must follow format: \
         <ip-address | localhost | dns name>:<port> or stderr"
    )]
    DosLogDestinationFormat {
        /// Offending destination string.
        dest: String,
    },

    /// A port segment was not a base-10 integer.
    #[error("error parsing port: {value} is not a number")]
    PortParse {
        /// Offending port segment.
        value: String,
    },

    /// A port parsed but fell outside the valid range.
    #[error("error parsing port: {port} not a valid port number")]
    PortRange {
        /// Out-of-range port value.
        port: u32,
    },

    /// A syslog host was neither localhost, an FQDN, nor an IP address.
    #[error("error parsing host: {host} is not a valid ip address or host name")]
    HostFormat {
        /// Offending host segment.
        host: String,
    },

    /// A protected-resource name exceeded the maximum length.
    #[error("name max length is {max}")]
    NameTooLong {
        /// Maximum permitted length.
        max: usize,
    },

    /// A string would break downstream quoted interpolation.
    #[error(
        "{value} must have all '\"' (double quotes) escaped and must not end \
         with an unescaped backslash, for example: {example}"
    )]
    Unescaped {
        /// Offending input string.
        value: String,
        /// Canonical valid example shown to the operator.
        example: &'static str,
    },

    /// A monitor URI failed URL parsing.
    #[error("monitor URI {uri} must be a valid URL")]
    MonitorUrl {
        /// Offending URI string.
        uri: String,
    },

    /// A monitor protocol was outside the accepted set.
    #[error("monitor protocol {value} must be one of: http1, http2, grpc")]
    InvalidProtocol {
        /// Offending protocol value.
        value: String,
    },

    /// A resource reference was not a legal qualified name.
    #[error("reference name is invalid: {reference}")]
    ReferenceFormat {
        /// Offending reference string.
        reference: String,
    },

    /// Failure wrapped with the offending field name.
    #[error("invalid field: {field} err: {source}")]
    Field {
        /// Wire name of the offending field.
        field: &'static str,
        /// Underlying cause.
        #[source]
        source: Box<ValidationError>,
    },

    /// Failure wrapped with the resource kind and name.
    #[error("error validating {kind} {name}: {source}")]
    Resource {
        /// Kind of the rejected resource.
        kind: ResourceKind,
        /// Name of the rejected resource.
        name: String,
        /// Underlying cause.
        #[source]
        source: Box<ValidationError>,
    },
}

impl ValidationError {
    /// Wraps a failure with the offending field name.
    #[must_use]
    pub fn field(field: &'static str, source: Self) -> Self {
        Self::Field {
            field,
            source: Box::new(source),
        }
    }

    /// Wraps a failure with the resource kind and name.
    #[must_use]
    pub fn resource(kind: ResourceKind, name: impl Into<String>, source: Self) -> Self {
        Self::Resource {
            kind,
            name: name.into(),
            source: Box::new(source),
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
