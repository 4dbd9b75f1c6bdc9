// crates/waf-admission-core/src/lib.rs
// ============================================================================
// Module: WAF Admission Core Library
// Description: Admission validation for WAF and DoS custom resources.
// Purpose: Reject malformed configuration early with operator-facing causes.
// Dependencies: regex, serde, serde_json, thiserror, tracing, url
// ============================================================================

//! ## Overview
//! `waf-admission-core` validates declarative configuration objects (WAF
//! policies, log configurations, user-defined signatures, and DoS protection
//! profiles) before they are admitted into a running system. Validators are
//! pure, synchronous, and stateless: they read one resource snapshot, return
//! success or a wrapped cause chain, and hold nothing between calls. Object
//! retrieval, watching, and reconciliation belong to the caller.
//!
//! Security posture: resource bodies are untrusted operator input; validators
//! must fail closed and never panic on hostile shapes.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::ConfigResource;
pub use crate::core::DeprecationNotice;
pub use crate::core::DosMonitor;
pub use crate::core::DosProtectedResource;
pub use crate::core::DosProtectedResourceSpec;
pub use crate::core::DosSecurityLog;
pub use crate::core::FieldPath;
pub use crate::core::MAX_NAME_LENGTH;
pub use crate::core::MONITOR_PROTOCOLS;
pub use crate::core::ResourceKind;
pub use crate::core::TraversalError;
pub use crate::core::ValidationError;
pub use crate::core::ns_name;
pub use crate::core::qualify_reference;
pub use crate::core::qualify_reference_list;
pub use crate::core::validate_dos_log_conf;
pub use crate::core::validate_dos_log_destination;
pub use crate::core::validate_dos_name;
pub use crate::core::validate_dos_policy;
pub use crate::core::validate_dos_protected_resource;
pub use crate::core::validate_escaped_string;
pub use crate::core::validate_log_destination;
pub use crate::core::validate_port;
pub use crate::core::validate_resource_reference;
pub use crate::core::validate_waf_log_conf;
pub use crate::core::validate_waf_policy;
pub use crate::core::validate_waf_user_signature;
