// crates/waf-admission-core/src/core/mod.rs
// ============================================================================
// Module: Admission Validation Core
// Description: Validation primitives and per-kind resource validators.
// Purpose: Group the pure validation surface of the crate.
// Dependencies: crate::core submodules
// ============================================================================

//! ## Overview
//! The core module tree holds everything needed to classify one resource
//! snapshot: tree accessors, field-path tables, string grammars, reference
//! utilities, and the per-kind orchestrators that compose them.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod dos;
pub mod errors;
pub mod fields;
pub mod grammar;
pub mod reference;
pub mod resources;
pub mod tree;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use dos::DosMonitor;
pub use dos::DosProtectedResource;
pub use dos::DosProtectedResourceSpec;
pub use dos::DosSecurityLog;
pub use dos::validate_dos_protected_resource;
pub use errors::ResourceKind;
pub use errors::ValidationError;
pub use grammar::MAX_NAME_LENGTH;
pub use grammar::MONITOR_PROTOCOLS;
pub use grammar::validate_dos_log_destination;
pub use grammar::validate_dos_name;
pub use grammar::validate_escaped_string;
pub use grammar::validate_log_destination;
pub use grammar::validate_port;
pub use reference::ns_name;
pub use reference::qualify_reference;
pub use reference::qualify_reference_list;
pub use reference::validate_resource_reference;
pub use resources::ConfigResource;
pub use resources::DeprecationNotice;
pub use resources::validate_dos_log_conf;
pub use resources::validate_dos_policy;
pub use resources::validate_waf_log_conf;
pub use resources::validate_waf_policy;
pub use resources::validate_waf_user_signature;
pub use tree::FieldPath;
pub use tree::TraversalError;
