// crates/waf-admission-core/tests/dos_protected.rs
// ============================================================================
// Module: DoS Protected Resource Tests
// Description: Composite validation of DoS protection profiles.
// Purpose: Ensure the five gates run in fixed order with field-level context.
// Dependencies: waf-admission-core, serde_json
// ============================================================================

//! Composite validator tests for DoS protected resources.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Test-only assertions and helpers are permitted."
)]

use serde_json::json;
use waf_admission_core::DosMonitor;
use waf_admission_core::DosProtectedResource;
use waf_admission_core::DosProtectedResourceSpec;
use waf_admission_core::DosSecurityLog;
use waf_admission_core::ValidationError;
use waf_admission_core::validate_dos_protected_resource;

/// Builds a protected resource that passes every gate.
fn valid_resource() -> DosProtectedResource {
    DosProtectedResource {
        name: "dos-one".to_string(),
        namespace: "default".to_string(),
        spec: DosProtectedResourceSpec {
            name: "protected-object-one".to_string(),
            ap_dos_monitor: Some(DosMonitor {
                uri: "http://www.example.com".to_string(),
                protocol: "http1".to_string(),
                timeout: Some(5),
            }),
            dos_access_log_dest: "127.0.0.1:5561".to_string(),
            ap_dos_policy: "dos-policy".to_string(),
            dos_security_log: Some(DosSecurityLog {
                enable: true,
                ap_dos_log_conf: "nginx-ns/dos-log-conf".to_string(),
                dos_log_dest: "syslog-svc.default.svc.cluster.local:514".to_string(),
            }),
        },
    }
}

/// Returns the field name of the first `Field` wrap in the cause chain.
fn offending_field(err: &ValidationError) -> Option<&'static str> {
    match err {
        ValidationError::Resource { source, .. } => offending_field(source),
        ValidationError::Field { field, .. } => Some(*field),
        _ => None,
    }
}

#[test]
fn fully_populated_resource_is_valid() {
    assert!(validate_dos_protected_resource(&valid_resource()).is_ok());
}

#[test]
fn minimal_resource_is_valid() {
    let protected = DosProtectedResource {
        name: "dos-min".to_string(),
        namespace: "default".to_string(),
        spec: DosProtectedResourceSpec {
            name: "minimal".to_string(),
            dos_access_log_dest: "stderr".to_string(),
            ..DosProtectedResourceSpec::default()
        },
    };
    assert!(validate_dos_protected_resource(&protected).is_ok());
}

#[test]
fn empty_name_is_a_missing_value() {
    let mut protected = valid_resource();
    protected.spec.name = String::new();
    let err = validate_dos_protected_resource(&protected).unwrap_err();
    assert_eq!(
        err.to_string(),
        "error validating DosProtectedResource dos-one: missing value for field: name"
    );
}

// The name gate runs first: a 64-character name fails even when a later
// field is also invalid.
#[test]
fn name_length_gate_runs_before_everything_else() {
    let mut protected = valid_resource();
    protected.spec.name = "a".repeat(64);
    protected.spec.dos_access_log_dest = "not a destination".to_string();
    let err = validate_dos_protected_resource(&protected).unwrap_err();
    assert_eq!(offending_field(&err), Some("name"));
    assert!(err.to_string().contains("name max length is 63"));
}

#[test]
fn unescaped_name_reports_the_example_token() {
    let mut protected = valid_resource();
    protected.spec.name = "bad\"name".to_string();
    let err = validate_dos_protected_resource(&protected).unwrap_err();
    assert_eq!(offending_field(&err), Some("name"));
    assert!(err.to_string().contains("protected-object-one"));
}

#[test]
fn monitor_uri_must_parse_as_url() {
    // A space in the authority is malformed as both an absolute and a
    // relative URL.
    let mut protected = valid_resource();
    protected.spec.ap_dos_monitor = Some(DosMonitor {
        uri: "http://exa mple.com".to_string(),
        ..DosMonitor::default()
    });
    let err = validate_dos_protected_resource(&protected).unwrap_err();
    assert_eq!(offending_field(&err), Some("apDosMonitor"));
    assert!(err.to_string().contains("must be a valid URL"));
}

// Operators configure monitors without a scheme (`dos.example.com`); such
// URIs are well-formed relative references and must be accepted.
#[test]
fn scheme_less_monitor_uris_are_accepted() {
    for uri in ["dos.example.com", "example.com/good_path", "/health"] {
        let mut protected = valid_resource();
        protected.spec.ap_dos_monitor = Some(DosMonitor {
            uri: uri.to_string(),
            ..DosMonitor::default()
        });
        assert!(
            validate_dos_protected_resource(&protected).is_ok(),
            "{uri} should be accepted"
        );
    }
}

#[test]
fn monitor_protocol_enum_is_exact() {
    for protocol in ["http1", "http2", "grpc"] {
        let mut protected = valid_resource();
        protected.spec.ap_dos_monitor = Some(DosMonitor {
            uri: "http://www.example.com".to_string(),
            protocol: protocol.to_string(),
            timeout: None,
        });
        assert!(validate_dos_protected_resource(&protected).is_ok(), "{protocol} is accepted");
    }

    let mut protected = valid_resource();
    protected.spec.ap_dos_monitor = Some(DosMonitor {
        uri: "http://www.example.com".to_string(),
        protocol: "HTTP1".to_string(),
        timeout: None,
    });
    let err = validate_dos_protected_resource(&protected).unwrap_err();
    assert_eq!(offending_field(&err), Some("apDosMonitor"));
    assert!(err.to_string().contains("must be one of: http1, http2, grpc"));
}

#[test]
fn absent_monitor_protocol_is_not_validated() {
    let mut protected = valid_resource();
    protected.spec.ap_dos_monitor = Some(DosMonitor {
        uri: "http://www.example.com".to_string(),
        protocol: String::new(),
        timeout: None,
    });
    assert!(validate_dos_protected_resource(&protected).is_ok());
}

#[test]
fn empty_access_log_dest_is_a_missing_value() {
    let mut protected = valid_resource();
    protected.spec.dos_access_log_dest = String::new();
    let err = validate_dos_protected_resource(&protected).unwrap_err();
    assert!(err.to_string().contains("missing value for field: dosAccessLogDest"));
}

#[test]
fn access_log_dest_uses_the_dos_dialect() {
    // Absolute file paths are a WAF-dialect form only.
    let mut protected = valid_resource();
    protected.spec.dos_access_log_dest = "/var/log/dos.log".to_string();
    let err = validate_dos_protected_resource(&protected).unwrap_err();
    assert_eq!(offending_field(&err), Some("dosAccessLogDest"));

    let mut protected = valid_resource();
    protected.spec.dos_access_log_dest = "127.0.0.1:0".to_string();
    let err = validate_dos_protected_resource(&protected).unwrap_err();
    assert!(err.to_string().contains("0 not a valid port number"));
}

#[test]
fn dos_policy_reference_is_checked_only_when_set() {
    let mut protected = valid_resource();
    protected.spec.ap_dos_policy = String::new();
    assert!(validate_dos_protected_resource(&protected).is_ok());

    protected.spec.ap_dos_policy = "bad ref!".to_string();
    let err = validate_dos_protected_resource(&protected).unwrap_err();
    assert_eq!(offending_field(&err), Some("apDosPolicy"));
    assert!(err.to_string().contains("reference name is invalid: bad ref!"));
}

#[test]
fn security_log_fields_are_checked_in_order() {
    let mut protected = valid_resource();
    protected.spec.dos_security_log = Some(DosSecurityLog {
        enable: true,
        ap_dos_log_conf: "also bad!".to_string(),
        dos_log_dest: "nowhere".to_string(),
    });
    let err = validate_dos_protected_resource(&protected).unwrap_err();
    // The destination check runs before the reference check.
    assert_eq!(offending_field(&err), Some("dosSecurityLog/dosLogDest"));

    let mut protected = valid_resource();
    protected.spec.dos_security_log = Some(DosSecurityLog {
        enable: true,
        ap_dos_log_conf: "also bad!".to_string(),
        dos_log_dest: "stderr".to_string(),
    });
    let err = validate_dos_protected_resource(&protected).unwrap_err();
    assert_eq!(offending_field(&err), Some("dosSecurityLog/apDosLogConf"));
}

#[test]
fn spec_deserializes_from_camel_case() {
    let protected: DosProtectedResource = serde_json::from_value(json!({
        "name": "dos-one",
        "namespace": "default",
        "spec": {
            "name": "protected-object-one",
            "apDosMonitor": {"uri": "http://www.example.com", "protocol": "grpc"},
            "dosAccessLogDest": "localhost:8080",
            "apDosPolicy": "ns-1/dos-policy",
            "dosSecurityLog": {
                "enable": true,
                "apDosLogConf": "dos-log-conf",
                "dosLogDest": "stderr",
            },
        },
    }))
    .unwrap();
    assert!(validate_dos_protected_resource(&protected).is_ok());
    assert_eq!(protected.spec.ap_dos_policy, "ns-1/dos-policy");
}

#[test]
fn missing_spec_fields_default_and_fail_closed() {
    let protected: DosProtectedResource =
        serde_json::from_value(json!({"name": "dos-bare", "spec": {}})).unwrap();
    let err = validate_dos_protected_resource(&protected).unwrap_err();
    assert!(err.to_string().contains("missing value for field: name"));
}
