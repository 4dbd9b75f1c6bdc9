// crates/waf-admission-core/src/core/grammar.rs
// ============================================================================
// Module: String Grammar Validators
// Description: Layered format checks for log destinations, names, and
//              qualified references.
// Purpose: Classify free-form operator strings without panics or mutation.
// Dependencies: regex
// ============================================================================

//! ## Overview
//! Log destinations and resource references are free-form operator input with
//! real-world variance: hostnames, literal addresses, file paths, `stderr`.
//! A single-shot regex for each grammar would be unreadable, so validation is
//! layered the way a human would eyeball the string: a coarse shape match
//! first, then semantic decomposition of the matched pieces.
//!
//! Patterns are compiled once into process-wide statics and never mutated.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::net::IpAddr;
use std::sync::LazyLock;

use regex::Regex;

use crate::core::errors::ValidationError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum length of a DoS protected-object name.
pub const MAX_NAME_LENGTH: usize = 63;

/// Maximum length of the name part of a qualified name.
const MAX_QUALIFIED_NAME_LENGTH: usize = 63;

/// Maximum length of the namespace prefix of a qualified name.
const MAX_QUALIFIED_PREFIX_LENGTH: usize = 253;

/// Canonical valid example for DoS protected-object names.
pub const DOS_NAME_EXAMPLE: &str = "protected-object-one";

/// Canonical valid example for DoS monitor URIs.
pub const MONITOR_URI_EXAMPLE: &str = "http://www.example.com";

/// Monitor protocols accepted for DoS protected resources.
pub const MONITOR_PROTOCOLS: &[&str] = &["http1", "http2", "grpc"];

// ============================================================================
// SECTION: Compiled Patterns
// ============================================================================

/// Compiles a fixed pattern literal.
#[allow(
    clippy::expect_used,
    reason = "Patterns are fixed literals; compilation is covered by tests."
)]
fn compiled(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern must compile")
}

/// Overall shape of a WAF-dialect log destination.
static WAF_DEST_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    compiled(
        r"(?:syslog:server=((?:\d{1,3}\.){3}\d{1,3}|localhost|[a-zA-Z0-9._-]+):\d{1,5})|stderr|(?:/[\S]+)+",
    )
});

/// Absolute file path form of a WAF-dialect log destination.
static WAF_DEST_FILE: LazyLock<Regex> = LazyLock::new(|| compiled(r"(?:/[\S]+)+"));

/// FQDN form accepted for syslog hosts.
static WAF_DEST_FQDN: LazyLock<Regex> =
    LazyLock::new(|| compiled(r"(?:[a-zA-Z0-9_-]+\.)+[a-zA-Z0-9_-]+"));

/// `<ipv4>:<port>` form of a DoS-dialect log destination.
static DOS_DEST_IP: LazyLock<Regex> = LazyLock::new(|| compiled(r"^(\d{1,3}\.){3}\d{1,3}:\d{1,5}$"));

/// `<fqdn>:<port>` form of a DoS-dialect log destination.
static DOS_DEST_DNS: LazyLock<Regex> = LazyLock::new(|| {
    compiled(r"^([A-Za-z0-9][A-Za-z0-9-]{1,62}\.)([A-Za-z0-9-]{1,63}\.)*[A-Za-z]{2,6}:\d{1,5}$")
});

/// `localhost:<port>` form of a DoS-dialect log destination.
static DOS_DEST_LOCALHOST: LazyLock<Regex> = LazyLock::new(|| compiled(r"^localhost:\d{1,5}$"));

/// Strings safe to embed in a quoted interpolation context.
static ESCAPED_STRING: LazyLock<Regex> = LazyLock::new(|| compiled(r#"^([^"\\]|\\.)*$"#));

/// Name part of a qualified name.
static QUALIFIED_NAME_PART: LazyLock<Regex> =
    LazyLock::new(|| compiled(r"^[A-Za-z0-9]([A-Za-z0-9._-]*[A-Za-z0-9])?$"));

/// DNS subdomain prefix of a qualified name.
static QUALIFIED_PREFIX_PART: LazyLock<Regex> = LazyLock::new(|| {
    compiled(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$")
});

// ============================================================================
// SECTION: Port Validation
// ============================================================================

/// Validates a port segment as a base-10 integer in `[1, 65535]`.
///
/// Both log-destination dialects converge on this gate, so it stays explicit
/// even where an outer regex has already constrained the segment's shape.
///
/// # Errors
///
/// Returns [`ValidationError::PortParse`] for non-numeric input and
/// [`ValidationError::PortRange`] for out-of-range values.
pub fn validate_port(value: &str) -> Result<(), ValidationError> {
    let port: u32 = value.parse().map_err(|_| ValidationError::PortParse {
        value: value.to_string(),
    })?;
    if !(1 ..= 65535).contains(&port) {
        return Err(ValidationError::PortRange { port });
    }
    Ok(())
}

// ============================================================================
// SECTION: WAF Log Destination
// ============================================================================

/// Validates a WAF-dialect log destination.
///
/// Accepted forms: `stderr`, an absolute file path, or
/// `syslog:server=<host>:<port>` where the host is `localhost`, an FQDN, or
/// an IP address, and the port lies in `[1, 65535]`.
///
/// # Errors
///
/// Returns [`ValidationError::LogDestinationFormat`] when the string does not
/// match the overall shape, a port error for a bad port, and
/// [`ValidationError::HostFormat`] for an unrecognized host.
pub fn validate_log_destination(dest: &str) -> Result<(), ValidationError> {
    if !WAF_DEST_SHAPE.is_match(dest) {
        return Err(ValidationError::LogDestinationFormat {
            dest: dest.to_string(),
        });
    }
    if dest == "stderr" {
        return Ok(());
    }
    if WAF_DEST_FILE.is_match(dest) {
        return Ok(());
    }

    // syslog:server=<host>:<port> decomposes on ':' into three chunks.
    let chunks: Vec<&str> = dest.split(':').collect();
    let Some(port_chunk) = chunks.get(2) else {
        return Err(ValidationError::LogDestinationFormat {
            dest: dest.to_string(),
        });
    };
    validate_port(port_chunk)?;

    let Some(host) = chunks.get(1).and_then(|chunk| chunk.split('=').nth(1)) else {
        return Err(ValidationError::LogDestinationFormat {
            dest: dest.to_string(),
        });
    };
    if host == "localhost" {
        return Ok(());
    }
    if WAF_DEST_FQDN.is_match(host) {
        return Ok(());
    }
    if host.parse::<IpAddr>().is_ok() {
        return Ok(());
    }
    Err(ValidationError::HostFormat {
        host: host.to_string(),
    })
}

// ============================================================================
// SECTION: DoS Log Destination
// ============================================================================

/// Validates a DoS-dialect log destination.
///
/// Accepted forms: `<ipv4>:<port>`, `<fqdn>:<port>`, `localhost:<port>`, or
/// the literal `stderr`. The port segment is re-validated through
/// [`validate_port`] even though the shape regexes already constrain it.
///
/// # Errors
///
/// Returns [`ValidationError::DosLogDestinationFormat`] when the string does
/// not match any accepted form, or a port error for an out-of-range port.
pub fn validate_dos_log_destination(dest: &str) -> Result<(), ValidationError> {
    if DOS_DEST_IP.is_match(dest) || DOS_DEST_DNS.is_match(dest) || DOS_DEST_LOCALHOST.is_match(dest)
    {
        let Some(port_chunk) = dest.split(':').nth(1) else {
            return Err(ValidationError::DosLogDestinationFormat {
                dest: dest.to_string(),
            });
        };
        return validate_port(port_chunk);
    }
    if dest == "stderr" {
        return Ok(());
    }
    Err(ValidationError::DosLogDestinationFormat {
        dest: dest.to_string(),
    })
}

// ============================================================================
// SECTION: Escaped Strings and Names
// ============================================================================

/// Validates that a string is safe to embed in a quoted context.
///
/// A string is escaped when it introduces no unescaped double quote and does
/// not end with an unescaped backslash.
///
/// # Errors
///
/// Returns [`ValidationError::Unescaped`] carrying the offending value and a
/// canonical valid example.
pub fn validate_escaped_string(value: &str, example: &'static str) -> Result<(), ValidationError> {
    if ESCAPED_STRING.is_match(value) {
        return Ok(());
    }
    Err(ValidationError::Unescaped {
        value: value.to_string(),
        example,
    })
}

/// Validates a DoS protected-object name.
///
/// # Errors
///
/// Returns [`ValidationError::NameTooLong`] when the name exceeds
/// [`MAX_NAME_LENGTH`] and [`ValidationError::Unescaped`] when it fails the
/// escaped-string grammar.
pub fn validate_dos_name(name: &str) -> Result<(), ValidationError> {
    if name.len() > MAX_NAME_LENGTH {
        return Err(ValidationError::NameTooLong {
            max: MAX_NAME_LENGTH,
        });
    }
    validate_escaped_string(name, DOS_NAME_EXAMPLE)
}

// ============================================================================
// SECTION: Qualified Names
// ============================================================================

/// Reports whether a string is a legal qualified name.
///
/// A qualified name is `name` or `prefix/name`: the name part starts and ends
/// alphanumeric with `-`, `_`, or `.` inside and is at most 63 characters;
/// the prefix, when present, is a lowercase DNS subdomain of at most 253
/// characters.
#[must_use]
pub fn is_qualified_name(value: &str) -> bool {
    let parts: Vec<&str> = value.split('/').collect();
    let name = match parts.as_slice() {
        [name] => *name,
        [prefix, name] => {
            if prefix.is_empty()
                || prefix.len() > MAX_QUALIFIED_PREFIX_LENGTH
                || !QUALIFIED_PREFIX_PART.is_match(prefix)
            {
                return false;
            }
            *name
        }
        _ => return false,
    };
    !name.is_empty()
        && name.len() <= MAX_QUALIFIED_NAME_LENGTH
        && QUALIFIED_NAME_PART.is_match(name)
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::is_qualified_name;
    use super::validate_dos_log_destination;
    use super::validate_dos_name;
    use super::validate_escaped_string;
    use super::validate_log_destination;
    use super::validate_port;
    use crate::core::errors::ValidationError;

    #[test]
    fn port_boundaries() {
        assert!(validate_port("1").is_ok());
        assert!(validate_port("65535").is_ok());
        assert!(matches!(
            validate_port("0"),
            Err(ValidationError::PortRange { port: 0 })
        ));
        assert!(matches!(
            validate_port("65536"),
            Err(ValidationError::PortRange { port: 65536 })
        ));
        assert!(matches!(
            validate_port("http"),
            Err(ValidationError::PortParse { .. })
        ));
    }

    #[test]
    fn waf_destination_accepts_stderr_and_files() {
        assert!(validate_log_destination("stderr").is_ok());
        assert!(validate_log_destination("/var/log/waf.log").is_ok());
        assert!(validate_log_destination("/shared/logs/security").is_ok());
    }

    #[test]
    fn waf_destination_accepts_syslog_hosts() {
        assert!(validate_log_destination("syslog:server=localhost:514").is_ok());
        assert!(validate_log_destination("syslog:server=10.0.0.1:514").is_ok());
        assert!(validate_log_destination("syslog:server=logs.example.com:514").is_ok());
    }

    #[test]
    fn waf_destination_rejects_bad_port_and_host() {
        assert!(matches!(
            validate_log_destination("syslog:server=localhost:0"),
            Err(ValidationError::PortRange { port: 0 })
        ));
        assert!(matches!(
            validate_log_destination("syslog:server=localhost:65536"),
            Err(ValidationError::PortRange { port: 65536 })
        ));
        assert!(matches!(
            validate_log_destination("syslog:server=myhost:514"),
            Err(ValidationError::HostFormat { .. })
        ));
    }

    #[test]
    fn waf_destination_rejects_unshaped_strings() {
        assert!(matches!(
            validate_log_destination("logs.example.com:514"),
            Err(ValidationError::LogDestinationFormat { .. })
        ));
        assert!(matches!(
            validate_log_destination("some destination"),
            Err(ValidationError::LogDestinationFormat { .. })
        ));
    }

    // The shape patterns are deliberately unanchored: any string containing a
    // '/'-rooted token is treated as a file destination.
    #[test]
    fn waf_destination_file_match_is_substring_based() {
        assert!(validate_log_destination("relative/path.log").is_ok());
    }

    #[test]
    fn dos_destination_forms() {
        assert!(validate_dos_log_destination("stderr").is_ok());
        assert!(validate_dos_log_destination("localhost:8080").is_ok());
        assert!(validate_dos_log_destination("10.1.2.3:514").is_ok());
        assert!(validate_dos_log_destination("logs.example.com:514").is_ok());
        assert!(matches!(
            validate_dos_log_destination("localhost:0"),
            Err(ValidationError::PortRange { port: 0 })
        ));
        assert!(matches!(
            validate_dos_log_destination("/var/log/dos.log"),
            Err(ValidationError::DosLogDestinationFormat { .. })
        ));
        assert!(matches!(
            validate_dos_log_destination("localhost"),
            Err(ValidationError::DosLogDestinationFormat { .. })
        ));
    }

    #[test]
    fn escaped_string_grammar() {
        assert!(validate_escaped_string("plain-name", "example").is_ok());
        assert!(validate_escaped_string(r#"with \" escaped quote"#, "example").is_ok());
        assert!(validate_escaped_string(r#"unescaped " quote"#, "example").is_err());
        assert!(validate_escaped_string("trailing backslash \\", "example").is_err());
    }

    #[test]
    fn dos_name_length_gate_runs_first() {
        let long = "a".repeat(64);
        assert!(matches!(
            validate_dos_name(&long),
            Err(ValidationError::NameTooLong { max: 63 })
        ));
        assert!(validate_dos_name("protected-object-one").is_ok());
    }

    #[test]
    fn qualified_names() {
        assert!(is_qualified_name("simple-name"));
        assert!(is_qualified_name("ns-1/dos-policy"));
        assert!(is_qualified_name("my.domain.example/policy_v1"));
        assert!(!is_qualified_name(""));
        assert!(!is_qualified_name("ns/"));
        assert!(!is_qualified_name("/name"));
        assert!(!is_qualified_name("a/b/c"));
        assert!(!is_qualified_name("-leading-dash"));
        assert!(!is_qualified_name(&"x".repeat(64)));
    }
}
