// crates/waf-admission-core/src/core/fields.rs
// ============================================================================
// Module: Field Path Tables
// Description: Required-field and deprecated-reference path constants.
// Purpose: Pin the per-kind structural contract as compile-time data.
// Dependencies: crate::core::tree
// ============================================================================

//! ## Overview
//! Each resource kind carries a fixed set of paths that must resolve inside
//! its body, plus one table of legacy external-reference paths whose presence
//! is tolerated but reported to operators. The tables are part of the public
//! contract: checking order is declaration order, and the path spellings are
//! stable wire-facing names.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::tree::FieldPath;

// ============================================================================
// SECTION: Required Field Tables
// ============================================================================

/// Fields a WAF policy body must carry.
pub const WAF_POLICY_REQUIRED_FIELDS: &[FieldPath] = &[FieldPath::new(&["spec", "policy"])];

/// Fields a WAF log configuration body must carry.
pub const WAF_LOG_CONF_REQUIRED_FIELDS: &[FieldPath] = &[
    FieldPath::new(&["spec", "content"]),
    FieldPath::new(&["spec", "filter"]),
];

/// Sequences a WAF user signature body must carry.
pub const WAF_USER_SIG_REQUIRED_SLICES: &[FieldPath] =
    &[FieldPath::new(&["spec", "signatures"])];

/// Fields a DoS policy body must carry.
pub const DOS_POLICY_REQUIRED_FIELDS: &[FieldPath] = &[FieldPath::new(&["spec"])];

/// Fields a DoS log configuration body must carry.
pub const DOS_LOG_CONF_REQUIRED_FIELDS: &[FieldPath] = &[
    FieldPath::new(&["spec", "content"]),
    FieldPath::new(&["spec", "filter"]),
];

// ============================================================================
// SECTION: Deprecated External References
// ============================================================================

/// Legacy external-reference paths inside a WAF policy body.
///
/// Presence of any of these is legal but reported as a deprecation notice in
/// declaration order.
pub const WAF_POLICY_EXT_REFS: &[FieldPath] = &[
    FieldPath::new(&["spec", "policy", "modificationsReference"]),
    FieldPath::new(&["spec", "policy", "blockingSettingReference"]),
    FieldPath::new(&["spec", "policy", "signatureSettingReference"]),
    FieldPath::new(&["spec", "policy", "serverTechnologyReference"]),
    FieldPath::new(&["spec", "policy", "headerReference"]),
    FieldPath::new(&["spec", "policy", "cookieReference"]),
    FieldPath::new(&["spec", "policy", "dataGuardReference"]),
    FieldPath::new(&["spec", "policy", "filetypeReference"]),
    FieldPath::new(&["spec", "policy", "methodReference"]),
    FieldPath::new(&["spec", "policy", "generalReference"]),
    FieldPath::new(&["spec", "policy", "parameterReference"]),
    FieldPath::new(&["spec", "policy", "sensitiveParameterReference"]),
    FieldPath::new(&["spec", "policy", "jsonProfileReference"]),
    FieldPath::new(&["spec", "policy", "xmlProfileReference"]),
    FieldPath::new(&["spec", "policy", "whitelistIpReference"]),
    FieldPath::new(&["spec", "policy", "responsePageReference"]),
    FieldPath::new(&["spec", "policy", "characterSetReference"]),
    FieldPath::new(&["spec", "policy", "cookieSettingsReference"]),
    FieldPath::new(&["spec", "policy", "headerSettingsReference"]),
    FieldPath::new(&["spec", "policy", "jsonValidationFileReference"]),
    FieldPath::new(&["spec", "policy", "xmlValidationFileReference"]),
    FieldPath::new(&["spec", "policy", "signatureSetReference"]),
    FieldPath::new(&["spec", "policy", "signatureReference"]),
    FieldPath::new(&["spec", "policy", "urlReference"]),
    FieldPath::new(&["spec", "policy", "threatCampaignReference"]),
];

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::WAF_POLICY_EXT_REFS;

    #[test]
    fn ext_ref_table_is_complete() {
        assert_eq!(WAF_POLICY_EXT_REFS.len(), 25);
        for path in WAF_POLICY_EXT_REFS {
            let segments = path.segments();
            assert_eq!(&segments[.. 2], &["spec", "policy"]);
            assert!(segments[2].ends_with("Reference"));
        }
    }
}
