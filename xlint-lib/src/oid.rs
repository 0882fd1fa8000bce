//! Object identifier catalog used by the certificate model and the lints.
//!
//! Every identifier is a compile-time constant built with
//! [`ObjectIdentifier::new_unwrap`], so a malformed arc string fails the build
//! rather than surfacing at runtime. Equality is exact arc-sequence equality
//! (`==`); nothing in this crate matches identifiers by prefix.

pub use const_oid::ObjectIdentifier;

// ── X.509 Distinguished Name attributes (RFC 4519 / X.520) ──────────────

pub const COMMON_NAME: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.3");
pub const SURNAME: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.4");
pub const SERIAL_NUMBER: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.5");
pub const COUNTRY: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.6");
pub const LOCALITY: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.7");
pub const STATE_OR_PROVINCE: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.8");
pub const ORGANIZATION: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.10");
pub const ORGANIZATIONAL_UNIT: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.11");
pub const GIVEN_NAME: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.42");
pub const ORGANIZATION_IDENTIFIER: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.97");
pub const EMAIL_ADDRESS: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.9.1");

// ── X.509v3 extensions (RFC 5280 Section 4.2) ───────────────────────────

pub const EXT_SUBJECT_KEY_ID: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.29.14");
pub const EXT_KEY_USAGE: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.29.15");
pub const EXT_SUBJECT_ALT_NAME: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.29.17");
pub const EXT_BASIC_CONSTRAINTS: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.29.19");
pub const EXT_NAME_CONSTRAINTS: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.29.30");
pub const EXT_CERTIFICATE_POLICIES: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.29.32");
pub const EXT_AUTHORITY_KEY_ID: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.29.35");
pub const EXT_EXTENDED_KEY_USAGE: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.29.37");

// ── PKIX private extensions (RFC 5280 Section 4.2.2, RFC 3739) ──────────

pub const EXT_AUTHORITY_INFO_ACCESS: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.3.6.1.5.5.7.1.1");
/// qcStatements extension (RFC 3739 Section 3.2.6).
pub const EXT_QC_STATEMENTS: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.6.1.5.5.7.1.3");

// ── Qualified certificate statements (RFC 3739 / ETSI EN 319 412-5) ─────

pub const QCS_PKIX_SYNTAX_V1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.6.1.5.5.7.11.1");
pub const QCS_PKIX_SYNTAX_V2: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.6.1.5.5.7.11.2");

/// esi4-qcStatement-1: the certificate is an EU qualified certificate.
pub const ETSI_QCS_QC_COMPLIANCE: ObjectIdentifier = ObjectIdentifier::new_unwrap("0.4.0.1862.1.1");
/// esi4-qcStatement-2: transaction value limit.
pub const ETSI_QCS_QC_LIMIT_VALUE: ObjectIdentifier = ObjectIdentifier::new_unwrap("0.4.0.1862.1.2");
/// esi4-qcStatement-3: retention period of registration material.
pub const ETSI_QCS_QC_RETENTION_PERIOD: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("0.4.0.1862.1.3");
/// esi4-qcStatement-4: private key resides in a QSCD.
pub const ETSI_QCS_QC_SSCD: ObjectIdentifier = ObjectIdentifier::new_unwrap("0.4.0.1862.1.4");
/// esi4-qcStatement-5: PKI disclosure statements.
pub const ETSI_QCS_QC_PDS: ObjectIdentifier = ObjectIdentifier::new_unwrap("0.4.0.1862.1.5");
/// esi4-qcStatement-6: qualified certificate type.
pub const ETSI_QCS_QC_TYPE: ObjectIdentifier = ObjectIdentifier::new_unwrap("0.4.0.1862.1.6");

pub const ETSI_QCT_ESIGN: ObjectIdentifier = ObjectIdentifier::new_unwrap("0.4.0.1862.1.6.1");
pub const ETSI_QCT_ESEAL: ObjectIdentifier = ObjectIdentifier::new_unwrap("0.4.0.1862.1.6.2");
pub const ETSI_QCT_WEB: ObjectIdentifier = ObjectIdentifier::new_unwrap("0.4.0.1862.1.6.3");

/// Statement identifiers defined by ETSI EN 319 412-5 Section 4.
pub const ETSI_QC_STATEMENTS: [ObjectIdentifier; 6] = [
    ETSI_QCS_QC_COMPLIANCE,
    ETSI_QCS_QC_LIMIT_VALUE,
    ETSI_QCS_QC_RETENTION_PERIOD,
    ETSI_QCS_QC_SSCD,
    ETSI_QCS_QC_PDS,
    ETSI_QCS_QC_TYPE,
];

// ── Qualified certificate policies (ETSI EN 319 411-2 Section 5.3) ──────

/// QCP-n: qualified certificate issued to a natural person.
pub const ETSI_QCP_NATURAL: ObjectIdentifier = ObjectIdentifier::new_unwrap("0.4.0.194112.1.0");
/// QCP-l: qualified certificate issued to a legal person.
pub const ETSI_QCP_LEGAL: ObjectIdentifier = ObjectIdentifier::new_unwrap("0.4.0.194112.1.1");
/// QCP-n-qscd: natural person, private key in a QSCD.
pub const ETSI_QCP_NATURAL_QSCD: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("0.4.0.194112.1.2");
/// QCP-l-qscd: legal person, private key in a QSCD.
pub const ETSI_QCP_LEGAL_QSCD: ObjectIdentifier = ObjectIdentifier::new_unwrap("0.4.0.194112.1.3");
/// QCP-w: qualified website authentication certificate.
pub const ETSI_QCP_WEB: ObjectIdentifier = ObjectIdentifier::new_unwrap("0.4.0.194112.1.4");

/// The five qualified certificate policy identifiers.
pub const ETSI_QC_POLICIES: [ObjectIdentifier; 5] = [
    ETSI_QCP_NATURAL,
    ETSI_QCP_LEGAL,
    ETSI_QCP_NATURAL_QSCD,
    ETSI_QCP_LEGAL_QSCD,
    ETSI_QCP_WEB,
];

/// Short attribute names used when rendering distinguished names.
const DN_SHORT_NAMES: [(ObjectIdentifier, &str); 11] = [
    (COMMON_NAME, "CN"),
    (SURNAME, "SN"),
    (SERIAL_NUMBER, "serialNumber"),
    (COUNTRY, "C"),
    (LOCALITY, "L"),
    (STATE_OR_PROVINCE, "ST"),
    (ORGANIZATION, "O"),
    (ORGANIZATIONAL_UNIT, "OU"),
    (GIVEN_NAME, "GN"),
    (ORGANIZATION_IDENTIFIER, "organizationIdentifier"),
    (EMAIL_ADDRESS, "emailAddress"),
];

/// Exact identifier equality.
pub fn equals(a: &ObjectIdentifier, b: &ObjectIdentifier) -> bool {
    a == b
}

/// Short name for a distinguished-name attribute, if it is one we know.
pub fn dn_short_name(oid: &ObjectIdentifier) -> Option<&'static str> {
    DN_SHORT_NAMES
        .iter()
        .find(|(known, _)| known == oid)
        .map(|(_, name)| *name)
}
