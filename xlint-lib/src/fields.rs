//! Certificate data model consumed by the lints.
//!
//! A [`Certificate`] is immutable once built: fields are private and only
//! reachable through accessors, so the per-certificate decode cache can never
//! go stale.

use crate::oid::{self, ObjectIdentifier};
use crate::qc::{self, DecodeError, QualifiedStatement};
use std::sync::OnceLock;
use time::OffsetDateTime;

/// A certificate extension with its payload kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extension {
    /// Extension identifier.
    pub oid: ObjectIdentifier,
    /// Whether this extension is marked critical.
    pub critical: bool,
    /// Contents of the extnValue OCTET STRING.
    pub value: Vec<u8>,
}

impl Extension {
    pub fn new(oid: ObjectIdentifier, critical: bool, value: impl Into<Vec<u8>>) -> Self {
        Self {
            oid,
            critical,
            value: value.into(),
        }
    }
}

/// Distinguished name with ordered components.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistinguishedName {
    /// Ordered list of (attribute_type, value) pairs.
    /// Attribute types use short names where known (e.g., "CN", "O", "C").
    pub components: Vec<(String, String)>,
}

impl DistinguishedName {
    /// Format as a comma-separated one-line string, e.g. `C = DE, O = Org, CN = name`.
    ///
    /// Commas, equals signs and backslashes inside values are escaped.
    pub fn to_oneline(&self) -> String {
        let mut result = String::new();
        for (i, (k, v)) in self.components.iter().enumerate() {
            if i > 0 {
                result.push_str(", ");
            }
            result.push_str(k);
            result.push_str(" = ");
            for ch in v.chars() {
                match ch {
                    '\\' => result.push_str("\\\\"),
                    ',' => result.push_str("\\,"),
                    '=' => result.push_str("\\="),
                    _ => result.push(ch),
                }
            }
        }
        result
    }

    /// Value of the first attribute with the given short name.
    pub fn get(&self, short_name: &str) -> Option<&str> {
        self.components
            .iter()
            .find(|(k, _)| k == short_name)
            .map(|(_, v)| v.as_str())
    }
}

impl std::fmt::Display for DistinguishedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_oneline())
    }
}

type DecodedQcStatements = Result<Vec<QualifiedStatement>, DecodeError>;

/// A parsed certificate, reduced to the facts the lints inspect.
#[derive(Debug, Clone)]
pub struct Certificate {
    subject: DistinguishedName,
    issuer: DistinguishedName,
    serial: String,
    not_before: OffsetDateTime,
    not_after: OffsetDateTime,
    is_ca: bool,
    extensions: Vec<Extension>,
    policy_identifiers: Vec<ObjectIdentifier>,
    // Decoded qcStatements payload, filled on first use. Outer `None` means
    // the extension is absent.
    qc_statements: OnceLock<Option<DecodedQcStatements>>,
}

impl Certificate {
    /// Start building a certificate valid from `not_before`.
    pub fn builder(not_before: OffsetDateTime) -> CertificateBuilder {
        CertificateBuilder::new(not_before)
    }

    pub fn subject(&self) -> &DistinguishedName {
        &self.subject
    }

    pub fn issuer(&self) -> &DistinguishedName {
        &self.issuer
    }

    /// Serial number as colon-separated uppercase hex.
    pub fn serial(&self) -> &str {
        &self.serial
    }

    /// Start of the validity period; effective dates are compared against it.
    pub fn not_before(&self) -> OffsetDateTime {
        self.not_before
    }

    pub fn not_after(&self) -> OffsetDateTime {
        self.not_after
    }

    /// Whether basicConstraints asserts `cA`.
    pub fn is_ca(&self) -> bool {
        self.is_ca
    }

    /// Extensions in encoded order.
    pub fn extensions(&self) -> &[Extension] {
        &self.extensions
    }

    /// Policy identifiers from certificatePolicies, in encoded order.
    pub fn policy_identifiers(&self) -> &[ObjectIdentifier] {
        &self.policy_identifiers
    }

    /// Decoded qcStatements extension, or `None` when the extension is absent.
    ///
    /// The payload is decoded at most once per certificate; later calls return
    /// the cached outcome, including a cached decode error.
    pub fn qc_statements(&self) -> Option<&DecodedQcStatements> {
        self.qc_statements
            .get_or_init(|| {
                crate::predicates::get_ext_from_cert(self, &oid::EXT_QC_STATEMENTS)
                    .map(|ext| qc::decode(&ext.value))
            })
            .as_ref()
    }
}

/// Builder for [`Certificate`].
#[derive(Debug, Clone)]
pub struct CertificateBuilder {
    subject: DistinguishedName,
    issuer: DistinguishedName,
    serial: String,
    not_before: OffsetDateTime,
    not_after: OffsetDateTime,
    is_ca: bool,
    extensions: Vec<Extension>,
    policy_identifiers: Vec<ObjectIdentifier>,
}

impl CertificateBuilder {
    pub fn new(not_before: OffsetDateTime) -> Self {
        Self {
            subject: DistinguishedName::default(),
            issuer: DistinguishedName::default(),
            serial: "00".to_string(),
            not_before,
            not_after: not_before,
            is_ca: false,
            extensions: Vec::new(),
            policy_identifiers: Vec::new(),
        }
    }

    pub fn subject(mut self, subject: DistinguishedName) -> Self {
        self.subject = subject;
        self
    }

    pub fn issuer(mut self, issuer: DistinguishedName) -> Self {
        self.issuer = issuer;
        self
    }

    pub fn serial(mut self, serial: impl Into<String>) -> Self {
        self.serial = serial.into();
        self
    }

    pub fn not_after(mut self, not_after: OffsetDateTime) -> Self {
        self.not_after = not_after;
        self
    }

    pub fn ca(mut self, is_ca: bool) -> Self {
        self.is_ca = is_ca;
        self
    }

    /// Append an extension. Order is preserved.
    pub fn extension(mut self, extension: Extension) -> Self {
        self.extensions.push(extension);
        self
    }

    /// Append a policy identifier. Order is preserved.
    pub fn policy(mut self, policy: ObjectIdentifier) -> Self {
        self.policy_identifiers.push(policy);
        self
    }

    pub fn policies(mut self, policies: impl IntoIterator<Item = ObjectIdentifier>) -> Self {
        self.policy_identifiers.extend(policies);
        self
    }

    pub fn build(self) -> Certificate {
        Certificate {
            subject: self.subject,
            issuer: self.issuer,
            serial: self.serial,
            not_before: self.not_before,
            not_after: self.not_after,
            is_ca: self.is_ca,
            extensions: self.extensions,
            policy_identifiers: self.policy_identifiers,
            qc_statements: OnceLock::new(),
        }
    }
}
