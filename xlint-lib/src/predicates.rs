//! Certificate predicates shared by the lints.

use crate::fields::{Certificate, Extension};
use crate::oid::{self, ObjectIdentifier};
use crate::qc;

/// First extension with identifier `id`.
///
/// RFC 5280 Section 4.2 forbids repeating an extension; when a certificate
/// does so anyway the first occurrence wins. Duplicates are reported by the
/// `e_ext_duplicate_extension` lint, not here.
pub fn get_ext_from_cert<'a>(cert: &'a Certificate, id: &ObjectIdentifier) -> Option<&'a Extension> {
    cert.extensions().iter().find(|ext| ext.oid == *id)
}

pub fn is_ext_in_cert(cert: &Certificate, id: &ObjectIdentifier) -> bool {
    get_ext_from_cert(cert, id).is_some()
}

pub fn is_ca_cert(cert: &Certificate) -> bool {
    cert.is_ca()
}

/// Subscriber (end-entity) certificate.
pub fn is_subscriber_cert(cert: &Certificate) -> bool {
    !cert.is_ca()
}

/// Whether the policy list holds exactly `id`.
pub fn has_policy(cert: &Certificate, id: &ObjectIdentifier) -> bool {
    cert.policy_identifiers().iter().any(|p| p == id)
}

/// Whether the policy list holds any of `ids`.
pub fn has_any_policy(cert: &Certificate, ids: &[ObjectIdentifier]) -> bool {
    ids.iter().any(|id| has_policy(cert, id))
}

/// Whether `payload` decodes to at least one statement.
///
/// Decode failures yield `false`; a lint that wants to report malformed
/// payloads decodes them itself.
pub fn has_any_qualified_statement(payload: &[u8]) -> bool {
    match qc::decode(payload) {
        Ok(statements) => !statements.is_empty(),
        Err(e) => {
            tracing::debug!(error = %e, "qcStatements payload failed to decode");
            false
        }
    }
}

/// Whether `payload` decodes and carries any ETSI EN 319 412-5 statement.
pub fn is_any_etsi_qc_statement_present(payload: &[u8]) -> bool {
    match qc::decode(payload) {
        Ok(statements) => oid::ETSI_QC_STATEMENTS
            .iter()
            .any(|id| qc::has(&statements, id)),
        Err(e) => {
            tracing::debug!(error = %e, "qcStatements payload failed to decode");
            false
        }
    }
}

/// Cached form of [`is_any_etsi_qc_statement_present`] for the certificate's
/// own qcStatements extension.
pub fn has_etsi_qc_statements(cert: &Certificate) -> bool {
    match cert.qc_statements() {
        Some(Ok(statements)) => oid::ETSI_QC_STATEMENTS
            .iter()
            .any(|id| qc::has(statements, id)),
        _ => false,
    }
}

/// Whether the certificate's qcStatements extension decodes and holds `id`.
pub fn has_qc_statement(cert: &Certificate, id: &ObjectIdentifier) -> bool {
    matches!(cert.qc_statements(), Some(Ok(statements)) if qc::has(statements, id))
}
