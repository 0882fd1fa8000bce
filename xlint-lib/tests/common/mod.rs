//! DER builders and certificate fixtures shared by the integration tests.

#![allow(dead_code)]

use time::macros::datetime;
use time::OffsetDateTime;
use xlint_lib::oid::{self, ObjectIdentifier};
use xlint_lib::{Certificate, CertificateBuilder, Extension};

/// Issued well after every built-in lint's effective date.
pub const ISSUED: OffsetDateTime = datetime!(2021-06-01 0:00 UTC);

/// Encode a tag-length-value triple with a definite DER length.
pub fn tlv(tag: u8, content: &[u8]) -> Vec<u8> {
    let len = content.len();
    let mut out = vec![tag];
    if len < 0x80 {
        out.push(len as u8);
    } else if len < 0x100 {
        out.extend_from_slice(&[0x81, len as u8]);
    } else {
        out.extend_from_slice(&[0x82, (len >> 8) as u8, len as u8]);
    }
    out.extend_from_slice(content);
    out
}

pub fn seq(parts: &[Vec<u8>]) -> Vec<u8> {
    tlv(0x30, &parts.concat())
}

pub fn oid_der(id: &ObjectIdentifier) -> Vec<u8> {
    tlv(0x06, id.as_bytes())
}

/// One QCStatement: SEQUENCE { statementId, statementInfo OPTIONAL }.
pub fn statement(id: &ObjectIdentifier, info: Option<&[u8]>) -> Vec<u8> {
    let mut content = oid_der(id);
    if let Some(info) = info {
        content.extend_from_slice(info);
    }
    tlv(0x30, &content)
}

/// SEQUENCE OF QCStatement.
pub fn statements(parts: &[Vec<u8>]) -> Vec<u8> {
    seq(parts)
}

/// statementInfo for esi4-qcStatement-6: SEQUENCE OF QcType OID.
pub fn qc_type_info(types: &[ObjectIdentifier]) -> Vec<u8> {
    seq(&types.iter().map(oid_der).collect::<Vec<_>>())
}

/// certificatePolicies payload holding bare policy identifiers.
pub fn policies_der(ids: &[ObjectIdentifier]) -> Vec<u8> {
    seq(&ids.iter().map(|id| seq(&[oid_der(id)])).collect::<Vec<_>>())
}

pub fn qc_ext(payload: Vec<u8>) -> Extension {
    Extension::new(oid::EXT_QC_STATEMENTS, false, payload)
}

pub fn san_ext() -> Extension {
    // SEQUENCE { [2] "example.eu" }
    Extension::new(
        oid::EXT_SUBJECT_ALT_NAME,
        false,
        seq(&[tlv(0x82, b"example.eu")]),
    )
}

/// End-entity certificate with a SAN and the given extras.
pub fn subscriber() -> CertificateBuilder {
    Certificate::builder(ISSUED)
        .not_after(datetime!(2023-06-01 0:00 UTC))
        .extension(san_ext())
}

/// End-entity qualified certificate: QcCompliance, QcType(esign), QcSSCD,
/// with the QCP-n-qscd policy.
pub fn qualified_subscriber() -> Certificate {
    let payload = statements(&[
        statement(&oid::ETSI_QCS_QC_COMPLIANCE, None),
        statement(
            &oid::ETSI_QCS_QC_TYPE,
            Some(&qc_type_info(&[oid::ETSI_QCT_ESIGN])),
        ),
        statement(&oid::ETSI_QCS_QC_SSCD, None),
    ]);
    subscriber()
        .extension(qc_ext(payload))
        .policy(oid::ETSI_QCP_NATURAL_QSCD)
        .build()
}
