//! Decoder for the qcStatements extension (RFC 3739 Section 3.2.6).
//!
//! ```text
//! QCStatements ::= SEQUENCE OF QCStatement
//! QCStatement ::= SEQUENCE {
//!     statementId   OBJECT IDENTIFIER,
//!     statementInfo ANY DEFINED BY statementId OPTIONAL }
//! ```
//!
//! Payloads come from untrusted certificates. Every read is bounded by the
//! declared length of its enclosing element, which is itself bounded by the
//! bytes actually remaining; a length that overruns its container is a
//! [`DecodeError`], never an out-of-bounds access. `statementInfo` is kept as
//! raw DER and not interpreted here.

use crate::oid::ObjectIdentifier;
use x509_parser::der_parser::asn1_rs::{Any, Class, FromDer, Tag};

/// One decoded statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedStatement {
    /// statementId.
    pub id: ObjectIdentifier,
    /// Full DER encoding (tag, length, contents) of statementInfo, if present.
    pub qualifier: Option<Vec<u8>>,
}

/// Errors from decoding a qcStatements payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("error parsing outer SEQUENCE: {0}")]
    MalformedOuter(String),

    #[error("qcStatements is not a SEQUENCE (found {0})")]
    OuterNotSequence(String),

    #[error("{0} trailing byte(s) after outer SEQUENCE")]
    TrailingData(usize),

    #[error("QcStatement {index}: {reason}")]
    MalformedStatement { index: usize, reason: String },

    #[error("QcStatement {index}: statementId is not a valid OBJECT IDENTIFIER")]
    InvalidIdentifier { index: usize },

    #[error("QcStatement {index}: {trailing} byte(s) after statementInfo")]
    TrailingStatementData { index: usize, trailing: usize },
}

/// Decode a qcStatements extension payload.
///
/// The whole payload fails on the first malformed statement; statements are
/// returned in encoded order and duplicates are kept.
pub fn decode(payload: &[u8]) -> Result<Vec<QualifiedStatement>, DecodeError> {
    let (rest, outer) =
        Any::from_der(payload).map_err(|e| DecodeError::MalformedOuter(e.to_string()))?;
    if !is_universal_sequence(&outer) {
        return Err(DecodeError::OuterNotSequence(describe(&outer)));
    }
    if !rest.is_empty() {
        return Err(DecodeError::TrailingData(rest.len()));
    }

    let mut statements = Vec::new();
    let mut remaining = outer.data;
    let mut index = 0;
    while !remaining.is_empty() {
        let (next, element) =
            Any::from_der(remaining).map_err(|e| DecodeError::MalformedStatement {
                index,
                reason: e.to_string(),
            })?;
        statements.push(decode_statement(index, &element)?);
        remaining = next;
        index += 1;
    }
    Ok(statements)
}

fn decode_statement(index: usize, element: &Any<'_>) -> Result<QualifiedStatement, DecodeError> {
    if !is_universal_sequence(element) {
        return Err(DecodeError::MalformedStatement {
            index,
            reason: format!("expected SEQUENCE, found {}", describe(element)),
        });
    }

    let (after_id, raw_id) =
        Any::from_der(element.data).map_err(|e| DecodeError::MalformedStatement {
            index,
            reason: format!("statementId: {}", e),
        })?;
    if !is_universal_oid(&raw_id) {
        return Err(DecodeError::MalformedStatement {
            index,
            reason: format!(
                "statementId: expected OBJECT IDENTIFIER, found {}",
                describe(&raw_id)
            ),
        });
    }
    let id = ObjectIdentifier::from_bytes(raw_id.data)
        .map_err(|_| DecodeError::InvalidIdentifier { index })?;

    if after_id.is_empty() {
        return Ok(QualifiedStatement {
            id,
            qualifier: None,
        });
    }

    let (trailing, _info) =
        Any::from_der(after_id).map_err(|e| DecodeError::MalformedStatement {
            index,
            reason: format!("statementInfo: {}", e),
        })?;
    if !trailing.is_empty() {
        return Err(DecodeError::TrailingStatementData {
            index,
            trailing: trailing.len(),
        });
    }
    // `trailing` is empty, so statementInfo spans the rest of the element.
    Ok(QualifiedStatement {
        id,
        qualifier: Some(after_id.to_vec()),
    })
}

fn is_universal_sequence(any: &Any<'_>) -> bool {
    any.header.class() == Class::Universal
        && any.header.is_constructed()
        && any.header.tag() == Tag::Sequence
}

fn is_universal_oid(any: &Any<'_>) -> bool {
    any.header.class() == Class::Universal
        && !any.header.is_constructed()
        && any.header.tag() == Tag::Oid
}

fn describe(any: &Any<'_>) -> String {
    format!("{:?} tag {}", any.header.class(), any.header.tag().0)
}

/// Whether any statement carries exactly `id`.
pub fn has(statements: &[QualifiedStatement], id: &ObjectIdentifier) -> bool {
    find(statements, id).is_some()
}

/// First statement carrying exactly `id`.
pub fn find<'a>(
    statements: &'a [QualifiedStatement],
    id: &ObjectIdentifier,
) -> Option<&'a QualifiedStatement> {
    statements.iter().find(|s| s.id == *id)
}
