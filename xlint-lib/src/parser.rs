//! Build the lint [`Certificate`] model from PEM or DER input.
//!
//! Container and TBS parsing is delegated to `x509-parser`; this module only
//! lifts out what the lints consume.

use crate::fields::{Certificate, CertificateBuilder, DistinguishedName, Extension};
use crate::oid::{self, ObjectIdentifier};
use crate::util;
use crate::XlintError;
use x509_parser::der_parser::asn1_rs::Oid;
use x509_parser::prelude::*;

/// Parse a certificate from PEM or DER (auto-detected).
///
/// If the input begins with `-----BEGIN` (after stripping whitespace), it is
/// treated as PEM. Otherwise it is treated as DER.
pub fn parse_cert(input: &[u8]) -> Result<Certificate, XlintError> {
    if input.is_empty() {
        return Err(XlintError::ParseError("empty input".into()));
    }

    if util::is_pem(input) {
        parse_pem(input)
    } else {
        parse_der(input)
    }
}

/// Parse the first certificate of a PEM input.
pub fn parse_pem(input: &[u8]) -> Result<Certificate, XlintError> {
    let (_, pem) = x509_parser::pem::parse_x509_pem(input)
        .map_err(|e| XlintError::PemError(format!("{}", e)))?;

    if !is_certificate_label(&pem.label) {
        return Err(XlintError::PemError(format!(
            "expected CERTIFICATE, got {}",
            pem.label
        )));
    }

    parse_der(&pem.contents)
}

/// Parse a certificate from DER. Trailing bytes after the certificate are ignored.
pub fn parse_der(input: &[u8]) -> Result<Certificate, XlintError> {
    let (_, x509) =
        X509Certificate::from_der(input).map_err(|e| XlintError::DerError(format!("{}", e)))?;
    build_certificate(&x509)
}

/// Split a PEM file holding one or more certificates into DER blobs.
///
/// Non-certificate blocks are skipped. Garbage after at least one good block
/// ends the scan; garbage before any block is an error.
pub fn parse_pem_bundle(input: &[u8]) -> Result<Vec<Vec<u8>>, XlintError> {
    let mut certs = Vec::new();

    for pem_result in Pem::iter_from_buffer(input) {
        match pem_result {
            Ok(pem) => {
                if is_certificate_label(&pem.label) {
                    certs.push(pem.contents);
                }
            }
            Err(e) => {
                if !certs.is_empty() {
                    break;
                }
                return Err(XlintError::PemError(format!("failed to parse PEM: {}", e)));
            }
        }
    }

    if certs.is_empty() {
        return Err(XlintError::PemError(
            "no certificates found in PEM input".into(),
        ));
    }

    Ok(certs)
}

fn is_certificate_label(label: &str) -> bool {
    matches!(
        label,
        "CERTIFICATE" | "TRUSTED CERTIFICATE" | "X509 CERTIFICATE"
    )
}

fn build_certificate(x509: &X509Certificate) -> Result<Certificate, XlintError> {
    let tbs = &x509.tbs_certificate;

    let mut builder = CertificateBuilder::new(tbs.validity.not_before.to_datetime())
        .not_after(tbs.validity.not_after.to_datetime())
        .subject(build_dn(&tbs.subject))
        .issuer(build_dn(&tbs.issuer))
        .serial(format_serial(tbs.raw_serial()));

    let mut seen_basic_constraints = false;
    let mut seen_policies = false;
    for ext in tbs.extensions() {
        builder = builder.extension(Extension::new(
            convert_oid(&ext.oid)?,
            ext.critical,
            ext.value,
        ));

        // Only the first instance of each extension feeds the derived facts.
        match ext.parsed_extension() {
            ParsedExtension::BasicConstraints(bc) if !seen_basic_constraints => {
                seen_basic_constraints = true;
                builder = builder.ca(bc.ca);
            }
            ParsedExtension::CertificatePolicies(policies) if !seen_policies => {
                seen_policies = true;
                for policy in policies.iter() {
                    builder = builder.policy(convert_oid(&policy.policy_id)?);
                }
            }
            _ => {}
        }
    }

    Ok(builder.build())
}

fn convert_oid(raw: &Oid) -> Result<ObjectIdentifier, XlintError> {
    ObjectIdentifier::from_bytes(raw.as_bytes()).map_err(|_| {
        XlintError::ParseError(format!("unsupported object identifier {}", raw.to_id_string()))
    })
}

/// Format a serial number as colon-separated uppercase hex, stripping leading
/// zero bytes but keeping at least one byte.
fn format_serial(raw: &[u8]) -> String {
    let stripped = match raw.iter().position(|&b| b != 0) {
        Some(pos) => raw.get(pos..).unwrap_or(raw),
        None => raw.get(raw.len().saturating_sub(1)..).unwrap_or(raw),
    };
    util::hex_colon_upper(stripped)
}

fn build_dn(name: &X509Name) -> DistinguishedName {
    let mut components = Vec::new();
    for rdn in name.iter() {
        for attr in rdn.iter() {
            let key = ObjectIdentifier::from_bytes(attr.attr_type().as_bytes())
                .ok()
                .and_then(|id| oid::dn_short_name(&id))
                .map(str::to_string)
                .unwrap_or_else(|| attr.attr_type().to_id_string());
            let value = attr.as_str().unwrap_or("<binary>").to_string();
            components.push((key, value));
        }
    }
    DistinguishedName { components }
}
