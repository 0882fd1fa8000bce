#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::panic,
    clippy::indexing_slicing
)]
//! Behaviour of the built-in lints on constructed certificates.

mod common;

use common::*;
use xlint_lib::oid::{self, ObjectIdentifier};
use xlint_lib::predicates;
use xlint_lib::*;

fn status(cert: &Certificate, lint: &str) -> Status {
    let registry = global_registry().unwrap();
    execute_lint(registry.by_name(lint).unwrap(), cert).status
}

fn details(cert: &Certificate, lint: &str) -> Option<String> {
    let registry = global_registry().unwrap();
    execute_lint(registry.by_name(lint).unwrap(), cert).details
}

/// QcCompliance, QcSSCD, and a PKIX natural-person statement.
fn qscd_payload(with_sscd: bool) -> Vec<u8> {
    let mut parts = vec![statement(&oid::ETSI_QCS_QC_COMPLIANCE, None)];
    if with_sscd {
        parts.push(statement(&oid::ETSI_QCS_QC_SSCD, None));
    }
    parts.push(statement(&oid::QCS_PKIX_SYNTAX_V2, None));
    statements(&parts)
}

// ---------------------------------------------------------------------------
// End-to-end: QSCD and policy requirements
// ---------------------------------------------------------------------------

#[test]
fn test_qscd_certificate_passes() {
    let cert = subscriber()
        .extension(qc_ext(qscd_payload(true)))
        .policy(oid::ETSI_QCP_NATURAL_QSCD)
        .build();
    let report = lint_certificate(global_registry().unwrap(), &cert);
    assert_eq!(
        report.get("e_qcstatem_qscd_valid").unwrap().status,
        Status::Pass
    );
    assert_eq!(
        report.get("e_qcstatem_qcpolicy_valid").unwrap().status,
        Status::Pass
    );
    assert!(!report.summary().errors_present());
    assert!(!report.summary().fatals_present());
}

#[test]
fn test_missing_sscd_flips_only_qscd_lint() {
    let with = subscriber()
        .extension(qc_ext(qscd_payload(true)))
        .policy(oid::ETSI_QCP_NATURAL_QSCD)
        .build();
    let without = subscriber()
        .extension(qc_ext(qscd_payload(false)))
        .policy(oid::ETSI_QCP_NATURAL_QSCD)
        .build();

    let registry = global_registry().unwrap();
    let before = lint_certificate(registry, &with);
    let after = lint_certificate(registry, &without);

    for (name, result) in after.iter() {
        if name == "e_qcstatem_qscd_valid" {
            assert_eq!(result.status, Status::Error);
            assert_eq!(
                result.details.as_deref(),
                Some("missing the qcStatement for QSCD")
            );
        } else {
            assert_eq!(result, before.get(name).unwrap(), "{} changed", name);
        }
    }
}

#[test]
fn test_qscd_lint_needs_qscd_policy() {
    let cert = subscriber()
        .extension(qc_ext(qscd_payload(false)))
        .policy(oid::ETSI_QCP_NATURAL)
        .build();
    assert_eq!(status(&cert, "e_qcstatem_qscd_valid"), Status::NotApplicable);

    let cert = subscriber()
        .extension(qc_ext(qscd_payload(false)))
        .policy(oid::ETSI_QCP_LEGAL_QSCD)
        .build();
    assert_eq!(status(&cert, "e_qcstatem_qscd_valid"), Status::Error);
}

#[test]
fn test_qcpolicy_missing() {
    let cert = subscriber()
        .extension(qc_ext(qscd_payload(true)))
        .build();
    assert_eq!(status(&cert, "e_qcstatem_qcpolicy_valid"), Status::Error);
    assert_eq!(
        details(&cert, "e_qcstatem_qcpolicy_valid").as_deref(),
        Some("missing mandatory policy identifier")
    );
}

#[test]
fn test_qcpolicy_disjoint() {
    let cert = subscriber()
        .extension(qc_ext(qscd_payload(true)))
        .policies([
            ObjectIdentifier::new_unwrap("2.23.140.1.2.1"),
            ObjectIdentifier::new_unwrap("0.4.0.194112.1.9"),
        ])
        .build();
    assert_eq!(status(&cert, "e_qcstatem_qcpolicy_valid"), Status::Error);
}

#[test]
fn test_qcpolicy_any_of_five() {
    for policy in oid::ETSI_QC_POLICIES {
        let cert = subscriber()
            .extension(qc_ext(qscd_payload(true)))
            .policies([ObjectIdentifier::new_unwrap("2.23.140.1.2.1"), policy])
            .build();
        assert_eq!(
            status(&cert, "e_qcstatem_qcpolicy_valid"),
            Status::Pass,
            "{}",
            policy
        );
    }
}

// ---------------------------------------------------------------------------
// Applicability
// ---------------------------------------------------------------------------

#[test]
fn test_ca_certificate_not_applicable() {
    let cert = Certificate::builder(ISSUED)
        .ca(true)
        .extension(qc_ext(qscd_payload(false)))
        .build();
    for name in [
        "e_qcstatem_qcpolicy_valid",
        "e_qcstatem_qscd_valid",
        "e_qcstatem_mandatory_etsi_statems",
        "e_qcstatem_etsi_present_qcs_critical",
    ] {
        assert_eq!(status(&cert, name), Status::NotApplicable, "{}", name);
    }
}

#[test]
fn test_only_pkix_statements_not_applicable() {
    let payload = statements(&[statement(&oid::QCS_PKIX_SYNTAX_V2, None)]);
    let cert = subscriber().extension(qc_ext(payload)).build();
    assert_eq!(status(&cert, "e_qcstatem_qcpolicy_valid"), Status::NotApplicable);
    assert_eq!(status(&cert, "e_qcstatem_malformed"), Status::Pass);
}

#[test]
fn test_etsi_lints_silent_on_malformed_payload() {
    let cert = subscriber()
        .extension(qc_ext(vec![0x30, 0x05, 0x06, 0x03]))
        .build();
    assert_eq!(status(&cert, "e_qcstatem_qcpolicy_valid"), Status::NotApplicable);
    assert_eq!(status(&cert, "e_qcstatem_qscd_valid"), Status::NotApplicable);
    assert_eq!(status(&cert, "e_qcstatem_malformed"), Status::Error);
    assert!(details(&cert, "e_qcstatem_malformed")
        .unwrap()
        .starts_with("malformed qcStatements"));
}

#[test]
fn test_first_qc_extension_wins() {
    // A malformed duplicate after a good extension is not consulted.
    let cert = subscriber()
        .extension(qc_ext(qscd_payload(true)))
        .extension(qc_ext(vec![0xff]))
        .policy(oid::ETSI_QCP_NATURAL_QSCD)
        .build();
    assert_eq!(status(&cert, "e_qcstatem_qscd_valid"), Status::Pass);
    assert_eq!(status(&cert, "e_qcstatem_malformed"), Status::Pass);
    assert_eq!(status(&cert, "e_ext_duplicate_extension"), Status::Error);
}

// ---------------------------------------------------------------------------
// Other ETSI requirements
// ---------------------------------------------------------------------------

#[test]
fn test_critical_qc_extension() {
    let cert = subscriber()
        .extension(Extension::new(
            oid::EXT_QC_STATEMENTS,
            true,
            qscd_payload(true),
        ))
        .build();
    assert_eq!(
        status(&cert, "e_qcstatem_etsi_present_qcs_critical"),
        Status::Error
    );
    assert_eq!(
        status(&qualified_subscriber(), "e_qcstatem_etsi_present_qcs_critical"),
        Status::Pass
    );
}

#[test]
fn test_mandatory_statements() {
    let payload = statements(&[statement(&oid::ETSI_QCS_QC_SSCD, None)]);
    let cert = subscriber().extension(qc_ext(payload)).build();
    assert_eq!(
        status(&cert, "e_qcstatem_mandatory_etsi_statems"),
        Status::Error
    );
    assert_eq!(
        status(&qualified_subscriber(), "e_qcstatem_mandatory_etsi_statems"),
        Status::Pass
    );
}

// ---------------------------------------------------------------------------
// RFC 5280 and CABF lints
// ---------------------------------------------------------------------------

#[test]
fn test_duplicate_extension() {
    let cert = subscriber().extension(san_ext()).build();
    assert_eq!(status(&cert, "e_ext_duplicate_extension"), Status::Error);
    assert!(details(&cert, "e_ext_duplicate_extension")
        .unwrap()
        .contains("2.5.29.17"));
    assert_eq!(
        status(&subscriber().build(), "e_ext_duplicate_extension"),
        Status::Pass
    );
}

#[test]
fn test_name_constraints_in_subscriber() {
    let nc = Extension::new(oid::EXT_NAME_CONSTRAINTS, true, seq(&[]));
    let cert = subscriber().extension(nc.clone()).build();
    assert_eq!(
        status(&cert, "e_ext_name_constraints_not_in_subscriber"),
        Status::Error
    );
    let ca = Certificate::builder(ISSUED).ca(true).extension(nc).build();
    assert_eq!(
        status(&ca, "e_ext_name_constraints_not_in_subscriber"),
        Status::NotApplicable
    );
}

#[test]
fn test_san_missing() {
    let cert = Certificate::builder(ISSUED).build();
    assert_eq!(status(&cert, "e_ext_san_missing"), Status::Error);
    assert_eq!(status(&subscriber().build(), "e_ext_san_missing"), Status::Pass);
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

#[test]
fn test_payload_predicates() {
    let etsi = qscd_payload(false);
    let pkix = statements(&[statement(&oid::QCS_PKIX_SYNTAX_V1, None)]);
    let empty = statements(&[]);

    assert!(predicates::has_any_qualified_statement(&etsi));
    assert!(predicates::has_any_qualified_statement(&pkix));
    assert!(!predicates::has_any_qualified_statement(&empty));
    assert!(!predicates::has_any_qualified_statement(&[0x30]));

    assert!(predicates::is_any_etsi_qc_statement_present(&etsi));
    assert!(!predicates::is_any_etsi_qc_statement_present(&pkix));
    assert!(!predicates::is_any_etsi_qc_statement_present(&[0x04, 0x00]));
}

#[test]
fn test_certificate_predicates() {
    let cert = qualified_subscriber();
    assert!(predicates::is_subscriber_cert(&cert));
    assert!(!predicates::is_ca_cert(&cert));
    assert!(predicates::is_ext_in_cert(&cert, &oid::EXT_QC_STATEMENTS));
    assert!(!predicates::is_ext_in_cert(&cert, &oid::EXT_NAME_CONSTRAINTS));
    assert!(predicates::has_policy(&cert, &oid::ETSI_QCP_NATURAL_QSCD));
    assert!(predicates::has_etsi_qc_statements(&cert));
    assert!(predicates::has_qc_statement(&cert, &oid::ETSI_QCS_QC_TYPE));
    assert!(!predicates::has_qc_statement(&cert, &oid::ETSI_QCS_QC_PDS));
    assert_eq!(cert.qc_statements().unwrap().as_ref().unwrap().len(), 3);
}
