//! xlint-lib: conformance linting of X.509 certificates.
//!
//! Certificates are reduced to a small immutable model ([`Certificate`]),
//! then run through a registry of independent lints, each citing a CABF,
//! ETSI, or RFC requirement. Every lint yields one [`LintResult`]; the results
//! for one certificate form a [`Report`].
//!
//! ```no_run
//! let der = std::fs::read("cert.der")?;
//! let cert = xlint_lib::parse_cert(&der)?;
//! let registry = xlint_lib::global_registry()?;
//! let report = xlint_lib::lint_certificate(registry, &cert);
//! println!("{}", serde_json::to_string_pretty(&report)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod fields;
pub mod lint;
mod lints;
pub mod oid;
mod parser;
pub mod predicates;
pub mod qc;
mod util;

pub use fields::{Certificate, CertificateBuilder, DistinguishedName, Extension};
pub use lint::{
    execute_lint, lint_certificate, lint_certificates, FilterOptions, Lint, LintCheck, LintInfo,
    LintResult, LintSource, Registry, RegistryError, Report, Status, Summary,
};
pub use lints::{
    builtin_registry, global_registry, register_builtin_lints, CABF_BR_DATE,
    ETSI_EN_319_411_2_V2_2_2_DATE, RFC5280_DATE,
};
pub use parser::{parse_cert, parse_der, parse_pem, parse_pem_bundle};
pub use qc::{DecodeError, QualifiedStatement};

/// Errors returned by xlint-lib.
#[derive(Debug, thiserror::Error)]
pub enum XlintError {
    #[error("Failed to parse certificate: {0}")]
    ParseError(String),

    #[error("Invalid PEM format: {0}")]
    PemError(String),

    #[error("Invalid DER format: {0}")]
    DerError(String),

    #[error("Lint configuration error: {0}")]
    Registry(#[from] RegistryError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialize a report as pretty-printed JSON.
pub fn to_json(report: &Report) -> Result<String, XlintError> {
    Ok(serde_json::to_string_pretty(report)?)
}
