//! Lint descriptors, results, and the plugin contract.
//!
//! A lint is a [`Lint`] descriptor (name, citation, source, effective dates)
//! wrapping a [`LintCheck`] implementation. Descriptors are collected in a
//! [`Registry`], executed per certificate by [`lint_certificate`], and the
//! results merged into a [`Report`].

mod engine;
mod registry;
mod report;

pub use engine::{execute_lint, lint_certificate, lint_certificates};
pub use registry::{FilterOptions, Registry, RegistryError};
pub use report::{Report, Summary};

use crate::fields::Certificate;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Outcome of one lint on one certificate.
///
/// Variants are ordered by severity, so the worst of several statuses is
/// their maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Status {
    #[serde(rename = "reserved")]
    Reserved,
    #[serde(rename = "NA")]
    NotApplicable,
    #[serde(rename = "NE")]
    NotEffective,
    #[serde(rename = "pass")]
    Pass,
    #[serde(rename = "info")]
    Info,
    #[serde(rename = "warn")]
    Warn,
    #[serde(rename = "error")]
    Error,
    #[serde(rename = "fatal")]
    Fatal,
}

impl Status {
    pub const ALL: [Status; 8] = [
        Status::Reserved,
        Status::NotApplicable,
        Status::NotEffective,
        Status::Pass,
        Status::Info,
        Status::Warn,
        Status::Error,
        Status::Fatal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Reserved => "reserved",
            Status::NotApplicable => "NA",
            Status::NotEffective => "NE",
            Status::Pass => "pass",
            Status::Info => "info",
            Status::Warn => "warn",
            Status::Error => "error",
            Status::Fatal => "fatal",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Status plus optional human-readable details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintResult {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl LintResult {
    pub fn new(status: Status) -> Self {
        Self {
            status,
            details: None,
        }
    }

    pub fn with_details(status: Status, details: impl Into<String>) -> Self {
        Self {
            status,
            details: Some(details.into()),
        }
    }

    pub fn pass() -> Self {
        Self::new(Status::Pass)
    }

    pub fn not_applicable() -> Self {
        Self::new(Status::NotApplicable)
    }

    pub fn not_effective() -> Self {
        Self::new(Status::NotEffective)
    }

    pub fn info(details: impl Into<String>) -> Self {
        Self::with_details(Status::Info, details)
    }

    pub fn warn(details: impl Into<String>) -> Self {
        Self::with_details(Status::Warn, details)
    }

    pub fn error(details: impl Into<String>) -> Self {
        Self::with_details(Status::Error, details)
    }

    pub fn fatal(details: impl Into<String>) -> Self {
        Self::with_details(Status::Fatal, details)
    }
}

/// Standards body a lint's requirement comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LintSource {
    Unknown,
    Rfc5280,
    Rfc5480,
    Rfc5891,
    CabfBr,
    CabfEv,
    CabfSmime,
    MozillaRootStorePolicy,
    AppleRootStorePolicy,
    Community,
    EtsiEsi,
}

impl LintSource {
    pub const ALL: [LintSource; 11] = [
        LintSource::Unknown,
        LintSource::Rfc5280,
        LintSource::Rfc5480,
        LintSource::Rfc5891,
        LintSource::CabfBr,
        LintSource::CabfEv,
        LintSource::CabfSmime,
        LintSource::MozillaRootStorePolicy,
        LintSource::AppleRootStorePolicy,
        LintSource::Community,
        LintSource::EtsiEsi,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LintSource::Unknown => "unknown",
            LintSource::Rfc5280 => "rfc5280",
            LintSource::Rfc5480 => "rfc5480",
            LintSource::Rfc5891 => "rfc5891",
            LintSource::CabfBr => "cabf_br",
            LintSource::CabfEv => "cabf_ev",
            LintSource::CabfSmime => "cabf_smime",
            LintSource::MozillaRootStorePolicy => "mozilla_root_store_policy",
            LintSource::AppleRootStorePolicy => "apple_root_store_policy",
            LintSource::Community => "community",
            LintSource::EtsiEsi => "etsi_esi",
        }
    }
}

impl fmt::Display for LintSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for LintSource {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LintSource::ALL
            .into_iter()
            .find(|source| source.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| RegistryError::UnknownSource(s.to_string()))
    }
}

/// The logic of one lint.
///
/// Implementations must be pure functions of the certificate: no I/O, no
/// shared mutable state, and no access to other lints' results.
pub trait LintCheck: Send + Sync {
    /// Whether the lint pertains to this certificate at all.
    fn check_applies(&self, cert: &Certificate) -> bool;

    /// Evaluate the certificate. Only called when `check_applies` is true.
    fn execute(&self, cert: &Certificate) -> LintResult;
}

/// A registered lint: metadata plus its [`LintCheck`].
pub struct Lint {
    /// Unique name; the prefix conventionally encodes severity (`e_`, `w_`, `n_`).
    pub name: String,
    pub description: String,
    /// Document and section the requirement comes from.
    pub citation: String,
    pub source: LintSource,
    /// Certificates issued before this instant are not evaluated.
    pub effective_date: Option<OffsetDateTime>,
    /// Certificates issued on or after this instant are not evaluated.
    pub ineffective_date: Option<OffsetDateTime>,
    pub check: Box<dyn LintCheck>,
}

impl Lint {
    /// Whether the requirement was in force when `cert` was issued.
    pub fn check_effective(&self, cert: &Certificate) -> bool {
        let issued = cert.not_before();
        if self.effective_date.is_some_and(|date| issued < date) {
            return false;
        }
        if self.ineffective_date.is_some_and(|date| issued >= date) {
            return false;
        }
        true
    }

    /// Serializable metadata view.
    pub fn info(&self) -> LintInfo {
        let format = |date: Option<OffsetDateTime>| date.and_then(|d| d.format(&Rfc3339).ok());
        LintInfo {
            name: self.name.clone(),
            description: self.description.clone(),
            citation: self.citation.clone(),
            source: self.source,
            effective_date: format(self.effective_date),
            ineffective_date: format(self.ineffective_date),
        }
    }
}

impl fmt::Debug for Lint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lint")
            .field("name", &self.name)
            .field("source", &self.source)
            .field("effective_date", &self.effective_date)
            .field("ineffective_date", &self.ineffective_date)
            .finish_non_exhaustive()
    }
}

/// Lint metadata without the check, for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintInfo {
    pub name: String,
    pub description: String,
    pub citation: String,
    pub source: LintSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ineffective_date: Option<String>,
}
