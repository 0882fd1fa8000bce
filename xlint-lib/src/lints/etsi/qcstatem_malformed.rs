//! RFC 3739 Section 3.2.6 / EN 319 412-5 Section 4
//!
//! The qcStatements extension must decode as a SEQUENCE OF QCStatement.
//! Other ETSI lints treat an undecodable payload as "no statements" and stay
//! silent; this one reports it.

use crate::fields::Certificate;
use crate::lint::{Lint, LintCheck, LintResult, LintSource};
use crate::lints::ETSI_EN_319_411_2_V2_2_2_DATE;
use crate::oid;
use crate::predicates::is_ext_in_cert;

struct QcStatemMalformed;

impl LintCheck for QcStatemMalformed {
    fn check_applies(&self, cert: &Certificate) -> bool {
        is_ext_in_cert(cert, &oid::EXT_QC_STATEMENTS)
    }

    fn execute(&self, cert: &Certificate) -> LintResult {
        match cert.qc_statements() {
            Some(Err(e)) => LintResult::error(format!("malformed qcStatements: {}", e)),
            _ => LintResult::pass(),
        }
    }
}

pub(crate) fn lint() -> Lint {
    Lint {
        name: "e_qcstatem_malformed".into(),
        description: "The QC statements extension must be a well-formed SEQUENCE OF QCStatement"
            .into(),
        citation: "RFC 3739 Section 3.2.6 / ETSI EN 319 412-5 Section 4".into(),
        source: LintSource::EtsiEsi,
        effective_date: Some(ETSI_EN_319_411_2_V2_2_2_DATE),
        ineffective_date: None,
        check: Box::new(QcStatemMalformed),
    }
}
