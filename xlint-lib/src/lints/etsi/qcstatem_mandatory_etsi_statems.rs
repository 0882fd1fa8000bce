//! EN 319 412-5 v2.2.1 (2017-11), Section 5
//!
//! > EU qualified certificates shall include QCStatements in accordance with
//! > table 2: esi4-qcStatement-1 (QcCompliance) is mandatory.

use super::is_etsi_qualified_subscriber;
use crate::fields::Certificate;
use crate::lint::{Lint, LintCheck, LintResult, LintSource};
use crate::lints::ETSI_EN_319_411_2_V2_2_2_DATE;
use crate::oid;
use crate::predicates::has_qc_statement;

struct QcStatemMandatoryStatements;

impl LintCheck for QcStatemMandatoryStatements {
    fn check_applies(&self, cert: &Certificate) -> bool {
        is_etsi_qualified_subscriber(cert)
    }

    fn execute(&self, cert: &Certificate) -> LintResult {
        if has_qc_statement(cert, &oid::ETSI_QCS_QC_COMPLIANCE) {
            LintResult::pass()
        } else {
            LintResult::error("missing mandatory ETSI statement QcCompliance")
        }
    }
}

pub(crate) fn lint() -> Lint {
    Lint {
        name: "e_qcstatem_mandatory_etsi_statems".into(),
        description: "Checks that a QC statements extension with ETSI statements \
                      includes the mandatory QcCompliance statement"
            .into(),
        citation: "ETSI EN 319 412-5 V2.2.1 (2017-11) / Section 5".into(),
        source: LintSource::EtsiEsi,
        effective_date: Some(ETSI_EN_319_411_2_V2_2_2_DATE),
        ineffective_date: None,
        check: Box::new(QcStatemMandatoryStatements),
    }
}
