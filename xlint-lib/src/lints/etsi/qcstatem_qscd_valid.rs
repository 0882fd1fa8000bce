//! EN 319 411-2 v2.2.2 (2018-04): GEN-6.6.1-03
//!
//! Scope: Subscriber
//!
//! > [QCP-n-qscd] and [QCP-l-qscd]: The certificate shall include Statement
//! > for QSCD (esi4-qcStatement-4) defined in ETSI EN 319 412-5

use super::is_etsi_qualified_subscriber;
use crate::fields::Certificate;
use crate::lint::{Lint, LintCheck, LintResult, LintSource};
use crate::lints::ETSI_EN_319_411_2_V2_2_2_DATE;
use crate::oid;
use crate::predicates::{has_any_policy, has_qc_statement};

struct QcStatemQscdValid;

impl LintCheck for QcStatemQscdValid {
    fn check_applies(&self, cert: &Certificate) -> bool {
        is_etsi_qualified_subscriber(cert)
            && has_any_policy(
                cert,
                &[oid::ETSI_QCP_NATURAL_QSCD, oid::ETSI_QCP_LEGAL_QSCD],
            )
    }

    fn execute(&self, cert: &Certificate) -> LintResult {
        if has_qc_statement(cert, &oid::ETSI_QCS_QC_SSCD) {
            LintResult::pass()
        } else {
            LintResult::error("missing the qcStatement for QSCD")
        }
    }
}

pub(crate) fn lint() -> Lint {
    Lint {
        name: "e_qcstatem_qscd_valid".into(),
        description: "[QCP-n-qscd] and [QCP-l-qscd]: The certificate shall include the \
                      qcStatement for QSCD (esi4-qcStatement-4) defined in ETSI EN 319 412-5"
            .into(),
        citation: "ETSI EN 319 411-2 V2.2.2 (2018-04) / Section GEN-6.6.1-03".into(),
        source: LintSource::EtsiEsi,
        effective_date: Some(ETSI_EN_319_411_2_V2_2_2_DATE),
        ineffective_date: None,
        check: Box::new(QcStatemQscdValid),
    }
}
