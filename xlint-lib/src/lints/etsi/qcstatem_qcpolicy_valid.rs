//! EN 319 411-2 v2.2.2 (2018-04): GEN-6.6.1-05
//!
//! Scope: Subscriber
//!
//! > The certificate shall include at least one of the following policy identifiers:
//! > - [QCP-n]: 0.4.0.194112.1.0
//! > - [QCP-l]: 0.4.0.194112.1.1
//! > - [QCP-n-qscd]: 0.4.0.194112.1.2
//! > - [QCP-l-qscd]: 0.4.0.194112.1.3
//! > - [QCP-w]: 0.4.0.194112.1.4

use super::is_etsi_qualified_subscriber;
use crate::fields::Certificate;
use crate::lint::{Lint, LintCheck, LintResult, LintSource};
use crate::lints::ETSI_EN_319_411_2_V2_2_2_DATE;
use crate::oid;
use crate::predicates::has_any_policy;

struct QcStatemQcPolicyValid;

impl LintCheck for QcStatemQcPolicyValid {
    fn check_applies(&self, cert: &Certificate) -> bool {
        is_etsi_qualified_subscriber(cert)
    }

    fn execute(&self, cert: &Certificate) -> LintResult {
        if has_any_policy(cert, &oid::ETSI_QC_POLICIES) {
            LintResult::pass()
        } else {
            LintResult::error("missing mandatory policy identifier")
        }
    }
}

pub(crate) fn lint() -> Lint {
    Lint {
        name: "e_qcstatem_qcpolicy_valid".into(),
        description: "The certificate shall include at least one of [QCP-n, QCP-l, \
                      QCP-n-qscd, QCP-l-qscd, QCP-w] policy identifiers"
            .into(),
        citation: "ETSI EN 319 411-2 V2.2.2 (2018-04) / Section GEN-6.6.1-05".into(),
        source: LintSource::EtsiEsi,
        effective_date: Some(ETSI_EN_319_411_2_V2_2_2_DATE),
        ineffective_date: None,
        check: Box::new(QcStatemQcPolicyValid),
    }
}
