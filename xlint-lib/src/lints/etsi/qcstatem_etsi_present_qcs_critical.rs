//! EN 319 412-5 v2.2.1 (2017-11), Section 4.1
//!
//! > This extension shall not be marked critical.

use super::is_etsi_qualified_subscriber;
use crate::fields::Certificate;
use crate::lint::{Lint, LintCheck, LintResult, LintSource};
use crate::lints::ETSI_EN_319_411_2_V2_2_2_DATE;
use crate::oid;
use crate::predicates::get_ext_from_cert;

struct QcStatemCritical;

impl LintCheck for QcStatemCritical {
    fn check_applies(&self, cert: &Certificate) -> bool {
        is_etsi_qualified_subscriber(cert)
    }

    fn execute(&self, cert: &Certificate) -> LintResult {
        match get_ext_from_cert(cert, &oid::EXT_QC_STATEMENTS) {
            Some(ext) if ext.critical => {
                LintResult::error("ETSI QC statements extension is marked critical")
            }
            _ => LintResult::pass(),
        }
    }
}

pub(crate) fn lint() -> Lint {
    Lint {
        name: "e_qcstatem_etsi_present_qcs_critical".into(),
        description: "Checks that a QC statements extension containing ETSI statements \
                      is not marked critical"
            .into(),
        citation: "ETSI EN 319 412-5 V2.2.1 (2017-11) / Section 4.1".into(),
        source: LintSource::EtsiEsi,
        effective_date: Some(ETSI_EN_319_411_2_V2_2_2_DATE),
        ineffective_date: None,
        check: Box::new(QcStatemCritical),
    }
}
