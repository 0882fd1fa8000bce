//! BRs: 7.1.4.2.1
//!
//! > Subject Alternative Name extension: This extension MUST contain at least
//! > one entry.

use crate::fields::Certificate;
use crate::lint::{Lint, LintCheck, LintResult, LintSource};
use crate::lints::CABF_BR_DATE;
use crate::oid;
use crate::predicates::{is_ext_in_cert, is_subscriber_cert};

struct ExtSanMissing;

impl LintCheck for ExtSanMissing {
    fn check_applies(&self, cert: &Certificate) -> bool {
        is_subscriber_cert(cert)
    }

    fn execute(&self, cert: &Certificate) -> LintResult {
        if is_ext_in_cert(cert, &oid::EXT_SUBJECT_ALT_NAME) {
            LintResult::pass()
        } else {
            LintResult::error("subscriber certificate has no subjectAltName extension")
        }
    }
}

pub(crate) fn lint() -> Lint {
    Lint {
        name: "e_ext_san_missing".into(),
        description: "Subscriber certificates MUST contain the Subject Alternate Name extension"
            .into(),
        citation: "BRs: 7.1.4.2.1".into(),
        source: LintSource::CabfBr,
        effective_date: Some(CABF_BR_DATE),
        ineffective_date: None,
        check: Box::new(ExtSanMissing),
    }
}
