//! RFC 5280 Section 4.2.1.10
//!
//! > The name constraints extension, which MUST be used only in a CA
//! > certificate, indicates a name space within which all subject names in
//! > subsequent certificates in a certification path MUST be located.

use crate::fields::Certificate;
use crate::lint::{Lint, LintCheck, LintResult, LintSource};
use crate::lints::RFC5280_DATE;
use crate::oid;
use crate::predicates::{is_ext_in_cert, is_subscriber_cert};

struct NameConstraintsNotInSubscriber;

impl LintCheck for NameConstraintsNotInSubscriber {
    fn check_applies(&self, cert: &Certificate) -> bool {
        is_subscriber_cert(cert)
    }

    fn execute(&self, cert: &Certificate) -> LintResult {
        if is_ext_in_cert(cert, &oid::EXT_NAME_CONSTRAINTS) {
            LintResult::error("end-entity certificate contains Name Constraints extension")
        } else {
            LintResult::pass()
        }
    }
}

pub(crate) fn lint() -> Lint {
    Lint {
        name: "e_ext_name_constraints_not_in_subscriber".into(),
        description: "The name constraints extension MUST be used only in a CA certificate"
            .into(),
        citation: "RFC 5280: 4.2.1.10".into(),
        source: LintSource::Rfc5280,
        effective_date: Some(RFC5280_DATE),
        ineffective_date: None,
        check: Box::new(NameConstraintsNotInSubscriber),
    }
}
