//! RFC 5280 Section 4.2
//!
//! > A certificate MUST NOT include more than one instance of a particular
//! > extension.

use crate::fields::Certificate;
use crate::lint::{Lint, LintCheck, LintResult, LintSource};
use crate::lints::RFC5280_DATE;
use std::collections::HashSet;

struct ExtDuplicateExtension;

impl LintCheck for ExtDuplicateExtension {
    fn check_applies(&self, cert: &Certificate) -> bool {
        !cert.extensions().is_empty()
    }

    fn execute(&self, cert: &Certificate) -> LintResult {
        let mut seen = HashSet::new();
        for ext in cert.extensions() {
            if !seen.insert(ext.oid) {
                return LintResult::error(format!("duplicate extension {}", ext.oid));
            }
        }
        LintResult::pass()
    }
}

pub(crate) fn lint() -> Lint {
    Lint {
        name: "e_ext_duplicate_extension".into(),
        description: "A certificate MUST NOT include more than one instance of a \
                      particular extension"
            .into(),
        citation: "RFC 5280: 4.2".into(),
        source: LintSource::Rfc5280,
        effective_date: Some(RFC5280_DATE),
        ineffective_date: None,
        check: Box::new(ExtDuplicateExtension),
    }
}
