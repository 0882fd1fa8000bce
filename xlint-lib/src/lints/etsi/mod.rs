//! ETSI ESI lints (EN 319 411-2, EN 319 412-5).

pub(crate) mod qcstatem_etsi_present_qcs_critical;
pub(crate) mod qcstatem_malformed;
pub(crate) mod qcstatem_mandatory_etsi_statems;
pub(crate) mod qcstatem_qcpolicy_valid;
pub(crate) mod qcstatem_qscd_valid;

use crate::fields::Certificate;
use crate::oid;
use crate::predicates::{has_etsi_qc_statements, is_ca_cert, is_ext_in_cert};

/// Shared applicability: a subscriber certificate whose qcStatements
/// extension carries at least one ETSI statement.
pub(crate) fn is_etsi_qualified_subscriber(cert: &Certificate) -> bool {
    is_ext_in_cert(cert, &oid::EXT_QC_STATEMENTS)
        && !is_ca_cert(cert)
        && has_etsi_qc_statements(cert)
}
