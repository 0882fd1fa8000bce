//! Built-in lints, grouped by standards source.

mod cabf_br;
mod etsi;
mod rfc;

use crate::lint::{Registry, RegistryError};
use std::sync::OnceLock;
use time::macros::datetime;
use time::OffsetDateTime;

/// RFC 5280 publication.
pub const RFC5280_DATE: OffsetDateTime = datetime!(2008-05-01 0:00 UTC);
/// CA/Browser Forum Baseline Requirements effective date.
pub const CABF_BR_DATE: OffsetDateTime = datetime!(2012-07-01 0:00 UTC);
/// ETSI EN 319 411-2 V2.2.2 (2018-04).
pub const ETSI_EN_319_411_2_V2_2_2_DATE: OffsetDateTime = datetime!(2018-04-01 0:00 UTC);

/// Register every built-in lint into `registry`.
pub fn register_builtin_lints(registry: &mut Registry) -> Result<(), RegistryError> {
    for lint in [
        etsi::qcstatem_qcpolicy_valid::lint(),
        etsi::qcstatem_qscd_valid::lint(),
        etsi::qcstatem_etsi_present_qcs_critical::lint(),
        etsi::qcstatem_mandatory_etsi_statems::lint(),
        etsi::qcstatem_malformed::lint(),
        rfc::ext_duplicate_extension::lint(),
        rfc::ext_name_constraints_not_in_subscriber::lint(),
        cabf_br::ext_san_missing::lint(),
    ] {
        registry.register(lint)?;
    }
    Ok(())
}

/// A fresh registry holding all built-in lints.
pub fn builtin_registry() -> Result<Registry, RegistryError> {
    let mut registry = Registry::new();
    register_builtin_lints(&mut registry)?;
    Ok(registry)
}

static GLOBAL_REGISTRY: OnceLock<Result<Registry, RegistryError>> = OnceLock::new();

/// Process-wide registry of built-in lints, built on first use and read-only
/// afterwards. A configuration error is returned on every call.
pub fn global_registry() -> Result<&'static Registry, RegistryError> {
    GLOBAL_REGISTRY
        .get_or_init(builtin_registry)
        .as_ref()
        .map_err(Clone::clone)
}
