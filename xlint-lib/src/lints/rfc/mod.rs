//! RFC 5280 lints.

pub(crate) mod ext_duplicate_extension;
pub(crate) mod ext_name_constraints_not_in_subscriber;
