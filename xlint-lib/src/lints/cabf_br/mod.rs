//! CA/Browser Forum Baseline Requirements lints.

pub(crate) mod ext_san_missing;
