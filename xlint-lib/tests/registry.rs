#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::panic,
    clippy::indexing_slicing
)]
//! Registry population, lookups, and filtering.

use time::macros::datetime;
use xlint_lib::*;

struct AlwaysPass;

impl LintCheck for AlwaysPass {
    fn check_applies(&self, _cert: &Certificate) -> bool {
        true
    }

    fn execute(&self, _cert: &Certificate) -> LintResult {
        LintResult::pass()
    }
}

fn lint(name: &str, source: LintSource) -> Lint {
    Lint {
        name: name.to_string(),
        description: format!("{} description", name),
        citation: "test".to_string(),
        source,
        effective_date: None,
        ineffective_date: None,
        check: Box::new(AlwaysPass),
    }
}

fn sample_registry() -> Registry {
    let mut registry = Registry::new();
    registry.register(lint("w_beta", LintSource::CabfBr)).unwrap();
    registry.register(lint("e_alpha", LintSource::Rfc5280)).unwrap();
    registry.register(lint("e_gamma", LintSource::EtsiEsi)).unwrap();
    registry
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

#[test]
fn test_register_and_lookup() {
    let registry = sample_registry();
    assert_eq!(registry.len(), 3);
    assert!(!registry.is_empty());
    assert_eq!(registry.by_name("e_alpha").unwrap().source, LintSource::Rfc5280);
    assert!(registry.by_name("e_missing").is_none());
}

#[test]
fn test_duplicate_name_rejected() {
    let mut registry = sample_registry();
    let err = registry
        .register(lint("e_alpha", LintSource::Community))
        .unwrap_err();
    assert_eq!(err, RegistryError::DuplicateName("e_alpha".into()));
    // The original registration is untouched.
    assert_eq!(registry.by_name("e_alpha").unwrap().source, LintSource::Rfc5280);
    assert_eq!(registry.len(), 3);
}

#[test]
fn test_empty_name_rejected() {
    let mut registry = Registry::new();
    assert_eq!(
        registry.register(lint("", LintSource::Community)),
        Err(RegistryError::EmptyName)
    );
}

#[test]
fn test_inverted_dates_rejected() {
    let mut registry = Registry::new();
    let mut bad = lint("e_window", LintSource::Community);
    bad.effective_date = Some(datetime!(2020-01-01 0:00 UTC));
    bad.ineffective_date = Some(datetime!(2020-01-01 0:00 UTC));
    assert_eq!(
        registry.register(bad),
        Err(RegistryError::InvalidDates("e_window".into()))
    );
}

#[test]
fn test_iteration_is_lexical() {
    let registry = sample_registry();
    assert_eq!(registry.names(), vec!["e_alpha", "e_gamma", "w_beta"]);
    let names: Vec<_> = registry.all().iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, registry.names());
}

#[test]
fn test_by_source_and_sources() {
    let registry = sample_registry();
    let etsi = registry.by_source(LintSource::EtsiEsi);
    assert_eq!(etsi.len(), 1);
    assert_eq!(etsi[0].name, "e_gamma");
    assert!(registry.by_source(LintSource::Rfc5891).is_empty());
    assert_eq!(
        registry.sources().into_iter().collect::<Vec<_>>(),
        vec![LintSource::Rfc5280, LintSource::CabfBr, LintSource::EtsiEsi]
    );
}

#[test]
fn test_effective_for() {
    let mut registry = Registry::new();
    let mut old = lint("e_old", LintSource::Community);
    old.ineffective_date = Some(datetime!(2015-01-01 0:00 UTC));
    let mut new = lint("e_new", LintSource::Community);
    new.effective_date = Some(datetime!(2015-01-01 0:00 UTC));
    registry.register(old).unwrap();
    registry.register(new).unwrap();
    registry.register(lint("e_always", LintSource::Community)).unwrap();

    let names = |date| {
        registry
            .effective_for(date)
            .iter()
            .map(|l| l.name.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(names(datetime!(2010-01-01 0:00 UTC)), vec!["e_always", "e_old"]);
    assert_eq!(names(datetime!(2015-01-01 0:00 UTC)), vec!["e_always", "e_new"]);
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

#[test]
fn test_filter_include_names() {
    let registry = sample_registry();
    let filtered = registry
        .filter(&FilterOptions {
            include_names: vec!["w_beta".into()],
            ..Default::default()
        })
        .unwrap();
    assert_eq!(filtered.names(), vec!["w_beta"]);
    // The source registry is unchanged.
    assert_eq!(registry.len(), 3);
}

#[test]
fn test_filter_sources_then_exclude() {
    let registry = sample_registry();
    let filtered = registry
        .filter(&FilterOptions {
            include_sources: vec![LintSource::Rfc5280, LintSource::EtsiEsi],
            exclude_names: vec!["e_gamma".into()],
            ..Default::default()
        })
        .unwrap();
    assert_eq!(filtered.names(), vec!["e_alpha"]);
}

#[test]
fn test_filter_exclude_sources() {
    let registry = sample_registry();
    let filtered = registry
        .filter(&FilterOptions {
            exclude_sources: vec![LintSource::CabfBr],
            ..Default::default()
        })
        .unwrap();
    assert_eq!(filtered.names(), vec!["e_alpha", "e_gamma"]);
}

#[test]
fn test_filter_unknown_name() {
    let registry = sample_registry();
    let err = registry
        .filter(&FilterOptions {
            exclude_names: vec!["e_nope".into()],
            ..Default::default()
        })
        .unwrap_err();
    assert_eq!(err, RegistryError::UnknownLint("e_nope".into()));
}

#[test]
fn test_filter_empty_selection() {
    let registry = sample_registry();
    let err = registry
        .filter(&FilterOptions {
            include_sources: vec![LintSource::AppleRootStorePolicy],
            ..Default::default()
        })
        .unwrap_err();
    assert_eq!(err, RegistryError::EmptySelection);
}

#[test]
fn test_filter_options_is_empty() {
    assert!(FilterOptions::default().is_empty());
    assert!(!FilterOptions {
        exclude_sources: vec![LintSource::Unknown],
        ..Default::default()
    }
    .is_empty());
}

// ---------------------------------------------------------------------------
// Sources
// ---------------------------------------------------------------------------

#[test]
fn test_source_parse() {
    assert_eq!("etsi_esi".parse::<LintSource>().unwrap(), LintSource::EtsiEsi);
    assert_eq!("CABF_BR".parse::<LintSource>().unwrap(), LintSource::CabfBr);
    assert_eq!(
        "x9".parse::<LintSource>(),
        Err(RegistryError::UnknownSource("x9".into()))
    );
    for source in LintSource::ALL {
        assert_eq!(source.as_str().parse::<LintSource>().unwrap(), source);
    }
}

#[test]
fn test_source_serializes_as_str() {
    for source in LintSource::ALL {
        assert_eq!(
            serde_json::to_value(source).unwrap(),
            serde_json::Value::String(source.as_str().to_string())
        );
    }
}

// ---------------------------------------------------------------------------
// Built-in lints
// ---------------------------------------------------------------------------

#[test]
fn test_global_registry_contents() {
    let registry = global_registry().unwrap();
    assert_eq!(
        registry.names(),
        vec![
            "e_ext_duplicate_extension",
            "e_ext_name_constraints_not_in_subscriber",
            "e_ext_san_missing",
            "e_qcstatem_etsi_present_qcs_critical",
            "e_qcstatem_malformed",
            "e_qcstatem_mandatory_etsi_statems",
            "e_qcstatem_qcpolicy_valid",
            "e_qcstatem_qscd_valid",
        ]
    );
    for lint in registry.by_source(LintSource::EtsiEsi) {
        assert_eq!(lint.effective_date, Some(ETSI_EN_319_411_2_V2_2_2_DATE));
    }
    assert!(std::ptr::eq(registry, global_registry().unwrap()));
}

#[test]
fn test_builtins_cannot_register_twice() {
    let mut registry = builtin_registry().unwrap();
    assert!(matches!(
        register_builtin_lints(&mut registry),
        Err(RegistryError::DuplicateName(_))
    ));
}

#[test]
fn test_lint_info() {
    let registry = global_registry().unwrap();
    let info = registry.by_name("e_qcstatem_qscd_valid").unwrap().info();
    assert_eq!(info.source, LintSource::EtsiEsi);
    assert_eq!(info.effective_date.as_deref(), Some("2018-04-01T00:00:00Z"));
    assert!(info.ineffective_date.is_none());

    let json = serde_json::to_value(&info).unwrap();
    assert_eq!(json["name"], "e_qcstatem_qscd_valid");
    assert_eq!(json["source"], "etsi_esi");
    assert!(json.get("ineffective_date").is_none());
}
