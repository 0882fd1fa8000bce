//! Lint registry: write-once population, read-only lookups afterwards.

use super::{Lint, LintSource};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use time::OffsetDateTime;

/// Configuration errors raised while populating or filtering a registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("duplicate lint name: {0}")]
    DuplicateName(String),

    #[error("lint name must not be empty")]
    EmptyName,

    #[error("lint {0}: effective date must precede ineffective date")]
    InvalidDates(String),

    #[error("unknown lint: {0}")]
    UnknownLint(String),

    #[error("unknown lint source: {0}")]
    UnknownSource(String),

    #[error("filter selects no lints")]
    EmptySelection,
}

/// Lint selection applied by [`Registry::filter`].
///
/// Empty include lists mean "everything"; excludes are applied after includes.
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    pub include_names: Vec<String>,
    pub exclude_names: Vec<String>,
    pub include_sources: Vec<LintSource>,
    pub exclude_sources: Vec<LintSource>,
}

impl FilterOptions {
    pub fn is_empty(&self) -> bool {
        self.include_names.is_empty()
            && self.exclude_names.is_empty()
            && self.include_sources.is_empty()
            && self.exclude_sources.is_empty()
    }
}

/// Set of lints keyed by unique name.
///
/// Iteration order is lexical by name everywhere, so reports are reproducible
/// across processes. Descriptors are shared behind `Arc`, which makes
/// [`Registry::filter`] cheap and lets many workers read one registry.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    lints: BTreeMap<String, Arc<Lint>>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a lint. Fails if the name is empty, already taken, or its
    /// effective window is empty.
    pub fn register(&mut self, lint: Lint) -> Result<(), RegistryError> {
        if lint.name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if let (Some(from), Some(until)) = (lint.effective_date, lint.ineffective_date) {
            if from >= until {
                return Err(RegistryError::InvalidDates(lint.name));
            }
        }
        if self.lints.contains_key(&lint.name) {
            return Err(RegistryError::DuplicateName(lint.name));
        }
        self.lints.insert(lint.name.clone(), Arc::new(lint));
        Ok(())
    }

    /// All lints, ordered by name.
    pub fn all(&self) -> Vec<&Lint> {
        self.lints.values().map(|lint| &**lint).collect()
    }

    pub fn by_name(&self, name: &str) -> Option<&Lint> {
        self.lints.get(name).map(|lint| &**lint)
    }

    /// Lints from `source`, ordered by name.
    pub fn by_source(&self, source: LintSource) -> Vec<&Lint> {
        self.lints
            .values()
            .filter(|lint| lint.source == source)
            .map(|lint| &**lint)
            .collect()
    }

    /// Lints whose effective window contains `date`, ordered by name.
    pub fn effective_for(&self, date: OffsetDateTime) -> Vec<&Lint> {
        self.lints
            .values()
            .filter(|lint| {
                lint.effective_date.map_or(true, |from| date >= from)
                    && lint.ineffective_date.map_or(true, |until| date < until)
            })
            .map(|lint| &**lint)
            .collect()
    }

    /// Lint names in lexical order.
    pub fn names(&self) -> Vec<&str> {
        self.lints.keys().map(String::as_str).collect()
    }

    /// Distinct sources of the registered lints.
    pub fn sources(&self) -> BTreeSet<LintSource> {
        self.lints.values().map(|lint| lint.source).collect()
    }

    pub fn len(&self) -> usize {
        self.lints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lints.is_empty()
    }

    /// New registry holding the subset selected by `options`.
    ///
    /// Names in either name list must exist in this registry.
    pub fn filter(&self, options: &FilterOptions) -> Result<Registry, RegistryError> {
        for name in options.include_names.iter().chain(&options.exclude_names) {
            if !self.lints.contains_key(name) {
                return Err(RegistryError::UnknownLint(name.clone()));
            }
        }

        let lints: BTreeMap<String, Arc<Lint>> = self
            .lints
            .iter()
            .filter(|(name, lint)| {
                (options.include_names.is_empty() || options.include_names.contains(*name))
                    && !options.exclude_names.contains(*name)
                    && (options.include_sources.is_empty()
                        || options.include_sources.contains(&lint.source))
                    && !options.exclude_sources.contains(&lint.source)
            })
            .map(|(name, lint)| (name.clone(), Arc::clone(lint)))
            .collect();

        if lints.is_empty() {
            return Err(RegistryError::EmptySelection);
        }
        Ok(Registry { lints })
    }
}
