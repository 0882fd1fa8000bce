//! Lint execution with per-lint fault isolation.

use super::{Lint, LintResult, Registry, Report, Status};
use crate::fields::Certificate;
use rayon::prelude::*;
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Run one lint against one certificate.
///
/// 1. Certificates outside the lint's effective window yield `NotEffective`
///    without calling into the lint.
/// 2. `check_applies == false` yields `NotApplicable`.
/// 3. Otherwise the result of `execute`.
///
/// Steps 2 and 3 run inside a panic boundary: a lint that panics produces a
/// `Fatal` result naming the lint instead of unwinding into the caller.
pub fn execute_lint(lint: &Lint, cert: &Certificate) -> LintResult {
    if !lint.check_effective(cert) {
        return LintResult::not_effective();
    }

    let outcome = catch_unwind(AssertUnwindSafe(|| {
        if !lint.check.check_applies(cert) {
            return LintResult::not_applicable();
        }
        lint.check.execute(cert)
    }));

    match outcome {
        Ok(result) if result.status == Status::Reserved => {
            tracing::warn!(lint = %lint.name, "lint returned reserved status");
            LintResult::fatal(format!("lint {} returned reserved status", lint.name))
        }
        Ok(result) => result,
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            tracing::warn!(lint = %lint.name, panic = %message, "lint faulted");
            LintResult::fatal(format!("lint {} faulted: {}", lint.name, message))
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Run every lint in `registry` against `cert` and aggregate the results.
pub fn lint_certificate(registry: &Registry, cert: &Certificate) -> Report {
    let results = registry.all().into_iter().map(|lint| {
        let result = execute_lint(lint, cert);
        tracing::debug!(lint = %lint.name, status = %result.status, "lint executed");
        (lint.name.clone(), result)
    });
    Report::aggregate(results)
}

/// Lint many certificates in parallel. Reports are returned in input order.
pub fn lint_certificates(registry: &Registry, certs: &[Certificate]) -> Vec<Report> {
    certs
        .par_iter()
        .map(|cert| lint_certificate(registry, cert))
        .collect()
}
