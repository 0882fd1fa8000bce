#![no_main]

use libfuzzer_sys::fuzz_target;
use xlint_lib::{global_registry, lint_certificate, parse_cert, Status};

fuzz_target!(|data: &[u8]| {
    // Parsing must never panic; a certificate that parses must lint without
    // any lint faulting.
    if let Ok(cert) = parse_cert(data) {
        if let Ok(registry) = global_registry() {
            let report = lint_certificate(registry, &cert);
            assert_eq!(report.len(), registry.len());
            assert_eq!(report.summary().count(Status::Fatal), 0, "{:?}", report);
        }
    }
});
