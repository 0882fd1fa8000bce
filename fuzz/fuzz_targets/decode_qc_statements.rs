#![no_main]

use libfuzzer_sys::fuzz_target;
use xlint_lib::predicates;
use xlint_lib::qc;

fuzz_target!(|data: &[u8]| {
    // The decoder must never panic, regardless of input.
    let first = qc::decode(data);

    // Decoding is deterministic.
    assert_eq!(first, qc::decode(data), "decode is not deterministic");

    if let Ok(statements) = &first {
        for statement in statements {
            assert!(qc::has(statements, &statement.id));
            if let Some(qualifier) = &statement.qualifier {
                assert!(qualifier.len() <= data.len());
            }
        }
    }

    let _ = predicates::has_any_qualified_statement(data);
    let _ = predicates::is_any_etsi_qc_statement_present(data);
});
