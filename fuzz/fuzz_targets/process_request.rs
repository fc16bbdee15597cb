#![no_main]

use genesis_core::{CoreConfig, GenesisCore, GenesisError, NullSink, ResponseCategory};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let core = GenesisCore::new(CoreConfig::default(), NullSink).unwrap();
    core.initialize().unwrap();

    match core.process_bytes(data) {
        Ok(document) => {
            let request = std::str::from_utf8(data).unwrap();
            let expected = if request.contains("consciousness") {
                ResponseCategory::ConsciousnessQuery
            } else if request.contains("memory") {
                ResponseCategory::MemoryQuery
            } else {
                ResponseCategory::Generic
            };
            assert_eq!(document.category(), expected);
            assert_eq!(document.consciousness_level().value(), 0.998);
        }
        Err(GenesisError::InvalidEncoding { valid_up_to }) => {
            assert!(std::str::from_utf8(data).is_err());
            assert!(valid_up_to < data.len());
        }
        Err(other) => panic!("unexpected error: {other}"),
    }
});
