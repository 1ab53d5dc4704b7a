#![no_main]

use clusterconv_core::dispatch::{convert_document, served_versions};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Fuzz: arbitrary JSON documents against every served version. Must never panic.
    let Ok(document) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };
    for target in served_versions() {
        let _ = convert_document(document.clone(), target);
    }
});
