#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(mut manifest) = serde_json::from_slice::<serde_json::Value>(data) {
        // Patching arbitrary JSON must fail cleanly, never panic
        let _ = ngharness::domain::services::patch_manifest(
            &mut manifest,
            std::path::Path::new("angular.json"),
        );
    }
});
