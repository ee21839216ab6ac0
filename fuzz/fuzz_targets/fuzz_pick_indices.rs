#![no_main]

use libfuzzer_sys::fuzz_target;

use ngharness::domain::value_objects::IndexSelection;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(selection) = IndexSelection::parse(input) {
            let candidates = vec![std::path::PathBuf::from("a.component.ts"); 3];
            let _ = selection.resolve(&candidates);
        }
    }
});
