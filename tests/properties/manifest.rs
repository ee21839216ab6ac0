//! Property tests for `angular.json` patching.

use std::path::Path;

use proptest::prelude::*;
use serde_json::{json, Map, Value};

use ngharness::domain::services::patch_manifest;

fn key() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-zA-Z$][a-zA-Z0-9-]{0,10}").unwrap()
}

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z ]{0,12}".prop_map(Value::from),
    ]
}

fn object() -> impl Strategy<Value = Map<String, Value>> {
    proptest::collection::btree_map(key(), leaf(), 0..6)
        .prop_map(|entries| entries.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Patching never panics on arbitrary JSON.
    #[test]
    fn property_patch_never_panics(s in "(?s).{0,256}") {
        if let Ok(mut value) = serde_json::from_str::<Value>(&s) {
            let _ = patch_manifest(&mut value, Path::new("angular.json"));
        }
    }

    /// PROPERTY: Everything except `architect.test` of the first project is untouched.
    #[test]
    fn property_patch_only_adds_test_target(
        top in object(),
        project in object(),
        architect in object(),
    ) {
        let mut project = project;
        project.insert("architect".to_string(), Value::Object(architect));
        let mut manifest = Value::Object(top);
        manifest["projects"] = json!({ "demo": Value::Object(project) });
        let original = manifest.clone();

        let name = patch_manifest(&mut manifest, Path::new("angular.json")).unwrap();

        prop_assert_eq!(name, "demo");
        let mut without_test = manifest.clone();
        without_test["projects"]["demo"]["architect"]
            .as_object_mut()
            .unwrap()
            .remove("test");
        let mut original_without_test = original;
        original_without_test["projects"]["demo"]["architect"]
            .as_object_mut()
            .unwrap()
            .remove("test");
        prop_assert_eq!(without_test, original_without_test);
        prop_assert_eq!(
            &manifest["projects"]["demo"]["architect"]["test"]["options"]["main"],
            "src/test.ts"
        );
    }
}
