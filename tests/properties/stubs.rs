//! Property tests for stub naming.

use std::path::PathBuf;

use proptest::prelude::*;

use ngharness::domain::services::{render_stub, stub_kind, stub_path, symbol_name, StubKind};

fn base_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9-]{0,12}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The stub symbol is the file name up to its first dot.
    #[test]
    fn property_symbol_is_first_segment(base in base_name(), is_component in any::<bool>()) {
        let suffix = if is_component { "component" } else { "service" };
        let file_name = format!("{}.{}.ts", base, suffix);

        prop_assert_eq!(symbol_name(&file_name), base.as_str());
    }

    /// PROPERTY: The stub sits next to its source with `.spec.ts` in place of `.ts`.
    #[test]
    fn property_stub_path_is_sibling(base in base_name()) {
        let source = PathBuf::from("/scaffold/src/app").join(format!("{}.service.ts", base));

        let stub = stub_path(&source);

        prop_assert_eq!(stub.parent(), source.parent());
        prop_assert_eq!(
            stub.file_name().unwrap().to_string_lossy().into_owned(),
            format!("{}.service.spec.ts", base)
        );
    }

    /// PROPERTY: A rendered stub names its symbol in `describe` and imports the sibling module.
    #[test]
    fn property_rendered_stub_references_symbol(base in base_name()) {
        let file_name = format!("{}.component.ts", base);
        let kind = stub_kind(&file_name).unwrap();
        prop_assert_eq!(kind, StubKind::Component);

        let stub = render_stub(kind, symbol_name(&file_name), &format!("{}.component", base));

        let describe = format!("describe('{}'", base);
        let import = format!("from './{}.component';", base);
        prop_assert!(stub.contains(&describe));
        prop_assert!(stub.contains(&import));
    }
}
