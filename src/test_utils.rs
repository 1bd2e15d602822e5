//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    /// Generate a valid widget name (a JavaScript identifier)
    pub fn widget_name() -> impl Strategy<Value = String> {
        "[A-Z][A-Za-z0-9_]{0,30}"
    }

    /// Generate a valid semver version string
    pub fn semver_version() -> impl Strategy<Value = String> {
        (0u32..100, 0u32..100, 0u32..100)
            .prop_map(|(major, minor, patch)| format!("{major}.{minor}.{patch}"))
    }

    /// Generate a Mendix package path (dot-separated lowercase segments)
    pub fn package_path() -> impl Strategy<Value = String> {
        prop::collection::vec("[a-z][a-z0-9]{0,10}", 1..4).prop_map(|parts| parts.join("."))
    }

    /// Generate a line of module source that may contain relative imports
    pub fn module_line() -> impl Strategy<Value = String> {
        (
            prop_oneof![
                Just("import * as $m from \"".to_string()),
                Just("export * from \"".to_string()),
                Just("const x = \"".to_string()),
            ],
            prop_oneof![
                Just("../prelude.mjs".to_string()),
                Just("../../gleam_stdlib/gleam/list.mjs".to_string()),
                Just("../gleam_stdlib/gleam/dict.mjs".to_string()),
                Just("../js_ffi/react_helpers_ffi.js".to_string()),
                "[a-z./_]{0,20}",
            ],
        )
            .prop_map(|(head, path)| format!("{head}{path}\";"))
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use crate::core::manifest::is_valid_widget_name;
    use crate::core::rewrite::RewriteTable;
    use crate::core::template::render;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_widget_name_generator(name in widget_name()) {
            prop_assert!(is_valid_widget_name(&name));
        }

        #[test]
        fn test_package_path_generator(path in package_path()) {
            prop_assert!(!path.is_empty());
            prop_assert!(!path.starts_with('.') && !path.ends_with('.'));
        }

        #[test]
        fn test_rewrite_is_per_line(lines in prop::collection::vec(module_line(), 0..10)) {
            let table = RewriteTable::nested_modules();
            let content = lines.iter().map(|l| format!("{l}\n")).collect::<String>();
            let expected = lines
                .iter()
                .map(|l| format!("{}\n", table.apply_line(l)))
                .collect::<String>();
            prop_assert_eq!(table.apply(&content), expected);
        }

        #[test]
        fn test_render_without_placeholders_is_identity(text in "[^{}]{0,200}") {
            let replacements = std::collections::BTreeMap::from([
                ("WIDGET_NAME".to_string(), "Foo".to_string()),
            ]);
            prop_assert_eq!(render(&text, &replacements), text);
        }
    }
}
