//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    /// Generate an Arch package name (lowercase alphanumeric with `-`, `_`, `+`, `.`)
    pub fn package_name() -> impl Strategy<Value = String> {
        "[a-z0-9][a-z0-9._+-]{0,30}"
    }

    /// Generate template-like text that contains no `@`, so no placeholders
    pub fn plain_text() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 =()'\"#$.,:/_\\-\t\r\n]{0,300}"
    }

    /// Generate a well-formed placeholder token
    pub fn placeholder_token() -> impl Strategy<Value = String> {
        "[A-Z][A-Z0-9_]{0,15}".prop_map(|name| format!("@{name}@"))
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use crate::core::template::is_valid_token;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_package_name_generator(name in package_name()) {
            prop_assert!(!name.is_empty());
            prop_assert!(!name.contains(' '));
        }

        #[test]
        fn test_plain_text_generator(text in plain_text()) {
            prop_assert!(!text.contains('@'));
        }

        #[test]
        fn test_placeholder_token_generator(token in placeholder_token()) {
            prop_assert!(is_valid_token(&token));
        }
    }
}
