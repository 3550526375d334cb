use dlm_core::normalize;
use proptest::prelude::*;
use proptest::test_runner::Config;

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn normalize_is_idempotent(input in "[ -~À-ÿ\\t\\n]{0,48}") {
        let once = normalize(&input);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn slugs_only_contain_allowed_characters(input in "[ -~À-ÿ]{0,48}") {
        let out = normalize(&input);
        if !out.contains("://") {
            prop_assert!(out.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == ':'));
            prop_assert!(!out.starts_with('-'));
            prop_assert!(!out.ends_with('-'));
            prop_assert!(!out.contains("--"));
        }
    }

    #[test]
    fn urls_keep_their_path(host in "[a-z]{1,12}", path in "[A-Za-z0-9/?=&]{0,24}") {
        let url = format!("https://{host}.com/{path}");
        prop_assert_eq!(normalize(&url), url.to_lowercase());
    }
}
