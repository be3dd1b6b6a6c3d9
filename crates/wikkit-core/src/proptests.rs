//! Property-based tests for titles and the file store.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::{FileStore, Page, PageStore, Title};
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn test_save_load_roundtrip(
            name in "[A-Za-z0-9]{1,24}",
            body in proptest::collection::vec(any::<u8>(), 0..2048),
        ) {
            let rt = tokio::runtime::Runtime::new().unwrap();
            let dir = tempfile::TempDir::new().unwrap();
            let store = FileStore::new(dir.path());
            let title = Title::new(name).unwrap();

            let loaded = rt.block_on(async {
                store.save(&Page::new(title.clone(), body.clone())).await.unwrap();
                store.load(&title).await.unwrap()
            });

            prop_assert_eq!(loaded.title, title);
            prop_assert_eq!(loaded.body, body);
        }

        #[test]
        fn test_valid_titles_parse(name in "[A-Za-z0-9]{1,64}") {
            let title = Title::new(name.clone()).unwrap();
            prop_assert_eq!(title.as_str(), name.as_str());
        }

        #[test]
        fn test_titles_with_other_chars_rejected(
            prefix in "[A-Za-z0-9]{0,8}",
            bad in "[^A-Za-z0-9]",
            suffix in "[A-Za-z0-9]{0,8}",
        ) {
            let candidate = format!("{prefix}{bad}{suffix}");
            prop_assert!(Title::new(candidate).is_err());
        }
    }
}
