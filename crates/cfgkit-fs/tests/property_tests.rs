use cfgkit_fs::{ConfigStore, find_ancestor};
use cfgkit_test_utils::project::ProjectFixture;
use proptest::prelude::*;
use std::collections::BTreeMap;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn main_is_found_at_any_depth(segments in prop::collection::vec(
        "[a-z]{1,8}".prop_filter("not the root marker", |s| s != "main"),
        0..6,
    )) {
        let project = ProjectFixture::new();
        let relative = segments.join("/");
        let start = project.subdir(&relative);

        let found = find_ancestor(&start, "main").unwrap();

        prop_assert_eq!(found.as_path(), project.root());
    }

    #[test]
    fn ensure_section_is_idempotent(
        defaults in prop::collection::btree_map("[a-z][a-z0-9_]{0,7}", "[A-Za-z0-9._-]{0,12}", 0..6),
        existing in prop::collection::btree_map("[a-z][a-z0-9_]{0,7}", "[A-Za-z0-9._-]{1,12}", 0..4),
    ) {
        let project = ProjectFixture::new();
        let mut content = String::from("[section]\n");
        for (key, value) in &existing {
            content.push_str(&format!("{key} = {value}\n"));
        }
        project.write_config("prop.ini", &content);
        let mut store = ConfigStore::open(project.config_path("prop.ini")).unwrap();

        let first = store.ensure_section("section", defaults.clone()).unwrap();
        let on_disk = project.read_config("prop.ini");
        let second = store.ensure_section("section", defaults.clone()).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(project.read_config("prop.ini"), on_disk);

        let expected: BTreeMap<String, String> = defaults
            .iter()
            .map(|(k, v)| (k.clone(), existing.get(k).unwrap_or(v).clone()))
            .collect();
        prop_assert_eq!(first, expected);
    }
}
