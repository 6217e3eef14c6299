//! Property tests for dependency-file naming and layout paths.

use std::ffi::OsStr;
use std::path::Path;

use proptest::prelude::*;

use gendeps::config::LayoutConfig;
use gendeps::layout::{dep_file_name, ProjectLayout};

fn file_name() -> impl Strategy<Value = String> {
    // Plausible directory-entry names: no separators, no NUL.
    proptest::string::string_regex("[A-Za-z0-9._ -]{1,32}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The dependency name is the input name plus ".d"; no part
    /// of the original name is replaced.
    #[test]
    fn property_dep_name_appends_suffix(
        name in file_name()
    ) {
        let dep = dep_file_name(OsStr::new(&name));
        prop_assert_eq!(dep.to_string_lossy().into_owned(), format!("{}.d", name));
    }

    /// PROPERTY: Every dependency path lands directly inside the deps
    /// directory, whatever the file name looks like.
    #[test]
    fn property_dep_path_stays_in_deps_dir(
        name in file_name()
    ) {
        let layout = ProjectLayout::new("benchmark", &LayoutConfig::default());
        let dep = layout.dep_file_path(OsStr::new(&name));
        prop_assert_eq!(dep.parent(), Some(layout.deps_dir()));
    }

    /// PROPERTY: Layout construction never panics for arbitrary base
    /// directory strings.
    #[test]
    fn property_layout_new_never_panics(
        base in "[A-Za-z0-9._/-]{0,64}"
    ) {
        let layout = ProjectLayout::new(Path::new(&base), &LayoutConfig::default());
        let _ = layout.dep_file_path(OsStr::new("main.c"));
    }
}
