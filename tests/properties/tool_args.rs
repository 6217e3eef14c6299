//! Property tests for the scan-invocation argument contract.

use std::ffi::OsString;
use std::path::Path;

use proptest::prelude::*;

use gendeps::toolchain::ToolCommand;

fn extra_args() -> impl Strategy<Value = Vec<String>> {
    let arg = proptest::string::string_regex("-[A-Za-z][A-Za-z0-9=_.-]{0,16}").unwrap();
    proptest::collection::vec(arg, 0..=4)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Whatever the extra arguments, the argv always starts
    /// with the joined include flag and always ends with
    /// `<input> -MM -o <output>`.
    #[test]
    fn property_scan_args_keep_fixed_shape(
        extra in extra_args()
    ) {
        let tool = ToolCommand::new("gcc", "benchmark/include").with_extra_args(extra.clone());
        let args = tool.scan_args(
            Path::new("benchmark/src/main.c"),
            Path::new("benchmark/buildinfo/deps/main.c.d"),
        );

        prop_assert_eq!(args.len(), extra.len() + 5);
        prop_assert_eq!(&args[0], &OsString::from("-Ibenchmark/include"));

        let tail = &args[args.len() - 4..];
        prop_assert_eq!(&tail[0], &OsString::from("benchmark/src/main.c"));
        prop_assert_eq!(&tail[1], &OsString::from("-MM"));
        prop_assert_eq!(&tail[2], &OsString::from("-o"));
        prop_assert_eq!(&tail[3], &OsString::from("benchmark/buildinfo/deps/main.c.d"));
    }

    /// PROPERTY: Extra arguments appear between the include flag and the
    /// input, in configuration order.
    #[test]
    fn property_extra_args_keep_order(
        extra in extra_args()
    ) {
        let tool = ToolCommand::new("gcc", "include").with_extra_args(extra.clone());
        let args = tool.scan_args(Path::new("src/a.c"), Path::new("deps/a.c.d"));

        let middle: Vec<OsString> = args[1..args.len() - 4].to_vec();
        let expected: Vec<OsString> = extra.into_iter().map(OsString::from).collect();
        prop_assert_eq!(middle, expected);
    }

    /// PROPERTY: Rendering a scan never panics and always carries the
    /// program name and the dependency flag.
    #[test]
    fn property_render_scan_never_panics(
        program in "[a-z][a-z0-9+-]{0,16}"
    ) {
        let tool = ToolCommand::new(program.clone(), "include");
        let rendered = tool.render_scan(Path::new("src/a.c"), Path::new("deps/a.c.d"));
        prop_assert!(rendered.starts_with(&program));
        prop_assert!(rendered.contains("-MM"));
    }
}
