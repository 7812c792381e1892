use treeshake_reach::{StripArchivesBuilder, StripFilterError};

#[test]
fn p9_strip_filter_is_total_over_assorted_paths() {
    let mut builder = StripArchivesBuilder::new();
    let config = builder.build().unwrap();

    for path in [
        "",
        "a",
        "a/b/c.class",
        "a/b/c.txt",
        "META-INF/MANIFEST.MF",
        "really/deep/nested/path/with/many/segments/file.xml",
    ] {
        // Merely calling should_include without panicking demonstrates
        // totality; the return value is a plain bool either way.
        let _: bool = config.should_include(path);
    }
}

#[test]
fn scenario_default_strip_filter() {
    let mut builder = StripArchivesBuilder::new();
    let config = builder.build().unwrap();

    assert!(!config.should_include("com/x/Foo.class"));
    assert!(config.should_include("META-INF/MANIFEST.MF"));
    assert!(config.should_include("res/a.png"));
}

#[test]
fn scenario_ordering_first_match_wins() {
    let mut builder = StripArchivesBuilder::new();
    builder.add_include(["**/keep/**/*.class"]).unwrap();
    let config = builder.build().unwrap();

    assert!(config.should_include("p/keep/X.class"));
    assert!(!config.should_include("p/skip/Y.class"));
}

#[test]
fn scenario_builder_reuse_rejected_after_build() {
    let mut builder = StripArchivesBuilder::new();
    let config = builder.build().unwrap();

    let result = builder.add_exclude(["**/*.txt"]);
    assert!(matches!(result, Err(StripFilterError::BuilderAlreadyBuilt)));

    // And build() itself can't be called again either.
    let rebuild = builder.build();
    assert!(matches!(rebuild, Err(StripFilterError::BuilderAlreadyBuilt)));

    // The config from the first successful build is untouched.
    assert!(config.should_include("a.txt"));
}

#[test]
fn exclude_rules_take_effect_before_terminal_include() {
    let mut builder = StripArchivesBuilder::new();
    builder.add_exclude(["**/*.tmp"]).unwrap();
    let config = builder.build().unwrap();

    assert!(!config.should_include("build/output.tmp"));
    assert!(config.should_include("build/output.bin"));
}
