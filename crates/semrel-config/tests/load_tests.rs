// SPDX-License-Identifier: MIT OR Apache-2.0
//! File-based loading tests for `semrel-config`.

use semrel_config::{ConfigError, load_metadata};
use std::io::Write;
use tempfile::NamedTempFile;

fn temp_with(suffix: &str, content: &str) -> NamedTempFile {
    let mut f = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f
}

#[test]
fn loads_package_json() {
    let f = temp_with(
        ".json",
        r#"{"name": "semantic-release", "version": "15.1.0",
            "homepage": "https://github.com/semantic-release/semantic-release#readme"}"#,
    );
    let meta = load_metadata(Some(f.path())).unwrap();
    assert_eq!(meta.name(), "semantic-release");
    assert!(
        meta.linkify("docs/usage/plugins.md")
            .ends_with("/semantic-release/blob/caribou/docs/usage/plugins.md")
    );
}

#[test]
fn loads_toml_by_extension() {
    let f = temp_with(
        ".toml",
        "[package]\nname = \"releaser\"\nversion = \"0.3.0\"\nhomepage = \"https://example.org/releaser\"\n",
    );
    let meta = load_metadata(Some(f.path())).unwrap();
    assert_eq!(meta.name(), "releaser");
    assert_eq!(meta.docs_base(), "https://example.org/releaser");
}

#[test]
fn json_manifest_without_homepage_fails() {
    let f = temp_with(".json", r#"{"name": "x", "version": "1.0.0"}"#);
    match load_metadata(Some(f.path())) {
        // An exported SEMREL_HOMEPAGE legitimately fills the gap.
        Ok(_) => assert!(std::env::var("SEMREL_HOMEPAGE").is_ok()),
        Err(err) => assert!(matches!(err, ConfigError::MissingField { field: "homepage" })),
    }
}

#[test]
fn missing_file_gives_file_not_found() {
    let err = load_metadata(Some(std::path::Path::new("/definitely/not/package.json"))).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
    assert!(err.to_string().contains("/definitely/not/package.json"));
}

#[test]
fn malformed_toml_gives_parse_error() {
    let f = temp_with(".toml", "[package\nname = ");
    assert!(matches!(
        load_metadata(Some(f.path())).unwrap_err(),
        ConfigError::ParseError { .. }
    ));
}
