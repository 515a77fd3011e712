use crate::common::LangverTest;
use pretty_assertions::assert_eq;

#[test]
fn test_check_text() {
    let test = LangverTest::new();
    let output = test.langver(&[
        "check",
        "--language-version",
        "2.19",
        "--feature",
        "null-safety",
        "--feature",
        "records",
    ]);
    output.assert_success();
    assert_eq!(
        output.stdout(),
        "Language version 2.19\n\
         null-safety: supported (since 2.12)\n\
         records: not supported (requires 3.0)\n"
    );
}

#[test]
fn test_check_json() {
    let test = LangverTest::new();
    let output = test.langver(&[
        "check",
        "--language-version",
        "3.0",
        "--feature",
        "extension-types",
        "--format",
        "json",
    ]);
    output.assert_success();
    let entries: serde_json::Value = serde_json::from_str(&output.stdout()).unwrap();
    assert_eq!(
        entries,
        serde_json::json!([
            { "feature": "extension-types", "since": "3.3", "supported": false }
        ])
    );
}

#[test]
fn test_check_reads_version_from_env() {
    let mut test = LangverTest::new();
    test.env.insert("LANGVER_VERSION".into(), "3.3".into());
    let output = test.langver(&["check", "--feature", "extension-types"]);
    output.assert_success();
    assert_eq!(
        output.stdout(),
        "Language version 3.3\nextension-types: supported (since 3.3)\n"
    );
}

#[test]
fn test_check_reads_host_version() {
    let mut test = LangverTest::new();
    test.env.insert(
        "LANGVER_HOST_VERSION".into(),
        r#"2.12.4 (stable) (Thu Apr 22 2021) on "linux_x64""#.into(),
    );
    let output = test.langver(&["check", "--feature", "null-safety"]);
    output.assert_success();
    assert_eq!(
        output.stdout(),
        "Language version 2.12\nnull-safety: supported (since 2.12)\n"
    );
}

#[test]
fn test_explicit_version_wins_over_host_version() {
    let mut test = LangverTest::new();
    test.env
        .insert("LANGVER_HOST_VERSION".into(), "2.12.4 (stable)".into());
    let output = test.langver(&["check", "--language-version", "3.0", "--feature", "records"]);
    output.assert_success();
    assert_eq!(
        output.stdout(),
        "Language version 3.0\nrecords: supported (since 3.0)\n"
    );
}

#[test]
fn test_check_without_version_fails() {
    let test = LangverTest::new();
    let output = test.langver(&["check"]);
    output.assert_failure();
    assert!(
        output.stderr().contains("No language version was given"),
        "{}",
        output.stderr()
    );
}

#[test]
fn test_check_with_bad_host_version_fails() {
    let mut test = LangverTest::new();
    test.env
        .insert("LANGVER_HOST_VERSION".into(), "main (dev)".into());
    let output = test.langver(&["check"]);
    output.assert_failure();
    assert!(
        output
            .stderr()
            .contains("Expected digit at start of major version (at character 1)"),
        "{}",
        output.stderr()
    );
}
