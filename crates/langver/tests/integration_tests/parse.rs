use crate::common::LangverTest;
use pretty_assertions::assert_eq;

#[test]
fn test_parse_prints_canonical_form() {
    let test = LangverTest::new();
    let output = test.langver(&["parse", "2.19"]);
    output.assert_success();
    assert_eq!(output.stdout(), "2.19\n");
}

#[test]
fn test_parse_reports_position() {
    let test = LangverTest::new();
    let output = test.langver(&["parse", "2.5abc"]);
    output.assert_failure();
    assert_eq!(output.stdout(), "");
    assert!(
        output
            .stderr()
            .contains("Unexpected character after minor version (at character 4)"),
        "{}",
        output.stderr()
    );
}

#[test]
fn test_parse_rejects_whitespace() {
    let test = LangverTest::new();
    test.langver(&["parse", " 2.19"]).assert_failure();
    test.langver(&["parse", "2.19 "]).assert_failure();
}

#[test]
fn test_compare() {
    let test = LangverTest::new();
    let output = test.langver(&["compare", "2.9", "2.10"]);
    output.assert_success();
    assert_eq!(output.stdout(), "2.9 < 2.10\n");
}

#[test]
fn test_compare_rejects_invalid_version() {
    let test = LangverTest::new();
    let output = test.langver(&["compare", "2.9", "2.010"]);
    output.assert_failure();
    assert!(
        output
            .stderr()
            .contains("Minor version has unnecessary leading zeros (at character 3)"),
        "{}",
        output.stderr()
    );
}
