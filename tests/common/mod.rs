#![allow(unused)]

pub mod generative;

use pretty_doc::{render, testing::oracular_render, Doc};

pub fn compare_lines(message: &str, expected: &str, actual: &str) {
    if actual != expected {
        eprintln!(
            "{}\nEXPECTED:\n{}\nACTUAL:\n{}\n=========",
            message, expected, actual,
        );
        assert_eq!(actual, expected);
    }
}

/// Check the expected output against the oracle first (if they disagree, the test case is wrong),
/// then against the real renderer.
#[track_caller]
pub fn assert_render(doc: &Doc, expected_lines: &[&str]) {
    let expected = expected_lines.join("\n");
    compare_lines(
        "ORACLE DISAGREES WITH TEST CASE, SO THE TEST CASE MUST BE WRONG",
        &expected,
        &oracular_render(doc),
    );
    compare_lines("IN RENDERING", &expected, &render(doc));
}

/// Check that the real renderer agrees with the oracle, without knowing what either should say.
#[track_caller]
pub fn assert_render_without_expectation(doc: &Doc) {
    let oracle_result = oracular_render(doc);
    compare_lines(
        &format!("RENDERER DISAGREES WITH ORACLE ON {:?}", doc),
        &oracle_result,
        &render(doc),
    );
}
