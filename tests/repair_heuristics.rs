use json_mend::{format, FormatResult};
use rstest::rstest;
use serde_json::{json, Value};

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).expect("pretty-print fixture")
}

#[rstest]
#[case(r#"{"a":1}{"b":2}"#)]
#[case(r#"{"a":1} {"b":2}"#)]
#[case(r#"{"a":1}  {"b":2}"#)]
#[case("{\"a\":1}\n{\"b\":2}")]
#[case("{\"a\":1}\t\r\n{\"b\":2}")]
fn adjacent_objects_are_collected_into_an_array(#[case] raw: &str) {
    assert_eq!(
        format(raw),
        FormatResult::Formatted {
            text: pretty(&json!([{"a": 1}, {"b": 2}]))
        }
    );
}

#[rstest]
fn three_adjacent_objects() {
    assert_eq!(
        format(r#"{"a":1}{"b":2}{"c":3}"#),
        FormatResult::Formatted {
            text: pretty(&json!([{"a": 1}, {"b": 2}, {"c": 3}]))
        }
    );
}

#[rstest]
fn nested_objects_only_join_at_the_seam() {
    assert_eq!(
        format(r#"{"a":{"x":1}} {"b":2}"#),
        FormatResult::Formatted {
            text: pretty(&json!([{"a": {"x": 1}}, {"b": 2}]))
        }
    );
}

#[rstest]
fn comma_joined_fragments_are_wrapped() {
    assert_eq!(
        format(r#"{"a":1},{"b":2}"#),
        FormatResult::Formatted {
            text: pretty(&json!([{"a": 1}, {"b": 2}]))
        }
    );
}

#[rstest]
fn already_bracketed_array_is_untouched() {
    assert_eq!(
        format(r#"[{"a":1},{"b":2}]"#),
        FormatResult::Formatted {
            text: pretty(&json!([{"a": 1}, {"b": 2}]))
        }
    );
}

// Inputs that start with `[` never enter either heuristic, even when the
// body contains the adjacency pattern.
#[rstest]
fn malformed_array_is_not_repaired() {
    let result = format(r#"[{"a":1}{"b":2}]"#);
    let message = result.error_message().expect("parse error");
    assert!(message.starts_with("Error parsing JSON: "));
}

#[rstest]
fn failed_rewrite_falls_back_to_the_original_candidate() {
    // Joining produces `[{"a":},{"b":2}]`, which does not parse, so the
    // original text is what reaches the parser and the diagnostic points at
    // its sixth column, not the wrapped form's seventh.
    let result = format(r#"{"a":}{"b":2}"#);
    let message = result.error_message().expect("parse error");
    assert!(message.starts_with("Error parsing JSON: "));
    assert!(message.contains("column 6"), "unexpected message: {message}");
}

#[rstest]
fn comma_join_wrap_is_not_validated() {
    // The wrap commits unconditionally, so the diagnostic describes the
    // wrapped candidate.
    let result = format(r#"{"a":},{"b":}"#);
    let message = result.error_message().expect("parse error");
    assert!(message.starts_with("Error parsing JSON: "));
    assert!(message.contains("column 7"), "unexpected message: {message}");
}

#[rstest]
fn brace_pair_inside_a_string_still_triggers_the_rewrite() {
    // `{"a":"}{"}` is itself valid JSON, but the adjacency gate sees the
    // `}{` inside the string literal and the rewritten form also parses, so
    // the rewrite wins. Longstanding behavior, locked in deliberately.
    assert_eq!(
        format(r#"{"a":"}{"}"#),
        FormatResult::Formatted {
            text: pretty(&json!([{"a": "},{"}]))
        }
    );
}

#[rstest]
fn single_bare_object_is_left_alone() {
    assert_eq!(
        format(r#"{"a":1}"#),
        FormatResult::Formatted {
            text: pretty(&json!({"a": 1}))
        }
    );
}

#[rstest]
fn comma_joined_fragments_ending_in_bracket_are_not_wrapped() {
    // Trailing `]` disables the wrap; the raw text fails to parse as-is.
    let result = format(r#"{"a":1},{"b":2}]"#);
    assert!(result
        .error_message()
        .is_some_and(|m| m.starts_with("Error parsing JSON: ")));
}
