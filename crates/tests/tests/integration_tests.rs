use projector::{ProjectorError, LINE_TERMINATOR};
use tests::{run_pipeline, synthetic_csv};

fn line(fields: &str) -> String {
    format!("{}{}", fields, LINE_TERMINATOR)
}

#[test]
fn test_passthrough_identity() {
    let input = "a,b,c\n1,2,3\n4,5,6\n";
    let output = run_pipeline(input, None).unwrap();
    assert_eq!(output, [line("a,b,c"), line("1,2,3"), line("4,5,6")].concat());
}

#[test]
fn test_zero_sentinel_selects_all() {
    let input = "a,b\nc,d\n";
    assert_eq!(
        run_pipeline(input, Some("0")).unwrap(),
        run_pipeline(input, None).unwrap()
    );
}

#[test]
fn test_selection_order_is_preserved() {
    let output = run_pipeline("a,b,c,d\n", Some("3,1")).unwrap();
    assert_eq!(output, line("c,a"));
}

#[test]
fn test_duplicate_selection() {
    let output = run_pipeline("a,b\n", Some("2,2,1")).unwrap();
    assert_eq!(output, line("b,b,a"));
}

#[test]
fn test_out_of_range_index_is_dropped_per_row() {
    let output = run_pipeline("a,b\n", Some("1,5")).unwrap();
    assert_eq!(output, line("a"));
}

#[test]
fn test_variable_row_width() {
    // Each row only drops the indices that exceed its own width;
    // no error, no padding
    let output = run_pipeline("a\na,b\na,b,c\n", Some("2,3")).unwrap();
    assert_eq!(output, [line(""), line("b"), line("b,c")].concat());
}

#[test]
fn test_quoting_roundtrip_comma() {
    let output = run_pipeline("\"foo,bar\",x\n", None).unwrap();
    assert_eq!(output, line("\"foo,bar\",x"));
    // Re-parsing the serialized output yields the original field
    let reparsed = run_pipeline(&output, None).unwrap();
    assert_eq!(reparsed, output);
}

#[test]
fn test_quoting_roundtrip_embedded_quote() {
    let output = run_pipeline("\"say \"\"hi\"\"\"\n", None).unwrap();
    assert_eq!(output, line("\"say \"\"hi\"\"\""));
}

#[test]
fn test_embedded_newline_is_single_row() {
    let output = run_pipeline("\"one\ntwo\",x\nnext,row\n", Some("2")).unwrap();
    assert_eq!(output, [line("x"), line("row")].concat());
}

#[test]
fn test_quoting_is_canonicalized_not_preserved() {
    // Redundant quotes on plain fields are dropped on output
    let output = run_pipeline("\"a\",\"b\"\n", None).unwrap();
    assert_eq!(output, line("a,b"));
}

#[test]
fn test_empty_input_produces_empty_output() {
    assert_eq!(run_pipeline("", None).unwrap(), "");
    assert_eq!(run_pipeline("", Some("1,2")).unwrap(), "");
}

#[test]
fn test_header_only_input() {
    let output = run_pipeline("a,b,c\n", Some("2")).unwrap();
    assert_eq!(output, line("b"));
}

#[test]
fn test_no_trailing_blank_line() {
    let output = run_pipeline("a,b\nc,d", None).unwrap();
    assert!(output.ends_with(LINE_TERMINATOR));
    assert!(!output.ends_with(&format!("{}{}", LINE_TERMINATOR, LINE_TERMINATOR)));
}

#[test]
fn test_unterminated_quote_fails_whole_run() {
    let result = run_pipeline("ok,row\n\"unfinished", None);
    assert!(matches!(result, Err(ProjectorError::Parse { line: 2, .. })));
}

#[test]
fn test_invalid_fields_token_is_configuration_error() {
    let result = run_pipeline("a,b\n", Some("2,x"));
    assert!(matches!(result, Err(ProjectorError::InvalidSelection(_))));
}

#[test]
fn test_selection_on_synthetic_document() {
    let input = synthetic_csv(30, 5);
    let output = run_pipeline(&input, Some("3")).unwrap();

    let lines: Vec<&str> = output.split(LINE_TERMINATOR).collect();
    // 30 records plus the empty tail after the final terminator
    assert_eq!(lines.len(), 31);
    assert_eq!(lines[0], "\"value, with comma\"");
    assert_eq!(lines[1], "r1c2");
}

#[test]
fn test_parse_is_independent_of_selection() {
    let input = synthetic_csv(10, 4);
    let all = run_pipeline(&input, None).unwrap();
    let narrowed = run_pipeline(&input, Some("1,2,3,4")).unwrap();
    assert_eq!(all, narrowed);
}
