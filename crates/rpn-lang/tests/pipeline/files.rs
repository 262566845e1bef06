//! Tests for script files.

use std::path::PathBuf;

use rpn_lang::{Interpreter, Outcome, Value};

fn write_script(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(name);
    std::fs::write(&path, contents).expect("write script");
    path
}

#[test]
fn a_file_is_parsed_line_by_line() {
    let path = write_script(
        "rpn_pipeline_ok.4nc",
        "1 2 +\n: TRIPLE 3 * ;\n10 TRIPLE\n",
    );
    let mut interp = Interpreter::new();
    assert_eq!(interp.parse_file(&path).unwrap(), Outcome::Ok);
    assert_eq!(
        interp.stack().as_slice(),
        &[Value::integer(3), Value::integer(30)]
    );
}

#[test]
fn definitions_span_file_lines() {
    let path = write_script(
        "rpn_pipeline_span.4nc",
        ": ADD3\n3 +\n;\n7 ADD3\n",
    );
    let mut interp = Interpreter::new();
    assert_eq!(interp.parse_file(&path).unwrap(), Outcome::Ok);
    assert_eq!(interp.stack().as_slice(), &[Value::integer(10)]);
}

#[test]
fn parsing_stops_at_the_first_failing_line() {
    let path = write_script("rpn_pipeline_bad.4nc", "1 2 +\nFROB\n99\n");
    let mut interp = Interpreter::new();
    assert_eq!(interp.parse_file(&path).unwrap(), Outcome::DictError);
    // The line after the failure never ran.
    assert_eq!(interp.stack().as_slice(), &[Value::integer(3)]);
}

#[test]
fn a_missing_file_is_a_host_error() {
    let mut interp = Interpreter::new();
    let err = interp
        .parse_file("/nonexistent/rpn_pipeline_missing.4nc")
        .unwrap_err();
    assert!(err.to_string().contains("failed to read"));
}
