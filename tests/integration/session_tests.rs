//! End-to-end session tests.
//!
//! Each test scripts the lines a user would type and checks both the
//! returned roots and the exact console transcript.

use std::io::Cursor;

use quadsolve::{run, QuadraticError, Roots, SessionConfig, Slot, SlotValue};

use crate::mocks::{plain_banner, FailingWriter, ScriptedSession};

#[test]
fn test_two_roots_scenario() {
    let (result, output) = ScriptedSession::new(&["1", "-3", "2"]).run();
    assert_eq!(result, Ok(Roots::Pair(2.0, 1.0)));
    assert_eq!(output, "a: b: c: x1 = 2, x2 = 1\n");
}

#[test]
fn test_single_root_scenario() {
    let (result, output) = ScriptedSession::new(&["1", "2", "1"]).run();
    assert_eq!(result, Ok(Roots::Single(-1.0)));
    assert_eq!(output, "a: b: c: x = -1\n");
}

#[test]
fn test_no_real_roots_restarts_collection() {
    let (result, output) = ScriptedSession::new(&["1", "0", "1", "1", "-3", "2"]).run();
    assert_eq!(result, Ok(Roots::Pair(2.0, 1.0)));

    let expected = format!(
        "a: b: c: {}a: b: c: x1 = 2, x2 = 1\n",
        plain_banner("No real values found (discriminant = -4).", &[])
    );
    assert_eq!(output, expected);
}

#[test]
fn test_zero_leading_coefficient_reprompts() {
    let (result, output) = ScriptedSession::new(&["0", "2", "-4", "2"]).run();
    assert_eq!(result, Ok(Roots::Single(1.0)));

    let expected = format!(
        "a: {}a: b: c: x = 1\n",
        plain_banner("Variable \"a\" cannot be zero.", &[])
    );
    assert_eq!(output, expected);
}

#[test]
fn test_non_numeric_input_reprompts_with_snapshot() {
    let (result, output) = ScriptedSession::new(&["1", "abc", "-3", "2"]).run();
    assert_eq!(result, Ok(Roots::Pair(2.0, 1.0)));

    let expected = format!(
        "a: b: {}b: c: x1 = 2, x2 = 1\n",
        plain_banner(
            "Cannot parse the variable \"abc\".",
            &["a = 1", "b = abc <- This value must be a number.", "c = ?"],
        )
    );
    assert_eq!(output, expected);
}

#[test]
fn test_decimal_input_rejected() {
    let (result, output) = ScriptedSession::new(&["12.5", "1", "-3", "2"]).run();
    assert_eq!(result, Ok(Roots::Pair(2.0, 1.0)));
    assert!(output.contains("Cannot parse the variable \"12.5\"."));
    assert!(output.contains("a = 12.5 <- This value must be a number."));
    assert!(output.contains("b = ?"));
}

#[test]
fn test_out_of_range_input_is_a_notification() {
    let (result, output) = ScriptedSession::new(&["1", "-3", "99999999999", "2"]).run();
    assert_eq!(result, Ok(Roots::Pair(2.0, 1.0)));

    let expected = format!(
        "a: b: c: {}c: x1 = 2, x2 = 1\n",
        plain_banner(
            "Number must be in range -2147483648 < \"99999999999\" < 2147483647.",
            &[],
        )
    );
    assert_eq!(output, expected);
}

#[test]
fn test_restart_clears_previous_coefficients() {
    let (result, output) = ScriptedSession::new(&["1", "0", "1", "1", "x", "2", "1"])
        .with_redraw()
        .run();
    assert_eq!(result, Ok(Roots::Single(-1.0)));

    // The snapshot from the second pass must not show the first pass's b/c.
    assert!(output.contains("a = 1\nb = x <- This value must be a number.\nc = ?\n"));
}

#[test]
fn test_redraw_shows_equation_before_each_prompt() {
    let (result, output) = ScriptedSession::new(&["1", "2", "1"]).with_redraw().run();
    assert_eq!(result, Ok(Roots::Single(-1.0)));
    assert_eq!(
        output,
        "a * x^2 + b * x + c = 0\n\
         a: 1 * x^2 + b * x + c = 0\n\
         b: 1 * x^2 + 2 * x + c = 0\n\
         c: 1 * x^2 + 2 * x + 1 = 0\n\
         x = -1\n"
    );
}

#[test]
fn test_redraw_with_negative_coefficients() {
    let (_, output) = ScriptedSession::new(&["-1", "-5", "-6"]).with_redraw().run();
    assert!(output.contains("- 1 * x^2 - 5 * x - 6 = 0\n"));
}

#[test]
fn test_colored_banner_uses_severity_code() {
    let (result, output) = ScriptedSession::new(&["0", "1", "2", "1"]).with_color().run();
    assert_eq!(result, Ok(Roots::Single(-1.0)));
    assert!(output.contains("\x1b[30;43mVariable \"a\" cannot be zero.\x1b[0m\n"));
}

#[test]
fn test_input_closed_ends_session() {
    let (result, output) = ScriptedSession::new(&["1", "2"]).run();
    assert_eq!(result, Err(QuadraticError::InputClosed));
    assert_eq!(output, "a: b: c: ");
}

#[test]
fn test_input_closed_after_retries() {
    let (result, _) = ScriptedSession::new(&["0", "0", "zero"]).run();
    assert_eq!(result, Err(QuadraticError::InputClosed));
}

#[test]
fn test_empty_line_is_rejected_not_eof() {
    let (result, output) = ScriptedSession::new(&["", "1", "2", "1"]).run();
    assert_eq!(result, Ok(Roots::Single(-1.0)));
    assert!(output.contains("Cannot parse the variable \"\"."));
}

#[test]
fn test_whitespace_around_numbers_accepted() {
    let (result, _) = ScriptedSession::new(&["  1", "-3  ", "\t2"]).run();
    assert_eq!(result, Ok(Roots::Pair(2.0, 1.0)));
}

#[test]
fn test_failing_output_is_terminal() {
    let config = SessionConfig {
        color: false,
        redraw_equation: false,
    };
    let result = run(config, Cursor::new("1\n-3\n2\n"), FailingWriter);
    match result {
        Err(QuadraticError::Io { context, message }) => {
            assert_eq!(context, "writing prompt");
            assert!(message.contains("stdout closed"));
        }
        other => panic!("expected Io error, got {:?}", other),
    }
}

#[test]
fn test_parse_error_snapshot_exposed_on_error() {
    let mut coefficients = quadsolve::Coefficients::new();
    coefficients.set(Slot::A, 3).unwrap();

    let err = quadsolve::session::collector::accept(Slot::C, "seven", &mut coefficients)
        .unwrap_err();
    let snapshot = err.snapshot().unwrap();
    assert_eq!(snapshot.get(Slot::B), Some(&SlotValue::Unset));
    assert_eq!(coefficients.get(Slot::C), None);
}

#[test]
fn test_non_utf8_line_reprompts_same_slot() {
    let config = SessionConfig {
        color: false,
        redraw_equation: false,
    };
    let mut output = Vec::new();
    let result = run(config, Cursor::new(b"\xe9\n1\n2\n1\n".to_vec()), &mut output);
    assert_eq!(result, Ok(Roots::Single(-1.0)));

    let output = String::from_utf8(output).unwrap();
    assert!(output.starts_with("a: "));
    assert!(output.contains("Cannot parse the variable \"\u{FFFD}\"."));
    assert!(output.ends_with("a: b: c: x = -1\n"));
}
