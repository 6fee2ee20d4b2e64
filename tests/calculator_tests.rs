use std::sync::atomic::AtomicBool;

use anise::{
    AngleUnit, ArrayMap, CalcError, Calculator, Output, ValueKind, Warning, compile_and_evaluate,
};

fn arrays() -> ArrayMap {
    let mut map = ArrayMap::new();
    map.insert_scalar("A", vec![2.0; 5]);
    map.insert("B", 3, 2, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    map.insert("C", 3, 3, vec![0.0; 9]);
    map.insert_scalar("Short", vec![1.0, 2.0]);
    map
}

fn eval_with(map: &ArrayMap, expr: &str) -> Output {
    let cancel = AtomicBool::new(false);
    compile_and_evaluate(expr, map, AngleUnit::Radians, &cancel)
        .unwrap()
        .unwrap()
}

fn eval(expr: &str) -> Output {
    eval_with(&arrays(), expr)
}

fn eval_err(expr: &str) -> CalcError {
    let cancel = AtomicBool::new(false);
    compile_and_evaluate(expr, &arrays(), AngleUnit::Radians, &cancel).unwrap_err()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-12,
        "expected {}, got {}",
        expected,
        actual
    );
}

// ============================================================================
// Arithmetic over literals
// ============================================================================

#[test]
fn literal_arithmetic_honors_precedence() {
    assert_eq!(eval("2 + 3 * 4").value.elements(), &[14.0]);
    assert_eq!(eval("(2 + 3) * 4").value.elements(), &[20.0]);
}

#[test]
fn literal_result_is_a_number() {
    let output = eval("2 + 3");
    assert_eq!(output.value.kind(), ValueKind::Number);
    assert_eq!(output.value.tuples(), 1);
    assert_eq!(output.value.components(), 1);
}

#[test]
fn negative_sign_disambiguation() {
    assert_eq!(eval("-3 + 4").value.elements(), &[1.0]);
    assert_eq!(eval("4 - 3").value.elements(), &[1.0]);
    assert_eq!(eval("4 * -3").value.elements(), &[-12.0]);
}

#[test]
fn power_and_division() {
    assert_eq!(eval("2 ^ 3").value.elements(), &[8.0]);
    assert_eq!(eval("9 / 3").value.elements(), &[3.0]);
}

// ============================================================================
// Arrays, broadcasting, and indexing
// ============================================================================

#[test]
fn scalar_broadcasts_over_an_array() {
    let output = eval("A + 10");
    assert_eq!(output.value.kind(), ValueKind::Array);
    assert_eq!(output.value.tuples(), 5);
    assert_eq!(output.value.elements(), &[12.0; 5]);
}

#[test]
fn scalar_on_the_left_broadcasts_too() {
    assert_eq!(eval("10 / A").value.elements(), &[5.0; 5]);
}

#[test]
fn component_indexing_selects_one_component() {
    let output = eval("B[1]");
    assert_eq!(output.value.tuples(), 3);
    assert_eq!(output.value.components(), 1);
    assert_eq!(output.value.elements(), &[2.0, 4.0, 6.0]);
}

#[test]
fn arrays_combine_elementwise() {
    assert_eq!(eval("A * A").value.elements(), &[4.0; 5]);
}

#[test]
fn component_counts_must_match() {
    assert_eq!(eval_err("B + C"), CalcError::InconsistentComponentDims(2, 3));
}

#[test]
fn tuple_counts_must_match() {
    assert_eq!(
        eval_err("A + Short"),
        CalcError::InconsistentTuples {
            first: "A".to_string(),
            second: "Short".to_string(),
        }
    );
}

// ============================================================================
// Functions
// ============================================================================

#[test]
fn root_takes_two_arguments() {
    assert_eq!(eval_err("root(4)"), CalcError::NotEnoughArguments("root".to_string()));
    assert_eq!(
        eval_err("root(4, 2, 3)"),
        CalcError::TooManyArguments("root".to_string())
    );
    assert_close(eval("root(4, 2)").value.elements()[0], 2.0);
}

#[test]
fn log_takes_a_base() {
    assert_close(eval("log(8, 2)").value.elements()[0], 3.0);
}

#[test]
fn unary_functions_apply_elementwise() {
    assert_eq!(eval("abs(-3)").value.elements(), &[3.0]);
    assert_eq!(eval("floor(2.7)").value.elements(), &[2.0]);
    assert_eq!(eval("ceil(2.2)").value.elements(), &[3.0]);
    assert_close(eval("exp(0)").value.elements()[0], 1.0);
    assert_close(eval("ln(1)").value.elements()[0], 0.0);
    assert_eq!(eval("sqrt(A + 2)").value.elements(), &[2.0; 5]);
}

#[test]
fn functions_nest() {
    assert_close(eval("root(root(16, 2), 2)").value.elements()[0], 2.0);
}

#[test]
fn trig_defaults_to_radians() {
    assert_close(eval("sin(0)").value.elements()[0], 0.0);
    assert_close(eval("cos(0)").value.elements()[0], 1.0);
}

#[test]
fn trig_converts_degrees_on_input() {
    let cancel = AtomicBool::new(false);
    let output = Calculator::new()
        .with_angle_units(AngleUnit::Degrees)
        .evaluate("sin(90)", &ArrayMap::new(), &cancel)
        .unwrap()
        .unwrap();
    assert_close(output.value.elements()[0], 1.0);
}

#[test]
fn inverse_trig_converts_degrees_on_output() {
    let cancel = AtomicBool::new(false);
    let output = Calculator::new()
        .with_angle_units(AngleUnit::Degrees)
        .evaluate("asin(1)", &ArrayMap::new(), &cancel)
        .unwrap()
        .unwrap();
    assert_close(output.value.elements()[0], 90.0);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn mismatched_parentheses() {
    assert_eq!(eval_err("(2 + 3"), CalcError::MismatchedParentheses);
    assert_eq!(eval_err("2 + 3)"), CalcError::MismatchedParentheses);
}

#[test]
fn empty_expression() {
    assert_eq!(eval_err(""), CalcError::EmptyExpression);
}

#[test]
fn adjacent_values_do_not_evaluate() {
    assert_eq!(eval_err("2 3"), CalcError::InvalidEquation);
}

#[test]
fn declared_output_tuples_are_enforced() {
    let cancel = AtomicBool::new(false);
    let err = Calculator::new()
        .with_output_tuples(1)
        .evaluate("A + 10", &arrays(), &cancel)
        .unwrap_err();
    assert_eq!(err, CalcError::IncorrectTupleCount { target: 1, actual: 5 });

    assert!(
        Calculator::new()
            .with_output_tuples(5)
            .evaluate("A + 10", &arrays(), &cancel)
            .is_ok()
    );
}

// ============================================================================
// Warnings
// ============================================================================

#[test]
fn single_tuple_result_warns() {
    let output = eval("2 + 3");
    assert!(output.warnings.contains(&Warning::NumericResultSingleTuple));
}

#[test]
fn array_result_does_not_warn() {
    let output = eval("A + 10");
    assert!(output.warnings.is_empty());
}

#[test]
fn bare_keyword_colliding_with_array_warns_but_still_evaluates() {
    let mut map = ArrayMap::new();
    map.insert_scalar("sin", vec![0.5, 0.5, 0.5]);

    let output = eval_with(&map, "sin(0)");
    assert!(output.warnings.contains(&Warning::AmbiguousName("sin".to_string())));
    assert_close(output.value.elements()[0], 0.0);
}

#[test]
fn quoting_binds_the_colliding_array() {
    let mut map = ArrayMap::new();
    map.insert_scalar("sin", vec![0.5, 0.5, 0.5]);

    let output = eval_with(&map, "\"sin\" + 1");
    assert_eq!(output.value.elements(), &[1.5, 1.5, 1.5]);
    assert!(output.warnings.is_empty());
}

// ============================================================================
// Lifecycle
// ============================================================================

#[test]
fn evaluation_is_idempotent() {
    let map = arrays();
    let first = eval_with(&map, "sin(B[0]) * 2 + B[1]");
    let second = eval_with(&map, "sin(B[0]) * 2 + B[1]");
    assert_eq!(first, second);
}

#[test]
fn cancellation_returns_no_result() {
    let cancel = AtomicBool::new(true);
    let result = compile_and_evaluate("2 + 3", &arrays(), AngleUnit::Radians, &cancel).unwrap();
    assert!(result.is_none());
}

#[test]
fn preflight_reports_shape_without_evaluating() {
    let preflight = Calculator::new().preflight("A + 10", &arrays()).unwrap();
    assert_eq!(preflight.tuples, 5);
    assert!(preflight.warnings.is_empty());

    let preflight = Calculator::new().preflight("2 + 3", &arrays()).unwrap();
    assert_eq!(preflight.tuples, 1);
    assert!(preflight.warnings.contains(&Warning::NumericResultSingleTuple));
}
