//! CLI support for anise.
//!
//! Provides programmatic access to the CLI functionality for embedding in
//! other tools.

use std::io;
use std::sync::atomic::AtomicBool;

use thiserror::Error;

use crate::calculator::Calculator;
use crate::error::CalcError;
use crate::evaluator::AngleUnit;
use crate::store::ArrayMap;
use crate::value::Value;

/// Errors that can occur during CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// Expression compilation or evaluation error
    #[error("expression error: {0}")]
    Calc(#[from] CalcError),
    /// JSON parsing error
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// No input provided
    #[error("no input provided; use --input or pipe JSON to stdin")]
    NoInput,
    /// The input was not a JSON object of arrays
    #[error("input must be a JSON object mapping array names to arrays")]
    BadInput,
    /// One entry of the input object has the wrong shape
    #[error(
        "array \"{0}\" must be a flat array of numbers or an array of equal-length number arrays"
    )]
    BadArray(String),
    /// The cooperative cancel flag was raised
    #[error("evaluation was cancelled")]
    Cancelled,
}

/// Options for the `eval` subcommand.
pub struct EvalOptions {
    pub expression: String,
    pub input: Option<String>,
    pub degrees: bool,
    pub tuples: Option<usize>,
    pub check_only: bool,
}

/// What `execute_eval` produced.
pub enum EvalOutcome {
    /// Preflight passed; nothing was evaluated
    Checked { warnings: Vec<String> },
    /// The computed value and any warnings
    Evaluated { value: Value, warnings: Vec<String> },
}

/// Parse the input arrays and run the expression against them.
pub fn execute_eval(options: &EvalOptions) -> Result<EvalOutcome, CliError> {
    let input = options.input.as_deref().ok_or(CliError::NoInput)?;
    let arrays = parse_arrays(input)?;

    let mut calculator = Calculator::new();
    if options.degrees {
        calculator = calculator.with_angle_units(AngleUnit::Degrees);
    }
    if let Some(tuples) = options.tuples {
        calculator = calculator.with_output_tuples(tuples);
    }

    if options.check_only {
        let preflight = calculator.preflight(&options.expression, &arrays)?;
        return Ok(EvalOutcome::Checked {
            warnings: preflight.warnings.iter().map(ToString::to_string).collect(),
        });
    }

    let cancel = AtomicBool::new(false);
    match calculator.evaluate(&options.expression, &arrays, &cancel)? {
        Some(output) => Ok(EvalOutcome::Evaluated {
            value: output.value,
            warnings: output.warnings.iter().map(ToString::to_string).collect(),
        }),
        None => Err(CliError::Cancelled),
    }
}

/// Parse `{"Name": [1, 2, 3], "Vectors": [[1, 2], [3, 4]]}` into an
/// [`ArrayMap`]. A flat entry is one component per tuple; a nested entry
/// is tuples of equal-length component rows.
pub fn parse_arrays(input: &str) -> Result<ArrayMap, CliError> {
    let json: serde_json::Value = serde_json::from_str(input)?;
    let object = json.as_object().ok_or(CliError::BadInput)?;

    let mut arrays = ArrayMap::new();
    for (name, entry) in object {
        let rows = entry
            .as_array()
            .ok_or_else(|| CliError::BadArray(name.clone()))?;

        if rows.iter().all(serde_json::Value::is_number) {
            let elements = rows.iter().filter_map(serde_json::Value::as_f64).collect();
            arrays.insert_scalar(name.clone(), elements);
        } else {
            let mut components: Option<usize> = None;
            let mut elements = Vec::new();
            for row in rows {
                let tuple = row
                    .as_array()
                    .ok_or_else(|| CliError::BadArray(name.clone()))?;
                match components {
                    None => components = Some(tuple.len()),
                    Some(expected) if expected == tuple.len() => {}
                    Some(_) => return Err(CliError::BadArray(name.clone())),
                }
                for value in tuple {
                    elements.push(
                        value
                            .as_f64()
                            .ok_or_else(|| CliError::BadArray(name.clone()))?,
                    );
                }
            }
            let Some(components) = components else {
                return Err(CliError::BadArray(name.clone()));
            };
            arrays.insert(name.clone(), rows.len(), components, elements);
        }
    }
    Ok(arrays)
}

/// Render a value as JSON: a flat array for one component per tuple,
/// nested rows otherwise. Non-finite elements render as `null`.
pub fn value_to_json(value: &Value) -> serde_json::Value {
    if value.components() == 1 {
        serde_json::Value::Array(value.elements().iter().map(|&v| json_number(v)).collect())
    } else {
        let rows = (0..value.tuples())
            .map(|tuple| {
                serde_json::Value::Array(
                    (0..value.components())
                        .map(|component| json_number(value.get(tuple, component)))
                        .collect(),
                )
            })
            .collect();
        serde_json::Value::Array(rows)
    }
}

fn json_number(value: f64) -> serde_json::Value {
    serde_json::Number::from_f64(value)
        .map(serde_json::Value::Number)
        .unwrap_or(serde_json::Value::Null)
}
