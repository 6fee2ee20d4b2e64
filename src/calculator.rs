//! The front door: compile an infix expression and evaluate it against a
//! set of named arrays.
//!
//! Compilation runs the scanner, the binder, the validity check, and the
//! postfix compiler in order; evaluation then runs the postfix sequence
//! on the stack machine. Nothing is cached between calls: each evaluation
//! recompiles from source text, so evaluating the same expression twice
//! against unchanged arrays yields identical results.

use std::sync::atomic::AtomicBool;

use crate::ast::Item;
use crate::binder::Binder;
use crate::compiler;
use crate::error::{CalcError, Warning};
use crate::evaluator::{AngleUnit, Evaluator};
use crate::lexer::Lexer;
use crate::store::ArrayStore;
use crate::validate;
use crate::value::Value;

/// Result of a validation-only pass: the collected warnings and the
/// tuple count the output array will have.
#[derive(Debug, Clone, PartialEq)]
pub struct Preflight {
    pub warnings: Vec<Warning>,
    pub tuples: usize,
}

/// A successful evaluation: the computed value plus non-fatal warnings.
#[derive(Debug, Clone, PartialEq)]
pub struct Output {
    pub value: Value,
    pub warnings: Vec<Warning>,
}

struct Compiled {
    rpn: Vec<Item>,
    warnings: Vec<Warning>,
    tuples: usize,
}

/// Compiles and evaluates infix expressions over named arrays.
///
/// The calculator holds configuration only; it carries no state between
/// calls and a single instance may be reused freely.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    angle_unit: AngleUnit,
    output_tuples: Option<usize>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Angle unit consulted by the trigonometric functions. Defaults to
    /// radians.
    pub fn with_angle_units(mut self, angle_unit: AngleUnit) -> Self {
        self.angle_unit = angle_unit;
        self
    }

    /// Declare the tuple count of the target output location. A mismatch
    /// with the expression's implied tuple count fails with
    /// [`CalcError::IncorrectTupleCount`].
    pub fn with_output_tuples(mut self, tuples: usize) -> Self {
        self.output_tuples = Some(tuples);
        self
    }

    /// Validate the expression without evaluating it.
    ///
    /// Runs the whole compilation pipeline but never reads array element
    /// data.
    pub fn preflight(
        &self,
        expression: &str,
        arrays: &dyn ArrayStore,
    ) -> Result<Preflight, CalcError> {
        let compiled = self.compile(expression, arrays, false)?;
        Ok(Preflight {
            warnings: compiled.warnings,
            tuples: compiled.tuples,
        })
    }

    /// Compile and execute the expression.
    ///
    /// Returns `Ok(None)` exactly when the cooperative cancel flag was
    /// observed; every failure is a [`CalcError`].
    pub fn evaluate(
        &self,
        expression: &str,
        arrays: &dyn ArrayStore,
        cancel: &AtomicBool,
    ) -> Result<Option<Output>, CalcError> {
        let compiled = self.compile(expression, arrays, true)?;
        let evaluator = Evaluator::new(self.angle_unit);
        match evaluator.evaluate(&compiled.rpn, cancel)? {
            Some(value) => Ok(Some(Output {
                value,
                warnings: compiled.warnings,
            })),
            None => Ok(None),
        }
    }

    fn compile(
        &self,
        expression: &str,
        arrays: &dyn ArrayStore,
        allocate: bool,
    ) -> Result<Compiled, CalcError> {
        let tokens = Lexer::new(expression).tokenize()?;
        let (items, mut warnings) = Binder::new(arrays, allocate).bind(&tokens)?;
        validate::check(&items)?;

        // Output shape as known before evaluation: the common tuple count
        // of the bound arrays, or 1 for a purely numeric result.
        let mut tuples = 1;
        for item in &items {
            if let Item::Array(array) = item {
                tuples = tuples.max(array.tuples);
            }
        }
        if tuples == 1 {
            warnings.push(Warning::NumericResultSingleTuple);
        }
        if let Some(target) = self.output_tuples {
            if target != tuples {
                return Err(CalcError::IncorrectTupleCount {
                    target,
                    actual: tuples,
                });
            }
        }

        let rpn = compiler::to_rpn(items)?;
        Ok(Compiled {
            rpn,
            warnings,
            tuples,
        })
    }
}

/// One-shot convenience wrapper around [`Calculator`].
pub fn compile_and_evaluate(
    expression: &str,
    arrays: &dyn ArrayStore,
    angle_unit: AngleUnit,
    cancel: &AtomicBool,
) -> Result<Option<Output>, CalcError> {
    Calculator::new()
        .with_angle_units(angle_unit)
        .evaluate(expression, arrays, cancel)
}
