//! Postfix stack machine with elementwise numeric broadcasting.
//!
//! One linear pass over the postfix sequence with an execution stack of
//! owned [`Value`]s. Operands push their value; every operator pops
//! exactly its arity, computes elementwise, and pushes one new value.
//! Nothing persists between runs.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::ast::{Function, Item, OpKind};
use crate::error::CalcError;
use crate::value::{Value, ValueKind};

/// Angle unit consulted by the trigonometric functions.
///
/// With [`AngleUnit::Degrees`], `sin`/`cos`/`tan` convert their input to
/// radians before applying, and the inverse functions convert their
/// result back to degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

pub struct Evaluator {
    angle_unit: AngleUnit,
}

impl Evaluator {
    pub fn new(angle_unit: AngleUnit) -> Self {
        Evaluator { angle_unit }
    }

    /// Execute a postfix sequence.
    ///
    /// Returns `Ok(None)` when the cooperative cancel flag was observed
    /// between postfix steps; the flag is never checked mid-step.
    pub fn evaluate(
        &self,
        rpn: &[Item],
        cancel: &AtomicBool,
    ) -> Result<Option<Value>, CalcError> {
        let mut stack: Vec<Value> = Vec::new();

        for item in rpn {
            if cancel.load(Ordering::Relaxed) {
                return Ok(None);
            }
            match item {
                Item::Literal(value) => stack.push(Value::number(*value)),
                Item::Array(array) => {
                    let value = array.value().ok_or(CalcError::InvalidEquation)?;
                    stack.push(value);
                }
                Item::Op(kind) => {
                    let result = self.apply(*kind, &mut stack)?;
                    stack.push(result);
                }
                // parentheses and commas never reach the postfix sequence
                Item::LeftParen | Item::RightParen | Item::Comma => {
                    return Err(CalcError::InvalidEquation);
                }
            }
        }

        let result = stack.pop();
        if result.is_none() {
            return Err(CalcError::UnexpectedOutputType);
        }
        if !stack.is_empty() {
            return Err(CalcError::InvalidEquation);
        }
        Ok(result)
    }

    fn apply(&self, kind: OpKind, stack: &mut Vec<Value>) -> Result<Value, CalcError> {
        match kind {
            OpKind::Add => self.binary(stack, |a, b| a + b),
            OpKind::Sub => self.binary(stack, |a, b| a - b),
            OpKind::Mul => self.binary(stack, |a, b| a * b),
            OpKind::Div => self.binary(stack, |a, b| a / b),
            OpKind::Pow => self.binary(stack, f64::powf),
            OpKind::Negative => {
                let operand = pop(stack)?;
                Ok(operand.map(|v| -v))
            }
            OpKind::Index(component) => {
                let operand = pop(stack)?;
                Ok(select_component(&operand, component))
            }
            OpKind::Call(function) => self.call(function, stack),
        }
    }

    fn call(&self, function: Function, stack: &mut Vec<Value>) -> Result<Value, CalcError> {
        match function {
            Function::Root => self.binary(stack, |x, n| x.powf(1.0 / n)),
            Function::Log => self.binary(stack, f64::log),
            Function::Abs => self.unary(stack, f64::abs),
            Function::Sqrt => self.unary(stack, f64::sqrt),
            Function::Log10 => self.unary(stack, f64::log10),
            Function::Exp => self.unary(stack, f64::exp),
            Function::Ln => self.unary(stack, f64::ln),
            Function::Floor => self.unary(stack, f64::floor),
            Function::Ceil => self.unary(stack, f64::ceil),
            Function::Sin => self.trig(stack, f64::sin),
            Function::Cos => self.trig(stack, f64::cos),
            Function::Tan => self.trig(stack, f64::tan),
            Function::Asin => self.inverse_trig(stack, f64::asin),
            Function::Acos => self.inverse_trig(stack, f64::acos),
            Function::Atan => self.inverse_trig(stack, f64::atan),
        }
    }

    fn unary(
        &self,
        stack: &mut Vec<Value>,
        f: impl Fn(f64) -> f64,
    ) -> Result<Value, CalcError> {
        let operand = pop(stack)?;
        Ok(operand.map(f))
    }

    fn trig(&self, stack: &mut Vec<Value>, f: impl Fn(f64) -> f64) -> Result<Value, CalcError> {
        let operand = pop(stack)?;
        Ok(operand.map(|v| f(self.to_radians(v))))
    }

    fn inverse_trig(
        &self,
        stack: &mut Vec<Value>,
        f: impl Fn(f64) -> f64,
    ) -> Result<Value, CalcError> {
        let operand = pop(stack)?;
        Ok(operand.map(|v| self.from_radians(f(v))))
    }

    /// Pop the right then left operand and combine them elementwise.
    fn binary(
        &self,
        stack: &mut Vec<Value>,
        f: impl Fn(f64, f64) -> f64,
    ) -> Result<Value, CalcError> {
        let right = pop(stack)?;
        let left = pop(stack)?;
        combine(&left, &right, f)
    }

    fn to_radians(&self, value: f64) -> f64 {
        match self.angle_unit {
            AngleUnit::Radians => value,
            AngleUnit::Degrees => value.to_radians(),
        }
    }

    fn from_radians(&self, value: f64) -> f64 {
        match self.angle_unit {
            AngleUnit::Radians => value,
            AngleUnit::Degrees => value.to_degrees(),
        }
    }
}

fn pop(stack: &mut Vec<Value>) -> Result<Value, CalcError> {
    stack.pop().ok_or(CalcError::InvalidEquation)
}

/// Combine two operands elementwise with scalar broadcasting.
///
/// A number is reused at every position; two array operands must share
/// their shape. The result is an array if either operand was one.
fn combine(
    left: &Value,
    right: &Value,
    f: impl Fn(f64, f64) -> f64,
) -> Result<Value, CalcError> {
    if left.kind() == ValueKind::Array
        && right.kind() == ValueKind::Array
        && (left.tuples() != right.tuples() || left.components() != right.components())
    {
        return Err(CalcError::InconsistentComponentDims(
            left.components(),
            right.components(),
        ));
    }

    let tuples = left.tuples().max(right.tuples());
    let components = if left.kind() == ValueKind::Array {
        left.components()
    } else {
        right.components()
    };
    let kind = if left.kind() == ValueKind::Array || right.kind() == ValueKind::Array {
        ValueKind::Array
    } else {
        ValueKind::Number
    };

    let mut elements = Vec::with_capacity(tuples * components);
    for tuple in 0..tuples {
        for component in 0..components {
            elements.push(f(left.get(tuple, component), right.get(tuple, component)));
        }
    }
    Ok(Value::new(elements, tuples, components, kind))
}

/// Select one component from every tuple, producing a one-component value.
fn select_component(value: &Value, component: usize) -> Value {
    let mut elements = Vec::with_capacity(value.tuples());
    for tuple in 0..value.tuples() {
        elements.push(value.get(tuple, component));
    }
    Value::new(elements, value.tuples(), 1, value.kind())
}
