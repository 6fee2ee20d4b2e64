//! Single-pass positional validation of the bound item sequence.
//!
//! Each item's contract is checked against its neighbors in one forward
//! pass: operand presence for binary operators and the unary sign,
//! argument counts and balanced argument groups for functions, component
//! ranges for indexing. The first violation aborts the pass.

use crate::ast::{Function, Item, OpKind};
use crate::error::CalcError;

/// Check every item's positional contract.
pub fn check(items: &[Item]) -> Result<(), CalcError> {
    let mut has_operand = false;

    for (i, item) in items.iter().enumerate() {
        match item {
            Item::Literal(_) | Item::Array(_) => has_operand = true,
            Item::Op(kind) => check_operator(items, i, *kind)?,
            Item::Comma => check_comma(items, i)?,
            Item::LeftParen | Item::RightParen => {}
        }
    }

    if !has_operand {
        return Err(CalcError::InvalidEquation);
    }
    Ok(())
}

fn check_operator(items: &[Item], i: usize, kind: OpKind) -> Result<(), CalcError> {
    match kind {
        OpKind::Add | OpKind::Sub | OpKind::Mul | OpKind::Div | OpKind::Pow => {
            check_binary(items, i, kind)
        }
        OpKind::Negative => check_negative(items, i),
        OpKind::Index(index) => check_index(items, i, index),
        OpKind::Call(function) => check_function(items, i, function),
    }
}

/// A binary operator must sit directly between two operands.
fn check_binary(items: &[Item], i: usize, kind: OpKind) -> Result<(), CalcError> {
    let previous = if i == 0 { None } else { items.get(i - 1) };
    match previous {
        None => return Err(CalcError::OperatorNoLeftValue(kind.text())),
        Some(previous) if previous.is_binary_op() || matches!(previous, Item::LeftParen) => {
            return Err(CalcError::OperatorNoLeftValue(kind.text()));
        }
        _ => {}
    }

    match items.get(i + 1) {
        None | Some(Item::RightParen) => Err(CalcError::OperatorNoRightValue(kind.text())),
        _ => Ok(()),
    }
}

/// A negative sign may start the expression or follow a binary operator
/// or `(`, and must be followed by something that yields a value.
fn check_negative(items: &[Item], i: usize) -> Result<(), CalcError> {
    if i > 0 {
        match &items[i - 1] {
            Item::LeftParen => {}
            previous if previous.is_binary_op() => {}
            _ => return Err(CalcError::InvalidEquation),
        }
    }

    match items.get(i + 1) {
        Some(next) if next.is_operand() => Ok(()),
        Some(Item::LeftParen | Item::Op(OpKind::Call(_))) => Ok(()),
        _ => Err(CalcError::OperatorNoRightValue("-".to_string())),
    }
}

/// A function must be followed by a balanced argument group holding
/// exactly `arity - 1` top-level commas and at least one numeric operand.
fn check_function(items: &[Item], i: usize, function: Function) -> Result<(), CalcError> {
    if i > 0 {
        match &items[i - 1] {
            Item::LeftParen | Item::Op(OpKind::Negative) => {}
            previous if previous.is_binary_op() => {}
            _ => return Err(CalcError::InvalidEquation),
        }
    }

    if !matches!(items.get(i + 1), Some(Item::LeftParen)) {
        return Err(CalcError::OperatorNoOpeningParen(function.name().to_string()));
    }

    let mut depth = 0usize;
    let mut commas = 0usize;
    let mut operands = 0usize;
    let mut closed = false;
    for item in &items[i + 1..] {
        match item {
            Item::LeftParen => depth += 1,
            Item::RightParen => {
                depth -= 1;
                if depth == 0 {
                    closed = true;
                    break;
                }
            }
            Item::Comma if depth == 1 => commas += 1,
            item if item.is_operand() => operands += 1,
            _ => {}
        }
    }

    if !closed {
        return Err(CalcError::OperatorNoClosingParen(function.name().to_string()));
    }
    let expected = function.arity() - 1;
    if commas < expected {
        return Err(CalcError::NotEnoughArguments(function.name().to_string()));
    }
    if commas > expected {
        return Err(CalcError::TooManyArguments(function.name().to_string()));
    }
    if operands == 0 {
        return Err(CalcError::NoNumericArguments(function.name().to_string()));
    }
    Ok(())
}

/// A component index must directly follow an array with enough components.
fn check_index(items: &[Item], i: usize, index: usize) -> Result<(), CalcError> {
    let previous = if i == 0 { None } else { items.get(i - 1) };
    match previous {
        Some(Item::Array(array)) => {
            if index >= array.components {
                return Err(CalcError::ComponentOutOfRange {
                    name: array.name.clone(),
                    index,
                    components: array.components,
                });
            }
            Ok(())
        }
        _ => Err(CalcError::InvalidEquation),
    }
}

/// A comma only makes sense inside some function's argument group.
fn check_comma(items: &[Item], i: usize) -> Result<(), CalcError> {
    let preceded = items[..i]
        .iter()
        .any(|item| matches!(item, Item::Op(OpKind::Call(_))));
    if !preceded {
        return Err(CalcError::NoPrecedingUnaryOperator);
    }
    Ok(())
}
