//! Infix-to-postfix compilation (shunting-yard).
//!
//! The validated item sequence is flattened into postfix (RPN) order so
//! the evaluator can run it with a plain value stack. Commas carry no
//! information at this point; the binder already grouped each function
//! argument in virtual parentheses.

use crate::ast::{Item, OpKind};
use crate::error::CalcError;

/// Transform a bound infix sequence into postfix order.
pub fn to_rpn(items: Vec<Item>) -> Result<Vec<Item>, CalcError> {
    check_indexing(&items)?;

    let mut stack: Vec<Item> = Vec::new();
    let mut output: Vec<Item> = Vec::new();

    for item in items {
        match item {
            Item::Literal(_) | Item::Array(_) => output.push(item),
            Item::LeftParen => stack.push(item),
            Item::RightParen => loop {
                match stack.pop() {
                    Some(Item::LeftParen) => break,
                    Some(operator) => output.push(operator),
                    None => return Err(CalcError::MismatchedParentheses),
                }
            },
            Item::Comma => {}
            Item::Op(incoming) => {
                while let Some(&Item::Op(top)) = stack.last() {
                    if top.precedence() < incoming.precedence() {
                        break;
                    }
                    stack.pop();
                    output.push(Item::Op(top));
                }
                stack.push(Item::Op(incoming));
            }
        }
    }

    while let Some(item) = stack.pop() {
        if matches!(item, Item::LeftParen) {
            return Err(CalcError::MismatchedParentheses);
        }
        output.push(item);
    }

    Ok(output)
}

/// If any array operand is component-indexed, every array operand in the
/// expression must be.
fn check_indexing(items: &[Item]) -> Result<(), CalcError> {
    let any_indexed = items
        .windows(2)
        .any(|pair| matches!(pair, [Item::Array(_), Item::Op(OpKind::Index(_))]));
    if !any_indexed {
        return Ok(());
    }

    for (i, item) in items.iter().enumerate() {
        if let Item::Array(array) = item {
            let indexed = matches!(items.get(i + 1), Some(Item::Op(OpKind::Index(_))));
            if !indexed {
                return Err(CalcError::InconsistentIndexing(array.name.clone()));
            }
        }
    }
    Ok(())
}
