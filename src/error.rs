use std::fmt;

use thiserror::Error;

/// Errors produced while compiling or evaluating an expression.
///
/// Every stage (scanner, binder, validity checker, compiler, evaluator)
/// returns the first error it encounters and the remaining stages are
/// skipped. None of these are retried; the caller decides how to present
/// them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// The trimmed expression contained no tokens
    #[error("the expression is empty")]
    EmptyExpression,

    /// A token matched neither a number, a keyword, nor an array name
    #[error("an unrecognized item \"{0}\" was found in the expression")]
    UnrecognizedItem(String),

    /// An identifier did not resolve to an available array
    #[error("\"{0}\" is not the name of an available array")]
    InvalidArrayName(String),

    /// Two referenced arrays disagree on their tuple count
    #[error("arrays \"{first}\" and \"{second}\" have an inconsistent number of tuples")]
    InconsistentTuples { first: String, second: String },

    /// Two array operands with different component counts were combined
    #[error("arrays with {0} and {1} components cannot be combined")]
    InconsistentComponentDims(usize, usize),

    /// Some array operands are component-indexed and some are not
    #[error("array \"{0}\" must use component indexing because another array in the expression does")]
    InconsistentIndexing(String),

    /// A component index is `>=` the components of the array it follows
    #[error("component index {index} is out of range for array \"{name}\" with {components} components")]
    ComponentOutOfRange {
        name: String,
        index: usize,
        components: usize,
    },

    /// A binary operator is not preceded by an operand
    #[error("the operator \"{0}\" has no left value")]
    OperatorNoLeftValue(String),

    /// A binary operator (or unary sign) is not followed by an operand
    #[error("the operator \"{0}\" has no right value")]
    OperatorNoRightValue(String),

    /// A function is not immediately followed by `(`
    #[error("the function \"{0}\" is missing its opening parenthesis")]
    OperatorNoOpeningParen(String),

    /// A function's argument list is never closed
    #[error("the function \"{0}\" is missing its closing parenthesis")]
    OperatorNoClosingParen(String),

    /// A function received fewer comma-separated arguments than its arity
    #[error("the function \"{0}\" does not have enough arguments")]
    NotEnoughArguments(String),

    /// A function received more comma-separated arguments than its arity
    #[error("the function \"{0}\" has too many arguments")]
    TooManyArguments(String),

    /// A function's argument span contains no literal or array
    #[error("the function \"{0}\" has no numeric arguments")]
    NoNumericArguments(String),

    /// A comma appears with no function anywhere before it
    #[error("a comma is not preceded by a function")]
    NoPrecedingUnaryOperator,

    #[error("one or more parentheses are mismatched")]
    MismatchedParentheses,

    /// Catch-all for a sequence that cannot be evaluated as one equation
    #[error("the expression is not a valid equation")]
    InvalidEquation,

    /// Evaluation finished without leaving a result on the stack
    #[error("the expression did not produce an output value")]
    UnexpectedOutputType,

    /// The declared target tuple count does not match the expression's
    #[error("the target array has {target} tuples but the expression produces {actual}")]
    IncorrectTupleCount { target: usize, actual: usize },
}

/// Non-fatal findings surfaced alongside a successful compilation or
/// evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    /// A token matched both the keyword vocabulary (or a number) and an
    /// array name; the keyword/number interpretation won
    AmbiguousName(String),

    /// No array operand has more than one tuple, so the result is a
    /// numeric value stored in a one-tuple array
    NumericResultSingleTuple,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::AmbiguousName(name) => write!(
                f,
                "\"{}\" is also the name of an array; quote it to use the array instead",
                name
            ),
            Warning::NumericResultSingleTuple => write!(
                f,
                "the result is a numeric value, not an array; it will be stored in an array with one tuple"
            ),
        }
    }
}
