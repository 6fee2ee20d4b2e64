use crate::ast::operators::OpKind;
use crate::value::Value;

/// A bound reference to an array available to the expression.
///
/// The shape is captured at bind time. The element buffer is only filled
/// when binding was asked to allocate (evaluation); a validation-only
/// pass binds shapes without reading any element data.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayRef {
    pub name: String,
    pub tuples: usize,
    pub components: usize,
    pub elements: Option<Vec<f64>>,
}

impl ArrayRef {
    /// The runtime value for this reference, if elements were allocated.
    pub fn value(&self) -> Option<Value> {
        self.elements
            .as_ref()
            .map(|elements| Value::array(elements.clone(), self.tuples, self.components))
    }
}

/// One bound item of the infix sequence.
///
/// Items are created fresh for each compile from the symbol table and the
/// bound arrays; they do not outlive one compile/evaluate cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// A numeric constant; always a one-tuple, one-component number
    Literal(f64),
    /// A reference to an existing array
    Array(ArrayRef),
    LeftParen,
    RightParen,
    Comma,
    /// An arithmetic operator, unary sign, component index, or function
    Op(OpKind),
}

impl Item {
    /// Whether this item supplies a value (a literal or a bound array).
    pub fn is_operand(&self) -> bool {
        matches!(self, Item::Literal(_) | Item::Array(_))
    }

    /// Whether this item is an infix binary arithmetic operator.
    pub fn is_binary_op(&self) -> bool {
        matches!(self, Item::Op(kind) if kind.is_binary())
    }
}
