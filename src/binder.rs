//! Binding of raw tokens to typed calculator items.
//!
//! The binder resolves each token against the symbol table and the set of
//! available arrays, disambiguates `-` between subtraction and the unary
//! negative sign, and wraps finished comma-separated function arguments
//! in virtual parentheses so the compiler treats each argument as one
//! grouped sub-expression.

use crate::ast::{ArrayRef, Item, OpKind, Token, operators};
use crate::error::{CalcError, Warning};
use crate::store::ArrayStore;

pub struct Binder<'a> {
    store: &'a dyn ArrayStore,
    /// Whether array element buffers are filled in. A validation-only
    /// pass binds shapes without reading element data.
    allocate: bool,
}

impl<'a> Binder<'a> {
    pub fn new(store: &'a dyn ArrayStore, allocate: bool) -> Self {
        Binder { store, allocate }
    }

    /// Bind every token, in order, into an item sequence.
    ///
    /// All array references must agree on their tuple count; this is
    /// checked incrementally against the first bound array.
    pub fn bind(&self, tokens: &[Token]) -> Result<(Vec<Item>, Vec<Warning>), CalcError> {
        let mut items: Vec<Item> = Vec::new();
        let mut warnings: Vec<Warning> = Vec::new();
        let mut first_array: Option<(String, usize)> = None;

        for token in tokens {
            match token {
                Token::Number(text) => {
                    // A number that collides with an array name stays a
                    // number; quoting is the escape hatch.
                    if self.store.contains(text) {
                        warnings.push(Warning::AmbiguousName(text.clone()));
                    }
                    let value = text
                        .parse::<f64>()
                        .map_err(|_| CalcError::UnrecognizedItem(text.clone()))?;
                    items.push(Item::Literal(value));
                }
                Token::Index(index) => {
                    items.push(Item::Op(OpKind::Index(*index)));
                }
                Token::Quoted(name) => {
                    items.push(self.bind_array(name, &mut first_array)?);
                }
                Token::Word(word) => {
                    if let Some(item) = operators::lookup(word) {
                        if self.store.contains(word) {
                            warnings.push(Warning::AmbiguousName(word.clone()));
                        }
                        items.push(item);
                    } else if self.store.contains(word) {
                        items.push(self.bind_array(word, &mut first_array)?);
                    } else {
                        return Err(CalcError::InvalidArrayName(word.clone()));
                    }
                }
                Token::Symbol(ch) => {
                    let text = ch.to_string();
                    if self.store.contains(&text) {
                        warnings.push(Warning::AmbiguousName(text.clone()));
                    }
                    if *ch == '-' {
                        items.push(Item::Op(Self::bind_minus(&items)));
                    } else if *ch == ',' {
                        Self::group_argument(&mut items);
                        items.push(Item::Comma);
                    } else if let Some(item) = operators::lookup(&text) {
                        items.push(item);
                    } else {
                        return Err(CalcError::UnrecognizedItem(text));
                    }
                }
            }
        }

        Ok((items, warnings))
    }

    /// Disambiguate `-` by context: a unary negative sign when it starts
    /// the expression or follows a binary operator or `(`, a subtraction
    /// otherwise.
    fn bind_minus(items: &[Item]) -> OpKind {
        let negative = match items.last() {
            None => true,
            Some(Item::LeftParen) => true,
            Some(previous) => previous.is_binary_op(),
        };
        if negative { OpKind::Negative } else { OpKind::Sub }
    }

    fn bind_array(
        &self,
        name: &str,
        first_array: &mut Option<(String, usize)>,
    ) -> Result<Item, CalcError> {
        let (tuples, components) = self
            .store
            .shape(name)
            .ok_or_else(|| CalcError::InvalidArrayName(name.to_string()))?;

        match first_array {
            None => *first_array = Some((name.to_string(), tuples)),
            Some((first_name, first_tuples)) => {
                if tuples != *first_tuples {
                    return Err(CalcError::InconsistentTuples {
                        first: first_name.clone(),
                        second: name.to_string(),
                    });
                }
            }
        }

        let elements = if self.allocate {
            let mut elements = Vec::with_capacity(tuples * components);
            for index in 0..tuples * components {
                let value = self
                    .store
                    .value(name, index)
                    .ok_or_else(|| CalcError::InvalidArrayName(name.to_string()))?;
                elements.push(value);
            }
            Some(elements)
        } else {
            None
        };

        Ok(Item::Array(ArrayRef {
            name: name.to_string(),
            tuples,
            components,
            elements,
        }))
    }

    /// Wrap the argument that just finished, back to the nearest unmatched
    /// `(` or a sibling comma, in virtual parentheses. Each comma-separated
    /// argument then compiles as one grouped sub-expression, which keeps
    /// `root(4*4, 2*3)` from mixing its two arguments.
    fn group_argument(items: &mut Vec<Item>) {
        let mut depth = 0usize;
        let mut insert_at = None;
        for (index, item) in items.iter().enumerate().rev() {
            match item {
                Item::RightParen => depth += 1,
                Item::LeftParen => {
                    if depth == 0 {
                        insert_at = Some(index + 1);
                        break;
                    }
                    depth -= 1;
                }
                Item::Comma if depth == 0 => {
                    insert_at = Some(index + 1);
                    break;
                }
                _ => {}
            }
        }

        // a comma outside any parentheses is left for the validity checker
        if let Some(index) = insert_at {
            items.insert(index, Item::LeftParen);
            items.push(Item::RightParen);
        }
    }
}
