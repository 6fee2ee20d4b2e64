//! # Item model for infix expressions
//!
//! An expression moves through two representations before it is compiled:
//!
//! - **[tokens]** - textual tokens produced by the scanner
//! - **[items]** - typed items, bound against the symbol table and the
//!   set of available arrays
//! - **[operators]** - the fixed operator vocabulary with its precedence
//!   and arity contracts, and the symbol table lookup
//!
//! The bound item sequence is checked by the validity pass, compiled to
//! postfix form, and executed by the evaluator.
//!
//! ## Core Concepts
//!
//! ### Binding
//!
//! Tokens carry only text. The binder turns each one into an [`Item`],
//! resolving words against the symbol table first and the available
//! arrays second, and disambiguating `-` between subtraction and the
//! unary negative sign by looking at the previously bound item.
//!
//! ### Operator contracts
//!
//! Every [`OpKind`] knows its own precedence and arity. Precedence drives
//! the infix-to-postfix compiler; arity tells the evaluator how many
//! values to pop.

pub mod items;
pub mod operators;
pub mod tokens;

pub use items::{ArrayRef, Item};
pub use operators::{Function, OpKind};
pub use tokens::Token;
