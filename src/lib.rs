//! anise - an infix expression calculator over named numeric data arrays.
//!
//! An expression such as `sin(Intensity) * 2 + Area[1]` references arrays
//! by name and produces one new array, evaluated element-by-element with
//! broadcasting between scalars and arrays. The expression is scanned,
//! bound against the available arrays, validity-checked, and compiled to
//! postfix form; a stack machine then executes the postfix sequence.
//!
//! ```
//! use std::sync::atomic::AtomicBool;
//! use anise::{compile_and_evaluate, AngleUnit, ArrayMap};
//!
//! let mut arrays = ArrayMap::new();
//! arrays.insert_scalar("Intensity", vec![1.0, 2.0, 3.0]);
//!
//! let cancel = AtomicBool::new(false);
//! let output = compile_and_evaluate("Intensity * 2 + 1", &arrays, AngleUnit::Radians, &cancel)
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(output.value.elements(), &[3.0, 5.0, 7.0]);
//! ```

pub mod ast;
pub mod binder;
pub mod calculator;
#[cfg(feature = "cli")]
pub mod cli;
pub mod compiler;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod store;
pub mod validate;
pub mod value;

pub use ast::{ArrayRef, Function, Item, OpKind, Token};
pub use binder::Binder;
pub use calculator::{Calculator, Output, Preflight, compile_and_evaluate};
pub use error::{CalcError, Warning};
pub use evaluator::{AngleUnit, Evaluator};
pub use lexer::Lexer;
pub use store::{ArrayMap, ArrayStore};
pub use value::{Value, ValueKind};
