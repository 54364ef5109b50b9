//! # arrex-eval
//!
//! Recursive evaluator for arithmetic expressions with scalar variables and
//! one-dimensional array subscripts.
//!
//! This crate provides the full pipeline:
//! - Bracket matching and validation (`()` and `[]`, arbitrarily nested)
//! - Symbol discovery (expression text → [`SymbolTable`])
//! - Value loading (line-oriented feed → table values)
//! - Recursive evaluation (nested groups and subscripts → one `f64`)
//!
//! ## Example
//!
//! ```rust
//! use arrex_eval::Expression;
//!
//! let mut expr = Expression::new("(a+b)*A[0]").unwrap();
//! expr.load_values(["a 2", "b 3", "A 1 (0,4)"]).unwrap();
//! assert_eq!(expr.evaluate().unwrap(), 20.0);
//! ```

pub mod brackets;
pub mod error;
pub mod evaluator;
pub mod expression;
pub mod extract;
pub mod loader;
pub mod postfix;

pub use arrex_core::{Error as SymbolError, SymbolTable};
pub use brackets::{match_brackets, BracketPair};
pub use error::{EvalError, EvalResult};
pub use evaluator::evaluate;
pub use expression::Expression;
pub use extract::extract_symbols;
pub use loader::load_symbol_values;
pub use postfix::{evaluate_postfix, infix_to_postfix, BinaryOperator, Token};
