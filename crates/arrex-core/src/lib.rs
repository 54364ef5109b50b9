//! # arrex-core
//!
//! Core data structures for the arrex expression evaluator.
//!
//! This crate provides the symbol table shared by the evaluation pipeline:
//! - [`SymbolTable`] - scalar and array variables with their current values
//! - [`Error`] - table-level contract violations (unknown names,
//!   out-of-range subscripts)
//!
//! ## Example
//!
//! ```rust
//! use arrex_core::SymbolTable;
//!
//! let mut table = SymbolTable::new();
//! table.insert_scalar("a");
//! table.insert_array("A");
//!
//! table.set_scalar("a", 2.0);
//! table.allocate_array("A", 3);
//! table.set_element("A", 0, 10.0).unwrap();
//!
//! assert_eq!(table.scalar("a"), Some(2.0));
//! assert_eq!(table.element("A", 0).unwrap(), 10.0);
//! ```

pub mod error;
pub mod symbol;

pub use error::{Error, Result};
pub use symbol::SymbolTable;
