//! Expression lifecycle
//!
//! [`Expression`] ties the pipeline stages to the order they must run in:
//! construction validates brackets and discovers symbols, value loading
//! populates the table, and evaluation reads it without mutating anything.

use arrex_core::SymbolTable;

use crate::brackets::match_brackets;
use crate::error::EvalResult;
use crate::evaluator;
use crate::extract::extract_symbols;
use crate::loader::load_symbol_values;

/// An expression string together with the symbol table derived from it
#[derive(Debug, Clone)]
pub struct Expression {
    text: String,
    table: SymbolTable,
}

impl Expression {
    /// Parse an expression: validate its brackets and discover its symbols
    ///
    /// # Errors
    ///
    /// [`crate::EvalError::UnbalancedBrackets`] if `()`/`[]` do not pair
    /// and nest correctly; an invalid expression never reaches evaluation.
    pub fn new<S: Into<String>>(text: S) -> EvalResult<Self> {
        let text = text.into();
        match_brackets(&text)?;
        let table = extract_symbols(&text);
        Ok(Self { text, table })
    }

    /// The source text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The discovered symbols and their current values
    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    /// Mutable access to the table, for assigning values directly
    pub fn table_mut(&mut self) -> &mut SymbolTable {
        &mut self.table
    }

    /// Load symbol values from a line feed (see [`load_symbol_values`])
    pub fn load_values<I, S>(&mut self, lines: I) -> EvalResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        load_symbol_values(lines, &mut self.table)
    }

    /// Evaluate the expression against the loaded values
    pub fn evaluate(&self) -> EvalResult<f64> {
        evaluator::evaluate(&self.text, &self.table)
    }
}
