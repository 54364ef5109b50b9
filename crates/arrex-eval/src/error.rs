//! Evaluation error types

use thiserror::Error;

/// Result type for expression evaluation
pub type EvalResult<T> = std::result::Result<T, EvalError>;

/// Errors that can occur while parsing or evaluating an expression
#[derive(Debug, Error)]
pub enum EvalError {
    /// Brackets do not pair or nest correctly
    #[error("Unbalanced brackets at position {0}")]
    UnbalancedBrackets(usize),

    /// A value feed line cannot be parsed
    #[error("Malformed value line: {0}")]
    MalformedValueLine(String),

    /// Operator/operand mismatch in postfix evaluation
    #[error("Malformed postfix sequence: {0}")]
    MalformedPostfix(String),

    /// A literal failed to parse as a number
    #[error("Invalid numeric literal: {0}")]
    NumericParse(String),

    /// Symbol table lookup failure (unknown name or out-of-range subscript)
    #[error(transparent)]
    Symbol(#[from] arrex_core::Error),
}
