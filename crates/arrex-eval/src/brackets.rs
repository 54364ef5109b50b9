//! Bracket matching
//!
//! Validates that parentheses and square brackets pair and nest correctly,
//! and reports the matched positions in the order the recursive evaluator
//! consumes them.

use crate::error::{EvalError, EvalResult};

/// A matched opening/closing bracket correspondence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketPair {
    /// Byte offset of the opening bracket
    pub open: usize,
    /// Byte offset of the closing bracket paired with it
    pub close: usize,
}

/// Match the brackets of an expression
///
/// Openings are reported in scan order. Closings are reported per
/// balanced-to-zero group: when a group's outermost bracket closes, its
/// position is emitted, followed by the closers that occurred while nested
/// deeper, most recent first. The leading pair of every top-level group
/// therefore holds that group's true extent, which is the only pair the
/// recursive descent reads.
///
/// For example:
/// ```text
///    (a+(b-c))*(d+A[4])
/// ```
/// yields openings `[0, 3, 10, 14]` paired with closings `[8, 7, 17, 16]`.
///
/// # Errors
///
/// [`EvalError::UnbalancedBrackets`] if a closer arrives with no open
/// bracket, a closer's kind does not match the innermost open bracket, or
/// any bracket is still open at end of input.
pub fn match_brackets(expr: &str) -> EvalResult<Vec<BracketPair>> {
    let mut open_stack: Vec<(char, usize)> = Vec::new();
    let mut openings: Vec<usize> = Vec::new();
    let mut closings: Vec<usize> = Vec::new();
    // Closers seen while still nested inside an unfinished group
    let mut pending: Vec<usize> = Vec::new();

    for (pos, c) in expr.char_indices() {
        match c {
            '(' | '[' => {
                open_stack.push((c, pos));
                openings.push(pos);
            }
            ')' | ']' => {
                let opener = if c == ')' { '(' } else { '[' };
                match open_stack.last() {
                    Some(&(top, _)) if top == opener => {
                        open_stack.pop();
                        if open_stack.is_empty() {
                            // Outermost bracket of a balanced group just
                            // closed: emit it, then drain the inner closers
                            // most-recently-seen first.
                            closings.push(pos);
                            while let Some(inner) = pending.pop() {
                                closings.push(inner);
                            }
                        } else {
                            pending.push(pos);
                        }
                    }
                    _ => return Err(EvalError::UnbalancedBrackets(pos)),
                }
            }
            _ => {}
        }
    }

    if let Some(&(_, pos)) = open_stack.first() {
        return Err(EvalError::UnbalancedBrackets(pos));
    }

    Ok(openings
        .into_iter()
        .zip(closings)
        .map(|(open, close)| BracketPair { open, close })
        .collect())
}
