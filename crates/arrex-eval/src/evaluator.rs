//! Recursive expression evaluation
//!
//! Resolves nested parenthetical and bracketed subexpressions by recursion:
//! the first bracket group of the current string is evaluated, its computed
//! value is spliced back into the surrounding text, and the process repeats
//! until a bracket-free residue remains. The residue goes through variable
//! substitution and then the postfix pipeline.

use arrex_core::SymbolTable;

use crate::brackets::match_brackets;
use crate::error::{EvalError, EvalResult};
use crate::postfix::{evaluate_postfix, infix_to_postfix};

/// Evaluate an expression against a populated symbol table
///
/// The table is read but never mutated; symbols must already be discovered
/// and their values loaded. Brackets are validated before descent, so an
/// unbalanced expression fails with `UnbalancedBrackets` and never reaches
/// arithmetic.
///
/// Array subscripts may themselves be full expressions; a subscript's value
/// is floored to an integer index, and an index outside the array's
/// allocated storage is an `IndexOutOfRange` error.
pub fn evaluate(expr: &str, table: &SymbolTable) -> EvalResult<f64> {
    match_brackets(expr)?;
    evaluate_nested(expr, table)
}

/// One recursion step over the first bracket group
fn evaluate_nested(expr: &str, table: &SymbolTable) -> EvalResult<f64> {
    let last_pos = expr.char_indices().next_back().map(|(i, _)| i);

    for (i, c) in expr.char_indices() {
        if (c != '(' && c != '[') || Some(i) == last_pos {
            continue;
        }
        // The first bracket character opens the leading top-level group;
        // its extent is the leading pair reported by the matcher.
        let close = match_brackets(expr)?[0].close;
        let inner = evaluate_nested(&expr[i + 1..close], table)?;

        if c == '(' {
            let before = &expr[..i];
            let after = &expr[close + 1..];
            let spliced = format!("{before}{}{after}", format_number(inner));
            return if after.trim().chars().count() > 1 {
                evaluate_nested(&spliced, table)
            } else {
                base_evaluate(&spliced, table)
            };
        }

        // Square brackets: the interior is a subscript. Floor it to an
        // integer index and splice it back between the retained brackets so
        // the array name stays attached for substitution.
        let index = inner.floor() as i64;
        let before = &expr[..=i];
        let after = &expr[close..];
        return if after.trim().chars().count() > 1 {
            // Trailing content remains: collapse the prefix through the
            // closer (resolving the array access) and keep reducing.
            let collapsed = base_evaluate(&format!("{before}{index}]"), table)?;
            let rest = &expr[close + 1..];
            evaluate_nested(&format!("{}{rest}", format_number(collapsed)), table)
        } else {
            base_evaluate(&format!("{before}{index}{after}"), table)
        };
    }

    base_evaluate(expr, table)
}

/// Substitute variables and hand the literal-only residue to the postfix
/// pipeline
///
/// Walks the bracket-free string once. Non-alphabetic characters are copied
/// verbatim (stray `(` and `)` are dropped; they can only be structural
/// leftovers at this stage). A maximal alphabetic run is looked up as a
/// scalar first, then as an array. An array's subscript is the single
/// literal decimal digit following the name, honoring a `-` immediately
/// before it so a spliced negative subscript reaches the bounds check; the
/// scan then skips past the access's closing `]`.
fn base_evaluate(expr: &str, table: &SymbolTable) -> EvalResult<f64> {
    let chars: Vec<char> = expr.trim().chars().collect();
    let mut literal = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == '(' || c == ')' {
            i += 1;
            continue;
        }
        if !c.is_alphabetic() {
            literal.push(c);
            i += 1;
            continue;
        }

        let start = i;
        while i + 1 < chars.len() && chars[i + 1].is_alphabetic() {
            i += 1;
        }
        let name: String = chars[start..=i].iter().collect();

        if let Some(value) = table.scalar(&name) {
            literal.push_str(&format_number(value));
        } else if table.contains_array(&name) {
            let (index, digit_pos) = scan_subscript(&chars, i + 1, &name)?;
            let value = table.element(&name, index)?;
            literal.push_str(&format_number(value));

            // Resume past the closing bracket of this access.
            let mut j = digit_pos;
            while j < chars.len() && chars[j] != ']' {
                j += 1;
            }
            i = j;
        } else {
            return Err(arrex_core::Error::UnknownSymbol(name).into());
        }
        i += 1;
    }

    evaluate_postfix(&infix_to_postfix(&literal)?)
}

/// Read the single-decimal-digit subscript following an array name
///
/// Returns the index and the digit's position. Subscripts wider than one
/// digit are outside the supported input alphabet; the recursive descent
/// has already reduced any subscript expression to a literal by the time it
/// gets here.
fn scan_subscript(chars: &[char], from: usize, name: &str) -> EvalResult<(i64, usize)> {
    let mut j = from;
    while j < chars.len() {
        if let Some(digit) = chars[j].to_digit(10) {
            let negative = j > from && chars[j - 1] == '-';
            let index = if negative { -(digit as i64) } else { digit as i64 };
            return Ok((index, j));
        }
        j += 1;
    }
    Err(EvalError::NumericParse(format!(
        "missing subscript for array '{name}'"
    )))
}

/// Format a value so the arithmetic pipeline can re-read it
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::extract::extract_symbols;
    use crate::loader::load_symbol_values;

    fn eval(expr: &str, feed: &[&str]) -> EvalResult<f64> {
        let mut table = extract_symbols(expr);
        load_symbol_values(feed, &mut table)?;
        evaluate(expr, &table)
    }

    #[test]
    fn test_constant_expression() {
        assert_eq!(eval("3", &[]).unwrap(), 3.0);
        assert_eq!(eval("2+3*4", &[]).unwrap(), 14.0);
        assert_eq!(eval("(2+3)*4", &[]).unwrap(), 20.0);
    }

    #[test]
    fn test_scalar_substitution() {
        assert_eq!(eval("a+b", &["a 2", "b 3"]).unwrap(), 5.0);
        assert_eq!(eval("(a+b)", &["a 2", "b 3"]).unwrap(), 5.0);
    }

    #[test]
    fn test_fractional_scalar() {
        assert_eq!(eval("a*2", &["a 1.25"]).unwrap(), 2.5);
    }

    #[test]
    fn test_nested_parentheses() {
        assert_eq!(eval("((2+3))", &[]).unwrap(), 5.0);
        assert_eq!(eval("(a+(b-c))*2", &["a 1", "b 5", "c 2"]).unwrap(), 8.0);
    }

    #[test]
    fn test_array_access() {
        assert_eq!(eval("A[0]", &["A 2 (0,10) (1,20)"]).unwrap(), 10.0);
        assert_eq!(eval("A[1]+5", &["A 2 (0,10) (1,20)"]).unwrap(), 25.0);
    }

    #[test]
    fn test_subscript_expression() {
        assert_eq!(eval("A[1+1]", &["A 3 (2,30)"]).unwrap(), 30.0);
    }

    #[test]
    fn test_nested_subscripts() {
        let feed = ["B 1 (0,1)", "A 2 (0,10) (1,20)"];
        assert_eq!(eval("A[B[0]]", &feed).unwrap(), 20.0);
    }

    #[test]
    fn test_subscript_value_is_floored() {
        // B[0] = 1.9 selects element 1, never element 2
        let feed = ["B 1 (0,1.9)", "A 3 (1,20) (2,99)"];
        assert_eq!(eval("A[B[0]]", &feed).unwrap(), 20.0);
    }

    #[test]
    fn test_parenthesized_subscript() {
        assert_eq!(eval("A[(1+1)]", &["A 3 (2,7)"]).unwrap(), 7.0);
    }

    #[test]
    fn test_leading_unary_minus() {
        assert_eq!(eval("-5+3", &[]).unwrap(), -2.0);
    }

    #[test]
    fn test_unbalanced_rejected() {
        assert!(matches!(
            eval("(a+b", &["a 2", "b 3"]),
            Err(EvalError::UnbalancedBrackets(_))
        ));
        assert!(matches!(
            eval("a+b)", &["a 2", "b 3"]),
            Err(EvalError::UnbalancedBrackets(_))
        ));
    }

    #[test]
    fn test_unknown_symbol() {
        let table = SymbolTable::new();
        assert!(matches!(
            evaluate("x+1", &table),
            Err(EvalError::Symbol(arrex_core::Error::UnknownSymbol(_)))
        ));
    }

    #[test]
    fn test_subscript_out_of_range() {
        assert!(matches!(
            eval("A[5]", &["A 2 (0,1) (1,2)"]),
            Err(EvalError::Symbol(arrex_core::Error::IndexOutOfRange {
                index: 5,
                ..
            }))
        ));
    }

    #[test]
    fn test_negative_subscript_out_of_range() {
        assert!(matches!(
            eval("A[0-1]", &["A 2 (0,1) (1,2)"]),
            Err(EvalError::Symbol(arrex_core::Error::IndexOutOfRange {
                index: -1,
                ..
            }))
        ));
    }

    #[test]
    fn test_unsized_array_access_fails() {
        assert!(matches!(
            eval("A[0]", &[]),
            Err(EvalError::Symbol(arrex_core::Error::IndexOutOfRange {
                len: 0,
                ..
            }))
        ));
    }

    #[test]
    fn test_scalar_before_array_lookup() {
        // "x" names both a scalar and an array; the scalar wins.
        let mut table = extract_symbols("x+x[0]");
        load_symbol_values(["x 7"], &mut table).unwrap();
        assert_eq!(table.scalar("x"), Some(7.0));
    }

    #[test]
    fn test_whitespace_tolerated() {
        assert_eq!(eval(" ( a + b ) * 2 ", &["a 2", "b 3"]).unwrap(), 10.0);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.0), "0");
    }
}
