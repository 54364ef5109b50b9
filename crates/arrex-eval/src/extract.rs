//! Symbol discovery
//!
//! One scan of an expression string that records every distinct variable
//! name it references, classified as scalar or array.

use arrex_core::SymbolTable;

/// Characters that end a token without marking it as an array name
fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, '*' | '+' | '-' | '/' | '(' | ')' | ']')
}

/// Discover the symbols an expression references
///
/// Tokens are runs of non-delimiter characters; a token ended by `[` is an
/// array name, any other token is a scalar candidate. Tokens that do not
/// begin with an alphabetic character are numeric literals, not variables,
/// and are discarded. Each distinct name is recorded exactly once no matter
/// how often it occurs, scalars initialized to zero and arrays left
/// unallocated until the value feed declares their size.
pub fn extract_symbols(expr: &str) -> SymbolTable {
    let mut table = SymbolTable::new();
    let mut token = String::new();

    for c in expr.chars() {
        if c == '[' {
            record(&mut table, &token, true);
            token.clear();
        } else if is_delimiter(c) {
            record(&mut table, &token, false);
            token.clear();
        } else {
            token.push(c);
        }
    }
    record(&mut table, &token, false);

    table
}

fn record(table: &mut SymbolTable, token: &str, is_array: bool) {
    let starts_alphabetic = token.chars().next().is_some_and(char::is_alphabetic);
    if !starts_alphabetic {
        return;
    }
    if is_array {
        table.insert_array(token);
    } else {
        table.insert_scalar(token);
    }
}
