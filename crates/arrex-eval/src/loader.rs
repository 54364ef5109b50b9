//! Symbol value loading
//!
//! Parses the line-oriented value feed and assigns values into a symbol
//! table that has already been populated by symbol discovery.
//!
//! Feed format, one symbol per line:
//! ```text
//! <name> <value>                          scalar assignment
//! <name> <size> (index,value) ...         array declaration and elements
//! ```

use arrex_core::SymbolTable;

use crate::error::{EvalError, EvalResult};

/// Load symbol values from a line feed into an existing table
///
/// Lines naming a symbol the table never discovered are skipped without
/// error and without creating a symbol: the feed may describe more symbols
/// than the expression uses. Blank lines are skipped as well.
///
/// # Errors
///
/// [`EvalError::MalformedValueLine`] if a line for a known symbol cannot be
/// parsed; `IndexOutOfRange` (via [`EvalError::Symbol`]) if an element pair
/// indexes at or beyond the declared size.
pub fn load_symbol_values<I, S>(lines: I, table: &mut SymbolTable) -> EvalResult<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for line in lines {
        load_line(line.as_ref().trim(), table)?;
    }
    Ok(())
}

fn load_line(line: &str, table: &mut SymbolTable) -> EvalResult<()> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, rest)) = tokens.split_first() else {
        return Ok(());
    };

    // Tolerant feed: a name the expression never referenced is skipped
    // before anything else is parsed.
    if !table.contains(name) {
        log::debug!("Skipping value line for undiscovered symbol '{name}'");
        return Ok(());
    }

    if rest.len() == 1 && table.contains_scalar(name) {
        let value: f64 = rest[0]
            .parse()
            .map_err(|_| EvalError::MalformedValueLine(line.to_string()))?;
        table.set_scalar(name, value);
        return Ok(());
    }

    // Array line: declared size, then (index,value) pairs.
    if !table.contains_array(name) {
        return Err(EvalError::MalformedValueLine(line.to_string()));
    }
    let Some((&size_token, pairs)) = rest.split_first() else {
        return Err(EvalError::MalformedValueLine(line.to_string()));
    };
    let size: usize = size_token
        .parse()
        .map_err(|_| EvalError::MalformedValueLine(line.to_string()))?;
    table.allocate_array(name, size);

    for pair in pairs {
        let (index, value) =
            parse_pair(pair).ok_or_else(|| EvalError::MalformedValueLine(line.to_string()))?;
        table.set_element(name, index, value)?;
    }
    Ok(())
}

/// Parse one `(index,value)` pair
fn parse_pair(token: &str) -> Option<(usize, f64)> {
    let inner = token.strip_prefix('(')?.strip_suffix(')')?;
    let (index, value) = inner.split_once(',')?;
    Some((index.trim().parse().ok()?, value.trim().parse().ok()?))
}
