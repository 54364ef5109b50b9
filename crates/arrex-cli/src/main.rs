//! Arrex CLI - expression evaluation driver

use anyhow::{Context, Result};
use arrex_eval::Expression;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "arrex")]
#[command(
    author,
    version,
    about = "Evaluate arithmetic expressions with scalar and array variables"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an expression and print the result
    Eval {
        /// Expression to evaluate, e.g. "(a+b)*A[0]"
        expression: String,

        /// Symbol value feed file, one symbol per line
        /// ("name value" or "name size (index,value) ...")
        #[arg(short, long)]
        values: Option<PathBuf>,
    },

    /// List the symbols an expression references
    Symbols {
        /// Expression to inspect
        expression: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Eval { expression, values } => eval(&expression, values.as_deref()),
        Commands::Symbols { expression } => list_symbols(&expression),
    }
}

fn eval(expression: &str, values: Option<&Path>) -> Result<()> {
    let mut expr = Expression::new(expression)
        .with_context(|| format!("Failed to parse '{expression}'"))?;

    if let Some(path) = values {
        let feed = fs::read_to_string(path)
            .with_context(|| format!("Failed to read '{}'", path.display()))?;
        expr.load_values(feed.lines())
            .with_context(|| format!("Failed to load values from '{}'", path.display()))?;
    }

    let result = expr.evaluate().context("Evaluation failed")?;
    println!("{result}");
    Ok(())
}

fn list_symbols(expression: &str) -> Result<()> {
    let expr = Expression::new(expression)
        .with_context(|| format!("Failed to parse '{expression}'"))?;
    let table = expr.table();

    let mut scalars: Vec<&str> = table.scalars().map(|(name, _)| name).collect();
    scalars.sort_unstable();
    for name in scalars {
        println!("scalar {name}");
    }

    let mut arrays: Vec<&str> = table.arrays().map(|(name, _)| name).collect();
    arrays.sort_unstable();
    for name in arrays {
        println!("array  {name}");
    }

    Ok(())
}
