use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use super::formula::Formula;

/// Reads a problem file: N M K followed by M rows of K signed literals,
/// all whitespace-separated.
pub fn load_formula(path: impl AsRef<Path>) -> Result<Formula> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot open input file {}", path.display()))?;
    parse_formula(&text)
}

pub fn parse_formula(text: &str) -> Result<Formula> {
    let mut tokens = text.split_whitespace();

    let num_vars = next_int(&mut tokens, "the number of propositions")?;
    if num_vars < 1 {
        bail!("small number of propositions: {num_vars}");
    }
    if num_vars > i64::from(u32::MAX) {
        bail!("too many propositions: {num_vars}");
    }
    let num_clauses = next_int(&mut tokens, "the number of sentences")?;
    if num_clauses < 1 {
        bail!("low number of sentences: {num_clauses}");
    }
    let width = next_int(&mut tokens, "the number of propositions per sentence")?;
    if width < 2 {
        bail!("low number of propositions per sentence: {width}");
    }

    let table_len = num_clauses
        .checked_mul(width)
        .and_then(|len| usize::try_from(len).ok())
        .with_context(|| format!("problem size {num_clauses}x{width} is too large"))?;
    let mut values = Vec::with_capacity(table_len);
    for i in 0..num_clauses {
        for j in 0..width {
            let what = format!("the #{} proposition of the #{} sentence", j + 1, i + 1);
            values.push(next_int(&mut tokens, &what)?);
        }
    }

    Ok(Formula::new(num_vars as u32, width as usize, &values)?)
}

fn next_int<'a>(tokens: &mut impl Iterator<Item = &'a str>, what: &str) -> Result<i64> {
    let Some(token) = tokens.next() else {
        bail!("cannot read {what}: input ended early");
    };
    token
        .parse()
        .with_context(|| format!("cannot read {what}: '{token}' is not an integer"))
}

/// Writes a model as N whitespace-separated values, 1 for true and -1 for
/// false, in variable-index order.
pub fn write_assignment(path: impl AsRef<Path>, assignment: &[bool]) -> Result<()> {
    let path = path.as_ref();
    let text = assignment
        .iter()
        .map(|&value| if value { "1" } else { "-1" })
        .collect::<Vec<_>>()
        .join(" ");
    fs::write(path, text + "\n")
        .with_context(|| format!("cannot open output file {}", path.display()))?;
    Ok(())
}
