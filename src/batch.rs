//! Tab-delimited record reader feeding named expressions into the compiler.
//!
//! Each line holds two columns: a label and an expression. This is pure
//! I/O glue around the core pipeline; a failed record does not stop the
//! batch, the caller simply moves on to the next one.

use std::io::{self, BufRead};

/// Iterate `(label, expression)` pairs from a two-column tab-delimited
/// reader.
///
/// Blank lines are skipped. A line without a tab yields an `InvalidData`
/// error item; iteration continues afterwards.
pub fn records<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<(String, String)>> {
    reader.lines().filter_map(|line| match line {
        Ok(line) if line.trim().is_empty() => None,
        Ok(line) => Some(match line.split_once('\t') {
            Some((label, expression)) => Ok((label.to_string(), expression.to_string())),
            None => Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("expected two tab-separated columns: {:?}", line),
            )),
        }),
        Err(e) => Some(Err(e)),
    })
}
