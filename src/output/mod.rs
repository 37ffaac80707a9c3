//! Output formatting for CLI results

use std::io::Write;

use crate::error::Result;

pub mod table;

pub use table::{ColumnSpec, render};

/// Write rendered output to stdout, followed by a newline
pub fn print(output: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", output)?;
    stdout.flush()?;
    Ok(())
}
