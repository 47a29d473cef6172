use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

/// Writes `value` to stdout as indented JSON.
///
/// # Errors
/// Returns an error if serialization or the write fails.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    write_json(&mut stdout, value)
}

fn write_json<W: Write, T: Serialize + ?Sized>(writer: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value).context("Failed to encode output")?;
    writeln!(writer).context("Failed to write output")?;
    Ok(())
}
