//! Result line emission.

use std::io::Write;

use podpath_common::types::DriverOutput;

/// Writes `output` as a single JSON line to `out`.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn emit(out: &mut impl Write, output: &DriverOutput) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *out, output)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Writes `output` to stdout.
///
/// # Errors
///
/// Returns an error if stdout is closed.
pub fn emit_stdout(output: &DriverOutput) -> anyhow::Result<()> {
    emit(&mut std::io::stdout().lock(), output)
}
