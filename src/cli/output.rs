/// Report formatting and error rendering.
///
/// One record renders as `Field [value] \t` for every requested field, an
/// optional `Websites [a,b]\t` segment, a newline, then a blank line. Values
/// are written raw; tabs, brackets and commas inside them are not escaped.
use std::io::{self, Write};
use std::time::Instant;

use tracing::debug;

use crate::catalog::CatalogError;
use crate::types::ProductRecord;

/// Uppercase the first character of a field name, leaving the rest untouched.
#[must_use]
pub fn capitalize(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Write `Field [value] \t` for each field, empty brackets when the record lacks it.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_fields<W: Write>(
    out: &mut W,
    record: &ProductRecord,
    fields: &[String],
) -> io::Result<()> {
    for field in fields {
        write!(
            out,
            "{} [{}] \t",
            capitalize(field),
            record.get(field).unwrap_or_default()
        )?;
    }
    Ok(())
}

/// Write the `Websites [a,b]\t` segment.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_websites<W: Write>(out: &mut W, names: &[String]) -> io::Result<()> {
    write!(out, "Websites [{}]\t", names.join(","))
}

/// Terminate a record and flush so it is visible before the next one is fetched.
///
/// # Errors
///
/// Propagates write failures.
pub fn end_record<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(b"\n\n")?;
    out.flush()
}

/// Write an error to stderr.
pub fn write_error(err: &CatalogError) {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    let _ = writeln!(out, "Error: {err}");
}

// --- Debug timer ---

/// A RAII timer that logs elapsed milliseconds at debug level on drop.
pub struct DebugTimer {
    label: &'static str,
    start: Instant,
}

/// Start a named phase timer.
#[must_use]
pub fn timer(label: &'static str) -> DebugTimer {
    DebugTimer {
        label,
        start: Instant::now(),
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        let ms = self.start.elapsed().as_secs_f64() * 1000.0;
        debug!(phase = self.label, elapsed_ms = ms, "phase finished");
    }
}
