/// Incremental CSV record writer
///
/// Serializes one record per call with minimal RFC-4180 quoting, so
/// arbitrarily large outputs stream through without whole-document
/// buffering.
use std::io::Write;

use crate::error::Result;

/// Record terminator: platform line ending, written after every
/// record including the last, so output ends exactly at the final
/// record's terminator with no extra blank line.
#[cfg(windows)]
pub const LINE_TERMINATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_TERMINATOR: &str = "\n";

/// Writes records to an output stream, one CSV line per record
pub struct RecordWriter<W: Write> {
    output: W,
}

impl<W: Write> RecordWriter<W> {
    /// Create a new record writer over an output stream
    pub fn new(output: W) -> Self {
        Self { output }
    }

    /// Serialize one record and its terminator
    pub fn write_record<S: AsRef<str>>(&mut self, fields: &[S]) -> Result<()> {
        // A single empty field is quoted so the row stays
        // distinguishable from a blank (zero-field) line when re-read
        if fields.len() == 1 && fields[0].as_ref().is_empty() {
            self.output.write_all(b"\"\"")?;
            self.output.write_all(LINE_TERMINATOR.as_bytes())?;
            return Ok(());
        }

        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                self.output.write_all(b",")?;
            }
            self.write_field(field.as_ref())?;
        }
        self.output.write_all(LINE_TERMINATOR.as_bytes())?;
        Ok(())
    }

    /// Flush the underlying stream
    pub fn flush(&mut self) -> Result<()> {
        self.output.flush()?;
        Ok(())
    }

    /// Consume the writer, returning the underlying stream
    pub fn into_inner(self) -> W {
        self.output
    }

    fn write_field(&mut self, field: &str) -> Result<()> {
        if !needs_quoting(field) {
            self.output.write_all(field.as_bytes())?;
            return Ok(());
        }

        self.output.write_all(b"\"")?;
        let mut first = true;
        for part in field.split('"') {
            if !first {
                // Embedded quotes are doubled
                self.output.write_all(b"\"\"")?;
            }
            first = false;
            self.output.write_all(part.as_bytes())?;
        }
        self.output.write_all(b"\"")?;
        Ok(())
    }
}

/// A field is quoted only when it contains the delimiter, a double
/// quote, a carriage return, or a newline
fn needs_quoting(field: &str) -> bool {
    field
        .bytes()
        .any(|b| matches!(b, b',' | b'"' | b'\r' | b'\n'))
}
