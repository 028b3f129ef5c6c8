/// CSV field projection
///
/// This crate reads a stream of CSV records, selects and reorders
/// requested columns, and re-serializes them with correct quoting.
///
/// # Architecture
///
/// 1. **Reader** (`reader.rs`) - Streams records out of CSV input,
///    handling quoted fields, embedded delimiters/newlines, and
///    doubled-quote escapes
/// 2. **Selection** (`selection.rs`) - Parses and applies the ordered
///    1-based column selection
/// 3. **Writer** (`writer.rs`) - Serializes records back to CSV with
///    minimal quoting, one record at a time
/// 4. **Projector** (`projector.rs`) - Drives the sequential
///    read -> select -> write pipeline
///
/// # Usage
///
/// ```rust
/// use projector::{project, FieldSelection};
///
/// let selection = FieldSelection::parse("2,1")?;
/// let mut output = Vec::new();
/// project("a,b\nc,d\n".as_bytes(), &mut output, selection)?;
/// assert_eq!(output, b"b,a\nd,c\n");
/// # Ok::<(), projector::ProjectorError>(())
/// ```
pub mod error;
pub mod projector;
pub mod reader;
pub mod selection;
pub mod writer;

pub use error::{ProjectorError, Result};
pub use projector::Projector;
pub use reader::{Record, RecordReader};
pub use selection::FieldSelection;
pub use writer::{RecordWriter, LINE_TERMINATOR};

use std::io::{Read, Write};

/// Project a CSV stream in one call
///
/// Convenience wrapper over [`Projector::run`]; returns the number of
/// records written.
pub fn project<R: Read, W: Write>(
    input: R,
    output: W,
    selection: FieldSelection,
) -> Result<u64> {
    Projector::new(selection).run(input, output)
}
