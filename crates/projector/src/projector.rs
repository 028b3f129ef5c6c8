/// Projection driver: wires reader, selector, and writer together
use std::io::{Read, Write};

use tracing::{debug, info};

use crate::error::Result;
use crate::reader::RecordReader;
use crate::selection::FieldSelection;
use crate::writer::RecordWriter;

/// Applies a field selection to a CSV stream, record by record
pub struct Projector {
    selection: FieldSelection,
}

impl Projector {
    /// Create a projector with the given field selection
    pub fn new(selection: FieldSelection) -> Self {
        Self { selection }
    }

    /// Run the projection: read every record from `input`, project it,
    /// and serialize it to `output`. Sequential and single-threaded;
    /// each record is fully read, projected, and written before the
    /// next one begins.
    ///
    /// Fail-fast: the first parse or I/O error aborts the run. Records
    /// already written stay written; there is no rollback.
    ///
    /// Returns the number of records written.
    pub fn run<R: Read, W: Write>(&self, input: R, output: W) -> Result<u64> {
        let reader = RecordReader::new(input);
        let mut writer = RecordWriter::new(output);
        let mut count = 0u64;

        for record in reader {
            let projected = self.selection.select(record?);
            writer.write_record(&projected)?;
            count += 1;

            // Progress reporting for large inputs
            if count % 100_000 == 0 {
                debug!("processed {} records", count);
            }
        }

        writer.flush()?;
        info!("total records processed: {}", count);
        Ok(count)
    }
}
