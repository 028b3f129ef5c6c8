/// Field selection: which columns to emit, and in what order
///
/// Indices are 1-based as given on the command line; `select` maps
/// index *i* to the (i-1)-th column of each row.
use crate::error::{ProjectorError, Result};
use crate::reader::Record;

/// Ordered column selection applied to every record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSelection {
    /// Emit all columns unchanged, in original order
    All,
    /// Emit the named 1-based columns, in the order given.
    /// Duplicates are permitted.
    Columns(Vec<usize>),
}

impl FieldSelection {
    /// Parse a selection string such as `"2,5,1"`.
    ///
    /// The exact string `"0"` (or an empty string) is the sentinel for
    /// "select all columns". Any other token that is not a positive
    /// integer is a configuration error, reported before any row
    /// processing begins. In particular a `0` mixed into a longer list
    /// (`"0,2"`) is rejected rather than silently shifting indices.
    pub fn parse(list: &str) -> Result<Self> {
        let list = list.trim();
        if list.is_empty() || list == "0" {
            return Ok(FieldSelection::All);
        }

        let mut columns = Vec::new();
        for token in list.split(',') {
            let token = token.trim();
            let index: usize = token.parse().map_err(|_| {
                ProjectorError::InvalidSelection(format!(
                    "'{}' is not a positive integer",
                    token
                ))
            })?;
            if index == 0 {
                return Err(ProjectorError::InvalidSelection(
                    "column indices are 1-based; 0 is only valid alone, meaning all columns"
                        .to_string(),
                ));
            }
            columns.push(index);
        }

        Ok(FieldSelection::Columns(columns))
    }

    /// Project one record.
    ///
    /// Pure function of its inputs: indices beyond the record's own
    /// field count are skipped for that record only, so rows of
    /// varying width never error and never get padded.
    pub fn select(&self, record: Record) -> Record {
        match self {
            FieldSelection::All => record,
            FieldSelection::Columns(columns) => columns
                .iter()
                .filter_map(|&index| record.get(index - 1).cloned())
                .collect(),
        }
    }

    /// Whether this selection passes every column through unchanged
    pub fn is_all(&self) -> bool {
        matches!(self, FieldSelection::All)
    }
}
