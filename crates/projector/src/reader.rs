/// Streaming CSV record reader
///
/// Scans an input stream byte by byte and yields one `Record` per
/// logical CSV row. A row may span several physical lines when a
/// quoted field embeds a newline.
use std::io::{Bytes, Read};

use crate::error::{ProjectorError, Result};

/// One logical CSV row: an ordered sequence of field values
pub type Record = Vec<String>;

/// Quoting state while scanning a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Outside any quoted section
    Unquoted,
    /// Inside a double-quoted field
    InQuotedField,
    /// Just saw a quote inside a quoted field; the next byte decides
    /// whether it was a closing quote or the first half of a doubled
    /// (escaped) quote
    QuoteInQuotedField,
}

/// Iterator over the records of a CSV input stream
///
/// The reader is lazy: it pulls bytes from the underlying stream only
/// as records are requested, so arbitrarily large inputs can be
/// processed without buffering the whole document. Pass a buffered
/// reader; the scanner reads one byte at a time.
///
/// Parsing is fail-fast: the first malformed construct (an
/// unterminated quoted field at end of stream, or field bytes that are
/// not valid UTF-8) ends the iteration with an error.
pub struct RecordReader<R: Read> {
    input: Bytes<R>,
    peeked: Option<u8>,
    /// Current physical line, 1-based, for error reporting
    line: u64,
    done: bool,
}

impl<R: Read> RecordReader<R> {
    /// Create a new record reader over an input stream
    pub fn new(input: R) -> Self {
        Self {
            input: input.bytes(),
            peeked: None,
            line: 1,
            done: false,
        }
    }

    /// Read the next record, or `None` at end of stream
    fn next_record(&mut self) -> Result<Option<Record>> {
        let mut record = Record::new();
        let mut field = Vec::new();
        let mut state = State::Unquoted;
        // Line on which the current quoted field opened, for the
        // unterminated-quote error
        let mut quote_line = self.line;
        // False only while nothing at all has been seen on this row;
        // distinguishes a blank line (empty record) from end of stream
        let mut saw_input = false;

        loop {
            let byte = match self.next_byte()? {
                Some(byte) => byte,
                None => {
                    if state == State::InQuotedField {
                        return Err(ProjectorError::Parse {
                            line: quote_line,
                            message: "unterminated quoted field".to_string(),
                        });
                    }
                    // Final record with no trailing line terminator
                    if saw_input {
                        record.push(take_field(&mut field, self.line)?);
                        return Ok(Some(record));
                    }
                    return Ok(None);
                }
            };
            saw_input = true;

            match state {
                State::Unquoted => match byte {
                    b',' => record.push(take_field(&mut field, self.line)?),
                    b'"' if field.is_empty() => {
                        quote_line = self.line;
                        state = State::InQuotedField;
                    }
                    b'\r' | b'\n' => {
                        self.consume_terminator(byte)?;
                        // A completely blank physical line is a record
                        // with zero fields, not one empty field
                        if record.is_empty() && field.is_empty() {
                            return Ok(Some(record));
                        }
                        record.push(take_field(&mut field, self.line)?);
                        return Ok(Some(record));
                    }
                    // A quote in the middle of an unquoted field is
                    // taken literally
                    _ => field.push(byte),
                },
                State::InQuotedField => match byte {
                    b'"' => state = State::QuoteInQuotedField,
                    b'\r' | b'\n' => {
                        // Universal-newline translation: CR and CRLF
                        // inside quotes both become a single LF
                        self.consume_terminator(byte)?;
                        field.push(b'\n');
                    }
                    _ => field.push(byte),
                },
                State::QuoteInQuotedField => match byte {
                    // Doubled quote: one literal quote, still quoted
                    b'"' => {
                        field.push(b'"');
                        state = State::InQuotedField;
                    }
                    b',' => {
                        record.push(take_field(&mut field, self.line)?);
                        state = State::Unquoted;
                    }
                    b'\r' | b'\n' => {
                        self.consume_terminator(byte)?;
                        record.push(take_field(&mut field, self.line)?);
                        return Ok(Some(record));
                    }
                    // Stray byte after a closing quote: the field
                    // resumes unquoted
                    _ => {
                        field.push(byte);
                        state = State::Unquoted;
                    }
                },
            }
        }
    }

    /// Consume the remainder of a line terminator and count the line.
    /// `first` is the terminator byte already read (CR or LF); a CR
    /// followed by LF is one terminator.
    fn consume_terminator(&mut self, first: u8) -> Result<()> {
        if first == b'\r' && self.peek_byte()? == Some(b'\n') {
            self.peeked = None;
        }
        self.line += 1;
        Ok(())
    }

    fn next_byte(&mut self) -> Result<Option<u8>> {
        if let Some(byte) = self.peeked.take() {
            return Ok(Some(byte));
        }
        match self.input.next() {
            Some(Ok(byte)) => Ok(Some(byte)),
            Some(Err(e)) => Err(ProjectorError::Io(e)),
            None => Ok(None),
        }
    }

    fn peek_byte(&mut self) -> Result<Option<u8>> {
        if self.peeked.is_none() {
            self.peeked = match self.input.next() {
                Some(Ok(byte)) => Some(byte),
                Some(Err(e)) => return Err(ProjectorError::Io(e)),
                None => None,
            };
        }
        Ok(self.peeked)
    }
}

/// Finish the current field, converting its bytes to a `String`
fn take_field(field: &mut Vec<u8>, line: u64) -> Result<String> {
    String::from_utf8(std::mem::take(field)).map_err(|_| ProjectorError::Parse {
        line,
        message: "field is not valid UTF-8".to_string(),
    })
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
