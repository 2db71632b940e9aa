//! Streaming records over `std::io`

use std::io::{self, Read, Write};

use byte_view::Value;

use crate::error::Result;
use crate::pack::{check_values, read_record, write_record};
use crate::structure::Struct;

/// Writes one packed record per call.
pub struct RecordWriter<W: Write> {
    writer: W,
    format: Struct,
    scratch: Vec<u8>,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(format: &str, writer: W) -> Result<Self> {
        Ok(Self::with_struct(Struct::new(format)?, writer))
    }

    pub fn with_struct(format: Struct, writer: W) -> Self {
        let scratch = vec![0u8; format.size()];
        Self {
            writer,
            format,
            scratch,
        }
    }

    pub fn write_record(&mut self, values: &[Value]) -> Result<()> {
        check_values(self.format.layout(), values)?;
        self.scratch.fill(0);
        write_record(self.format.layout(), &mut self.scratch, values);
        self.writer.write_all(&self.scratch)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Reads one record per call until the stream ends.
pub struct RecordReader<R: Read> {
    reader: R,
    format: Struct,
    scratch: Vec<u8>,
}

impl<R: Read> RecordReader<R> {
    pub fn new(format: &str, reader: R) -> Result<Self> {
        Ok(Self::with_struct(Struct::new(format)?, reader))
    }

    pub fn with_struct(format: Struct, reader: R) -> Self {
        let scratch = vec![0u8; format.size()];
        Self {
            reader,
            format,
            scratch,
        }
    }

    /// Next record, or `None` at a clean end of stream.
    ///
    /// A stream ending inside a record is an `UnexpectedEof` I/O error.
    /// Zero-size records never read and always return `None`.
    pub fn read_record(&mut self) -> Result<Option<Vec<Value>>> {
        if self.scratch.is_empty() {
            return Ok(None);
        }

        let mut filled = 0;
        while filled < self.scratch.len() {
            match self.reader.read(&mut self.scratch[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }

        if filled == 0 {
            return Ok(None);
        }
        if filled < self.scratch.len() {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!(
                    "stream ended {} bytes into a {}-byte record",
                    filled,
                    self.scratch.len()
                ),
            )
            .into());
        }
        Ok(Some(read_record(self.format.layout(), &self.scratch)))
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<Vec<Value>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_record().transpose()
    }
}
