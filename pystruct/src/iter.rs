//! Iteration over back-to-back records.

use std::sync::Arc;

use byte_view::Value;
use struct_format::Layout;

use crate::error::{Result, StructError};
use crate::pack::read_record;

/// Yields one unpacked record per `size` bytes of the buffer.
#[derive(Debug, Clone)]
pub struct RecordIter<'a> {
    layout: Arc<Layout>,
    remaining: &'a [u8],
}

impl<'a> RecordIter<'a> {
    pub(crate) fn new(layout: Arc<Layout>, buffer: &'a [u8]) -> Result<Self> {
        let record = layout.size();
        let whole = if record == 0 {
            buffer.is_empty()
        } else {
            buffer.len() % record == 0
        };
        if !whole {
            return Err(StructError::TrailingBytes {
                len: buffer.len(),
                record,
            });
        }
        Ok(Self {
            layout,
            remaining: buffer,
        })
    }
}

impl Iterator for RecordIter<'_> {
    type Item = Vec<Value>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining.is_empty() {
            return None;
        }
        let (record, rest) = self.remaining.split_at(self.layout.size());
        self.remaining = rest;
        Some(read_record(&self.layout, record))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self
            .remaining
            .len()
            .checked_div(self.layout.size())
            .unwrap_or(0);
        (n, Some(n))
    }
}

impl ExactSizeIterator for RecordIter<'_> {}
