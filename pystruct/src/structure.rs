//! A compiled format handle.

use std::sync::Arc;

use byte_view::Value;
use struct_format::{FormatMode, Layout};

use crate::cache;
use crate::convert::{FromValues, IntoValues};
use crate::error::{Result, StructError};
use crate::iter::RecordIter;
use crate::pack::{check_values, read_record, record_range, write_record};

/// A format string compiled once and reused for every pack/unpack.
///
/// Cloning is cheap: the layout is shared.
///
/// # Examples
///
/// ```
/// use pystruct::{Struct, Value, values};
///
/// let header = Struct::new("!HH4s").unwrap();
/// assert_eq!(header.size(), 8);
/// assert_eq!(header.count(), 3);
///
/// let bytes = header.pack(&values![1u16, 2u16, "RIFF"]).unwrap();
/// assert_eq!(bytes, b"\x00\x01\x00\x02RIFF");
///
/// let (a, b, tag): (u16, u16, Vec<u8>) = header.unpack_tuple(&bytes).unwrap();
/// assert_eq!((a, b, tag.as_slice()), (1, 2, &b"RIFF"[..]));
/// ```
#[derive(Debug, Clone)]
pub struct Struct {
    layout: Arc<Layout>,
}

impl Struct {
    /// Compiles `format`, or fetches it from the layout cache.
    ///
    /// With the `cache` feature every distinct valid format string stays
    /// cached for the life of the process. Hosts that build formats from
    /// untrusted input should use [`Struct::from_layout`] with
    /// [`Layout::compile`], or call `clear_cache` periodically.
    pub fn new(format: &str) -> Result<Self> {
        Ok(Self {
            layout: cache::layout(format)?,
        })
    }

    /// Wraps an already compiled layout, bypassing the cache.
    pub fn from_layout(layout: Layout) -> Self {
        Self {
            layout: Arc::new(layout),
        }
    }

    pub fn format(&self) -> &str {
        self.layout.format()
    }

    /// Record size in bytes.
    #[inline]
    pub fn size(&self) -> usize {
        self.layout.size()
    }

    /// Values per record.
    #[inline]
    pub fn count(&self) -> usize {
        self.layout.item_count()
    }

    #[inline]
    pub fn mode(&self) -> FormatMode {
        self.layout.mode()
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub(crate) fn shared_layout(&self) -> Arc<Layout> {
        Arc::clone(&self.layout)
    }

    pub fn pack(&self, values: &[Value]) -> Result<Vec<u8>> {
        check_values(&self.layout, values)?;
        let mut out = vec![0u8; self.size()];
        write_record(&self.layout, &mut out, values);
        Ok(out)
    }

    /// Packs into `buffer[offset..offset + size]`.
    ///
    /// Padding and unwritten string tails inside that range keep whatever
    /// the buffer held.
    pub fn pack_into(&self, buffer: &mut [u8], offset: usize, values: &[Value]) -> Result<()> {
        let range = record_range(self.size(), offset, buffer.len())?;
        check_values(&self.layout, values)?;
        write_record(&self.layout, &mut buffer[range], values);
        Ok(())
    }

    pub fn unpack(&self, bytes: &[u8]) -> Result<Vec<Value>> {
        if bytes.len() != self.size() {
            return Err(StructError::SizeMismatch {
                expected: self.size(),
                found: bytes.len(),
            });
        }
        Ok(read_record(&self.layout, bytes))
    }

    pub fn unpack_from(&self, buffer: &[u8], offset: usize) -> Result<Vec<Value>> {
        let range = record_range(self.size(), offset, buffer.len())?;
        Ok(read_record(&self.layout, &buffer[range]))
    }

    /// Iterates over the records filling `buffer`.
    ///
    /// # Errors
    ///
    /// [`StructError::TrailingBytes`] unless `buffer.len()` is a multiple of
    /// [`size`](Self::size). A zero-size record accepts only an empty buffer.
    pub fn iter_unpack<'a>(&self, buffer: &'a [u8]) -> Result<RecordIter<'a>> {
        RecordIter::new(self.shared_layout(), buffer)
    }

    pub fn pack_tuple<T: IntoValues>(&self, values: T) -> Result<Vec<u8>> {
        self.pack(&values.into_values())
    }

    pub fn unpack_tuple<T: FromValues>(&self, bytes: &[u8]) -> Result<T> {
        T::from_values(self.unpack(bytes)?)
    }
}
