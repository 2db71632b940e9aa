//! Pack/unpack orchestration: walks a layout and hands each value to the
//! codec at its offset.
//!
//! The free functions here look the format up in the layout cache and
//! delegate to [`Struct`].

use byte_view::{DataView, DataViewMut, Value};
use struct_format::Layout;
use tracing::trace;

use crate::error::{Result, StructError};
use crate::iter::RecordIter;
use crate::structure::Struct;

/// Arity and per-item kinds, checked before any byte is written.
pub(crate) fn check_values(layout: &Layout, values: &[Value]) -> Result<()> {
    if values.len() != layout.item_count() {
        return Err(StructError::ArityMismatch {
            expected: layout.item_count(),
            found: values.len(),
        });
    }

    for (field, value) in layout.fields().zip(values) {
        let expected = field.code.kind();
        if value.kind() != expected {
            return Err(StructError::TypeMismatch {
                index: field.index,
                expected,
                found: value.kind(),
            });
        }
    }
    Ok(())
}

/// Range of a `size`-byte record at `offset` inside `available` bytes.
pub(crate) fn record_range(
    size: usize,
    offset: usize,
    available: usize,
) -> Result<core::ops::Range<usize>> {
    match offset.checked_add(size) {
        Some(end) if end <= available => Ok(offset..end),
        _ => Err(StructError::BufferTooSmall {
            needed: size,
            offset,
            available,
        }),
    }
}

/// Writes already-checked `values` into `record`, which is exactly one
/// record long. Bytes not covered by a value keep their contents.
pub(crate) fn write_record(layout: &Layout, record: &mut [u8], values: &[Value]) {
    debug_assert_eq!(record.len(), layout.size());
    let big_endian = layout.is_big_endian();

    for (field, value) in layout.fields().zip(values) {
        let mut view = DataViewMut::at(record, field.offset, field.width, big_endian);
        match value {
            Value::Bytes(bytes) => {
                let written = view.store_bytes(bytes);
                if written < bytes.len() {
                    trace!(
                        index = field.index,
                        width = field.width,
                        len = bytes.len(),
                        "string truncated to its declared width"
                    );
                }
            }
            other => view.store_value(other),
        }
    }
}

/// Reads every item of one record. `record` is exactly one record long.
pub(crate) fn read_record(layout: &Layout, record: &[u8]) -> Vec<Value> {
    debug_assert_eq!(record.len(), layout.size());
    let big_endian = layout.is_big_endian();

    layout
        .fields()
        .map(|field| {
            DataView::at(record, field.offset, field.width, big_endian).get_value(field.code.kind())
        })
        .collect()
}

/// Packs `values` into a fresh zeroed buffer of exactly `calcsize(format)`
/// bytes.
///
/// # Errors
///
/// [`StructError::Format`], [`StructError::ArityMismatch`] or
/// [`StructError::TypeMismatch`]; nothing is allocated for the record when
/// any of them fires.
///
/// # Examples
///
/// ```
/// use pystruct::{pack, values};
///
/// let bytes = pack("<hI", &values![-2i16, 7u32]).unwrap();
/// assert_eq!(bytes, [0xFE, 0xFF, 7, 0, 0, 0]);
/// ```
pub fn pack(format: &str, values: &[Value]) -> Result<Vec<u8>> {
    Struct::new(format)?.pack(values)
}

/// Unpacks a buffer of exactly `calcsize(format)` bytes.
///
/// # Examples
///
/// ```
/// use pystruct::{Value, unpack};
///
/// let values = unpack(">3sH", b"abc\x01\x02").unwrap();
/// assert_eq!(values, vec![Value::Bytes(b"abc".to_vec()), Value::U16(0x0102)]);
/// ```
pub fn unpack(format: &str, bytes: &[u8]) -> Result<Vec<Value>> {
    Struct::new(format)?.unpack(bytes)
}

/// Packs into `buffer` starting at `offset`.
pub fn pack_into(format: &str, buffer: &mut [u8], offset: usize, values: &[Value]) -> Result<()> {
    Struct::new(format)?.pack_into(buffer, offset, values)
}

/// Unpacks one record starting at `offset`; the buffer may be longer.
pub fn unpack_from(format: &str, buffer: &[u8], offset: usize) -> Result<Vec<Value>> {
    Struct::new(format)?.unpack_from(buffer, offset)
}

/// Iterates over consecutive records filling `buffer`.
pub fn iter_unpack<'a>(format: &str, buffer: &'a [u8]) -> Result<RecordIter<'a>> {
    Struct::new(format)?.iter_unpack(buffer)
}

/// Record size in bytes.
pub fn calcsize(format: &str) -> Result<usize> {
    Ok(Struct::new(format)?.size())
}

/// Number of values a record takes and yields.
pub fn count_items(format: &str) -> Result<usize> {
    Ok(Struct::new(format)?.count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values;
    use byte_view::ValueKind;

    #[test]
    fn string_is_zero_padded() {
        assert_eq!(pack("<3s", &values!["ab"]).unwrap(), b"ab\0");
        assert_eq!(pack("<3s", &values!["abcd"]).unwrap(), b"abc");
    }

    #[test]
    fn arity_is_checked_first() {
        let err = pack("<2i", &values![1i32]).unwrap_err();
        assert!(matches!(
            err,
            StructError::ArityMismatch {
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn kinds_are_checked() {
        let err = pack("<hi", &values![1i16, 2u32]).unwrap_err();
        assert!(matches!(
            err,
            StructError::TypeMismatch {
                index: 1,
                expected: ValueKind::I32,
                found: ValueKind::U32
            }
        ));
    }

    #[test]
    fn size_is_checked() {
        let err = unpack("<2i", &[0u8; 7]).unwrap_err();
        assert!(matches!(
            err,
            StructError::SizeMismatch {
                expected: 8,
                found: 7
            }
        ));
    }

    #[test]
    fn bad_format_is_reported() {
        assert!(matches!(pack("<k", &[]), Err(StructError::Format(_))));
        assert!(matches!(unpack("3", &[]), Err(StructError::Format(_))));
    }

    #[test]
    fn record_range_bounds() {
        assert_eq!(record_range(4, 2, 6).unwrap(), 2..6);
        assert!(record_range(4, 3, 6).is_err());
        assert!(record_range(1, usize::MAX, 6).is_err());
    }

    #[test]
    fn padding_bytes_are_zero() {
        let bytes = pack("@bi", &values![1i8, -1i32]).unwrap();
        assert_eq!(bytes.len(), 8);
        assert_eq!(&bytes[1..4], &[0, 0, 0]);
        assert_eq!(&bytes[4..], &[0xFF; 4]);
    }

    #[test]
    fn empty_format() {
        assert_eq!(pack("", &[]).unwrap(), Vec::<u8>::new());
        assert_eq!(unpack("<", &[]).unwrap(), Vec::<Value>::new());
        assert_eq!(calcsize("!").unwrap(), 0);
        assert_eq!(count_items("").unwrap(), 0);
    }
}
