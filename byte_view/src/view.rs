//! Byte windows carrying an explicit byte order.
//!
//! A window's length only bounds byte-string reads and writes. Primitive
//! stores always touch `T::WIDTH` bytes from the first byte of the window;
//! keeping the window inside the real buffer is the caller's contract.
//!
//! # Examples
//!
//! ```rust
//! use byte_view::DataViewMut;
//!
//! let mut buf = [0u8; 3];
//! let written = DataViewMut::new(&mut buf, false).store_bytes(b"abcd");
//! assert_eq!(written, 3);
//! assert_eq!(&buf, b"abc");
//! ```

use crate::{Primitive, Value, ValueKind};

/// Read-only window.
#[derive(Debug, Clone, Copy)]
pub struct DataView<'a> {
    bytes: &'a [u8],
    big_endian: bool,
}

impl<'a> DataView<'a> {
    pub fn new(bytes: &'a [u8], big_endian: bool) -> Self {
        Self { bytes, big_endian }
    }

    /// Window of `len` bytes starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset + len` exceeds `bytes.len()`.
    pub fn at(bytes: &'a [u8], offset: usize, len: usize, big_endian: bool) -> Self {
        Self::new(&bytes[offset..offset + len], big_endian)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    pub fn is_big_endian(&self) -> bool {
        self.big_endian
    }

    #[inline]
    pub fn get<T: Primitive>(&self) -> T {
        T::read(self.bytes, self.big_endian)
    }

    /// Exactly the window's bytes, never more.
    #[inline]
    pub fn get_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn get_value(&self, kind: ValueKind) -> Value {
        match kind {
            ValueKind::Char => Value::Char(self.get::<u8>()),
            ValueKind::I8 => Value::I8(self.get()),
            ValueKind::U8 => Value::U8(self.get()),
            ValueKind::Bool => Value::Bool(self.get()),
            ValueKind::I16 => Value::I16(self.get()),
            ValueKind::U16 => Value::U16(self.get()),
            ValueKind::I32 => Value::I32(self.get()),
            ValueKind::U32 => Value::U32(self.get()),
            ValueKind::I64 => Value::I64(self.get()),
            ValueKind::U64 => Value::U64(self.get()),
            ValueKind::F32 => Value::F32(self.get()),
            ValueKind::F64 => Value::F64(self.get()),
            ValueKind::Bytes => Value::Bytes(self.bytes.to_vec()),
        }
    }
}

/// Writable window.
#[derive(Debug)]
pub struct DataViewMut<'a> {
    bytes: &'a mut [u8],
    big_endian: bool,
}

impl<'a> DataViewMut<'a> {
    pub fn new(bytes: &'a mut [u8], big_endian: bool) -> Self {
        Self { bytes, big_endian }
    }

    /// Window of `len` bytes starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset + len` exceeds `bytes.len()`.
    pub fn at(bytes: &'a mut [u8], offset: usize, len: usize, big_endian: bool) -> Self {
        Self::new(&mut bytes[offset..offset + len], big_endian)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    pub fn is_big_endian(&self) -> bool {
        self.big_endian
    }

    pub fn as_view(&self) -> DataView<'_> {
        DataView::new(&*self.bytes, self.big_endian)
    }

    #[inline]
    pub fn store<T: Primitive>(&mut self, value: T) {
        value.write(self.bytes, self.big_endian);
    }

    /// Copies `min(src.len(), self.len())` bytes verbatim and returns the
    /// count. Bytes past the copied prefix are left as they were.
    pub fn store_bytes(&mut self, src: &[u8]) -> usize {
        let n = src.len().min(self.bytes.len());
        self.bytes[..n].copy_from_slice(&src[..n]);
        n
    }

    pub fn store_value(&mut self, value: &Value) {
        match value {
            Value::Char(v) | Value::U8(v) => self.store(*v),
            Value::I8(v) => self.store(*v),
            Value::Bool(v) => self.store(*v),
            Value::I16(v) => self.store(*v),
            Value::U16(v) => self.store(*v),
            Value::I32(v) => self.store(*v),
            Value::U32(v) => self.store(*v),
            Value::I64(v) => self.store(*v),
            Value::U64(v) => self.store(*v),
            Value::F32(v) => self.store(*v),
            Value::F64(v) => self.store(*v),
            Value::Bytes(v) => {
                self.store_bytes(v);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_string_leaves_tail() {
        let mut buf = [0x55u8; 3];
        let n = DataViewMut::new(&mut buf, false).store_bytes(b"ab");
        assert_eq!(n, 2);
        assert_eq!(buf, [b'a', b'b', 0x55]);
    }

    #[test]
    fn long_string_is_clamped() {
        let mut buf = [0u8; 5];
        let n = DataViewMut::at(&mut buf, 1, 3, true).store_bytes(b"abcdef");
        assert_eq!(n, 3);
        assert_eq!(buf, [0, b'a', b'b', b'c', 0]);
    }

    #[test]
    fn get_bytes_returns_whole_window() {
        let buf = *b"hello!";
        let view = DataView::at(&buf, 1, 4, false);
        assert_eq!(view.get_bytes(), b"ello");
        assert_eq!(view.get_value(ValueKind::Bytes), Value::Bytes(b"ello".to_vec()));
    }

    #[test]
    fn value_dispatch_roundtrip() {
        let values = [
            Value::Char(b'z'),
            Value::I8(-128),
            Value::U8(255),
            Value::Bool(true),
            Value::I16(-2),
            Value::U16(0xBEEF),
            Value::I32(i32::MIN),
            Value::U32(7),
            Value::I64(-1),
            Value::U64(u64::MAX),
            Value::F32(-0.5),
            Value::F64(core::f64::consts::PI),
        ];

        for big_endian in [false, true] {
            for value in &values {
                let mut buf = [0u8; 8];
                DataViewMut::new(&mut buf, big_endian).store_value(value);
                let back = DataView::new(&buf, big_endian).get_value(value.kind());
                assert_eq!(&back, value);
            }
        }
    }

    #[test]
    fn endianness_is_mirror_image() {
        let mut le = [0u8; 8];
        let mut be = [0u8; 8];
        DataViewMut::new(&mut le, false).store(0x0102_0304_0506_0708u64);
        DataViewMut::new(&mut be, true).store(0x0102_0304_0506_0708u64);
        le.reverse();
        assert_eq!(le, be);
    }

    #[test]
    fn as_view_reads_back() {
        let mut buf = [0u8; 2];
        let mut view = DataViewMut::new(&mut buf, true);
        view.store(-300i16);
        assert_eq!(view.as_view().get::<i16>(), -300);
    }
}
