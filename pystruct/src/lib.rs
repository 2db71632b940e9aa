//! # pystruct
//!
//! Declarative packing of fixed binary records from compact format strings,
//! in the style of Python's `struct` module.
//!
//! ## Features
//!
//! - **Format strings**: `[mode]([count]code)*`, e.g. `"<3h3s2i"`
//! - **Four layout modes**: native with C-style padding, native packed,
//!   little-endian and big-endian/network
//! - **Exact codec**: explicit two's complement, raw IEEE-754 bits, results
//!   identical on every host
//! - **Compiled once**: layouts are memoized per format string (`cache`
//!   feature, on by default)
//!
//! ## Quick Start
//!
//! ```rust
//! use pystruct::prelude::*;
//!
//! let record = Struct::new("<hI4s").unwrap();
//! assert_eq!(record.size(), 10);
//!
//! let bytes = record.pack(&values![-1i16, 0xCAFEu32, "ok"]).unwrap();
//! assert_eq!(bytes, [0xFF, 0xFF, 0xFE, 0xCA, 0, 0, b'o', b'k', 0, 0]);
//!
//! let (a, b, name): (i16, u32, Vec<u8>) = record.unpack_tuple(&bytes).unwrap();
//! assert_eq!((a, b), (-1, 0xCAFE));
//! assert_eq!(name, b"ok\0\0");
//! ```
//!
//! ## Type codes
//!
//! | code | value | bytes |
//! |------|-------|-------|
//! | `x`, `c` | [`Value::Char`] | 1 |
//! | `b` / `B` | `i8` / `u8` | 1 |
//! | `h` / `H` | `i16` / `u16` | 2 |
//! | `i` / `I`, `l` / `L` | `i32` / `u32` | 4 |
//! | `q` / `Q` | `i64` / `u64` | 8 |
//! | `f` / `d` | `f32` / `f64` | 4 / 8 |
//! | `Ns` | [`Value::Bytes`], one value of N bytes | N |
//!
//! Strings longer than their width are truncated on pack; shorter ones are
//! zero-filled because pack starts from a zeroed buffer.

pub mod cache;
pub mod convert;
pub mod error;
pub mod io;
pub mod iter;
pub mod pack;
pub mod prelude;
pub mod structure;

pub use crate::convert::{FromValue, FromValues, IntoValues};
pub use crate::error::{Result, StructError};
pub use crate::io::{RecordReader, RecordWriter};
pub use crate::iter::RecordIter;
pub use crate::pack::{calcsize, count_items, iter_unpack, pack, pack_into, unpack, unpack_from};
pub use crate::structure::Struct;

#[cfg(feature = "cache")]
pub use crate::cache::{cached_formats, clear_cache};

// Re-export the codec and format layers
pub use byte_view::{DataView, DataViewMut, Primitive, Value, ValueKind};
pub use struct_format::{
    Endian, Field, FormatError, FormatItem, FormatMode, Layout, ParsedFormat, TypeCode,
};

/// Builds a `Vec<Value>` from anything convertible into [`Value`].
///
/// ```
/// use pystruct::{Value, values};
///
/// let v = values![1u8, -2i32, "ab"];
/// assert_eq!(v, vec![Value::U8(1), Value::I32(-2), Value::Bytes(b"ab".to_vec())]);
/// ```
#[macro_export]
macro_rules! values {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($value)),+]
    };
}
