//! Convenience re-exports for common usage

pub use crate::convert::{FromValue, FromValues, IntoValues};
pub use crate::error::{Result, StructError};
pub use crate::io::{RecordReader, RecordWriter};
pub use crate::pack::{calcsize, iter_unpack, pack, pack_into, unpack, unpack_from};
pub use crate::structure::Struct;
pub use crate::values;

pub use byte_view::{Value, ValueKind};
pub use struct_format::{FormatMode, Layout, TypeCode};
