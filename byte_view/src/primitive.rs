//! Per-kind store/get for fixed-width primitives.

use crate::twos;
use crate::{Value, ValueKind};

/// A fixed-width value the codec can write to and read from a byte window.
///
/// `write` touches exactly `WIDTH` bytes starting at `dst[0]`; `read` looks
/// at exactly `WIDTH` bytes starting at `src[0]`. Neither checks bounds
/// beyond normal slice indexing: a window shorter than `WIDTH` panics.
pub trait Primitive: Copy {
    const WIDTH: usize;
    const KIND: ValueKind;

    fn write(self, dst: &mut [u8], big_endian: bool);
    fn read(src: &[u8], big_endian: bool) -> Self;

    fn into_value(self) -> Value;
    fn from_value(value: &Value) -> Option<Self>;
}

/// Writes the low `width` bytes of `value`.
///
/// Byte `i` of the value (counting from the least significant) lands at
/// position `i`, or `width - 1 - i` when `big_endian`.
#[inline]
pub fn store_unsigned(dst: &mut [u8], big_endian: bool, value: u64, width: usize) {
    for i in 0..width {
        let pos = if big_endian { width - 1 - i } else { i };
        dst[pos] = (value >> (8 * i)) as u8;
    }
}

/// Inverse of [`store_unsigned`].
#[inline]
pub fn load_unsigned(src: &[u8], big_endian: bool, width: usize) -> u64 {
    let mut value = 0u64;
    for i in 0..width {
        let pos = if big_endian { width - 1 - i } else { i };
        value |= u64::from(src[pos]) << (8 * i);
    }
    value
}

macro_rules! unsigned_primitive {
    ($ty:ty, $variant:ident) => {
        impl Primitive for $ty {
            const WIDTH: usize = core::mem::size_of::<$ty>();
            const KIND: ValueKind = ValueKind::$variant;

            #[inline]
            fn write(self, dst: &mut [u8], big_endian: bool) {
                store_unsigned(dst, big_endian, self as u64, Self::WIDTH);
            }

            #[inline]
            fn read(src: &[u8], big_endian: bool) -> Self {
                load_unsigned(src, big_endian, Self::WIDTH) as $ty
            }

            fn into_value(self) -> Value {
                Value::$variant(self)
            }

            fn from_value(value: &Value) -> Option<Self> {
                match value {
                    Value::$variant(v) => Some(*v),
                    _ => None,
                }
            }
        }
    };
}

macro_rules! signed_primitive {
    ($ty:ty, $bits:ty, $variant:ident, $encode:path, $decode:path) => {
        impl Primitive for $ty {
            const WIDTH: usize = core::mem::size_of::<$ty>();
            const KIND: ValueKind = ValueKind::$variant;

            #[inline]
            fn write(self, dst: &mut [u8], big_endian: bool) {
                $encode(self).write(dst, big_endian);
            }

            #[inline]
            fn read(src: &[u8], big_endian: bool) -> Self {
                $decode(<$bits>::read(src, big_endian))
            }

            fn into_value(self) -> Value {
                Value::$variant(self)
            }

            fn from_value(value: &Value) -> Option<Self> {
                match value {
                    Value::$variant(v) => Some(*v),
                    _ => None,
                }
            }
        }
    };
}

macro_rules! float_primitive {
    ($ty:ty, $bits:ty, $variant:ident) => {
        impl Primitive for $ty {
            const WIDTH: usize = core::mem::size_of::<$ty>();
            const KIND: ValueKind = ValueKind::$variant;

            #[inline]
            fn write(self, dst: &mut [u8], big_endian: bool) {
                let bits: $bits = bytemuck::cast(self);
                bits.write(dst, big_endian);
            }

            #[inline]
            fn read(src: &[u8], big_endian: bool) -> Self {
                bytemuck::cast(<$bits>::read(src, big_endian))
            }

            fn into_value(self) -> Value {
                Value::$variant(self)
            }

            fn from_value(value: &Value) -> Option<Self> {
                match value {
                    Value::$variant(v) => Some(*v),
                    _ => None,
                }
            }
        }
    };
}

unsigned_primitive!(u8, U8);
unsigned_primitive!(u16, U16);
unsigned_primitive!(u32, U32);
unsigned_primitive!(u64, U64);

signed_primitive!(i8, u8, I8, twos::encode_i8, twos::decode_i8);
signed_primitive!(i16, u16, I16, twos::encode_i16, twos::decode_i16);
signed_primitive!(i32, u32, I32, twos::encode_i32, twos::decode_i32);
signed_primitive!(i64, u64, I64, twos::encode_i64, twos::decode_i64);

float_primitive!(f32, u32, F32);
float_primitive!(f64, u64, F64);

impl Primitive for bool {
    const WIDTH: usize = 1;
    const KIND: ValueKind = ValueKind::Bool;

    #[inline]
    fn write(self, dst: &mut [u8], _big_endian: bool) {
        dst[0] = u8::from(self);
    }

    #[inline]
    fn read(src: &[u8], _big_endian: bool) -> Self {
        src[0] != 0
    }

    fn into_value(self) -> Value {
        Value::Bool(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }
}
