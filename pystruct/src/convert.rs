//! Conversions between Rust values and [`Value`] sequences

use byte_view::{Value, ValueKind};

use crate::error::{Result, StructError};

/// Typed extraction from a single [`Value`].
pub trait FromValue: Sized {
    /// Kind reported when the value does not match.
    const KIND: ValueKind;

    fn from_value(value: Value) -> Option<Self>;
}

macro_rules! from_value {
    ($ty:ty, $kind:ident, $($variant:ident)|+) => {
        impl FromValue for $ty {
            const KIND: ValueKind = ValueKind::$kind;

            fn from_value(value: Value) -> Option<Self> {
                match value {
                    $(Value::$variant(v))|+ => Some(v),
                    _ => None,
                }
            }
        }
    };
}

// `c` and `x` items unpack as Char; a u8 accepts those too
from_value!(u8, U8, U8 | Char);
from_value!(i8, I8, I8);
from_value!(bool, Bool, Bool);
from_value!(i16, I16, I16);
from_value!(u16, U16, U16);
from_value!(i32, I32, I32);
from_value!(u32, U32, U32);
from_value!(i64, I64, I64);
from_value!(u64, U64, U64);
from_value!(f32, F32, F32);
from_value!(f64, F64, F64);
from_value!(Vec<u8>, Bytes, Bytes);

/// A fixed-arity group of values built from an unpacked record.
pub trait FromValues: Sized {
    const ARITY: usize;

    fn from_values(values: Vec<Value>) -> Result<Self>;
}

/// A fixed-arity group of values to pack.
pub trait IntoValues {
    fn into_values(self) -> Vec<Value>;
}

impl IntoValues for Vec<Value> {
    fn into_values(self) -> Vec<Value> {
        self
    }
}

impl IntoValues for &[Value] {
    fn into_values(self) -> Vec<Value> {
        self.to_vec()
    }
}

fn take<T: FromValue>((index, value): (usize, Value)) -> Result<T> {
    let found = value.kind();
    T::from_value(value).ok_or(StructError::TypeMismatch {
        index,
        expected: T::KIND,
        found,
    })
}

macro_rules! tuple_values {
    ($($name:ident),+) => {
        impl<$($name: FromValue),+> FromValues for ($($name,)+) {
            const ARITY: usize = [$(stringify!($name)),+].len();

            fn from_values(values: Vec<Value>) -> Result<Self> {
                let found = values.len();
                let mismatch = || StructError::ArityMismatch {
                    expected: Self::ARITY,
                    found,
                };
                if found != Self::ARITY {
                    return Err(mismatch());
                }
                let mut values = values.into_iter().enumerate();
                let mut next = || values.next().ok_or_else(mismatch);
                Ok(($(take::<$name>(next()?)?,)+))
            }
        }

        impl<$($name: Into<Value>),+> IntoValues for ($($name,)+) {
            #[allow(non_snake_case)]
            fn into_values(self) -> Vec<Value> {
                let ($($name,)+) = self;
                vec![$($name.into()),+]
            }
        }
    };
}

tuple_values!(A);
tuple_values!(A, B);
tuple_values!(A, B, C);
tuple_values!(A, B, C, D);
tuple_values!(A, B, C, D, E);
tuple_values!(A, B, C, D, E, F);
tuple_values!(A, B, C, D, E, F, G);
tuple_values!(A, B, C, D, E, F, G, H);
