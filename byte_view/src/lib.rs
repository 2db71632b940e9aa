//! # byte_view
//!
//! A `no_std` compatible byte codec for fixed binary records.
//!
//! Values are written to and read from a byte window with an explicit byte
//! order, independent of the host. Signed integers use an explicit
//! two's-complement mapping and floats are stored as their raw IEEE-754 bits.
//!
//! ```rust
//! use byte_view::{DataView, DataViewMut};
//!
//! let mut buf = [0u8; 4];
//! DataViewMut::new(&mut buf, true).store(-2i16);
//! assert_eq!(&buf[..2], &[0xFF, 0xFE]);
//!
//! let v: i16 = DataView::new(&buf, true).get();
//! assert_eq!(v, -2);
//! ```
//!
//! Dynamic dispatch over the closed set of kinds goes through [`Value`]:
//!
//! ```rust
//! use byte_view::{DataView, DataViewMut, Value, ValueKind};
//!
//! let mut buf = [0u8; 8];
//! DataViewMut::new(&mut buf, false).store_value(&Value::F64(1.5));
//! assert_eq!(DataView::new(&buf, false).get_value(ValueKind::F64), Value::F64(1.5));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
#[doc(hidden)]
pub use std::vec::Vec;

#[cfg(not(feature = "std"))]
#[doc(hidden)]
pub use alloc::vec::Vec;

pub mod primitive;
pub mod twos;
pub mod value;
pub mod view;

pub use primitive::Primitive;
pub use value::{Value, ValueKind};
pub use view::{DataView, DataViewMut};
