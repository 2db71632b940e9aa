//! # struct_format
//!
//! Parsing, validation and layout of compact binary format strings such as
//! `"<3h3s2i"`.
//!
//! ```rust
//! use struct_format::{Layout, TypeCode, calcsize, count_items};
//!
//! assert_eq!(calcsize("@hi").unwrap(), 8);
//! assert_eq!(calcsize("<hi").unwrap(), 6);
//! assert_eq!(count_items("<3h3s2i").unwrap(), 6);
//!
//! let layout = Layout::compile("@bi").unwrap();
//! let offsets: Vec<usize> = layout.offsets().collect();
//! assert_eq!(offsets, vec![0, 4]);
//! assert_eq!(layout.code_of(1), Some(TypeCode::Int));
//! ```
//!
//! ## Grammar
//!
//! `[mode] ( [count] code )*`
//!
//! | mode | byte order | padding |
//! |------|------------|---------|
//! | `@` (default) | native | on |
//! | `=` | native | off |
//! | `<` | little | off |
//! | `>` / `!` | big | off |
//!
//! A count before `s` is the string's byte length, not a repeat.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
pub(crate) use std::string::String;

#[cfg(not(feature = "std"))]
pub(crate) use alloc::string::String;

pub(crate) use byte_view::Vec;

pub mod error;
pub mod layout;
pub mod mode;
pub mod parser;
pub mod type_code;

pub use error::FormatError;
pub use layout::{Field, Layout, calcsize};
pub use mode::{Endian, FormatMode};
pub use parser::{FormatItem, ParsedFormat, classify, count_items, parse, type_of_item, validate};
pub use type_code::TypeCode;
