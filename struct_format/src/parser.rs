//! Format text to an ordered item list.
//!
//! ```rust
//! use struct_format::{FormatMode, TypeCode, parse};
//!
//! let parsed = parse(">12h3s").unwrap();
//! assert_eq!(parsed.mode, FormatMode::BIG);
//! assert_eq!(parsed.items.len(), 2);
//! assert_eq!(parsed.count_items(), 13);
//! assert_eq!(parsed.type_of_item(12), Some(TypeCode::String));
//! ```

use crate::Vec;
use crate::{FormatError, FormatMode, TypeCode};

/// One `[count] code` unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatItem {
    pub code: TypeCode,
    /// Repeat count, or byte length for `s`.
    pub count: usize,
}

impl FormatItem {
    /// Number of values this item consumes on pack and yields on unpack.
    #[inline]
    pub const fn item_count(&self) -> usize {
        if self.code.is_string() { 1 } else { self.count }
    }

    /// Byte width of each value this item yields.
    #[inline]
    pub const fn unit_width(&self) -> usize {
        if self.code.is_string() {
            self.count
        } else {
            self.code.width()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFormat {
    pub mode: FormatMode,
    pub items: Vec<FormatItem>,
}

impl ParsedFormat {
    /// Flattened value count. A string contributes one regardless of length.
    pub fn count_items(&self) -> usize {
        self.items.iter().map(FormatItem::item_count).sum()
    }

    /// Type code governing flattened position `index`.
    pub fn type_of_item(&self, index: usize) -> Option<TypeCode> {
        let mut first = 0usize;
        for item in &self.items {
            let n = item.item_count();
            if index < first + n {
                return Some(item.code);
            }
            first += n;
        }
        None
    }

    /// Type code of every flattened position, in order.
    pub fn codes(&self) -> impl Iterator<Item = TypeCode> + '_ {
        self.items
            .iter()
            .flat_map(|item| core::iter::repeat_n(item.code, item.item_count()))
    }
}

/// Parses and validates `format`.
///
/// # Errors
///
/// - [`FormatError::MisplacedMode`] for a mode character after position 0
/// - [`FormatError::UnknownChar`] for anything outside the type-code table
/// - [`FormatError::DanglingCount`] for digits at the end of the text
/// - [`FormatError::CountOverflow`] when a count or the total item count
///   does not fit a `usize`
pub fn parse(format: &str) -> Result<ParsedFormat, FormatError> {
    let mut chars = format.chars().enumerate().peekable();

    let mut mode = FormatMode::default();
    if let Some(&(_, ch)) = chars.peek() {
        if let Some(explicit) = FormatMode::from_char(ch) {
            mode = explicit;
            chars.next();
        }
    }

    let mut items = Vec::new();
    let mut total = 0usize;
    // (value so far, position of first digit)
    let mut pending: Option<(usize, usize)> = None;

    for (position, ch) in chars {
        if let Some(digit) = ch.to_digit(10) {
            let (value, start) = pending.unwrap_or((0, position));
            let value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(digit as usize))
                .ok_or(FormatError::CountOverflow { position: start })?;
            pending = Some((value, start));
            continue;
        }

        let code = match TypeCode::from_char(ch) {
            Some(code) => code,
            None if FormatMode::is_mode_char(ch) => {
                return Err(FormatError::MisplacedMode { ch, position });
            }
            None => return Err(FormatError::UnknownChar { ch, position }),
        };

        let item = FormatItem {
            code,
            count: pending.take().map_or(1, |(value, _)| value),
        };
        total = total
            .checked_add(item.item_count())
            .ok_or(FormatError::CountOverflow { position })?;
        items.push(item);
    }

    if let Some((_, position)) = pending {
        return Err(FormatError::DanglingCount { position });
    }

    Ok(ParsedFormat { mode, items })
}

/// Mode selected by `format`, after validating the whole text.
pub fn classify(format: &str) -> Result<FormatMode, FormatError> {
    parse(format).map(|parsed| parsed.mode)
}

pub fn validate(format: &str) -> Result<(), FormatError> {
    parse(format).map(|_| ())
}

pub fn count_items(format: &str) -> Result<usize, FormatError> {
    parse(format).map(|parsed| parsed.count_items())
}

pub fn type_of_item(format: &str, index: usize) -> Result<Option<TypeCode>, FormatError> {
    parse(format).map(|parsed| parsed.type_of_item(index))
}
