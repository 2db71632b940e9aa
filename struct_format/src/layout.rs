//! Byte offsets and total size of a parsed format.
//!
//! Without padding, items sit back to back. With padding, every item is
//! placed at the next multiple of its alignment (its width; 1 for bytes
//! and strings) and the total is rounded up to the largest alignment
//! in the format.
//!
//! Offsets are kept per run of repeated items rather than per item, so a
//! format like `"1000000h"` compiles to a single run.

use crate::parser::{FormatItem, ParsedFormat, parse};
use crate::{FormatError, FormatMode, String, TypeCode, Vec};

/// A contiguous run of same-coded items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Run {
    code: TypeCode,
    first: usize,
    len: usize,
    offset: usize,
    width: usize,
}

impl Run {
    #[inline]
    fn field(&self, k: usize) -> Field {
        Field {
            index: self.first + k,
            code: self.code,
            offset: self.offset + k * self.width,
            width: self.width,
        }
    }
}

/// Placement of one flattened item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub index: usize,
    pub code: TypeCode,
    pub offset: usize,
    pub width: usize,
}

/// A compiled format: mode, items, total size and every item's offset.
///
/// Offsets never decrease in format order. They strictly increase except
/// after a zero-width `0s` item, which shares its offset with the item that
/// follows it. The total size is at most `isize::MAX`.
///
/// Immutable once built, so it can be shared freely between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    format: String,
    mode: FormatMode,
    items: Vec<FormatItem>,
    runs: Vec<Run>,
    item_count: usize,
    size: usize,
}

#[inline]
fn align_up(offset: usize, align: usize) -> Result<usize, FormatError> {
    offset
        .checked_next_multiple_of(align)
        .ok_or(FormatError::SizeOverflow)
}

impl Layout {
    /// Parses, validates and lays out `format`.
    pub fn compile(format: &str) -> Result<Self, FormatError> {
        let parsed = parse(format)?;
        Self::from_parsed(format, parsed)
    }

    pub fn from_parsed(format: &str, parsed: ParsedFormat) -> Result<Self, FormatError> {
        let ParsedFormat { mode, items } = parsed;
        let pad = mode.should_pad();

        let mut runs = Vec::with_capacity(items.len());
        let mut offset = 0usize;
        let mut first = 0usize;
        let mut max_align = 1usize;

        for item in &items {
            let len = item.item_count();
            if len == 0 {
                continue;
            }
            let width = item.unit_width();

            if pad {
                let align = item.code.align();
                offset = align_up(offset, align)?;
                max_align = max_align.max(align);
            }

            runs.push(Run {
                code: item.code,
                first,
                len,
                offset,
                width,
            });

            offset = width
                .checked_mul(len)
                .and_then(|bytes| offset.checked_add(bytes))
                .ok_or(FormatError::SizeOverflow)?;
            first += len;
        }

        let size = if pad { align_up(offset, max_align)? } else { offset };
        // No allocation can be larger than isize::MAX bytes.
        if size > isize::MAX as usize {
            return Err(FormatError::SizeOverflow);
        }

        Ok(Self {
            format: format.into(),
            mode,
            items,
            runs,
            item_count: first,
            size,
        })
    }

    /// The format text this layout was compiled from.
    pub fn format(&self) -> &str {
        &self.format
    }

    #[inline]
    pub fn mode(&self) -> FormatMode {
        self.mode
    }

    #[inline]
    pub fn is_big_endian(&self) -> bool {
        self.mode.is_big_endian()
    }

    pub fn items(&self) -> &[FormatItem] {
        &self.items
    }

    /// Total record size in bytes, trailing padding included.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of values a record packs from and unpacks to.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    pub fn field(&self, index: usize) -> Option<Field> {
        let run = self
            .runs
            .partition_point(|run| run.first + run.len <= index);
        self.runs.get(run).map(|run| run.field(index - run.first))
    }

    pub fn offset_of(&self, index: usize) -> Option<usize> {
        self.field(index).map(|field| field.offset)
    }

    pub fn code_of(&self, index: usize) -> Option<TypeCode> {
        self.field(index).map(|field| field.code)
    }

    /// Every flattened item in format order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.runs
            .iter()
            .flat_map(|run| (0..run.len).map(move |k| run.field(k)))
    }

    pub fn offsets(&self) -> impl Iterator<Item = usize> + '_ {
        self.fields().map(|field| field.offset)
    }

    pub fn widths(&self) -> impl Iterator<Item = usize> + '_ {
        self.fields().map(|field| field.width)
    }

    pub fn codes(&self) -> impl Iterator<Item = TypeCode> + '_ {
        self.fields().map(|field| field.code)
    }
}

/// Record size of `format` in bytes.
pub fn calcsize(format: &str) -> Result<usize, FormatError> {
    Layout::compile(format).map(|layout| layout.size())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offsets(format: &str) -> Vec<usize> {
        Layout::compile(format).unwrap().offsets().collect()
    }

    #[test]
    fn padding_laws() {
        assert_eq!(calcsize("@hi").unwrap(), 8);
        assert_eq!(calcsize("<hi").unwrap(), 6);
        assert_eq!(calcsize("@bi").unwrap(), 8);
        assert_eq!(calcsize("<bi").unwrap(), 5);
        assert_eq!(offsets("@hi"), vec![0, 4]);
        assert_eq!(offsets("@bi"), vec![0, 4]);
        assert_eq!(offsets("<bi"), vec![0, 1]);
    }

    #[test]
    fn default_mode_pads() {
        assert_eq!(calcsize("hi").unwrap(), 8);
        assert_eq!(calcsize("=hi").unwrap(), 6);
    }

    #[test]
    fn trailing_padding_rounds_to_widest() {
        assert_eq!(calcsize("@ih").unwrap(), 8);
        assert_eq!(calcsize("@qb").unwrap(), 16);
        assert_eq!(calcsize("@bd").unwrap(), 16);
        assert_eq!(calcsize("<bd").unwrap(), 9);
        assert_eq!(calcsize("@h3s").unwrap(), 6);
        assert_eq!(offsets("@bhbq"), vec![0, 2, 4, 8]);
    }

    #[test]
    fn single_bytes_never_align() {
        assert_eq!(calcsize("@b").unwrap(), 1);
        assert_eq!(calcsize("@5s").unwrap(), 5);
        assert_eq!(calcsize("@cbxB").unwrap(), 4);
        assert_eq!(offsets("@b5sb"), vec![0, 1, 6]);
    }

    #[test]
    fn repeated_items_stay_aligned() {
        assert_eq!(offsets("@b3h"), vec![0, 2, 4, 6]);
        assert_eq!(calcsize("@b3h").unwrap(), 8);
        assert_eq!(offsets("<b3h"), vec![0, 1, 3, 5]);
    }

    #[test]
    fn empty_format_is_zero() {
        for format in ["", "@", "<", ">", "!", "="] {
            let layout = Layout::compile(format).unwrap();
            assert_eq!(layout.size(), 0);
            assert_eq!(layout.item_count(), 0);
            assert!(layout.is_empty());
            assert_eq!(layout.fields().count(), 0);
        }
    }

    #[test]
    fn zero_counts() {
        let layout = Layout::compile("<0sh").unwrap();
        assert_eq!(layout.item_count(), 2);
        assert_eq!(layout.size(), 2);
        assert_eq!(layout.field(0).unwrap().width, 0);

        let layout = Layout::compile("@b0qb").unwrap();
        assert_eq!(layout.item_count(), 2);
        assert_eq!(layout.size(), 2);
    }

    #[test]
    fn field_lookup() {
        let layout = Layout::compile("<3h3s2i").unwrap();
        assert_eq!(layout.size(), 6 + 3 + 8);
        assert_eq!(layout.item_count(), 6);
        assert_eq!(
            layout.field(3),
            Some(Field {
                index: 3,
                code: TypeCode::String,
                offset: 6,
                width: 3
            })
        );
        assert_eq!(layout.offset_of(5), Some(13));
        assert_eq!(layout.code_of(4), Some(TypeCode::Int));
        assert_eq!(layout.field(6), None);
        assert_eq!(layout.widths().collect::<Vec<_>>(), vec![2, 2, 2, 3, 4, 4]);
    }

    #[test]
    fn huge_repeat_is_cheap() {
        let layout = Layout::compile("<1000000h").unwrap();
        assert_eq!(layout.size(), 2_000_000);
        assert_eq!(layout.offset_of(999_999), Some(1_999_998));
    }

    #[test]
    fn size_overflow_is_rejected() {
        assert!(matches!(
            Layout::compile("<18446744073709551615q"),
            Err(FormatError::SizeOverflow | FormatError::CountOverflow { .. })
        ));
    }

    #[test]
    fn size_beyond_isize_max_is_rejected() {
        let too_long = format!("<{}s", usize::MAX);
        assert_eq!(Layout::compile(&too_long), Err(FormatError::SizeOverflow));

        let just_over = format!("<{}s", isize::MAX as usize + 1);
        assert_eq!(Layout::compile(&just_over), Err(FormatError::SizeOverflow));

        let padded = format!("@b{}q", isize::MAX as usize / 8);
        assert_eq!(calcsize(&padded), Err(FormatError::SizeOverflow));

        let at_limit = format!("<{}s", isize::MAX);
        assert_eq!(calcsize(&at_limit), Ok(isize::MAX as usize));
    }

    #[test]
    fn zero_width_string_shares_next_offset() {
        assert_eq!(offsets("<h0sh"), vec![0, 2, 2]);
        assert_eq!(offsets("@b0sh"), vec![0, 1, 2]);
    }

    #[test]
    fn keeps_format_and_mode() {
        let layout = Layout::compile(">Hd").unwrap();
        assert_eq!(layout.format(), ">Hd");
        assert!(layout.is_big_endian());
        assert_eq!(layout.mode(), FormatMode::BIG);
        assert_eq!(layout.items().len(), 2);
    }
}
