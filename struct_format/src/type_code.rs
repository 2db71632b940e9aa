//! The fixed type-code table.

use byte_view::ValueKind;

/// One format character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCode {
    /// `x`
    Pad,
    /// `c`
    Char,
    /// `b`
    SignedByte,
    /// `B`
    UnsignedByte,
    /// `s`, one byte per unit of its count
    String,
    /// `h`
    Short,
    /// `H`
    UnsignedShort,
    /// `i`
    Int,
    /// `I`
    UnsignedInt,
    /// `l`
    Long,
    /// `L`
    UnsignedLong,
    /// `q`
    LongLong,
    /// `Q`
    UnsignedLongLong,
    /// `f`
    Float,
    /// `d`
    Double,
}

#[derive(Clone, Copy)]
struct CodeInfo {
    code: TypeCode,
    ch: char,
    width: usize,
    kind: ValueKind,
}

const fn info(code: TypeCode, ch: char, width: usize, kind: ValueKind) -> CodeInfo {
    CodeInfo {
        code,
        ch,
        width,
        kind,
    }
}

// Indexed by discriminant.
const TABLE: [CodeInfo; 15] = [
    info(TypeCode::Pad, 'x', 1, ValueKind::Char),
    info(TypeCode::Char, 'c', 1, ValueKind::Char),
    info(TypeCode::SignedByte, 'b', 1, ValueKind::I8),
    info(TypeCode::UnsignedByte, 'B', 1, ValueKind::U8),
    info(TypeCode::String, 's', 1, ValueKind::Bytes),
    info(TypeCode::Short, 'h', 2, ValueKind::I16),
    info(TypeCode::UnsignedShort, 'H', 2, ValueKind::U16),
    info(TypeCode::Int, 'i', 4, ValueKind::I32),
    info(TypeCode::UnsignedInt, 'I', 4, ValueKind::U32),
    info(TypeCode::Long, 'l', 4, ValueKind::I32),
    info(TypeCode::UnsignedLong, 'L', 4, ValueKind::U32),
    info(TypeCode::LongLong, 'q', 8, ValueKind::I64),
    info(TypeCode::UnsignedLongLong, 'Q', 8, ValueKind::U64),
    info(TypeCode::Float, 'f', 4, ValueKind::F32),
    info(TypeCode::Double, 'd', 8, ValueKind::F64),
];

impl TypeCode {
    pub const ALL: [TypeCode; 15] = [
        TypeCode::Pad,
        TypeCode::Char,
        TypeCode::SignedByte,
        TypeCode::UnsignedByte,
        TypeCode::String,
        TypeCode::Short,
        TypeCode::UnsignedShort,
        TypeCode::Int,
        TypeCode::UnsignedInt,
        TypeCode::Long,
        TypeCode::UnsignedLong,
        TypeCode::LongLong,
        TypeCode::UnsignedLongLong,
        TypeCode::Float,
        TypeCode::Double,
    ];

    #[inline]
    const fn info(self) -> CodeInfo {
        TABLE[self as usize]
    }

    pub fn from_char(ch: char) -> Option<TypeCode> {
        TABLE.iter().find(|i| i.ch == ch).map(|i| i.code)
    }

    #[inline]
    pub const fn as_char(self) -> char {
        self.info().ch
    }

    /// Width of one unit. For `s` this is one byte per unit of its count.
    #[inline]
    pub const fn width(self) -> usize {
        self.info().width
    }

    /// Alignment when padding is on. Strings and single bytes never align.
    #[inline]
    pub const fn align(self) -> usize {
        match self {
            TypeCode::String => 1,
            _ => self.info().width,
        }
    }

    #[inline]
    pub const fn kind(self) -> ValueKind {
        self.info().kind
    }

    #[inline]
    pub const fn is_string(self) -> bool {
        matches!(self, TypeCode::String)
    }
}

impl core::fmt::Display for TypeCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
