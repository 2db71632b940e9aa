//! The optional leading mode character.

/// Byte order of multi-byte items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endian {
    Little,
    Big,
}

impl Endian {
    /// Byte order of the compilation target.
    pub const NATIVE: Endian = if cfg!(target_endian = "big") {
        Endian::Big
    } else {
        Endian::Little
    };

    #[inline]
    pub const fn is_big(self) -> bool {
        matches!(self, Endian::Big)
    }
}

/// Byte order and padding selected by a format string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatMode {
    pub endian: Endian,
    pub padding: bool,
}

impl FormatMode {
    /// `@`: native order, fields aligned to their width.
    pub const NATIVE: FormatMode = FormatMode {
        endian: Endian::NATIVE,
        padding: true,
    };
    /// `=`: native order, no padding.
    pub const NATIVE_PACKED: FormatMode = FormatMode {
        endian: Endian::NATIVE,
        padding: false,
    };
    /// `<`
    pub const LITTLE: FormatMode = FormatMode {
        endian: Endian::Little,
        padding: false,
    };
    /// `>` and `!`
    pub const BIG: FormatMode = FormatMode {
        endian: Endian::Big,
        padding: false,
    };

    pub const fn from_char(ch: char) -> Option<FormatMode> {
        match ch {
            '@' => Some(Self::NATIVE),
            '=' => Some(Self::NATIVE_PACKED),
            '<' => Some(Self::LITTLE),
            '>' | '!' => Some(Self::BIG),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_mode_char(ch: char) -> bool {
        Self::from_char(ch).is_some()
    }

    #[inline]
    pub const fn is_big_endian(self) -> bool {
        self.endian.is_big()
    }

    #[inline]
    pub const fn should_pad(self) -> bool {
        self.padding
    }
}

impl Default for FormatMode {
    fn default() -> Self {
        Self::NATIVE
    }
}
