#[cfg(feature = "std")]
use thiserror::Error;

/// Rejections raised while parsing or laying out a format string.
///
/// Positions are character indices into the format text.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[cfg_attr(
        feature = "std",
        error("unknown format character {ch:?} at position {position}")
    )]
    UnknownChar { ch: char, position: usize },

    #[cfg_attr(
        feature = "std",
        error("mode character {ch:?} at position {position}; only allowed first")
    )]
    MisplacedMode { ch: char, position: usize },

    #[cfg_attr(
        feature = "std",
        error("count starting at position {position} is not followed by a type code")
    )]
    DanglingCount { position: usize },

    #[cfg_attr(feature = "std", error("count at position {position} is too large"))]
    CountOverflow { position: usize },

    #[cfg_attr(feature = "std", error("total record size overflows usize"))]
    SizeOverflow,
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for FormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FormatError::UnknownChar { ch, position } => {
                write!(f, "unknown format character {:?} at position {}", ch, position)
            }
            FormatError::MisplacedMode { ch, position } => {
                write!(
                    f,
                    "mode character {:?} at position {}; only allowed first",
                    ch, position
                )
            }
            FormatError::DanglingCount { position } => write!(
                f,
                "count starting at position {} is not followed by a type code",
                position
            ),
            FormatError::CountOverflow { position } => {
                write!(f, "count at position {} is too large", position)
            }
            FormatError::SizeOverflow => write!(f, "total record size overflows usize"),
        }
    }
}

impl FormatError {
    /// Character position the error points at, if any.
    pub fn position(&self) -> Option<usize> {
        match self {
            FormatError::UnknownChar { position, .. }
            | FormatError::MisplacedMode { position, .. }
            | FormatError::DanglingCount { position }
            | FormatError::CountOverflow { position } => Some(*position),
            FormatError::SizeOverflow => None,
        }
    }
}
