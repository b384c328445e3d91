//! Font and rasterization errors

/// Font selection, validation and rasterization errors.
///
/// Unknown character codes and empty strings are not errors: the former
/// render as a space, the latter as a zero-width bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontError {
    /// Font index past the end of the catalog
    InvalidFontIndex {
        /// Requested index
        index: usize,
        /// Number of fonts in the catalog
        count: usize,
    },
    /// Bitmap storage request exceeds [`BITMAP_CAPACITY`](crate::BITMAP_CAPACITY)
    OutOfMemory {
        /// Bytes needed
        requested: usize,
        /// Bytes available
        capacity: usize,
    },
    /// Glyph rows reach past the end of the font's bitmap blob
    GlyphOutOfBounds {
        /// Character code of the offending glyph
        code: u8,
    },
    /// Descriptor table length does not match the character range
    DescriptorCount {
        /// `char_end - char_start + 1`
        expected: usize,
        /// Descriptors present
        actual: usize,
    },
    /// Font range has no space glyph to substitute unknown characters with
    MissingSpaceGlyph,
}

#[cfg(feature = "std")]
impl std::error::Error for FontError {}

impl core::fmt::Display for FontError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidFontIndex { index, count } => {
                write!(f, "font index {index} out of range ({count} fonts)")
            }
            Self::OutOfMemory {
                requested,
                capacity,
            } => write!(
                f,
                "bitmap needs {requested} bytes, capacity is {capacity}"
            ),
            Self::GlyphOutOfBounds { code } => {
                write!(f, "glyph {code:#04x} reads past the font bitmap")
            }
            Self::DescriptorCount { expected, actual } => write!(
                f,
                "font has {actual} glyph descriptors, range needs {expected}"
            ),
            Self::MissingSpaceGlyph => write!(f, "font has no space glyph"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FontError::InvalidFontIndex { index: 4, count: 3 }.to_string(),
            "font index 4 out of range (3 fonts)"
        );
        assert_eq!(
            FontError::OutOfMemory {
                requested: 2048,
                capacity: 1024
            }
            .to_string(),
            "bitmap needs 2048 bytes, capacity is 1024"
        );
        assert_eq!(
            FontError::GlyphOutOfBounds { code: b'A' }.to_string(),
            "glyph 0x41 reads past the font bitmap"
        );
    }
}
