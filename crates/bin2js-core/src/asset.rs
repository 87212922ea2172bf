//! Embedded asset type

use std::fmt;

/// A named blob as the generated bundle holds it.
///
/// `str` is the escape-decoded string literal: one `char` per byte, every
/// code point below U+0100.
#[derive(Clone, PartialEq, Eq)]
pub struct Asset {
    pub name: String,
    pub str: String,
}

impl Asset {
    /// Build an asset from raw bytes, mapping each byte to the char with that code point
    pub fn from_bytes(name: impl Into<String>, data: &[u8]) -> Self {
        Self {
            name: name.into(),
            str: data.iter().map(|&b| b as char).collect(),
        }
    }

    /// Reconstruct the original bytes as a fixed-length array.
    ///
    /// Each char becomes one byte holding the low 8 bits of its code point,
    /// which is what storing a char code into a `Uint8Array` does.
    pub fn as_uint8_array(&self) -> Box<[u8]> {
        self.str.chars().map(|c| c as u32 as u8).collect()
    }

    /// Number of bytes the asset decodes to
    pub fn len(&self) -> usize {
        self.str.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.str.is_empty()
    }
}

impl fmt::Debug for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Asset")
            .field("name", &self.name)
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_roundtrip() {
        let asset = Asset::from_bytes("foo.bin", &[0x00, 0xff, 0x41]);
        assert_eq!(asset.name, "foo.bin");
        assert_eq!(&*asset.as_uint8_array(), &[0, 255, 65]);
        assert_eq!(asset.len(), 3);
    }

    #[test]
    fn test_high_bytes_stay_single_chars() {
        let data: Vec<u8> = (0..=255u8).collect();
        let asset = Asset::from_bytes("all", &data);
        assert!(asset.str.chars().all(|c| (c as u32) < 0x100));
        assert_eq!(asset.len(), 256);
        assert_eq!(asset.as_uint8_array().to_vec(), data);
    }

    #[test]
    fn test_wide_chars_truncate_to_low_byte() {
        let asset = Asset {
            name: "wide".to_string(),
            str: "\u{0141}A".to_string(),
        };
        assert_eq!(&*asset.as_uint8_array(), &[0x41, 0x41]);
    }

    #[test]
    fn test_empty_asset() {
        let asset = Asset::from_bytes("empty", &[]);
        assert!(asset.is_empty());
        assert!(asset.as_uint8_array().is_empty());
    }
}
