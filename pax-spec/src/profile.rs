//! Static per-architecture encoding metadata.

use serde::{Deserialize, Serialize};

use crate::endian::Endian;

/// Word size and byte order for one architecture.
///
/// Sourced from the registry table in [`crate::Arch::profile`]; never
/// constructed dynamically by callers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArchProfile {
    /// Native address width in bits (32 or 64)
    pub word_bits: u32,
    /// Byte order of multi-byte values
    pub endian: Endian,
}

impl ArchProfile {
    pub const fn new(word_bits: u32, endian: Endian) -> Self {
        Self { word_bits, endian }
    }

    /// Word size in bytes.
    #[inline]
    pub const fn word_bytes(self) -> usize {
        (self.word_bits / 8) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_bytes() {
        assert_eq!(ArchProfile::new(32, Endian::Little).word_bytes(), 4);
        assert_eq!(ArchProfile::new(64, Endian::Big).word_bytes(), 8);
    }
}
