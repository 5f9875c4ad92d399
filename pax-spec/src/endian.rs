//! Byte-order definitions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Byte order used to encode a multi-byte integer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Endian {
    /// Least-significant byte first
    Little,
    /// Most-significant byte first
    Big,
}

impl Endian {
    pub fn name(self) -> &'static str {
        match self {
            Self::Little => "little",
            Self::Big => "big",
        }
    }
}

impl fmt::Display for Endian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
