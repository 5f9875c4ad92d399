//! Architecture identifiers and the registry lookup.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::endian::Endian;
use crate::error::ArchError;
use crate::profile::ArchProfile;

/// Number of architecture identifiers (profile-less bucket included)
pub const NUM_ARCHES: usize = 13;

/// Target architecture identifier.
///
/// The set is closed: identifiers are defined here, never created at runtime.
/// Every identifier except [`Arch::Firefox`] maps to exactly one
/// [`ArchProfile`].
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Arch {
    /// 32-bit x86, little-endian
    X86 = 0,
    /// 64-bit x86 (also spelled "x64")
    X86_64 = 1,
    /// MIPS, big-endian by default
    Mips = 2,
    /// MIPS, little-endian
    MipsLe = 3,
    /// MIPS, big-endian (explicit)
    MipsBe = 4,
    /// 64-bit MIPS, big-endian
    Mips64 = 5,
    /// 32-bit PowerPC, big-endian
    Ppc = 6,
    /// 64-bit PowerPC, little-endian
    Ppc64Le = 7,
    /// 32-bit SPARC, big-endian
    Sparc = 8,
    /// ARM, little-endian
    ArmLe = 9,
    /// ARM, big-endian
    ArmBe = 10,
    /// 64-bit ARM, little-endian
    Aarch64 = 11,
    /// Script-engine target; no native word size or byte order
    Firefox = 12,
}

impl Arch {
    /// Alternate spelling for 64-bit x86 targets.
    pub const X64: Self = Self::X86_64;

    /// Every identifier, in declaration order.
    pub const ALL: [Arch; NUM_ARCHES] = [
        Arch::X86,
        Arch::X86_64,
        Arch::Mips,
        Arch::MipsLe,
        Arch::MipsBe,
        Arch::Mips64,
        Arch::Ppc,
        Arch::Ppc64Le,
        Arch::Sparc,
        Arch::ArmLe,
        Arch::ArmBe,
        Arch::Aarch64,
        Arch::Firefox,
    ];

    /// Registry lookup: word size and byte order for this identifier.
    ///
    /// `None` for identifiers without a hardware profile; downstream encoding
    /// operations treat that as "no defined packing", not an error.
    pub const fn profile(self) -> Option<ArchProfile> {
        match self {
            Self::X86 => Some(ArchProfile::new(32, Endian::Little)),
            Self::X86_64 => Some(ArchProfile::new(64, Endian::Little)),
            Self::Mips => Some(ArchProfile::new(32, Endian::Big)),
            Self::MipsLe => Some(ArchProfile::new(32, Endian::Little)),
            Self::MipsBe => Some(ArchProfile::new(32, Endian::Big)),
            Self::Mips64 => Some(ArchProfile::new(64, Endian::Big)),
            Self::Ppc => Some(ArchProfile::new(32, Endian::Big)),
            Self::Ppc64Le => Some(ArchProfile::new(64, Endian::Little)),
            Self::Sparc => Some(ArchProfile::new(32, Endian::Big)),
            Self::ArmLe => Some(ArchProfile::new(32, Endian::Little)),
            Self::ArmBe => Some(ArchProfile::new(32, Endian::Big)),
            Self::Aarch64 => Some(ArchProfile::new(64, Endian::Little)),
            Self::Firefox => None,
        }
    }

    /// Native address width in bits, if profiled.
    #[inline]
    pub const fn word_bits(self) -> Option<u32> {
        match self.profile() {
            Some(profile) => Some(profile.word_bits),
            None => None,
        }
    }

    /// Native byte order, if profiled.
    #[inline]
    pub const fn endian(self) -> Option<Endian> {
        match self.profile() {
            Some(profile) => Some(profile.endian),
            None => None,
        }
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::X86 => "x86",
            Self::X86_64 => "x86_64",
            Self::Mips => "mips",
            Self::MipsLe => "mipsle",
            Self::MipsBe => "mipsbe",
            Self::Mips64 => "mips64",
            Self::Ppc => "ppc",
            Self::Ppc64Le => "ppc64le",
            Self::Sparc => "sparc",
            Self::ArmLe => "armle",
            Self::ArmBe => "armbe",
            Self::Aarch64 => "aarch64",
            Self::Firefox => "firefox",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Arch {
    type Err = ArchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x86" => Ok(Self::X86),
            "x86_64" => Ok(Self::X86_64),
            "x64" => Ok(Self::X64),
            "mips" => Ok(Self::Mips),
            "mipsle" => Ok(Self::MipsLe),
            "mipsbe" => Ok(Self::MipsBe),
            "mips64" => Ok(Self::Mips64),
            "ppc" => Ok(Self::Ppc),
            "ppc64le" => Ok(Self::Ppc64Le),
            "sparc" => Ok(Self::Sparc),
            "armle" => Ok(Self::ArmLe),
            "armbe" => Ok(Self::ArmBe),
            "aarch64" => Ok(Self::Aarch64),
            "firefox" => Ok(Self::Firefox),
            _ => Err(ArchError::UnknownArch(s.to_string())),
        }
    }
}
