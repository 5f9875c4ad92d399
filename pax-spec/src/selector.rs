//! Caller-facing architecture selection.

use serde::{Deserialize, Serialize};

use crate::arch::Arch;

/// A single architecture or an ordered preference list.
///
/// Every consuming operation reduces a list to its first element before any
/// registry lookup; the remaining entries are informational only and never
/// consulted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArchSelector {
    Single(Arch),
    Prioritized(Vec<Arch>),
}

impl ArchSelector {
    /// The architecture all lookups resolve against.
    ///
    /// `None` only for an empty preference list.
    #[inline]
    pub fn first(&self) -> Option<Arch> {
        match self {
            Self::Single(arch) => Some(*arch),
            Self::Prioritized(list) => list.first().copied(),
        }
    }
}

impl From<Arch> for ArchSelector {
    fn from(arch: Arch) -> Self {
        Self::Single(arch)
    }
}

impl From<Vec<Arch>> for ArchSelector {
    fn from(list: Vec<Arch>) -> Self {
        Self::Prioritized(list)
    }
}

impl From<&[Arch]> for ArchSelector {
    fn from(list: &[Arch]) -> Self {
        Self::Prioritized(list.to_vec())
    }
}
