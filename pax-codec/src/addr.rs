//! Address packing and unpacking.
//!
//! Addresses travel as raw `u64` values and are narrowed to the target's
//! word width at encode time. Values wider than the word wrap via fixed-width
//! truncation, matching native integer overflow.

use pax_spec::{ArchSelector, Endian};

/// Pack `addr` into the word width and byte order of the selector's first
/// architecture.
///
/// `None` when that architecture has no encoding profile or the selector is
/// an empty list; guessing a width for an unprofiled target would corrupt the
/// binary payload downstream.
pub fn pack_addr(selector: impl Into<ArchSelector>, addr: u64) -> Option<Vec<u8>> {
    let arch = selector.into().first()?;
    let profile = match arch.profile() {
        Some(profile) => profile,
        None => {
            tracing::debug!("pack_addr: {} has no encoding profile", arch);
            return None;
        }
    };
    let word = profile.word_bytes();
    let packed = match profile.endian {
        Endian::Little => addr.to_le_bytes()[..word].to_vec(),
        Endian::Big => addr.to_be_bytes()[8 - word..].to_vec(),
    };
    Some(packed)
}

/// Decode an address from exactly one word of `bytes`, inverse of
/// [`pack_addr`].
///
/// `None` for an unprofiled (or empty) selector, and for a byte slice whose
/// length is not the architecture's word size. The two causes are not
/// distinguishable from the return value.
pub fn unpack_addr(selector: impl Into<ArchSelector>, bytes: &[u8]) -> Option<u64> {
    let profile = selector.into().first()?.profile()?;
    let word = profile.word_bytes();
    if bytes.len() != word {
        tracing::debug!(
            "unpack_addr: expected {} bytes, got {}",
            word,
            bytes.len()
        );
        return None;
    }
    let mut full = [0u8; 8];
    let addr = match profile.endian {
        Endian::Little => {
            full[..word].copy_from_slice(bytes);
            u64::from_le_bytes(full)
        }
        Endian::Big => {
            full[8 - word..].copy_from_slice(bytes);
            u64::from_be_bytes(full)
        }
    };
    Some(addr)
}
