//! Endianness resolution over architecture selectors.

use pax_spec::{Arch, ArchSelector, Endian};

/// Byte order for the selector's first architecture.
///
/// Total over every selector: identifiers without a native byte order, and
/// the empty preference list, resolve to [`Endian::Little`] so callers can
/// format addresses while the target is still being probed.
pub fn endian(selector: impl Into<ArchSelector>) -> Endian {
    match selector.into().first().and_then(Arch::endian) {
        Some(endian) => endian,
        None => Endian::Little,
    }
}
