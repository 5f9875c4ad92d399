//! # Address Encoding
//!
//! Architecture-aware address encoding for payload tooling: resolve a
//! selector's byte order, pack and unpack addresses in the target's word
//! width and byte order, and emit the x86 stack-adjustment sequence.
//!
//! ## Example
//!
//! ```rust
//! use pax_codec::{endian, pack_addr, unpack_addr};
//! use pax_spec::{Arch, Endian};
//!
//! assert_eq!(endian(Arch::Mips), Endian::Big);
//!
//! let packed = pack_addr(Arch::X86, 0x41424344).unwrap();
//! assert_eq!(packed, b"DCBA");
//! assert_eq!(unpack_addr(Arch::X86, &packed), Some(0x41424344));
//! ```
//!
//! All four operations accept either a single [`Arch`](pax_spec::Arch) or a
//! preference list and resolve against the list's first element.

pub mod addr;
pub mod endianness;

pub use addr::{pack_addr, unpack_addr};
pub use endianness::endian;
pub use pax_x86::adjust_stack_pointer;
