//! Cross-crate interaction tests.
//!
//! Verifies that selector reduction, registry lookups, and emission agree
//! when driven through the public façade.

use pax_codec::{adjust_stack_pointer, endian, pack_addr, unpack_addr};
use pax_spec::{Arch, ArchSelector, Endian};
use pax_x86::{adjust_reg, Reg};

// ============================================================================
// Selector Reduction Is Uniform Across Operations
// ============================================================================

#[test]
fn test_single_and_one_element_list_agree() {
    for arch in Arch::ALL {
        assert_eq!(endian(arch), endian(vec![arch]), "{arch}");
        assert_eq!(
            pack_addr(arch, 0x41424344),
            pack_addr(vec![arch], 0x41424344),
            "{arch}"
        );
        assert_eq!(
            adjust_stack_pointer(arch, 100),
            adjust_stack_pointer(vec![arch], 100),
            "{arch}"
        );
    }
}

#[test]
fn test_tail_of_list_is_never_consulted() {
    let head = Arch::Ppc;
    for tail in Arch::ALL {
        let selector = vec![head, tail];
        assert_eq!(endian(selector.clone()), Endian::Big, "{tail}");
        assert_eq!(
            pack_addr(selector.clone(), 0x41424344).unwrap(),
            b"ABCD",
            "{tail}"
        );
        assert_eq!(adjust_stack_pointer(selector, 100), None, "{tail}");
    }
}

#[test]
fn test_empty_selector() {
    let empty = ArchSelector::Prioritized(vec![]);
    assert_eq!(empty.first(), None);
    assert_eq!(endian(empty.clone()), Endian::Little);
    assert_eq!(pack_addr(empty.clone(), 0x41424344), None);
    assert_eq!(unpack_addr(empty.clone(), b"DCBA"), None);
    assert_eq!(adjust_stack_pointer(empty, 100), None);
}

// ============================================================================
// Registry Names Drive the Codec
// ============================================================================

#[test]
fn test_parsed_names_pack_correctly() {
    let arch: Arch = "mipsbe".parse().unwrap();
    assert_eq!(pack_addr(arch, 0x41424344).unwrap(), b"ABCD");

    let arch: Arch = "x64".parse().unwrap();
    assert_eq!(
        pack_addr(arch, 0x4142434445464748).unwrap(),
        b"HGFEDCBA"
    );
}

// ============================================================================
// Emitter Agrees With the Façade
// ============================================================================

#[test]
fn test_facade_delegates_to_adjust_reg() {
    assert_eq!(
        adjust_stack_pointer(Arch::X86, 100).unwrap(),
        adjust_reg(Reg::SP, 100)
    );
    assert_eq!(
        adjust_stack_pointer(Arch::X86, -0x1000).unwrap(),
        adjust_reg(Reg::SP, -0x1000)
    );
}

#[test]
fn test_adjustment_wraps_like_packing() {
    // Both layers share the truncate-on-overflow policy
    assert_eq!(
        adjust_stack_pointer(Arch::X86, (1i64 << 32) + 100),
        adjust_stack_pointer(Arch::X86, 100)
    );
    assert_eq!(
        pack_addr(Arch::X86, (1u64 << 32) + 0x41424344),
        pack_addr(Arch::X86, 0x41424344)
    );
}
