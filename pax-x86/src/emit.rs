//! Immediate-form arithmetic emission.
//!
//! ## Encoding
//!
//! ```text
//! ADD r32, imm32: 81 /0  ->  81 C0+reg imm32(le)
//! SUB r32, imm32: 81 /5  ->  81 E8+reg imm32(le)
//! ```
//!
//! Output length is fixed at six bytes: one opcode byte, one ModR/M byte, and
//! a four-byte little-endian immediate.

use pax_spec::{Arch, ArchSelector};

use crate::register::Reg;

/// Opcode byte for immediate-form arithmetic on r/m32
pub const OPCODE_ARITH_IMM32: u8 = 0x81;

/// ModR/M base for the ADD form (/0, register-direct)
pub const MODRM_ADD_BASE: u8 = 0xC0;

/// ModR/M base for the SUB form (/5, register-direct)
pub const MODRM_SUB_BASE: u8 = 0xE8;

/// Emitted instruction length in bytes
pub const ADJUST_LEN: usize = 6;

/// Emit code that adds `adjustment` to `reg`.
///
/// A non-negative adjustment emits the ADD form; a negative one emits the SUB
/// form with the magnitude as the immediate. `i32::MIN` is well defined: its
/// magnitude is representable unsigned.
pub fn adjust_reg(reg: Reg, adjustment: i32) -> Vec<u8> {
    let (modrm_base, magnitude) = if adjustment >= 0 {
        (MODRM_ADD_BASE, adjustment as u32)
    } else {
        (MODRM_SUB_BASE, adjustment.unsigned_abs())
    };
    let mut code = Vec::with_capacity(ADJUST_LEN);
    code.push(OPCODE_ARITH_IMM32);
    code.push(modrm_base + reg.index() as u8);
    code.extend_from_slice(&magnitude.to_le_bytes());
    code
}

/// Emit code that adjusts the stack pointer by `adjustment`.
///
/// Defined only when the selector's first architecture is 32-bit x86; every
/// other target (64-bit x86 included) yields `None`. Adjustments outside the
/// 32-bit range wrap via two's-complement truncation.
pub fn adjust_stack_pointer(
    selector: impl Into<ArchSelector>,
    adjustment: i64,
) -> Option<Vec<u8>> {
    match selector.into().first()? {
        Arch::X86 => Some(adjust_reg(Reg::SP, adjustment as i32)),
        _ => None,
    }
}
