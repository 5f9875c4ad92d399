//! # x86 Machine-Code Emission
//!
//! Hand-encoded IA-32 instruction sequences for payload assembly. The one
//! operation exposed at this layer is immediate-form arithmetic on a
//! general-purpose register, used to move the stack pointer out of the way of
//! a payload being written below it.
//!
//! Emission is gated on the resolved architecture being 32-bit x86; every
//! other target yields `None` because these opcodes mean nothing there.

pub mod emit;
pub mod register;

pub use emit::{adjust_reg, adjust_stack_pointer};
pub use register::{Reg, NUM_REGISTERS};
