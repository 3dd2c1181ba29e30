//! # Addressing Modes
//!
//! This module defines the addressing modes used by the code emitter. The
//! emitter targets a small, fixed catalogue of runtime helpers, so only the
//! modes those helpers actually use are represented here.
//!
//! The addressing mode determines how many operand bytes follow an opcode:
//!
//! - **0 bytes**: Implicit
//! - **1 byte**: Immediate, ZeroPage, Relative
//! - **2 bytes**: Absolute, AbsoluteX (little-endian)

/// Addressing mode for an emitted 6502 instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: RTS, TXA, TAX
    Implicit,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$20 (load immediate value 0x20 into accumulator)
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: STA $17 (store to address 0x0017)
    ZeroPage,

    /// Signed 8-bit offset for branch instructions, relative to the address
    /// of the next instruction.
    ///
    /// Example: BNE -28 (branch backwards if zero flag clear)
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JSR $8550 (call subroutine at address 0x8550)
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: STA $01C0,X (store to address 0x01C0 + X)
    AbsoluteX,
}

impl AddressingMode {
    /// Number of operand bytes that follow the opcode byte for this mode.
    pub fn operand_bytes(&self) -> u8 {
        match self {
            AddressingMode::Implicit => 0,
            AddressingMode::Immediate | AddressingMode::ZeroPage | AddressingMode::Relative => 1,
            AddressingMode::Absolute | AddressingMode::AbsoluteX => 2,
        }
    }
}
