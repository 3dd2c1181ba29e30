//! # Instruction Encoding Table
//!
//! This module contains the encoding table that serves as the single source
//! of truth for every (mnemonic, addressing mode) pair the emitter supports.
//!
//! Unlike a full 256-entry decode table, this table only covers the
//! instructions needed to reproduce the runtime helper catalogue. Each entry
//! maps a mnemonic and addressing mode to its one-byte opcode; the operand
//! width is implied by the addressing mode.

use crate::addressing::AddressingMode;

// Opcode byte constants. The emitter methods reference these directly; the
// encoding table below is built from the same constants so the two can never
// disagree.

/// JSR absolute - jump to subroutine.
pub const JSR_ABS: u8 = 0x20;
/// AND immediate - bitwise AND accumulator with constant.
pub const AND_IMM: u8 = 0x29;
/// RTS implied - return from subroutine.
pub const RTS: u8 = 0x60;
/// STA zero page - store accumulator.
pub const STA_ZP: u8 = 0x85;
/// STA absolute,X - store accumulator indexed by X.
pub const STA_ABS_X: u8 = 0x9D;
/// STX zero page - store X register.
pub const STX_ZP: u8 = 0x86;
/// TXA implied - transfer X to accumulator.
pub const TXA: u8 = 0x8A;
/// TAX implied - transfer accumulator to X.
pub const TAX: u8 = 0xAA;
/// LDY immediate - load Y register with constant.
pub const LDY_IMM: u8 = 0xA0;
/// LDX immediate - load X register with constant.
pub const LDX_IMM: u8 = 0xA2;
/// LDA immediate - load accumulator with constant.
pub const LDA_IMM: u8 = 0xA9;
/// LDA zero page - load accumulator from zero page.
pub const LDA_ZP: u8 = 0xA5;
/// BNE relative - branch if zero flag clear.
pub const BNE: u8 = 0xD0;
/// INC zero page - increment memory in zero page.
pub const INC_ZP: u8 = 0xE6;

/// One entry in the instruction encoding table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeEntry {
    /// Instruction mnemonic (e.g., "LDA", "STA").
    pub mnemonic: &'static str,

    /// Addressing mode for this encoding of the instruction.
    pub addressing_mode: AddressingMode,

    /// The one-byte opcode for this (mnemonic, mode) pair.
    pub opcode: u8,
}

/// Complete encoding table for the supported instruction set.
///
/// Covers exactly the (mnemonic, addressing mode) pairs the built-in code
/// generator needs. Look up entries with [`lookup`].
pub const ENCODING_TABLE: &[OpcodeEntry] = &[
    OpcodeEntry {
        mnemonic: "JSR",
        addressing_mode: AddressingMode::Absolute,
        opcode: JSR_ABS,
    },
    OpcodeEntry {
        mnemonic: "AND",
        addressing_mode: AddressingMode::Immediate,
        opcode: AND_IMM,
    },
    OpcodeEntry {
        mnemonic: "RTS",
        addressing_mode: AddressingMode::Implicit,
        opcode: RTS,
    },
    OpcodeEntry {
        mnemonic: "STA",
        addressing_mode: AddressingMode::ZeroPage,
        opcode: STA_ZP,
    },
    OpcodeEntry {
        mnemonic: "STA",
        addressing_mode: AddressingMode::AbsoluteX,
        opcode: STA_ABS_X,
    },
    OpcodeEntry {
        mnemonic: "STX",
        addressing_mode: AddressingMode::ZeroPage,
        opcode: STX_ZP,
    },
    OpcodeEntry {
        mnemonic: "TXA",
        addressing_mode: AddressingMode::Implicit,
        opcode: TXA,
    },
    OpcodeEntry {
        mnemonic: "TAX",
        addressing_mode: AddressingMode::Implicit,
        opcode: TAX,
    },
    OpcodeEntry {
        mnemonic: "LDY",
        addressing_mode: AddressingMode::Immediate,
        opcode: LDY_IMM,
    },
    OpcodeEntry {
        mnemonic: "LDX",
        addressing_mode: AddressingMode::Immediate,
        opcode: LDX_IMM,
    },
    OpcodeEntry {
        mnemonic: "LDA",
        addressing_mode: AddressingMode::Immediate,
        opcode: LDA_IMM,
    },
    OpcodeEntry {
        mnemonic: "LDA",
        addressing_mode: AddressingMode::ZeroPage,
        opcode: LDA_ZP,
    },
    OpcodeEntry {
        mnemonic: "BNE",
        addressing_mode: AddressingMode::Relative,
        opcode: BNE,
    },
    OpcodeEntry {
        mnemonic: "INC",
        addressing_mode: AddressingMode::ZeroPage,
        opcode: INC_ZP,
    },
];

/// Look up the encoding table entry for a (mnemonic, addressing mode) pair.
///
/// Returns `None` if the pair is not part of the supported instruction set.
///
/// # Examples
///
/// ```
/// use nesgen::{lookup, AddressingMode};
///
/// let lda_imm = lookup("LDA", AddressingMode::Immediate).unwrap();
/// assert_eq!(lda_imm.opcode, 0xA9);
///
/// assert!(lookup("NOP", AddressingMode::Implicit).is_none());
/// ```
pub fn lookup(mnemonic: &str, mode: AddressingMode) -> Option<&'static OpcodeEntry> {
    ENCODING_TABLE
        .iter()
        .find(|entry| entry.mnemonic == mnemonic && entry.addressing_mode == mode)
}
