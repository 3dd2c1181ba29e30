//! # Opcode Emitter
//!
//! This module provides [`CodeEmitter`], which writes 6502 machine code to a
//! caller-provided byte sink. Each supported (mnemonic, addressing mode) pair
//! is exposed as one method that writes the opcode byte followed by the
//! correctly-sized operand bytes:
//!
//! - Implicit instructions write 1 byte (opcode only)
//! - Immediate/zero-page/relative instructions write 2 bytes
//! - Absolute instructions write 3 bytes (operand little-endian)
//!
//! Output is append-only: bytes already written are never revisited or
//! patched, so absolute addresses and branch displacements must be resolved
//! by the caller before emission.

use std::io::{self, Write};

use crate::opcodes;

/// Emits 6502 machine code to an underlying byte sink.
///
/// The emitter owns the sink for the duration of emission and tracks a
/// running byte offset (the program counter within the emitted block), which
/// callers use to resolve addresses ahead of time.
///
/// All methods propagate sink write failures as [`std::io::Error`]; no
/// buffering happens beyond what the sink itself performs.
///
/// # Examples
///
/// ```
/// use nesgen::CodeEmitter;
///
/// let mut code = Vec::new();
/// let mut emitter = CodeEmitter::new(&mut code);
/// emitter.lda_imm(0x20).unwrap();
/// emitter.rts().unwrap();
/// assert_eq!(code, [0xA9, 0x20, 0x60]);
/// ```
#[derive(Debug)]
pub struct CodeEmitter<W: Write> {
    sink: W,
    offset: u16,
}

impl<W: Write> CodeEmitter<W> {
    /// Create an emitter writing to `sink`, starting at offset 0.
    pub fn new(sink: W) -> Self {
        CodeEmitter { sink, offset: 0 }
    }

    /// Byte offset of the next instruction to be emitted, relative to where
    /// this emitter started writing.
    pub fn offset(&self) -> u16 {
        self.offset
    }

    /// Consume the emitter and return the underlying sink.
    pub fn into_inner(self) -> W {
        self.sink
    }

    /// JSR absolute - call the subroutine at `addr`.
    pub fn jsr(&mut self, addr: u16) -> io::Result<()> {
        self.op_word(opcodes::JSR_ABS, addr)
    }

    /// AND immediate - bitwise AND the accumulator with `value`.
    pub fn and_imm(&mut self, value: u8) -> io::Result<()> {
        self.op_byte(opcodes::AND_IMM, value)
    }

    /// RTS - return from subroutine.
    pub fn rts(&mut self) -> io::Result<()> {
        self.op_implied(opcodes::RTS)
    }

    /// STA zero page - store the accumulator at zero-page address `addr`.
    pub fn sta_zp(&mut self, addr: u8) -> io::Result<()> {
        self.op_byte(opcodes::STA_ZP, addr)
    }

    /// STA absolute,X - store the accumulator at `addr` + X.
    pub fn sta_abs_x(&mut self, addr: u16) -> io::Result<()> {
        self.op_word(opcodes::STA_ABS_X, addr)
    }

    /// STX zero page - store the X register at zero-page address `addr`.
    pub fn stx_zp(&mut self, addr: u8) -> io::Result<()> {
        self.op_byte(opcodes::STX_ZP, addr)
    }

    /// TXA - transfer X to the accumulator.
    pub fn txa(&mut self) -> io::Result<()> {
        self.op_implied(opcodes::TXA)
    }

    /// TAX - transfer the accumulator to X.
    pub fn tax(&mut self) -> io::Result<()> {
        self.op_implied(opcodes::TAX)
    }

    /// LDY immediate - load the Y register with `value`.
    pub fn ldy_imm(&mut self, value: u8) -> io::Result<()> {
        self.op_byte(opcodes::LDY_IMM, value)
    }

    /// LDX immediate - load the X register with `value`.
    pub fn ldx_imm(&mut self, value: u8) -> io::Result<()> {
        self.op_byte(opcodes::LDX_IMM, value)
    }

    /// LDA immediate - load the accumulator with `value`.
    pub fn lda_imm(&mut self, value: u8) -> io::Result<()> {
        self.op_byte(opcodes::LDA_IMM, value)
    }

    /// LDA zero page - load the accumulator from zero-page address `addr`.
    pub fn lda_zp(&mut self, addr: u8) -> io::Result<()> {
        self.op_byte(opcodes::LDA_ZP, addr)
    }

    /// BNE - branch by the signed `displacement` if the zero flag is clear.
    ///
    /// The displacement is relative to the address of the instruction that
    /// follows the branch, and is encoded as its unsigned byte value.
    pub fn bne(&mut self, displacement: i8) -> io::Result<()> {
        self.op_byte(opcodes::BNE, displacement as u8)
    }

    /// INC zero page - increment the byte at zero-page address `addr`.
    pub fn inc_zp(&mut self, addr: u8) -> io::Result<()> {
        self.op_byte(opcodes::INC_ZP, addr)
    }

    /// Write an opcode with no operand.
    fn op_implied(&mut self, opcode: u8) -> io::Result<()> {
        self.sink.write_all(&[opcode])?;
        self.offset = self.offset.wrapping_add(1);
        Ok(())
    }

    /// Write an opcode followed by a one-byte operand.
    fn op_byte(&mut self, opcode: u8, operand: u8) -> io::Result<()> {
        self.sink.write_all(&[opcode, operand])?;
        self.offset = self.offset.wrapping_add(2);
        Ok(())
    }

    /// Write an opcode followed by a little-endian two-byte operand.
    fn op_word(&mut self, opcode: u8, operand: u16) -> io::Result<()> {
        let [lo, hi] = operand.to_le_bytes();
        self.sink.write_all(&[opcode, lo, hi])?;
        self.offset = self.offset.wrapping_add(3);
        Ok(())
    }
}
