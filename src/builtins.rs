//! # Built-in Code Generator
//!
//! This module generates the machine code for the runtime helper catalogue:
//! the palette routines from the NES runtime support library. Each built-in
//! expands to a fixed instruction sequence, verified byte-for-byte against a
//! disassembly of a known-good reference binary.
//!
//! The routines live at fixed relative positions within the runtime support
//! block, and several of them share a common tail: `pal_all`, `pal_bg` and
//! `pal_spr` all funnel into `pal_copy`, which performs the actual copy into
//! the shadow palette buffer. Branch displacements to that shared tail are
//! computed from the recorded block layout rather than hardcoded, so each
//! sequence can be regenerated and checked against the reference bytes.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use log::debug;

use crate::emitter::CodeEmitter;

// Zero-page locations and runtime addresses used by the palette routines.
// These match the reference runtime's memory map.

/// Zero-page pointer (low byte) to the caller's palette data.
const PAL_PTR_LO: u8 = 0x17;
/// Zero-page pointer (high byte) to the caller's palette data.
const PAL_PTR_HI: u8 = 0x18;
/// Zero-page count of palette entries for `pal_copy` to transfer.
const PAL_COUNT: u8 = 0x19;
/// Zero-page flag bumped after palette writes so the NMI handler re-uploads.
const PAL_UPDATE: u8 = 0x07;
/// Shadow palette buffer in RAM.
const PAL_BUF: u16 = 0x01C0;
/// Runtime helper that pops a byte argument off the parameter stack.
const POPA: u16 = 0x8550;

/// A runtime helper from the built-in catalogue.
///
/// The catalogue is closed: adding a helper means adding a variant here and
/// an arm in [`Builtin::emit`], which the compiler checks for exhaustiveness.
/// Names from the upstream translator are mapped to variants via [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    /// `pal_all(data)` - set all 32 palette entries from a data pointer.
    PalAll,

    /// Shared copy tail used by `pal_all`/`pal_bg`/`pal_spr`.
    ///
    /// Not part of the public helper surface; the other routines fall
    /// through or branch into it.
    PalCopy,

    /// `pal_bg(data)` - set the 16 background palette entries.
    PalBg,

    /// `pal_spr(data)` - set the 16 sprite palette entries.
    PalSpr,

    /// `pal_col(index, color)` - set a single palette entry.
    PalCol,
}

impl Builtin {
    /// Every built-in, in block layout order.
    pub const ALL: [Builtin; 5] = [
        Builtin::PalAll,
        Builtin::PalCopy,
        Builtin::PalBg,
        Builtin::PalSpr,
        Builtin::PalCol,
    ];

    /// Symbolic name of this built-in, as the upstream translator spells it.
    pub fn name(&self) -> &'static str {
        match self {
            Builtin::PalAll => "pal_all",
            Builtin::PalCopy => "pal_copy",
            Builtin::PalBg => "pal_bg",
            Builtin::PalSpr => "pal_spr",
            Builtin::PalCol => "pal_col",
        }
    }

    /// Start offset of this routine within the runtime support block.
    ///
    /// The offsets come from the reference binary's layout. `pal_all` falls
    /// through into `pal_copy` at +8; the full `pal_copy` routine (prologue
    /// plus the copy loop emitted by general instruction selection) occupies
    /// 18 bytes, putting `pal_bg` at +26.
    fn start(&self) -> u16 {
        match self {
            Builtin::PalAll => 0,
            Builtin::PalCopy => 8,
            Builtin::PalBg => 26,
            Builtin::PalSpr => 36,
            Builtin::PalCol => 45,
        }
    }

    /// Append this built-in's instruction sequence to the emitter's sink.
    ///
    /// The sequences reproduce the reference disassembly byte-for-byte. They
    /// are position-dependent: branch displacements assume each routine sits
    /// at its [`Builtin::start`] offset within the runtime block, so the
    /// caller must emit routines in block layout order.
    pub fn emit<W: Write>(self, asm: &mut CodeEmitter<W>) -> Result<(), CodegenError> {
        debug!("emitting built-in {} at offset {}", self, asm.offset());

        match self {
            Builtin::PalAll => {
                asm.sta_zp(PAL_PTR_LO)?;
                asm.stx_zp(PAL_PTR_HI)?;
                asm.ldx_imm(0x00)?;
                // All 32 entries; falls through into pal_copy.
                asm.lda_imm(0x20)?;
            }
            Builtin::PalCopy => {
                asm.sta_zp(PAL_COUNT)?;
                asm.ldy_imm(0x00)?;
            }
            Builtin::PalBg => {
                let base = asm.offset();
                asm.sta_zp(PAL_PTR_LO)?;
                asm.stx_zp(PAL_PTR_HI)?;
                asm.ldx_imm(0x00)?;
                // Background half only; A is non-zero so the branch is
                // always taken.
                asm.lda_imm(0x10)?;
                asm.bne(self.branch_to(Builtin::PalCopy, asm.offset().wrapping_sub(base)))?;
            }
            Builtin::PalSpr => {
                let base = asm.offset();
                asm.sta_zp(PAL_PTR_LO)?;
                asm.stx_zp(PAL_PTR_HI)?;
                // Sprite half: start index 16, count 16 via TXA.
                asm.ldx_imm(0x10)?;
                asm.txa()?;
                asm.bne(self.branch_to(Builtin::PalCopy, asm.offset().wrapping_sub(base)))?;
            }
            Builtin::PalCol => {
                // Color arrives in A, index is popped off the parameter
                // stack.
                asm.sta_zp(PAL_PTR_LO)?;
                asm.jsr(POPA)?;
                asm.and_imm(0x1F)?;
                asm.tax()?;
                asm.lda_zp(PAL_PTR_LO)?;
                asm.sta_abs_x(PAL_BUF)?;
                asm.inc_zp(PAL_UPDATE)?;
                asm.rts()?;
            }
        }

        Ok(())
    }

    /// Displacement from a branch in this routine to the start of `target`.
    ///
    /// `emitted` is the number of bytes of this routine already written when
    /// the branch opcode is reached; the displacement is relative to the
    /// byte after the branch's operand.
    fn branch_to(self, target: Builtin, emitted: u16) -> i8 {
        let fall_through = i32::from(self.start()) + i32::from(emitted) + 2;
        (i32::from(target.start()) - fall_through) as i8
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Builtin {
    type Err = CodegenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pal_all" => Ok(Builtin::PalAll),
            "pal_copy" => Ok(Builtin::PalCopy),
            "pal_bg" => Ok(Builtin::PalBg),
            "pal_spr" => Ok(Builtin::PalSpr),
            "pal_col" => Ok(Builtin::PalCol),
            _ => Err(CodegenError::UnknownBuiltin(s.to_string())),
        }
    }
}

/// Emit the built-in named `name` to the emitter's sink.
///
/// The name is resolved before any byte is written, so an unknown name
/// leaves the sink untouched.
///
/// # Examples
///
/// ```
/// use nesgen::{emit_builtin, CodeEmitter};
///
/// let mut code = Vec::new();
/// let mut asm = CodeEmitter::new(&mut code);
/// emit_builtin("pal_copy", &mut asm).unwrap();
/// assert_eq!(code, [0x85, 0x19, 0xA0, 0x00]);
/// ```
pub fn emit_builtin<W: Write>(name: &str, asm: &mut CodeEmitter<W>) -> Result<(), CodegenError> {
    let builtin: Builtin = name.parse()?;
    builtin.emit(asm)
}

/// Errors that can occur during built-in code generation.
#[derive(Debug)]
pub enum CodegenError {
    /// The requested name is not in the built-in catalogue.
    ///
    /// Contains the offending name for diagnostics.
    UnknownBuiltin(String),

    /// The underlying byte sink rejected a write.
    Io(io::Error),
}

impl fmt::Display for CodegenError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CodegenError::UnknownBuiltin(name) => {
                write!(f, "built-in '{}' is not implemented", name)
            }
            CodegenError::Io(err) => write!(f, "write to output sink failed: {}", err),
        }
    }
}

impl std::error::Error for CodegenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodegenError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for CodegenError {
    fn from(err: io::Error) -> Self {
        CodegenError::Io(err)
    }
}
