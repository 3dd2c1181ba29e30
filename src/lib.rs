//! # NES Built-in Code Emitter & Cartridge Writer
//!
//! A targeted code emitter that translates a small, fixed catalogue of
//! runtime helper calls (the NES runtime library's palette routines) into
//! exact 6502 machine-code byte sequences, and packages the result into an
//! iNES cartridge image.
//!
//! This is not a general assembler: there are no labels, no relocation, and
//! no arbitrary instruction selection. Every supported instruction and every
//! built-in sequence reproduces a reference disassembly byte-for-byte.
//!
//! ## Quick Start
//!
//! ```rust
//! use nesgen::{Builtin, Cartridge, CodeEmitter, PRG_BANK_SIZE};
//!
//! // Emit a built-in routine into a PRG-ROM buffer.
//! let mut prg = Vec::new();
//! let mut asm = CodeEmitter::new(&mut prg);
//! Builtin::PalCol.emit(&mut asm).unwrap();
//!
//! // Pad to a full 16 KiB bank and wrap it in a cartridge image.
//! prg.resize(PRG_BANK_SIZE, 0);
//! let mut image = Vec::new();
//! Cartridge::new(prg).write(&mut image).unwrap();
//!
//! assert_eq!(image.len(), 16 + PRG_BANK_SIZE);
//! ```
//!
//! ## Architecture
//!
//! - **Table-driven encoding**: every (mnemonic, addressing mode) pair the
//!   emitter supports lives in one encoding table
//! - **Append-only emission**: bytes are never revisited or patched, so all
//!   addresses are resolved before emission
//! - **Closed built-in catalogue**: built-ins are enum variants, checked for
//!   exhaustiveness at compile time
//! - **Derived header fields**: cartridge size fields are computed from the
//!   region lengths, never stored separately
//!
//! ## Modules
//!
//! - `addressing` - Addressing mode enumeration
//! - `opcodes` - Instruction encoding table
//! - `emitter` - 6502 opcode emitter
//! - `builtins` - Built-in code generator for the runtime helper catalogue
//! - `il` - Instruction records handed over by the upstream decoder
//! - `cartridge` - iNES cartridge container writer

pub mod addressing;
pub mod builtins;
pub mod cartridge;
pub mod emitter;
pub mod il;
pub mod opcodes;

// Re-export public API
pub use addressing::AddressingMode;
pub use builtins::{emit_builtin, Builtin, CodegenError};
pub use cartridge::{
    Cartridge, CartridgeError, CHR_BANK_SIZE, INES_MAGIC, INST_ROM_SIZE, PRG_BANK_SIZE,
    TRAINER_SIZE,
};
pub use emitter::CodeEmitter;
pub use il::{IlInstruction, IlOpcode};
pub use opcodes::{lookup, OpcodeEntry, ENCODING_TABLE};
