//! Property-based tests for the opcode emitter and header derivation.
//!
//! These tests verify that:
//! - every emission method produces opcode + operand bytes for the full
//!   operand range
//! - absolute operands are always little-endian
//! - cartridge header unit fields round-trip with region lengths

use nesgen::{Cartridge, CodeEmitter, CHR_BANK_SIZE, PRG_BANK_SIZE};
use proptest::prelude::*;

proptest! {
    #[test]
    fn byte_operand_instructions_emit_two_bytes(value: u8) {
        let mut bytes = Vec::new();
        let mut asm = CodeEmitter::new(&mut bytes);
        asm.and_imm(value).unwrap();
        asm.sta_zp(value).unwrap();
        asm.stx_zp(value).unwrap();
        asm.ldy_imm(value).unwrap();
        asm.ldx_imm(value).unwrap();
        asm.lda_imm(value).unwrap();
        asm.lda_zp(value).unwrap();
        asm.inc_zp(value).unwrap();

        let expected: Vec<u8> = [0x29, 0x85, 0x86, 0xA0, 0xA2, 0xA9, 0xA5, 0xE6]
            .iter()
            .flat_map(|&opcode| [opcode, value])
            .collect();
        prop_assert_eq!(bytes, expected);
    }

    #[test]
    fn branch_operand_round_trips_through_unsigned_encoding(displacement: i8) {
        let mut bytes = Vec::new();
        let mut asm = CodeEmitter::new(&mut bytes);
        asm.bne(displacement).unwrap();
        prop_assert_eq!(bytes.len(), 2);
        prop_assert_eq!(bytes[0], 0xD0);
        prop_assert_eq!(bytes[1] as i8, displacement);
    }

    #[test]
    fn absolute_operands_are_little_endian(addr: u16) {
        let mut bytes = Vec::new();
        let mut asm = CodeEmitter::new(&mut bytes);
        asm.jsr(addr).unwrap();
        asm.sta_abs_x(addr).unwrap();

        prop_assert_eq!(&bytes[0..3], &[0x20, (addr & 0xFF) as u8, (addr >> 8) as u8]);
        prop_assert_eq!(&bytes[3..6], &[0x9D, (addr & 0xFF) as u8, (addr >> 8) as u8]);
    }

    #[test]
    fn header_units_round_trip(prg_banks in 0u8..=255, chr_banks in 0u8..=255) {
        let mut cart = Cartridge::new(vec![0; prg_banks as usize * PRG_BANK_SIZE]);
        if chr_banks > 0 {
            cart.chr_rom = Some(vec![0; chr_banks as usize * CHR_BANK_SIZE]);
        }

        let mut header = Vec::new();
        cart.write_header(&mut header).unwrap();
        prop_assert_eq!(header.len(), 16);
        prop_assert_eq!(header[4], prg_banks);
        prop_assert_eq!(header[5], if chr_banks > 0 { chr_banks } else { 0 });
    }

    #[test]
    fn unaligned_prg_lengths_fail(extra in 1usize..PRG_BANK_SIZE) {
        let cart = Cartridge::new(vec![0; PRG_BANK_SIZE + extra]);
        let mut out = Vec::new();
        prop_assert!(cart.write_header(&mut out).is_err());
        prop_assert!(out.is_empty());
    }
}
