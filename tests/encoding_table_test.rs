//! Encoding table validation tests
//!
//! Verifies that the instruction encoding table is complete, unambiguous,
//! and matches the documented 6502 opcodes.

use nesgen::{lookup, AddressingMode, ENCODING_TABLE};

#[test]
fn test_table_covers_supported_instruction_set() {
    // One entry per supported (mnemonic, mode) pair.
    assert_eq!(
        ENCODING_TABLE.len(),
        14,
        "Encoding table should have exactly 14 entries"
    );
}

#[test]
fn test_no_duplicate_mnemonic_mode_pairs() {
    for (i, a) in ENCODING_TABLE.iter().enumerate() {
        for b in &ENCODING_TABLE[i + 1..] {
            assert!(
                !(a.mnemonic == b.mnemonic && a.addressing_mode == b.addressing_mode),
                "Duplicate entry for {} {:?}",
                a.mnemonic,
                a.addressing_mode
            );
        }
    }
}

#[test]
fn test_no_duplicate_opcode_bytes() {
    for (i, a) in ENCODING_TABLE.iter().enumerate() {
        for b in &ENCODING_TABLE[i + 1..] {
            assert_ne!(
                a.opcode, b.opcode,
                "Opcode 0x{:02X} assigned to both {} and {}",
                a.opcode, a.mnemonic, b.mnemonic
            );
        }
    }
}

#[test]
fn test_known_opcodes() {
    // Spot-check entries against the 6502 reference.
    let cases = [
        ("JSR", AddressingMode::Absolute, 0x20),
        ("AND", AddressingMode::Immediate, 0x29),
        ("RTS", AddressingMode::Implicit, 0x60),
        ("STA", AddressingMode::ZeroPage, 0x85),
        ("STA", AddressingMode::AbsoluteX, 0x9D),
        ("STX", AddressingMode::ZeroPage, 0x86),
        ("TXA", AddressingMode::Implicit, 0x8A),
        ("TAX", AddressingMode::Implicit, 0xAA),
        ("LDY", AddressingMode::Immediate, 0xA0),
        ("LDX", AddressingMode::Immediate, 0xA2),
        ("LDA", AddressingMode::Immediate, 0xA9),
        ("LDA", AddressingMode::ZeroPage, 0xA5),
        ("BNE", AddressingMode::Relative, 0xD0),
        ("INC", AddressingMode::ZeroPage, 0xE6),
    ];

    for (mnemonic, mode, opcode) in cases {
        let entry = lookup(mnemonic, mode)
            .unwrap_or_else(|| panic!("Missing table entry for {} {:?}", mnemonic, mode));
        assert_eq!(
            entry.opcode, opcode,
            "{} {:?} should encode as 0x{:02X}, got 0x{:02X}",
            mnemonic, mode, opcode, entry.opcode
        );
    }
}

#[test]
fn test_operand_widths_match_modes() {
    for entry in ENCODING_TABLE {
        let width = entry.addressing_mode.operand_bytes();
        assert!(
            width <= 2,
            "{} {:?} has impossible operand width {}",
            entry.mnemonic,
            entry.addressing_mode,
            width
        );
    }
}

#[test]
fn test_lookup_rejects_unsupported_pairs() {
    assert!(lookup("LDA", AddressingMode::AbsoluteX).is_none());
    assert!(lookup("NOP", AddressingMode::Implicit).is_none());
    assert!(lookup("lda", AddressingMode::Immediate).is_none());
}
