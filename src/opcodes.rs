//! # Opcode Metadata Table
//!
//! This module contains the 256-entry opcode table used to decode instructions.
//!
//! The table covers:
//! - **151 documented instructions** across the 56 mnemonics
//! - **105 undocumented opcodes** - `None`; executing one is an error
//!
//! Each documented entry records the mnemonic, the addressing mode, and the
//! instruction size in bytes.

use std::fmt;

use crate::addressing::AddressingMode;

/// The 56 documented instruction mnemonics.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs, Clc,
    Cld, Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx, Iny, Jmp,
    Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp, Rol, Ror, Rti,
    Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay, Tsx, Txa, Txs, Tya,
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format!("{self:?}").to_uppercase())
    }
}

/// Metadata for a single documented opcode.
///
/// # Examples
///
/// ```
/// use lib2a03::{AddressingMode, Mnemonic, OPCODE_TABLE};
///
/// let lda_imm = OPCODE_TABLE[0xA9].unwrap();
/// assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.size_bytes, 2);
///
/// assert!(OPCODE_TABLE[0x02].is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    pub mnemonic: Mnemonic,

    pub addressing_mode: AddressingMode,

    /// Total instruction size in bytes (opcode + operands).
    ///
    /// BRK is listed as 2 bytes: the byte after it is skipped and the pushed
    /// return address points past it.
    pub size_bytes: u8,
}

/// Opcode metadata indexed by opcode byte value.
pub const OPCODE_TABLE: [Option<OpcodeMetadata>; 256] = build_table();

const fn entry(mnemonic: Mnemonic, addressing_mode: AddressingMode) -> Option<OpcodeMetadata> {
    let size_bytes = match mnemonic {
        Mnemonic::Brk => 2,
        _ => 1 + addressing_mode.operand_bytes(),
    };
    Some(OpcodeMetadata {
        mnemonic,
        addressing_mode,
        size_bytes,
    })
}

const fn build_table() -> [Option<OpcodeMetadata>; 256] {
    use AddressingMode::*;
    use Mnemonic::*;

    let mut table = [None; 256];

    table[0x69] = entry(Adc, Immediate);
    table[0x65] = entry(Adc, ZeroPage);
    table[0x75] = entry(Adc, ZeroPageX);
    table[0x6D] = entry(Adc, Absolute);
    table[0x7D] = entry(Adc, AbsoluteX);
    table[0x79] = entry(Adc, AbsoluteY);
    table[0x61] = entry(Adc, IndirectX);
    table[0x71] = entry(Adc, IndirectY);

    table[0x29] = entry(And, Immediate);
    table[0x25] = entry(And, ZeroPage);
    table[0x35] = entry(And, ZeroPageX);
    table[0x2D] = entry(And, Absolute);
    table[0x3D] = entry(And, AbsoluteX);
    table[0x39] = entry(And, AbsoluteY);
    table[0x21] = entry(And, IndirectX);
    table[0x31] = entry(And, IndirectY);

    table[0x0A] = entry(Asl, Accumulator);
    table[0x06] = entry(Asl, ZeroPage);
    table[0x16] = entry(Asl, ZeroPageX);
    table[0x0E] = entry(Asl, Absolute);
    table[0x1E] = entry(Asl, AbsoluteX);

    table[0x90] = entry(Bcc, Relative);
    table[0xB0] = entry(Bcs, Relative);
    table[0xF0] = entry(Beq, Relative);
    table[0x30] = entry(Bmi, Relative);
    table[0xD0] = entry(Bne, Relative);
    table[0x10] = entry(Bpl, Relative);
    table[0x50] = entry(Bvc, Relative);
    table[0x70] = entry(Bvs, Relative);

    table[0x24] = entry(Bit, ZeroPage);
    table[0x2C] = entry(Bit, Absolute);

    table[0x00] = entry(Brk, Implicit);

    table[0x18] = entry(Clc, Implicit);
    table[0xD8] = entry(Cld, Implicit);
    table[0x58] = entry(Cli, Implicit);
    table[0xB8] = entry(Clv, Implicit);

    table[0xC9] = entry(Cmp, Immediate);
    table[0xC5] = entry(Cmp, ZeroPage);
    table[0xD5] = entry(Cmp, ZeroPageX);
    table[0xCD] = entry(Cmp, Absolute);
    table[0xDD] = entry(Cmp, AbsoluteX);
    table[0xD9] = entry(Cmp, AbsoluteY);
    table[0xC1] = entry(Cmp, IndirectX);
    table[0xD1] = entry(Cmp, IndirectY);

    table[0xE0] = entry(Cpx, Immediate);
    table[0xE4] = entry(Cpx, ZeroPage);
    table[0xEC] = entry(Cpx, Absolute);

    table[0xC0] = entry(Cpy, Immediate);
    table[0xC4] = entry(Cpy, ZeroPage);
    table[0xCC] = entry(Cpy, Absolute);

    table[0xC6] = entry(Dec, ZeroPage);
    table[0xD6] = entry(Dec, ZeroPageX);
    table[0xCE] = entry(Dec, Absolute);
    table[0xDE] = entry(Dec, AbsoluteX);

    table[0xCA] = entry(Dex, Implicit);
    table[0x88] = entry(Dey, Implicit);

    table[0x49] = entry(Eor, Immediate);
    table[0x45] = entry(Eor, ZeroPage);
    table[0x55] = entry(Eor, ZeroPageX);
    table[0x4D] = entry(Eor, Absolute);
    table[0x5D] = entry(Eor, AbsoluteX);
    table[0x59] = entry(Eor, AbsoluteY);
    table[0x41] = entry(Eor, IndirectX);
    table[0x51] = entry(Eor, IndirectY);

    table[0xE6] = entry(Inc, ZeroPage);
    table[0xF6] = entry(Inc, ZeroPageX);
    table[0xEE] = entry(Inc, Absolute);
    table[0xFE] = entry(Inc, AbsoluteX);

    table[0xE8] = entry(Inx, Implicit);
    table[0xC8] = entry(Iny, Implicit);

    table[0x4C] = entry(Jmp, Absolute);
    table[0x6C] = entry(Jmp, Indirect);
    table[0x20] = entry(Jsr, Absolute);

    table[0xA9] = entry(Lda, Immediate);
    table[0xA5] = entry(Lda, ZeroPage);
    table[0xB5] = entry(Lda, ZeroPageX);
    table[0xAD] = entry(Lda, Absolute);
    table[0xBD] = entry(Lda, AbsoluteX);
    table[0xB9] = entry(Lda, AbsoluteY);
    table[0xA1] = entry(Lda, IndirectX);
    table[0xB1] = entry(Lda, IndirectY);

    table[0xA2] = entry(Ldx, Immediate);
    table[0xA6] = entry(Ldx, ZeroPage);
    table[0xB6] = entry(Ldx, ZeroPageY);
    table[0xAE] = entry(Ldx, Absolute);
    table[0xBE] = entry(Ldx, AbsoluteY);

    table[0xA0] = entry(Ldy, Immediate);
    table[0xA4] = entry(Ldy, ZeroPage);
    table[0xB4] = entry(Ldy, ZeroPageX);
    table[0xAC] = entry(Ldy, Absolute);
    table[0xBC] = entry(Ldy, AbsoluteX);

    table[0x4A] = entry(Lsr, Accumulator);
    table[0x46] = entry(Lsr, ZeroPage);
    table[0x56] = entry(Lsr, ZeroPageX);
    table[0x4E] = entry(Lsr, Absolute);
    table[0x5E] = entry(Lsr, AbsoluteX);

    table[0xEA] = entry(Nop, Implicit);

    table[0x09] = entry(Ora, Immediate);
    table[0x05] = entry(Ora, ZeroPage);
    table[0x15] = entry(Ora, ZeroPageX);
    table[0x0D] = entry(Ora, Absolute);
    table[0x1D] = entry(Ora, AbsoluteX);
    table[0x19] = entry(Ora, AbsoluteY);
    table[0x01] = entry(Ora, IndirectX);
    table[0x11] = entry(Ora, IndirectY);

    table[0x48] = entry(Pha, Implicit);
    table[0x08] = entry(Php, Implicit);
    table[0x68] = entry(Pla, Implicit);
    table[0x28] = entry(Plp, Implicit);

    table[0x2A] = entry(Rol, Accumulator);
    table[0x26] = entry(Rol, ZeroPage);
    table[0x36] = entry(Rol, ZeroPageX);
    table[0x2E] = entry(Rol, Absolute);
    table[0x3E] = entry(Rol, AbsoluteX);

    table[0x6A] = entry(Ror, Accumulator);
    table[0x66] = entry(Ror, ZeroPage);
    table[0x76] = entry(Ror, ZeroPageX);
    table[0x6E] = entry(Ror, Absolute);
    table[0x7E] = entry(Ror, AbsoluteX);

    table[0x40] = entry(Rti, Implicit);
    table[0x60] = entry(Rts, Implicit);

    table[0xE9] = entry(Sbc, Immediate);
    table[0xE5] = entry(Sbc, ZeroPage);
    table[0xF5] = entry(Sbc, ZeroPageX);
    table[0xED] = entry(Sbc, Absolute);
    table[0xFD] = entry(Sbc, AbsoluteX);
    table[0xF9] = entry(Sbc, AbsoluteY);
    table[0xE1] = entry(Sbc, IndirectX);
    table[0xF1] = entry(Sbc, IndirectY);

    table[0x38] = entry(Sec, Implicit);
    table[0xF8] = entry(Sed, Implicit);
    table[0x78] = entry(Sei, Implicit);

    table[0x85] = entry(Sta, ZeroPage);
    table[0x95] = entry(Sta, ZeroPageX);
    table[0x8D] = entry(Sta, Absolute);
    table[0x9D] = entry(Sta, AbsoluteX);
    table[0x99] = entry(Sta, AbsoluteY);
    table[0x81] = entry(Sta, IndirectX);
    table[0x91] = entry(Sta, IndirectY);

    table[0x86] = entry(Stx, ZeroPage);
    table[0x96] = entry(Stx, ZeroPageY);
    table[0x8E] = entry(Stx, Absolute);

    table[0x84] = entry(Sty, ZeroPage);
    table[0x94] = entry(Sty, ZeroPageX);
    table[0x8C] = entry(Sty, Absolute);

    table[0xAA] = entry(Tax, Implicit);
    table[0xA8] = entry(Tay, Implicit);
    table[0xBA] = entry(Tsx, Implicit);
    table[0x8A] = entry(Txa, Implicit);
    table[0x9A] = entry(Txs, Implicit);
    table[0x98] = entry(Tya, Implicit);

    table
}
