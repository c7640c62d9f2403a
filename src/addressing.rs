//! # Addressing Modes
//!
//! This module defines the 13 addressing modes of the 2A03 and resolves each one
//! into the [`Operand`] an instruction method receives. Resolution reads the
//! operand bytes that follow the opcode but never writes to the bus.

use crate::byte::{Byte, Word};
use crate::memory::{BusError, MemoryBus, Pointer};
use crate::processor::Processor;

/// 2A03 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ZeroPage,

    /// Zero page address indexed by X, wrapping within zero page.
    ZeroPageX,

    /// Zero page address indexed by Y, wrapping within zero page.
    ZeroPageY,

    /// Signed 8-bit offset from the address after the instruction.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit address.
    Absolute,

    /// 16-bit address indexed by X, wrapping at 0xFFFF.
    AbsoluteX,

    /// 16-bit address indexed by Y, wrapping at 0xFFFF.
    AbsoluteY,

    /// Indirect jump through a 16-bit pointer. Only used by JMP.
    ///
    /// The pointer's high byte is fetched without carrying into the page:
    /// `JMP ($10FF)` reads its target from 0x10FF and 0x1000.
    Indirect,

    /// Indexed indirect: `(ZP + X)` then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then `+ Y`.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}

/// An instruction's operand after address resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Implied,
    Accumulator,
    /// Immediate value.
    Value(Byte),
    /// Effective address: read for value instructions, written for stores,
    /// modified in place, or used as a branch or jump target.
    Address(Pointer),
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        use AddressingMode::*;
        match self {
            Implicit | Accumulator => 0,
            Immediate | ZeroPage | ZeroPageX | ZeroPageY | Relative | IndirectX | IndirectY => 1,
            Absolute | AbsoluteX | AbsoluteY | Indirect => 2,
        }
    }

    /// Resolves the operand of the instruction whose opcode is at `pc`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib2a03::{AddressingMode, Byte, FlatMemory, Operand, Pointer, Processor, Word};
    ///
    /// let mut memory = FlatMemory::new();
    /// memory.load(0x8000, &[0xB5, 0xF0]); // LDA $F0,X
    /// let mut cpu = Processor::new();
    /// cpu.set_x(Byte::new(0x20));
    ///
    /// let operand = AddressingMode::ZeroPageX
    ///     .resolve(&memory, &cpu, Word::new(0x8000))
    ///     .unwrap();
    /// assert_eq!(operand, Operand::Address(Pointer::new(Word::new(0x0010))));
    /// ```
    pub fn resolve<B: MemoryBus + ?Sized>(
        self,
        bus: &B,
        processor: &Processor,
        pc: Word,
    ) -> Result<Operand, BusError> {
        use AddressingMode::*;

        let operand = pc + 1;
        let address = match self {
            Implicit => return Ok(Operand::Implied),
            Accumulator => return Ok(Operand::Accumulator),
            Immediate => return Ok(Operand::Value(bus.read(operand)?)),
            ZeroPage => zero_page(bus.read(operand)?),
            ZeroPageX => zero_page(bus.read(operand)? + processor.x()),
            ZeroPageY => zero_page(bus.read(operand)? + processor.y()),
            Relative => {
                let offset = bus.read(operand)?.as_signed();
                let next = pc + 2;
                Word::new(next.value().wrapping_add_signed(offset as i16))
            }
            Absolute => bus.read_word(operand)?,
            AbsoluteX => bus.read_word(operand)? + processor.x(),
            AbsoluteY => bus.read_word(operand)? + processor.y(),
            Indirect => {
                let pointer = bus.read_word(operand)?;
                let low = bus.read(pointer)?;
                let high = bus.read(Word::from_bytes(pointer.high(), pointer.low() + 1))?;
                Word::from_bytes(high, low)
            }
            IndirectX => zero_page_word(bus, bus.read(operand)? + processor.x())?,
            IndirectY => zero_page_word(bus, bus.read(operand)?)? + processor.y(),
        };
        Ok(Operand::Address(Pointer::new(address)))
    }
}

fn zero_page(offset: Byte) -> Word {
    Word::from_bytes(Byte::new(0x00), offset)
}

/// Reads a little-endian pointer from zero page; the high byte wraps to 0x00.
fn zero_page_word<B: MemoryBus + ?Sized>(bus: &B, offset: Byte) -> Result<Word, BusError> {
    let low = bus.read(zero_page(offset))?;
    let high = bus.read(zero_page(offset + 1))?;
    Ok(Word::from_bytes(high, low))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::FlatMemory;

    fn address(value: u16) -> Operand {
        Operand::Address(Pointer::new(Word::new(value)))
    }

    #[test]
    fn test_operand_bytes() {
        assert_eq!(AddressingMode::Implicit.operand_bytes(), 0);
        assert_eq!(AddressingMode::Relative.operand_bytes(), 1);
        assert_eq!(AddressingMode::Indirect.operand_bytes(), 2);
    }

    #[test]
    fn test_relative_backwards_from_next_instruction() {
        let mut memory = FlatMemory::new();
        memory.load(0x8010, &[0xD0, 0xFC]); // BNE -4
        let cpu = Processor::new();

        let operand = AddressingMode::Relative
            .resolve(&memory, &cpu, Word::new(0x8010))
            .unwrap();
        assert_eq!(operand, address(0x800E));
    }

    #[test]
    fn test_indirect_page_wrap() {
        let mut memory = FlatMemory::new();
        memory.load(0x8000, &[0x6C, 0xFF, 0x10]);
        memory.load(0x10FF, &[0x34]);
        memory.load(0x1000, &[0x12]);
        memory.load(0x1100, &[0x56]);
        let cpu = Processor::new();

        let operand = AddressingMode::Indirect
            .resolve(&memory, &cpu, Word::new(0x8000))
            .unwrap();
        assert_eq!(operand, address(0x1234));
    }

    #[test]
    fn test_indirect_x_wraps_in_zero_page() {
        let mut memory = FlatMemory::new();
        memory.load(0x8000, &[0xA1, 0xFE]);
        memory.load(0x00FF, &[0x00]);
        memory.load(0x0000, &[0x03]);
        let mut cpu = Processor::new();
        cpu.set_x(Byte::new(0x01));

        let operand = AddressingMode::IndirectX
            .resolve(&memory, &cpu, Word::new(0x8000))
            .unwrap();
        assert_eq!(operand, address(0x0300));
    }

    #[test]
    fn test_indirect_y_adds_after_dereference() {
        let mut memory = FlatMemory::new();
        memory.load(0x8000, &[0xB1, 0x40]);
        memory.load(0x0040, &[0xF0, 0x02]);
        let mut cpu = Processor::new();
        cpu.set_y(Byte::new(0x20));

        let operand = AddressingMode::IndirectY
            .resolve(&memory, &cpu, Word::new(0x8000))
            .unwrap();
        assert_eq!(operand, address(0x0310));
    }

    #[test]
    fn test_absolute_y_wraps_address_space() {
        let mut memory = FlatMemory::new();
        memory.load(0x8000, &[0xB9, 0xFF, 0xFF]);
        let mut cpu = Processor::new();
        cpu.set_y(Byte::new(0x02));

        let operand = AddressingMode::AbsoluteY
            .resolve(&memory, &cpu, Word::new(0x8000))
            .unwrap();
        assert_eq!(operand, address(0x0001));
    }
}
