//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each instruction has a memory form taking a [`Reference`] and an accumulator
//! form (`*_accumulator`). The bit shifted out always lands in C; N and Z are set
//! from the result.

use crate::byte::Byte;
use crate::memory::{BusError, MemoryBus, Reference};
use crate::processor::Processor;

impl Processor {
    /// Executes the ASL (Arithmetic Shift Left) instruction on memory.
    pub fn asl<B: MemoryBus + ?Sized>(
        &mut self,
        mut operand: Reference<'_, B>,
    ) -> Result<(), BusError> {
        operand.modify(|value| self.shift_left(value)).map(drop)
    }

    pub fn asl_accumulator(&mut self) {
        self.accumulator = self.shift_left(self.accumulator);
    }

    /// Executes the LSR (Logical Shift Right) instruction on memory.
    ///
    /// Bit 7 of the result is always clear, so N always ends up clear.
    pub fn lsr<B: MemoryBus + ?Sized>(
        &mut self,
        mut operand: Reference<'_, B>,
    ) -> Result<(), BusError> {
        operand.modify(|value| self.shift_right(value)).map(drop)
    }

    pub fn lsr_accumulator(&mut self) {
        self.accumulator = self.shift_right(self.accumulator);
    }

    /// Executes the ROL (Rotate Left) instruction on memory.
    pub fn rol<B: MemoryBus + ?Sized>(
        &mut self,
        mut operand: Reference<'_, B>,
    ) -> Result<(), BusError> {
        operand.modify(|value| self.rotate_left(value)).map(drop)
    }

    pub fn rol_accumulator(&mut self) {
        self.accumulator = self.rotate_left(self.accumulator);
    }

    /// Executes the ROR (Rotate Right) instruction on memory.
    pub fn ror<B: MemoryBus + ?Sized>(
        &mut self,
        mut operand: Reference<'_, B>,
    ) -> Result<(), BusError> {
        operand.modify(|value| self.rotate_right(value)).map(drop)
    }

    pub fn ror_accumulator(&mut self) {
        self.accumulator = self.rotate_right(self.accumulator);
    }

    fn shift_left(&mut self, operand: Byte) -> Byte {
        let result = u16::from(operand) << 1;
        self.status.arithmetic(result);
        Byte::new(result as u8)
    }

    fn shift_right(&mut self, mut operand: Byte) -> Byte {
        let carry = operand.shift_right(false);
        self.status.logical(operand.into());
        self.status.set_carry(carry);
        operand
    }

    fn rotate_left(&mut self, mut operand: Byte) -> Byte {
        let mut carry = self.status.carry();
        operand.rotate_left(&mut carry);
        self.status.logical(operand.into());
        self.status.set_carry(carry);
        operand
    }

    fn rotate_right(&mut self, mut operand: Byte) -> Byte {
        let mut carry = self.status.carry();
        operand.rotate_right(&mut carry);
        self.status.logical(operand.into());
        self.status.set_carry(carry);
        operand
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::byte::Word;
    use crate::memory::FlatMemory;

    #[test]
    fn test_asl_accumulator_moves_bit_seven_to_carry() {
        let mut cpu = Processor::new();
        cpu.set_accumulator(Byte::new(0x80));
        cpu.asl_accumulator();

        assert_eq!(cpu.accumulator(), Byte::new(0x00));
        assert!(cpu.status().carry());
        assert!(cpu.status().zero());
    }

    #[test]
    fn test_ror_through_carry() {
        let mut cpu = Processor::new();
        cpu.status_mut().set_carry(true);
        cpu.set_accumulator(Byte::new(0x02));
        cpu.ror_accumulator();

        assert_eq!(cpu.accumulator(), Byte::new(0x81));
        assert!(!cpu.status().carry());
        assert!(cpu.status().negative());
    }

    #[test]
    fn test_lsr_memory() {
        let mut memory = FlatMemory::new();
        memory.load(0x0040, &[0x03]);
        let mut cpu = Processor::new();

        cpu.lsr(Reference::new(&mut memory, Word::new(0x0040))).unwrap();

        assert_eq!(memory.read(Word::new(0x0040)).unwrap(), Byte::new(0x01));
        assert!(cpu.status().carry());
        assert!(!cpu.status().negative());
    }

    #[test]
    fn test_rol_memory_takes_carry_in() {
        let mut memory = FlatMemory::new();
        memory.load(0x0041, &[0x40]);
        let mut cpu = Processor::new();
        cpu.status_mut().set_carry(true);

        cpu.rol(Reference::new(&mut memory, Word::new(0x0041))).unwrap();

        assert_eq!(memory.read(Word::new(0x0041)).unwrap(), Byte::new(0x81));
        assert!(!cpu.status().carry());
        assert!(cpu.status().negative());
    }
}
