//! # Increment and Decrement Instructions
//!
//! INC and DEC modify memory in place; INX, INY, DEX and DEY modify the index
//! registers. All of them wrap at 8 bits and set N and Z from the result.

use crate::byte::Byte;
use crate::memory::{BusError, MemoryBus, Reference};
use crate::processor::Processor;

impl Processor {
    /// Executes the INC (Increment Memory) instruction.
    pub fn inc<B: MemoryBus + ?Sized>(
        &mut self,
        mut operand: Reference<'_, B>,
    ) -> Result<(), BusError> {
        let result = self.adjust(operand.get()?, 1);
        operand.set(result)
    }

    /// Executes the DEC (Decrement Memory) instruction.
    pub fn dec<B: MemoryBus + ?Sized>(
        &mut self,
        mut operand: Reference<'_, B>,
    ) -> Result<(), BusError> {
        let result = self.adjust(operand.get()?, 0xFF);
        operand.set(result)
    }

    pub fn inx(&mut self) {
        self.x = self.adjust(self.x, 1);
    }

    pub fn iny(&mut self) {
        self.y = self.adjust(self.y, 1);
    }

    pub fn dex(&mut self) {
        self.x = self.adjust(self.x, 0xFF);
    }

    pub fn dey(&mut self) {
        self.y = self.adjust(self.y, 0xFF);
    }

    fn adjust(&mut self, value: Byte, delta: u8) -> Byte {
        let result = value + delta;
        self.status.logical(result.into());
        result
    }
}
