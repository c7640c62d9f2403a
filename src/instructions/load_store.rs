//! # Load and Store Instructions
//!
//! - LDA, LDX, LDY: load a register and set N and Z
//! - STA, STX, STY: write a register through a memory reference, flags untouched

use crate::byte::Byte;
use crate::memory::{BusError, MemoryBus, Reference};
use crate::processor::Processor;

impl Processor {
    /// Executes the LDA (Load Accumulator) instruction.
    pub fn lda(&mut self, operand: Byte) {
        self.accumulator = self.load(operand);
    }

    /// Executes the LDX (Load X Register) instruction.
    pub fn ldx(&mut self, operand: Byte) {
        self.x = self.load(operand);
    }

    /// Executes the LDY (Load Y Register) instruction.
    pub fn ldy(&mut self, operand: Byte) {
        self.y = self.load(operand);
    }

    /// Executes the STA (Store Accumulator) instruction.
    pub fn sta<B: MemoryBus + ?Sized>(
        &self,
        mut operand: Reference<'_, B>,
    ) -> Result<(), BusError> {
        operand.set(self.accumulator)
    }

    /// Executes the STX (Store X Register) instruction.
    pub fn stx<B: MemoryBus + ?Sized>(
        &self,
        mut operand: Reference<'_, B>,
    ) -> Result<(), BusError> {
        operand.set(self.x)
    }

    /// Executes the STY (Store Y Register) instruction.
    pub fn sty<B: MemoryBus + ?Sized>(
        &self,
        mut operand: Reference<'_, B>,
    ) -> Result<(), BusError> {
        operand.set(self.y)
    }

    fn load(&mut self, operand: Byte) -> Byte {
        self.status.logical(operand.into());
        operand
    }
}
