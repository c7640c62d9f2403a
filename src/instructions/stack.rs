//! # Stack Instructions
//!
//! - PHA, PLA: push and pull the accumulator (PLA sets N and Z)
//! - PHP, PLP: push and pull the status register
//!
//! PHP pushes the status with bits 4 and 5 set. PLP restores the six physical
//! flags and ignores bits 4 and 5 of the pulled byte.

use crate::memory::{BusError, MemoryBus};
use crate::processor::Processor;

impl Processor {
    /// Executes the PHA (Push Accumulator) instruction.
    pub fn pha<B: MemoryBus + ?Sized>(&mut self, bus: &mut B) -> Result<(), BusError> {
        self.stack.push(bus, self.accumulator)
    }

    /// Executes the PHP (Push Processor Status) instruction.
    pub fn php<B: MemoryBus + ?Sized>(&mut self, bus: &mut B) -> Result<(), BusError> {
        self.stack.push(bus, self.status.instruction_value())
    }

    /// Executes the PLA (Pull Accumulator) instruction.
    pub fn pla<B: MemoryBus + ?Sized>(&mut self, bus: &mut B) -> Result<(), BusError> {
        self.accumulator = self.stack.pull(bus)?;
        self.status.logical(self.accumulator.into());
        Ok(())
    }

    /// Executes the PLP (Pull Processor Status) instruction.
    pub fn plp<B: MemoryBus + ?Sized>(&mut self, bus: &mut B) -> Result<(), BusError> {
        let value = self.stack.pull(bus)?;
        self.status.assign(value);
        Ok(())
    }
}
