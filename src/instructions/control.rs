//! # Control Flow Instructions
//!
//! This module implements control flow operations and interrupt entry:
//! - JMP, JSR, RTS: jumps and subroutine linkage
//! - RTI: return from interrupt
//! - BRK: software interrupt through the IRQ vector
//! - NOP
//! - IRQ, NMI and reset sequences
//!
//! JSR pushes the address of its own last byte (return address minus one) and RTS
//! adds the one back. BRK, IRQ and NMI share one entry sequence:
//!
//! 1. Push the program counter (high byte first)
//! 2. Push the status; bit 4 is set for BRK and clear for IRQ and NMI
//! 3. Set the I (interrupt disable) flag
//! 4. Load the program counter from the vector

use tracing::debug;

use crate::byte::{Byte, Word};
use crate::memory::{BusError, MemoryBus, Pointer};
use crate::processor::{Processor, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};

impl Processor {
    /// Executes the JMP (Jump) instruction.
    pub fn jmp(&mut self, target: Pointer) {
        self.program_counter = target.address();
    }

    /// Executes the JSR (Jump to Subroutine) instruction.
    ///
    /// Expects the program counter to already point past the three-byte
    /// instruction.
    pub fn jsr<B: MemoryBus + ?Sized>(
        &mut self,
        bus: &mut B,
        target: Pointer,
    ) -> Result<(), BusError> {
        self.stack.push_word(bus, self.program_counter - 1)?;
        self.program_counter = target.address();
        Ok(())
    }

    /// Executes the RTS (Return from Subroutine) instruction.
    pub fn rts<B: MemoryBus + ?Sized>(&mut self, bus: &mut B) -> Result<(), BusError> {
        self.program_counter = self.stack.pull_word(bus)? + 1;
        Ok(())
    }

    /// Executes the RTI (Return from Interrupt) instruction.
    ///
    /// Pulls the status, then the program counter. Unlike RTS the pulled address
    /// is used as-is.
    pub fn rti<B: MemoryBus + ?Sized>(&mut self, bus: &mut B) -> Result<(), BusError> {
        let status = self.stack.pull(bus)?;
        self.status.assign(status);
        self.program_counter = self.stack.pull_word(bus)?;
        Ok(())
    }

    /// Executes the BRK (Force Interrupt) instruction.
    ///
    /// The pushed return address is whatever the program counter holds on entry;
    /// the driver has already skipped BRK and its padding byte.
    pub fn brk<B: MemoryBus + ?Sized>(
        &mut self,
        bus: &mut B,
        vector: Pointer,
    ) -> Result<(), BusError> {
        let status = self.status.instruction_value();
        self.interrupt(bus, vector, status)
    }

    pub fn nop(&mut self) {}

    /// Services a maskable interrupt request.
    ///
    /// Returns `false` without touching any state when the I flag is set.
    pub fn irq<B: MemoryBus + ?Sized>(&mut self, bus: &mut B) -> Result<bool, BusError> {
        if self.status.interrupt_disable() {
            return Ok(false);
        }
        let status = self.status.interrupt_value();
        self.interrupt(bus, Pointer::new(IRQ_VECTOR), status)?;
        Ok(true)
    }

    /// Services a non-maskable interrupt. The I flag is not consulted.
    pub fn nmi<B: MemoryBus + ?Sized>(&mut self, bus: &mut B) -> Result<(), BusError> {
        let status = self.status.interrupt_value();
        self.interrupt(bus, Pointer::new(NMI_VECTOR), status)
    }

    /// Returns every register to its power-up value and loads the program counter
    /// from the reset vector. Nothing is pushed.
    pub fn reset<B: MemoryBus + ?Sized>(&mut self, bus: &mut B) -> Result<(), BusError> {
        *self = Self::new();
        self.program_counter = bus.read_word(RESET_VECTOR)?;
        debug!(pc = %self.program_counter, "reset");
        Ok(())
    }

    fn interrupt<B: MemoryBus + ?Sized>(
        &mut self,
        bus: &mut B,
        vector: Pointer,
        status: Byte,
    ) -> Result<(), BusError> {
        let return_address: Word = self.program_counter;
        self.stack.push_word(bus, return_address)?;
        self.stack.push(bus, status)?;
        self.status.set_interrupt_disable(true);
        self.program_counter = vector.reference(bus).get_word()?;
        debug!(
            vector = %vector.address(),
            from = %return_address,
            to = %self.program_counter,
            status = %status,
            "interrupt entry"
        );
        Ok(())
    }
}
