//! # Register Transfer Instructions
//!
//! TAX, TAY, TXA, TYA and TSX copy a register and set N and Z from the copied
//! value. TXS writes the stack pointer and leaves the flags alone.

use crate::byte::Byte;
use crate::processor::Processor;

impl Processor {
    pub fn tax(&mut self) {
        self.x = self.transfer(self.accumulator);
    }

    pub fn tay(&mut self) {
        self.y = self.transfer(self.accumulator);
    }

    pub fn txa(&mut self) {
        self.accumulator = self.transfer(self.x);
    }

    pub fn tya(&mut self) {
        self.accumulator = self.transfer(self.y);
    }

    pub fn tsx(&mut self) {
        self.x = self.transfer(self.stack.pointer());
    }

    pub fn txs(&mut self) {
        self.stack.set_pointer(self.x);
    }

    fn transfer(&mut self, value: Byte) -> Byte {
        self.status.logical(value.into());
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_txs_does_not_touch_flags() {
        let mut cpu = Processor::new();
        cpu.set_x(Byte::new(0x00));
        cpu.status_mut().set_zero(false);

        cpu.txs();

        assert_eq!(cpu.stack_pointer(), Byte::new(0x00));
        assert!(!cpu.status().zero());
    }

    #[test]
    fn test_tsx_sets_flags() {
        let mut cpu = Processor::new();
        cpu.tsx();

        assert_eq!(cpu.x(), Byte::new(0xFF));
        assert!(cpu.status().negative());
    }
}
