//! # Hardware Stack
//!
//! A 256-byte window of the bus at 0x0100-0x01FF addressed through an 8-bit
//! pointer. The stack grows downward: `push` writes at `0x0100 + pointer` and then
//! decrements, `pull` increments and then reads. The pointer wraps in both
//! directions without error, exactly like the hardware.

use crate::byte::{Byte, Word};
use crate::memory::{BusError, MemoryBus};

/// Base address of the stack page.
pub const STACK_PAGE: Byte = Byte(0x01);

/// Stack pointer plus the bus window it addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stack {
    pointer: Byte,
}

impl Default for Stack {
    fn default() -> Self {
        Self::new(Byte::new(0xFF))
    }
}

impl Stack {
    pub fn new(pointer: Byte) -> Self {
        Self { pointer }
    }

    pub fn pointer(&self) -> Byte {
        self.pointer
    }

    pub fn set_pointer(&mut self, pointer: Byte) {
        self.pointer = pointer;
    }

    fn address(&self) -> Word {
        Word::from_bytes(STACK_PAGE, self.pointer)
    }

    pub fn push<B: MemoryBus + ?Sized>(&mut self, bus: &mut B, value: Byte) -> Result<(), BusError> {
        bus.write(self.address(), value)?;
        self.pointer.decrement();
        Ok(())
    }

    /// Pushes the high byte first so the word reads back little-endian.
    pub fn push_word<B: MemoryBus + ?Sized>(&mut self, bus: &mut B, value: Word) -> Result<(), BusError> {
        self.push(bus, value.high())?;
        self.push(bus, value.low())
    }

    pub fn pull<B: MemoryBus + ?Sized>(&mut self, bus: &mut B) -> Result<Byte, BusError> {
        self.pointer.increment();
        bus.read(self.address())
    }

    pub fn pull_word<B: MemoryBus + ?Sized>(&mut self, bus: &mut B) -> Result<Word, BusError> {
        let low = self.pull(bus)?;
        let high = self.pull(bus)?;
        Ok(Word::from_bytes(high, low))
    }

    /// Reads the top of the stack without moving the pointer.
    pub fn peek<B: MemoryBus + ?Sized>(&self, bus: &B) -> Result<Byte, BusError> {
        bus.read(Word::from_bytes(STACK_PAGE, self.pointer + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::FlatMemory;

    #[test]
    fn test_push_writes_then_decrements() {
        let mut mem = FlatMemory::new();
        let mut stack = Stack::default();

        stack.push(&mut mem, Byte::new(0x42)).unwrap();

        assert_eq!(mem.read(Word::new(0x01FF)).unwrap(), Byte::new(0x42));
        assert_eq!(stack.pointer(), Byte::new(0xFE));
        assert_eq!(stack.peek(&mem).unwrap(), Byte::new(0x42));
    }

    #[test]
    fn test_push_pull_is_lifo() {
        let mut mem = FlatMemory::new();
        let mut stack = Stack::new(Byte::new(0x80));

        stack.push(&mut mem, Byte::new(0x01)).unwrap();
        stack.push(&mut mem, Byte::new(0x02)).unwrap();

        assert_eq!(stack.pull(&mut mem).unwrap(), Byte::new(0x02));
        assert_eq!(stack.pull(&mut mem).unwrap(), Byte::new(0x01));
        assert_eq!(stack.pointer(), Byte::new(0x80));
    }

    #[test]
    fn test_word_layout_is_high_then_low() {
        let mut mem = FlatMemory::new();
        let mut stack = Stack::default();

        stack.push_word(&mut mem, Word::new(0xABCD)).unwrap();

        assert_eq!(mem.read(Word::new(0x01FF)).unwrap(), Byte::new(0xAB));
        assert_eq!(mem.read(Word::new(0x01FE)).unwrap(), Byte::new(0xCD));
        assert_eq!(stack.pull_word(&mut mem).unwrap(), Word::new(0xABCD));
    }

    #[test]
    fn test_pointer_wraps_both_ways() {
        let mut mem = FlatMemory::new();
        let mut stack = Stack::new(Byte::new(0x00));

        stack.push(&mut mem, Byte::new(0x99)).unwrap();
        assert_eq!(stack.pointer(), Byte::new(0xFF));
        assert_eq!(mem.read(Word::new(0x0100)).unwrap(), Byte::new(0x99));

        assert_eq!(stack.pull(&mut mem).unwrap(), Byte::new(0x99));
        assert_eq!(stack.pointer(), Byte::new(0x00));
    }
}
