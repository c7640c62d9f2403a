//! Register block devices for the PPU and the APU/I/O chip.
//!
//! The picture and audio units are outside this crate. On the CPU bus they are
//! byte-addressable register files, and that is all these devices model: a value
//! written to a register reads back, mirrored across the block's address range.
//! A frontend that emulates the real chips reaches the register contents through
//! [`RegisterBlock::registers`] and [`RegisterBlock::registers_mut`].

use std::any::Any;

use tracing::trace;

use super::{Device, Segment};
use crate::byte::{Byte, Word};

/// Named bank of memory-mapped registers.
pub struct RegisterBlock {
    name: &'static str,
    registers: Segment,
}

impl RegisterBlock {
    /// `count` registers at `base..end`, mirrored every `count` bytes.
    pub fn new(name: &'static str, count: usize, base: u16, end: u32) -> Self {
        Self {
            name,
            registers: Segment::new(count, base, end),
        }
    }

    /// The 8 PPU registers, mirrored across 0x2000-0x3FFF.
    pub fn ppu() -> Self {
        Self::new("ppu", 8, 0x2000, 0x4000)
    }

    /// The 32 APU and I/O registers at 0x4000-0x401F.
    pub fn io() -> Self {
        Self::new("io", 0x20, 0x4000, 0x4020)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn registers(&self) -> &[u8] {
        self.registers.as_bytes()
    }

    pub fn registers_mut(&mut self) -> &mut Segment {
        &mut self.registers
    }
}

impl Device for RegisterBlock {
    fn contains(&self, address: Word) -> bool {
        self.registers.contains(address)
    }

    fn read(&self, address: Word) -> Byte {
        self.registers.read(address)
    }

    fn write(&mut self, address: Word, data: Byte) {
        trace!(block = self.name, address = %address, data = %data, "register write");
        self.registers.write(address, data);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
