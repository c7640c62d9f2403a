//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the processor from the
//! devices that own the address space, together with the two accessor values that
//! instruction operands are expressed in:
//!
//! - [`Reference`]: a (bus, address) pair standing in for a memory lvalue. Reading it
//!   performs a bus read, assigning to it performs a bus write. Word-valued accesses
//!   are little-endian (low byte at `address`, high byte at `address + 1`).
//! - [`Pointer`]: the address-only counterpart, used for branch and jump targets and
//!   interrupt vectors.
//!
//! A `Reference` mutably borrows the bus, so it cannot outlive the instruction that
//! created it.
//!
//! ## Design Principles
//!
//! Unlike a bare 6502 system, the console bus treats an address claimed by no device
//! as a fatal condition. Every access therefore returns a `Result` carrying
//! [`BusError`], which the driving loop surfaces and never retries.

use std::fmt;

use thiserror::Error;

use crate::byte::{Byte, Word};

/// Kind of bus access that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::Read => f.write_str("read"),
            Access::Write => f.write_str("write"),
        }
    }
}

/// Errors raised by a memory bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BusError {
    /// No device claims the address.
    #[error("unhandled memory {access} at address 0x{address}")]
    Unmapped { address: Word, access: Access },
}

/// Memory bus trait for the processor to read and write bytes.
///
/// # Examples
///
/// ```
/// use lib2a03::{Byte, FlatMemory, MemoryBus, Word};
///
/// let mut mem = FlatMemory::new();
/// mem.write(Word::new(0x1234), Byte::new(0x42)).unwrap();
/// assert_eq!(mem.read(Word::new(0x1234)).unwrap(), Byte::new(0x42));
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    fn read(&self, address: Word) -> Result<Byte, BusError>;

    /// Writes a byte to the specified 16-bit address.
    fn write(&mut self, address: Word, data: Byte) -> Result<(), BusError>;

    /// Reads a little-endian word: low byte at `address`, high byte at `address + 1`.
    fn read_word(&self, address: Word) -> Result<Word, BusError> {
        let low = self.read(address)?;
        let high = self.read(address + 1)?;
        Ok(Word::from_bytes(high, low))
    }

    /// Writes a little-endian word: low byte at `address`, high byte at `address + 1`.
    fn write_word(&mut self, address: Word, data: Word) -> Result<(), BusError> {
        self.write(address, data.low())?;
        self.write(address + 1, data.high())
    }

    /// Checks if the IRQ line is asserted by any device on the bus.
    ///
    /// The line is level-sensitive: it stays active until every device that
    /// raised it has been acknowledged.
    fn irq_active(&self) -> bool {
        false
    }
}

/// Deferred read/write accessor bound to one bus address.
///
/// # Examples
///
/// ```
/// use lib2a03::{Byte, FlatMemory, Reference, Word};
///
/// let mut mem = FlatMemory::new();
/// let mut cell = Reference::new(&mut mem, Word::new(0x0010));
///
/// cell.set_word(Word::new(0xBEEF)).unwrap();
/// assert_eq!(cell.get().unwrap(), Byte::new(0xEF));
/// assert_eq!(cell.get_word().unwrap(), Word::new(0xBEEF));
/// ```
pub struct Reference<'a, B: MemoryBus + ?Sized> {
    bus: &'a mut B,
    address: Word,
}

impl<'a, B: MemoryBus + ?Sized> Reference<'a, B> {
    pub fn new(bus: &'a mut B, address: Word) -> Self {
        Self { bus, address }
    }

    pub fn address(&self) -> Word {
        self.address
    }

    pub fn get(&self) -> Result<Byte, BusError> {
        self.bus.read(self.address)
    }

    pub fn set(&mut self, data: Byte) -> Result<(), BusError> {
        self.bus.write(self.address, data)
    }

    pub fn get_word(&self) -> Result<Word, BusError> {
        self.bus.read_word(self.address)
    }

    pub fn set_word(&mut self, data: Word) -> Result<(), BusError> {
        self.bus.write_word(self.address, data)
    }

    /// Read-modify-write: reads the byte, applies `f`, writes the result back.
    pub fn modify(&mut self, f: impl FnOnce(Byte) -> Byte) -> Result<Byte, BusError> {
        let result = f(self.get()?);
        self.set(result)?;
        Ok(result)
    }

    pub fn pointer(&self) -> Pointer {
        Pointer::new(self.address)
    }
}

/// Address-only operand: a branch or jump target, or an interrupt vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pointer(Word);

impl Pointer {
    pub const fn new(address: Word) -> Self {
        Self(address)
    }

    pub const fn address(self) -> Word {
        self.0
    }

    /// Advances to the next address (wrapping) and returns the new pointer.
    pub fn increment(&mut self) -> Self {
        self.0 += 1;
        *self
    }

    /// Returns a pointer `offset` bytes further on, wrapping at 0xFFFF.
    pub fn offset(self, offset: u16) -> Self {
        Self(self.0 + offset)
    }

    /// Binds the pointer to a bus, yielding a [`Reference`] at its address.
    pub fn reference<B: MemoryBus + ?Sized>(self, bus: &mut B) -> Reference<'_, B> {
        Reference::new(bus, self.0)
    }
}

impl From<Word> for Pointer {
    fn from(address: Word) -> Self {
        Self(address)
    }
}

impl From<Pointer> for Word {
    fn from(pointer: Pointer) -> Self {
        pointer.0
    }
}

/// Simple 64KB flat memory implementation.
///
/// Every address is mapped to writable RAM, so accesses never fail. Useful for
/// exercising the processor in isolation from the console memory map.
///
/// # Examples
///
/// ```
/// use lib2a03::{Byte, FlatMemory, MemoryBus, Word};
///
/// let mem = FlatMemory::new();
/// assert_eq!(mem.read(Word::new(0xFFFF)).unwrap(), Byte::new(0x00));
/// ```
pub struct FlatMemory {
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Copies `bytes` into memory starting at `address`, wrapping at 0xFFFF.
    pub fn load(&mut self, address: u16, bytes: &[u8]) {
        for (i, &byte) in bytes.iter().enumerate() {
            self.data[address.wrapping_add(i as u16) as usize] = byte;
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, address: Word) -> Result<Byte, BusError> {
        Ok(Byte::new(self.data[address.value() as usize]))
    }

    fn write(&mut self, address: Word, data: Byte) -> Result<(), BusError> {
        self.data[address.value() as usize] = data.value();
        Ok(())
    }
}
